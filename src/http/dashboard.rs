//! Dashboard pages.
//!
//! Every chart kind is served by the same page; the script only knows the
//! kind slug. It fills the user dropdown, and on selection fetches the
//! server-rendered chart and the avatar. Each selection bumps a token and
//! late responses for an older selection are dropped.

use crate::models::ChartKind;

const PAGE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Presence analyzer | __TITLE__</title>
  <style>
    body { font-family: sans-serif; margin: 2em; }
    nav a { margin-right: 1em; }
    nav a.active { font-weight: bold; }
    #chart-div { width: 900px; height: 500px; }
    #avatar { max-height: 96px; }
  </style>
  <script src="https://www.gstatic.com/charts/loader.js"></script>
</head>
<body>
  <h1>Presence analyzer</h1>
  <nav>__NAV__</nav>
  <h2>__TITLE__</h2>
  <p>
    <select id="user-id" hidden><option value="">--</option></select>
    <span id="loading">Loading...</span>
  </p>
  <img id="avatar" alt="avatar" hidden>
  <div id="chart-div"></div>
  <script>
    google.charts.load('current', {packages: ['corechart', 'timeline'], language: 'en'});
    (function () {
      var kind = '__KIND__';
      var loading = document.getElementById('loading');
      var dropdown = document.getElementById('user-id');
      var chartDiv = document.getElementById('chart-div');
      var avatar = document.getElementById('avatar');
      var current = 0;

      function show(el, on) { el.hidden = !on; }
      function getJSON(url) {
        return fetch(url).then(function (r) {
          if (!r.ok) { throw new Error(r.status + ' ' + r.statusText); }
          return r.json();
        });
      }

      getJSON('/api/v1/users').then(function (users) {
        users.forEach(function (u) {
          var opt = document.createElement('option');
          opt.value = u.user_id;
          opt.textContent = u.name;
          dropdown.appendChild(opt);
        });
        show(dropdown, true);
        show(loading, false);
      });

      dropdown.addEventListener('change', function () {
        var id = dropdown.value;
        if (!id) { return; }
        var token = ++current;

        show(loading, true);
        show(chartDiv, false);
        show(avatar, false);

        getJSON('/api/v1/charts/' + kind + '/' + id).then(function (view) {
          if (token !== current) { return; }
          chartDiv.textContent = '';
          show(chartDiv, true);
          if (view.status === 'placeholder') {
            chartDiv.textContent = view.message;
          } else {
            google.charts.setOnLoadCallback(function () {
              if (token !== current) { return; }
              var chart = new google.visualization[view.chart_type](chartDiv);
              chart.draw(new google.visualization.DataTable(view.data), view.options);
            });
          }
          show(loading, false);
        }).catch(function (err) {
          if (token !== current) { return; }
          chartDiv.textContent = 'Could not load data: ' + err.message;
          show(chartDiv, true);
          show(loading, false);
        });

        getJSON('/api/v1/users/' + id).then(function (url) {
          if (token !== current) { return; }
          avatar.src = url;
          show(avatar, true);
        }).catch(function () {});
      });
    })();
  </script>
</body>
</html>
"##;

const NOT_FOUND_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>Presence analyzer | Not found</title></head>
<body>
  <h1>Page not found</h1>
  <p>There is no page called <code>__PAGE__</code>.</p>
  <nav>__NAV__</nav>
</body>
</html>
"##;

fn nav(active: Option<ChartKind>) -> String {
    ChartKind::ALL
        .iter()
        .map(|k| {
            let class = if Some(*k) == active { " class=\"active\"" } else { "" };
            format!("<a href=\"/{}\"{}>{}</a>", k.page(), class, k.title())
        })
        .collect::<Vec<_>>()
        .join("")
}

/// Minimal HTML escaping for text echoed back into a page.
fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

pub fn render_page(kind: ChartKind) -> String {
    PAGE_TEMPLATE
        .replace("__TITLE__", kind.title())
        .replace("__NAV__", &nav(Some(kind)))
        .replace("__KIND__", kind.slug())
}

pub fn render_not_found(page: &str) -> String {
    NOT_FOUND_TEMPLATE
        .replace("__PAGE__", &escape(page))
        .replace("__NAV__", &nav(None))
}
