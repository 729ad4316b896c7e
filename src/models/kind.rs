use crate::errors::AppError;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The four presence statistics offered by the API and the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum ChartKind {
    MeanTimeWeekday,
    PresenceWeekday,
    PresenceStartEnd,
    MonthlyPresence,
}

impl ChartKind {
    pub const ALL: [ChartKind; 4] = [
        ChartKind::PresenceWeekday,
        ChartKind::MeanTimeWeekday,
        ChartKind::PresenceStartEnd,
        ChartKind::MonthlyPresence,
    ];

    /// Path segment used by the API, e.g. `/api/v1/{slug}/{id}`.
    pub fn slug(&self) -> &'static str {
        match self {
            ChartKind::MeanTimeWeekday => "mean_time_weekday",
            ChartKind::PresenceWeekday => "presence_weekday",
            ChartKind::PresenceStartEnd => "presence_start_end",
            ChartKind::MonthlyPresence => "monthly_presence",
        }
    }

    pub fn from_slug(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.slug() == s)
    }

    /// Dashboard page name, e.g. `presence_weekday.html`.
    pub fn page(&self) -> String {
        format!("{}.html", self.slug())
    }

    pub fn from_page(page: &str) -> Option<Self> {
        page.strip_suffix(".html").and_then(Self::from_slug)
    }

    /// Human title used in the dashboard navigation.
    pub fn title(&self) -> &'static str {
        match self {
            ChartKind::MeanTimeWeekday => "Presence mean time",
            ChartKind::PresenceWeekday => "Presence by weekday",
            ChartKind::PresenceStartEnd => "Presence start-end",
            ChartKind::MonthlyPresence => "Monthly presence",
        }
    }

    pub fn endpoint(&self, user_id: u32) -> String {
        format!("/api/v1/{}/{}", self.slug(), user_id)
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for ChartKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_slug(s).ok_or_else(|| AppError::UnknownChart(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_and_page_round_trip() {
        for kind in ChartKind::ALL {
            assert_eq!(ChartKind::from_slug(kind.slug()), Some(kind));
            assert_eq!(ChartKind::from_page(&kind.page()), Some(kind));
        }
    }

    #[test]
    fn unknown_page_is_rejected() {
        assert_eq!(ChartKind::from_page("presence_weekday"), None);
        assert_eq!(ChartKind::from_page("admin.html"), None);
        assert!("nope".parse::<ChartKind>().is_err());
    }

    #[test]
    fn endpoint_contains_user() {
        assert_eq!(
            ChartKind::MonthlyPresence.endpoint(10),
            "/api/v1/monthly_presence/10"
        );
    }
}
