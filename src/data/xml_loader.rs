//! Users XML loader.
//!
//! ```xml
//! <intranet>
//!   <server><host>intranet.example.com</host><protocol>https</protocol></server>
//!   <users>
//!     <user id="10"><avatar>/api/images/users/10</avatar><name>User 10</name></user>
//!   </users>
//! </intranet>
//! ```

use crate::errors::AppResult;
use crate::models::{User, UserDirectory, UserId};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Deserialize)]
struct Intranet {
    server: Server,
    #[serde(default)]
    users: Users,
}

#[derive(Debug, Deserialize)]
struct Server {
    host: String,
    protocol: String,
}

#[derive(Debug, Default, Deserialize)]
struct Users {
    #[serde(default, rename = "user")]
    entries: Vec<XmlUser>,
}

#[derive(Debug, Deserialize)]
struct XmlUser {
    #[serde(rename = "@id", default)]
    id: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    avatar: Option<String>,
}

impl XmlUser {
    fn into_user(self, base: &str) -> Option<User> {
        let user_id: UserId = self.id.trim().parse().ok()?;
        Some(User {
            user_id,
            name: self.name?.trim().to_string(),
            avatar: format!("{}{}", base, self.avatar?.trim()),
        })
    }
}

/// Load the user directory from an XML file on disk.
pub fn load_users(path: &Path) -> AppResult<UserDirectory> {
    let content = std::fs::read_to_string(path)?;
    let users = parse_users(&content)?;
    info!(path = %path.display(), users = users.len(), "user directory loaded");
    Ok(users)
}

/// Parse the user directory; avatar paths are made absolute with the
/// `<server>` protocol and host.
pub fn parse_users(content: &str) -> AppResult<UserDirectory> {
    let doc: Intranet = quick_xml::de::from_str(content)?;
    let base = format!("{}://{}", doc.server.protocol.trim(), doc.server.host.trim());

    let mut dir = UserDirectory::new();
    for (i, u) in doc.users.entries.into_iter().enumerate() {
        let raw_id = u.id.clone();
        match u.into_user(&base) {
            Some(user) => dir.insert(user),
            None => debug!(entry = i, id = %raw_id, "skipping malformed user entry"),
        }
    }
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<intranet>
  <server>
    <host>intranet.example.com</host>
    <port>443</port>
    <protocol>https</protocol>
  </server>
  <users>
    <user id="141">
      <avatar>/api/images/users/141</avatar>
      <name>Adam P.</name>
    </user>
    <user id="176">
      <avatar>/api/images/users/176</avatar>
      <name>Adrian K.</name>
    </user>
  </users>
</intranet>"#;

    #[test]
    fn parses_users_with_absolute_avatars() {
        let dir = parse_users(SAMPLE).unwrap();
        assert_eq!(dir.len(), 2);

        let adam = dir.get(141).unwrap();
        assert_eq!(adam.name, "Adam P.");
        assert_eq!(
            dir.avatar(176),
            Some("https://intranet.example.com/api/images/users/176")
        );
    }

    #[test]
    fn missing_users_section_gives_empty_directory() {
        let xml = "<intranet><server><host>h</host><protocol>http</protocol></server></intranet>";
        let dir = parse_users(xml).unwrap();
        assert!(dir.is_empty());
    }

    #[test]
    fn malformed_user_entries_are_skipped() {
        let xml = r#"<intranet>
  <server><host>h</host><protocol>http</protocol></server>
  <users>
    <user id="abc"><avatar>/a</avatar><name>Bad Id</name></user>
    <user id="5"><avatar>/a/5</avatar></user>
    <user><avatar>/a</avatar><name>No Id</name></user>
    <user id="7"><avatar>/a/7</avatar><name>Good</name></user>
  </users>
</intranet>"#;
        let dir = parse_users(xml).unwrap();
        assert_eq!(dir.len(), 1);
        assert_eq!(dir.get(7).unwrap().name, "Good");
        assert_eq!(dir.avatar(7), Some("http://h/a/7"));
    }

    #[test]
    fn missing_server_is_an_error() {
        assert!(parse_users("<intranet><users/></intranet>").is_err());
    }
}
