//! Detect keys missing from a config file written by an older version.

use crate::errors::AppResult;
use serde_yaml::Value;

pub const KNOWN_KEYS: [&str; 5] = ["data_csv", "data_xml", "host", "port", "cache_ttl_secs"];

/// Keys of [`KNOWN_KEYS`] absent from the YAML document.
pub fn missing_keys(content: &str) -> AppResult<Vec<&'static str>> {
    let yaml: Value = if content.trim().is_empty() {
        Value::Null
    } else {
        serde_yaml::from_str(content)?
    };

    let missing = match yaml.as_mapping() {
        Some(map) => KNOWN_KEYS
            .iter()
            .copied()
            .filter(|k| !map.contains_key(Value::String(k.to_string())))
            .collect(),
        None => KNOWN_KEYS.to_vec(),
    };
    Ok(missing)
}

/// Keys present in the file that this version does not know.
pub fn unknown_keys(content: &str) -> AppResult<Vec<String>> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    let yaml: Value = serde_yaml::from_str(content)?;
    let Some(map) = yaml.as_mapping() else {
        return Ok(Vec::new());
    };

    Ok(map
        .keys()
        .filter_map(Value::as_str)
        .filter(|k| !KNOWN_KEYS.contains(k))
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_missing_keys() {
        let missing = missing_keys("data_csv: a.csv\nport: 1\n").unwrap();
        assert_eq!(missing, vec!["data_xml", "host", "cache_ttl_secs"]);
    }

    #[test]
    fn empty_file_misses_everything() {
        assert_eq!(missing_keys("").unwrap(), KNOWN_KEYS.to_vec());
    }

    #[test]
    fn reports_unknown_keys() {
        let unknown = unknown_keys("port: 1\ndatabase: x.sqlite\n").unwrap();
        assert_eq!(unknown, vec!["database".to_string()]);
    }
}
