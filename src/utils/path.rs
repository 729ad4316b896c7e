//! Path utilities: expand `~/` in configured data paths.

use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_paths_are_untouched() {
        assert_eq!(expand_tilde("/srv/data.csv"), PathBuf::from("/srv/data.csv"));
    }

    #[test]
    fn tilde_is_expanded_when_home_is_known() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde("~/data.csv"), home.join("data.csv"));
        }
    }
}
