use serde::{Deserialize, Serialize};

use crate::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// Limits applied when sanitizing user-entered page sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SelectionConfig {
    /// Page size used initially and whenever input fails to parse.
    pub default_page_size: usize,
    /// Upper bound for the page size, inclusive.
    pub max_page_size: usize,
}

impl SelectionConfig {
    /// Repair inconsistent limits: `max >= 1` and `1 <= default <= max`.
    pub fn normalized(self) -> Self {
        let max_page_size = self.max_page_size.max(1);
        Self {
            default_page_size: self.default_page_size.clamp(1, max_page_size),
            max_page_size,
        }
    }
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: MAX_PAGE_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_dashboard_limits() {
        let cfg = SelectionConfig::default();
        assert_eq!(cfg.default_page_size, 10);
        assert_eq!(cfg.max_page_size, 500);
    }

    #[test]
    fn normalized_repairs_limits() {
        let cfg = SelectionConfig {
            default_page_size: 0,
            max_page_size: 0,
        }
        .normalized();
        assert_eq!(cfg.max_page_size, 1);
        assert_eq!(cfg.default_page_size, 1);

        let cfg = SelectionConfig {
            default_page_size: 50,
            max_page_size: 20,
        }
        .normalized();
        assert_eq!(cfg.default_page_size, 20);
    }

    #[test]
    fn partial_config_fills_defaults() {
        let cfg: SelectionConfig = serde_json::from_str(r#"{"maxPageSize": 100}"#).unwrap();
        assert_eq!(cfg.max_page_size, 100);
        assert_eq!(cfg.default_page_size, 10);
    }
}
