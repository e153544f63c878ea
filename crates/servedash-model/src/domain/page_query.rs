use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{ParseError, SelectionConfig};

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const MAX_PAGE_SIZE: usize = 500;

/// Which pagination parameter a `set_page` call targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PageKey {
    PageNo,
    PageSize,
}

impl PageKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageKey::PageNo => "pageNo",
            PageKey::PageSize => "pageSize",
        }
    }
}

impl fmt::Display for PageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for PageKey {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pageNo" => Ok(PageKey::PageNo),
            "pageSize" => Ok(PageKey::PageSize),
            _ => Err(ParseError::PageKey(s.to_string())),
        }
    }
}

/// Requested page number and page size.
///
/// `page_no` is kept exactly as requested and may be out of range; it is
/// clamped when a page is sliced. The constructors keep `page_size` within the
/// configured limits and deserializing applies the default limits. Writing the
/// field directly bypasses both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawPageQuery")]
pub struct PageQuery {
    pub page_no: i64,
    pub page_size: usize,
}

/// Wire form of [`PageQuery`] before the page size is sanitized.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPageQuery {
    #[serde(default = "first_page")]
    page_no: i64,
    #[serde(default)]
    page_size: i64,
}

fn first_page() -> i64 {
    1
}

impl From<RawPageQuery> for PageQuery {
    fn from(raw: RawPageQuery) -> Self {
        PageQuery::new()
            .with_page_no(raw.page_no)
            .with_page_size(raw.page_size, &SelectionConfig::default())
    }
}

impl PageQuery {
    pub fn new() -> Self {
        Self {
            page_no: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Start from the configured default page size.
    pub fn with_config(cfg: &SelectionConfig) -> Self {
        Self {
            page_no: 1,
            page_size: cfg.normalized().default_page_size,
        }
    }

    pub fn with_page_no(mut self, page_no: i64) -> Self {
        self.page_no = page_no;
        self
    }

    /// Set the page size from an integer, applying the sanitizing rules of
    /// [`PageQuery::sanitize_page_size`].
    pub fn with_page_size(mut self, page_size: i64, cfg: &SelectionConfig) -> Self {
        let cfg = cfg.normalized();
        self.page_size = if page_size <= 0 {
            cfg.default_page_size
        } else {
            usize::try_from(page_size)
                .unwrap_or(usize::MAX)
                .min(cfg.max_page_size)
        };
        self
    }

    /// Turn user-entered page size text into a usable page size.
    ///
    /// Anything that is not a positive number yields the default page size;
    /// positive numbers are clamped to `[1, max_page_size]` and truncated.
    pub fn sanitize_page_size(raw: &str, cfg: &SelectionConfig) -> usize {
        let cfg = cfg.normalized();
        match raw.trim().parse::<f64>() {
            Ok(n) if n > 0.0 => n.min(cfg.max_page_size as f64).max(1.0) as usize,
            _ => cfg.default_page_size,
        }
    }

    /// Turn user-entered page number text into a page request.
    ///
    /// Fractions are truncated toward zero. Unparsable input requests page 1.
    pub fn parse_page_no(raw: &str) -> i64 {
        let raw = raw.trim();
        if let Ok(n) = raw.parse::<i64>() {
            return n;
        }
        match raw.parse::<f64>() {
            Ok(n) if n.is_finite() => n.trunc() as i64,
            _ => 1,
        }
    }
}

impl Default for PageQuery {
    fn default() -> Self {
        Self::new()
    }
}
