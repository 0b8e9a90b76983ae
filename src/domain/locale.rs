use crate::error::{Result, ScraperError};
use std::fmt;
use std::str::FromStr;

/// Language variant of the registry site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locale {
    Uk,
}

impl Locale {
    pub fn code(&self) -> &'static str {
        match self {
            Locale::Uk => "uk",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = ScraperError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "uk" => Ok(Locale::Uk),
            other => Err(ScraperError::InvalidInput(format!(
                "unsupported locale: {other:?}"
            ))),
        }
    }
}
