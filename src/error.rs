use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScraperError {
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("HTTP {status} from {url}")]
    HttpStatus { status: u16, url: String },
    #[error("Response body of {actual} bytes exceeds the {limit} byte limit")]
    ResponseTooLarge { limit: usize, actual: usize },
    #[error("Structure mismatch in {section} section: missing {element}")]
    StructureMismatch {
        section: &'static str,
        element: String,
    },
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Selector error: {0}")]
    Selector(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ScraperError {
    pub(crate) fn missing(section: &'static str, element: impl Into<String>) -> Self {
        Self::StructureMismatch {
            section,
            element: element.into(),
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    pub fn is_structure_mismatch(&self) -> bool {
        matches!(self, Self::StructureMismatch { .. })
    }
}

pub type Result<T> = std::result::Result<T, ScraperError>;
