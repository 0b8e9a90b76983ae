pub mod clients;
pub mod config;
pub mod domain;
pub mod error;
pub mod scrapers;
pub mod services;
mod utils;

pub use clients::PepClient;
pub use domain::{Locale, ProfileRecord};
pub use error::{Result, ScraperError};
pub use scrapers::ProfileExtractor;
pub use services::PersonHandler;
