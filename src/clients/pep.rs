use crate::domain::Locale;
use crate::error::{Result, ScraperError};
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Client;
use tracing::{debug, info};

pub const DEFAULT_BASE_URL: &str = "https://pep.org.ua";
pub const DEFAULT_MAX_BODY_BYTES: usize = 5 * 1024 * 1024;

static PERSON_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]{1,64}$").expect("invalid regex: person id"));

/// Fetches raw person pages from the PEP registry.
#[derive(Debug, Clone)]
pub struct PepClient {
    client: Client,
    base_url: String,
    max_body_bytes: usize,
}

impl PepClient {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_max_body_bytes(mut self, max_body_bytes: usize) -> Self {
        self.max_body_bytes = max_body_bytes;
        self
    }

    pub fn person_url(&self, locale: Locale, person_id: &str) -> Result<String> {
        if !PERSON_ID.is_match(person_id) {
            return Err(ScraperError::InvalidInput(format!(
                "person id must be 1-64 characters of [A-Za-z0-9_-], got {person_id:?}"
            )));
        }

        Ok(format!("{}/{}/person/{}", self.base_url, locale, person_id))
    }

    /// GETs the person page and returns its body as text.
    ///
    /// Non-2xx responses and bodies over the configured size limit are errors.
    pub async fn fetch(&self, locale: Locale, person_id: &str) -> Result<String> {
        let url = self.person_url(locale, person_id)?;
        info!("Fetching person page {url}");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ScraperError::HttpStatus {
                status: status.as_u16(),
                url,
            });
        }

        if let Some(length) = response.content_length() {
            let length = usize::try_from(length).unwrap_or(usize::MAX);
            if length > self.max_body_bytes {
                return Err(ScraperError::ResponseTooLarge {
                    limit: self.max_body_bytes,
                    actual: length,
                });
            }
        }

        let body = response.text().await?;
        if body.len() > self.max_body_bytes {
            return Err(ScraperError::ResponseTooLarge {
                limit: self.max_body_bytes,
                actual: body.len(),
            });
        }

        debug!(%status, bytes = body.len(), "Fetched person page");
        Ok(body)
    }
}
