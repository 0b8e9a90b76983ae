use crate::clients::PepClient;
use crate::config::Config;
use crate::domain::{Locale, ProfileRecord};
use crate::error::Result;
use crate::scrapers::ProfileExtractor;
use tracing::info;

/// Fetches and extracts person profiles for one locale.
#[derive(Debug, Clone)]
pub struct PersonHandler {
    client: PepClient,
    extractor: ProfileExtractor,
}

impl PersonHandler {
    pub fn new(client: PepClient, locale: Locale) -> Result<Self> {
        let extractor = ProfileExtractor::for_locale(locale)?;
        info!("Created person handler for locale {locale}");
        Ok(Self { client, extractor })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let client = PepClient::new(config.http_client.clone())
            .with_base_url(config.args.base_url.as_str())
            .with_max_body_bytes(config.args.max_body_bytes);

        Self::new(client, config.locale)
    }

    pub fn locale(&self) -> Locale {
        self.extractor.locale()
    }

    pub async fn handle(&self, person_id: &str) -> Result<ProfileRecord> {
        let locale = self.locale();
        info!(person_id, %locale, "Scraping person profile");

        let html = self.client.fetch(locale, person_id).await?;
        let record = self.extractor.extract(&html)?;

        info!(
            person_id,
            profile_name = %record.body.top.profile_name,
            "Scraped person profile"
        );
        Ok(record)
    }
}
