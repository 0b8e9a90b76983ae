use crate::config::cli::Args;
use crate::domain::Locale;
use crate::error::Result;
use reqwest::Client;
use std::time::Duration;
use tracing::info;

pub mod cli;

pub struct Config {
    pub args: Args,
    pub locale: Locale,
    pub http_client: Client,
}

impl Config {
    pub fn from_args(args: Args) -> Result<Self> {
        let locale = args.locale.parse::<Locale>()?;

        let http_client = Client::builder()
            .timeout(Duration::from_secs(args.timeout_secs))
            .user_agent(format!(
                "{}/{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;

        info!(%locale, base_url = %args.base_url, "Loaded config");

        Ok(Self {
            args,
            locale,
            http_client,
        })
    }
}
