use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
    /// Registry identifier of the person to scrape
    pub person_id: String,

    /// Site locale to fetch and extract
    #[arg(long, env = "PEP_LOCALE", default_value = "uk")]
    pub locale: String,

    /// Registry base URL
    #[arg(long, env = "PEP_BASE_URL", default_value = crate::clients::DEFAULT_BASE_URL)]
    pub base_url: String,

    /// HTTP request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,

    /// Largest response body handed to the HTML parser
    #[arg(long, default_value_t = crate::clients::DEFAULT_MAX_BODY_BYTES)]
    pub max_body_bytes: usize,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Print JSON on a single line
    #[arg(long)]
    pub compact: bool,
}
