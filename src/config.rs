use anyhow::Result;
use config::Config;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    Fixtures,
    Remote,
}

#[derive(Clone, Deserialize)]
pub struct AppConfig {
    pub api_base_url: String,
    pub bind_address: String,
    pub data_source: DataSource,
    pub request_timeout_secs: u64,
    pub search_delay_ms: u64,
    pub max_retries: Option<usize>,
    pub top_words_limit: Option<usize>,
}

impl AppConfig {
    pub fn validate(&self) -> Result<()> {
        if self.api_base_url.trim().is_empty() {
            return Err(anyhow::anyhow!("api_base_url cannot be empty"));
        }

        if self.request_timeout_secs == 0 || self.request_timeout_secs > 120 {
            return Err(anyhow::anyhow!(
                "request_timeout_secs must be between 1 and 120"
            ));
        }

        if self.search_delay_ms > 10_000 {
            return Err(anyhow::anyhow!("search_delay_ms must be at most 10000"));
        }

        if let Some(max_retries) = self.max_retries {
            if max_retries > 10 {
                return Err(anyhow::anyhow!("max_retries must be at most 10"));
            }
        }

        if let Some(limit) = self.top_words_limit {
            if limit == 0 || limit > 100 {
                return Err(anyhow::anyhow!("top_words_limit must be between 1 and 100"));
            }
        }

        Ok(())
    }
}

pub fn load_config() -> Result<AppConfig> {
    dotenvy::dotenv().ok();

    let settings = Config::builder()
        .set_default("api_base_url", "http://localhost:5000/api")?
        .set_default("bind_address", "0.0.0.0:3000")?
        .set_default("data_source", "fixtures")?
        .set_default("request_timeout_secs", 20_i64)?
        .set_default("search_delay_ms", 800_i64)?
        .add_source(config::File::with_name("config").required(false))
        .add_source(config::Environment::with_prefix("REVIEW_INSIGHTS"))
        .build()?;

    let config: AppConfig = settings.try_deserialize()?;
    config.validate()?;

    Ok(config)
}
