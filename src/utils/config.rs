use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub log_level: String,
    pub environment: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        let config = Config {
            data_dir: env::var("ORDER_DATA_DIR")
                .unwrap_or("data".to_string())
                .into(),
            log_level: env::var("LOG_LEVEL").unwrap_or("info".to_string()),
            environment: env::var("APP_ENV").unwrap_or("development".to_string()),
        };

        tracing::debug!(
            "Config: successfully loaded for {} environment",
            config.environment
        );
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), anyhow::Error> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(anyhow::anyhow!("ORDER_DATA_DIR must not be empty"));
        }

        Ok(())
    }

    pub fn receipts_dir(&self) -> PathBuf {
        self.data_dir.join("receipts")
    }

    pub fn history_file(&self) -> PathBuf {
        self.data_dir.join("orders.jsonl")
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
