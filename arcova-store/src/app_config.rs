use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub business_rules: BusinessRules,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    pub data_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: ".arcova".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct BusinessRules {
    #[serde(default = "default_tax_rate")]
    pub tax_rate: f64,
    #[serde(default = "default_commission_rate")]
    pub commission_rate: f64,
    #[serde(default = "default_scarcity_threshold")]
    pub scarcity_threshold: i32,
}

fn default_tax_rate() -> f64 {
    0.15
}

fn default_commission_rate() -> f64 {
    0.15
}

fn default_scarcity_threshold() -> i32 {
    3
}

impl Default for BusinessRules {
    fn default() -> Self {
        Self {
            tax_rate: default_tax_rate(),
            commission_rate: default_commission_rate(),
            scarcity_threshold: default_scarcity_threshold(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            .add_source(config::File::with_name("config/local").required(false))
            // `ARCOVA__BUSINESS_RULES__TAX_RATE=0.2` style overrides
            .add_source(config::Environment::with_prefix("ARCOVA").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
