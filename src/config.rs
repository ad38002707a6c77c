use serde::Deserialize;

use crate::error::Result;

pub const DEFAULT_CONFIG_PATH: &str = "config/default";
pub const DEFAULT_AGENT_NAME: &str = "SchemeSetu_Agent_v1";
pub const DEFAULT_STORE_PATH: &str = "data/schemes.json";
pub const DEFAULT_LOG_FILTER: &str = "scheme_setu=info,warn";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub agent: AgentConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AgentConfig {
    /// Name reported as `sender` in every successful response
    pub name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// Location of the scheme document
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub filter: String,
}

impl Config {
    /// Layer built-in defaults, the optional config file and `SCHEME_SETU_*`
    /// environment variables, in that order.
    pub fn load(path: &str) -> Result<Self> {
        dotenv::dotenv().ok();

        let config = config::Config::builder()
            .set_default("agent.name", DEFAULT_AGENT_NAME)?
            .set_default("storage.path", DEFAULT_STORE_PATH)?
            .set_default("logging.filter", DEFAULT_LOG_FILTER)?
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("SCHEME_SETU")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            agent: AgentConfig {
                name: DEFAULT_AGENT_NAME.to_string(),
            },
            storage: StorageConfig {
                path: DEFAULT_STORE_PATH.to_string(),
            },
            logging: LoggingConfig {
                filter: DEFAULT_LOG_FILTER.to_string(),
            },
        }
    }
}
