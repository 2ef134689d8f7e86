//! # Config
//!
//! Define and implement config options for module

use anyhow::Result;
use config::{ConfigError, Environment};
use dotenv::dotenv;
use serde::Deserialize;

use crate::router::{CostFormat, SearchLimits};

/// struct holding configuration options
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// port to be used for gRPC server
    pub docker_port_grpc: u16,

    /// path to log configuration YAML file
    pub log_config: String,

    /// how path costs are rendered in best route messages
    pub cost_format: CostFormat,

    /// optional ceiling on the number of nodes a single search may enter
    #[serde(default)]
    pub max_expansions: Option<u64>,

    /// load the demonstration route table at startup
    pub seed_routes: bool,
}

impl Default for Config {
    fn default() -> Self {
        log::warn!("(default) Creating Config object with default values.");
        Self::new()
    }
}

impl Config {
    /// Default values for Config
    pub fn new() -> Self {
        Config {
            docker_port_grpc: 50051,
            log_config: String::from("log4rs.yaml"),
            cost_format: CostFormat::Currency,
            max_expansions: None,
            seed_routes: true,
        }
    }

    /// Search bounds derived from this config.
    pub fn search_limits(&self) -> SearchLimits {
        SearchLimits {
            max_expansions: self.max_expansions,
        }
    }

    /// Create a new `Config` object using environment variables
    pub fn try_from_env() -> Result<Self, ConfigError> {
        // read .env file if present
        dotenv().ok();
        let default_config = Config::default();

        config::Config::builder()
            .set_default("docker_port_grpc", default_config.docker_port_grpc)?
            .set_default("log_config", default_config.log_config)?
            .set_default("cost_format", "currency")?
            .set_default("seed_routes", default_config.seed_routes)?
            .add_source(Environment::default().separator("__"))
            .build()?
            .try_deserialize()
    }
}
