//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Application configuration.
///
/// Every field has a default, so an empty source set yields a usable config.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging configuration.
    pub log: LogConfig,
    /// Output configuration.
    pub output: OutputConfig,
    /// Funds request routing.
    pub funds: FundsConfig,
    /// Budget figures for the demo scenario.
    pub scenario: ScenarioConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub filter: String,
    /// Emit logs as JSON lines instead of the human format.
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "exchequer=info".to_string(),
            json: false,
        }
    }
}

/// How a rendered tree is written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// The plain `Government: ..., Budget: $...` text layout.
    #[default]
    Text,
    /// A JSON document of the whole tree.
    Json,
}

/// Output configuration.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Rendering format.
    pub format: OutputFormat,
}

/// Where an actor's funds request is applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoutingPolicy {
    /// Apply the request to the actor's own node and ignore the named scheme.
    ///
    /// When that node is a department or the government nothing changes.
    #[default]
    AssociatedNode,
    /// Apply the request to the scheme named in the request.
    RequestedScheme,
}

/// Funds request configuration.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct FundsConfig {
    /// Routing policy for `request_funds`.
    pub routing: RoutingPolicy,
}

/// Budget figures used to build the demo tree.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    /// Name of the root government.
    pub government_name: String,
    /// Opening balance of the government.
    pub government_budget: Decimal,
    /// Opening balance of each department.
    pub department_budget: Decimal,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            government_name: "Central Government".to_string(),
            government_budget: Decimal::from(1_500_000),
            department_budget: Decimal::from(500_000),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, later ones winning: `config/default`, `config/{RUN_MODE}`,
    /// then `EXCHEQUER__SECTION__KEY` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("EXCHEQUER").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
