//! Command-line runner configuration.
use std::env;
use std::path::PathBuf;

/// How the round log is printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::EnumString, strum::Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Runner configuration.
#[derive(Clone, Debug)]
pub struct CliConfig {
    /// Directory holding `options.toml`, `scenarios/` and `orders/`.
    pub data_dir: PathBuf,
    pub scenario: String,
    /// Orders file name; defaults to the scenario name.
    pub orders: Option<String>,
    pub format: OutputFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            scenario: "duel".to_owned(),
            orders: None,
            format: OutputFormat::Text,
        }
    }
}

impl CliConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `TOHIT_DATA_DIR` - Content directory (default: `data`)
    /// - `TOHIT_SCENARIO` - Scenario name under `scenarios/` (default: `duel`)
    /// - `TOHIT_ORDERS` - Orders name under `orders/` (default: the scenario name)
    /// - `TOHIT_FORMAT` - `text` or `json` (default: `text`)
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    pub(crate) fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(dir) = lookup("TOHIT_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(scenario) = lookup("TOHIT_SCENARIO").filter(|name| !name.is_empty()) {
            config.scenario = scenario;
        }
        config.orders = lookup("TOHIT_ORDERS").filter(|name| !name.is_empty());

        match lookup("TOHIT_FORMAT").map(|raw| raw.parse::<OutputFormat>()) {
            Some(Ok(format)) => config.format = format,
            Some(Err(_)) => {
                tracing::warn!("Unknown TOHIT_FORMAT, falling back to {}", config.format);
            }
            None => {}
        }

        config
    }

    pub fn orders_name(&self) -> &str {
        self.orders.as_deref().unwrap_or(&self.scenario)
    }
}
