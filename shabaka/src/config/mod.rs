pub mod graph;
pub mod log;
pub mod render;
pub mod simulation;
pub mod source;

use std::path::Path;

use serde::Deserialize;
use serde::Serialize;

pub use graph::AddressAnnotation;
pub use graph::GraphConfig;
pub use log::LoggingConfig;
pub use render::LinkStyle;
pub use render::NodeStyle;
pub use render::RenderConfig;
pub use simulation::SimulationConfig;
pub use source::SourceConfig;

use crate::constants::COVALENT_API_KEY_ENV;
use crate::error::ConfigError;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub source: SourceConfig,
    pub graph: GraphConfig,
    pub render: RenderConfig,
    pub simulation: SimulationConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Fills the Covalent API key from the environment when it is set there.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(api_key) = std::env::var(COVALENT_API_KEY_ENV) {
            if !api_key.trim().is_empty() {
                self.source.api_key = Some(api_key);
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.graph.transaction_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "graph.transaction_limit",
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.simulation.link_distance <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "simulation.link_distance",
                reason: "must be positive".to_string(),
            });
        }
        Ok(())
    }
}

pub fn load_config(path: impl AsRef<Path>) -> crate::Result<Config> {
    let path = path.as_ref();
    let config_str = std::fs::read_to_string(path).map_err(|source| ConfigError::OpenFileError {
        path: path.display().to_string(),
        source,
    })?;
    let mut config: Config = toml::from_str(&config_str).map_err(ConfigError::from)?;
    config.apply_env_overrides();
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_falls_back_to_defaults() {
        let config: Config = toml::from_str(
            r#"
            [graph]
            transaction_limit = 5

            [simulation]
            cooldown_ticks = 50
            "#,
        )
        .unwrap();

        assert_eq!(config.graph.transaction_limit, 5);
        assert_eq!(config.simulation.cooldown_ticks, 50);
        assert_eq!(config.simulation.charge_strength, -200.0);
        assert_eq!(config.source.chain_id, 80001);
        assert_eq!(config.render.node.font_family, "Bai Jamjuree");
    }

    #[test]
    fn test_annotations_parse() {
        let config: Config = toml::from_str(
            r##"
            [[graph.annotations]]
            address = "0x1111111111111111111111111111111111111111"
            color = "#F7931A"
            icon = "https://example.com/cex.png"
            "##,
        )
        .unwrap();

        assert_eq!(config.graph.annotations.len(), 1);
        assert_eq!(config.graph.annotations[0].color.as_deref(), Some("#F7931A"));
        assert_eq!(config.graph.annotations[0].icon.as_deref(), Some("https://example.com/cex.png"));
    }

    #[test]
    fn test_zero_limit_is_rejected() {
        let mut config = Config::default();
        config.graph.transaction_limit = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field: "graph.transaction_limit", .. })
        ));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = load_config("does-not-exist/Config.toml").unwrap_err();
        assert!(err.to_string().contains("does-not-exist/Config.toml"));
    }
}
