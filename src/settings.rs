use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat};
use config::builder::DefaultState;
use gridvec_grid::GridSpec;
use gridvec_vector::Vector2D;
use serde::Deserialize;
use tracing::{error, info};

pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Runtime settings for the quantization demo.
#[derive(Debug, Deserialize)]
pub struct Settings {
    pub grid: GridSpec,
    #[serde(default)]
    pub points: Vec<Vector2D>,
    /// Counter-clockwise rotation applied to every point, in degrees
    #[serde(default)]
    pub rotation_degrees: f64,
    #[serde(default)]
    pub translation: Vector2D,
}

/// Loads settings from `path` (or [`DEFAULT_CONFIG_PATH`]), overridden by
/// `GRIDVEC_*` environment variables, e.g. `GRIDVEC_GRID__SIZE=50`.
pub fn load_settings(path: Option<&str>) -> Result<Settings, ConfigError> {
    let path = path.unwrap_or(DEFAULT_CONFIG_PATH);
    info!("Attempting to load configuration from {}", path);

    let builder = Config::builder()
        .add_source(File::new(path, FileFormat::Toml).required(true))
        .add_source(
            Environment::with_prefix("GRIDVEC")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

    match build_settings(builder) {
        Ok(settings) => {
            info!("Successfully loaded configuration: {:?}", settings);
            Ok(settings)
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            Err(e)
        }
    }
}

fn build_settings(builder: ConfigBuilder<DefaultState>) -> Result<Settings, ConfigError> {
    builder.build()?.try_deserialize()
}
