use andes_seating::SeatingPolicy;
use serde::Deserialize;
use std::env;
use std::path::Path;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub seating: SeatingPolicy,
    pub manifest: ManifestConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ManifestConfig {
    /// Snapshot file read by [`crate::JsonManifestSource`].
    pub path: String,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(Path::new("config"))
    }

    /// Layered load: `default` → `{RUN_MODE}` → `local` → `ANDES__*` env vars.
    pub fn load_from(dir: &Path) -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        let file = |name: &str| dir.join(name).to_string_lossy().into_owned();

        let s = config::Config::builder()
            .add_source(config::File::with_name(&file("default")))
            .add_source(config::File::with_name(&file(&run_mode)).required(false))
            // Not checked in
            .add_source(config::File::with_name(&file("local")).required(false))
            // Eg. `ANDES__SEATING__MINOR_MAX_DISTANCE=2`
            .add_source(config::Environment::with_prefix("ANDES").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
