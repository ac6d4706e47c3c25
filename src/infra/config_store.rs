// ============================================================
// Layer 6 — Config Store
// ============================================================
// Reads and writes PipelineConfig and aspect catalogs as JSON
// so a run can be reproduced later with the same settings.
//
// Example config.json:
//   {
//     "max_units": 256,
//     "tokenizer_mode": "whitespace",
//     "catalog": {"aspects": [{"name": "battery", "keywords": ["battery", "charge"]}]}
//   }

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::application::summarize_use_case::PipelineConfig;
use crate::domain::aspect::CatalogFile;

/// Load a config file, or the defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<PipelineConfig> {
    let Some(path) = path else {
        return Ok(PipelineConfig::default());
    };

    let json = fs::read_to_string(path)
        .with_context(|| format!("Cannot read config '{}'", path.display()))?;
    let config = serde_json::from_str(&json)
        .with_context(|| format!("Invalid config JSON in '{}'", path.display()))?;

    tracing::info!("Loaded config from {}", path.display());
    Ok(config)
}

/// Load a standalone catalog file (`{"aspects": [...]}`).
pub fn load_catalog_file(path: &Path) -> Result<CatalogFile> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Cannot read catalog '{}'", path.display()))?;
    serde_json::from_str(&json)
        .with_context(|| format!("Invalid catalog JSON in '{}'", path.display()))
}

/// Save the effective config next to a run's output.
pub fn save_config(path: &Path, config: &PipelineConfig) -> Result<()> {
    // serde_json::to_string_pretty adds indentation for readability
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)
        .with_context(|| format!("Failed to write config to '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::preprocessor::TokenizerMode;

    #[test]
    fn test_no_path_gives_defaults() {
        let cfg = load_config(None).unwrap();
        assert_eq!(cfg.max_units, 512);
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir().join(format!("aspect_cfg_{}.json", std::process::id()));
        let cfg = PipelineConfig {
            max_units: 64,
            tokenizer_mode: TokenizerMode::Whitespace,
            ..PipelineConfig::default()
        };

        save_config(&path, &cfg).unwrap();
        let loaded = load_config(Some(path.as_path())).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(loaded.max_units, 64);
        assert_eq!(loaded.tokenizer_mode, TokenizerMode::Whitespace);
    }

    #[test]
    fn test_catalog_file_is_validated_when_built() {
        let path = std::env::temp_dir().join(format!("aspect_cat_{}.json", std::process::id()));
        fs::write(&path, r#"{"aspects":[{"name":"battery","keywords":[]}]}"#).unwrap();

        let file = load_catalog_file(&path).unwrap();
        fs::remove_file(&path).ok();

        let cfg = PipelineConfig { catalog: Some(file), ..PipelineConfig::default() };
        assert!(cfg.build_catalog().unwrap_err().is_validation());
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        assert!(load_config(Some(Path::new("/nonexistent/config.json"))).is_err());
    }
}
