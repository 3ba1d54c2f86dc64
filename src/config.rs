use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

const CONFIG_FILE: &str = "scanner.json";

/// Input and output file locations for the driver. Loaded from an optional
/// `scanner.json` in the working directory; anything missing or malformed
/// falls back to the defaults.
#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_input_path")]
    pub input_path: PathBuf,
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,
}

fn default_input_path() -> PathBuf {
    PathBuf::from("input.txt")
}

fn default_output_path() -> PathBuf {
    PathBuf::from("output.txt")
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input_path: default_input_path(),
            output_path: default_output_path(),
        }
    }
}

impl Config {
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Config::default();
        }
        match fs::read_to_string(path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_default(),
            Err(_) => Config::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_working_directory_files() {
        let config = Config::default();
        assert_eq!(config.input_path, PathBuf::from("input.txt"));
        assert_eq!(config.output_path, PathBuf::from("output.txt"));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = Config::load_from(Path::new("does-not-exist.json"));
        assert_eq!(config.input_path, PathBuf::from("input.txt"));
    }

    #[test]
    fn partial_config_keeps_defaults_for_missing_fields() {
        let config: Config = serde_json::from_str(r#"{"input_path": "program.tny"}"#).unwrap();
        assert_eq!(config.input_path, PathBuf::from("program.tny"));
        assert_eq!(config.output_path, PathBuf::from("output.txt"));
    }

    #[test]
    fn malformed_config_falls_back_to_defaults() {
        let parsed: Config = serde_json::from_str("not json").unwrap_or_default();
        assert_eq!(parsed.input_path, PathBuf::from("input.txt"));
    }
}
