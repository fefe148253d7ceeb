use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{AddsubsError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub muxer: MuxerConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MuxerConfig {
    /// Path to mkvmerge binary
    pub binary_path: String,
    /// Additional global options passed to every mkvmerge invocation
    /// Common options: ["--quiet"] or ["--ui-language", "en"]
    pub extra_options: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Name of the directory created under the scanned path for merged files
    pub dir_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            muxer: MuxerConfig {
                binary_path: "mkvmerge".to_string(),
                extra_options: vec![],
            },
            output: OutputConfig {
                dir_name: "output".to_string(),
            },
        }
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AddsubsError::Config(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| AddsubsError::Config(format!("Failed to parse config file: {}", e)))
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| AddsubsError::Config(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)
            .map_err(|e| AddsubsError::Config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;

    #[test]
    fn test_from_file_reads_all_sections() {
        let file = assert_fs::NamedTempFile::new("config.toml").unwrap();
        file.write_str(concat!(
            "[muxer]\n",
            "binary_path = \"/opt/mkvtoolnix/mkvmerge\"\n",
            "extra_options = [\"--quiet\"]\n",
            "\n",
            "[output]\n",
            "dir_name = \"merged\"\n",
        ))
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.muxer.binary_path, "/opt/mkvtoolnix/mkvmerge");
        assert_eq!(config.muxer.extra_options, vec!["--quiet"]);
        assert_eq!(config.output.dir_name, "merged");
    }

    #[test]
    fn test_from_file_missing_file_is_config_error() {
        let err = Config::from_file("does-not-exist.toml").unwrap_err();
        assert!(matches!(err, AddsubsError::Config(_)));
    }
}
