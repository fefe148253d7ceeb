use async_trait::async_trait;
use std::path::Path;
use std::process::Command;
use tracing::{debug, info};

use super::{MuxCommandBuilder, MuxerTrait};
use crate::config::MuxerConfig;
use crate::error::{AddsubsError, Result};

/// Concrete implementation of the muxer (mkvmerge-based)
pub struct MkvmergeMuxer {
    config: MuxerConfig,
    command_builder: MuxCommandBuilder,
}

impl MkvmergeMuxer {
    /// Create a new mkvmerge muxer
    pub fn new(config: MuxerConfig) -> Self {
        let command_builder = MuxCommandBuilder::new(&config.binary_path, &config.extra_options);

        Self {
            config,
            command_builder,
        }
    }
}

#[async_trait]
impl MuxerTrait for MkvmergeMuxer {
    /// Merge a subtitle file into a video container
    async fn merge_subtitles(
        &self,
        video_path: &Path,
        subtitle_path: &Path,
        output_path: &Path,
        language_code: &str,
        track_name: &str,
    ) -> Result<()> {
        info!(
            "Merging subtitles from {} into {} -> {}",
            subtitle_path.display(),
            video_path.display(),
            output_path.display()
        );

        let command = self.command_builder.merge_subtitles(
            video_path,
            subtitle_path,
            output_path,
            language_code,
            track_name,
        );

        command.execute().await?;

        info!("Subtitle merge completed successfully");
        Ok(())
    }

    /// Check if the muxing tool is available
    fn check_availability(&self) -> Result<()> {
        let output = Command::new(&self.config.binary_path)
            .arg("--version")
            .output()
            .map_err(|e| AddsubsError::Muxer(format!("Muxing tool not found: {}", e)))?;

        if output.status.success() {
            info!("Muxing tool is available");
            Ok(())
        } else {
            Err(AddsubsError::Muxer(
                "Muxing tool version check failed".to_string(),
            ))
        }
    }

    /// Get muxing tool version information
    async fn get_version_info(&self) -> Result<String> {
        debug!("Getting muxing tool version information");

        let output = Command::new(&self.config.binary_path)
            .arg("--version")
            .output()
            .map_err(|e| AddsubsError::Muxer(format!("Failed to execute muxing tool: {}", e)))?;

        if output.status.success() {
            let version_info = String::from_utf8_lossy(&output.stdout);
            // Extract the first line which typically contains the version
            let first_line = version_info.lines().next().unwrap_or("Unknown version");
            Ok(first_line.to_string())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(AddsubsError::Muxer(format!(
                "Muxing tool version check failed: {}",
                stderr
            )))
        }
    }
}
