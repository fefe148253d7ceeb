// Modular muxing architecture
//
// This module provides a clean abstraction over the external muxing tool:
// - Processor: mkvmerge-backed implementation
// - Commands: Command builders and abstractions

pub mod commands;
pub mod processor;

use async_trait::async_trait;
use std::path::Path;

pub use commands::*;
pub use processor::*;

use crate::config::MuxerConfig;
use crate::error::Result;

/// Main trait for subtitle muxing operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MuxerTrait: Send + Sync {
    /// Merge a subtitle file into a video container, tagging the subtitle
    /// track with the given language code and track name
    async fn merge_subtitles(
        &self,
        video_path: &Path,
        subtitle_path: &Path,
        output_path: &Path,
        language_code: &str,
        track_name: &str,
    ) -> Result<()>;

    /// Check if the muxing tool is available
    fn check_availability(&self) -> Result<()>;

    /// Get muxing tool version information
    async fn get_version_info(&self) -> Result<String>;
}

/// Factory for creating muxer instances
pub struct MuxerFactory;

impl MuxerFactory {
    /// Create the default muxer implementation (mkvmerge-based)
    pub fn create_muxer(config: MuxerConfig) -> Box<dyn MuxerTrait> {
        Box::new(processor::MkvmergeMuxer::new(config))
    }
}
