use std::path::Path;
use std::process::Command;
use tracing::debug;

use crate::error::{AddsubsError, Result};

/// Abstract muxing command representation
#[derive(Debug, Clone)]
pub struct MuxCommand {
    pub binary_path: String,
    pub args: Vec<String>,
    pub description: String,
}

impl MuxCommand {
    /// Create a new muxing command
    pub fn new<S1: Into<String>, S2: Into<String>>(binary_path: S1, description: S2) -> Self {
        Self {
            binary_path: binary_path.into(),
            args: Vec::new(),
            description: description.into(),
        }
    }

    /// Add an argument
    pub fn arg<S: Into<String>>(mut self, arg: S) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Add multiple arguments
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(|s| s.into()));
        self
    }

    /// Set the output container path (`-o <path>`)
    pub fn output<P: AsRef<Path>>(self, path: P) -> Self {
        self.arg("-o").arg(path.as_ref().to_string_lossy().to_string())
    }

    /// Add an input file; track options set before it apply to its tracks
    pub fn input<P: AsRef<Path>>(self, path: P) -> Self {
        self.arg(path.as_ref().to_string_lossy().to_string())
    }

    /// Tag a track of the next input with an ISO 639-2 language code
    pub fn track_language<S: Into<String>>(self, track: u32, code: S) -> Self {
        self.arg("--language")
            .arg(format!("{}:{}", track, code.into()))
    }

    /// Set the display name of a track of the next input
    pub fn track_name<S: Into<String>>(self, track: u32, name: S) -> Self {
        self.arg("--track-name")
            .arg(format!("{}:{}", track, name.into()))
    }

    /// Execute the command
    pub async fn execute(&self) -> Result<()> {
        debug!("Executing muxing command: {} {:?}", self.binary_path, self.args);
        debug!("Description: {}", self.description);

        let mut cmd = Command::new(&self.binary_path);
        cmd.args(&self.args);

        let output = cmd
            .output()
            .map_err(|e| AddsubsError::Muxer(format!("Failed to execute muxing tool: {}", e)))?;

        // mkvmerge reports most problems on stdout rather than stderr
        if !output.status.success() {
            let stdout = String::from_utf8_lossy(&output.stdout);
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AddsubsError::Muxer(format!(
                "{} failed: {}{}",
                self.description, stdout, stderr
            )));
        }

        debug!("{}", String::from_utf8_lossy(&output.stdout));
        Ok(())
    }
}

/// Builder for common muxing operations
pub struct MuxCommandBuilder {
    binary_path: String,
    extra_options: Vec<String>,
}

impl MuxCommandBuilder {
    /// Create a new command builder
    pub fn new<S: Into<String>>(binary_path: S, extra_options: &[String]) -> Self {
        Self {
            binary_path: binary_path.into(),
            extra_options: extra_options.to_vec(),
        }
    }

    /// Build the subtitle merge command for one video/subtitle pair
    pub fn merge_subtitles<P: AsRef<Path>>(
        &self,
        video_path: P,
        subtitle_path: P,
        output_path: P,
        language_code: &str,
        track_name: &str,
    ) -> MuxCommand {
        MuxCommand::new(&self.binary_path, "Subtitle merge")
            .args(self.extra_options.iter().cloned())
            .output(output_path)
            .input(video_path)
            .track_language(0, language_code)
            .track_name(0, track_name)
            .input(subtitle_path)
    }

    /// Build version check command
    pub fn version_check(&self) -> MuxCommand {
        MuxCommand::new(&self.binary_path, "Version check").arg("--version")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_command_argument_order() {
        let builder = MuxCommandBuilder::new("mkvmerge", &[]);
        let cmd = builder.merge_subtitles(
            Path::new("dir/ep1.mkv"),
            Path::new("dir/ep1.srt"),
            Path::new("dir/output/ep1.mkv"),
            "jpn",
            "Japanese",
        );

        assert_eq!(cmd.binary_path, "mkvmerge");
        assert_eq!(
            cmd.args,
            vec![
                "-o",
                "dir/output/ep1.mkv",
                "dir/ep1.mkv",
                "--language",
                "0:jpn",
                "--track-name",
                "0:Japanese",
                "dir/ep1.srt",
            ]
        );
    }

    #[test]
    fn test_extra_options_precede_output() {
        let builder = MuxCommandBuilder::new("mkvmerge", &["--quiet".to_string()]);
        let cmd = builder.merge_subtitles(
            Path::new("a.mkv"),
            Path::new("a.srt"),
            Path::new("output/a.mkv"),
            "eng",
            "English",
        );

        assert_eq!(cmd.args[0], "--quiet");
        assert_eq!(cmd.args[1], "-o");
    }

    #[test]
    fn test_version_check_command() {
        let builder = MuxCommandBuilder::new("mkvmerge", &[]);
        let cmd = builder.version_check();
        assert_eq!(cmd.args, vec!["--version"]);
    }
}
