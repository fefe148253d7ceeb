use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory containing the video and subtitle files
    pub path: PathBuf,

    /// Video file extension without the leading dot (e.g. mkv, mp4)
    pub videoformat: String,

    /// Subtitle file extension without the leading dot (e.g. srt, ass)
    pub subformat: String,

    /// ISO 639-2 language code for the subtitle track (jpn, eng, spa, und)
    pub lang: String,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Skip the interactive pairing confirmation
    #[arg(short = 'y', long)]
    pub assume_yes: bool,
}
