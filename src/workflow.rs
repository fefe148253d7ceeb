use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, BufRead, Write};
use std::path::Path;
use tokio::fs;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{AddsubsError, Result};
use crate::lang;
use crate::muxer::{MuxerFactory, MuxerTrait};
use crate::pairing::{Pair, scan_pairs};

pub struct Workflow {
    config: Config,
    muxer: Box<dyn MuxerTrait>,
}

impl Workflow {
    pub fn new(config: Config) -> Result<Self> {
        let muxer = MuxerFactory::create_muxer(config.muxer.clone());

        // Check dependencies
        muxer.check_availability()?;

        Ok(Self { config, muxer })
    }

    #[cfg(test)]
    fn with_muxer(config: Config, muxer: Box<dyn MuxerTrait>) -> Self {
        Self { config, muxer }
    }

    /// Merge every subtitle file in a directory into its paired video file.
    ///
    /// The language code is validated before any directory access so an
    /// unsupported code never touches the filesystem.
    pub async fn run(
        &self,
        dir: &Path,
        videoformat: &str,
        subformat: &str,
        lang_code: &str,
        assume_yes: bool,
    ) -> Result<()> {
        let track_name = lang::display_name(lang_code)
            .ok_or_else(|| AddsubsError::UnsupportedLanguage(lang_code.to_string()))?;

        let pairs = scan_pairs(dir, videoformat, subformat)?;

        print_pairing(&pairs);

        if !assume_yes && !confirm_pairing(&mut io::stdin().lock())? {
            return Err(AddsubsError::Cancelled);
        }

        let output_dir = dir.join(&self.config.output.dir_name);
        fs::create_dir_all(&output_dir).await?;

        let pb = ProgressBar::new(pairs.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap()
                .progress_chars("#>-"),
        );

        for pair in &pairs {
            pb.set_message(pair.video.clone());
            self.merge_pair(dir, &output_dir, pair, lang_code, track_name)
                .await?;
            pb.inc(1);
        }
        pb.finish_with_message("done");

        info!(
            "Merged {} video/subtitle pairs into {}",
            pairs.len(),
            output_dir.display()
        );
        Ok(())
    }

    async fn merge_pair(
        &self,
        dir: &Path,
        output_dir: &Path,
        pair: &Pair,
        lang_code: &str,
        track_name: &str,
    ) -> Result<()> {
        let video_path = dir.join(&pair.video);
        let subtitle_path = dir.join(&pair.subtitle);
        // Output keeps the original video file name
        let output_path = output_dir.join(&pair.video);

        self.muxer
            .merge_subtitles(
                &video_path,
                &subtitle_path,
                &output_path,
                lang_code,
                track_name,
            )
            .await
    }
}

/// Print the subtitle/video pairing the way it will be merged.
fn print_pairing(pairs: &[Pair]) {
    println!("Joining sub files to these video files.");
    for pair in pairs {
        println!("{}\t{}", pair.subtitle, pair.video);
    }
}

/// Ask the user to confirm the pairing. Any answer containing `n` declines.
fn confirm_pairing<R: BufRead>(input: &mut R) -> Result<bool> {
    print!("Are these pairs correct? (Y/n): ");
    io::stdout().flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    debug!("Confirmation answer: {:?}", answer.trim());

    Ok(!answer.contains('n'))
}
