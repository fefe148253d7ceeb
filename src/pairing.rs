use std::path::Path;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::error::{AddsubsError, Result};

/// A video file and the subtitle file that will be merged into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair {
    pub video: String,
    pub subtitle: String,
}

/// Scan a directory for video and subtitle files and pair them positionally.
///
/// Entries are filtered by `.<ext>` suffix, both lists are sorted
/// lexicographically and zipped together, so the pairing depends only on
/// the file names. Returns `CountMismatch` when the lists differ in length.
pub fn scan_pairs(dir: &Path, videoformat: &str, subformat: &str) -> Result<Vec<Pair>> {
    if !dir.is_dir() {
        return Err(AddsubsError::Config(format!(
            "Input path is not a directory: {}",
            dir.display()
        )));
    }

    let video_suffix = format!(".{}", videoformat);
    let sub_suffix = format!(".{}", subformat);

    let mut videos = Vec::new();
    let mut subtitles = Vec::new();

    // Depth is bounded to 1: subdirectories are not descended into
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().to_string();
        if name.ends_with(&video_suffix) {
            videos.push(name);
        } else if name.ends_with(&sub_suffix) {
            subtitles.push(name);
        }
    }

    debug!(
        "Found {} video files and {} subtitle files in {}",
        videos.len(),
        subtitles.len(),
        dir.display()
    );

    if videos.len() != subtitles.len() {
        return Err(AddsubsError::CountMismatch {
            videos: videos.len(),
            subtitles: subtitles.len(),
        });
    }

    videos.sort();
    subtitles.sort();

    let pairs = subtitles
        .into_iter()
        .zip(videos)
        .map(|(subtitle, video)| Pair { video, subtitle })
        .collect::<Vec<_>>();

    info!("Paired {} subtitle files with video files", pairs.len());
    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;

    fn touch(dir: &Path, name: &str) {
        File::create(dir.join(name)).unwrap();
    }

    #[test]
    fn test_scan_pairs_sorted_positional() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "ep2.mkv");
        touch(dir.path(), "ep1.mkv");
        touch(dir.path(), "ep1.srt");
        touch(dir.path(), "ep2.srt");

        let pairs = scan_pairs(dir.path(), "mkv", "srt").unwrap();
        assert_eq!(
            pairs,
            vec![
                Pair {
                    video: "ep1.mkv".to_string(),
                    subtitle: "ep1.srt".to_string()
                },
                Pair {
                    video: "ep2.mkv".to_string(),
                    subtitle: "ep2.srt".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_scan_pairs_count_mismatch() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "ep1.mkv");
        touch(dir.path(), "ep2.mkv");
        touch(dir.path(), "ep1.srt");

        let err = scan_pairs(dir.path(), "mkv", "srt").unwrap_err();
        match err {
            AddsubsError::CountMismatch { videos, subtitles } => {
                assert_eq!(videos, 2);
                assert_eq!(subtitles, 1);
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_suffix_matches_end_of_name_only() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "movie.mkv");
        touch(dir.path(), "movie.mkv.bak");
        touch(dir.path(), "movie.srt");

        let pairs = scan_pairs(dir.path(), "mkv", "srt").unwrap();
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].video, "movie.mkv");
    }

    #[test]
    fn test_subdirectories_are_ignored() {
        let dir = tempdir().unwrap();
        std::fs::create_dir(dir.path().join("extras.mkv")).unwrap();
        touch(dir.path(), "ep1.mkv");
        touch(dir.path(), "ep1.srt");

        let pairs = scan_pairs(dir.path(), "mkv", "srt").unwrap();
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].video, "ep1.mkv");
    }

    #[test]
    fn test_missing_directory_is_config_error() {
        let err = scan_pairs(Path::new("no-such-directory"), "mkv", "srt").unwrap_err();
        assert!(matches!(err, AddsubsError::Config(_)));
    }
}
