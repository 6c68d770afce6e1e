//! Clip concatenation via the concat demuxer.

use std::path::{Path, PathBuf};

use tracing::debug;
use uuid::Uuid;

use crate::command::{FfmpegCommand, FfmpegRunner};
use crate::error::{MediaError, MediaResult};

/// Escape a path for a concat demuxer list file.
///
/// List entries are single-quoted; embedded quotes close the quote,
/// emit an escaped quote, and reopen.
fn escape_list_path(path: &Path) -> String {
    path.to_string_lossy().replace('\'', "'\\''")
}

/// Write the concat list file for a set of clips.
pub fn write_concat_list(clips: &[PathBuf], list_path: &Path) -> MediaResult<()> {
    let mut contents = String::new();
    for clip in clips {
        contents.push_str(&format!("file '{}'\n", escape_list_path(clip)));
    }
    std::fs::write(list_path, contents)?;
    Ok(())
}

/// Concatenate same-codec clips into `output` without re-encoding.
///
/// The temp list file lands in `work_dir` with a random suffix.
pub async fn concat_clips(clips: &[PathBuf], work_dir: &Path, output: &Path) -> MediaResult<()> {
    if clips.is_empty() {
        return Err(MediaError::internal("no clips to concatenate"));
    }
    for clip in clips {
        if !clip.exists() {
            return Err(MediaError::FileNotFound(clip.clone()));
        }
    }

    let list_path = work_dir.join(format!("concat_{}.txt", Uuid::new_v4()));
    write_concat_list(clips, &list_path)?;

    debug!(
        "Concatenating {} clips -> {}",
        clips.len(),
        output.display()
    );

    let cmd = FfmpegCommand::new(output)
        .input_with_args(["-f", "concat", "-safe", "0"], &list_path)
        .output_args(["-c", "copy"]);

    let result = FfmpegRunner::new().with_timeout(300).run(&cmd).await;

    // Best-effort cleanup of the list file.
    let _ = std::fs::remove_file(&list_path);

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_list_file_contents() {
        let dir = TempDir::new().unwrap();
        let list = dir.path().join("list.txt");
        let clips = vec![
            PathBuf::from("/tmp/work/card_1.mp4"),
            PathBuf::from("/tmp/work/it's.mp4"),
        ];
        write_concat_list(&clips, &list).unwrap();

        let contents = std::fs::read_to_string(&list).unwrap();
        assert!(contents.contains("file '/tmp/work/card_1.mp4'\n"));
        assert!(contents.contains("file '/tmp/work/it'\\''s.mp4'\n"));
    }

    #[tokio::test]
    async fn test_concat_rejects_empty_input() {
        let dir = TempDir::new().unwrap();
        let err = concat_clips(&[], dir.path(), &dir.path().join("out.mp4"))
            .await
            .unwrap_err();
        assert!(matches!(err, MediaError::Internal(_)));
    }

    #[tokio::test]
    async fn test_concat_rejects_missing_clip() {
        let dir = TempDir::new().unwrap();
        let missing = vec![dir.path().join("nope.mp4")];
        let err = concat_clips(&missing, dir.path(), &dir.path().join("out.mp4"))
            .await
            .unwrap_err();
        assert!(matches!(err, MediaError::FileNotFound(_)));
    }
}
