//! Voiceover and background-music muxing.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::command::{FfmpegCommand, FfmpegRunner};
use crate::error::{MediaError, MediaResult};

/// Options for the audio mux.
#[derive(Debug, Clone)]
pub struct AudioMixOptions {
    /// Background music file, looped for the video's length.
    pub music: Option<PathBuf>,
    /// Music volume relative to full scale.
    pub music_volume: f64,
    /// Cap the output duration, in seconds.
    pub max_duration: Option<f64>,
}

impl Default for AudioMixOptions {
    fn default() -> Self {
        Self {
            music: None,
            music_volume: 0.1,
            max_duration: None,
        }
    }
}

/// Build the mux command for `video` + optional voiceover + optional music.
pub fn build_mux_command(
    video: &Path,
    voiceover: Option<&Path>,
    music: Option<&Path>,
    options: &AudioMixOptions,
    output: &Path,
) -> FfmpegCommand {
    let mut cmd = FfmpegCommand::new(output).input(video);

    match (voiceover, music) {
        (Some(vo), Some(bg)) => {
            cmd = cmd
                .input(vo)
                .input_with_args(["-stream_loop", "-1"], bg)
                .filter_complex(format!(
                    "[2:a]volume={vol}[bg];\
                     [1:a][bg]amix=inputs=2:duration=first:dropout_transition=0[aout]",
                    vol = options.music_volume
                ))
                .map("0:v")
                .map("[aout]")
                .video_codec("copy")
                .audio_codec("aac")
                .audio_bitrate("192k")
                .shortest();
        }
        (Some(vo), None) => {
            cmd = cmd
                .input(vo)
                .map("0:v")
                .map("1:a")
                .video_codec("copy")
                .audio_codec("aac")
                .audio_bitrate("192k")
                .shortest();
        }
        (None, Some(bg)) => {
            cmd = cmd
                .input_with_args(["-stream_loop", "-1"], bg)
                .filter_complex(format!("[1:a]volume={}[aout]", options.music_volume))
                .map("0:v")
                .map("[aout]")
                .video_codec("copy")
                .audio_codec("aac")
                .audio_bitrate("192k")
                .shortest();
        }
        (None, None) => {
            cmd = cmd.output_args(["-c", "copy"]);
        }
    }

    if let Some(max) = options.max_duration {
        cmd = cmd.limit_duration(max);
    }
    cmd
}

/// Overlay a voiceover (and optionally looped background music at low
/// volume) onto a silent video.
///
/// A configured music file that does not exist is skipped with a
/// warning rather than failing the mux.
pub async fn mux_audio(
    video: &Path,
    voiceover: Option<&Path>,
    options: &AudioMixOptions,
    output: &Path,
) -> MediaResult<()> {
    if !video.exists() {
        return Err(MediaError::FileNotFound(video.to_path_buf()));
    }
    if let Some(vo) = voiceover {
        if !vo.exists() {
            return Err(MediaError::FileNotFound(vo.to_path_buf()));
        }
    }

    let music = match options.music.as_deref() {
        Some(path) if path.exists() => Some(path),
        Some(path) => {
            warn!("Could not add background music: {} not found", path.display());
            None
        }
        None => None,
    };

    debug!(
        "Muxing audio (voiceover: {}, music: {}) -> {}",
        voiceover.is_some(),
        music.is_some(),
        output.display()
    );

    let cmd = build_mux_command(video, voiceover, music, options, output);
    FfmpegRunner::new().with_timeout(600).run(&cmd).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_voiceover_and_music_mix() {
        let options = AudioMixOptions {
            music: Some(PathBuf::from("/assets/background_music.mp3")),
            ..Default::default()
        };
        let cmd = build_mux_command(
            Path::new("video.mp4"),
            Some(Path::new("vo.mp3")),
            Some(Path::new("/assets/background_music.mp3")),
            &options,
            Path::new("out.mp4"),
        );
        let args = cmd.build_args();
        let filter = args
            .iter()
            .find(|a| a.contains("amix"))
            .expect("amix filter");
        assert!(filter.contains("volume=0.1"));
        assert!(filter.contains("duration=first"));
        assert!(args.contains(&"-shortest".to_string()));
        assert!(args.contains(&"-stream_loop".to_string()));
    }

    #[test]
    fn test_voiceover_only_maps_both_streams() {
        let cmd = build_mux_command(
            Path::new("video.mp4"),
            Some(Path::new("vo.mp3")),
            None,
            &AudioMixOptions::default(),
            Path::new("out.mp4"),
        );
        let args = cmd.build_args();
        assert!(args.contains(&"1:a".to_string()));
        assert!(!args.iter().any(|a| a.contains("amix")));
    }

    #[test]
    fn test_duration_cap() {
        let options = AudioMixOptions {
            max_duration: Some(60.0),
            ..Default::default()
        };
        let cmd = build_mux_command(
            Path::new("video.mp4"),
            Some(Path::new("vo.mp3")),
            None,
            &options,
            Path::new("out.mp4"),
        );
        let args = cmd.build_args();
        assert!(args.contains(&"-t".to_string()));
        assert!(args.contains(&"60.000".to_string()));
    }

    #[tokio::test]
    async fn test_mux_missing_video_fails() {
        let err = mux_audio(
            Path::new("/nonexistent/video.mp4"),
            None,
            &AudioMixOptions::default(),
            Path::new("/tmp/out.mp4"),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, MediaError::FileNotFound(_)));
    }
}
