//! FFmpeg CLI wrapper for card rendering and video assembly.
//!
//! This crate provides:
//! - Type-safe FFmpeg command building with multiple inputs and lavfi
//!   sources
//! - Progress parsing from `-progress pipe:2`
//! - Duration probing via ffprobe
//! - Text-card rendering (drawtext over a solid background)
//! - Same-codec clip concatenation and voiceover/music muxing

pub mod audio;
pub mod cards;
pub mod command;
pub mod concat;
pub mod error;
pub mod probe;
pub mod progress;
pub mod text;

pub use audio::{mux_audio, AudioMixOptions};
pub use cards::{CardRenderer, TextBlock, TextCard, LANDSCAPE, PORTRAIT};
pub use command::{check_ffmpeg, check_ffprobe, FfmpegCommand, FfmpegRunner};
pub use concat::concat_clips;
pub use error::{MediaError, MediaResult};
pub use probe::{probe_duration, probe_media, MediaInfo};
pub use progress::{FfmpegProgress, ProgressCallback};
pub use text::wrap_text;
