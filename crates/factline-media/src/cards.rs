//! Text-card rendering.
//!
//! A card is a solid-color lavfi source with one drawtext filter per
//! line of text, a fade in/out, and an H.264 encode. Cards of the same
//! resolution and codec concatenate losslessly with the concat demuxer.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::command::{FfmpegCommand, FfmpegRunner};
use crate::error::MediaResult;
use crate::text::{escape_drawtext, wrap_text};

/// Long-form resolution (width, height).
pub const LANDSCAPE: (u32, u32) = (1920, 1080);

/// Short-form resolution (width, height).
pub const PORTRAIT: (u32, u32) = (1080, 1920);

/// Dark blue background used for title, outro and vertical cards.
pub const CARD_BACKGROUND: &str = "0x141928";

/// Background pool cycled by fact-card index.
pub const FACT_BACKGROUNDS: [&str; 3] = ["0x324664", "0x463264", "0x644632"];

/// Fade duration for long-form cards.
pub const LONG_FADE: f64 = 0.5;

/// Fade duration for short-form cards.
pub const SHORT_FADE: f64 = 0.3;

/// Frame rate for all rendered cards.
pub const CARD_FPS: u32 = 30;

/// Horizontal placement of a text block.
#[derive(Debug, Clone)]
pub enum HAlign {
    Center,
    Left { margin: u32 },
}

/// Vertical placement of a text block.
#[derive(Debug, Clone)]
pub enum VAlign {
    Center,
    Top { offset: u32 },
}

/// A block of wrapped lines drawn at one position.
#[derive(Debug, Clone)]
pub struct TextBlock {
    pub lines: Vec<String>,
    pub font_size: u32,
    pub halign: HAlign,
    pub valign: VAlign,
    /// Vertical distance between line baselines, in pixels.
    pub line_height: u32,
}

impl TextBlock {
    /// A centered block wrapped at `width` characters.
    pub fn centered(text: &str, wrap_width: usize, font_size: u32) -> Self {
        Self {
            lines: wrap_text(text, wrap_width),
            font_size,
            halign: HAlign::Center,
            valign: VAlign::Center,
            line_height: font_size + font_size / 5,
        }
    }

    /// A left-aligned block anchored below the top edge.
    pub fn anchored(text: &str, wrap_width: usize, font_size: u32, top: u32) -> Self {
        Self {
            lines: wrap_text(text, wrap_width),
            font_size,
            halign: HAlign::Left { margin: 20 },
            valign: VAlign::Top { offset: top },
            line_height: font_size + font_size / 5,
        }
    }
}

/// Full description of one card.
#[derive(Debug, Clone)]
pub struct TextCard {
    pub width: u32,
    pub height: u32,
    pub duration: f64,
    /// Background color as an FFmpeg color (e.g. `0x141928`).
    pub background: String,
    pub fade: f64,
    pub blocks: Vec<TextBlock>,
}

impl TextCard {
    /// Landscape title card: wrapped at 25 chars, large centered text.
    pub fn title(title: &str, duration: f64) -> Self {
        Self {
            width: LANDSCAPE.0,
            height: LANDSCAPE.1,
            duration,
            background: CARD_BACKGROUND.to_string(),
            fade: LONG_FADE,
            blocks: vec![TextBlock::centered(title, 25, 72)],
        }
    }

    /// Landscape fact card: heading at the top, wrapped body below.
    /// Backgrounds cycle with the fact index.
    pub fn fact(index: usize, heading: &str, body: &str, duration: f64) -> Self {
        Self {
            width: LANDSCAPE.0,
            height: LANDSCAPE.1,
            duration,
            background: FACT_BACKGROUNDS[index % FACT_BACKGROUNDS.len()].to_string(),
            fade: LONG_FADE,
            blocks: vec![
                TextBlock::anchored(heading, 60, 48, 50),
                TextBlock::anchored(body, 50, 36, 150),
            ],
        }
    }

    /// Landscape outro card with the subscribe reminder.
    pub fn outro(duration: f64) -> Self {
        Self {
            width: LANDSCAPE.0,
            height: LANDSCAPE.1,
            duration,
            background: CARD_BACKGROUND.to_string(),
            fade: LONG_FADE,
            blocks: vec![TextBlock::centered(
                "Subscribe for more amazing facts!",
                30,
                60,
            )],
        }
    }

    /// Vertical card with centered text, wrapped at 20 chars.
    pub fn vertical_text(text: &str, duration: f64) -> Self {
        Self {
            width: PORTRAIT.0,
            height: PORTRAIT.1,
            duration,
            background: CARD_BACKGROUND.to_string(),
            fade: SHORT_FADE,
            blocks: vec![TextBlock::centered(text, 20, 48)],
        }
    }

    /// Vertical fact card: "#N" heading, wrapped body at 25 chars.
    pub fn vertical_fact(number: usize, body: &str, duration: f64) -> Self {
        Self {
            width: PORTRAIT.0,
            height: PORTRAIT.1,
            duration,
            background: CARD_BACKGROUND.to_string(),
            fade: SHORT_FADE,
            blocks: vec![
                TextBlock::anchored(&format!("#{}", number), 25, 36, 50),
                TextBlock::anchored(body, 25, 30, 150),
            ],
        }
    }

    /// Build the drawtext/fade filter graph for this card.
    pub fn filtergraph(&self, font_file: Option<&Path>) -> String {
        let mut filters = Vec::new();

        for block in &self.blocks {
            let total_height = block.line_height * block.lines.len() as u32;
            for (i, line) in block.lines.iter().enumerate() {
                let x = match &block.halign {
                    HAlign::Center => "(w-text_w)/2".to_string(),
                    HAlign::Left { margin } => margin.to_string(),
                };
                let y = match &block.valign {
                    VAlign::Center => format!(
                        "(h-{})/2+{}",
                        total_height,
                        block.line_height * i as u32
                    ),
                    VAlign::Top { offset } => {
                        format!("{}", offset + block.line_height * i as u32)
                    }
                };

                let mut drawtext = format!(
                    "drawtext=text='{}':fontsize={}:fontcolor=white:\
                     shadowcolor=black:shadowx=2:shadowy=2:x={}:y={}",
                    escape_drawtext(line),
                    block.font_size,
                    x,
                    y
                );
                if let Some(font) = font_file {
                    drawtext.push_str(&format!(":fontfile={}", font.to_string_lossy()));
                }
                filters.push(drawtext);
            }
        }

        filters.push(format!("fade=t=in:st=0:d={:.2}", self.fade));
        filters.push(format!(
            "fade=t=out:st={:.2}:d={:.2}",
            (self.duration - self.fade).max(0.0),
            self.fade
        ));
        filters.push("format=yuv420p".to_string());

        filters.join(",")
    }

    /// Build the full FFmpeg command rendering this card to `output`.
    pub fn to_command(&self, output: &Path, font_file: Option<&Path>) -> FfmpegCommand {
        let source = format!(
            "color=c={}:s={}x{}:d={:.3}:r={}",
            self.background, self.width, self.height, self.duration, CARD_FPS
        );
        FfmpegCommand::new(output)
            .lavfi(source)
            .video_filter(self.filtergraph(font_file))
            .video_codec("libx264")
            .preset("veryfast")
    }
}

/// Renders cards through FFmpeg.
pub struct CardRenderer {
    font_file: Option<PathBuf>,
    runner: FfmpegRunner,
}

impl CardRenderer {
    /// Create a renderer. With no font file, drawtext falls back to the
    /// fontconfig default.
    pub fn new(font_file: Option<PathBuf>) -> Self {
        let font_file = font_file.filter(|f| {
            if f.exists() {
                true
            } else {
                tracing::warn!("Font file not found, using default: {}", f.display());
                false
            }
        });
        Self {
            font_file,
            runner: FfmpegRunner::new().with_timeout(120),
        }
    }

    /// Render a card to `output`.
    pub async fn render(&self, card: &TextCard, output: &Path) -> MediaResult<()> {
        debug!(
            "Rendering {}x{} card ({:.1}s) -> {}",
            card.width,
            card.height,
            card.duration,
            output.display()
        );
        let cmd = card.to_command(output, self.font_file.as_deref());
        self.runner.run(&cmd).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_card_filtergraph() {
        let card = TextCard::title("10 Space Facts That Will Make You Feel Tiny", 5.0);
        let graph = card.filtergraph(None);
        assert!(graph.contains("drawtext="));
        assert!(graph.contains("fade=t=in:st=0:d=0.50"));
        assert!(graph.contains("fade=t=out:st=4.50:d=0.50"));
        assert!(graph.ends_with("format=yuv420p"));
    }

    #[test]
    fn test_fact_card_cycles_backgrounds() {
        let a = TextCard::fact(0, "#1 A", "body", 10.0);
        let b = TextCard::fact(3, "#4 B", "body", 10.0);
        assert_eq!(a.background, b.background);
        let c = TextCard::fact(1, "#2 C", "body", 10.0);
        assert_ne!(a.background, c.background);
    }

    #[test]
    fn test_card_command_has_lavfi_source() {
        let card = TextCard::vertical_text("Follow for more amazing facts!", 5.0);
        let args = card.to_command(Path::new("/tmp/card.mp4"), None).build_args();
        let source = args
            .iter()
            .find(|a| a.starts_with("color="))
            .expect("lavfi color source");
        assert!(source.contains("s=1080x1920"));
        assert!(source.contains("d=5.000"));
    }

    #[test]
    fn test_quote_in_text_is_escaped() {
        let card = TextCard::title("Laws You Won't Believe", 5.0);
        let graph = card.filtergraph(None);
        assert!(graph.contains("Won\\'t"));
    }

    #[test]
    fn test_centered_block_y_offsets_stack() {
        let card = TextCard::vertical_fact(2, "a ".repeat(40).trim(), 10.0);
        let graph = card.filtergraph(None);
        // Heading at its anchor, body lines stepping down from theirs.
        assert!(graph.contains("y=50"));
        assert!(graph.contains("y=150"));
        assert!(graph.contains("y=186"));
    }
}
