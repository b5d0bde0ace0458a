use log::debug;

use crate::app::domain::settings::{EditorSettings, WritingMode};

/// Device pixels per millimeter at 96 px/inch.
pub const MM_TO_PX: f64 = 3.7795275591;

/// Average advance of a vertical glyph relative to its font size.
const VERTICAL_ADVANCE: f64 = 1.05;

/// Average advance of a horizontal glyph relative to its font size.
const HORIZONTAL_ADVANCE: f64 = 0.9;

pub fn px_to_mm(px: f64) -> f64 {
    px / MM_TO_PX
}

/// Grid capacity of one page.
///
/// In vertical mode a "line" is a column and `chars_per_line` counts characters
/// down that column; in horizontal mode it is an ordinary row.
/// Both values are always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageMetrics {
    pub chars_per_line: usize,
    pub lines_per_page: usize,
}

impl PageMetrics {
    /// Build metrics directly, clamping both counts to at least 1.
    pub fn new(chars_per_line: usize, lines_per_page: usize) -> Self {
        Self {
            chars_per_line: chars_per_line.max(1),
            lines_per_page: lines_per_page.max(1),
        }
    }

    /// Derive the grid from paper size, margins and typography.
    ///
    /// Glyph advance is approximated from the font size alone; nothing is measured.
    /// Degenerate inputs (zero or negative usable area, non-finite values) clamp to 1.
    pub fn resolve(settings: &EditorSettings) -> Self {
        let font_mm = px_to_mm(settings.font_size);
        let width = settings.usable_width();
        let height = settings.usable_height();

        let (chars, lines) = match settings.writing_mode {
            WritingMode::Vertical => (
                height / (font_mm * VERTICAL_ADVANCE),
                width / (font_mm * settings.line_height),
            ),
            WritingMode::Horizontal => (
                width / (font_mm * HORIZONTAL_ADVANCE),
                height / (font_mm * settings.line_height),
            ),
        };

        let chars_per_line = floor_count(chars);
        let lines_per_page = floor_count(lines);
        if chars_per_line == 0 || lines_per_page == 0 {
            debug!(
                "Degenerate page metrics ({} chars x {} lines) for {:?}, clamping to 1",
                chars_per_line, lines_per_page, settings.writing_mode
            );
        }

        Self::new(chars_per_line, lines_per_page)
    }

    pub fn chars_per_page(&self) -> usize {
        self.chars_per_line.saturating_mul(self.lines_per_page)
    }
}

/// Floor to a count. NaN and negative values become 0; `as` saturates the rest.
fn floor_count(value: f64) -> usize {
    if value.is_nan() || value <= 0.0 {
        0
    } else {
        value.floor() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scroll_settings() -> EditorSettings {
        EditorSettings::default()
    }

    #[test]
    fn test_unit_conversion() {
        assert!((px_to_mm(24.0) - 6.35).abs() < 1e-9);
        assert!((px_to_mm(MM_TO_PX * 17.0) - 17.0).abs() < 1e-9);
    }

    #[test]
    fn test_vertical_default_scroll() {
        // 276mm / (6.35mm * 1.05) = 41.39, 200mm / (6.35mm * 2.0) = 15.75
        let metrics = PageMetrics::resolve(&scroll_settings());
        assert_eq!(metrics.chars_per_line, 41);
        assert_eq!(metrics.lines_per_page, 15);
        assert_eq!(metrics.chars_per_page(), 615);
    }

    #[test]
    fn test_horizontal_default_scroll() {
        // 200mm / (6.35mm * 0.9) = 34.99, 276mm / 12.7mm = 21.73
        let settings = EditorSettings {
            writing_mode: WritingMode::Horizontal,
            ..scroll_settings()
        };
        let metrics = PageMetrics::resolve(&settings);
        assert_eq!(metrics.chars_per_line, 34);
        assert_eq!(metrics.lines_per_page, 21);
    }

    #[test]
    fn test_negative_usable_area_clamps() {
        let mut settings = scroll_settings();
        settings.set_all_margins(500.0);
        let metrics = PageMetrics::resolve(&settings);
        assert_eq!(metrics, PageMetrics::new(1, 1));
    }

    #[test]
    fn test_zero_font_size_clamps() {
        let settings = EditorSettings {
            font_size: 0.0,
            ..scroll_settings()
        };
        let metrics = PageMetrics::resolve(&settings);
        assert!(metrics.chars_per_line >= 1);
        assert!(metrics.lines_per_page >= 1);
    }

    #[test]
    fn test_nan_inputs_clamp() {
        let settings = EditorSettings {
            line_height: f64::NAN,
            ..scroll_settings()
        };
        let metrics = PageMetrics::resolve(&settings);
        assert_eq!(metrics.lines_per_page, 1);
        assert_eq!(metrics.chars_per_line, 41);
    }

    #[test]
    fn test_new_clamps_zero() {
        assert_eq!(PageMetrics::new(0, 0), PageMetrics::new(1, 1));
    }
}
