use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WritingMode {
    /// Right-to-left columns, characters flowing top to bottom.
    #[default]
    Vertical,
    /// Top-to-bottom rows, characters flowing left to right.
    Horizontal,
}

/// Page, typography and display settings for one document.
///
/// Paper dimensions and margins are millimeters, font size is device pixels
/// and line height is a multiplier of the font size. Every field has a serde
/// default so an old or partial record merges over [`EditorSettings::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorSettings {
    #[serde(default)]
    pub writing_mode: WritingMode,

    #[serde(default = "default_paper_width")]
    pub paper_width: f64,

    #[serde(default = "default_paper_height")]
    pub paper_height: f64,

    #[serde(default = "default_margin")]
    pub margin_top: f64,

    #[serde(default = "default_margin")]
    pub margin_bottom: f64,

    #[serde(default = "default_margin")]
    pub margin_right: f64,

    #[serde(default = "default_margin")]
    pub margin_left: f64,

    /// Rendering only; pagination ignores it.
    #[serde(default = "default_columns")]
    pub columns: u32,

    /// Rendering only; pagination ignores it.
    #[serde(default = "default_column_gap")]
    pub column_gap: f64,

    #[serde(default = "default_font_family")]
    pub font_family: String,

    #[serde(default = "default_font_size")]
    pub font_size: f64,

    #[serde(default = "default_line_height")]
    pub line_height: f64,

    #[serde(default = "default_font_weight")]
    pub font_weight: u32,

    #[serde(default)]
    pub show_guidelines: bool,

    #[serde(default)]
    pub show_safe_area: bool,

    #[serde(default = "default_show_ruler")]
    pub show_ruler: bool,

    #[serde(default)]
    pub show_section_markers: bool,

    #[serde(default)]
    pub show_row_lines: bool,

    #[serde(default = "default_row_line_color")]
    pub row_line_color: String,

    #[serde(default = "default_row_line_opacity")]
    pub row_line_opacity: f64,
}

fn default_paper_width() -> f64 {
    260.0
}

fn default_paper_height() -> f64 {
    336.0 // scroll aspect for the default width
}

fn default_margin() -> f64 {
    30.0
}

fn default_columns() -> u32 {
    1
}

fn default_column_gap() -> f64 {
    20.0
}

fn default_font_family() -> String {
    "Noto Serif JP".to_string()
}

fn default_font_size() -> f64 {
    24.0
}

fn default_line_height() -> f64 {
    2.0
}

fn default_font_weight() -> u32 {
    400
}

fn default_show_ruler() -> bool {
    true
}

fn default_row_line_color() -> String {
    "#8b7355".to_string()
}

fn default_row_line_opacity() -> f64 {
    0.25
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            writing_mode: WritingMode::default(),
            paper_width: default_paper_width(),
            paper_height: default_paper_height(),
            margin_top: default_margin(),
            margin_bottom: default_margin(),
            margin_right: default_margin(),
            margin_left: default_margin(),
            columns: default_columns(),
            column_gap: default_column_gap(),
            font_family: default_font_family(),
            font_size: default_font_size(),
            line_height: default_line_height(),
            font_weight: default_font_weight(),
            show_guidelines: false,
            show_safe_area: false,
            show_ruler: default_show_ruler(),
            show_section_markers: false,
            show_row_lines: false,
            row_line_color: default_row_line_color(),
            row_line_opacity: default_row_line_opacity(),
        }
    }
}

impl EditorSettings {
    /// Paper width left after the left and right margins (mm). May be negative.
    pub fn usable_width(&self) -> f64 {
        self.paper_width - self.margin_left - self.margin_right
    }

    /// Paper height left after the top and bottom margins (mm). May be negative.
    pub fn usable_height(&self) -> f64 {
        self.paper_height - self.margin_top - self.margin_bottom
    }

    pub fn set_all_margins(&mut self, margin: f64) {
        self.margin_top = margin;
        self.margin_bottom = margin;
        self.margin_right = margin;
        self.margin_left = margin;
    }

    /// Merge a partial update over these settings, returning whether anything changed.
    pub fn apply_patch(&mut self, patch: &SettingsPatch) -> bool {
        let before = self.clone();

        if let Some(mode) = patch.writing_mode {
            self.writing_mode = mode;
        }
        if let Some(v) = patch.paper_width {
            self.paper_width = v;
        }
        if let Some(v) = patch.paper_height {
            self.paper_height = v;
        }
        if let Some(v) = patch.margin_top {
            self.margin_top = v;
        }
        if let Some(v) = patch.margin_bottom {
            self.margin_bottom = v;
        }
        if let Some(v) = patch.margin_right {
            self.margin_right = v;
        }
        if let Some(v) = patch.margin_left {
            self.margin_left = v;
        }
        if let Some(v) = patch.columns {
            self.columns = v;
        }
        if let Some(v) = patch.column_gap {
            self.column_gap = v;
        }
        if let Some(ref v) = patch.font_family {
            self.font_family = v.clone();
        }
        if let Some(v) = patch.font_size {
            self.font_size = v;
        }
        if let Some(v) = patch.line_height {
            self.line_height = v;
        }
        if let Some(v) = patch.font_weight {
            self.font_weight = v;
        }
        if let Some(v) = patch.show_guidelines {
            self.show_guidelines = v;
        }
        if let Some(v) = patch.show_safe_area {
            self.show_safe_area = v;
        }
        if let Some(v) = patch.show_ruler {
            self.show_ruler = v;
        }
        if let Some(v) = patch.show_section_markers {
            self.show_section_markers = v;
        }
        if let Some(v) = patch.show_row_lines {
            self.show_row_lines = v;
        }
        if let Some(ref v) = patch.row_line_color {
            self.row_line_color = v.clone();
        }
        if let Some(v) = patch.row_line_opacity {
            self.row_line_opacity = v;
        }

        *self != before
    }
}

/// A partial settings update. `None` fields leave the current value alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SettingsPatch {
    pub writing_mode: Option<WritingMode>,
    pub paper_width: Option<f64>,
    pub paper_height: Option<f64>,
    pub margin_top: Option<f64>,
    pub margin_bottom: Option<f64>,
    pub margin_right: Option<f64>,
    pub margin_left: Option<f64>,
    pub columns: Option<u32>,
    pub column_gap: Option<f64>,
    pub font_family: Option<String>,
    pub font_size: Option<f64>,
    pub line_height: Option<f64>,
    pub font_weight: Option<u32>,
    pub show_guidelines: Option<bool>,
    pub show_safe_area: Option<bool>,
    pub show_ruler: Option<bool>,
    pub show_section_markers: Option<bool>,
    pub show_row_lines: Option<bool>,
    pub row_line_color: Option<String>,
    pub row_line_opacity: Option<f64>,
}

impl SettingsPatch {
    pub fn writing_mode(mode: WritingMode) -> Self {
        Self {
            writing_mode: Some(mode),
            ..Default::default()
        }
    }

    pub fn margins(margin: f64) -> Self {
        Self {
            margin_top: Some(margin),
            margin_bottom: Some(margin),
            margin_right: Some(margin),
            margin_left: Some(margin),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = EditorSettings::default();
        assert_eq!(settings.writing_mode, WritingMode::Vertical);
        assert_eq!(settings.paper_width, 260.0);
        assert_eq!(settings.paper_height, 336.0);
        assert_eq!(settings.margin_top, 30.0);
        assert_eq!(settings.font_size, 24.0);
        assert_eq!(settings.line_height, 2.0);
        assert_eq!(settings.columns, 1);
        assert!(settings.show_ruler);
        assert!(!settings.show_row_lines);
    }

    #[test]
    fn test_serialize_deserialize() {
        let settings = EditorSettings::default();
        let json = serde_json::to_string(&settings).unwrap();
        let loaded: EditorSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, loaded);
    }

    #[test]
    fn test_partial_config() {
        let json = r#"{"writingMode": "horizontal", "fontSize": 18}"#;
        let settings: EditorSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.writing_mode, WritingMode::Horizontal);
        assert_eq!(settings.font_size, 18.0);
        assert_eq!(settings.paper_width, 260.0); // Should use default
        assert_eq!(settings.font_family, "Noto Serif JP");
    }

    #[test]
    fn test_writing_mode_serialization() {
        let settings = EditorSettings {
            writing_mode: WritingMode::Horizontal,
            ..Default::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("\"writingMode\":\"horizontal\""));
    }

    #[test]
    fn test_usable_area() {
        let settings = EditorSettings::default();
        assert_eq!(settings.usable_width(), 200.0);
        assert_eq!(settings.usable_height(), 276.0);

        let mut cramped = settings.clone();
        cramped.set_all_margins(200.0);
        assert!(cramped.usable_width() < 0.0);
    }

    #[test]
    fn test_apply_patch_merges_only_given_fields() {
        let mut settings = EditorSettings::default();
        let patch = SettingsPatch {
            font_size: Some(32.0),
            show_row_lines: Some(true),
            ..Default::default()
        };
        assert!(settings.apply_patch(&patch));
        assert_eq!(settings.font_size, 32.0);
        assert!(settings.show_row_lines);
        assert_eq!(settings.line_height, 2.0);
    }

    #[test]
    fn test_apply_patch_reports_no_change() {
        let mut settings = EditorSettings::default();
        assert!(!settings.apply_patch(&SettingsPatch::default()));
        assert!(!settings.apply_patch(&SettingsPatch::writing_mode(WritingMode::Vertical)));
        assert!(settings.apply_patch(&SettingsPatch::margins(10.0)));
        assert_eq!(settings.margin_left, 10.0);
    }

    #[test]
    fn test_patch_deserializes_sparse() {
        let patch: SettingsPatch = serde_json::from_str(r#"{"lineHeight": 1.5}"#).unwrap();
        assert_eq!(patch.line_height, Some(1.5));
        assert!(patch.font_size.is_none());
        assert_ne!(patch, SettingsPatch::default());
    }
}
