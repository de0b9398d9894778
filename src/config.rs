use glam::IVec2;
use serde::Deserialize;

use crate::error::QuestLogError;
use crate::geometry::Rect;
use crate::ui::{Color, Font};

// ── QuestLogConfig ────────────────────────────────────────────────────────────

/// Layout and asset configuration of the quest log dialog.
///
/// All rectangles and points are relative to the dialog's top-left corner,
/// except `screen_size`, which is the area the dialog is centred in.
/// Every field has a default, so a JSON override only needs the fields it
/// changes.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct QuestLogConfig {
    /// Size of the area the dialog is centred in.
    pub screen_size: IVec2,
    /// Size of the dialog itself.
    pub window_size: IVec2,
    /// Background image of the dialog.
    pub background: String,

    /// Minimap viewport.
    pub minimap_rect: Rect,
    /// Animation holding the quest marker.
    pub marker_asset: String,
    /// Frame of `marker_asset` used for the marker.
    pub marker_frame: usize,

    /// Quest description text box.
    pub description_rect: Rect,
    pub description_font: Font,

    /// Top-left of the OK button.
    pub ok_pos: IVec2,
    pub ok_asset: String,

    /// Top-left of the first visible quest label.
    pub label_origin: IVec2,
    /// Size of each quest label.
    pub label_size: IVec2,
    /// Vertical distance between consecutive labels.
    pub row_height: i32,
    /// Number of labels visible at once.
    pub page_size: usize,
    pub label_font: Font,
    pub label_color: Color,

    /// Top-left of the quest list scrollbar.
    pub slider_pos: IVec2,
    /// Length of the quest list scrollbar.
    pub slider_length: i32,

    /// Outline drawn around the selected quest label.
    pub highlight_color: Color,
}

impl Default for QuestLogConfig {
    /// The stock quest log layout: six visible quests in a 32-px grid,
    /// 169-px square minimap, description box on the right.
    fn default() -> Self {
        Self {
            screen_size:      IVec2::new(800, 600),
            window_size:      IVec2::new(610, 440),
            background:       "questDialog.pcx".into(),
            minimap_rect:     Rect::new(12, 12, 169, 169),
            marker_asset:     "VwSymbol.def".into(),
            marker_frame:     3,
            description_rect: Rect::new(205, 18, 385, 355),
            description_font: Font::Medium,
            ok_pos:           IVec2::new(539, 398),
            ok_asset:         "IOKAY.DEF".into(),
            label_origin:     IVec2::new(14, 195),
            label_size:       IVec2::new(151, 31),
            row_height:       32,
            page_size:        6,
            label_font:       Font::Small,
            label_color:      Color::WHITE,
            slider_pos:       IVec2::new(166, 195),
            slider_length:    191,
            highlight_color:  Color::METALLIC_GOLD,
        }
    }
}

impl QuestLogConfig {
    /// Parse a config override from JSON; absent fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, QuestLogError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject layouts the dialog cannot page through.
    pub fn validate(&self) -> Result<(), QuestLogError> {
        if self.page_size == 0 {
            return Err(QuestLogError::Config("page_size must be at least 1".into()));
        }
        if self.row_height <= 0 {
            return Err(QuestLogError::Config(format!("row_height must be positive, got {}", self.row_height)));
        }
        if self.window_size.x <= 0 || self.window_size.y <= 0 {
            return Err(QuestLogError::Config(format!("window_size must be positive, got {}", self.window_size)));
        }
        Ok(())
    }

    /// Screen rectangle of the dialog, centred in `screen_size`.
    pub fn window_rect(&self) -> Rect {
        let screen = Rect::from_pos_size(IVec2::ZERO, self.screen_size);
        Rect::from_pos_size(screen.center_origin(self.window_size), self.window_size)
    }

    /// Column covered by the visible page of labels, relative to the dialog.
    pub fn label_column(&self) -> Rect {
        Rect::new(
            self.label_origin.x,
            self.label_origin.y,
            self.label_size.x,
            self.row_height * self.page_size as i32,
        )
    }
}
