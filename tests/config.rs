use glam::IVec2;

use questlog::geometry::Rect;
use questlog::ui::{Color, Font};
use questlog::{QuestLogConfig, QuestLogError};

#[test]
fn default_is_610x440_centred_in_800x600() {
    let cfg = QuestLogConfig::default();
    assert_eq!(cfg.window_size, IVec2::new(610, 440));
    assert_eq!(cfg.window_rect(), Rect::new(95, 80, 610, 440));
}

#[test]
fn default_layout_matches_stock_dialog() {
    let cfg = QuestLogConfig::default();
    assert_eq!(cfg.page_size, 6);
    assert_eq!(cfg.row_height, 32);
    assert_eq!(cfg.minimap_rect, Rect::new(12, 12, 169, 169));
    assert_eq!(cfg.description_rect, Rect::new(205, 18, 385, 355));
    assert_eq!(cfg.ok_pos, IVec2::new(539, 398));
    assert_eq!(cfg.marker_frame, 3);
    assert!(cfg.validate().is_ok());
}

#[test]
fn label_column_spans_one_page() {
    let cfg = QuestLogConfig::default();
    assert_eq!(cfg.label_column(), Rect::new(14, 195, 151, 192));
}

#[test]
fn odd_screen_rounds_origin_down() {
    let cfg = QuestLogConfig { screen_size: IVec2::new(611, 441), ..QuestLogConfig::default() };
    assert_eq!(cfg.window_rect().pos(), IVec2::new(0, 0));
}

#[test]
fn json_override_keeps_other_defaults() {
    let cfg = QuestLogConfig::from_json(r#"{
        "screen_size": [1024, 768],
        "page_size": 8,
        "label_font": "medium",
        "highlight_color": [1.0, 0.0, 0.0, 1.0]
    }"#)
    .unwrap();
    assert_eq!(cfg.screen_size, IVec2::new(1024, 768));
    assert_eq!(cfg.page_size, 8);
    assert_eq!(cfg.label_font, Font::Medium);
    assert_eq!(cfg.highlight_color, Color([1.0, 0.0, 0.0, 1.0]));
    assert_eq!(cfg.row_height, 32);
    assert_eq!(cfg.background, "questDialog.pcx");
}

#[test]
fn empty_json_is_default() {
    assert_eq!(QuestLogConfig::from_json("{}").unwrap(), QuestLogConfig::default());
}

#[test]
fn zero_page_size_is_rejected() {
    let err = QuestLogConfig::from_json(r#"{ "page_size": 0 }"#).unwrap_err();
    assert!(matches!(err, QuestLogError::Config(_)), "got {err}");
}

#[test]
fn non_positive_row_height_is_rejected() {
    let cfg = QuestLogConfig { row_height: 0, ..QuestLogConfig::default() };
    assert!(matches!(cfg.validate(), Err(QuestLogError::Config(_))));
}

#[test]
fn empty_window_is_rejected() {
    let cfg = QuestLogConfig { window_size: IVec2::new(0, 440), ..QuestLogConfig::default() };
    assert!(cfg.validate().is_err());
}

#[test]
fn malformed_json_is_a_json_error() {
    let err = QuestLogConfig::from_json("{ page_size: ").unwrap_err();
    assert!(matches!(err, QuestLogError::Json(_)));
}
