//! Widgets specific to the quest log: the clickable quest line and the
//! clickable minimap marker.

use crate::geometry::Rect;
use crate::input::InputEvent;
use crate::ui::{Alignment, Capabilities, Color, DrawList, Font, Widget, layout_text};

/// Handler invoked when a quest widget is activated.
pub type ClickCallback = Box<dyn FnMut()>;

// ── QuestLabel ────────────────────────────────────────────────────────────────

/// One quest entry in the list column.
///
/// Starts disabled; the owning window enables the labels of the visible page.
/// A disabled label neither paints nor reacts to clicks.
pub struct QuestLabel {
    rect: Rect,
    text: String,
    pub font: Font,
    pub alignment: Alignment,
    pub color: Color,
    enabled: bool,
    callback: Option<ClickCallback>,
}

impl QuestLabel {
    pub fn new(rect: Rect, font: Font, alignment: Alignment, color: Color, text: impl Into<String>) -> Self {
        Self {
            rect,
            text: text.into(),
            font,
            alignment,
            color,
            enabled: false,
            callback: None,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn set_callback(&mut self, callback: impl FnMut() + 'static) {
        self.callback = Some(Box::new(callback));
    }
}

impl Widget for QuestLabel {
    fn rect(&self) -> Rect { self.rect }
    fn capabilities(&self) -> Capabilities { Capabilities::CLICK_PAINT }
    fn is_enabled(&self) -> bool { self.enabled }

    fn paint(&self, out: &mut DrawList) {
        if !self.enabled {
            return;
        }
        for (pos, line) in layout_text(&self.text, &self.rect, self.font, self.alignment) {
            out.text(&line, pos, self.font, self.color);
        }
    }

    fn handle(&mut self, event: &InputEvent) -> bool {
        if !self.enabled || !event.is_primary_down() {
            return false;
        }
        match self.callback.as_mut() {
            Some(cb) => {
                cb();
                true
            }
            None => false,
        }
    }
}

// ── QuestIcon ─────────────────────────────────────────────────────────────────

/// Animated marker showing the selected quest's location on the minimap.
///
/// The icon's bounding box can overhang the minimap viewport, so painting is
/// clipped to the parent rectangle supplied at construction.
pub struct QuestIcon {
    asset: String,
    frame: usize,
    rect: Rect,
    parent_clip: Rect,
    callback: Option<ClickCallback>,
}

impl QuestIcon {
    pub fn new(asset: impl Into<String>, frame: usize, rect: Rect, parent_clip: Rect) -> Self {
        Self { asset: asset.into(), frame, rect, parent_clip, callback: None }
    }

    pub fn asset(&self) -> &str { &self.asset }
    pub fn frame(&self) -> usize { self.frame }

    pub fn set_callback(&mut self, callback: impl FnMut() + 'static) {
        self.callback = Some(Box::new(callback));
    }
}

impl Widget for QuestIcon {
    fn rect(&self) -> Rect { self.rect }
    fn capabilities(&self) -> Capabilities { Capabilities::CLICK_PAINT }

    fn paint(&self, out: &mut DrawList) {
        out.with_clip(self.parent_clip, |out| out.image(&self.asset, self.frame, self.rect));
    }

    fn handle(&mut self, event: &InputEvent) -> bool {
        if !event.is_primary_down() {
            return false;
        }
        match self.callback.as_mut() {
            Some(cb) => {
                cb();
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::DrawCmd;
    use glam::IVec2;

    #[test]
    fn icon_paint_is_clipped_to_parent() {
        let icon = QuestIcon::new("VwSymbol.def", 3, Rect::new(-4, -4, 12, 12), Rect::new(0, 0, 169, 169));
        let mut out = DrawList::new();
        icon.paint(&mut out);
        assert_eq!(out.commands(), &[DrawCmd::Image {
            asset: "VwSymbol.def".into(),
            frame: 3,
            rect: Rect::new(-4, -4, 12, 12),
            clip: Some(Rect::new(0, 0, 169, 169)),
        }]);
        assert_eq!(out.current_clip(), None);
    }

    #[test]
    fn label_text_is_positioned_inside_rect() {
        let mut label = QuestLabel::new(Rect::new(14, 195, 151, 31), Font::Small, Alignment::TopLeft, Color::WHITE, "Find the hut");
        label.set_enabled(true);
        let mut out = DrawList::new();
        label.paint(&mut out);
        match &out.commands()[0] {
            DrawCmd::Text { text, pos, .. } => {
                assert_eq!(text, "Find the hut");
                assert_eq!(*pos, IVec2::new(14, 195));
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
