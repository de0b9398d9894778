// ── UI types & pure helpers ──────────────────────────────────────────────────

pub mod quest;
pub mod widgets;

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::geometry::Rect;
use crate::input::InputEvent;

// ── Color ─────────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color(pub [f32; 4]);

impl Color {
    pub const WHITE: Self = Self([1.0, 1.0, 1.0, 1.0]);
    pub const BLACK: Self = Self([0.0, 0.0, 0.0, 1.0]);
    /// Selection frame gold used throughout the adventure-map dialogs.
    pub const METALLIC_GOLD: Self = Self([173.0 / 255.0, 142.0 / 255.0, 66.0 / 255.0, 1.0]);
    pub const BROWN: Self = Self([0.36, 0.24, 0.13, 1.0]);
    pub const DARK_BROWN: Self = Self([0.20, 0.13, 0.07, 1.0]);
}

// ── Font ──────────────────────────────────────────────────────────────────────

/// Bitmap font families available to dialogs. The asset layer owns the
/// glyphs; layout only needs the fixed cell metrics below.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Font {
    Small,
    Medium,
    Big,
}

impl Font {
    /// Horizontal advance of one glyph cell in pixels.
    pub fn glyph_width(self) -> i32 {
        match self {
            Font::Small => 6,
            Font::Medium => 8,
            Font::Big => 10,
        }
    }

    /// Vertical distance between consecutive baselines in pixels.
    pub fn line_height(self) -> i32 {
        match self {
            Font::Small => 12,
            Font::Medium => 16,
            Font::Big => 20,
        }
    }

    /// Pixel width of a single unwrapped line.
    pub fn text_width(self, text: &str) -> i32 {
        text.chars().count() as i32 * self.glyph_width()
    }

    /// Number of whole glyph cells that fit in `width` pixels.
    pub fn columns(self, width: i32) -> usize {
        (width.max(0) / self.glyph_width()) as usize
    }
}

/// Horizontal placement of each text line inside its rectangle.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Alignment {
    #[default]
    TopLeft,
    TopCenter,
    TopRight,
}

impl Alignment {
    /// X coordinate at which a line `line_w` pixels wide starts inside `rect`.
    pub fn line_x(self, rect: &Rect, line_w: i32) -> i32 {
        match self {
            Alignment::TopLeft => rect.x,
            Alignment::TopCenter => rect.x + (rect.w - line_w) / 2,
            Alignment::TopRight => rect.right() - line_w,
        }
    }
}

/// Word-wrap `text` so every returned line is at most `max_cols` characters.
/// Words are split on ASCII whitespace; a word longer than `max_cols` is
/// force-split across lines.
pub fn word_wrap(text: &str, max_cols: usize) -> Vec<String> {
    if max_cols == 0 { return vec![]; }
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let space = if current.is_empty() { 0 } else { 1 };
        if !current.is_empty() && current.chars().count() + space + word.chars().count() > max_cols {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() { current.push(' '); }
        current.push_str(word);
        while current.chars().count() > max_cols {
            let rest: String = current.chars().skip(max_cols).collect();
            current.truncate(current.char_indices().nth(max_cols).map_or(current.len(), |(i, _)| i));
            lines.push(std::mem::replace(&mut current, rest));
        }
    }
    if !current.is_empty() { lines.push(current); }
    lines
}

/// Wrap `text` into `rect` and position every line that fits vertically.
/// Explicit newlines start a new paragraph.
pub fn layout_text(text: &str, rect: &Rect, font: Font, align: Alignment) -> Vec<(IVec2, String)> {
    let max_rows = (rect.h.max(0) / font.line_height()) as usize;
    text.split('\n')
        .flat_map(|para| word_wrap(para, font.columns(rect.w)))
        .take(max_rows)
        .enumerate()
        .map(|(row, line)| {
            let x = align.line_x(rect, font.text_width(&line));
            (IVec2::new(x, rect.y + row as i32 * font.line_height()), line)
        })
        .collect()
}

// ── DrawList ──────────────────────────────────────────────────────────────────

/// One retained draw operation. The renderer that consumes these is outside
/// this crate; every command carries the clip rectangle active when it was
/// recorded.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCmd {
    /// Window background image with optional player-coloured border.
    Background { asset: String, rect: Rect, player_colored: bool },
    /// One frame of an animation/sprite asset.
    Image { asset: String, frame: usize, rect: Rect, clip: Option<Rect> },
    /// A single pre-wrapped line of text.
    Text { text: String, pos: IVec2, font: Font, color: Color, clip: Option<Rect> },
    /// Solid rectangle.
    Fill { rect: Rect, color: Color, clip: Option<Rect> },
    /// 1-px rectangle outline.
    Border { rect: Rect, color: Color, clip: Option<Rect> },
}

/// Plain-data container for one frame of dialog drawing.
/// Widgets append commands during `paint`; no GPU state, fully testable.
#[derive(Debug, Default)]
pub struct DrawList {
    commands: Vec<DrawCmd>,
    clip_stack: Vec<Rect>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCmd] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Clear recorded commands. The clip stack must already be balanced.
    pub fn clear(&mut self) {
        debug_assert!(self.clip_stack.is_empty(), "clip stack not balanced");
        self.commands.clear();
    }

    /// Narrow the active clip to `rect` (intersected with any outer clip).
    pub fn push_clip(&mut self, rect: Rect) {
        let clip = match self.clip_stack.last() {
            Some(outer) => outer.intersect(&rect),
            None => rect,
        };
        self.clip_stack.push(clip);
    }

    pub fn pop_clip(&mut self) {
        self.clip_stack.pop();
    }

    pub fn current_clip(&self) -> Option<Rect> {
        self.clip_stack.last().copied()
    }

    /// Run `f` with `rect` pushed as the clip; the clip is popped afterwards.
    pub fn with_clip(&mut self, rect: Rect, f: impl FnOnce(&mut DrawList)) {
        self.push_clip(rect);
        f(self);
        self.pop_clip();
    }

    pub fn background(&mut self, asset: &str, rect: Rect, player_colored: bool) {
        self.commands.push(DrawCmd::Background { asset: asset.to_owned(), rect, player_colored });
    }

    pub fn image(&mut self, asset: &str, frame: usize, rect: Rect) {
        let clip = self.current_clip();
        self.commands.push(DrawCmd::Image { asset: asset.to_owned(), frame, rect, clip });
    }

    pub fn text(&mut self, text: &str, pos: IVec2, font: Font, color: Color) {
        let clip = self.current_clip();
        self.commands.push(DrawCmd::Text { text: text.to_owned(), pos, font, color, clip });
    }

    pub fn fill(&mut self, rect: Rect, color: Color) {
        let clip = self.current_clip();
        self.commands.push(DrawCmd::Fill { rect, color, clip });
    }

    pub fn border(&mut self, rect: Rect, color: Color) {
        let clip = self.current_clip();
        self.commands.push(DrawCmd::Border { rect, color, clip });
    }

    /// All recorded text lines, in draw order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCmd::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

// ── Widget ────────────────────────────────────────────────────────────────────

/// Which kinds of interaction a widget takes part in.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Capabilities {
    /// Receives mouse button events.
    pub clickable: bool,
    /// Emits draw commands.
    pub paintable: bool,
    /// Receives key events (hotkeys).
    pub keys: bool,
    /// Receives mouse wheel events.
    pub wheel: bool,
}

impl Capabilities {
    pub const PAINT: Self = Self { clickable: false, paintable: true, keys: false, wheel: false };
    pub const CLICK_PAINT: Self = Self { clickable: true, paintable: true, keys: false, wheel: false };
}

/// Common interface of every dialog element.
///
/// Each widget gates its own painting and event handling on `is_enabled`;
/// `input::dispatch` additionally filters events by `capabilities`.
pub trait Widget {
    fn rect(&self) -> Rect;
    fn capabilities(&self) -> Capabilities;
    fn is_enabled(&self) -> bool { true }
    /// Append this widget's draw commands. Disabled widgets append nothing.
    fn paint(&self, out: &mut DrawList);
    /// Handle an input event already filtered by `input::dispatch`.
    /// Returns `true` if the event was acted upon.
    fn handle(&mut self, _event: &InputEvent) -> bool { false }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_list_clip_nests_by_intersection() {
        let mut out = DrawList::new();
        out.push_clip(Rect::new(0, 0, 100, 100));
        out.push_clip(Rect::new(50, 50, 100, 100));
        assert_eq!(out.current_clip(), Some(Rect::new(50, 50, 50, 50)));
        out.pop_clip();
        assert_eq!(out.current_clip(), Some(Rect::new(0, 0, 100, 100)));
        out.pop_clip();
        assert_eq!(out.current_clip(), None);
    }

    #[test]
    fn commands_capture_active_clip() {
        let mut out = DrawList::new();
        out.fill(Rect::new(0, 0, 1, 1), Color::BLACK);
        out.with_clip(Rect::new(0, 0, 10, 10), |out| out.image("a.def", 0, Rect::new(0, 0, 20, 20)));
        match &out.commands()[0] {
            DrawCmd::Fill { clip, .. } => assert_eq!(*clip, None),
            other => panic!("unexpected {other:?}"),
        }
        match &out.commands()[1] {
            DrawCmd::Image { clip, .. } => assert_eq!(*clip, Some(Rect::new(0, 0, 10, 10))),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn layout_text_stops_at_rect_height() {
        // 12 cols per line, room for two lines of small font.
        let rect = Rect::new(0, 0, 72, 31);
        let lines = layout_text("one two three four five six seven", &rect, Font::Small, Alignment::TopLeft);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].0, IVec2::new(0, 0));
        assert_eq!(lines[1].0, IVec2::new(0, 12));
    }

    #[test]
    fn layout_text_honours_newlines() {
        let rect = Rect::new(0, 0, 200, 100);
        let lines = layout_text("first\nsecond", &rect, Font::Medium, Alignment::TopLeft);
        let texts: Vec<&str> = lines.iter().map(|(_, l)| l.as_str()).collect();
        assert_eq!(texts, vec!["first", "second"]);
    }

    #[test]
    fn alignment_center_and_right() {
        let rect = Rect::new(10, 0, 100, 20);
        assert_eq!(Alignment::TopCenter.line_x(&rect, 40), 40);
        assert_eq!(Alignment::TopRight.line_x(&rect, 40), 70);
    }
}
