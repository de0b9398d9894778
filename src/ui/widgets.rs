//! Generic dialog widgets: WindowFrame, Button, Slider, TextBox.
//!
//! All widgets follow the same retained pattern used by the rest of the
//! questlog UI: they own their state and rectangle, append draw commands in
//! `paint`, and react to events routed through `input::dispatch`.
//!
//! # Callbacks
//!
//! Widgets never reach into their owner. A widget that has something to
//! report calls the boxed closure it was given; dialogs wire those closures
//! to message channels and apply the messages after the event is dispatched.
use glam::IVec2;

use crate::geometry::Rect;
use crate::input::{InputEvent, KeyCode, MouseButton, dispatch};
use crate::ui::{Alignment, Capabilities, Color, DrawList, Font, Widget, word_wrap};

// ── Internal widget palette ────────────────────────────────────────────────────

const TRACK:  Color = Color::DARK_BROWN;
const THUMB:  Color = Color([0.55, 0.40, 0.20, 1.0]);
const ARROWS: Color = Color::BROWN;
const EDGE:   Color = Color([0.08, 0.05, 0.02, 1.0]);

/// Width of a vertical slider and height of each of its arrow buttons.
pub const SLIDER_WIDTH: i32 = 16;

// ── WindowFrame ───────────────────────────────────────────────────────────────

/// Dialog chrome: a named background image, optionally tinted with the
/// player's colour, optionally wrapped in a decorative border.
pub struct WindowFrame {
    rect: Rect,
    pub background: String,
    pub player_colored: bool,
    pub bordered: bool,
}

impl WindowFrame {
    pub fn new(rect: Rect, background: impl Into<String>) -> Self {
        Self { rect, background: background.into(), player_colored: true, bordered: true }
    }

    /// Top-left corner; child widgets are laid out relative to it.
    pub fn origin(&self) -> IVec2 {
        self.rect.pos()
    }
}

impl Widget for WindowFrame {
    fn rect(&self) -> Rect { self.rect }
    fn capabilities(&self) -> Capabilities { Capabilities::PAINT }

    fn paint(&self, out: &mut DrawList) {
        out.background(&self.background, self.rect, self.player_colored);
        if self.bordered {
            out.border(self.rect.around(), Color::METALLIC_GOLD);
        }
    }
}

// ── Button ────────────────────────────────────────────────────────────────────

/// Image button that fires on release.
///
/// Pressing inside arms the button; releasing while still inside fires the
/// callback. An optional hotkey fires it directly on key-down.
pub struct Button {
    rect: Rect,
    asset: String,
    hotkey: Option<KeyCode>,
    pressed: bool,
    enabled: bool,
    callback: Option<Box<dyn FnMut()>>,
}

impl Button {
    pub fn new(rect: Rect, asset: impl Into<String>) -> Self {
        Self { rect, asset: asset.into(), hotkey: None, pressed: false, enabled: true, callback: None }
    }

    pub fn with_hotkey(mut self, key: KeyCode) -> Self { self.hotkey = Some(key); self }

    pub fn set_callback(&mut self, callback: impl FnMut() + 'static) {
        self.callback = Some(Box::new(callback));
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        self.pressed = false;
    }

    pub fn is_pressed(&self) -> bool { self.pressed }

    fn fire(&mut self) -> bool {
        match self.callback.as_mut() {
            Some(cb) => { cb(); true }
            None => false,
        }
    }
}

impl Widget for Button {
    fn rect(&self) -> Rect { self.rect }
    fn capabilities(&self) -> Capabilities {
        Capabilities { clickable: true, paintable: true, keys: true, wheel: false }
    }
    fn is_enabled(&self) -> bool { self.enabled }

    fn paint(&self, out: &mut DrawList) {
        // Frame 0 is the idle state, frame 1 the pressed state.
        let frame = if self.pressed { 1 } else { 0 };
        out.image(&self.asset, frame, self.rect);
    }

    fn handle(&mut self, event: &InputEvent) -> bool {
        match *event {
            InputEvent::Click { button: MouseButton::Left, down: true, .. } => {
                self.pressed = true;
                true
            }
            InputEvent::Click { button: MouseButton::Left, down: false, pos } if self.pressed => {
                self.pressed = false;
                self.rect.contains(pos) && self.fire()
            }
            InputEvent::Key { key, down: true } if Some(key) == self.hotkey => self.fire(),
            _ => false,
        }
    }
}

// ── Slider ────────────────────────────────────────────────────────────────────

/// Vertical scrollbar over a list of `amount` items of which `capacity` are
/// visible at once. `value` is the index of the first visible item and lies in
/// `[0, amount - capacity]`.
///
/// A blocked slider still paints but ignores all input. Programmatic moves
/// (`move_to` and friends) work regardless and invoke the move callback
/// whenever the value actually changes.
pub struct Slider {
    rect: Rect,
    capacity: usize,
    amount: usize,
    value: usize,
    blocked: bool,
    scroll_area: Option<Rect>,
    on_move: Option<Box<dyn FnMut(usize)>>,
}

impl Slider {
    pub fn new(pos: IVec2, length: i32, capacity: usize, amount: usize) -> Self {
        Self {
            rect: Rect::new(pos.x, pos.y, SLIDER_WIDTH, length),
            capacity,
            amount,
            value: 0,
            blocked: false,
            scroll_area: None,
            on_move: None,
        }
    }

    /// Additional region in which the mouse wheel scrolls this slider.
    pub fn with_scroll_area(mut self, area: Rect) -> Self { self.scroll_area = Some(area); self }

    pub fn with_callback(mut self, on_move: impl FnMut(usize) + 'static) -> Self {
        self.on_move = Some(Box::new(on_move));
        self
    }

    pub fn value(&self) -> usize { self.value }
    pub fn capacity(&self) -> usize { self.capacity }
    pub fn amount(&self) -> usize { self.amount }
    pub fn is_blocked(&self) -> bool { self.blocked }

    /// Largest reachable value; `0` when everything fits.
    pub fn max_value(&self) -> usize {
        self.amount.saturating_sub(self.capacity)
    }

    pub fn block(&mut self, blocked: bool) {
        self.blocked = blocked;
    }

    pub fn move_to(&mut self, value: usize) {
        let value = value.min(self.max_value());
        if value == self.value {
            return;
        }
        self.value = value;
        if let Some(cb) = self.on_move.as_mut() {
            cb(value);
        }
    }

    pub fn move_by(&mut self, delta: i64) {
        let target = (self.value as i64 + delta).clamp(0, self.max_value() as i64);
        self.move_to(target as usize);
    }

    pub fn move_to_min(&mut self) { self.move_to(0); }
    pub fn move_to_max(&mut self) { self.move_to(self.max_value()); }

    fn track(&self) -> Rect {
        Rect::new(self.rect.x, self.rect.y + SLIDER_WIDTH, self.rect.w, self.rect.h - 2 * SLIDER_WIDTH)
    }

    fn thumb(&self) -> Rect {
        let track = self.track();
        let travel = (track.h - SLIDER_WIDTH).max(0);
        let max = self.max_value();
        let offset = if max == 0 { 0 } else { travel * self.value as i32 / max as i32 };
        Rect::new(track.x, track.y + offset, track.w, SLIDER_WIDTH)
    }

    /// Value under a click at `y` on the track, rounded to the nearest item.
    fn value_at(&self, y: i32) -> usize {
        let track = self.track();
        let max = self.max_value() as i32;
        if track.h <= 0 || max == 0 {
            return 0;
        }
        let rel = (y - track.y).clamp(0, track.h);
        ((rel * max + track.h / 2) / track.h) as usize
    }
}

impl Widget for Slider {
    fn rect(&self) -> Rect { self.rect }
    fn capabilities(&self) -> Capabilities {
        Capabilities { clickable: true, paintable: true, keys: false, wheel: true }
    }

    fn paint(&self, out: &mut DrawList) {
        out.fill(self.rect, TRACK);
        out.border(self.rect, EDGE);
        out.fill(Rect::new(self.rect.x, self.rect.y, SLIDER_WIDTH, SLIDER_WIDTH), ARROWS);
        out.fill(Rect::new(self.rect.x, self.rect.bottom() - SLIDER_WIDTH, SLIDER_WIDTH, SLIDER_WIDTH), ARROWS);
        if !self.blocked {
            out.fill(self.thumb(), THUMB);
        }
    }

    fn handle(&mut self, event: &InputEvent) -> bool {
        if self.blocked {
            return false;
        }
        match *event {
            InputEvent::Click { button: MouseButton::Left, down: true, pos } => {
                if pos.y < self.rect.y + SLIDER_WIDTH {
                    self.move_by(-1);
                } else if pos.y >= self.rect.bottom() - SLIDER_WIDTH {
                    self.move_by(1);
                } else {
                    let v = self.value_at(pos.y);
                    self.move_to(v);
                }
                true
            }
            InputEvent::Wheel { delta, pos } => {
                let over = self.rect.contains(pos) || self.scroll_area.is_some_and(|a| a.contains(pos));
                if over {
                    self.move_by(-(delta as i64));
                }
                over
            }
            _ => false,
        }
    }
}

// ── TextBox ───────────────────────────────────────────────────────────────────

/// Multi-line wrapped text. When the text is taller than the box an internal
/// slider appears along the right edge and the text re-wraps to the narrower
/// width; the slider value is the first visible line.
pub struct TextBox {
    rect: Rect,
    text: String,
    pub font: Font,
    pub alignment: Alignment,
    pub color: Color,
    lines: Vec<String>,
    slider: Option<Slider>,
}

impl TextBox {
    pub fn new(rect: Rect, font: Font, alignment: Alignment, color: Color) -> Self {
        Self { rect, text: String::new(), font, alignment, color, lines: Vec::new(), slider: None }
    }

    pub fn text(&self) -> &str { &self.text }
    pub fn lines(&self) -> &[String] { &self.lines }
    pub fn slider(&self) -> Option<&Slider> { self.slider.as_ref() }

    /// Index of the first visible line.
    pub fn scroll(&self) -> usize {
        self.slider.as_ref().map_or(0, Slider::value)
    }

    /// Number of whole lines the box can show at once.
    pub fn visible_rows(&self) -> usize {
        (self.rect.h.max(0) / self.font.line_height()) as usize
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.relayout();
    }

    pub fn scroll_to_top(&mut self) {
        if let Some(slider) = self.slider.as_mut() {
            slider.move_to_min();
        }
    }

    fn wrap(&self, width: i32) -> Vec<String> {
        let cols = self.font.columns(width);
        self.text.split('\n').flat_map(|para| word_wrap(para, cols)).collect()
    }

    fn relayout(&mut self) {
        let rows = self.visible_rows();
        let lines = self.wrap(self.rect.w);
        if lines.len() <= rows {
            self.lines = lines;
            self.slider = None;
            return;
        }
        self.lines = self.wrap(self.rect.w - SLIDER_WIDTH);
        let pos = IVec2::new(self.rect.right() - SLIDER_WIDTH, self.rect.y);
        self.slider = Some(Slider::new(pos, self.rect.h, rows, self.lines.len()).with_scroll_area(self.rect));
    }
}

impl Widget for TextBox {
    fn rect(&self) -> Rect { self.rect }
    fn capabilities(&self) -> Capabilities {
        Capabilities { clickable: true, paintable: true, keys: false, wheel: true }
    }

    fn paint(&self, out: &mut DrawList) {
        let text_w = if self.slider.is_some() { self.rect.w - SLIDER_WIDTH } else { self.rect.w };
        let area = Rect::new(self.rect.x, self.rect.y, text_w, self.rect.h);
        let lh = self.font.line_height();
        for (row, line) in self.lines.iter().skip(self.scroll()).take(self.visible_rows()).enumerate() {
            let x = self.alignment.line_x(&area, self.font.text_width(line));
            out.text(line, IVec2::new(x, area.y + row as i32 * lh), self.font, self.color);
        }
        if let Some(slider) = &self.slider {
            slider.paint(out);
        }
    }

    fn handle(&mut self, event: &InputEvent) -> bool {
        match self.slider.as_mut() {
            Some(slider) => dispatch(slider, event),
            None => false,
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thumb_travels_full_track() {
        let mut s = Slider::new(IVec2::new(0, 0), 100, 6, 12);
        assert_eq!(s.thumb().y, SLIDER_WIDTH);
        s.move_to_max();
        assert_eq!(s.thumb().bottom(), 100 - SLIDER_WIDTH);
    }

    #[test]
    fn value_at_rounds_to_nearest() {
        // Track spans y = 16..84 (68 px) for max value 4.
        let s = Slider::new(IVec2::new(0, 0), 100, 2, 6);
        assert_eq!(s.value_at(16), 0);
        assert_eq!(s.value_at(84), 4);
        assert_eq!(s.value_at(50), 2);
    }

    #[test]
    fn frame_paints_background_then_border() {
        let frame = WindowFrame::new(Rect::new(10, 10, 100, 50), "questDialog.pcx");
        let mut out = DrawList::new();
        frame.paint(&mut out);
        assert_eq!(out.len(), 2);
    }
}
