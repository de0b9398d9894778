use std::collections::{HashSet, VecDeque};

use glam::IVec2;
pub use winit::event::MouseButton;
pub use winit::keyboard::KeyCode;

use crate::ui::Widget;

/// A discrete input event delivered to dialog widgets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Mouse button transition. `down` is the press phase, `!down` the release.
    Click { button: MouseButton, down: bool, pos: IVec2 },
    /// Keyboard key transition.
    Key { key: KeyCode, down: bool },
    /// Mouse wheel notches; positive scrolls towards the top.
    Wheel { delta: i32, pos: IVec2 },
}

impl InputEvent {
    /// Press phase of the primary (left) mouse button at `pos`.
    pub fn primary_down(pos: IVec2) -> Self {
        InputEvent::Click { button: MouseButton::Left, down: true, pos }
    }

    /// Release phase of the primary (left) mouse button at `pos`.
    pub fn primary_up(pos: IVec2) -> Self {
        InputEvent::Click { button: MouseButton::Left, down: false, pos }
    }

    /// `true` for the press phase of the primary button.
    pub fn is_primary_down(&self) -> bool {
        matches!(self, InputEvent::Click { button: MouseButton::Left, down: true, .. })
    }
}

/// Deliver `event` to `widget` if the widget is enabled and has the matching
/// capability. Presses also require the cursor to be inside the widget;
/// releases are delivered regardless so that a pressed widget can always
/// reset, and wheel events are left to the widget's own hit test. Returns
/// whatever the widget's handler returns.
pub fn dispatch(widget: &mut dyn Widget, event: &InputEvent) -> bool {
    if !widget.is_enabled() {
        return false;
    }
    let caps = widget.capabilities();
    let wanted = match event {
        InputEvent::Click { down: true, pos, .. } => caps.clickable && widget.rect().contains(*pos),
        InputEvent::Click { down: false, .. } => caps.clickable,
        InputEvent::Key { .. } => caps.keys,
        InputEvent::Wheel { .. } => caps.wheel,
    };
    wanted && widget.handle(event)
}

/// Raw device state turned into a queue of `InputEvent`s.
///
/// The host window feeds button/key/wheel transitions as they arrive; the
/// dialog drains the queue once per frame.
#[derive(Debug, Default)]
pub struct InputState {
    pub mouse_pos: IVec2,
    pub mouse_held: HashSet<MouseButton>,
    pub keys_held: HashSet<KeyCode>,
    pending: VecDeque<InputEvent>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_mouse_pos(&mut self, pos: IVec2) {
        self.mouse_pos = pos;
    }

    /// Record a button transition at the current cursor position.
    /// Repeated presses of a held button are ignored.
    pub fn mouse_button(&mut self, button: MouseButton, pressed: bool) {
        let changed = if pressed { self.mouse_held.insert(button) } else { self.mouse_held.remove(&button) };
        if changed {
            self.pending.push_back(InputEvent::Click { button, down: pressed, pos: self.mouse_pos });
        }
    }

    /// Record a key transition. Auto-repeat presses of a held key are ignored.
    pub fn key(&mut self, key: KeyCode, pressed: bool) {
        let changed = if pressed { self.keys_held.insert(key) } else { self.keys_held.remove(&key) };
        if changed {
            self.pending.push_back(InputEvent::Key { key, down: pressed });
        }
    }

    pub fn wheel(&mut self, delta: i32) {
        if delta != 0 {
            self.pending.push_back(InputEvent::Wheel { delta, pos: self.mouse_pos });
        }
    }

    pub fn is_mouse_held(&self, button: MouseButton) -> bool { self.mouse_held.contains(&button) }
    pub fn is_key_held(&self, key: KeyCode) -> bool { self.keys_held.contains(&key) }

    /// Take every event recorded since the last drain, oldest first.
    pub fn drain_events(&mut self) -> Vec<InputEvent> {
        self.pending.drain(..).collect()
    }
}
