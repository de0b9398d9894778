//! Minimap collaborators: the base minimap widget, the adventure-map view it
//! steers, a grid-backed reference minimap, and the quest marker overlay.

pub mod overlay;

use std::sync::mpsc::Sender;

use glam::{IVec2, IVec3};

use crate::geometry::Rect;
use crate::ui::{Color, DrawList};

pub use overlay::{MarkerStyle, QuestMinimap};

/// Which layers of the base minimap to paint.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MinimapLayers {
    /// Viewport frame showing what the adventure map currently displays.
    pub radar: bool,
}

impl MinimapLayers {
    pub const ALL: Self = Self { radar: true };
    /// Terrain only. Overlays that draw their own markers use this.
    pub const BASE: Self = Self { radar: false };
}

/// Base minimap widget.
pub trait Minimap {
    /// Screen rectangle of the minimap viewport.
    fn rect(&self) -> Rect;
    /// Screen pixel corresponding to the top-left corner of `tile`.
    /// The tile's level is ignored.
    fn tile_to_pixels(&self, tile: IVec3) -> IVec2;
    /// Map level currently shown.
    fn level(&self) -> i32;
    fn set_level(&mut self, level: i32);
    /// Refresh camera/viewport-dependent state.
    fn update(&mut self);
    fn paint(&self, out: &mut DrawList, layers: MinimapLayers);
}

/// The main adventure-map view.
pub trait AdventureMap {
    /// Move the camera so `tile` is centred. Fire-and-forget.
    fn center_on(&mut self, tile: IVec3);
}

/// A channel end works as an adventure map: the map view drains the requests
/// on its own schedule.
impl AdventureMap for Sender<IVec3> {
    fn center_on(&mut self, tile: IVec3) {
        if self.send(tile).is_err() {
            log::debug!("adventure map is gone; dropping centre request for {tile}");
        }
    }
}

// ── GridMinimap ───────────────────────────────────────────────────────────────

const SURFACE: Color = Color([0.22, 0.42, 0.18, 1.0]);
const UNDERGROUND: Color = Color([0.30, 0.22, 0.14, 1.0]);
const RADAR: Color = Color::WHITE;

/// Minimap over a rectangular multi-level tile map, scaled to fit its
/// viewport. Each level is painted as a flat terrain fill; the radar frame
/// tracks the adventure-map viewport set through `set_viewport`.
pub struct GridMinimap {
    rect: Rect,
    /// Width and height in tiles, `z` = number of levels.
    map_size: IVec3,
    level: i32,
    viewport: Option<(IVec2, IVec2)>,
    radar: Option<Rect>,
}

impl GridMinimap {
    pub fn new(rect: Rect, map_size: IVec3) -> Self {
        Self { rect, map_size, level: 0, viewport: None, radar: None }
    }

    pub fn map_size(&self) -> IVec3 {
        self.map_size
    }

    /// Set the tiles visible on the adventure map: top-left tile and extent.
    /// Takes effect on the next `update`.
    pub fn set_viewport(&mut self, top_left: IVec2, tiles: IVec2) {
        self.viewport = Some((top_left, tiles));
    }

    /// Radar frame computed by the last `update`.
    pub fn radar(&self) -> Option<Rect> {
        self.radar
    }
}

impl Minimap for GridMinimap {
    fn rect(&self) -> Rect {
        self.rect
    }

    fn tile_to_pixels(&self, tile: IVec3) -> IVec2 {
        let scale = |len: i32, tiles: i32, t: i32| if tiles > 0 { len * t / tiles } else { 0 };
        IVec2::new(
            self.rect.x + scale(self.rect.w, self.map_size.x, tile.x),
            self.rect.y + scale(self.rect.h, self.map_size.y, tile.y),
        )
    }

    fn level(&self) -> i32 {
        self.level
    }

    fn set_level(&mut self, level: i32) {
        self.level = level.clamp(0, (self.map_size.z - 1).max(0));
    }

    fn update(&mut self) {
        self.radar = self.viewport.map(|(top_left, tiles)| {
            let a = self.tile_to_pixels(top_left.extend(self.level));
            let b = self.tile_to_pixels((top_left + tiles).extend(self.level));
            Rect::new(a.x, a.y, b.x - a.x, b.y - a.y)
        });
    }

    fn paint(&self, out: &mut DrawList, layers: MinimapLayers) {
        let terrain = if self.level == 0 { SURFACE } else { UNDERGROUND };
        out.fill(self.rect, terrain);
        if layers.radar {
            if let Some(radar) = self.radar {
                out.with_clip(self.rect, |out| out.border(radar, RADAR));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_to_pixels_scales_into_rect() {
        let map = GridMinimap::new(Rect::new(100, 50, 144, 144), IVec3::new(72, 72, 2));
        assert_eq!(map.tile_to_pixels(IVec3::new(0, 0, 0)), IVec2::new(100, 50));
        assert_eq!(map.tile_to_pixels(IVec3::new(36, 18, 1)), IVec2::new(172, 86));
    }

    #[test]
    fn set_level_is_clamped_to_existing_levels() {
        let mut map = GridMinimap::new(Rect::new(0, 0, 10, 10), IVec3::new(10, 10, 2));
        map.set_level(5);
        assert_eq!(map.level(), 1);
        map.set_level(-1);
        assert_eq!(map.level(), 0);
    }

    #[test]
    fn radar_follows_viewport_after_update() {
        let mut map = GridMinimap::new(Rect::new(0, 0, 100, 100), IVec3::new(50, 50, 1));
        map.set_viewport(IVec2::new(10, 10), IVec2::new(5, 5));
        assert_eq!(map.radar(), None);
        map.update();
        assert_eq!(map.radar(), Some(Rect::new(20, 20, 10, 10)));
    }

    #[test]
    fn base_layers_skip_radar() {
        let mut map = GridMinimap::new(Rect::new(0, 0, 100, 100), IVec3::new(50, 50, 1));
        map.set_viewport(IVec2::new(0, 0), IVec2::new(5, 5));
        map.update();
        let mut out = DrawList::new();
        map.paint(&mut out, MinimapLayers::BASE);
        assert_eq!(out.len(), 1);
        out = DrawList::new();
        map.paint(&mut out, MinimapLayers::ALL);
        assert_eq!(out.len(), 2);
    }
}
