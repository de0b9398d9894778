use std::sync::mpsc::{self, Receiver, Sender};

use glam::IVec2;
use log::{debug, trace};

use crate::geometry::Rect;
use crate::input::{InputEvent, dispatch};
use crate::minimap::{AdventureMap, Minimap, MinimapLayers};
use crate::quest::QuestInfo;
use crate::ui::quest::QuestIcon;
use crate::ui::{Capabilities, DrawList, Widget};

/// Appearance of the quest marker.
#[derive(Clone, Debug, PartialEq)]
pub struct MarkerStyle {
    pub asset: String,
    pub frame: usize,
    /// Pixel size of the marker frame; the marker is centred on its tile.
    pub size: IVec2,
}

/// Posted by the marker icon when clicked.
struct MarkerClicked;

/// A base minimap with at most one quest marker on top.
///
/// The marker is rebuilt from scratch on every `update` while a quest is
/// current; clicking it re-centres the adventure map on the quest's host
/// object.
pub struct QuestMinimap<'a> {
    base: Box<dyn Minimap + 'a>,
    adventure_map: Box<dyn AdventureMap + 'a>,
    style: MarkerStyle,
    current: Option<&'a QuestInfo<'a>>,
    marker: Option<QuestIcon>,
    clicks_tx: Sender<MarkerClicked>,
    clicks_rx: Receiver<MarkerClicked>,
}

impl<'a> QuestMinimap<'a> {
    pub fn new(base: Box<dyn Minimap + 'a>, adventure_map: Box<dyn AdventureMap + 'a>, style: MarkerStyle) -> Self {
        let (clicks_tx, clicks_rx) = mpsc::channel();
        Self { base, adventure_map, style, current: None, marker: None, clicks_tx, clicks_rx }
    }

    pub fn base(&self) -> &dyn Minimap {
        self.base.as_ref()
    }

    pub fn current_quest(&self) -> Option<&'a QuestInfo<'a>> {
        self.current
    }

    pub fn marker(&self) -> Option<&QuestIcon> {
        self.marker.as_ref()
    }

    /// Make `quest` the marked quest and rebuild the marker.
    pub fn set_quest(&mut self, quest: &'a QuestInfo<'a>) {
        self.current = Some(quest);
        self.update();
    }

    /// Refresh the base minimap, then rebuild the marker for the current
    /// quest, switching the minimap to the quest's level if needed.
    pub fn update(&mut self) {
        self.base.update();
        let Some(quest) = self.current else {
            return;
        };
        self.marker = None;

        let tile = quest.target_tile();
        let pixel = self.base.tile_to_pixels(tile);
        if self.base.level() != tile.z {
            debug!("minimap: switching to level {} for quest marker", tile.z);
            self.base.set_level(tile.z);
        }

        let rect = Rect::centered_on(pixel, self.style.size);
        let mut icon = QuestIcon::new(self.style.asset.clone(), self.style.frame, rect, self.base.rect());
        let tx = self.clicks_tx.clone();
        icon.set_callback(move || {
            let _ = tx.send(MarkerClicked);
        });
        trace!("minimap: marker for tile {tile} at {rect:?}");
        self.marker = Some(icon);
    }

    /// Centre the adventure map on the current quest's host object.
    /// Quests without an object only have a tile and are left alone.
    pub fn marker_clicked(&mut self) {
        if let Some(obj) = self.current.and_then(|q| q.obj) {
            let pos = obj.pos();
            debug!("minimap: centring adventure map on {pos}");
            self.adventure_map.center_on(pos);
        }
    }

    fn drain_clicks(&mut self) {
        while self.clicks_rx.try_recv().is_ok() {
            self.marker_clicked();
        }
    }
}

impl Widget for QuestMinimap<'_> {
    fn rect(&self) -> Rect {
        self.base.rect()
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::CLICK_PAINT
    }

    /// Terrain without the radar frame, then the marker.
    fn paint(&self, out: &mut DrawList) {
        self.base.paint(out, MinimapLayers::BASE);
        if let Some(marker) = &self.marker {
            marker.paint(out);
        }
    }

    fn handle(&mut self, event: &InputEvent) -> bool {
        let hit = match self.marker.as_mut() {
            Some(marker) => dispatch(marker, event),
            None => false,
        };
        self.drain_clicks();
        hit
    }
}
