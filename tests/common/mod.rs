#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::mpsc::{self, Receiver};

use glam::{IVec2, IVec3};

use questlog::assets::SpriteCatalog;
use questlog::geometry::Rect;
use questlog::minimap::{Minimap, MinimapLayers};
use questlog::quest::{Component, MissionType, ObjectRecord, Progress, QuestInfo, QuestRecord};
use questlog::ui::{Color, DrawList};
use questlog::{QuestLog, QuestLogConfig};

/// Dialog origin for the default config: 610 × 440 centred in 800 × 600.
pub const ORIGIN: IVec2 = IVec2::new(95, 80);
pub const MARKER_SIZE: IVec2 = IVec2::new(13, 13);
pub const OK_SIZE: IVec2 = IVec2::new(64, 30);

pub type CallLog = Rc<RefCell<Vec<String>>>;

/// Minimap that maps each tile to 2 × 2 pixels and records every call.
pub struct RecordingMinimap {
    pub rect: Rect,
    pub level: i32,
    pub calls: CallLog,
}

impl RecordingMinimap {
    pub fn new(rect: Rect) -> (Self, CallLog) {
        let calls = CallLog::default();
        (Self { rect, level: 0, calls: calls.clone() }, calls)
    }
}

impl Minimap for RecordingMinimap {
    fn rect(&self) -> Rect { self.rect }

    fn tile_to_pixels(&self, tile: IVec3) -> IVec2 {
        self.calls.borrow_mut().push(format!("tile_to_pixels({},{},{})", tile.x, tile.y, tile.z));
        self.rect.pos() + IVec2::new(tile.x * 2, tile.y * 2)
    }

    fn level(&self) -> i32 { self.level }

    fn set_level(&mut self, level: i32) {
        self.calls.borrow_mut().push(format!("set_level({level})"));
        self.level = level;
    }

    fn update(&mut self) {
        self.calls.borrow_mut().push("update".into());
    }

    fn paint(&self, out: &mut DrawList, layers: MinimapLayers) {
        out.fill(self.rect, Color::BLACK);
        if layers.radar {
            out.border(self.rect, Color::WHITE);
        }
    }
}

pub fn quest(mission: MissionType, progress: Progress, name: &str) -> QuestRecord {
    QuestRecord {
        mission,
        progress,
        rollover: name.to_string(),
        first_visit_text: format!("{name}: details"),
        next_visit_text: None,
        components: vec![],
        object: None,
        tile: IVec3::ZERO,
    }
}

pub fn with_object(mut q: QuestRecord, name: &str, pos: IVec3) -> QuestRecord {
    q.object = Some(ObjectRecord { name: name.to_string(), pos });
    q
}

pub fn with_components(mut q: QuestRecord, components: Vec<Component>) -> QuestRecord {
    q.components = components;
    q
}

pub fn infos(records: &[QuestRecord]) -> Vec<QuestInfo<'_>> {
    records
        .iter()
        .map(|q| QuestInfo::new(q, q.object.as_ref().map(|o| o as &dyn questlog::quest::MapObject), q.tile))
        .collect()
}

pub fn assets() -> SpriteCatalog {
    SpriteCatalog::new()
        .with_frames("VwSymbol.def", vec![IVec2::new(8, 8), IVec2::new(8, 8), IVec2::new(8, 8), MARKER_SIZE])
        .with_frames("IOKAY.DEF", vec![OK_SIZE, OK_SIZE])
}

pub struct Harness<'a> {
    pub log: QuestLog<'a>,
    pub camera: Receiver<IVec3>,
    pub calls: CallLog,
}

pub fn open<'a>(infos: &'a [QuestInfo<'a>]) -> Harness<'a> {
    open_with(infos, QuestLogConfig::default())
}

pub fn open_with<'a>(infos: &'a [QuestInfo<'a>], config: QuestLogConfig) -> Harness<'a> {
    let minimap_rect = config.minimap_rect.translated(config.window_rect().pos());
    let (minimap, calls) = RecordingMinimap::new(minimap_rect);
    let (tx, camera) = mpsc::channel();
    let log = QuestLog::new(infos, Box::new(minimap), Box::new(tx), &assets(), config)
        .expect("default config is valid");
    Harness { log, camera, calls }
}

/// Top-left of label row `row` of the visible page.
pub fn row_pos(row: i32) -> IVec2 {
    ORIGIN + IVec2::new(14, 195 + row * 32)
}
