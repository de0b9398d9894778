// Headless walkthrough of the quest log: loads a quest book (the bundled
// sample unless a path is given), clicks through the visible quests, clicks
// the minimap marker and closes the dialog with Enter, logging as it goes.
//
//     RUST_LOG=debug cargo run -- path/to/quests.json
use std::sync::mpsc;

use glam::{IVec2, IVec3};
use log::info;

use questlog::assets::SpriteCatalog;
use questlog::input::{InputState, KeyCode, MouseButton};
use questlog::minimap::GridMinimap;
use questlog::quest::QuestBook;
use questlog::ui::{DrawList, Widget};
use questlog::{DEFAULT_ASSET_SIZES, QuestLog, QuestLogConfig, QuestLogError, SAMPLE_QUESTS};

/// Map dimensions of the demo scenario: 72 × 72 tiles, surface + underground.
const MAP_SIZE: IVec3 = IVec3::new(72, 72, 2);

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), QuestLogError> {
    let json = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path).map_err(|source| QuestLogError::Io { path, source })?,
        None => SAMPLE_QUESTS.to_owned(),
    };
    let book = QuestBook::from_json(&json)?;
    let infos = book.infos();
    let assets = SpriteCatalog::from_json(DEFAULT_ASSET_SIZES)?;

    let config = QuestLogConfig::default();
    let window = config.window_rect();
    let mut minimap = GridMinimap::new(config.minimap_rect.translated(window.pos()), MAP_SIZE);
    minimap.set_viewport(IVec2::ZERO, IVec2::new(18, 14));
    let (camera_tx, camera_rx) = mpsc::channel();

    let mut dialog = QuestLog::new(&infos, Box::new(minimap), Box::new(camera_tx), &assets, config)?;
    report(&dialog);

    let mut input = InputState::new();
    let visible: Vec<IVec2> = dialog
        .labels()
        .iter()
        .filter(|l| l.is_enabled())
        .map(|l| l.rect().center())
        .collect();
    for pos in visible {
        click(&mut input, pos);
        pump(&mut input, &mut dialog);
        report(&dialog);
    }

    if let Some(pos) = dialog.minimap().marker().map(|m| m.rect().center()) {
        click(&mut input, pos);
        pump(&mut input, &mut dialog);
    }
    for tile in camera_rx.try_iter() {
        info!("adventure map asked to centre on {tile}");
    }

    let mut out = DrawList::new();
    dialog.paint(&mut out);
    info!("frame: {} draw commands, {} text lines", out.len(), out.texts().count());

    input.key(KeyCode::Enter, true);
    input.key(KeyCode::Enter, false);
    pump(&mut input, &mut dialog);
    info!("closed: {}", dialog.is_closed());
    Ok(())
}

fn click(input: &mut InputState, pos: IVec2) {
    input.set_mouse_pos(pos);
    input.mouse_button(MouseButton::Left, true);
    input.mouse_button(MouseButton::Left, false);
}

fn pump(input: &mut InputState, dialog: &mut QuestLog<'_>) {
    for event in input.drain_events() {
        dialog.handle_event(&event);
    }
}

fn report(dialog: &QuestLog<'_>) {
    let Some(quest) = dialog.current_quest() else {
        info!("no quest selected");
        return;
    };
    info!(
        "selected '{}' at {} (minimap level {}, {} reward components)",
        quest.label_text(),
        quest.target_tile(),
        dialog.minimap().base().level(),
        dialog.reward_components().len()
    );
}
