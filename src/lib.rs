pub mod assets;
pub mod config;
pub mod error;
pub mod geometry;
pub mod input;
pub mod minimap;
pub mod quest;
pub mod quest_log;
pub mod ui;

pub use config::QuestLogConfig;
pub use error::QuestLogError;
pub use quest_log::QuestLog;

/// Sample quest book embedded at compile time (see `quest::QuestBook::from_json`).
pub const SAMPLE_QUESTS: &str = include_str!("../resources/sample_quests.json");

/// Frame sizes of the assets the quest log references (see `assets::SpriteCatalog::from_json`).
pub const DEFAULT_ASSET_SIZES: &str = include_str!("../resources/asset_sizes.json");
