use std::collections::HashMap;

use glam::IVec2;
use serde::Deserialize;

use crate::error::QuestLogError;

/// Size lookup for sprite and animation assets. Decoding pixels is the asset
/// layer's business; dialogs only need dimensions to lay widgets out.
pub trait AssetCatalog {
    /// Pixel size of `frame` of asset `name`, or `None` if unknown.
    fn frame_size(&self, name: &str, frame: usize) -> Option<IVec2>;
}

/// In-memory catalog mapping asset names to per-frame sizes.
///
/// JSON form: `{ "VwSymbol.def": [[8, 8], [8, 8], [8, 8], [13, 13]] }`.
/// Asset names are matched case-insensitively.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(from = "HashMap<String, Vec<IVec2>>")]
pub struct SpriteCatalog {
    frames: HashMap<String, Vec<IVec2>>,
}

impl SpriteCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_frames(mut self, name: &str, frames: Vec<IVec2>) -> Self {
        self.insert(name, frames);
        self
    }

    pub fn insert(&mut self, name: &str, frames: Vec<IVec2>) {
        self.frames.insert(name.to_ascii_lowercase(), frames);
    }

    pub fn from_json(json: &str) -> Result<Self, QuestLogError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl From<HashMap<String, Vec<IVec2>>> for SpriteCatalog {
    fn from(raw: HashMap<String, Vec<IVec2>>) -> Self {
        let mut catalog = Self::new();
        for (name, frames) in raw {
            catalog.insert(&name, frames);
        }
        catalog
    }
}

impl AssetCatalog for SpriteCatalog {
    fn frame_size(&self, name: &str, frame: usize) -> Option<IVec2> {
        self.frames.get(&name.to_ascii_lowercase())?.get(frame).copied()
    }
}
