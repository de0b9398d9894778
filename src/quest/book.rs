use glam::IVec3;
use serde::Deserialize;

use crate::error::QuestLogError;
use crate::quest::{Component, MapObject, MissionType, Progress, Quest, QuestInfo, VisitText};

/// Map object hosting a quest, as stored in a quest book.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ObjectRecord {
    pub name: String,
    pub pos: IVec3,
}

impl MapObject for ObjectRecord {
    fn object_name(&self) -> String { self.name.clone() }
    fn pos(&self) -> IVec3 { self.pos }
}

/// A quest with pre-rendered texts.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct QuestRecord {
    pub mission: MissionType,
    #[serde(default)]
    pub progress: Progress,
    #[serde(default)]
    pub rollover: String,
    #[serde(default)]
    pub first_visit_text: String,
    /// Text for repeat visits; falls back to `first_visit_text`.
    #[serde(default)]
    pub next_visit_text: Option<String>,
    #[serde(default)]
    pub components: Vec<Component>,
    #[serde(default)]
    pub object: Option<ObjectRecord>,
    /// Fallback location for quests without a hosting object.
    #[serde(default)]
    pub tile: IVec3,
}

impl Quest for QuestRecord {
    fn mission_type(&self) -> MissionType { self.mission }
    fn progress(&self) -> Progress { self.progress }
    fn rollover_text(&self) -> String { self.rollover.clone() }

    fn visit_text(&self, first_visit: bool) -> VisitText {
        let text = match (&self.next_visit_text, first_visit) {
            (Some(next), false) => next.clone(),
            _ => self.first_visit_text.clone(),
        };
        VisitText { text, components: self.components.clone() }
    }
}

/// An owned list of quest records, loadable from JSON:
///
/// ```json
/// { "quests": [ { "mission": "kill_hero", "progress": "in_progress",
///                 "rollover": "Defeat the hero for %s",
///                 "first_visit_text": "...",
///                 "object": { "name": "Seer's Hut", "pos": [10, 5, 0] } } ] }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct QuestBook {
    pub quests: Vec<QuestRecord>,
}

impl QuestBook {
    /// Parse a quest book from JSON.
    ///
    /// Returns `QuestLogError::Json` if the input is malformed or a quest is
    /// missing its mission type.
    pub fn from_json(json: &str) -> Result<Self, QuestLogError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Borrowed views suitable for `QuestLog::new`, in book order.
    pub fn infos(&self) -> Vec<QuestInfo<'_>> {
        self.quests
            .iter()
            .map(|q| QuestInfo::new(q, q.object.as_ref().map(|o| o as &dyn MapObject), q.tile))
            .collect()
    }
}
