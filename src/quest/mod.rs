//! Read-only view of the game-state quest model consumed by the quest log.
//!
//! The game owns quests and map objects; the dialog only borrows them through
//! the `Quest` and `MapObject` traits. `book` provides a JSON-backed
//! implementation for tooling and tests.

pub mod book;

use glam::IVec3;
use serde::{Deserialize, Serialize};

pub use book::{ObjectRecord, QuestBook, QuestRecord};

/// Kind of objective a quest asks for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissionType {
    /// Placeholder quest with no objective and no text. Never listed.
    None,
    Level,
    PrimaryStat,
    KillHero,
    KillCreature,
    Art,
    Army,
    Resources,
    Hero,
    Player,
    Keymaster,
}

impl MissionType {
    /// Whether quests of this type carry displayable text.
    pub fn has_text(self) -> bool {
        self != MissionType::None
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Progress {
    #[default]
    NotActive,
    InProgress,
    Complete,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    PrimarySkill,
    SecondarySkill,
    Resource,
    Creature,
    Artifact,
    Experience,
    Spell,
    Morale,
    Luck,
    Hero,
    Flag,
}

/// A reward or requirement shown alongside quest text (an artifact, an amount
/// of gold, a creature stack...).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Component {
    pub kind: ComponentKind,
    #[serde(default)]
    pub subtype: i32,
    #[serde(default)]
    pub value: i32,
}

/// Text shown when visiting a quest giver, with its attached components.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VisitText {
    pub text: String,
    pub components: Vec<Component>,
}

pub trait Quest {
    fn mission_type(&self) -> MissionType;
    fn progress(&self) -> Progress;
    /// Short one-line summary. May contain a `%s` placeholder for the name of
    /// the object that hosts the quest.
    fn rollover_text(&self) -> String;
    /// Full description plus reward/requirement components.
    fn visit_text(&self, first_visit: bool) -> VisitText;
}

pub trait MapObject {
    fn object_name(&self) -> String;
    /// Tile the object stands on; `z` is the map level.
    fn pos(&self) -> IVec3;
}

/// One quest as seen by the player: the quest, the object hosting it (seer
/// hut, border guard...) if any, and a fallback tile for object-less quests.
#[derive(Copy, Clone)]
pub struct QuestInfo<'a> {
    pub quest: &'a dyn Quest,
    pub obj: Option<&'a dyn MapObject>,
    pub tile: IVec3,
}

impl<'a> QuestInfo<'a> {
    pub fn new(quest: &'a dyn Quest, obj: Option<&'a dyn MapObject>, tile: IVec3) -> Self {
        Self { quest, obj, tile }
    }

    /// Where the quest should be marked: the hosting object's tile if there
    /// is one, otherwise the stored tile.
    pub fn target_tile(&self) -> IVec3 {
        self.obj.map_or(self.tile, |o| o.pos())
    }

    /// Rollover text with the hosting object's name filled in.
    pub fn label_text(&self) -> String {
        let template = self.quest.rollover_text();
        match self.obj {
            Some(obj) => fill_placeholders(&template, &[obj.object_name()]),
            None => template,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.quest.progress() == Progress::Complete
    }
}

/// Replace successive `%s` placeholders in `template` with `values`.
/// Surplus placeholders are left as-is; surplus values are ignored.
pub fn fill_placeholders(template: &str, values: &[String]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut values = values.iter();
    let mut rest = template;
    while let Some(at) = rest.find("%s") {
        out.push_str(&rest[..at]);
        match values.next() {
            Some(v) => out.push_str(v),
            None => out.push_str("%s"),
        }
        rest = &rest[at + 2..];
    }
    out.push_str(rest);
    out
}
