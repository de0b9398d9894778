mod common;

use std::sync::mpsc;

use glam::IVec3;

use common::{RecordingMinimap, assets};
use questlog::quest::{ComponentKind, MissionType, Progress, Quest, QuestBook};
use questlog::{QuestLog, QuestLogConfig, QuestLogError, SAMPLE_QUESTS};

#[test]
fn sample_book_parses() {
    let book = QuestBook::from_json(SAMPLE_QUESTS).unwrap();
    assert_eq!(book.quests.len(), 5);
    assert_eq!(book.quests[2].mission, MissionType::None);
    assert_eq!(book.quests[1].progress, Progress::Complete);
    assert_eq!(book.quests[0].components[0].kind, ComponentKind::Experience);
}

#[test]
fn label_text_names_host_object() {
    let book = QuestBook::from_json(SAMPLE_QUESTS).unwrap();
    let infos = book.infos();
    assert_eq!(infos[0].label_text(), "Defeat the hero Sir Mullich for Seer's Hut");
    // No host object: the rollover text is used as written.
    assert_eq!(infos[4].label_text(), "Gather 20 gems for the merchant");
}

#[test]
fn missing_progress_defaults_to_not_active() {
    let book = QuestBook::from_json(r#"{ "quests": [ { "mission": "hero" } ] }"#).unwrap();
    let q = &book.quests[0];
    assert_eq!(q.progress(), Progress::NotActive);
    assert!(!book.infos()[0].is_complete());
}

#[test]
fn missing_mission_is_rejected() {
    let err = QuestBook::from_json(r#"{ "quests": [ { "progress": "complete" } ] }"#).unwrap_err();
    assert!(matches!(err, QuestLogError::Json(_)));
}

#[test]
fn unknown_mission_is_rejected() {
    assert!(QuestBook::from_json(r#"{ "quests": [ { "mission": "dance" } ] }"#).is_err());
}

#[test]
fn next_visit_text_used_on_repeat_visits() {
    let book = QuestBook::from_json(r#"{ "quests": [ {
        "mission": "art", "first_visit_text": "first", "next_visit_text": "again"
    } ] }"#)
    .unwrap();
    assert_eq!(book.quests[0].visit_text(true).text, "first");
    assert_eq!(book.quests[0].visit_text(false).text, "again");
}

#[test]
fn sample_book_opens_on_last_incomplete_quest() {
    let book = QuestBook::from_json(SAMPLE_QUESTS).unwrap();
    let infos = book.infos();
    let (minimap, _calls) = RecordingMinimap::new(QuestLogConfig::default().minimap_rect);
    let (tx, _rx) = mpsc::channel::<IVec3>();
    let log = QuestLog::new(&infos, Box::new(minimap), Box::new(tx), &assets(), QuestLogConfig::default()).unwrap();

    assert_eq!(log.labels().len(), 4);
    assert_eq!(log.current_quest_index(), Some(4));
    assert_eq!(log.selected_slot(), 3);
    assert_eq!(log.reward_components().len(), 1);
    assert_eq!(log.current_quest().map(|q| q.target_tile()), Some(IVec3::new(55, 14, 0)));
}
