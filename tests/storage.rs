use chrono::{TimeZone, Utc};
use palancas::domain::{Lever, Mood, Session, SessionDraft};
use palancas::storage::{FileKeyValueStore, KeyValueStore, SessionStore, SESSIONS_KEY};

fn session(id: &str, minutes: i64) -> Session {
    let at = Utc.with_ymd_and_hms(2024, 4, 2, 9, 0, 0).unwrap() + chrono::Duration::minutes(minutes);
    Session::from_draft(
        SessionDraft {
            lever: Lever::Imagination,
            exercise_name: "Ensayo Mental".to_string(),
            mood_before: Mood::new(3).unwrap(),
            mood_after: Mood::new(8).unwrap(),
        },
        id.to_string(),
        at,
    )
}

#[test]
fn history_survives_reopening_the_store() {
    let dir = tempfile::tempdir().unwrap();

    let mut store = SessionStore::new(FileKeyValueStore::new(dir.path().to_path_buf()).unwrap());
    assert!(store.load().is_empty());
    store.append(session("a", 0)).unwrap();
    store.append(session("b", 5)).unwrap();

    let mut reopened = SessionStore::new(FileKeyValueStore::new(dir.path().to_path_buf()).unwrap());
    let sessions = reopened.load();
    assert_eq!(sessions.len(), 2);
    assert_eq!(sessions[0], session("a", 0));
    assert_eq!(sessions[1].id, "b");
}

#[test]
fn load_append_load_extends_prior_collection() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = SessionStore::new(FileKeyValueStore::new(dir.path().to_path_buf()).unwrap());
    store.load();
    store.append(session("first", 0)).unwrap();

    let before = store.load().to_vec();
    store.append(session("second", 1)).unwrap();
    let after = store.load().to_vec();

    assert_eq!(after.len(), before.len() + 1);
    assert_eq!(&after[..before.len()], &before[..]);
    assert_eq!(after.last().unwrap().id, "second");
}

#[test]
fn slot_is_a_json_array_in_its_own_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = SessionStore::new(FileKeyValueStore::new(dir.path().to_path_buf()).unwrap());
    store.append(session("a", 0)).unwrap();

    let path = dir.path().join(format!("{SESSIONS_KEY}.json"));
    let text = std::fs::read_to_string(path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();

    let record = &value[0];
    assert_eq!(record["lever"], "imagination");
    assert_eq!(record["moodBefore"], 3);
    assert_eq!(record["moodAfter"], 8);
    assert_eq!(record["date"], "2024-04-02T09:00:00.000Z");
    assert_eq!(record["timestamp"], 1_712_048_400_000_i64);
}

#[test]
fn corrupt_file_loads_empty_and_is_overwritten_on_append() {
    let dir = tempfile::tempdir().unwrap();
    let mut backend = FileKeyValueStore::new(dir.path().to_path_buf()).unwrap();
    backend.set(SESSIONS_KEY, "[{\"id\": truncated").unwrap();

    let mut store = SessionStore::new(backend);
    assert!(store.load().is_empty());

    store.append(session("fresh", 0)).unwrap();
    let mut reopened = SessionStore::new(FileKeyValueStore::new(dir.path().to_path_buf()).unwrap());
    assert_eq!(reopened.load().len(), 1);
}

#[test]
fn appending_before_loading_keeps_earlier_sessions() {
    let dir = tempfile::tempdir().unwrap();
    let mut first = SessionStore::new(FileKeyValueStore::new(dir.path().to_path_buf()).unwrap());
    first.append(session("a", 0)).unwrap();
    first.append(session("b", 1)).unwrap();

    let mut second = SessionStore::new(FileKeyValueStore::new(dir.path().to_path_buf()).unwrap());
    second.append(session("c", 2)).unwrap();

    let mut reopened = SessionStore::new(FileKeyValueStore::new(dir.path().to_path_buf()).unwrap());
    let ids: Vec<&str> = reopened.load().iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, ["a", "b", "c"]);
}
