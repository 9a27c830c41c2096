use chrono::NaiveDate;
use starbook_core::{
    CelebrityPatch, CelebritySeed, CelebritySource, CelebrityStore, FetchResult, Gender,
    LoadError, LoadPhase, LOAD_FAILURE_MESSAGE,
};
use std::io;
use std::path::PathBuf;

struct StaticSource(Vec<CelebritySeed>);

impl CelebritySource for StaticSource {
    fn fetch(&self) -> FetchResult {
        Ok(self.0.clone())
    }
}

struct FailingSource;

impl CelebritySource for FailingSource {
    fn fetch(&self) -> FetchResult {
        Err(LoadError::Io {
            path: PathBuf::from("celebrities.json"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        })
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn seed(id: i64, first: &str, last: &str, dob: NaiveDate) -> CelebritySeed {
    CelebritySeed {
        id,
        first: first.to_string(),
        last: last.to_string(),
        dob,
        gender: Gender::Female,
        country: "USA".to_string(),
        description: "x".to_string(),
    }
}

fn loaded_store() -> CelebrityStore {
    let mut store = CelebrityStore::new();
    store.load(
        &StaticSource(vec![
            seed(1, "Ann", "Lee", date(1990, 1, 1)),
            seed(2, "Bea", "Moss", date(2010, 7, 20)),
            seed(3, "Cal", "Ray", date(1985, 12, 5)),
        ]),
        date(2024, 6, 1),
    );
    store
}

#[test]
fn load_decorates_every_record_with_age() {
    let store = loaded_store();
    assert_eq!(*store.phase(), LoadPhase::Ready);

    let ages: Vec<i32> = store.celebrities().iter().map(|c| c.age).collect();
    assert_eq!(ages, vec![34, 13, 38]);
}

#[test]
fn load_failure_publishes_fixed_message() {
    let mut store = CelebrityStore::new();
    store.load(&FailingSource, date(2024, 6, 1));

    assert_eq!(
        *store.phase(),
        LoadPhase::Failed(LOAD_FAILURE_MESSAGE.to_string())
    );
    assert!(store.celebrities().is_empty());
}

#[test]
fn load_runs_only_once_after_success() {
    let mut store = loaded_store();
    let before: Vec<i64> = store.celebrities().iter().map(|c| c.id).collect();

    store.load(
        &StaticSource(vec![seed(9, "Zoe", "New", date(2000, 2, 2))]),
        date(2024, 6, 1),
    );

    let after: Vec<i64> = store.celebrities().iter().map(|c| c.id).collect();
    assert_eq!(before, after);
    assert_eq!(*store.phase(), LoadPhase::Ready);
}

#[test]
fn load_runs_only_once_after_failure() {
    let mut store = CelebrityStore::new();
    store.load(&FailingSource, date(2024, 6, 1));
    store.load(
        &StaticSource(vec![seed(1, "Ann", "Lee", date(1990, 1, 1))]),
        date(2024, 6, 1),
    );

    assert_eq!(
        *store.phase(),
        LoadPhase::Failed(LOAD_FAILURE_MESSAGE.to_string())
    );
    assert!(store.celebrities().is_empty());
}

#[test]
fn update_replaces_only_named_fields() {
    let mut store = loaded_store();
    let before = store.get(1).unwrap().clone();

    store.update(
        1,
        &CelebrityPatch {
            country: Some("Canada".to_string()),
            ..CelebrityPatch::default()
        },
    );

    let after = store.get(1).unwrap();
    assert_eq!(after.country, "Canada");
    assert_eq!(after.first, before.first);
    assert_eq!(after.last, before.last);
    assert_eq!(after.dob, before.dob);
    assert_eq!(after.gender, before.gender);
    assert_eq!(after.description, before.description);
    assert_eq!(after.age, before.age);
}

#[test]
fn update_does_not_recompute_age() {
    let mut store = loaded_store();
    store.update(
        1,
        &CelebrityPatch {
            gender: Some(Gender::Other),
            ..CelebrityPatch::default()
        },
    );
    assert_eq!(store.get(1).unwrap().age, 34);
}

#[test]
fn update_unknown_id_is_noop() {
    let mut store = loaded_store();
    let before: Vec<_> = store.celebrities().to_vec();

    store.update(
        99,
        &CelebrityPatch {
            country: Some("Canada".to_string()),
            ..CelebrityPatch::default()
        },
    );

    assert_eq!(store.celebrities(), &before[..]);
}

#[test]
fn update_preserves_roster_order() {
    let mut store = loaded_store();
    store.update(
        2,
        &CelebrityPatch {
            description: Some("updated".to_string()),
            ..CelebrityPatch::default()
        },
    );

    let ids: Vec<i64> = store.celebrities().iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn delete_removes_exactly_one_record_and_is_idempotent() {
    let mut store = loaded_store();

    store.delete(2);
    let ids: Vec<i64> = store.celebrities().iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1, 3]);

    store.delete(2);
    let ids: Vec<i64> = store.celebrities().iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn single_record_end_to_end() {
    let mut store = CelebrityStore::new();
    store.load(
        &StaticSource(vec![seed(1, "Ann", "Lee", date(1990, 1, 1))]),
        date(2024, 6, 1),
    );

    let loaded = store.get(1).unwrap().clone();
    assert_eq!(loaded.age, 34);

    store.update(
        1,
        &CelebrityPatch {
            country: Some("Canada".to_string()),
            ..CelebrityPatch::default()
        },
    );
    let updated = store.get(1).unwrap();
    assert_eq!(updated.country, "Canada");
    assert_eq!(
        (
            updated.id,
            updated.first.as_str(),
            updated.last.as_str(),
            updated.dob,
            updated.gender,
            updated.description.as_str(),
            updated.age,
        ),
        (
            loaded.id,
            loaded.first.as_str(),
            loaded.last.as_str(),
            loaded.dob,
            loaded.gender,
            loaded.description.as_str(),
            loaded.age,
        )
    );

    store.delete(1);
    assert!(store.celebrities().is_empty());
}
