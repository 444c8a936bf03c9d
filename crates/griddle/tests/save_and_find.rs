use griddle::{Db, Model, Value};

fn setup() -> Db {
    let db = Db::in_memory().unwrap();
    db.execute_batch(
        "CREATE TABLE songs (
            id INTEGER PRIMARY KEY,
            name TEXT,
            album TEXT
        );",
    )
    .unwrap();
    db
}

#[test]
fn save_assigns_the_generated_id() {
    let db = setup();
    let song = Model::register(&db, "Song").unwrap();

    let mut record = song.create([("name", "Hello"), ("album", "25")]).unwrap();
    assert_eq!(None, record.id());
    assert!(!record.is_saved());

    record.save(&db).unwrap();

    assert!(record.id().is_some());
    assert!(record.is_saved());
}

#[test]
fn find_by_returns_saved_rows() {
    let db = setup();
    let song = Model::register(&db, "Song").unwrap();

    let mut record = song.create([("name", "Hello"), ("album", "25")]).unwrap();
    record.save(&db).unwrap();

    let rows = song.find_by(&db, "name", "Hello").unwrap();

    assert_eq!(1, rows.len());
    assert_eq!(Some("Hello"), rows[0].get("name").and_then(Value::as_str));
    assert_eq!(Some("25"), rows[0].get("album").and_then(Value::as_str));
    assert_eq!(record.id(), rows[0].get("id").and_then(Value::as_i64));
}

#[test]
fn find_by_without_matches_returns_no_rows() {
    let db = setup();
    let song = Model::register(&db, "Song").unwrap();

    let rows = song.find_by(&db, "name", "Nothing Here").unwrap();
    assert!(rows.is_empty());
}

#[test]
fn constructor_rejects_unknown_fields() {
    let db = setup();
    let song = Model::register(&db, "Song").unwrap();

    let err = song.create([("bogus", "1")]).unwrap_err();
    assert!(err.is_unknown_field());
}

#[test]
fn find_by_rejects_unknown_fields() {
    let db = setup();
    let song = Model::register(&db, "Song").unwrap();

    let err = song.find_by(&db, "bogus", "1").unwrap_err();
    assert!(err.is_unknown_field());
}

#[test]
fn accessors_read_and_write_fields() {
    let db = setup();
    let song = Model::register(&db, "Song").unwrap();

    let mut record = song.create([("name", "Hello")]).unwrap();
    assert_eq!(Some("Hello"), record.get("name").unwrap().as_str());
    assert!(record.get("album").unwrap().is_null());

    record.set("album", "25").unwrap();
    assert_eq!(Some("25"), record.get("album").unwrap().as_str());

    assert!(record.set("bogus", "1").unwrap_err().is_unknown_field());
}

#[test]
fn null_fields_are_left_out_of_the_insert() {
    let db = setup();
    let song = Model::register(&db, "Song").unwrap();

    let mut record = song.create([("name", "Instrumental")]).unwrap();
    record.save(&db).unwrap();

    let rows = song.find_by(&db, "name", "Instrumental").unwrap();
    assert_eq!(1, rows.len());
    assert!(rows[0].get("album").unwrap().is_null());
}

#[test]
fn record_with_only_null_fields_still_inserts() {
    let db = setup();
    let song = Model::register(&db, "Song").unwrap();

    let mut record = song.create(std::iter::empty::<(&str, Value)>()).unwrap();
    record.save(&db).unwrap();

    assert!(record.id().is_some());
}

#[test]
fn saving_twice_inserts_two_rows() {
    let db = setup();
    let song = Model::register(&db, "Song").unwrap();

    let mut record = song.create([("name", "Hello"), ("album", "25")]).unwrap();

    record.save(&db).unwrap();
    let first_id = record.id().unwrap();

    record.save(&db).unwrap();
    let second_id = record.id().unwrap();

    assert_ne!(first_id, second_id);

    let rows = song.find_by(&db, "name", "Hello").unwrap();
    assert_eq!(2, rows.len());
}

#[test]
fn failed_insert_leaves_the_record_unsaved() {
    let db = Db::in_memory().unwrap();
    db.execute_batch(
        "CREATE TABLE songs (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL UNIQUE,
            album TEXT
        );",
    )
    .unwrap();

    let song = Model::register(&db, "Song").unwrap();

    let mut first = song.create([("name", "Hello")]).unwrap();
    first.save(&db).unwrap();

    let mut duplicate = song.create([("name", "Hello")]).unwrap();
    let err = duplicate.save(&db).unwrap_err();

    assert!(err.is_write_failed());
    assert_eq!(None, duplicate.id());
    assert!(!duplicate.is_saved());
}
