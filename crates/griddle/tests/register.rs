use griddle::{Db, Model};

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
fn register_reflects_catalog_columns() {
    let db = setup();
    let song = Model::register(&db, "Song").unwrap();

    assert_eq!("Song", song.name());
    assert_eq!("songs", song.table_name());

    let names: Vec<_> = song.table().column_names().collect();
    assert_eq!(vec!["id", "name", "album"], names);
}

#[test]
fn insertable_columns_exclude_the_primary_key() {
    let db = setup();
    let song = Model::register(&db, "Song").unwrap();

    let insertable: Vec<_> = song
        .table()
        .insertable_columns()
        .map(|column| column.name.as_str())
        .collect();
    assert_eq!(vec!["name", "album"], insertable);
}

#[test]
fn primary_key_column_is_flagged() {
    let db = setup();
    let song = Model::register(&db, "Song").unwrap();

    let pk = song.table().primary_key().unwrap();
    assert_eq!("id", pk.name);
    assert_eq!("INTEGER", pk.storage_ty);
}

#[test]
fn register_unknown_table_fails() {
    let db = Db::in_memory().unwrap();

    let err = Model::register(&db, "Song").unwrap_err();
    assert!(err.is_table_not_found());
}

#[test]
fn schema_is_not_refreshed_after_registration() {
    let db = setup();
    let song = Model::register(&db, "Song").unwrap();

    db.execute_batch("ALTER TABLE songs ADD COLUMN year INTEGER;")
        .unwrap();

    assert!(song.table().column("year").is_none());
    assert!(song.table().column("album").is_some());
}
