use griddle::{Db, Model};

fn main() -> griddle::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let db = Db::in_memory()?;

    db.execute_batch(
        "DROP TABLE IF EXISTS songs;
         CREATE TABLE IF NOT EXISTS songs (
             id INTEGER PRIMARY KEY,
             name TEXT,
             album TEXT
         );",
    )?;

    println!("==> let song = Model::register(&db, \"Song\")");
    let song = Model::register(&db, "Song")?;
    println!(
        "==> mapped table `{}` with columns {:?}",
        song.table_name(),
        song.table().column_names().collect::<Vec<_>>()
    );

    let mut hello = song.create([("name", "Hello"), ("album", "25")])?;
    hello.save(&db)?;
    println!("==> saved `Hello` with id {:?}", hello.id());

    let mut ninety_nine = song.create([("name", "99 Problems"), ("album", "The Black Album")])?;
    ninety_nine.save(&db)?;
    println!("==> saved `99 Problems` with id {:?}", ninety_nine.id());

    println!("==> song.find_by(&db, \"name\", \"Hello\")");
    for row in song.find_by(&db, "name", "Hello")? {
        println!("{row:?}");
    }

    Ok(())
}
