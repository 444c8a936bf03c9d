pub mod db;
pub use db::{Db, Row};

mod error;
pub use error::Error;

pub mod model;
pub use model::{Model, Record};

pub mod schema;
pub use schema::{table_name_for_model, Column, Table};

pub mod stmt;
pub use stmt::Value;

/// A Result type alias that uses griddle's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
