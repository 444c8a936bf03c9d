mod record;
pub use record::Record;

use crate::{
    db::{Db, Row},
    schema::{self, Table},
    stmt::{Serializer, Statement, Value},
    Error, Result,
};

use std::sync::Arc;

/// Shared state between a model and all of its records.
#[derive(Debug)]
struct Shared {
    /// The model name, e.g. `Song`.
    name: String,

    /// The reflected backing table.
    table: Table,
}

/// A mapped model: record shape and persistence behavior reflected from a
/// database table.
///
/// Registration derives the backing table name from the model name, reads
/// the column list from the catalog once, and keeps it as the field
/// descriptor list. Every accessor call afterwards is validated against
/// those descriptors; the catalog is never re-read. Cloning produces a new
/// handle to the same registered model.
#[derive(Debug, Clone)]
pub struct Model {
    shared: Arc<Shared>,
}

impl Model {
    /// Registers a model, reflecting its backing table from the catalog.
    pub fn register(db: &Db, name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let table_name = schema::table_name_for_model(&name);
        let table = Table::reflect(db, table_name)?;

        Ok(Self {
            shared: Arc::new(Shared { name, table }),
        })
    }

    pub fn name(&self) -> &str {
        &self.shared.name
    }

    /// The reflected backing table schema.
    pub fn table(&self) -> &Table {
        &self.shared.table
    }

    /// The name of the backing table.
    pub fn table_name(&self) -> &str {
        &self.shared.table.name
    }

    /// Creates a record from field name/value pairs.
    ///
    /// Each pair is routed through the record's `set` accessor, so a key
    /// that does not name a reflected column fails with an unknown-field
    /// error and no record is returned.
    pub fn create<K, V>(&self, fields: impl IntoIterator<Item = (K, V)>) -> Result<Record>
    where
        K: AsRef<str>,
        V: Into<Value>,
    {
        let mut record = Record::new(self.clone());

        for (field, value) in fields {
            record.set(field.as_ref(), value)?;
        }

        Ok(record)
    }

    /// Looks up raw rows by field equality.
    ///
    /// Rows come back as ordered column-name-to-value mappings and are not
    /// hydrated into records. No match is an empty vector, not an error.
    pub fn find_by(&self, db: &Db, field: &str, value: impl Into<Value>) -> Result<Vec<Row>> {
        if self.table().column(field).is_none() {
            return Err(Error::unknown_field(self.name(), field));
        }

        let stmt = Statement::select(self.table_name(), field, value.into());

        let mut params = vec![];
        let sql = Serializer::new(&mut params).serialize(&stmt);

        db.query(&sql, &params)
    }
}
