use super::Model;
use crate::{
    db::Db,
    stmt::{Serializer, Statement, Value},
    Error, Result,
};

/// One in-memory row of a mapped model.
///
/// A record holds one value slot per reflected column. It starts unsaved
/// (primary-key slot null) and becomes saved when [`Record::save`] assigns
/// the database-generated key; there is no transition back.
#[derive(Debug, Clone)]
pub struct Record {
    model: Model,
    values: Vec<Value>,
}

impl Record {
    pub(crate) fn new(model: Model) -> Self {
        let values = vec![Value::Null; model.table().columns.len()];
        Self { model, values }
    }

    /// The model this record belongs to.
    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Reads a field's current value.
    pub fn get(&self, field: &str) -> Result<&Value> {
        let index = self.field_index(field)?;
        Ok(&self.values[index])
    }

    /// Writes a field's value.
    pub fn set(&mut self, field: &str, value: impl Into<Value>) -> Result<()> {
        let index = self.field_index(field)?;
        self.values[index] = value.into();
        Ok(())
    }

    /// The database-assigned primary key, if this record has been saved.
    pub fn id(&self) -> Option<i64> {
        let index = self.primary_key_index()?;
        self.values[index].as_i64()
    }

    pub fn is_saved(&self) -> bool {
        self.id().is_some()
    }

    /// Inserts this record as a new row and assigns the generated key.
    ///
    /// Every non-null insertable field contributes its column name and a
    /// bound parameter; the primary key is never client-supplied. On failure
    /// the record is left unsaved.
    pub fn save(&mut self, db: &Db) -> Result<()> {
        let table = self.model.table();

        let mut columns = vec![];
        let mut values = vec![];

        for (column, value) in table.columns.iter().zip(&self.values) {
            if column.primary_key || value.is_null() {
                continue;
            }

            columns.push(column.name.clone());
            values.push(value.clone());
        }

        let stmt = Statement::insert(&table.name, columns, values);

        let mut params = vec![];
        let sql = Serializer::new(&mut params).serialize(&stmt);

        db.execute_raw(&sql, &params).map_err(Error::write_failed)?;

        let id = db.last_insert_rowid_raw().map_err(Error::write_failed)?;

        if let Some(index) = self.primary_key_index() {
            self.values[index] = Value::I64(id);
        }

        Ok(())
    }

    fn field_index(&self, field: &str) -> Result<usize> {
        self.model
            .table()
            .columns
            .iter()
            .position(|column| column.name == field)
            .ok_or_else(|| Error::unknown_field(self.model.name(), field))
    }

    fn primary_key_index(&self) -> Option<usize> {
        self.model
            .table()
            .columns
            .iter()
            .position(|column| column.primary_key)
    }
}
