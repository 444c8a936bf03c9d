use super::Column;
use crate::{db::Db, stmt::Value, Error, Result};

/// A table schema reflected from the database catalog.
///
/// Reflection happens once, at model registration; the column list is not
/// refreshed if the underlying table changes later.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// The name of the table in the database.
    pub name: String,

    /// Columns in declaration order.
    pub columns: Vec<Column>,
}

impl Table {
    /// Reads a table's column metadata from the SQLite catalog.
    ///
    /// Catalog rows with a null name are dropped. A table the catalog knows
    /// nothing about does not exist, which is fatal to registration.
    pub fn reflect(db: &Db, name: impl Into<String>) -> Result<Self> {
        let name = name.into();

        let rows = db.query(
            "SELECT \"name\", \"type\", \"notnull\", \"pk\" FROM pragma_table_info(?1)",
            &[Value::from(name.as_str())],
        )?;

        let mut columns = vec![];

        for row in &rows {
            let Some(column_name) = row.get("name").and_then(Value::as_str) else {
                continue;
            };

            let storage_ty = row
                .get("type")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            let nullable = row.get("notnull").and_then(Value::as_i64) == Some(0);
            let primary_key = row.get("pk").and_then(Value::as_i64).unwrap_or(0) > 0;

            columns.push(Column {
                name: column_name.to_string(),
                storage_ty,
                nullable,
                primary_key,
            });
        }

        if columns.is_empty() {
            return Err(Error::table_not_found(name));
        }

        Ok(Self { name, columns })
    }

    /// Looks up a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    /// The primary key column, if the table declares one.
    pub fn primary_key(&self) -> Option<&Column> {
        self.columns.iter().find(|column| column.primary_key)
    }

    /// Column names in declaration order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|column| column.name.as_str())
    }

    /// Columns that receive caller-supplied values on insert: every column
    /// except the primary key, which the database generates.
    pub fn insertable_columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter().filter(|column| !column.primary_key)
    }
}
