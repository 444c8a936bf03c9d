use crate::{stmt::Value, Error, Result};

use indexmap::IndexMap;
use rusqlite::{types::Value as SqlValue, Connection as RusqliteConnection};
use std::path::Path;

/// A row returned from a query: column name to value, in select order.
pub type Row = IndexMap<String, Value>;

/// Handle to a SQLite database.
///
/// Wraps a single synchronous connection. A `Db` is created once at startup
/// and passed by reference to registration and persistence calls; it is
/// never globally reachable and is closed by dropping it.
#[derive(Debug)]
pub struct Db {
    connection: RusqliteConnection,
}

impl Db {
    /// Opens a database file, creating it if it does not exist.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = RusqliteConnection::open(path).map_err(Error::connection_failed)?;
        Ok(Self { connection })
    }

    /// Opens an in-memory database.
    pub fn in_memory() -> Result<Self> {
        let connection = RusqliteConnection::open_in_memory().map_err(Error::connection_failed)?;
        Ok(Self { connection })
    }

    /// Executes a statement, returning the number of affected rows.
    pub fn execute(&self, sql: &str, params: &[Value]) -> Result<usize> {
        self.execute_raw(sql, params).map_err(Error::connection_failed)
    }

    /// Executes a query, returning rows as ordered column-name-to-value
    /// mappings.
    pub fn query(&self, sql: &str, params: &[Value]) -> Result<Vec<Row>> {
        self.query_raw(sql, params).map_err(Error::connection_failed)
    }

    /// Executes a batch of semicolon-separated statements.
    ///
    /// Intended for bootstrap DDL; nothing is returned.
    pub fn execute_batch(&self, sql: &str) -> Result<()> {
        tracing::debug!(sql, "executing batch");

        self.connection
            .execute_batch(sql)
            .map_err(Error::connection_failed)
    }

    pub(crate) fn execute_raw(&self, sql: &str, params: &[Value]) -> rusqlite::Result<usize> {
        tracing::debug!(sql, params = params.len(), "executing statement");

        let mut stmt = self.connection.prepare(sql)?;
        stmt.execute(rusqlite::params_from_iter(params.iter()))
    }

    pub(crate) fn query_raw(&self, sql: &str, params: &[Value]) -> rusqlite::Result<Vec<Row>> {
        tracing::debug!(sql, params = params.len(), "executing query");

        let mut stmt = self.connection.prepare(sql)?;

        let column_names: Vec<String> = stmt
            .column_names()
            .iter()
            .map(|name| name.to_string())
            .collect();

        let rows = stmt.query_map(rusqlite::params_from_iter(params.iter()), |row| {
            let mut fields = Row::with_capacity(column_names.len());
            for (index, name) in column_names.iter().enumerate() {
                let value: SqlValue = row.get(index)?;
                fields.insert(name.clone(), Value::from_sql(value));
            }
            Ok(fields)
        })?;

        rows.collect::<rusqlite::Result<Vec<_>>>()
    }

    /// Reads the primary key generated by the most recent insert on this
    /// connection.
    pub(crate) fn last_insert_rowid_raw(&self) -> rusqlite::Result<i64> {
        self.connection
            .query_row("SELECT last_insert_rowid()", [], |row| row.get(0))
    }
}
