use super::{Insert, Select, Statement, Value};

use std::fmt::Write;

/// Renders a [`Statement`] as SQLite SQL.
///
/// Values never appear in the rendered text: each one is pushed into the
/// params accumulator and replaced by a numbered `?N` placeholder.
#[derive(Debug)]
pub struct Serializer<'a> {
    dst: String,
    params: &'a mut Vec<Value>,
}

impl<'a> Serializer<'a> {
    pub fn new(params: &'a mut Vec<Value>) -> Self {
        Self {
            dst: String::new(),
            params,
        }
    }

    /// Serializes a statement to a SQL string, pushing bound values into the
    /// params accumulator.
    pub fn serialize(mut self, stmt: &Statement) -> String {
        match stmt {
            Statement::Insert(stmt) => self.insert(stmt),
            Statement::Select(stmt) => self.select(stmt),
        }

        self.dst.push(';');
        self.dst
    }

    fn insert(&mut self, stmt: &Insert) {
        self.dst.push_str("INSERT INTO ");
        self.ident(&stmt.table);

        if stmt.columns.is_empty() {
            // `INSERT INTO t () VALUES ()` is not valid SQLite
            self.dst.push_str(" DEFAULT VALUES");
            return;
        }

        self.dst.push_str(" (");
        for (index, column) in stmt.columns.iter().enumerate() {
            if index > 0 {
                self.dst.push_str(", ");
            }
            self.ident(column);
        }

        self.dst.push_str(") VALUES (");
        for (index, value) in stmt.values.iter().enumerate() {
            if index > 0 {
                self.dst.push_str(", ");
            }
            self.placeholder(value);
        }
        self.dst.push(')');
    }

    fn select(&mut self, stmt: &Select) {
        let (column, value) = &stmt.filter;

        self.dst.push_str("SELECT * FROM ");
        self.ident(&stmt.table);
        self.dst.push_str(" WHERE ");
        self.ident(column);
        self.dst.push_str(" = ");
        self.placeholder(value);
    }

    fn placeholder(&mut self, value: &Value) {
        self.params.push(value.clone());
        write!(self.dst, "?{}", self.params.len()).unwrap();
    }

    fn ident(&mut self, name: &str) {
        write!(self.dst, "\"{name}\"").unwrap();
    }
}
