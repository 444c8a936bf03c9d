use super::{Statement, Value};

/// An `INSERT INTO <table> (<columns>) VALUES (<placeholders>)` statement.
#[derive(Debug, Clone)]
pub struct Insert {
    /// Name of the target table.
    pub table: String,

    /// Columns receiving a value, in table declaration order.
    pub columns: Vec<String>,

    /// One value per column.
    pub values: Vec<Value>,
}

impl Statement {
    /// Inserts one row.
    pub fn insert(table: impl Into<String>, columns: Vec<String>, values: Vec<Value>) -> Self {
        Insert {
            table: table.into(),
            columns,
            values,
        }
        .into()
    }
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Self::Insert(value)
    }
}
