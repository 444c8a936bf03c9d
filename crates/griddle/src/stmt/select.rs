use super::{Statement, Value};

/// A `SELECT * FROM <table> WHERE <column> = <placeholder>` statement.
#[derive(Debug, Clone)]
pub struct Select {
    /// Name of the queried table.
    pub table: String,

    /// Equality filter: column name and the value to match.
    pub filter: (String, Value),
}

impl Statement {
    /// Selects all rows matching a field equality filter.
    pub fn select(table: impl Into<String>, column: impl Into<String>, value: Value) -> Self {
        Select {
            table: table.into(),
            filter: (column.into(), value),
        }
        .into()
    }
}

impl From<Select> for Statement {
    fn from(value: Select) -> Self {
        Self::Select(value)
    }
}
