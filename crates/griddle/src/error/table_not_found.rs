use crate::Error;

#[derive(Debug)]
pub(super) struct TableNotFound {
    pub(super) table: Box<str>,
}

impl Error {
    /// Creates an error for a table the database catalog does not know.
    pub fn table_not_found(table: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::TableNotFound(TableNotFound {
            table: table.into().into(),
        }))
    }

    pub fn is_table_not_found(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::TableNotFound(_))
    }
}

impl std::fmt::Display for TableNotFound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "table `{}` not found in the database catalog", self.table)
    }
}
