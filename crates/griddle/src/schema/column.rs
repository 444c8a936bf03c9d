/// A column of a reflected table.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// The name of the column in the database.
    pub name: String,

    /// The declared storage type, as reported by the catalog (e.g. `TEXT`).
    pub storage_ty: String,

    /// Whether or not the column is nullable.
    pub nullable: bool,

    /// True if the column is part of the table's primary key.
    pub primary_key: bool,
}
