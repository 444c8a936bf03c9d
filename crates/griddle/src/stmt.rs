mod insert;
pub use insert::Insert;

mod select;
pub use select::Select;

mod serializer;
pub use serializer::Serializer;

mod value;
pub use value::Value;

/// A SQL statement understood by the serializer.
#[derive(Debug, Clone)]
pub enum Statement {
    Insert(Insert),
    Select(Select),
}
