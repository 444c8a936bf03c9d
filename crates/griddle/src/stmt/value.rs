use rusqlite::types::{ToSql, ToSqlOutput, Value as SqlValue, ValueRef};

/// A value held in a record field or bound to a statement parameter.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Boolean value
    Bool(bool),

    /// Signed 64-bit integer
    I64(i64),

    /// 64-bit floating point value
    F64(f64),

    /// String value
    String(String),

    /// Binary value
    Bytes(Vec<u8>),

    /// Null value
    #[default]
    Null,
}

impl Value {
    /// Returns a `Value` representing null
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::I64(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }

    /// Converts a SQLite value into a griddle value.
    pub(crate) fn from_sql(value: SqlValue) -> Self {
        match value {
            SqlValue::Null => Self::Null,
            SqlValue::Integer(value) => Self::I64(value),
            SqlValue::Real(value) => Self::F64(value),
            SqlValue::Text(value) => Self::String(value),
            SqlValue::Blob(value) => Self::Bytes(value),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::I64(value.into())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::I64(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::F64(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Self::String(value.clone())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => value.into(),
            None => Self::Null,
        }
    }
}

impl ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match self {
            Value::Bool(true) => Ok(ToSqlOutput::Owned(SqlValue::Integer(1))),
            Value::Bool(false) => Ok(ToSqlOutput::Owned(SqlValue::Integer(0))),
            Value::I64(value) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*value))),
            Value::F64(value) => Ok(ToSqlOutput::Owned(SqlValue::Real(*value))),
            Value::String(value) => Ok(ToSqlOutput::Borrowed(ValueRef::Text(value.as_bytes()))),
            Value::Bytes(value) => Ok(ToSqlOutput::Borrowed(ValueRef::Blob(&value[..]))),
            Value::Null => Ok(ToSqlOutput::Owned(SqlValue::Null)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_is_the_default() {
        assert_eq!(Value::Null, Value::default());
        assert!(Value::null().is_null());
    }

    #[test]
    fn conversions_from_primitives() {
        assert_eq!(Value::I64(25), Value::from(25i64));
        assert_eq!(Value::String("Hello".to_string()), Value::from("Hello"));
        assert_eq!(Value::Bool(true), Value::from(true));
        assert_eq!(Value::Null, Value::from(None::<i64>));
        assert_eq!(Value::I64(7), Value::from(Some(7i64)));
    }

    #[test]
    fn accessors_match_variants() {
        assert_eq!(Some(25), Value::I64(25).as_i64());
        assert_eq!(None, Value::String("25".to_string()).as_i64());
        assert_eq!(Some("25"), Value::String("25".to_string()).as_str());
    }
}
