use crate::Error;

#[derive(Debug)]
pub(super) struct UnknownField {
    pub(super) model: Box<str>,
    pub(super) field: Box<str>,
}

impl Error {
    /// Creates an error for a field that is not part of a model's reflected
    /// column list.
    pub fn unknown_field(model: impl Into<String>, field: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnknownField(UnknownField {
            model: model.into().into(),
            field: field.into().into(),
        }))
    }

    pub fn is_unknown_field(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnknownField(_))
    }
}

impl std::fmt::Display for UnknownField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown field `{}` for model `{}`", self.field, self.model)
    }
}
