mod connection_failed;
mod table_not_found;
mod unknown_field;
mod write_failed;

use connection_failed::ConnectionFailed;
use table_not_found::TableNotFound;
use unknown_field::UnknownField;
use write_failed::WriteFailed;

/// An error that can occur in griddle.
pub struct Error {
    kind: ErrorKind,
}

#[derive(Debug)]
enum ErrorKind {
    Anyhow(anyhow::Error),
    ConnectionFailed(ConnectionFailed),
    TableNotFound(TableNotFound),
    UnknownField(UnknownField),
    WriteFailed(WriteFailed),
}

impl Error {
    fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            ErrorKind::ConnectionFailed(err) => Some(err),
            ErrorKind::WriteFailed(err) => Some(err),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(self.kind(), f)
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            f.debug_struct("Error").field("kind", &self.kind).finish()
        }
    }
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Anyhow(err) => core::fmt::Display::fmt(err, f),
            ConnectionFailed(err) => core::fmt::Display::fmt(err, f),
            TableNotFound(err) => core::fmt::Display::fmt(err, f),
            UnknownField(err) => core::fmt::Display::fmt(err, f),
            WriteFailed(err) => core::fmt::Display::fmt(err, f),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error { kind }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Anyhow(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_field_display() {
        let err = Error::unknown_field("Song", "bogus");
        assert_eq!("unknown field `bogus` for model `Song`", err.to_string());
        assert!(err.is_unknown_field());
        assert!(!err.is_write_failed());
    }

    #[test]
    fn table_not_found_display() {
        let err = Error::table_not_found("songs");
        assert_eq!(
            "table `songs` not found in the database catalog",
            err.to_string()
        );
        assert!(err.is_table_not_found());
        assert!(!err.is_connection_failed());
    }

    #[test]
    fn anyhow_interop() {
        let err = Error::from(anyhow::anyhow!("boom"));
        assert_eq!("boom", err.to_string());
    }
}
