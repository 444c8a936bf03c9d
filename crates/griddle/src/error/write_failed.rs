use super::Error;

/// Error when an insert fails.
///
/// This wraps driver errors raised while writing a row: constraint
/// violations, a connection failing mid-insert, or the follow-up read of the
/// generated key. The record being saved is left unsaved.
#[derive(Debug)]
pub(super) struct WriteFailed {
    pub(super) inner: Box<dyn std::error::Error + Send + Sync>,
}

impl std::error::Error for WriteFailed {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl core::fmt::Display for WriteFailed {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.inner, f)?;
        let mut source = self.inner.source();
        while let Some(err) = source {
            write!(f, ": {}", err)?;
            source = err.source();
        }
        Ok(())
    }
}

impl Error {
    /// Creates an error from a failed write.
    pub fn write_failed(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::from(super::ErrorKind::WriteFailed(WriteFailed {
            inner: Box::new(err),
        }))
    }

    /// Returns `true` if this error is a failed write.
    pub fn is_write_failed(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::WriteFailed(_))
    }
}
