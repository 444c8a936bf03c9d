use super::Error;

/// Error when the backing store cannot be reached or the connection fails
/// outside a write.
///
/// This wraps errors from the underlying SQLite driver when operations fail:
/// - Opening the database file
/// - Catalog introspection queries
/// - Lookup queries
#[derive(Debug)]
pub(super) struct ConnectionFailed {
    pub(super) inner: Box<dyn std::error::Error + Send + Sync>,
}

impl std::error::Error for ConnectionFailed {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl core::fmt::Display for ConnectionFailed {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        // Display the error and walk its source chain
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
    /// Creates an error from a failed connection operation.
    pub fn connection_failed(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::from(super::ErrorKind::ConnectionFailed(ConnectionFailed {
            inner: Box::new(err),
        }))
    }

    /// Returns `true` if this error is a connection failure.
    pub fn is_connection_failed(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::ConnectionFailed(_))
    }
}
