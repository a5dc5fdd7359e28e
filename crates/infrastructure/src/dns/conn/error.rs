use ferrous_dnscache_domain::DomainError;
use std::io;
use thiserror::Error;

/// Failures raised by [`super::CacheConn`] itself.
///
/// They travel through the `DnsConn` surface as `io::Error`; use
/// [`CacheConnError::from_io`] to get them back.
#[derive(Debug, Error)]
pub enum CacheConnError {
    #[error("Unpack DNS message to check cache: {0}")]
    InvalidQuery(#[source] DomainError),

    #[error("Build cached response: {0}")]
    CacheInconsistency(#[source] DomainError),

    #[error("Unpack response to cache on close: {0}")]
    InvalidResponse(#[source] DomainError),

    #[error("Build new answer to cache on close: {0}")]
    InvalidAnswer(#[source] DomainError),

    #[error("No query has been written on this connection")]
    NotWritten,

    #[error("Query was already answered from cache")]
    AlreadyAnswered,

    #[error("Connection is closed")]
    Closed,

    #[error("{0} is not supported by the cache connection")]
    Unsupported(&'static str),

    #[error("Close real conn: {0}")]
    CloseTransport(#[source] io::Error),

    #[error("{}", join_messages(.0))]
    Joined(Vec<CacheConnError>),
}

impl CacheConnError {
    /// Folds errors collected during one operation; `None` when there are none.
    pub fn join(mut errors: Vec<CacheConnError>) -> Option<CacheConnError> {
        match errors.len() {
            0 => None,
            1 => errors.pop(),
            _ => Some(CacheConnError::Joined(errors)),
        }
    }

    pub fn kind(&self) -> io::ErrorKind {
        match self {
            CacheConnError::InvalidQuery(_)
            | CacheConnError::InvalidResponse(_)
            | CacheConnError::InvalidAnswer(_) => io::ErrorKind::InvalidData,
            CacheConnError::CacheInconsistency(_) => io::ErrorKind::Other,
            CacheConnError::NotWritten | CacheConnError::Closed => io::ErrorKind::NotConnected,
            CacheConnError::AlreadyAnswered => io::ErrorKind::InvalidInput,
            CacheConnError::Unsupported(_) => io::ErrorKind::Unsupported,
            CacheConnError::CloseTransport(e) => e.kind(),
            CacheConnError::Joined(errors) => errors
                .first()
                .map(CacheConnError::kind)
                .unwrap_or(io::ErrorKind::Other),
        }
    }

    pub fn from_io(err: &io::Error) -> Option<&CacheConnError> {
        err.get_ref()?.downcast_ref::<CacheConnError>()
    }
}

impl From<CacheConnError> for io::Error {
    fn from(err: CacheConnError) -> Self {
        match err {
            CacheConnError::CloseTransport(inner) => inner,
            other => io::Error::new(other.kind(), other),
        }
    }
}

fn join_messages(errors: &[CacheConnError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
