use thiserror::Error;

/// Concrete errors that occur within crumb's http implementation
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// the response head was already transmitted, so further head
    /// mutation cannot reach the client
    #[error("headers already sent")]
    HeadersAlreadySent,
}

/// this crate's result type
pub type Result<T> = std::result::Result<T, Error>;
