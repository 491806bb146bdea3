use std::fmt;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    /// The claim record could not be decoded or is missing required data.
    InvalidClaim(String),
    /// A captured signature is not a usable PNG data URL.
    Signature(String),
    Pdf(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O error: {e}"),
            Error::InvalidClaim(msg) => write!(f, "invalid claim: {msg}"),
            Error::Signature(msg) => write!(f, "invalid signature: {msg}"),
            Error::Pdf(msg) => write!(f, "PDF error: {msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}
