use std::fmt;

/// Plain message error returned by the command parser
#[derive(Debug, PartialEq)]
pub(crate) struct Error {
    pub(crate) message: String,
}

impl Error {
    pub(crate) fn new(message: String) -> Error {
        Error { message }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}
