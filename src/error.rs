#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown filter: {0}")]
    UnknownFilter(String),
}

impl Error {
    pub(crate) fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Error::InvalidInput(msg.into())
    }

    pub(crate) fn unknown_filter<S: Into<String>>(name: S) -> Self {
        Error::UnknownFilter(name.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
