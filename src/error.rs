use std::{
    error::Error,
    fmt::{self, Display},
    io,
};

/// The result type used in the entire crate.
pub type Result<T> = std::result::Result<T, NetErr>;

/// The crate's error type.
#[derive(Debug)]
pub enum NetErr {
    /// A network or training parameter is outside of its valid domain.
    InvalidConfig { what: &'static str, got: String },

    /// A matrix or collection doesn't have the dimension the network expects.
    ShapeMismatch {
        what: &'static str,
        got: usize,
        expected: usize,
    },

    /// A batch without examples was given where at least one is needed.
    EmptyBatch,

    /// A configuration file could not be parsed.
    Config(serde_json::Error),

    /// A configuration file could not be read.
    Io(io::Error),
}

impl NetErr {
    pub(crate) fn invalid_config(what: &'static str, got: impl Display) -> Self {
        Self::InvalidConfig {
            what,
            got: got.to_string(),
        }
    }

    pub(crate) fn shape(what: &'static str, got: usize, expected: usize) -> Self {
        Self::ShapeMismatch {
            what,
            got,
            expected,
        }
    }
}

impl Display for NetErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetErr::InvalidConfig { what, got } => {
                write!(f, "invalid configuration: {what} can't be {got}")
            }
            NetErr::ShapeMismatch {
                what,
                got,
                expected,
            } => write!(f, "shape mismatch for {what}: got {got}, expected {expected}"),
            NetErr::EmptyBatch => write!(f, "the batch has no examples"),
            NetErr::Config(e) => write!(f, "invalid configuration file: {e}"),
            NetErr::Io(e) => write!(f, "io error: {e}"),
        }
    }
}

impl Error for NetErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            NetErr::Config(e) => Some(e),
            NetErr::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for NetErr {
    fn from(value: serde_json::Error) -> Self {
        Self::Config(value)
    }
}

impl From<io::Error> for NetErr {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}
