use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("index step {step} is out of range (group has {len} children)")]
    IndexOutOfRange { step: usize, len: usize },

    #[error("path step {step} addresses a rule, which has no children")]
    NotAGroup { step: usize },

    #[error("path step {step} addresses a group where a rule was expected")]
    NotARule { step: usize },

    #[error("invalid tree index '{0}'")]
    InvalidIndex(String),

    #[error("malformed filter: {0}")]
    MalformedFilter(String),

    #[error("filter shape mismatch: {0}")]
    SchemaMismatch(String),

    #[error("a filter named '{0}' already exists")]
    DuplicateName(String),

    #[error("no saved filter named '{0}'")]
    FilterNotFound(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, FilterError>;
