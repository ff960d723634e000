use thiserror::Error;

#[derive(Error,Debug)]
pub enum Error {
    #[error("IO error: {0:}")]
    IoError(#[from] std::io::Error),

    #[error("No sequences in input, nothing to draw")]
    EmptyInput,

    #[error("Sequence '{title:}' has {found:} steps, expected {expected:}")]
    MismatchedLengths {
        title: String,
        expected: usize,
        found: usize,
    },

    #[error("Line {line:}: expected exactly one '|' separator, found {separators:}")]
    MalformedLine {
        line: usize,
        separators: usize,
    },

    #[error("Line {line:}: sequence name is empty")]
    EmptyTitle {
        line: usize,
    },

    #[error("Line {line:}, column {column:}: illegal edge character '{character:}'")]
    IllegalEdgeCharacter {
        line: usize,
        column: usize,
        character: char,
    },

    #[error("Invalid expression")]
    RegexError(#[from] regex::Error),

    #[error("Invalid configuration file '{0:}': {1:}")]
    InvalidConfig(String, String),
}

pub type Result<T> = std::result::Result<T, Error>;
