use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to parse site content: {0}")]
    Content(#[from] toml::de::Error),

    #[error("invalid birth date `{value}`, expected YYYY-MM-DD: {source}")]
    BirthDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("site declares no tracked sections")]
    NoSections,

    #[error("section `{0}` is not on the page")]
    UnknownSection(String),

    #[error("section `{0}` is declared more than once")]
    DuplicateSection(String),

    #[error("invalid highlight pattern for `{name}`: {source}")]
    Highlight {
        name: String,
        #[source]
        source: regex::Error,
    },
}
