use thiserror::Error;

/// Structural problems found while reading the registry document.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("failed to parse the registry document: {0}")]
    Xml(#[from] roxmltree::Error),
    #[error("<{element}> declaration has no <name> leaf")]
    MissingName { element: String },
    #[error("<{element}> is missing the required `{attribute}` attribute")]
    MissingAttribute {
        element: String,
        attribute: &'static str,
    },
    #[error("unsupported declarator {text:?} for `{name}`")]
    UnsupportedDeclarator { name: String, text: String },
}

/// Problems turning a parsed registry into Rust source.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("`{text}` (used by {context}) is not a valid Rust type: {source}")]
    InvalidType {
        text: String,
        context: String,
        source: syn::Error,
    },
    #[error("value {value:?} of constant {name} is not a valid literal: {source}")]
    InvalidLiteral {
        name: String,
        value: String,
        source: syn::Error,
    },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error(transparent)]
    Generate(#[from] GenerateError),
    #[error("could not fetch {url}: {source}")]
    Fetch {
        url: String,
        source: reqwest::Error,
    },
    #[error("{path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
