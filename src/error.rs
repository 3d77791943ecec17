//! Error types

use std::path::PathBuf;

use snafu::Snafu;

use crate::tree::FilterBy;

/// Failure to obtain the tree document.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum LoadError {
    #[snafu(display("cannot read tree document '{}': {}", path.display(), source))]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display("invalid tree document {}: {}", origin, source))]
    Parse {
        origin: String,
        source: serde_json::Error,
    },
}

/// Failure to list a requested path.
#[derive(Debug, Snafu, PartialEq, Eq)]
#[snafu(visibility(pub(crate)))]
pub enum ListingError {
    #[snafu(display("cannot access '{}': No such file or directory", path))]
    NotFound { path: String },

    #[snafu(display("'{}' is not a directory", path))]
    NotADirectory { path: String },
}

/// Rejected `--filter` value.
#[derive(Debug, Snafu, PartialEq, Eq)]
#[snafu(visibility(pub(crate)))]
#[snafu(display(
    "'{}' is not a valid filter criteria. Available filters are {}",
    value,
    available()
))]
pub struct InvalidFilter {
    pub value: String,
}

fn available() -> String {
    FilterBy::VARIANTS
        .iter()
        .map(|v| format!("'{}'", v.as_str()))
        .collect::<Vec<_>>()
        .join(", ")
}
