//! Configuration types for tree listing

use std::fmt;
use std::str::FromStr;

use crate::error::{InvalidFilter, InvalidFilterSnafu};

/// Restrict a listing to one kind of entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterBy {
    File,
    Dir,
}

impl FilterBy {
    /// Every accepted value, in the order shown in error messages.
    pub const VARIANTS: [FilterBy; 2] = [FilterBy::File, FilterBy::Dir];

    pub fn as_str(self) -> &'static str {
        match self {
            FilterBy::File => "file",
            FilterBy::Dir => "dir",
        }
    }

    /// Whether an entry of this kind survives the filter.
    pub fn admits(self, is_dir: bool) -> bool {
        match self {
            FilterBy::File => !is_dir,
            FilterBy::Dir => is_dir,
        }
    }
}

impl fmt::Display for FilterBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterBy {
    type Err = InvalidFilter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterBy::VARIANTS
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| InvalidFilterSnafu { value: s }.build())
    }
}

/// Display options for one listing. Shared read-only across the whole recursion.
#[derive(Debug, Clone, Default)]
pub struct ListingConfig {
    /// Include entries whose name starts with `.`
    pub show_hidden: bool,
    pub recursive: bool,
    /// Prefix each line with permissions, size and modification time
    pub long_format: bool,
    /// Oldest first; stable for equal timestamps
    pub sort_by_time: bool,
    /// Applied after the time sort, if any
    pub reverse: bool,
    pub filter_by: Option<FilterBy>,
}

impl ListingConfig {
    /// Whether an entry with this kind passes `filter_by`.
    pub fn admits_kind(&self, is_dir: bool) -> bool {
        self.filter_by.is_none_or(|f| f.admits(is_dir))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_parse() {
        assert_eq!("file".parse::<FilterBy>(), Ok(FilterBy::File));
        assert_eq!("dir".parse::<FilterBy>(), Ok(FilterBy::Dir));
        let err = "Dir".parse::<FilterBy>().unwrap_err();
        assert_eq!(err.value, "Dir");
    }

    #[test]
    fn test_filter_admits() {
        assert!(FilterBy::File.admits(false));
        assert!(!FilterBy::File.admits(true));
        assert!(FilterBy::Dir.admits(true));
        assert!(!FilterBy::Dir.admits(false));
    }

    #[test]
    fn test_no_filter_admits_everything() {
        let config = ListingConfig::default();
        assert!(config.admits_kind(true));
        assert!(config.admits_kind(false));
    }
}
