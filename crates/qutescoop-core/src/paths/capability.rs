//! Writability level of a directory or of a whole candidate location.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How usable a directory is for persisting application data.
///
/// The variants are totally ordered `NotOpen < ReadOnly < ReadWrite`. A
/// location made of several subdirectories is only as usable as its weakest
/// subdirectory, so combining capabilities takes the minimum.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// The directory does not exist, or its state could not be determined.
    NotOpen,
    /// The directory exists but a probe file could not be written into it.
    ReadOnly,
    /// A probe file was created, written and removed successfully.
    ReadWrite,
}

impl Capability {
    /// AND-combine two capabilities: the weaker one wins.
    #[must_use]
    pub fn combine(self, other: Self) -> Self {
        self.min(other)
    }

    /// AND-combine a sequence of capabilities.
    ///
    /// Starts from `ReadWrite`, the identity of the combination, so an empty
    /// sequence yields `ReadWrite`.
    pub fn combine_all<I>(capabilities: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        capabilities
            .into_iter()
            .fold(Self::ReadWrite, Self::combine)
    }

    /// Data is present, at least for reading.
    pub const fn is_usable(self) -> bool {
        matches!(self, Self::ReadOnly | Self::ReadWrite)
    }

    pub const fn is_writable(self) -> bool {
        matches!(self, Self::ReadWrite)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotOpen => "not_open",
            Self::ReadOnly => "read_only",
            Self::ReadWrite => "read_write",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
