// crates/shared-kernel/src/value_objects/counts.rs
use serde::{Deserialize, Serialize};

/// 1-based physical line number within the input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineNumber(usize);

impl LineNumber {
    pub const FIRST: Self = Self(1);

    /// Builds a line number from a 0-based enumeration index.
    #[inline]
    pub const fn from_index(index: usize) -> Self {
        Self(index + 1)
    }

    #[inline]
    pub const fn new(value: usize) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn value(self) -> usize {
        self.0
    }
}

impl Default for LineNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

/// 1-based position of a row in the conversion table. Blank lines do not advance it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemIndex(usize);

impl ItemIndex {
    pub const FIRST: Self = Self(1);

    #[inline]
    pub const fn new(value: usize) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn value(self) -> usize {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl Default for ItemIndex {
    fn default() -> Self {
        Self::FIRST
    }
}

/// Running tally of tokens or records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenCount(usize);

impl TokenCount {
    pub const ZERO: Self = Self(0);

    #[inline]
    pub const fn new(value: usize) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn value(self) -> usize {
        self.0
    }

    #[inline]
    pub fn increment(&mut self) {
        self.0 = self.0.saturating_add(1);
    }
}

impl Default for TokenCount {
    fn default() -> Self {
        Self::ZERO
    }
}

impl PartialEq<usize> for TokenCount {
    fn eq(&self, other: &usize) -> bool {
        self.0 == *other
    }
}

impl PartialEq<TokenCount> for usize {
    fn eq(&self, other: &TokenCount) -> bool {
        *self == other.0
    }
}

macro_rules! usize_conversions {
    ($($ty:ident),+) => {
        $(
            impl From<usize> for $ty {
                fn from(value: usize) -> Self {
                    Self::new(value)
                }
            }

            impl From<$ty> for usize {
                fn from(value: $ty) -> Self {
                    value.value()
                }
            }
        )+
    };
}

usize_conversions!(LineNumber, ItemIndex, TokenCount);

mod display {
    use std::fmt;

    use super::{ItemIndex, LineNumber, TokenCount};

    impl fmt::Display for LineNumber {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.value())
        }
    }

    impl fmt::Display for ItemIndex {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.value())
        }
    }

    impl fmt::Display for TokenCount {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.value())
        }
    }
}
