//! Interned identifier.

use std::fmt;

/// Interned identifier.
///
/// An index into the [`StringInterner`](crate::StringInterner) of the module
/// that produced it.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[repr(transparent)]
pub struct Name(u32);

impl Name {
    /// Create from a raw index.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Name(raw)
    }

    /// Get the raw index.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_raw_roundtrip() {
        let name = Name::from_raw(7);
        assert_eq!(name.raw(), 7);
        assert_eq!(name.index(), 7);
    }

    #[test]
    fn test_name_ord() {
        assert!(Name::from_raw(1) < Name::from_raw(2));
    }
}
