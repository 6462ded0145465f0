//! String interner for module identifiers.
//!
//! Single-threaded: the front end interns, the evaluator only reads.

use super::Name;
use rustc_hash::FxHashMap;

/// Identifier table for one module.
///
/// Serializes as the ordered list of interned strings; the position of a
/// string in that list is its [`Name`].
#[derive(Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<String>", into = "Vec<String>"))]
pub struct StringInterner {
    strings: Vec<Box<str>>,
    map: FxHashMap<Box<str>, Name>,
}

impl StringInterner {
    /// Create an empty interner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a string, returning its `Name`.
    ///
    /// Interning the same text twice yields the same `Name`.
    pub fn intern(&mut self, s: &str) -> Name {
        if let Some(&name) = self.map.get(s) {
            return name;
        }
        #[expect(
            clippy::cast_possible_truncation,
            reason = "a module never holds more than u32::MAX identifiers"
        )]
        let name = Name::from_raw(self.strings.len() as u32);
        self.strings.push(s.into());
        self.map.insert(s.into(), name);
        name
    }

    /// Look up an already-interned string without inserting it.
    #[inline]
    pub fn get(&self, s: &str) -> Option<Name> {
        self.map.get(s).copied()
    }

    /// Resolve a `Name` back to its text.
    ///
    /// Names from another interner resolve to `"<unknown>"`.
    #[inline]
    pub fn lookup(&self, name: Name) -> &str {
        self.strings.get(name.index()).map_or("<unknown>", AsRef::as_ref)
    }

    /// Number of interned strings.
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Whether nothing has been interned.
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

/// An identifier list names the same string twice.
///
/// Positions in the list are the `Name`s used by the module body, so
/// duplicates cannot be merged without renumbering every reference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DuplicateIdentifier {
    pub name: String,
    /// Position of the repeated entry.
    pub index: usize,
}

impl std::fmt::Display for DuplicateIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "duplicate identifier '{}' at position {}",
            self.name, self.index
        )
    }
}

impl std::error::Error for DuplicateIdentifier {}

impl TryFrom<Vec<String>> for StringInterner {
    type Error = DuplicateIdentifier;

    /// Rebuild an interner whose `Name`s are the list positions.
    fn try_from(strings: Vec<String>) -> Result<Self, Self::Error> {
        let mut interner = StringInterner::new();
        for (index, s) in strings.into_iter().enumerate() {
            if interner.get(&s).is_some() {
                return Err(DuplicateIdentifier { name: s, index });
            }
            interner.intern(&s);
        }
        Ok(interner)
    }
}

impl From<StringInterner> for Vec<String> {
    fn from(interner: StringInterner) -> Self {
        interner.strings.into_iter().map(String::from).collect()
    }
}

impl std::fmt::Debug for StringInterner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.strings.iter()).finish()
    }
}

#[cfg(test)]
mod tests;
