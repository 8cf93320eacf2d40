//! Core value types: scalar sequences, script roles and logical characters

use serde::{Serialize, Serializer};
use smallvec::SmallVec;
use std::fmt;

/// Role a scalar value plays inside its script
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScriptRole {
    /// Base consonant
    Consonant,
    /// Freestanding vowel
    IndependentVowel,
    /// Vowel sign that attaches to a preceding base
    DependentVowelSign,
    /// Virama, joins consonants into conjuncts
    Halant,
    /// Anusvara, visarga, candrabindu and similar marks
    CombiningModifier,
    /// Member of the script with no combining behaviour (digits, marks)
    ScriptOther,
    /// Outside the profile's script
    Foreign,
}

impl ScriptRole {
    /// Whether this role belongs to the profile's script
    pub fn is_script(self) -> bool {
        !matches!(self, ScriptRole::Foreign)
    }
}

/// Ordered Unicode scalar values decoded from a text
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ScalarSequence(Vec<char>);

impl ScalarSequence {
    /// Wrap already decoded scalars
    pub fn new(scalars: Vec<char>) -> Self {
        Self(scalars)
    }

    /// Borrow the scalars
    pub fn as_slice(&self) -> &[char] {
        &self.0
    }

    /// Number of scalars
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no scalar was decoded
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate the scalars in order
    pub fn iter(&self) -> std::slice::Iter<'_, char> {
        self.0.iter()
    }

    /// Numeric code points
    pub fn code_points(&self) -> Vec<u32> {
        self.0.iter().map(|&c| c as u32).collect()
    }

    /// Re-encode as a string
    pub fn to_text(&self) -> String {
        self.0.iter().collect()
    }
}

impl<'a> IntoIterator for &'a ScalarSequence {
    type Item = &'a char;
    type IntoIter = std::slice::Iter<'a, char>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<char> for ScalarSequence {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Inline capacity for a logical character; conjuncts up to "స్ట్రే" fit
pub(crate) type Scalars = SmallVec<[char; 6]>;

/// One orthographic unit of a script
///
/// A logical character is never empty. Equality, ordering and hashing all
/// follow the scalar sequence, so two units compare equal exactly when they
/// render the same text.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LogicalChar(Scalars);

impl LogicalChar {
    /// Build a unit from scalars, `None` when `scalars` is empty
    pub fn from_scalars<I: IntoIterator<Item = char>>(scalars: I) -> Option<Self> {
        let scalars: Scalars = scalars.into_iter().collect();
        if scalars.is_empty() {
            None
        } else {
            Some(Self(scalars))
        }
    }

    /// Single-scalar unit
    pub fn single(ch: char) -> Self {
        let mut scalars = Scalars::new();
        scalars.push(ch);
        Self(scalars)
    }

    pub(crate) fn from_buffer(scalars: Scalars) -> Self {
        debug_assert!(!scalars.is_empty(), "logical characters are never empty");
        Self(scalars)
    }

    /// The scalars making up this unit
    pub fn scalars(&self) -> &[char] {
        &self.0
    }

    /// Number of scalars in this unit (always at least 1)
    pub fn scalar_count(&self) -> usize {
        self.0.len()
    }

    /// The first scalar, i.e. the base consonant or vowel
    pub fn base(&self) -> char {
        self.0[0]
    }

    /// Numeric code points of this unit
    pub fn code_points(&self) -> Vec<u32> {
        self.0.iter().map(|&c| c as u32).collect()
    }

    /// True for a unit made of a single ASCII space
    pub fn is_space(&self) -> bool {
        self.0.as_slice() == [' ']
    }

    /// True when the unit renders exactly as `text`
    pub fn matches_text(&self, text: &str) -> bool {
        self.0.iter().copied().eq(text.chars())
    }
}

impl fmt::Display for LogicalChar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in &self.0 {
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

impl PartialEq<str> for LogicalChar {
    fn eq(&self, other: &str) -> bool {
        self.matches_text(other)
    }
}

impl PartialEq<&str> for LogicalChar {
    fn eq(&self, other: &&str) -> bool {
        self.matches_text(other)
    }
}

impl Serialize for LogicalChar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Concatenate units back into text
pub fn join_units(units: &[LogicalChar]) -> String {
    units.iter().map(ToString::to_string).collect()
}
