//! Data transfer objects for processor results

/// Segmentation and metrics of one bound word
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WordSummary {
    /// The text as bound
    pub word: String,
    /// Language name as requested
    pub language: String,
    /// Logical characters as strings
    pub logical_chars: Vec<String>,
    /// Number of logical characters
    pub length: usize,
    /// Number of code point groups, one per logical character
    pub code_point_length: usize,
    /// Largest scalar count of any unit
    pub strength: usize,
    /// Total scalar count
    pub weight: usize,
    /// Coarse complexity
    pub level: usize,
}
