//! The word processor: one text bound to one language

use std::cmp::Ordering;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use akshara_core::{
    analysis::{self, MatchMark},
    get_profile, FillerKind, LanguageProfile, LogicalChar, ScalarSequence,
    ScriptRole, Word, DEFAULT_LANGUAGE,
};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::{config::Config, dto::WordSummary, random};

/// Units dropped by [`WordProcessor::valid_logical_chars`]
const INVALID_CHARS: &[char] = &[
    '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', '_', '-', '+', '=', '{', '}', '[', ']',
    ':', ';', '"', '\'', '<', ',', '>', '.', '?', '/', '|', '\\', ' ',
];

/// Text bound to a language, parsed once
///
/// Every accessor reads the cached parse. Operations taking a second string
/// parse it under the same profile into a transient [`Word`]; the bound word
/// itself only changes through [`set_word`](Self::set_word).
pub struct WordProcessor {
    language: String,
    profile: Arc<dyn LanguageProfile>,
    word: Word,
    rng: Option<Mutex<ChaCha20Rng>>,
}

impl fmt::Debug for WordProcessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WordProcessor")
            .field("language", &self.language)
            .field("profile", &self.profile.code())
            .field("word", &self.word.text())
            .field("seeded", &self.rng.is_some())
            .finish()
    }
}

impl Default for WordProcessor {
    fn default() -> Self {
        Self::bind("", DEFAULT_LANGUAGE)
    }
}

impl WordProcessor {
    /// Bind `text` under a language name
    ///
    /// Unknown names fall back to the default language.
    pub fn bind(text: &str, language: &str) -> Self {
        let mut processor = Self::new(text, get_profile(language));
        processor.language = language.to_string();
        processor
    }

    /// Bind `text` under an explicit profile
    pub fn new(text: &str, profile: Arc<dyn LanguageProfile>) -> Self {
        let word = Word::parse(text, profile.as_ref());
        Self {
            language: profile.name().to_string(),
            profile,
            word,
            rng: None,
        }
    }

    /// Bind `text` using a configuration
    pub fn with_config(text: &str, config: &Config) -> Self {
        let mut processor = Self::new(text, config.profile());
        processor.language = config.language().to_string();
        processor.rng = config
            .seed()
            .map(|seed| Mutex::new(ChaCha20Rng::seed_from_u64(seed)));
        processor
    }

    /// Replace the bound text, keeping the language
    pub fn set_word(&mut self, text: &str) {
        self.word = Word::parse(text, self.profile.as_ref());
    }

    fn parse_other(&self, text: &str) -> Word {
        Word::parse(text, self.profile.as_ref())
    }

    fn parse_all(&self, texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|text| self.parse_other(text)).collect()
    }

    fn single_unit(&self, text: &str) -> Option<LogicalChar> {
        let other = self.parse_other(text);
        match other.units() {
            [unit] => Some(unit.clone()),
            _ => None,
        }
    }

    fn with_rng<T>(&self, f: impl FnOnce(&mut dyn RngCore) -> T) -> T {
        match &self.rng {
            Some(rng) => {
                let mut guard = rng.lock().unwrap_or_else(PoisonError::into_inner);
                f(&mut *guard)
            }
            None => f(&mut rand::thread_rng()),
        }
    }

    // ----- accessors -----

    /// The bound text as given
    pub fn word(&self) -> &str {
        self.word.text()
    }

    /// Language name as requested
    pub fn language(&self) -> &str {
        &self.language
    }

    /// The profile in use
    pub fn profile(&self) -> &Arc<dyn LanguageProfile> {
        &self.profile
    }

    /// The cached parse
    pub fn parsed(&self) -> &Word {
        &self.word
    }

    /// Logical characters of the bound text
    pub fn logical_chars(&self) -> &[LogicalChar] {
        self.word.units()
    }

    /// Logical characters as strings
    pub fn logical_strings(&self) -> Vec<String> {
        self.word.units().iter().map(ToString::to_string).collect()
    }

    /// Code points of each logical character
    pub fn code_points(&self) -> Vec<Vec<u32>> {
        self.word.units().iter().map(LogicalChar::code_points).collect()
    }

    /// Extracted scalars
    pub fn scalars(&self) -> &ScalarSequence {
        self.word.scalars()
    }

    /// Number of logical characters
    pub fn length(&self) -> usize {
        self.word.len()
    }

    /// Number of code point groups, one per logical character
    pub fn code_point_length(&self) -> usize {
        self.word.units().len()
    }

    /// Number of scalars in the text as given, joiners included
    pub fn scalar_length(&self) -> usize {
        self.word.text().chars().count()
    }

    /// Number of logical characters other than spaces
    pub fn length_no_spaces(&self) -> usize {
        self.count_units(|u| !u.is_space())
    }

    /// Number of logical characters other than spaces and commas
    pub fn length_no_spaces_no_commas(&self) -> usize {
        self.count_units(|u| !u.is_space() && *u != ",")
    }

    fn count_units(&self, keep: impl Fn(&LogicalChar) -> bool) -> usize {
        self.word.units().iter().filter(|&u| keep(u)).count()
    }

    /// Logical characters without spaces and ASCII punctuation
    pub fn valid_logical_chars(&self) -> Vec<LogicalChar> {
        self.word
            .units()
            .iter()
            .filter(|u| !matches!(u.scalars(), [ch] if INVALID_CHARS.contains(ch)))
            .cloned()
            .collect()
    }

    /// Number of [`valid_logical_chars`](Self::valid_logical_chars)
    pub fn valid_length(&self) -> usize {
        self.valid_logical_chars().len()
    }

    /// Logical character at `index`
    pub fn char_at(&self, index: usize) -> Option<&LogicalChar> {
        self.word.units().get(index)
    }

    /// Position of the logical character `text`, or -1
    ///
    /// `text` must parse to exactly one logical character.
    pub fn index_of(&self, text: &str) -> i64 {
        self.single_unit(text)
            .and_then(|unit| analysis::index_of(self.word.units(), &unit))
            .map_or(-1, |i| i as i64)
    }

    // ----- editing -----

    /// The text with its logical characters in reverse order
    pub fn reverse(&self) -> String {
        self.word.units().iter().rev().map(ToString::to_string).collect()
    }

    /// True when `text` is this word reversed
    pub fn reverse_equals(&self, text: &str) -> bool {
        let other = self.parse_other(text);
        self.word.units().iter().rev().eq(other.units().iter())
    }

    /// True when `text` is the bound text exactly
    pub fn equals(&self, text: &str) -> bool {
        self.word.text() == text
    }

    /// Replace every non-overlapping occurrence of `search` in the text
    ///
    /// Matching is on the raw text and may split a logical character. An
    /// empty `search` leaves the text unchanged.
    pub fn replace(&self, search: &str, replacement: &str) -> String {
        if search.is_empty() {
            return self.word.text().to_string();
        }
        self.word.text().replace(search, replacement)
    }

    /// The text with `text` inserted before logical character `index`
    ///
    /// An index at or past the end appends.
    pub fn insert_at(&self, index: usize, text: &str) -> String {
        let units = self.word.units();
        let split = index.min(units.len());
        let mut out = akshara_core::join_units(&units[..split]);
        out.push_str(&self.parse_other(text).joined());
        out.push_str(&akshara_core::join_units(&units[split..]));
        out
    }

    /// The text with `text` appended
    pub fn push_end(&self, text: &str) -> String {
        self.insert_at(self.length(), text)
    }

    // ----- containment -----

    /// True when the text begins with `text`
    pub fn starts_with(&self, text: &str) -> bool {
        self.word.text().starts_with(text)
    }

    /// True when the text ends with `text`
    pub fn ends_with(&self, text: &str) -> bool {
        self.word.text().ends_with(text)
    }

    /// True when `text` occurs anywhere in the text
    ///
    /// Use [`contains_logical_sequence`](Self::contains_logical_sequence) to
    /// match whole logical characters only.
    pub fn contains_string(&self, text: &str) -> bool {
        self.word.text().contains(text)
    }

    /// True when `text` is one logical character found in the word
    pub fn contains_char(&self, text: &str) -> bool {
        self.single_unit(text)
            .is_some_and(|unit| self.word.units().contains(&unit))
    }

    /// True when every logical character of every item occurs in the word
    pub fn contains_logical_chars(&self, items: &[&str]) -> bool {
        self.parse_all(items)
            .iter()
            .flat_map(|word| word.units().to_vec())
            .all(|unit| self.word.units().contains(&unit))
    }

    /// True when the items, in order, form a contiguous run of the word
    pub fn contains_logical_sequence(&self, items: &[&str]) -> bool {
        let seq: Vec<LogicalChar> = self
            .parse_all(items)
            .iter()
            .flat_map(|word| word.units().to_vec())
            .collect();
        analysis::contains_sequence(self.word.units(), &seq)
    }

    /// True when the word contains a space
    pub fn contains_space(&self) -> bool {
        self.word.units().iter().any(LogicalChar::is_space)
    }

    // ----- metrics -----

    /// Largest scalar count of any logical character
    pub fn strength(&self) -> usize {
        analysis::strength(self.word.units(), self.word.is_scripted())
    }

    /// Total scalar count
    pub fn weight(&self) -> usize {
        analysis::weight(self.word.units(), self.word.is_scripted())
    }

    /// `(length + weight + strength) / 3`
    pub fn level(&self) -> usize {
        analysis::level(self.length(), self.weight(), self.strength())
    }

    /// True when the logical characters read the same reversed
    pub fn is_palindrome(&self) -> bool {
        analysis::is_palindrome(self.word.units())
    }

    /// Segmentation and metrics in one value
    pub fn summary(&self) -> WordSummary {
        WordSummary {
            word: self.word().to_string(),
            language: self.language.clone(),
            logical_chars: self.logical_strings(),
            length: self.length(),
            code_point_length: self.code_point_length(),
            strength: self.strength(),
            weight: self.weight(),
            level: self.level(),
        }
    }

    // ----- comparisons -----

    /// True when `text` uses exactly the same logical characters
    pub fn is_anagram(&self, text: &str) -> bool {
        analysis::are_anagrams(self.word.units(), self.parse_other(text).units())
    }

    /// True when `text` can be spelled from this word's logical characters
    pub fn can_make_word(&self, text: &str) -> bool {
        analysis::can_make_word(self.word.units(), self.parse_other(text).units())
    }

    /// [`can_make_word`](Self::can_make_word) for every item
    pub fn can_make_all_words(&self, texts: &[&str]) -> bool {
        let words = self.parse_all(texts);
        analysis::can_make_all_words(self.word.units(), words.iter().map(Word::units))
    }

    /// True when `text` shares a logical character with this word
    pub fn is_intersecting(&self, text: &str) -> bool {
        analysis::are_intersecting(self.word.units(), self.parse_other(text).units())
    }

    /// Number of distinct logical characters shared with `text`
    pub fn intersecting_rank(&self, text: &str) -> usize {
        analysis::intersecting_rank(self.word.units(), self.parse_other(text).units())
    }

    /// This word's logical characters that occur in any of `texts`
    pub fn unique_intersecting_units(&self, texts: &[&str]) -> Vec<LogicalChar> {
        let words = self.parse_all(texts);
        analysis::unique_intersecting_units(self.word.units(), words.iter().map(Word::units))
    }

    /// Number of [`unique_intersecting_units`](Self::unique_intersecting_units)
    pub fn unique_intersecting_rank(&self, texts: &[&str]) -> usize {
        self.unique_intersecting_units(texts).len()
    }

    /// True when `text` differs from this word in exactly one position
    pub fn are_ladder_words(&self, text: &str) -> bool {
        analysis::are_ladder_words(self.word.units(), self.parse_other(text).units())
    }

    /// True when each word starts with the other's last logical character
    pub fn are_head_and_tail_words(&self, text: &str) -> bool {
        analysis::are_head_and_tail_words(self.word.units(), self.parse_other(text).units())
    }

    /// Lexicographic comparison with `text`
    pub fn compare(&self, text: &str) -> Ordering {
        analysis::compare(self.word.units(), self.parse_other(text).units())
    }

    /// Case-insensitive [`compare`](Self::compare)
    pub fn compare_ignore_case(&self, text: &str) -> Ordering {
        analysis::compare_ignore_case(self.word.units(), self.parse_other(text).units())
    }

    /// Mark each logical character of `guess` against this word
    pub fn match_pattern(&self, guess: &str) -> Vec<MatchMark> {
        analysis::match_pattern(self.word.units(), self.parse_other(guess).units())
    }

    // ----- base characters -----

    /// First scalar of every logical character, without repeats
    pub fn base_characters(&self) -> Vec<char> {
        analysis::base_characters(self.word.units())
    }

    /// True when the base characters spell `text`
    pub fn base_matches(&self, text: &str) -> bool {
        let bases = self.base_characters();
        let other = self.parse_other(text);
        bases.len() == other.len()
            && bases
                .iter()
                .zip(other.units())
                .all(|(&base, unit)| unit.scalars() == [base])
    }

    fn unit_kind(&self, index: usize) -> Option<FillerKind> {
        let base = self.char_at(index)?.base();
        if self.profile.is_scripted() {
            return match self.profile.classify(base) {
                ScriptRole::Consonant => Some(FillerKind::Consonant),
                ScriptRole::IndependentVowel => Some(FillerKind::Vowel),
                _ => None,
            };
        }
        let lower = base.to_lowercase().next().unwrap_or(base);
        [FillerKind::Consonant, FillerKind::Vowel]
            .into_iter()
            .find(|&kind| self.profile.filler_inventory(kind).contains(&lower))
    }

    /// True when the logical character at `index` starts with a consonant
    pub fn is_consonant_unit(&self, index: usize) -> bool {
        self.unit_kind(index) == Some(FillerKind::Consonant)
    }

    /// True when the logical character at `index` is a vowel
    pub fn is_vowel_unit(&self, index: usize) -> bool {
        self.unit_kind(index) == Some(FillerKind::Vowel)
    }

    // ----- grouping -----

    /// Logical characters in rows of `cols`
    pub fn split(&self, cols: usize) -> Vec<Vec<String>> {
        analysis::chunks(self.word.units(), cols)
            .into_iter()
            .map(|row| row.iter().map(ToString::to_string).collect())
            .collect()
    }

    /// Logical characters as strings, padded with empty strings to `cols`
    pub fn split_padded(&self, cols: usize) -> Vec<String> {
        let mut cells = self.logical_strings();
        if cells.len() < cols {
            cells.resize(cols, String::new());
        }
        cells
    }

    // ----- randomized -----

    /// The logical characters in random order
    pub fn shuffled(&self) -> Vec<LogicalChar> {
        self.with_rng(|rng| self.shuffled_with(rng))
    }

    /// [`shuffled`](Self::shuffled) with a caller-owned generator
    pub fn shuffled_with<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Vec<LogicalChar> {
        random::shuffle_units(self.word.units(), rng)
    }

    /// `count` logical characters from distinct positions
    pub fn random_logical_chars(&self, count: usize) -> Vec<LogicalChar> {
        self.with_rng(|rng| self.random_logical_chars_with(count, rng))
    }

    /// [`random_logical_chars`](Self::random_logical_chars) with a caller-owned generator
    pub fn random_logical_chars_with<R: rand::Rng + ?Sized>(
        &self,
        count: usize,
        rng: &mut R,
    ) -> Vec<LogicalChar> {
        random::sample_units(self.word.units(), count, rng)
    }

    /// `count` characters drawn from the profile's filler inventory
    pub fn filler_characters(&self, count: usize, kind: FillerKind) -> Vec<LogicalChar> {
        self.with_rng(|rng| self.filler_characters_with(count, kind, rng))
    }

    /// [`filler_characters`](Self::filler_characters) with a caller-owned generator
    pub fn filler_characters_with<R: rand::Rng + ?Sized>(
        &self,
        count: usize,
        kind: FillerKind,
        rng: &mut R,
    ) -> Vec<LogicalChar> {
        random::draw_fillers(self.profile.filler_inventory(kind), count, rng)
    }
}
