//! Named word operations
//!
//! Each operation reads the bound processor plus optional operands and
//! produces a JSON value. Operand problems are reported as
//! [`OperandError`] and become 400 responses.

use std::cmp::Ordering;
use std::fmt;

use akshara_api::{
    detect_language, marks_to_string, FillerKind, LanguageProfile, LogicalChar, WordProcessor,
};
use serde_json::{json, Value};

use crate::output::Envelope;

macro_rules! operations {
    ($($variant:ident => ($name:literal, $message:literal),)+) => {
        /// Operations available to `akshara run`
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Operation {
            $(
                #[doc = $message]
                $variant,
            )+
        }

        impl Operation {
            /// Every operation, in listing order
            pub const ALL: &'static [Operation] = &[$(Operation::$variant,)+];

            /// Kebab-case name used on the command line
            pub fn name(self) -> &'static str {
                match self {
                    $(Operation::$variant => $name,)+
                }
            }

            /// Message of a successful response
            pub fn message(self) -> &'static str {
                match self {
                    $(Operation::$variant => $message,)+
                }
            }
        }
    };
}

operations! {
    // characters
    Base => ("base", "Base characters processed"),
    Logical => ("logical", "Logical characters processed"),
    Codepoints => ("codepoints", "Code points processed"),
    CodepointLength => ("codepoint-length", "Code point length calculated"),
    RandomLogical => ("random-logical", "Random logical characters generated"),
    AddEnd => ("add-end", "Character added at end"),
    LogicalAt => ("logical-at", "Logical character at position retrieved"),
    BaseConsonants => ("base-consonants", "Base consonants calculated"),
    AddAt => ("add-at", "Character added at position"),
    Filler => ("filler", "Filler characters generated"),
    // text
    Length => ("length", "Length calculated"),
    Reverse => ("reverse", "Text reversed"),
    Randomize => ("randomize", "Text randomized"),
    Split => ("split", "Text split"),
    Replace => ("replace", "Text replaced"),
    // analysis
    IsPalindrome => ("is-palindrome", "Palindrome check completed"),
    WordStrength => ("word-strength", "Word strength calculated"),
    WordWeight => ("word-weight", "Word weight calculated"),
    WordLevel => ("word-level", "Word level calculated"),
    IsAnagram => ("is-anagram", "Anagram check completed"),
    DetectLanguage => ("detect-language", "Language detected"),
    SplitIntoChunks => ("split-into-chunks", "Text split into chunks"),
    CanMakeWord => ("can-make-word", "Word formation check completed"),
    CanMakeAllWords => ("can-make-all-words", "All words formation check completed"),
    IsIntersecting => ("is-intersecting", "Intersection check completed"),
    IntersectingRank => ("intersecting-rank", "Intersecting rank calculated"),
    UniqueIntersectingRank => ("unique-intersecting-rank", "Unique intersecting rank calculated"),
    UniqueIntersectingLogicalChars => (
        "unique-intersecting-logical-chars",
        "Unique intersecting logical characters calculated"
    ),
    AreLadderWords => ("are-ladder-words", "Ladder words check completed"),
    AreHeadTailWords => ("are-head-tail-words", "Head and tail words check completed"),
    GetMatchIdString => ("get-match-id-string", "Match ID string generated"),
    Summary => ("summary", "Word summary generated"),
    // comparison
    Equals => ("equals", "Equality check completed"),
    StartsWith => ("starts-with", "Starts with check completed"),
    EndsWith => ("ends-with", "Ends with check completed"),
    Compare => ("compare", "Comparison completed"),
    CompareIgnoreCase => ("compare-ignore-case", "Case-insensitive comparison completed"),
    ReverseEquals => ("reverse-equals", "Reverse equality check completed"),
    IndexOf => ("index-of", "Index search completed"),
    // validation
    ContainsSpace => ("contains-space", "Space check completed"),
    ContainsChar => ("contains-char", "Character check completed"),
    ContainsLogicalChars => ("contains-logical-chars", "Logical characters check completed"),
    ContainsLogicalSequence => (
        "contains-logical-sequence",
        "Logical character sequence check completed"
    ),
    ContainsString => ("contains-string", "String check completed"),
    IsConsonant => ("is-consonant", "Consonant check completed"),
    IsVowel => ("is-vowel", "Vowel check completed"),
    // utility
    LengthNoSpaces => ("length-no-spaces", "Length without spaces calculated"),
    LengthNoSpacesCommas => (
        "length-no-spaces-commas",
        "Length without spaces and commas calculated"
    ),
    ValidLength => ("valid-length", "Valid length calculated"),
    ScalarLength => ("scalar-length", "Scalar length calculated"),
}

/// Columns used by `split-into-chunks`
const CHUNK_COLUMNS: usize = 15;
const DEFAULT_RANDOM_COUNT: usize = 5;
const DEFAULT_FILLER_COUNT: usize = 3;

impl Operation {
    /// Look up an operation by name
    ///
    /// Accepts the long parse aliases for `logical` and the older names
    /// `contains-all-logical-chars` and `length-alternative`.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase();
        match name.as_str() {
            "parse-to-logical-chars" | "parse-to-logical-characters" => Some(Operation::Logical),
            "contains-all-logical-chars" => Some(Operation::ContainsLogicalChars),
            "length-alternative" => Some(Operation::ValidLength),
            _ => Self::ALL.iter().copied().find(|op| op.name() == name),
        }
    }

    /// Whether the operation reads the bound text
    pub fn needs_string(self) -> bool {
        !matches!(self, Operation::Filler)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Extra inputs for an operation
#[derive(Debug, Clone, Default)]
pub struct Operands {
    /// Second operand; comma-separated for list operations
    pub input2: Option<String>,
    /// Third operand
    pub input3: Option<String>,
    /// Count for random and filler operations, columns for `split`
    pub count: Option<usize>,
    /// Filler kind
    pub kind: Option<String>,
}

impl Operands {
    fn input2(&self) -> Result<&str, OperandError> {
        self.input2
            .as_deref()
            .ok_or(OperandError::Missing("input2"))
    }

    fn list(&self) -> Result<Vec<&str>, OperandError> {
        Ok(self
            .input2()?
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .collect())
    }

    fn index(&self, default: Option<usize>) -> Result<usize, OperandError> {
        match (self.input2.as_deref(), default) {
            (Some(raw), _) => raw.trim().parse().map_err(|_| OperandError::Invalid {
                name: "input2",
                value: raw.to_string(),
            }),
            (None, Some(default)) => Ok(default),
            (None, None) => Err(OperandError::Missing("input2")),
        }
    }

    fn filler_kind(&self) -> Result<FillerKind, OperandError> {
        match self.kind.as_deref() {
            None => Ok(FillerKind::Consonant),
            Some(raw) => FillerKind::from_name(raw).ok_or_else(|| OperandError::Invalid {
                name: "kind",
                value: raw.to_string(),
            }),
        }
    }
}

/// Problem with the operands of a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperandError {
    /// Required operand not supplied
    Missing(&'static str),
    /// Operand present but unusable
    Invalid {
        /// Operand name
        name: &'static str,
        /// Value as given
        value: String,
    },
}

impl fmt::Display for OperandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperandError::Missing(name) => write!(f, "Missing required parameter: {name}"),
            OperandError::Invalid { name, value } => {
                write!(f, "Invalid value for {name}: {value}")
            }
        }
    }
}

impl std::error::Error for OperandError {}

fn strings(units: &[LogicalChar]) -> Value {
    json!(units.iter().map(ToString::to_string).collect::<Vec<_>>())
}

fn ordering(ordering: Ordering) -> Value {
    json!(ordering as i8)
}

/// Run `op` against `processor`
pub fn execute(
    op: Operation,
    processor: &WordProcessor,
    operands: &Operands,
) -> Result<Value, OperandError> {
    use Operation::*;

    let value = match op {
        Base => json!(processor
            .base_characters()
            .iter()
            .map(char::to_string)
            .collect::<Vec<_>>()),
        Logical => json!(processor.logical_strings()),
        Codepoints => json!(processor.code_points()),
        CodepointLength => json!(processor.code_point_length()),
        RandomLogical => strings(
            &processor.random_logical_chars(operands.count.unwrap_or(DEFAULT_RANDOM_COUNT)),
        ),
        AddEnd => json!(processor.push_end(operands.input2()?)),
        LogicalAt => json!(processor
            .char_at(operands.index(Some(0))?)
            .map(ToString::to_string)),
        BaseConsonants => json!(processor.base_matches(operands.input2()?)),
        AddAt => {
            let index = operands.index(None)?;
            json!(processor.insert_at(index, operands.input3.as_deref().unwrap_or("")))
        }
        Filler => strings(&processor.filler_characters(
            operands.count.unwrap_or(DEFAULT_FILLER_COUNT),
            operands.filler_kind()?,
        )),
        Length => json!(processor.length()),
        Reverse => json!(processor.reverse()),
        Randomize => strings(&processor.shuffled()),
        Split => json!(processor.split(operands.count.unwrap_or(0))),
        Replace => {
            let search = operands.input2()?;
            if search.is_empty() {
                return Err(OperandError::Missing("input2"));
            }
            json!(processor.replace(search, operands.input3.as_deref().unwrap_or("")))
        }
        IsPalindrome => json!(processor.is_palindrome()),
        WordStrength => json!(processor.strength()),
        WordWeight => json!(processor.weight()),
        WordLevel => json!(processor.level()),
        IsAnagram => json!(processor.is_anagram(operands.input2()?)),
        DetectLanguage => json!(detect_language(processor.word()).name().to_lowercase()),
        SplitIntoChunks => json!(processor.split_padded(CHUNK_COLUMNS)),
        CanMakeWord => json!(processor.can_make_word(operands.input2()?)),
        CanMakeAllWords => json!(processor.can_make_all_words(&operands.list()?)),
        IsIntersecting => json!(processor.is_intersecting(operands.input2()?)),
        IntersectingRank => json!(processor.intersecting_rank(operands.input2()?)),
        UniqueIntersectingRank => json!(processor.unique_intersecting_rank(&operands.list()?)),
        UniqueIntersectingLogicalChars => {
            strings(&processor.unique_intersecting_units(&operands.list()?))
        }
        AreLadderWords => json!(processor.are_ladder_words(operands.input2()?)),
        AreHeadTailWords => json!(processor.are_head_and_tail_words(operands.input2()?)),
        GetMatchIdString => json!(marks_to_string(
            &processor.match_pattern(operands.input2()?)
        )),
        Summary => json!(processor.summary()),
        Equals => json!(processor.equals(operands.input2()?)),
        StartsWith => json!(processor.starts_with(operands.input2()?)),
        EndsWith => json!(processor.ends_with(operands.input2()?)),
        Compare => ordering(processor.compare(operands.input2()?)),
        CompareIgnoreCase => ordering(processor.compare_ignore_case(operands.input2()?)),
        ReverseEquals => json!(processor.reverse_equals(operands.input2()?)),
        IndexOf => json!(processor.index_of(operands.input2()?)),
        ContainsSpace => json!(processor.contains_space()),
        ContainsChar => json!(processor.contains_char(operands.input2()?)),
        ContainsLogicalChars => json!(processor.contains_logical_chars(&operands.list()?)),
        ContainsLogicalSequence => json!(processor.contains_logical_sequence(&operands.list()?)),
        ContainsString => json!(processor.contains_string(operands.input2()?)),
        IsConsonant => json!(processor.is_consonant_unit(operands.index(Some(0))?)),
        IsVowel => json!(processor.is_vowel_unit(operands.index(Some(0))?)),
        LengthNoSpaces => json!(processor.length_no_spaces()),
        LengthNoSpacesCommas => json!(processor.length_no_spaces_no_commas()),
        ValidLength => json!(processor.valid_length()),
        ScalarLength => json!(processor.scalar_length()),
    };

    Ok(value)
}

/// Resolve `name`, run it and wrap the outcome in an envelope
pub fn respond(
    name: &str,
    text: &str,
    processor: &WordProcessor,
    operands: &Operands,
) -> Envelope {
    let Some(op) = Operation::from_name(name) else {
        return Envelope::error(404, format!("Operation not found: {name}"));
    };

    if op.needs_string() && text.is_empty() {
        return Envelope::error(400, "Missing required parameter: string");
    }

    log::debug!(
        "running {op} under {} ({})",
        processor.language(),
        processor.profile().code()
    );

    match execute(op, processor, operands) {
        Ok(data) => {
            let echo = match op {
                Operation::Filler => format!(
                    "{} {}",
                    operands.count.unwrap_or(DEFAULT_FILLER_COUNT),
                    operands.filler_kind().map_or("consonant", |k| k.as_str())
                ),
                _ => text.to_string(),
            };
            Envelope::ok(op.message(), &echo, processor.language(), data)
        }
        Err(e) => Envelope {
            response_code: 400,
            message: e.to_string(),
            string: Some(text.to_string()),
            language: Some(processor.language().to_string()),
            data: Value::Null,
        },
    }
}
