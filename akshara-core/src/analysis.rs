//! Word analysis over logical-character sequences
//!
//! Every function here is pure and total: empty input is a defined base case,
//! never an error.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;

use crate::types::{join_units, LogicalChar};

fn frequencies<T: Eq + Hash>(items: &[T]) -> HashMap<&T, usize> {
    let mut counts = HashMap::with_capacity(items.len());
    for item in items {
        *counts.entry(item).or_insert(0) += 1;
    }
    counts
}

/// Largest scalar count of any unit
///
/// For unscripted text every unit is one scalar, so this is the unit count.
/// Empty input has strength 0; anything else at least 1.
pub fn strength(units: &[LogicalChar], scripted: bool) -> usize {
    if !scripted {
        return units.len();
    }
    units
        .iter()
        .map(LogicalChar::scalar_count)
        .max()
        .unwrap_or(0)
}

/// Total scalar count, or the unit count for unscripted text
pub fn weight(units: &[LogicalChar], scripted: bool) -> usize {
    if !scripted {
        return units.len();
    }
    units.iter().map(LogicalChar::scalar_count).sum()
}

/// Coarse complexity: `(length + weight + strength) / 3`, rounded down
pub fn level(length: usize, weight: usize, strength: usize) -> usize {
    (length + weight + strength) / 3
}

/// True when the units read the same in both directions
pub fn is_palindrome(units: &[LogicalChar]) -> bool {
    units.iter().eq(units.iter().rev())
}

/// Same length and same multiset of units
pub fn are_anagrams(a: &[LogicalChar], b: &[LogicalChar]) -> bool {
    a.len() == b.len() && frequencies(a) == frequencies(b)
}

/// Whether `target` can be spelled from the units in `available`
///
/// Each unit of `available` can be used at most once.
pub fn can_make_word(available: &[LogicalChar], target: &[LogicalChar]) -> bool {
    if target.len() > available.len() {
        return false;
    }
    let have = frequencies(available);
    frequencies(target)
        .into_iter()
        .all(|(unit, need)| have.get(unit).is_some_and(|&n| n >= need))
}

/// [`can_make_word`] for every target against the same pool
pub fn can_make_all_words<'a, I>(available: &[LogicalChar], targets: I) -> bool
where
    I: IntoIterator<Item = &'a [LogicalChar]>,
{
    targets
        .into_iter()
        .all(|target| can_make_word(available, target))
}

/// Number of distinct units the two sequences share
pub fn intersecting_rank(a: &[LogicalChar], b: &[LogicalChar]) -> usize {
    let a: HashSet<&LogicalChar> = a.iter().collect();
    let b: HashSet<&LogicalChar> = b.iter().collect();
    a.intersection(&b).count()
}

/// True when the sequences share at least one unit
pub fn are_intersecting(a: &[LogicalChar], b: &[LogicalChar]) -> bool {
    let b: HashSet<&LogicalChar> = b.iter().collect();
    a.iter().any(|unit| b.contains(unit))
}

/// Units of `subject` found in any of `words`
///
/// Deduplicated, in order of first occurrence in `subject`.
pub fn unique_intersecting_units<'a, I>(subject: &[LogicalChar], words: I) -> Vec<LogicalChar>
where
    I: IntoIterator<Item = &'a [LogicalChar]>,
{
    let pool: HashSet<&LogicalChar> = words.into_iter().flatten().collect();
    let mut seen = HashSet::new();
    subject
        .iter()
        .filter(|unit| pool.contains(unit) && seen.insert(*unit))
        .cloned()
        .collect()
}

/// Size of [`unique_intersecting_units`]
pub fn unique_intersecting_rank<'a, I>(subject: &[LogicalChar], words: I) -> usize
where
    I: IntoIterator<Item = &'a [LogicalChar]>,
{
    unique_intersecting_units(subject, words).len()
}

/// Same length, differing at exactly one position
pub fn are_ladder_words(a: &[LogicalChar], b: &[LogicalChar]) -> bool {
    a.len() == b.len() && a.iter().zip(b).filter(|(x, y)| x != y).count() == 1
}

/// Each word's first unit is the other's last unit
pub fn are_head_and_tail_words(a: &[LogicalChar], b: &[LogicalChar]) -> bool {
    match (a.first(), a.last(), b.first(), b.last()) {
        (Some(a_head), Some(a_tail), Some(b_head), Some(b_tail)) => {
            a_head == b_tail && a_tail == b_head
        }
        _ => false,
    }
}

/// Lexicographic order of the joined texts
pub fn compare(a: &[LogicalChar], b: &[LogicalChar]) -> Ordering {
    join_units(a).cmp(&join_units(b))
}

/// [`compare`] after Unicode lowercasing both sides
pub fn compare_ignore_case(a: &[LogicalChar], b: &[LogicalChar]) -> Ordering {
    join_units(a)
        .to_lowercase()
        .cmp(&join_units(b).to_lowercase())
}

/// Result for one guessed position in [`match_pattern`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MatchMark {
    /// Unit not in the target
    Absent,
    /// Same unit at the same position
    Exact,
    /// Unit present at another position
    Present,
}

impl MatchMark {
    /// Digit form: '1' exact, '2' present, '0' absent
    pub fn digit(self) -> char {
        match self {
            MatchMark::Absent => '0',
            MatchMark::Exact => '1',
            MatchMark::Present => '2',
        }
    }
}

impl fmt::Display for MatchMark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.digit())
    }
}

/// Mark every position of `guess` against `target`
pub fn match_pattern(target: &[LogicalChar], guess: &[LogicalChar]) -> Vec<MatchMark> {
    guess
        .iter()
        .enumerate()
        .map(|(i, unit)| {
            if target.get(i) == Some(unit) {
                MatchMark::Exact
            } else if target.contains(unit) {
                MatchMark::Present
            } else {
                MatchMark::Absent
            }
        })
        .collect()
}

/// Render marks as a digit string, e.g. "120"
pub fn marks_to_string(marks: &[MatchMark]) -> String {
    marks.iter().map(|m| m.digit()).collect()
}

/// True when `seq` occurs contiguously in `units`
///
/// The empty sequence is contained in everything.
pub fn contains_sequence(units: &[LogicalChar], seq: &[LogicalChar]) -> bool {
    seq.is_empty() || units.windows(seq.len()).any(|window| window == seq)
}

/// Position of the first occurrence of `unit`
pub fn index_of(units: &[LogicalChar], unit: &LogicalChar) -> Option<usize> {
    units.iter().position(|u| u == unit)
}

/// Consecutive groups of `cols` units, the last one possibly shorter
///
/// `cols == 0` keeps the whole sequence as one group.
pub fn chunks(units: &[LogicalChar], cols: usize) -> Vec<&[LogicalChar]> {
    if units.is_empty() {
        return Vec::new();
    }
    if cols == 0 {
        return vec![units];
    }
    units.chunks(cols).collect()
}

/// First scalar of every unit, without repeats
pub fn base_characters(units: &[LogicalChar]) -> Vec<char> {
    let mut seen = HashSet::new();
    units
        .iter()
        .map(LogicalChar::base)
        .filter(|ch| seen.insert(*ch))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::{get_profile, LanguageProfile, PlainProfile};

    fn te(text: &str) -> Vec<LogicalChar> {
        get_profile("telugu").parse(text).1
    }

    fn en(text: &str) -> Vec<LogicalChar> {
        PlainProfile::english().parse(text).1
    }

    const AUSTRALIA: &str = "అమెరికాఆస్ట్రేలియా";

    #[test]
    fn test_strength_and_weight() {
        let units = te(AUSTRALIA);
        assert_eq!(strength(&units, true), 6);
        assert_eq!(weight(&units, true), 18);

        let units = te("అమెరికా");
        assert_eq!(strength(&units, true), 2);
        assert_eq!(weight(&units, true), 7);
    }

    #[test]
    fn test_strength_and_weight_unscripted() {
        let units = en("hello");
        assert_eq!(strength(&units, false), 5);
        assert_eq!(weight(&units, false), 5);
    }

    #[test]
    fn test_empty_metrics() {
        assert_eq!(strength(&[], true), 0);
        assert_eq!(weight(&[], true), 0);
        assert_eq!(strength(&[], false), 0);
        assert_eq!(level(0, 0, 0), 0);
    }

    #[test]
    fn test_level() {
        // 8 units, weight 18, strength 6
        assert_eq!(level(8, 18, 6), 10);
        assert_eq!(level(4, 7, 2), 4);
    }

    #[test]
    fn test_palindrome() {
        assert!(is_palindrome(&en("racecar")));
        assert!(!is_palindrome(&en("racecars")));
        assert!(is_palindrome(&[]));
        assert!(is_palindrome(&te("మలమ")));
    }

    #[test]
    fn test_anagrams() {
        assert!(are_anagrams(&en("listen"), &en("silent")));
        assert!(!are_anagrams(&en("listen"), &en("silence")));
        assert!(!are_anagrams(&en("aab"), &en("abb")));
        assert!(are_anagrams(&te("అమెరికా"), &te("కారిమెఅ")));
    }

    #[test]
    fn test_can_make_word() {
        assert!(can_make_word(&en("listen"), &en("tin")));
        assert!(!can_make_word(&en("listen"), &en("tint")));
        assert!(can_make_word(&en("abc"), &[]));
        assert!(can_make_word(&te(AUSTRALIA), &te("కాలి")));
        assert!(!can_make_word(&te(AUSTRALIA), &te("కికి")));
    }

    #[test]
    fn test_can_make_all_words() {
        let pool = en("listen");
        let targets = [en("tin"), en("lens"), en("silent")];
        assert!(can_make_all_words(&pool, targets.iter().map(Vec::as_slice)));

        let targets = [en("tin"), en("lisp")];
        assert!(!can_make_all_words(&pool, targets.iter().map(Vec::as_slice)));
    }

    #[test]
    fn test_intersecting_rank_counts_distinct_units() {
        assert_eq!(intersecting_rank(&en("aab"), &en("aa")), 1);
        assert_eq!(intersecting_rank(&en("abc"), &en("cba")), 3);
        assert_eq!(intersecting_rank(&en("abc"), &en("xyz")), 0);
        assert_eq!(intersecting_rank(&te(AUSTRALIA), &te("ఆస్ట్రేలియా")), 4);
    }

    #[test]
    fn test_are_intersecting() {
        assert!(are_intersecting(&en("cat"), &en("tan")));
        assert!(!are_intersecting(&en("cat"), &en("dog")));
        assert!(!are_intersecting(&[], &en("dog")));
    }

    #[test]
    fn test_unique_intersecting_units() {
        let subject = te(AUSTRALIA);
        let words = [te("కాలి"), te("లియా"), te("పుస్తకం")];
        let units = unique_intersecting_units(&subject, words.iter().map(Vec::as_slice));
        assert_eq!(join_units(&units), "కాలియా");
        assert_eq!(
            unique_intersecting_rank(&subject, words.iter().map(Vec::as_slice)),
            3
        );
    }

    #[test]
    fn test_unique_intersecting_units_follow_subject_order() {
        let subject = en("banana");
        let words = [en("nab")];
        let units = unique_intersecting_units(&subject, words.iter().map(Vec::as_slice));
        assert_eq!(join_units(&units), "ban");
    }

    #[test]
    fn test_ladder_words() {
        assert!(are_ladder_words(&en("cat"), &en("bat")));
        assert!(!are_ladder_words(&en("cat"), &en("cats")));
        assert!(!are_ladder_words(&en("cat"), &en("cat")));
        assert!(!are_ladder_words(&en("cat"), &en("dog")));
        assert!(are_ladder_words(&te("అమెరికా"), &te("అమెరికి")));
    }

    #[test]
    fn test_head_and_tail_words() {
        assert!(are_head_and_tail_words(&en("tea"), &en("apt")));
        assert!(!are_head_and_tail_words(&en("tea"), &en("ate")));
        assert!(!are_head_and_tail_words(&[], &en("a")));
        assert!(are_head_and_tail_words(&te("మెరికా"), &te("కాలిమె")));
    }

    #[test]
    fn test_compare() {
        let a = te(AUSTRALIA);
        let b = te("ఆస్ట్రేలియా");
        assert_eq!(compare(&a, &b), Ordering::Less);
        assert_eq!(compare(&b, &a), Ordering::Greater);
        assert_eq!(compare(&a, &a), Ordering::Equal);
    }

    #[test]
    fn test_compare_ignore_case() {
        assert_eq!(compare(&en("Apple"), &en("apple")), Ordering::Less);
        assert_eq!(compare_ignore_case(&en("Apple"), &en("apple")), Ordering::Equal);
        assert_eq!(compare_ignore_case(&en("ÉCOLE"), &en("école")), Ordering::Equal);
    }

    #[test]
    fn test_match_pattern() {
        let marks = match_pattern(&te("అమ"), &te("అఅ"));
        assert_eq!(marks, vec![MatchMark::Exact, MatchMark::Present]);
        assert_eq!(marks_to_string(&marks), "12");

        let marks = match_pattern(&en("cat"), &en("taxi"));
        assert_eq!(marks_to_string(&marks), "2100");
    }

    #[test]
    fn test_contains_sequence() {
        let units = te(AUSTRALIA);
        assert!(contains_sequence(&units, &te("కాఆ")));
        assert!(!contains_sequence(&units, &te("ఆకా")));
        assert!(contains_sequence(&units, &[]));
        assert!(!contains_sequence(&[], &te("అ")));
    }

    #[test]
    fn test_index_of() {
        let units = te(AUSTRALIA);
        let li = LogicalChar::from_scalars("లి".chars()).unwrap();
        assert_eq!(index_of(&units, &li), Some(6));
        assert_eq!(index_of(&units, &LogicalChar::single('x')), None);
    }

    #[test]
    fn test_chunks() {
        let units = en("abcde");
        let groups = chunks(&units, 2);
        assert_eq!(groups.len(), 3);
        assert_eq!(join_units(groups[2]), "e");
        assert_eq!(chunks(&units, 0).len(), 1);
        assert!(chunks(&[], 3).is_empty());
    }

    #[test]
    fn test_base_characters() {
        let bases: String = base_characters(&te(AUSTRALIA)).into_iter().collect();
        assert_eq!(bases, "అమరకఆసలయ");
        assert_eq!(base_characters(&te("అమ్మ")), vec!['అ', 'మ']);
    }
}
