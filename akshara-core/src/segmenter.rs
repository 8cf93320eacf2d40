//! Logical-character segmentation
//!
//! A single forward pass with one scalar of lookahead. Each scalar is
//! appended to the open unit; the pair (role of the current scalar, role of
//! the next scalar) then decides whether the unit stays open, swallows the
//! next scalar and closes, or closes as is.

use crate::{
    classifier::CharacterClassifier,
    types::{LogicalChar, Scalars, ScriptRole},
};

/// What to do with the open unit after appending the current scalar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// Keep accumulating
    Extend,
    /// Append the lookahead scalar, skip it, then close
    AbsorbNext,
    /// Close the unit
    Close,
}

/// Decide the step for `current` followed by `next`
///
/// Modifiers terminate any unit, whatever script the base belongs to.
#[inline]
fn step(current: ScriptRole, next: ScriptRole) -> Step {
    use ScriptRole::*;

    if next == CombiningModifier {
        return Step::AbsorbNext;
    }

    match (current, next) {
        (Halant, Consonant) => Step::Extend,
        (Consonant, Halant | DependentVowelSign) => Step::Extend,
        (IndependentVowel, DependentVowelSign) => Step::AbsorbNext,
        _ => Step::Close,
    }
}

/// Group `scalars` into logical characters using `classifier`
///
/// Concatenating the scalars of the returned units reproduces `scalars`
/// exactly.
pub fn segment<C>(scalars: &[char], classifier: &C) -> Vec<LogicalChar>
where
    C: CharacterClassifier + ?Sized,
{
    let mut units = Vec::with_capacity(scalars.len());
    let mut buffer = Scalars::new();
    let mut iter = scalars.iter().copied().peekable();

    while let Some(ch) = iter.next() {
        let role = classifier.classify(ch);
        buffer.push(ch);

        let Some(&next) = iter.peek() else {
            break;
        };

        match step(role, classifier.classify(next)) {
            Step::Extend => continue,
            Step::AbsorbNext => {
                buffer.push(next);
                iter.next();
            }
            Step::Close => {}
        }

        log::trace!("closing unit of {} scalars", buffer.len());
        units.push(LogicalChar::from_buffer(std::mem::take(&mut buffer)));
    }

    if !buffer.is_empty() {
        units.push(LogicalChar::from_buffer(buffer));
    }

    units
}

/// Number of scalars in each unit, in order
pub fn scalar_counts(units: &[LogicalChar]) -> Vec<usize> {
    units.iter().map(LogicalChar::scalar_count).collect()
}
