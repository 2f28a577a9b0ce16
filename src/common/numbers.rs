//!
//! Extraction of numbers from free-form text lines.
//
#[cfg(test)]
#[path = "../tests/common/numbers_test.rs"]
mod tests;
//
use regex::Regex;
use std::sync::OnceLock;
///
/// Optional minus, digits, optional fraction, or a bare fraction like `.125`.
const NUMBER_PATTERN: &str = r"-?(?:\d+(?:\.\d+)?|\.\d+)";
///
/// Same as [NUMBER_PATTERN], but digits glued to letters (`TK2`, `m3`) aren't numbers.
const WORD_NUMBER_PATTERN: &str = r"-?(?:\b\d+(?:\.\d+)?|\.\d+)\b";
//
//
fn number_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(NUMBER_PATTERN).expect("valid number pattern"))
}
//
//
fn word_number_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(WORD_NUMBER_PATTERN).expect("valid word number pattern"))
}
///
/// Returns all numbers found in `line` in their order.
///
/// With `skip_first` the first found number is dropped
/// (used for leading counters irrelevant to the table).
pub fn extract(line: &str, skip_first: bool) -> Vec<f64> {
    find(number_regex(), line, skip_first)
}
///
/// Returns numbers standing as separate words in `line` in their order.
///
/// Used for the lines mixing values with descriptions and units,
/// like `H.F.O.SETT.TK2  150.0` or `RHO 1.025 t/m3`.
pub fn extract_words(line: &str, skip_first: bool) -> Vec<f64> {
    find(word_number_regex(), line, skip_first)
}
//
//
fn find(regex: &Regex, line: &str, skip_first: bool) -> Vec<f64> {
    regex
        .find_iter(line)
        .skip(usize::from(skip_first))
        .filter_map(|token| token.as_str().parse().ok())
        .collect()
}
///
/// Returns whitespace separated numbers from the start of `line`.
///
/// Reading stops at the first token which isn't a number.
pub fn leading(line: &str) -> Vec<f64> {
    line.split_ascii_whitespace()
        .map_while(|token| token.parse().ok())
        .collect()
}
