//! Mastermind code representation
//!
//! A Code stores an ordered sequence of symbols. Symbols are opaque `char`s:
//! digits, letters and colour initials all score the same way.

use rustc_hash::FxHashMap;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// An ordered sequence of symbols, used both as a solution and as a guess
///
/// Any string is a valid code, including the empty one. Length checks happen
/// when two codes are compared, not on construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Code {
    text: String,
    symbols: Vec<char>,
}

impl Code {
    /// Create a new Code from a string
    ///
    /// # Examples
    /// ```
    /// use mastermind_score::core::Code;
    ///
    /// let code = Code::new("1234");
    /// assert_eq!(code.text(), "1234");
    /// assert_eq!(code.len(), 4);
    /// ```
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        let text: String = text.into();
        let symbols = text.chars().collect();
        Self { text, symbols }
    }

    /// Get the code as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the symbols in order
    #[inline]
    #[must_use]
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Number of symbols (not bytes)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Get the count of each symbol in the code
    #[must_use]
    pub fn symbol_counts(&self) -> FxHashMap<char, usize> {
        let mut counts = FxHashMap::default();
        for &symbol in &self.symbols {
            *counts.entry(symbol).or_insert(0) += 1;
        }
        counts
    }

    /// Number of symbols the two codes share, counted with multiplicity
    ///
    /// This is the sum over every symbol of the smaller of its two counts,
    /// and always equals `exact + partial` for the pair.
    ///
    /// # Examples
    /// ```
    /// use mastermind_score::core::Code;
    ///
    /// let guess = Code::new("1122");
    /// let solution = Code::new("1234");
    /// assert_eq!(guess.common_symbols(&solution), 2);
    /// ```
    #[must_use]
    pub fn common_symbols(&self, other: &Self) -> usize {
        let theirs = other.symbol_counts();
        self.symbol_counts()
            .iter()
            .map(|(symbol, &count)| theirs.get(symbol).map_or(0, |&t| t.min(count)))
            .sum()
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl From<&str> for Code {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Code {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl FromStr for Code {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_creation() {
        let code = Code::new("1234");
        assert_eq!(code.text(), "1234");
        assert_eq!(code.symbols(), &['1', '2', '3', '4']);
        assert_eq!(code.len(), 4);
        assert!(!code.is_empty());
    }

    #[test]
    fn code_empty_is_valid() {
        let code = Code::new("");
        assert!(code.is_empty());
        assert_eq!(code.len(), 0);
        assert!(code.symbols().is_empty());
    }

    #[test]
    fn code_length_counts_chars_not_bytes() {
        let code = Code::new("rgbé");
        assert_eq!(code.len(), 4);
        assert_eq!(code.symbols()[3], 'é');
    }

    #[test]
    fn code_is_case_sensitive() {
        assert_ne!(Code::new("RGBY"), Code::new("rgby"));
    }

    #[test]
    fn code_symbol_counts_duplicates() {
        let code = Code::new("1122");
        let counts = code.symbol_counts();
        assert_eq!(counts.len(), 2);
        assert_eq!(counts.get(&'1'), Some(&2));
        assert_eq!(counts.get(&'2'), Some(&2));
        assert_eq!(counts.get(&'3'), None);
    }

    #[test]
    fn code_common_symbols() {
        assert_eq!(Code::new("1532").common_symbols(&Code::new("1234")), 3);
        assert_eq!(Code::new("8793").common_symbols(&Code::new("1234")), 1);
        assert_eq!(Code::new("5678").common_symbols(&Code::new("1234")), 0);
        assert_eq!(Code::new("1111").common_symbols(&Code::new("1231")), 2);
    }

    #[test]
    fn code_parse_and_display() {
        let code: Code = "6152".parse().unwrap();
        assert_eq!(format!("{code}"), "6152");
        assert_eq!(Code::from("6152"), code);
        assert_eq!(Code::from(String::from("6152")), code);
    }
}
