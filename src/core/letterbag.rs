//! Letter multisets
//!
//! A `LetterBag` counts the letters of a string, ignoring case and anything that
//! is not a letter. Two strings are anagrams exactly when their bags are equal,
//! and a word can be spelled from a jumble when its bag is a subset of the
//! jumble's bag.

use rustc_hash::FxHashMap;
use std::fmt;

/// Multiset of lower-cased letters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterBag {
    counts: FxHashMap<char, usize>,
    total: usize,
}

impl LetterBag {
    /// Build the bag of letters in `text`
    ///
    /// Letters are lower-cased; digits, whitespace and punctuation are dropped.
    ///
    /// # Examples
    /// ```
    /// use vocab_jumble::core::LetterBag;
    ///
    /// let bag = LetterBag::new("Dormitory");
    /// assert!(bag.matches(&LetterBag::new("dirty room!")));
    /// assert_eq!(bag.len(), 9);
    /// ```
    #[must_use]
    pub fn new(text: &str) -> Self {
        let mut bag = Self::default();
        for ch in text.chars().filter(|c| c.is_alphabetic()) {
            for lower in ch.to_lowercase() {
                *bag.counts.entry(lower).or_insert(0) += 1;
                bag.total += 1;
            }
        }
        bag
    }

    /// True iff both bags hold exactly the same letters with the same counts
    #[inline]
    #[must_use]
    pub fn matches(&self, other: &Self) -> bool {
        self == other
    }

    /// True iff every letter count in `self` is at most the count in `other`
    ///
    /// # Examples
    /// ```
    /// use vocab_jumble::core::LetterBag;
    ///
    /// let jumble = LetterBag::new("tacdog");
    /// assert!(LetterBag::new("cat").is_subset_of(&jumble));
    /// assert!(!LetterBag::new("tact").is_subset_of(&jumble));
    /// ```
    #[must_use]
    pub fn is_subset_of(&self, other: &Self) -> bool {
        self.total <= other.total
            && self
                .counts
                .iter()
                .all(|(letter, &count)| count <= other.count(*letter))
    }

    /// True iff `other` can be spelled from the letters in `self`
    #[inline]
    #[must_use]
    pub fn contains(&self, other: &Self) -> bool {
        other.is_subset_of(self)
    }

    /// Multiset sum of two bags
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let mut sum = self.clone();
        for (&letter, &count) in &other.counts {
            *sum.counts.entry(letter).or_insert(0) += count;
        }
        sum.total += other.total;
        sum
    }

    /// Number of times `letter` occurs (case-insensitive)
    #[must_use]
    pub fn count(&self, letter: char) -> usize {
        letter
            .to_lowercase()
            .next()
            .and_then(|lower| self.counts.get(&lower))
            .copied()
            .unwrap_or(0)
    }

    /// Total number of letters
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.total
    }

    /// True if the bag holds no letters
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Letters and their counts, sorted by letter
    #[must_use]
    pub fn letters(&self) -> Vec<(char, usize)> {
        let mut letters: Vec<(char, usize)> = self.counts.iter().map(|(&c, &n)| (c, n)).collect();
        letters.sort_unstable();
        letters
    }
}

impl From<&str> for LetterBag {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl fmt::Display for LetterBag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (letter, count) in self.letters() {
            for _ in 0..count {
                write!(f, "{letter}")?;
            }
        }
        Ok(())
    }
}
