//! Word ladders: change one letter at a time, staying inside a dictionary.

use std::fmt;
use std::rc::Rc;

use rustc_hash::FxHashSet;

use crate::puzzle::Puzzle;

/// Letters tried at each position, in this order.
const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// A word-ladder puzzle stepping from one word towards another.
///
/// Every intermediate word must belong to the allowed word set, which is
/// shared between all states of a search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordLadder {
    from: String,
    to: String,
    words: Rc<FxHashSet<String>>,
}

impl WordLadder {
    pub fn new(from: impl Into<String>, to: impl Into<String>, words: Rc<FxHashSet<String>>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            words,
        }
    }

    pub fn from_word(&self) -> &str {
        &self.from
    }

    pub fn to_word(&self) -> &str {
        &self.to
    }

    fn step(&self, word: String) -> Self {
        Self {
            from: word,
            to: self.to.clone(),
            words: Rc::clone(&self.words),
        }
    }
}

impl Puzzle for WordLadder {
    type Key = String;

    /// Substitutions are tried letter by letter (`a` to `z`), and for each
    /// letter at every position from left to right.
    fn extensions(&self) -> Vec<Self> {
        let mut next = Vec::new();
        let mut candidate: Vec<char> = self.from.chars().collect();

        for &letter in ALPHABET {
            let letter = letter as char;
            for index in 0..candidate.len() {
                let original = candidate[index];
                if original == letter {
                    continue;
                }
                candidate[index] = letter;
                let word: String = candidate.iter().collect();
                if self.words.contains(&word) {
                    next.push(self.step(word));
                }
                candidate[index] = original;
            }
        }

        next
    }

    fn is_solved(&self) -> bool {
        self.from == self.to
    }

    /// Substitutions never change how many letters a word has.
    fn fail_fast(&self) -> bool {
        self.from.chars().count() != self.to.chars().count()
    }

    fn canonical_key(&self) -> String {
        self.from.clone()
    }
}

impl fmt::Display for WordLadder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{breadth_first_solve, depth_first_solve, Strategy};

    fn dictionary(words: &[&str]) -> Rc<FxHashSet<String>> {
        Rc::new(words.iter().map(|word| word.to_string()).collect())
    }

    fn ladder(from: &str, to: &str, words: &[&str]) -> WordLadder {
        WordLadder::new(from, to, dictionary(words))
    }

    fn words_of(path: &crate::path::SolutionPath<WordLadder>) -> Vec<&str> {
        path.iter().map(WordLadder::from_word).collect()
    }

    const WORDS: &[&str] = &[
        "same", "came", "case", "cast", "cost", "sane", "lane", "lone", "lose", "lost", "zzzz",
    ];

    #[test]
    fn test_extensions_order() {
        let next: Vec<String> = ladder("cast", "cost", WORDS)
            .extensions()
            .into_iter()
            .map(|step| step.from)
            .collect();
        // 'e' replaces the last letter before 'o' replaces the second
        assert_eq!(next, vec!["case", "cost"]);
    }

    #[test]
    fn test_same_word_is_already_solved() {
        let start = ladder("same", "same", &[]);
        for strategy in Strategy::ALL {
            let path = strategy.solve(start.clone()).expect("already solved");
            assert_eq!(path.moves(), 0, "{strategy}");
        }
    }

    #[test]
    fn test_empty_dictionary_has_no_path() {
        let start = ladder("same", "cost", &[]);
        assert!(start.extensions().is_empty());
        assert!(depth_first_solve(start.clone()).is_none());
        assert!(breadth_first_solve(start).is_none());
    }

    #[test]
    fn test_breadth_first_finds_shortest_ladder() {
        let start = ladder("same", "cost", WORDS);
        let bfs = breadth_first_solve(start.clone()).expect("ladder exists");
        assert_eq!(words_of(&bfs), vec!["same", "came", "case", "cast", "cost"]);

        let dfs = depth_first_solve(start).expect("ladder exists");
        assert!(dfs.moves() >= bfs.moves());
        assert_eq!(dfs.solved().from_word(), "cost");
        for pair in dfs.states().windows(2) {
            assert!(pair[0].extensions().contains(&pair[1]));
        }
    }

    #[test]
    fn test_length_mismatch_fails_fast() {
        let start = ladder("same", "costs", WORDS);
        assert!(start.fail_fast());
        assert!(breadth_first_solve(start.clone()).is_none());
        assert!(depth_first_solve(start).is_none());
    }

    #[test]
    fn test_accented_letters_are_substituted_whole() {
        let start = ladder("café", "cafe", &["cafe", "café"]);
        assert!(!start.fail_fast());
        let next: Vec<String> = start
            .extensions()
            .into_iter()
            .map(|step| step.from)
            .collect();
        assert_eq!(next, vec!["cafe"]);

        let path = breadth_first_solve(start).expect("one substitution away");
        assert_eq!(words_of(&path), vec!["café", "cafe"]);
    }

    #[test]
    fn test_length_counts_letters_not_bytes() {
        // "é" takes two bytes but is one letter
        assert!(!ladder("é", "e", &[]).fail_fast());
        assert!(ladder("é", "ee", &[]).fail_fast());
    }

    #[test]
    fn test_display() {
        assert_eq!(ladder("mule", "zoom", &[]).to_string(), "mule -> zoom");
    }
}
