use crate::data::WordSet;
use std::collections::HashMap;
use std::collections::HashSet;
use std::fmt;
use std::ops::Index;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The default number of three-word chains to collect before the search stops.
pub const DEFAULT_MAX_THREE_WORD_CHAINS: usize = 10;

/// An ordered list of words where each word starts with the last letter of the previous word.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WordChain {
    words: Vec<Arc<str>>,
}

impl WordChain {
    /// Constructs a chain from the given words, without checking that they link together.
    pub fn new(words: Vec<Arc<str>>) -> WordChain {
        WordChain { words }
    }

    /// Retrieves the words in this chain, in order.
    pub fn words(&self) -> &[Arc<str>] {
        &self.words
    }

    /// Returns the number of words in this chain.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` iff this chain has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterates over the words in this chain.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(|word| word.as_ref())
    }

    /// Returns `true` iff every word starts with the last letter of the word before it.
    pub fn is_linked(&self) -> bool {
        self.words
            .windows(2)
            .all(|pair| links(pair[0].as_ref(), pair[1].as_ref()))
    }

    /// Returns `true` iff the letters used across the chain are exactly the given alphabet.
    pub fn covers(&self, alphabet: &HashSet<char>) -> bool {
        let used: HashSet<char> = self.iter().flat_map(str::chars).collect();
        used == *alphabet
    }
}

impl Index<usize> for WordChain {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.words[index]
    }
}

impl fmt::Display for WordChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, word) in self.words.iter().enumerate() {
            if index > 0 {
                f.write_str(" - ")?;
            }
            f.write_str(word)?;
        }
        Ok(())
    }
}

/// Finds every ordered pair of words that link together and use exactly the letters in the given
/// alphabet.
///
/// Chains are returned in the order they are found while iterating over `words`. A word may be
/// paired with itself if it both starts and ends with the same letter.
///
/// ```
/// use rs_letter_boxed_solver::{find_two_word_chains, WordSet};
/// use std::sync::Arc;
///
/// let words: WordSet = ["ape", "eat", "tap"].into_iter().map(Arc::from).collect();
/// let alphabet = "tape".chars().collect();
///
/// let chains = find_two_word_chains(&words, &alphabet);
///
/// assert_eq!(chains.len(), 2);
/// assert_eq!(chains[0].to_string(), "ape - eat");
/// ```
pub fn find_two_word_chains(words: &WordSet, alphabet: &HashSet<char>) -> Vec<WordChain> {
    let index = ChainIndex::new(words, alphabet);
    let mut chains: Vec<WordChain> = Vec::new();
    for first in &index.entries {
        for second in index.successors(first) {
            if index.covers(&[first, second]) {
                chains.push(index.chain(&[first, second]));
            }
        }
    }
    log::debug!("Found {} two-word chains.", chains.len());
    chains
}

/// Finds ordered triples of words that link together and use exactly the letters in the given
/// alphabet, stopping as soon as `max_chains` have been found.
///
/// Chains are returned in the order they are found while iterating over `words`. Near-duplicate
/// chains are not filtered out.
pub fn find_three_word_chains(
    words: &WordSet,
    alphabet: &HashSet<char>,
    max_chains: usize,
) -> Vec<WordChain> {
    let mut chains: Vec<WordChain> = Vec::new();
    if max_chains == 0 {
        return chains;
    }
    let index = ChainIndex::new(words, alphabet);
    for first in &index.entries {
        for second in index.successors(first) {
            for third in index.successors(second) {
                if index.covers(&[first, second, third]) {
                    chains.push(index.chain(&[first, second, third]));
                    if chains.len() >= max_chains {
                        log::info!(
                            "Stopped three-word search after reaching the limit of {} chains.",
                            max_chains
                        );
                        return chains;
                    }
                }
            }
        }
    }
    log::debug!("Found {} three-word chains.", chains.len());
    chains
}

fn links(previous: &str, next: &str) -> bool {
    match (previous.chars().last(), next.chars().next()) {
        (Some(last), Some(first)) => last == first,
        _ => false,
    }
}

/// A word prepared for chaining: its distinct letters, plus its first and last letters.
struct ChainEntry<'a> {
    word: &'a Arc<str>,
    letters: HashSet<char>,
    first: char,
    last: char,
}

/// Looks up which words may follow a given word, keeping the iteration order of the word set.
struct ChainIndex<'a> {
    alphabet: &'a HashSet<char>,
    entries: Vec<ChainEntry<'a>>,
    entries_by_first_letter: HashMap<char, Vec<usize>>,
}

impl<'a> ChainIndex<'a> {
    fn new(words: &'a WordSet, alphabet: &'a HashSet<char>) -> ChainIndex<'a> {
        let entries: Vec<ChainEntry<'a>> = words
            .iter()
            .filter_map(|word| {
                let first = word.chars().next()?;
                let last = word.chars().last()?;
                Some(ChainEntry {
                    word,
                    letters: word.chars().collect(),
                    first,
                    last,
                })
            })
            .collect();
        let mut entries_by_first_letter: HashMap<char, Vec<usize>> = HashMap::new();
        for (position, entry) in entries.iter().enumerate() {
            entries_by_first_letter
                .entry(entry.first)
                .or_default()
                .push(position);
        }
        ChainIndex {
            alphabet,
            entries,
            entries_by_first_letter,
        }
    }

    fn successors<'b>(
        &'b self,
        entry: &ChainEntry<'a>,
    ) -> impl Iterator<Item = &'b ChainEntry<'a>> {
        self.entries_by_first_letter
            .get(&entry.last)
            .into_iter()
            .flatten()
            .map(move |position| &self.entries[*position])
    }

    /// Returns `true` iff the union of the entries' letters equals the alphabet.
    fn covers(&self, chain: &[&ChainEntry<'a>]) -> bool {
        let in_alphabet = chain
            .iter()
            .all(|entry| entry.letters.is_subset(self.alphabet));
        in_alphabet
            && self
                .alphabet
                .iter()
                .all(|letter| chain.iter().any(|entry| entry.letters.contains(letter)))
    }

    fn chain(&self, chain: &[&ChainEntry<'a>]) -> WordChain {
        WordChain::new(chain.iter().map(|entry| Arc::clone(entry.word)).collect())
    }
}
