use crate::chains::*;
use crate::data::PuzzleLayout;
use crate::enumerator::enumerate_words;
use crate::matcher::chains_match;
use crate::trie::Dictionary;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Controls how much work [`solve`] does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SolverConfig {
    /// The three-word search stops once this many chains have been found.
    pub max_three_word_chains: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            max_three_word_chains: DEFAULT_MAX_THREE_WORD_CHAINS,
        }
    }
}

/// The chains found for one puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Solutions {
    /// The number of words that could be spelled on the puzzle.
    pub num_words: usize,
    /// Every two-word chain that uses all the letters, in the order found.
    pub two_word_chains: Vec<WordChain>,
    /// Three-word chains that use all the letters, in the order found, up to the configured
    /// limit.
    pub three_word_chains: Vec<WordChain>,
}

impl Solutions {
    /// Returns `true` iff no chains were found.
    pub fn is_empty(&self) -> bool {
        self.two_word_chains.is_empty() && self.three_word_chains.is_empty()
    }

    /// Iterates over every chain, two-word chains first.
    pub fn all_chains(&self) -> impl Iterator<Item = &WordChain> {
        self.two_word_chains
            .iter()
            .chain(self.three_word_chains.iter())
    }

    /// Finds the first chain that matches the given reference solution, ignoring case.
    pub fn find_match<S: AsRef<str>>(&self, reference: &[S]) -> Option<&WordChain> {
        self.all_chains()
            .find(|chain| chains_match(chain.words(), reference))
    }
}

/// Solves the given puzzle: finds every word that can be spelled on it, then searches for two-
/// and three-word chains that use every letter.
///
/// ```
/// use rs_letter_boxed_solver::*;
///
/// let dictionary = build_dictionary(["dog", "got", "top", "pot", "gotop"]);
/// let layout = PuzzleLayout::new(vec![vec!['d', 'g'], vec!['o'], vec!['t', 'p']]);
///
/// let solutions = solve(&dictionary, &layout, &SolverConfig::default());
///
/// assert_eq!(solutions.two_word_chains.len(), 1);
/// assert_eq!(solutions.two_word_chains[0].to_string(), "dog - gotop");
/// ```
pub fn solve(dictionary: &Dictionary, layout: &PuzzleLayout, config: &SolverConfig) -> Solutions {
    let words = enumerate_words(dictionary, layout);
    let alphabet = layout.alphabet();

    let two_word_chains = find_two_word_chains(&words, &alphabet);
    let three_word_chains =
        find_three_word_chains(&words, &alphabet, config.max_three_word_chains);

    log::info!(
        "Solved puzzle with {} letters: {} words, {} two-word chains, {} three-word chains.",
        alphabet.len(),
        words.len(),
        two_word_chains.len(),
        three_word_chains.len()
    );
    Solutions {
        num_words: words.len(),
        two_word_chains,
        three_word_chains,
    }
}
