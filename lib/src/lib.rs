#![cfg_attr(feature = "unstable", feature(test))]

//! Solves Letter Boxed-style puzzles: letters are arranged on the faces of a box, and words are
//! spelled by never taking two letters in a row from the same face. A solution is a chain of words,
//! each starting with the last letter of the previous one, that uses every letter in the box.
//!
//! ```
//! use rs_letter_boxed_solver::*;
//!
//! let dictionary = build_dictionary(["dog", "got", "top", "pot"]);
//! let layout = PuzzleLayout::from_sides(["dg", "o", "tp"])?;
//!
//! let words = enumerate_words(&dictionary, &layout);
//! let chains = find_two_word_chains(&words, &layout.alphabet());
//!
//! assert_eq!(words.len(), 4);
//! assert!(chains.is_empty());
//! # Ok::<(), LetterBoxError>(())
//! ```

mod chains;
mod data;
mod enumerator;
mod matcher;
mod results;
mod solver;
mod trie;

pub use chains::*;
pub use data::*;
pub use enumerator::*;
pub use matcher::*;
pub use results::*;
pub use solver::*;
pub use trie::*;
