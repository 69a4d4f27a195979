use crate::data::PuzzleLayout;
use crate::data::WordSet;
use crate::trie::Dictionary;
use crate::trie::WordStatus;
use std::sync::Arc;

/// A partial word, along with the face its last letter came from.
struct Candidate {
    word: String,
    face: usize,
}

/// Finds every dictionary word that can be spelled on the given puzzle without using two letters
/// from the same face in a row.
///
/// The search starts from every letter and extends each partial word with letters from the other
/// faces. A branch is abandoned as soon as no dictionary word starts with the partial word, so
/// the work done is bounded by the dictionary's prefixes rather than by every possible string.
///
/// ```
/// use rs_letter_boxed_solver::{build_dictionary, enumerate_words, PuzzleLayout};
///
/// let dictionary = build_dictionary(["dog", "got", "top", "pot"]);
/// let layout = PuzzleLayout::new(vec![vec!['d', 'g'], vec!['o'], vec!['t', 'p']]);
///
/// let words = enumerate_words(&dictionary, &layout);
///
/// assert!(words.contains("dog"));
/// assert!(words.contains("got"));
/// ```
pub fn enumerate_words(dictionary: &Dictionary, layout: &PuzzleLayout) -> WordSet {
    let mut words = WordSet::new();
    if dictionary.is_empty() {
        return words;
    }

    let mut stack: Vec<Candidate> = Vec::new();
    for (face, letters) in layout.faces().iter().enumerate() {
        for letter in letters {
            let word = letter.to_string();
            if dictionary.classify(&word) != WordStatus::Absent {
                stack.push(Candidate { word, face });
            }
        }
    }

    while let Some(candidate) = stack.pop() {
        for (face, letters) in layout.faces().iter().enumerate() {
            if face == candidate.face {
                continue;
            }
            for letter in letters {
                let mut word = String::with_capacity(candidate.word.len() + letter.len_utf8());
                word.push_str(&candidate.word);
                word.push(*letter);
                match dictionary.classify(&word) {
                    WordStatus::Word => {
                        words.insert(Arc::from(word.as_str()));
                        stack.push(Candidate { word, face });
                    }
                    WordStatus::Prefix => stack.push(Candidate { word, face }),
                    WordStatus::Absent => {}
                }
            }
        }
    }

    log::debug!(
        "Enumerated {} words across {} faces.",
        words.len(),
        layout.num_faces()
    );
    words
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trie::build_dictionary;

    fn as_strs(words: &WordSet) -> Vec<&str> {
        words.iter().map(|word| word.as_ref()).collect()
    }

    #[test]
    fn enumerate_empty_layout() {
        let dictionary = build_dictionary(["abc"]);

        assert!(enumerate_words(&dictionary, &PuzzleLayout::default()).is_empty());
    }

    #[test]
    fn enumerate_skips_same_face_letters() {
        let dictionary = build_dictionary(["aba", "acb", "aab", "cab", "bcb"]);
        let layout = PuzzleLayout::new(vec![vec!['a', 'c'], vec!['b']]);

        let words = enumerate_words(&dictionary, &layout);

        assert_eq!(as_strs(&words), vec!["aba", "bcb"]);
    }

    #[test]
    fn enumerate_finds_words_that_extend_other_words() {
        let dictionary = build_dictionary(["aba", "abab", "ababa"]);
        let layout = PuzzleLayout::new(vec![vec!['a'], vec!['b']]);

        let words = enumerate_words(&dictionary, &layout);

        assert_eq!(as_strs(&words), vec!["aba", "abab", "ababa"]);
    }

    #[test]
    fn enumerate_ignores_letters_missing_from_layout() {
        let dictionary = build_dictionary(["abz", "bab"]);
        let layout = PuzzleLayout::new(vec![vec!['a'], vec!['b']]);

        let words = enumerate_words(&dictionary, &layout);

        assert_eq!(as_strs(&words), vec!["bab"]);
    }
}
