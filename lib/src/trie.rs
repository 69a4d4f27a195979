use crate::results::LetterBoxError;
use std::collections::HashMap;
use std::io::BufRead;
use std::result::Result;

/// Words must be longer than this many characters to be loaded by [`Dictionary::from_reader`].
pub const MIN_WORD_LENGTH: usize = 2;

/// How a string relates to the words in a [`Dictionary`].
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub enum WordStatus {
    /// The string is a complete word. Longer words may also start with it.
    Word,
    /// The string is not a word, but at least one word starts with it.
    Prefix,
    /// No word starts with the string.
    Absent,
}

#[derive(Debug, Default, Clone)]
struct DictionaryNode {
    children: HashMap<char, DictionaryNode>,
    is_word: bool,
}

/// A prefix tree of words, used to prune the word search as soon as a partial word can no longer
/// become a real word.
///
/// A dictionary is built once and then only queried, so a single instance can be shared by many
/// solves, including across threads.
#[derive(Debug, Default, Clone)]
pub struct Dictionary {
    root: DictionaryNode,
    num_words: usize,
}

impl Dictionary {
    /// Creates an empty dictionary.
    pub fn new() -> Dictionary {
        Dictionary::default()
    }

    /// Builds a dictionary containing exactly the given words.
    ///
    /// Words are inserted as-is: they should already be lower case and longer than
    /// [`MIN_WORD_LENGTH`].
    ///
    /// ```
    /// use rs_letter_boxed_solver::Dictionary;
    ///
    /// let dictionary = Dictionary::from_iterator(["dog", "got"]);
    ///
    /// assert_eq!(dictionary.len(), 2);
    /// assert!(dictionary.contains("dog"));
    /// ```
    pub fn from_iterator<S, I>(words: I) -> Dictionary
    where
        S: AsRef<str>,
        I: IntoIterator<Item = S>,
    {
        let mut dictionary = Dictionary::new();
        for word in words {
            dictionary.insert(word.as_ref());
        }
        log::debug!("Built dictionary with {} words.", dictionary.num_words);
        dictionary
    }

    /// Builds a dictionary by reading words from the given reader, one word per line.
    ///
    /// Each line is trimmed and converted to lower case. Lines with [`MIN_WORD_LENGTH`] or fewer
    /// characters are skipped.
    pub fn from_reader<R: BufRead>(word_reader: R) -> Result<Dictionary, LetterBoxError> {
        let mut dictionary = Dictionary::new();
        for maybe_line in word_reader.lines() {
            if let Some(word) = normalize_word(&maybe_line?) {
                dictionary.insert(&word);
            }
        }
        log::debug!("Loaded dictionary with {} words.", dictionary.num_words);
        Ok(dictionary)
    }

    /// Inserts the given word.
    ///
    /// The word must be non-empty and lower case. Inserting the same word again has no effect.
    pub fn insert(&mut self, word: &str) {
        let mut node = &mut self.root;
        for letter in word.chars() {
            node = node.children.entry(letter).or_default();
        }
        if !node.is_word {
            node.is_word = true;
            self.num_words += 1;
        }
    }

    /// Returns `true` iff the given word was inserted.
    pub fn contains(&self, word: &str) -> bool {
        self.classify(word) == WordStatus::Word
    }

    /// Returns `true` iff at least one word starts with the given prefix. A word counts as its own
    /// prefix.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        match self.find_node(prefix) {
            Some(node) => node.is_word || !node.children.is_empty(),
            None => false,
        }
    }

    /// Determines whether the given string is a word, a prefix of a word, or neither, in a single
    /// walk of the tree.
    ///
    /// ```
    /// use rs_letter_boxed_solver::{Dictionary, WordStatus};
    ///
    /// let dictionary = Dictionary::from_iterator(["dog", "dogs"]);
    ///
    /// assert_eq!(dictionary.classify("do"), WordStatus::Prefix);
    /// assert_eq!(dictionary.classify("dog"), WordStatus::Word);
    /// assert_eq!(dictionary.classify("dot"), WordStatus::Absent);
    /// ```
    pub fn classify(&self, word: &str) -> WordStatus {
        match self.find_node(word) {
            Some(node) if node.is_word => WordStatus::Word,
            Some(node) if !node.children.is_empty() => WordStatus::Prefix,
            // Only the root of an empty dictionary has neither flag nor children.
            _ => WordStatus::Absent,
        }
    }

    /// Returns the number of distinct words in the dictionary.
    pub fn len(&self) -> usize {
        self.num_words
    }

    /// Returns `true` iff the dictionary contains no words.
    pub fn is_empty(&self) -> bool {
        self.num_words == 0
    }

    fn find_node(&self, prefix: &str) -> Option<&DictionaryNode> {
        let mut node = &self.root;
        for letter in prefix.chars() {
            node = node.children.get(&letter)?;
        }
        Some(node)
    }
}

/// Builds an immutable dictionary from the given words. See [`Dictionary::from_iterator`].
pub fn build_dictionary<S, I>(words: I) -> Dictionary
where
    S: AsRef<str>,
    I: IntoIterator<Item = S>,
{
    Dictionary::from_iterator(words)
}

/// Trims and lower-cases the given word, returning `None` if it is too short to be used in a
/// puzzle.
///
/// ```
/// use rs_letter_boxed_solver::normalize_word;
///
/// assert_eq!(normalize_word(" Dog\n"), Some("dog".to_string()));
/// assert_eq!(normalize_word("at"), None);
/// ```
pub fn normalize_word(word: &str) -> Option<String> {
    let word = word.trim().to_lowercase();
    if word.chars().count() > MIN_WORD_LENGTH {
        Some(word)
    } else {
        None
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn classify_empty() {
        let dictionary = Dictionary::new();

        assert_eq!(dictionary.classify("key"), WordStatus::Absent);
        assert_eq!(dictionary.classify(""), WordStatus::Absent);
        assert!(!dictionary.has_prefix(""));
        assert!(dictionary.is_empty());
    }

    #[test]
    fn insert_and_classify() {
        let mut dictionary = Dictionary::new();

        dictionary.insert("abc");

        assert_eq!(dictionary.classify("abc"), WordStatus::Word);
        assert_eq!(dictionary.classify("ab"), WordStatus::Prefix);
        assert_eq!(dictionary.classify("a"), WordStatus::Prefix);
        assert_eq!(dictionary.classify(""), WordStatus::Prefix);
        assert_eq!(dictionary.classify("abcd"), WordStatus::Absent);
        assert_eq!(dictionary.classify("other"), WordStatus::Absent);
    }

    #[test]
    fn word_that_is_also_prefix() {
        let mut dictionary = Dictionary::new();

        dictionary.insert("abc");
        dictionary.insert("abcd");

        assert_eq!(dictionary.classify("abc"), WordStatus::Word);
        assert!(dictionary.has_prefix("abc"));
        assert!(dictionary.has_prefix("abcd"));
        assert!(!dictionary.has_prefix("abd"));
    }

    #[test]
    fn insert_is_idempotent() {
        let mut dictionary = Dictionary::new();

        dictionary.insert("abc");
        dictionary.insert("abc");

        assert_eq!(dictionary.len(), 1);
        assert!(dictionary.contains("abc"));
        assert!(!dictionary.contains("ab"));
    }

    #[test]
    fn from_reader_filters_and_lowercases() -> Result<(), LetterBoxError> {
        let cursor = Cursor::new(String::from("\nDOG\n  got \nat\nx\n\ndog\n"));

        let dictionary = Dictionary::from_reader(cursor)?;

        assert_eq!(dictionary.len(), 2);
        assert!(dictionary.contains("dog"));
        assert!(dictionary.contains("got"));
        assert_eq!(dictionary.classify("at"), WordStatus::Absent);
        Ok(())
    }
}
