use std::io;

/// Indicates that an error occurred while loading words or reading a puzzle layout.
///
/// Unsolvable puzzles are not errors: they simply produce no words or no chains.
#[derive(Debug, thiserror::Error)]
pub enum LetterBoxError {
    /// Indicates that the word list could not be read.
    #[error("failed to read word list: {0}")]
    Io(#[from] io::Error),
    /// Indicates that a side of the puzzle contains a character that is not a letter.
    #[error("unsupported character {0:?}: puzzle sides may only contain letters")]
    UnsupportedCharacter(char),
    /// Indicates that the same letter was given more than once across the puzzle's sides.
    #[error("letter {0:?} appears more than once in the puzzle")]
    DuplicateLetter(char),
}
