use crate::results::LetterBoxError;
use std::collections::BTreeSet;
use std::collections::HashSet;
use std::result::Result;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The set of words that can be spelled for one puzzle. Iterates in lexicographic order.
pub type WordSet = BTreeSet<Arc<str>>;

/// The faces of a puzzle, each holding a few letters.
///
/// Two letters from the same face may not be used one after the other in a word. Faces are
/// conventionally given as top, right, bottom, left, but any number of faces is supported.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PuzzleLayout {
    faces: Vec<Vec<char>>,
}

impl PuzzleLayout {
    /// Constructs a layout from the given faces without validating them.
    ///
    /// Letters should be lower case, and each letter should appear on at most one face. Use
    /// [`PuzzleLayout::from_sides`] to normalize untrusted input.
    pub fn new(faces: Vec<Vec<char>>) -> PuzzleLayout {
        PuzzleLayout { faces }
    }

    /// Constructs a layout from one string per side, converting each letter to lower case.
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// ```
    /// use rs_letter_boxed_solver::{LetterBoxError, PuzzleLayout};
    ///
    /// let layout = PuzzleLayout::from_sides(["Dg", "o", "tp"])?;
    ///
    /// assert_eq!(layout.faces(), &[vec!['d', 'g'], vec!['o'], vec!['t', 'p']]);
    /// assert!(PuzzleLayout::from_sides(["ab", "b"]).is_err());
    /// # Ok::<(), LetterBoxError>(())
    /// ```
    pub fn from_sides<S, I>(sides: I) -> Result<PuzzleLayout, LetterBoxError>
    where
        S: AsRef<str>,
        I: IntoIterator<Item = S>,
    {
        let mut seen: HashSet<char> = HashSet::new();
        let mut faces: Vec<Vec<char>> = Vec::new();
        for side in sides {
            let mut face: Vec<char> = Vec::new();
            for raw_letter in side.as_ref().trim().chars() {
                // Letters whose lower case spans several characters can't sit on one face.
                let mut lower_case = raw_letter.to_lowercase();
                let letter = match (lower_case.next(), lower_case.next()) {
                    (Some(letter), None) if raw_letter.is_alphabetic() => letter,
                    _ => return Err(LetterBoxError::UnsupportedCharacter(raw_letter)),
                };
                if !seen.insert(letter) {
                    return Err(LetterBoxError::DuplicateLetter(letter));
                }
                face.push(letter);
            }
            faces.push(face);
        }
        Ok(PuzzleLayout { faces })
    }

    /// Retrieves the faces of this puzzle.
    pub fn faces(&self) -> &[Vec<char>] {
        &self.faces
    }

    /// Returns the number of faces.
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// Returns the set of distinct letters across every face.
    pub fn alphabet(&self) -> HashSet<char> {
        self.faces.iter().flatten().copied().collect()
    }

    /// Returns the index of the face holding the given letter, if any.
    pub fn face_of(&self, letter: char) -> Option<usize> {
        self.faces.iter().position(|face| face.contains(&letter))
    }

    /// Returns `true` iff the word can be spelled using letters on this puzzle's faces, without
    /// using two letters from the same face in a row.
    ///
    /// ```
    /// use rs_letter_boxed_solver::PuzzleLayout;
    ///
    /// let layout = PuzzleLayout::new(vec![vec!['d', 'g'], vec!['o'], vec!['t', 'p']]);
    ///
    /// assert!(layout.can_spell("dog"));
    /// assert!(!layout.can_spell("dg"));
    /// assert!(!layout.can_spell("dot!"));
    /// ```
    pub fn can_spell(&self, word: &str) -> bool {
        let mut previous_face: Option<usize> = None;
        for letter in word.chars() {
            match self.face_of(letter) {
                Some(face) if previous_face != Some(face) => previous_face = Some(face),
                _ => return false,
            }
        }
        true
    }
}
