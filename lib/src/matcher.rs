use std::iter::zip;

/// Returns `true` iff both chains hold the same words in the same order, ignoring case.
///
/// ```
/// use rs_letter_boxed_solver::chains_match;
///
/// assert!(chains_match(&["dog", "got"], &["DOG", "Got"]));
/// assert!(!chains_match(&["dog", "got"], &["dog"]));
/// ```
pub fn chains_match<C, R>(candidate: &[C], reference: &[R]) -> bool
where
    C: AsRef<str>,
    R: AsRef<str>,
{
    candidate.len() == reference.len()
        && zip(candidate, reference)
            .all(|(word, expected)| words_match(word.as_ref(), expected.as_ref()))
}

fn words_match(word: &str, expected: &str) -> bool {
    word == expected || word.to_lowercase() == expected.to_lowercase()
}
