use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;
use rand::SeedableRng;
use rs_letter_boxed_solver::*;

use std::collections::BTreeSet;

fn as_strs(words: &WordSet) -> Vec<&str> {
    words.iter().map(|word| word.as_ref()).collect()
}

/// Spells every string up to `max_len` letters long, never using the same face twice in a row.
fn spell_all(layout: &PuzzleLayout, max_len: usize) -> BTreeSet<String> {
    fn extend(
        layout: &PuzzleLayout,
        word: &mut String,
        face: usize,
        max_len: usize,
        out: &mut BTreeSet<String>,
    ) {
        out.insert(word.clone());
        if word.len() == max_len {
            return;
        }
        for (next_face, letters) in layout.faces().iter().enumerate() {
            if next_face == face {
                continue;
            }
            for letter in letters {
                word.push(*letter);
                extend(layout, word, next_face, max_len, out);
                word.pop();
            }
        }
    }

    let mut out = BTreeSet::new();
    for (face, letters) in layout.faces().iter().enumerate() {
        for letter in letters {
            extend(layout, &mut letter.to_string(), face, max_len, &mut out);
        }
    }
    out
}

#[test]
fn scenario_dog_got() {
    let dictionary = build_dictionary(["dog", "got", "top", "pot"]);
    let layout = PuzzleLayout::new(vec![vec!['d', 'g'], vec!['o'], vec!['t', 'p']]);

    let words = enumerate_words(&dictionary, &layout);

    assert!(words.contains("dog"));
    assert!(words.contains("got"));
    assert_eq!(as_strs(&words), vec!["dog", "got", "pot", "top"]);
}

#[test]
fn empty_dictionary_finds_nothing() {
    let dictionary = build_dictionary(Vec::<String>::new());
    let layout = PuzzleLayout::new(vec![
        vec!['a', 'b', 'c'],
        vec!['d', 'e', 'f'],
        vec!['g', 'h', 'i'],
        vec!['j', 'k', 'l'],
    ]);

    assert!(enumerate_words(&dictionary, &layout).is_empty());
}

#[test]
fn matches_brute_force_on_small_layout() {
    let dictionary_words = vec![
        "aca", "acb", "abc", "cad", "dab", "cdc", "bcbd", "adad", "acac", "bdbd", "aab", "dcd",
    ];
    let dictionary = build_dictionary(&dictionary_words);
    let layout = PuzzleLayout::new(vec![vec!['a', 'b'], vec!['c', 'd']]);

    let words = enumerate_words(&dictionary, &layout);

    let spellable = spell_all(&layout, 4);
    let expected: Vec<&str> = dictionary_words
        .iter()
        .copied()
        .filter(|word| spellable.contains(*word))
        .collect::<BTreeSet<&str>>()
        .into_iter()
        .collect();
    assert_eq!(as_strs(&words), expected);
    assert_eq!(as_strs(&words), vec!["aca", "acac", "acb", "adad", "bcbd", "bdbd", "cad"]);
}

#[test]
fn random_layouts_find_exactly_the_spellable_words() {
    let mut rng = StdRng::seed_from_u64(42);
    let all_letters: Vec<char> = ('a'..='z').collect();
    let dictionary_words: Vec<String> = (0..3000)
        .map(|_| {
            let len = rng.gen_range(3..=8);
            (0..len)
                .map(|_| all_letters[rng.gen_range(0..all_letters.len())])
                .collect()
        })
        .collect();
    let dictionary = build_dictionary(&dictionary_words);

    for _ in 0..20 {
        let mut letters = all_letters.clone();
        letters.shuffle(&mut rng);
        let faces: Vec<Vec<char>> = letters[..12].chunks(3).map(|face| face.to_vec()).collect();
        let layout = PuzzleLayout::new(faces);

        let words = enumerate_words(&dictionary, &layout);

        for word in &words {
            assert!(dictionary.contains(word), "{} is not a word", word);
            assert!(layout.can_spell(word), "{} cannot be spelled", word);
        }
        let expected: BTreeSet<&str> = dictionary_words
            .iter()
            .map(String::as_str)
            .filter(|word| layout.can_spell(word))
            .collect();
        assert_eq!(as_strs(&words), expected.into_iter().collect::<Vec<&str>>());
    }
}

#[test]
fn supports_any_number_of_faces() {
    let dictionary = build_dictionary(["abcde", "abab", "eca"]);
    let layout = PuzzleLayout::new(vec![
        vec!['a'],
        vec!['b'],
        vec!['c'],
        vec!['d'],
        vec!['e'],
    ]);

    let words = enumerate_words(&dictionary, &layout);

    assert_eq!(as_strs(&words), vec!["abab", "abcde", "eca"]);
}
