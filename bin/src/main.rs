use clap::{Parser, Subcommand};
use log::LevelFilter;
use rayon::prelude::*;
use rs_letter_boxed_solver::*;
use std::env;
use std::error::Error;
use std::fs::File;
use std::io;
use std::io::BufRead;
use std::time::Instant;

/// Solves Letter Boxed puzzles by finding short chains of words that use every letter.
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Path to a file that contains a list of possible words, with one word on each line.
    #[clap(short = 'f', long)]
    words_file: String,

    /// Log debug details from each stage of the solver.
    #[clap(short, long)]
    verbose: bool,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Find two- and three-word solutions for one puzzle.
    Solve {
        /// The letters on each side of the box, e.g. "rme wcl tgk api".
        #[clap(required = true)]
        sides: Vec<String>,

        /// Stop searching for three-word solutions after finding this many.
        #[clap(long, default_value_t = DEFAULT_MAX_THREE_WORD_CHAINS)]
        max_three_word_chains: usize,

        /// A known solution to look for among the results, e.g. "claim mecca".
        #[clap(long)]
        reference: Option<String>,
    },
    /// List every word that can be spelled on one puzzle, longest first.
    Words {
        /// The letters on each side of the box.
        #[clap(required = true)]
        sides: Vec<String>,
    },
    /// Solve every puzzle in a file, one puzzle per line with sides separated by spaces.
    Batch {
        puzzles_file: String,

        /// Stop searching for three-word solutions after finding this many.
        #[clap(long, default_value_t = DEFAULT_MAX_THREE_WORD_CHAINS)]
        max_three_word_chains: usize,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    let start_time = Instant::now();
    let args = Args::parse();
    init_logger(args.verbose);
    println!("File: {}", args.words_file);

    let words_reader = io::BufReader::new(File::open(&args.words_file)?);
    let dictionary = Dictionary::from_reader(words_reader)?;
    println!("There are {} possible words.", dictionary.len());

    match args.command {
        Command::Solve {
            sides,
            max_three_word_chains,
            reference,
        } => solve_single_puzzle(
            &dictionary,
            &sides,
            &SolverConfig {
                max_three_word_chains,
            },
            reference.as_deref(),
        )?,
        Command::Words { sides } => list_words(&dictionary, &sides)?,
        Command::Batch {
            puzzles_file,
            max_three_word_chains,
        } => solve_batch(
            &dictionary,
            &puzzles_file,
            &SolverConfig {
                max_three_word_chains,
            },
        )?,
    }

    println!(
        "Command executed in {:.3}s.",
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}

fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    if let Ok(spec) = env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    builder.init();
}

fn solve_single_puzzle(
    dictionary: &Dictionary,
    sides: &[String],
    config: &SolverConfig,
    reference: Option<&str>,
) -> Result<(), LetterBoxError> {
    let layout = PuzzleLayout::from_sides(sides)?;
    let solutions = solve(dictionary, &layout, config);

    println!("Found {} words for this puzzle.", solutions.num_words);
    println!("\nTwo-word solutions ({}):", solutions.two_word_chains.len());
    for chain in solutions.two_word_chains.iter() {
        println!("\t{}", chain);
    }
    println!(
        "\nThree-word solutions ({}, limit {}):",
        solutions.three_word_chains.len(),
        config.max_three_word_chains
    );
    for chain in solutions.three_word_chains.iter() {
        println!("\t{}", chain);
    }

    if let Some(reference) = reference {
        let reference_words = parse_reference(reference);
        match solutions.find_match(&reference_words[..]) {
            Some(chain) => println!("\nFound the reference solution: {}", chain),
            None => println!(
                "\nThe reference solution ({}) was not among the results.",
                reference_words.join(" - ")
            ),
        }
    }

    Ok(())
}

fn list_words(dictionary: &Dictionary, sides: &[String]) -> Result<(), LetterBoxError> {
    let layout = PuzzleLayout::from_sides(sides)?;
    let mut words: Vec<_> = enumerate_words(dictionary, &layout).into_iter().collect();
    // The set is already sorted, so a stable sort keeps equal-length words alphabetical.
    words.sort_by_key(|word| std::cmp::Reverse(word.chars().count()));

    println!("Found {} words for this puzzle:", words.len());
    for word in words.iter() {
        println!("\t{}", word);
    }
    Ok(())
}

fn solve_batch(
    dictionary: &Dictionary,
    puzzles_file: &str,
    config: &SolverConfig,
) -> Result<(), Box<dyn Error>> {
    let puzzles_reader = io::BufReader::new(File::open(puzzles_file)?);
    let puzzles: Vec<String> = puzzles_reader
        .lines()
        .collect::<io::Result<Vec<String>>>()?
        .into_iter()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();
    let layouts = puzzles
        .iter()
        .map(|puzzle| PuzzleLayout::from_sides(puzzle.split_whitespace()))
        .collect::<Result<Vec<PuzzleLayout>, LetterBoxError>>()?;

    let all_solutions: Vec<Solutions> = layouts
        .par_iter()
        .map(|layout| solve(dictionary, layout, config))
        .collect();

    println!("Solved {} puzzles. Results:", puzzles.len());
    println!("|Puzzle|Num words|Two-word solutions|Three-word solutions|Best solution|");
    println!("|------|---------|------------------|--------------------|-------------|");
    for (puzzle, solutions) in puzzles.iter().zip(all_solutions.iter()) {
        let best = solutions
            .all_chains()
            .next()
            .map_or_else(|| "-".to_string(), |chain| chain.to_string());
        println!(
            "|{}|{}|{}|{}|{}|",
            puzzle,
            solutions.num_words,
            solutions.two_word_chains.len(),
            solutions.three_word_chains.len(),
            best
        );
    }
    Ok(())
}

/// Splits a reference solution such as "claim mecca" or "CLAIM-MECCA" into its words.
fn parse_reference(reference: &str) -> Vec<&str> {
    reference
        .split(|c: char| c.is_whitespace() || c == ',' || c == '-')
        .filter(|word| !word.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_reference_splits_words() {
        assert_eq!(parse_reference("claim mecca"), vec!["claim", "mecca"]);
        assert_eq!(parse_reference(" CLAIM - MECCA "), vec!["CLAIM", "MECCA"]);
        assert_eq!(parse_reference("a,b,,c"), vec!["a", "b", "c"]);
        assert!(parse_reference("").is_empty());
    }
}
