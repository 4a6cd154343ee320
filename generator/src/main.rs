use std::error::Error;
use std::num::NonZero;

use clap::Parser;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};
use wordpath::{Board, PuzzleBuilder};

#[derive(Parser)]
#[command(name = "generator", version, about = "Generate a word-path puzzle and print its grid and solution")]
struct Args {
    /// Word to hide in the grid.
    word: String,
    /// Seed for the generator; a random one is picked and printed if absent.
    #[arg(long)]
    seed: Option<u64>,
    /// Side length of the square grid.
    #[arg(long, default_value = "4")]
    size: NonZero<usize>,
}

fn main() -> Result<(), Box<dyn Error>> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    info!(seed, size = args.size.get(), word = %args.word, "generating");

    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let puzzle = PuzzleBuilder::with_board(Board::square(args.size))
        .word(&args.word)
        .build(&mut rng)?;

    println!("seed {seed}");
    println!("{puzzle}");
    println!("{}", puzzle.correct_path());
    println!("checkpoints {:?}", puzzle.target_word_indices());

    Ok(())
}
