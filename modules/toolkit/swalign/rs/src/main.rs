use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use eyre::Result;
use log::LevelFilter;

use swalign_alignment_rs::pairwise::scoring::Linear;
use swalign_alignment_rs::pairwise::sw::Selection;
use swalign_rs::{generate, report, Config};

type Score = i64;

/// Local pairwise alignment of sequences with the Smith-Waterman algorithm.
#[derive(Parser, Debug)]
#[command(name = "swalign", version)]
struct Cli {
    /// Print debug messages
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Align two sequences or a file of tab separated sequence pairs
    Align(AlignArgs),
    /// Append random pairs of DNA sequences to a file
    Generate(GenerateArgs),
}

#[derive(Args, Debug)]
struct AlignArgs {
    /// The first sequence to align
    #[arg(long)]
    seq1: Option<String>,

    /// The second sequence to align
    #[arg(long)]
    seq2: Option<String>,

    /// File with one tab separated pair of sequences per line
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Score of a match
    #[arg(short, long = "match", default_value_t = Linear::<Score>::default_match(), allow_negative_numbers = true)]
    match_score: Score,

    /// Score of a mismatch
    #[arg(short = 's', long = "mismatch", default_value_t = Linear::<Score>::default_mismatch(), allow_negative_numbers = true)]
    mismatch_score: Score,

    /// Score of a gap
    #[arg(short, long = "gap", default_value_t = Linear::<Score>::default_gap(), allow_negative_numbers = true)]
    gap_score: Score,

    /// The minimum score of a reported alignment
    #[arg(long, allow_negative_numbers = true)]
    minscore: Option<Score>,

    /// The minimum length of a reported alignment
    #[arg(long, allow_negative_numbers = true)]
    minlength: Option<i64>,

    /// The number of alignments to return for each pair
    #[arg(long)]
    numresult: Option<usize>,

    /// Number of worker threads, 0 uses all available cores
    #[arg(short, long, default_value_t = 1)]
    threads: usize,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Length of the sequences
    #[arg(short, long = "len")]
    length: usize,

    /// Number of sequence pairs
    #[arg(short, long, default_value_t = 1)]
    nseq: usize,

    /// Output file, new pairs are appended
    #[arg(short, long, default_value = generate::DEFAULT_OUTPUT)]
    out: PathBuf,
}

fn align(args: AlignArgs) -> Result<()> {
    let mut builder = Config::<Score>::builder()
        .with_scoring(args.match_score, args.mismatch_score, args.gap_score)
        .with_min_score(args.minscore)
        .with_min_length(args.minlength)
        .with_num_results(args.numresult)
        .with_threads(args.threads);
    if let Some(input) = args.input {
        builder = builder.with_input_file(input);
    }
    let config = builder.with_sequences(args.seq1, args.seq2).build()?;

    let reports = swalign_rs::run(&config)?;

    let mut stdout = BufWriter::new(io::stdout().lock());
    for pair in &reports {
        for outcome in pair.outcomes() {
            writeln!(stdout, "{}\n", report::render(outcome))?;
        }
        if let Selection::Top(requested) = config.selection() {
            log::info!(
                "Pair {}: {} of {} requested alignment(s) passed the filters",
                pair.index() + 1,
                pair.passed(),
                requested
            );
        }
    }
    stdout.flush()?;
    Ok(())
}

fn generate(args: GenerateArgs) -> Result<()> {
    let pairs = generate::random_pairs(&mut rand::thread_rng(), args.length, args.nseq);
    generate::append_pairs(&args.out, &pairs)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let result = match cli.command {
        Command::Align(args) => align(args),
        Command::Generate(args) => generate(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err:?}");
            ExitCode::FAILURE
        }
    }
}
