use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use log::{info, LevelFilter};
use permsolve::{report::Report, solve_with, CycleOrder, SolveOptions};

const DEFAULT_PERMUTATION: &str = "(1,4,5,6,7,8)(7,9,10,3,2,1)";

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        for cause in err.chain().skip(1) {
            eprintln!("  caused by: {cause}");
        }
        std::process::exit(1);
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "permsolve",
    about = "Disjoint cycles, transpositions, order, parity and inverse of a permutation of Sn."
)]
struct Cli {
    /// Permutation in cycle notation, e.g. "(1,2,3)(3,4)". Use "-" to read one per line from stdin.
    #[arg(default_value = DEFAULT_PERMUTATION)]
    permutation: String,
    /// Apply the leftmost cycle first instead of the rightmost.
    #[arg(long)]
    left_to_right: bool,
    /// List fixed points as 1-cycles in the disjoint decomposition.
    #[arg(long)]
    show_fixed: bool,
    /// Reject permutations naming an element above this.
    #[arg(long, value_name = "N", default_value_t = permsolve::solve::DEFAULT_MAX_DEGREE)]
    max_degree: usize,
    /// More log output (-v info, -vv debug, -vvv trace). Without it RUST_LOG applies.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn options(&self) -> SolveOptions {
        let order = if self.left_to_right {
            CycleOrder::FirstFirst
        } else {
            CycleOrder::LastFirst
        };
        SolveOptions::default()
            .with_order(order)
            .with_max_degree(self.max_degree)
    }
}

fn init_logging(verbose: u8) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    let level = match verbose {
        0 => None,
        1 => Some(LevelFilter::Info),
        2 => Some(LevelFilter::Debug),
        _ => Some(LevelFilter::Trace),
    };
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.init();
}

fn report(input: &str, cli: &Cli, out: &mut impl Write) -> Result<()> {
    let solution = solve_with(input, &cli.options())
        .with_context(|| format!("failed to solve {input:?}"))?;
    writeln!(
        out,
        "{}",
        Report::new(&solution).show_fixed_points(cli.show_fixed)
    )?;
    Ok(())
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.permutation != "-" {
        return report(&cli.permutation, &cli, &mut out);
    }

    let mut first = true;
    for (number, line) in io::stdin().lock().lines().enumerate() {
        let line = line.context("failed to read stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        info!("line {}: {}", number + 1, line.trim());
        if !first {
            writeln!(out)?;
        }
        first = false;
        writeln!(out, "Permutation: {}\n", line.trim())?;
        report(&line, &cli, &mut out).with_context(|| format!("on line {}", number + 1))?;
    }
    Ok(())
}
