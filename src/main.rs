use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use powerful::{classify, factorize, format_prime_powers, parse_number};

/// Tells whether a number is powerful: prints 1 if it is, 0 if it is not
/// and -1 for zero.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Number to check; `0x` prefix for hexadecimal, leading `0` for octal
    #[arg(allow_hyphen_values = true)]
    number: String,

    /// Also print the prime factorization to stderr
    #[arg(long, short)]
    factors: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let n = parse_number(&cli.number).with_context(|| format!("cannot use `{}`", cli.number))?;

    info!("checking {n}");
    let classification = classify(n);

    if cli.factors {
        if let Some(powers) = factorize(n) {
            eprintln!("{n} = {}", format_prime_powers(&powers));
        }
    }

    println!("{classification}");
    Ok(())
}
