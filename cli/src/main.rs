//! The primes CLI tool

use std::io::Write;

use clap::Parser;
use env_logger::fmt::Color;
use env_logger::{Builder, Target};
use eyre::WrapErr;
use log::{max_level, Level, LevelFilter};
use primes_counter::{Limit, PrimeCounter};
use tracing_forest::ForestLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{EnvFilter, Registry};

#[derive(Parser)]
#[command(name = "primes", author, version, about, long_about = None)]
struct Cli {
    #[arg(long, hide = true)]
    markdown_help: bool,

    /// Set log filter value [ off, error, warn, info, debug, trace ]
    #[arg(long)]
    #[arg(default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,

    /// Exclusive upper bound of the numbers to test
    #[arg(default_value = "10000", allow_negative_numbers = true)]
    limit: Limit,
}

fn main() -> eyre::Result<()> {
    let args = Cli::parse();

    // Logs go to stderr, stdout only carries the result line.
    Builder::new()
        .filter_level(args.log_level)
        .parse_default_env()
        .target(Target::Stderr)
        .format(|buf, record| {
            let mut style = buf.style();
            match record.level() {
                Level::Error => {
                    style.set_color(Color::Red);
                }
                Level::Warn => {
                    style.set_color(Color::Yellow);
                }
                _ => {}
            }
            writeln!(buf, "{}", style.value(record.args()))
        })
        .init();

    if max_level() >= LevelFilter::Debug {
        // Also print the timing of the spans recorded by the counter.
        let env_filter = EnvFilter::builder()
            .parse("debug")
            .wrap_err("invalid tracing filter")?;
        let subscriber = Registry::default()
            .with(env_filter)
            .with(ForestLayer::default());
        tracing::subscriber::set_global_default(subscriber)
            .wrap_err("unable to set global tracing subscriber")?;
    }

    if args.markdown_help {
        clap_markdown::print_help_markdown::<Cli>();
    } else {
        print_report(run(args.limit));
    }
    Ok(())
}

fn run(limit: Limit) -> u64 {
    log::info!("Counting primes below {limit}...");
    PrimeCounter::new(limit).count()
}

fn report(found: u64) -> String {
    format!("found: {found} primes")
}

#[allow(clippy::print_stdout)]
fn print_report(found: u64) {
    println!("{}", report(found));
}
