use bingosim::report::plot;
use bingosim::report::summary::Summary;
use bingosim::sim::runner::Runner;
use clap::Parser;
use std::path::PathBuf;

/// Estimate the distribution of Bingo game lengths by Monte Carlo.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// independent cards to deal, one batch per card
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u32).range(1..))]
    repeats: u32,

    /// trials to play against each card
    #[arg(long, default_value_t = 1000, value_parser = clap::value_parser!(u32).range(1..))]
    trials: u32,

    /// base seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// where to write the density plot
    #[arg(long, default_value = "bingo-pdf.png")]
    output: PathBuf,

    /// raise log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logs(args.verbose);
    let runner = Runner::new(args.repeats as usize, args.trials as usize, args.seed);
    let lengths = runner.run()?;
    let summary = Summary::from(&lengths);
    print!("{}", summary);
    plot::density(&summary, &args.output)?;
    log::info!("density plot written to {}", args.output.display());
    Ok(())
}

/// terminal logger, louder with each -v
fn logs(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
