use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

mod args;

use args::{Cli, Commands};
use cli::commands::{cmp, divmod, eval, fact};

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let output = match &cli.command {
        Commands::Eval { lhs, op, rhs } => eval::eval(lhs, op, rhs)?,
        Commands::Divmod { lhs, rhs } => divmod::divmod(lhs, rhs)?,
        Commands::Cmp { lhs, rhs } => cmp::compare(lhs, rhs)?,
        Commands::Fact { n } => fact::factorial(n)?,
    };
    println!("{output}");
    Ok(())
}
