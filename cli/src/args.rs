use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bigcalc")]
#[command(about = "Arbitrary-precision integer calculator", long_about = None)]
pub struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Apply one operator to two decimal integers
    Eval {
        /// Left operand
        #[arg(allow_hyphen_values = true)]
        lhs: String,
        /// One of + - * / % << >>
        #[arg(allow_hyphen_values = true)]
        op: String,
        /// Right operand
        #[arg(allow_hyphen_values = true)]
        rhs: String,
    },
    /// Truncating division: print quotient and remainder
    Divmod {
        #[arg(allow_hyphen_values = true)]
        lhs: String,
        #[arg(allow_hyphen_values = true)]
        rhs: String,
    },
    /// Compare two integers and print <, = or >
    Cmp {
        #[arg(allow_hyphen_values = true)]
        lhs: String,
        #[arg(allow_hyphen_values = true)]
        rhs: String,
    },
    /// Factorial of a non-negative integer
    Fact { n: String },
}
