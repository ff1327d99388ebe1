use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[arg(short = 'v', long, global = true, help = "Enable debug logging.")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Floor-divide two integers.
    Int {
        #[arg(allow_negative_numbers = true, help = "The dividend.")]
        dividend: i64,

        #[arg(allow_negative_numbers = true, help = "The divisor.")]
        divisor: i64,

        #[arg(
            short = 's',
            long,
            help = "Fail on a zero divisor or overflow instead of printing 0."
        )]
        strict: bool,
    },

    /// Floor-divide two real numbers.
    Real {
        #[arg(allow_negative_numbers = true, help = "The dividend.")]
        dividend: f64,

        #[arg(allow_negative_numbers = true, help = "The divisor.")]
        divisor: f64,

        #[arg(
            short = 's',
            long,
            help = "Fail on a zero divisor instead of printing 0."
        )]
        strict: bool,
    },

    /// Floor-divide two integers and print the quotient and remainder.
    Divmod {
        #[arg(allow_negative_numbers = true, help = "The dividend.")]
        dividend: i64,

        #[arg(allow_negative_numbers = true, help = "The divisor.")]
        divisor: i64,
    },

    /// Compare two strings byte by byte, like C strcmp.
    Cmp {
        #[arg(help = "The first string.")]
        lhs: String,

        #[arg(help = "The second string.")]
        rhs: String,
    },
}
