use clap::{ArgAction, Parser};

/// CLI arguments for the ant planner
#[derive(Parser, Debug)]
#[command(name = "lem_in", about = "🐜 Moves an ant colony across an anthill in the fewest turns")]
pub struct Args {
    /// Path to the map file
    #[arg(short = 'm', long = "map")]
    pub map: String,

    /// Number of ants, overriding the map file's count
    #[arg(short = 'n', long = "ants", allow_negative_numbers = true)]
    pub ants: Option<i64>,

    /// Print the selected routes before the move log
    #[arg(long, default_value_t = false)]
    pub show_routes: bool,

    /// Suppress the summary line (for benchmarks)
    #[arg(long, default_value_t = false)]
    pub no_summary: bool,

    /// Log verbosity: -v info, -vv debug, -vvv trace
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Default log filter for the chosen verbosity
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
