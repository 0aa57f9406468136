use clap::{ArgAction, Parser, Subcommand};

/// Command-line interface definition for togglrep
/// CLI application to build weekly time reports from the Toggl reporting API
#[derive(Parser)]
#[command(
    name = "togglrep",
    version = env!("CARGO_PKG_VERSION"),
    about = "Weekly time reports and timesheet policy checks from the Toggl reporting API",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or custom setups)
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    /// Print debug detail (repeat for more)
    #[arg(global = true, short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Mute informational messages
    #[arg(global = true, short = 'q', long = "quiet")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file with default settings
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Inspect the configuration
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,
    },

    /// Fetch raw time records for every workspace and export them as CSV
    Detailed {
        #[arg(
            long,
            short = 'o',
            default_value = "-",
            help = "Output file, \"-\" for stdout"
        )]
        output: String,

        #[arg(long, short = 'd', help = "Reporting date override, YYYY-MM-DD")]
        date: Option<String>,

        #[arg(
            long,
            short = 'a',
            help = "Include records from inactive users (omitted by default)"
        )]
        all: bool,

        #[arg(long, short = 'f', help = "Overwrite the output file if it exists")]
        force: bool,
    },

    /// Validate a detailed CSV and build the per-user weekly report
    Individual {
        #[arg(
            long,
            short = 'i',
            default_value = "-",
            help = "Input detailed CSV, \"-\" for stdin"
        )]
        input: String,

        #[arg(
            long,
            short = 'o',
            default_value = "-",
            help = "Output file, \"-\" for stdout"
        )]
        output: String,

        #[arg(
            long,
            default_value = "-",
            help = "Violations CSV file, \"-\" for stderr"
        )]
        violations: String,

        #[arg(
            long,
            short = 'n',
            help = "Single-record duration threshold in hours (config default: 10)"
        )]
        threshold: Option<f64>,

        #[arg(long, short = 'f', help = "Overwrite the output file if it exists")]
        force: bool,
    },

    /// Roll an individual report up per (team, project)
    Team {
        #[arg(
            long,
            short = 'i',
            default_value = "-",
            help = "Input individual CSV, \"-\" for stdin"
        )]
        input: String,

        #[arg(
            long,
            short = 'o',
            default_value = "-",
            help = "Output file, \"-\" for stdout"
        )]
        output: String,

        #[arg(long, short = 'f', help = "Overwrite the output file if it exists")]
        force: bool,
    },

    /// Fetch records and render the organization-wide HTML summary
    Summary {
        #[arg(
            long,
            short = 'o',
            default_value = "-",
            help = "Output file, \"-\" for stdout"
        )]
        output: String,

        #[arg(long, short = 'd', help = "Reporting date override, YYYY-MM-DD")]
        date: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite the output file if it exists")]
        force: bool,
    },

    /// List time records longer than the threshold
    Overachievers {
        #[arg(
            long,
            short = 'o',
            default_value = "-",
            help = "Output file, \"-\" for stdout"
        )]
        output: String,

        #[arg(long, short = 'd', help = "Reporting date override, YYYY-MM-DD")]
        date: Option<String>,

        #[arg(
            long,
            short = 'n',
            help = "Single-record duration threshold in hours (config default: 10)"
        )]
        threshold: Option<f64>,

        #[arg(long, short = 'f', help = "Overwrite the output file if it exists")]
        force: bool,
    },
}
