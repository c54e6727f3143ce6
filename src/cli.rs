#[derive(clap::Parser, Debug)]
#[clap(about, long_about = None)]
pub(crate) struct Cli {
    /// Log debug output (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::ValueEnum, Clone, Debug)]
pub(crate) enum OutputFormat {
    Tree,
    Debug,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Command {
    /// Parse a file and print its syntax tree
    Parse {
        file: std::path::PathBuf,

        /// Specifies the output format
        #[arg(short, long)]
        #[clap(value_enum, default_value_t = OutputFormat::Tree)]
        format: OutputFormat,
    },

    /// Print the token stream of a file
    Tokens { file: std::path::PathBuf },
}
