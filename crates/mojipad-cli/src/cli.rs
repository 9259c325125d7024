use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "mojipad")]
#[command(about = "A terminal emoji pad", long_about = None)]
#[command(version)]
#[command(long_version = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_COMMIT_HASH"),
    ")"
))]
pub struct Cli {
    /// Picker grid width in cells (overrides the config file)
    #[arg(long, value_name = "N")]
    pub columns: Option<usize>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
