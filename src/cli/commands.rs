use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "mingyuan", version, about = "Mingyuan Secondary School Website Server", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Override the config file path globally
    #[arg(short, long, global = true, default_value = "config.yaml")]
    pub config: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the website and consultant relay API server
    Serve,

    /// Enter an interactive consultant chat REPL against a running server
    Chat {
        /// Consultation scenario template key (e.g. CAREER_PLANNING)
        #[arg(short, long)]
        template: Option<String>,

        /// Base URL of the relay server (defaults to the configured address)
        #[arg(short, long)]
        relay: Option<String>,
    },

    /// List the available consultation scenario templates
    Templates,
}
