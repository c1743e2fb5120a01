use clap::Subcommand;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the HTTP gateway (default when no command is given)
    Serve {
        /// Address to bind
        #[arg(long, default_value = DEFAULT_HOST)]
        host: String,

        /// Port to listen on
        #[arg(short, long, default_value_t = DEFAULT_PORT)]
        port: u16,
    },

    /// Classify a single prompt and print the resolved template bundle as JSON
    Classify {
        prompt: String,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Serve {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}
