use anyhow::Result;
use clap::{Parser, Subcommand};

mod cli;

/// folio - portfolio site contact service
#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Contact form endpoint for a portfolio website", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Submit one message to a running contact endpoint
    Submit {
        /// Contact endpoint URL
        #[arg(long, default_value = "http://127.0.0.1:3000/api/contact")]
        endpoint: String,

        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        subject: String,

        /// Message body, "\n" starts a new line
        #[arg(long)]
        message: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = folio::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    folio::observability::init_observability(
        "folio",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Serve { host, port } => cli::server::serve(config, host, port).await,
        Commands::Submit {
            endpoint,
            name,
            email,
            subject,
            message,
        } => {
            cli::submit::submit(cli::submit::SubmitArgs {
                endpoint,
                name,
                email,
                subject,
                message,
            })
            .await
        }
    }
}
