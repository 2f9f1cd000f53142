use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use company_lookup::client::{render, SearchClient, SearchSession};
use company_lookup::config::{load_settings, Settings};
use company_lookup::server;

#[derive(Parser)]
#[command(name = "company-lookup", version, about = "Look up companies by name")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the lookup server and search page.
    Serve {
        /// Address to bind.
        #[arg(long, env = "COMPANY_LOOKUP_HOST")]
        host: Option<String>,
        /// Port to listen on.
        #[arg(short, long, env = "PORT")]
        port: Option<u16>,
        /// TOML file of `[[company]]` tables replacing the built-in directory.
        #[arg(long, env = "COMPANY_LOOKUP_COMPANIES")]
        companies: Option<PathBuf>,
        /// Artificial delay before answering a directory hit.
        #[arg(long)]
        latency_ms: Option<u64>,
    },
    /// Query a running server from the terminal.
    Search {
        /// Company name to look up.
        name: String,
        /// Base URL of the server.
        #[arg(long, env = "COMPANY_LOOKUP_SERVER", default_value = "http://localhost:3001")]
        server: String,
        /// Show an error card instead of an error message when the server is unreachable.
        #[arg(long)]
        fallback_card: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "company_lookup=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let mut settings = load_settings().await;

    match cli.command {
        Command::Serve {
            host,
            port,
            companies,
            latency_ms,
        } => {
            if let Some(host) = host {
                settings.host = host;
            }
            if let Some(port) = port {
                settings.port = port;
            }
            if companies.is_some() {
                settings.companies_file = companies;
            }
            if let Some(latency) = latency_ms {
                settings.simulated_latency_ms = latency;
            }
            server::serve(&settings).await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Search {
            name,
            server,
            fallback_card,
        } => search(&settings, &server, &name, fallback_card).await,
    }
}

async fn search(
    settings: &Settings,
    server: &str,
    name: &str,
    fallback_card: bool,
) -> anyhow::Result<ExitCode> {
    let client = SearchClient::new(server, settings.request_timeout())?;
    let mut session = SearchSession::new();

    if let Some(query) = session.submit(name) {
        eprintln!("{}", render(session.state()));
        let outcome = if fallback_card {
            Ok(client.fetch_company_info(&query).await)
        } else {
            client.search(&query).await
        };
        session.complete(outcome);
    }

    println!("{}", render(session.state()));
    Ok(session.exit_code())
}
