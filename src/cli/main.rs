use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use reqwest::{Client, RequestBuilder};

#[derive(Parser)]
#[command(name = "research-cli")]
#[command(about = "Research Pro CLI", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8000")]
    endpoint: String,

    /// Shared API token sent as X-API-Token
    #[arg(short, long, env = "GDEV_API_TOKEN", default_value = "dev-token")]
    token: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check server health
    Health,

    /// Keyword search across sources, notes and insights
    Search {
        #[arg(value_name = "QUERY")]
        query: String,

        #[arg(short, long, default_value = "0")]
        skip: usize,

        #[arg(short, long, default_value = "50")]
        limit: usize,
    },

    /// Show the dashboard summary
    Dashboard,

    /// List topics
    Topics {
        /// active, paused or completed
        #[arg(short, long)]
        status: Option<String>,
    },

    /// Get topic details
    Topic {
        #[arg(value_name = "TOPIC_ID")]
        id: i64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let client = Client::new();
    let api = |path: &str| format!("{}/api/v1{}", cli.endpoint, path);

    let request = match &cli.command {
        Commands::Health => client.get(format!("{}/health", cli.endpoint)),
        Commands::Search { query, skip, limit } => client.get(api("/search")).query(&[
            ("q", query.clone()),
            ("skip", skip.to_string()),
            ("limit", limit.to_string()),
        ]),
        Commands::Dashboard => client.get(api("/dashboard")),
        Commands::Topics { status } => {
            let request = client.get(api("/topics"));
            match status {
                Some(status) => request.query(&[("status", status)]),
                None => request,
            }
        }
        Commands::Topic { id } => client.get(api(&format!("/topics/{}", id))),
    };

    print_response(request.header("X-API-Token", &cli.token)).await
}

async fn print_response(request: RequestBuilder) -> anyhow::Result<()> {
    let response = request.send().await.context("Failed to reach server")?;
    let status = response.status();
    let body: serde_json::Value = response
        .json()
        .await
        .context("Server returned a non-JSON body")?;

    println!("{}", serde_json::to_string_pretty(&body)?);

    if !status.is_success() {
        bail!("Request failed with status {}", status);
    }
    Ok(())
}
