use clap::{Parser, Subcommand};
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::Url;
use serde_json::Value;

#[derive(Parser)]
#[command(name = "rsvp-cli")]
#[command(about = "Admin CLI for the RSVP backend", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://127.0.0.1:5000")]
    url: String,

    #[arg(short, long, env = "RSVP_ADMIN_KEY")]
    key: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every RSVP entry
    List,
    /// Show attendance totals
    Stats,
    /// Delete an entry by id
    Delete { id: String },
    /// Check liveness
    Health,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let mut headers = HeaderMap::new();
    headers.insert("x-admin-key", HeaderValue::from_str(&cli.key)?);

    let request = match cli.command {
        Commands::List => client.get(endpoint(&cli.url, &["lista"])?),
        Commands::Stats => client.get(endpoint(&cli.url, &["stats"])?),
        Commands::Delete { id } => client.delete(endpoint(&cli.url, &["sterge", &id])?),
        Commands::Health => client.get(endpoint(&cli.url, &["health"])?),
    };

    let res = request.headers(headers).send().await?;
    print_response(res).await
}

/// Append percent-encoded path segments to the base URL.
fn endpoint(base: &str, segments: &[&str]) -> Result<Url, Box<dyn std::error::Error>> {
    let mut url = Url::parse(base)?;
    url.path_segments_mut()
        .map_err(|_| format!("{base} cannot be used as a base URL"))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        let text = res.text().await.unwrap_or_default();
        return Err(format!("server returned status {status}: {text}").into());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
