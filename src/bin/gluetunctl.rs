use clap::{Parser, Subcommand};
use reqwest::{Method, StatusCode};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "gluetunctl")]
#[command(about = "Command line client for the Gluetun Web UI backend", long_about = None)]
struct Cli {
    #[arg(short, long, env = "GLUETUN_WEBUI_URL", default_value = "http://localhost:3000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show VPN status
    Status,
    /// Show the public IP seen through the tunnel
    PublicIp,
    /// Show the forwarded port
    PortForwarded,
    /// Show OpenVPN settings
    Settings,
    /// Show DNS status
    Dns,
    /// Show the aggregate health snapshot
    Health,
    /// Start the VPN
    Start,
    /// Stop the VPN
    Stop,
}

impl Commands {
    fn request(&self) -> (Method, &'static str) {
        match self {
            Commands::Status => (Method::GET, "/api/status"),
            Commands::PublicIp => (Method::GET, "/api/publicip"),
            Commands::PortForwarded => (Method::GET, "/api/portforwarded"),
            Commands::Settings => (Method::GET, "/api/settings"),
            Commands::Dns => (Method::GET, "/api/dns"),
            Commands::Health => (Method::GET, "/api/health"),
            Commands::Start => (Method::PUT, "/api/vpn/start"),
            Commands::Stop => (Method::PUT, "/api/vpn/stop"),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let (method, path) = cli.command.request();
    let url = format!("{}{}", cli.url.trim_end_matches('/'), path);
    let res = client.request(method, url).send().await?;

    if !print_response(res).await? {
        std::process::exit(1);
    }
    Ok(())
}

/// Print the body; returns whether the call succeeded.
async fn print_response(res: reqwest::Response) -> Result<bool, Box<dyn std::error::Error>> {
    let status = res.status();
    let text = res.text().await?;

    let json: Value = match serde_json::from_str(&text) {
        Ok(json) => json,
        Err(_) => {
            eprintln!("Error: backend returned status {}", status);
            eprintln!("Response: {}", text);
            return Ok(false);
        }
    };

    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(succeeded(status, &json))
}

/// A call succeeds on a 2xx status unless the envelope says `ok: false`.
fn succeeded(status: StatusCode, body: &Value) -> bool {
    let envelope_ok = body.get("ok").and_then(Value::as_bool).unwrap_or(true);
    status.is_success() && envelope_ok
}
