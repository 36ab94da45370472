use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "quill",
    about = "Quill — a minimal key-value-backed blog CMS",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// API server to talk to
    #[arg(long, global = true, default_value = "http://127.0.0.1:8787")]
    pub url: String,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// List all posts
    List(ListArgs),
    /// Show a single post
    Get(GetArgs),
    /// Create or update a post
    Save(SaveArgs),
    /// Delete a post
    Delete(DeleteArgs),
    /// Check server health
    Health(HealthArgs),
    /// Start the API server
    Serve(ServeArgs),
}

#[derive(Args)]
pub struct ListArgs {}

#[derive(Args)]
pub struct GetArgs {
    pub id: String,
}

#[derive(Args)]
pub struct SaveArgs {
    /// Post id; a fresh UUID is minted when omitted
    #[arg(long)]
    pub id: Option<String>,
    #[arg(short, long)]
    pub title: String,
    #[arg(short, long)]
    pub content: String,
    #[arg(long)]
    pub summary: Option<String>,
    #[arg(long)]
    pub cover: Option<String>,
    #[arg(long)]
    pub author: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
    /// Original creation time; pass it back when updating so the
    /// server keeps it instead of restamping
    #[arg(long)]
    pub create_time: Option<String>,
}

#[derive(Args)]
pub struct DeleteArgs {
    pub id: String,
}

#[derive(Args)]
pub struct HealthArgs {}

#[derive(Args)]
pub struct ServeArgs {
    /// Listen address, overrides the config file
    #[arg(long)]
    pub bind: Option<String>,
    /// TOML config file
    #[arg(long)]
    pub config: Option<String>,
}
