use colored::Colorize;

use quill_client::ApiClient;
use quill_server::{QuillServer, ServerConfig};
use quill_types::{PostDraft, PostSummary};

use crate::cli::*;

pub async fn run_command(cli: Cli) -> anyhow::Result<()> {
    let Cli {
        command,
        url,
        format,
    } = cli;
    let client = ApiClient::new(url);
    match command {
        Command::List(_) => cmd_list(&client, &format).await,
        Command::Get(args) => cmd_get(&client, &format, &args.id).await,
        Command::Save(args) => cmd_save(&client, args).await,
        Command::Delete(args) => cmd_delete(&client, &args.id).await,
        Command::Health(_) => cmd_health(&client, &format).await,
        Command::Serve(args) => cmd_serve(args).await,
    }
}

async fn cmd_list(client: &ApiClient, format: &OutputFormat) -> anyhow::Result<()> {
    let posts = client.list_posts().await?;
    if let OutputFormat::Json = format {
        println!("{}", serde_json::to_string_pretty(&posts)?);
        return Ok(());
    }
    if posts.is_empty() {
        println!("No posts.");
        return Ok(());
    }
    for card in &posts {
        print_card(card);
    }
    Ok(())
}

async fn cmd_get(client: &ApiClient, format: &OutputFormat, id: &str) -> anyhow::Result<()> {
    let post = client.get_post(id).await?;
    if let OutputFormat::Json = format {
        println!("{}", serde_json::to_string_pretty(&post)?);
        return Ok(());
    }
    println!("{}  {}", post.id.yellow().bold(), post.title.bold());
    println!("  {} | {}", post.author.cyan(), post.category.cyan());
    println!(
        "  created {}  updated {}",
        post.create_time.dimmed(),
        post.update_time.dimmed()
    );
    if let Some(cover) = &post.cover {
        println!("  cover {}", cover.blue());
    }
    println!("\n{}", post.content);
    Ok(())
}

async fn cmd_save(client: &ApiClient, args: SaveArgs) -> anyhow::Result<()> {
    let id = args
        .id
        .unwrap_or_else(|| uuid::Uuid::now_v7().to_string());
    let draft = PostDraft {
        id: Some(id.clone()),
        title: Some(args.title),
        content: Some(args.content),
        summary: args.summary,
        cover: args.cover,
        create_time: args.create_time,
        update_time: None,
        author: args.author,
        category: args.category,
    };
    let confirmation = client.save_post(&draft).await?;
    println!("{} {} ({})", "✓".green().bold(), confirmation, id.yellow());
    Ok(())
}

async fn cmd_delete(client: &ApiClient, id: &str) -> anyhow::Result<()> {
    let confirmation = client.delete_post(id).await?;
    println!("{} {} ({})", "✓".green().bold(), confirmation, id.yellow());
    Ok(())
}

async fn cmd_health(client: &ApiClient, format: &OutputFormat) -> anyhow::Result<()> {
    let health = client.health().await?;
    if let OutputFormat::Json = format {
        println!("{}", serde_json::to_string_pretty(&health)?);
        return Ok(());
    }
    println!(
        "{} {} (v{})",
        "✓".green().bold(),
        health.status.green(),
        health.version
    );
    Ok(())
}

async fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => ServerConfig::from_toml_file(path)?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = &args.bind {
        config.bind_addr = bind.parse()?;
    }
    println!("Quill API on {}", config.bind_addr.to_string().bold());
    QuillServer::in_memory(config).serve().await?;
    Ok(())
}

fn print_card(card: &PostSummary) {
    println!("{}  {}", card.id.yellow().bold(), card.title.bold());
    println!(
        "  {} | {} | {}",
        card.author.cyan(),
        card.category.cyan(),
        card.create_time.dimmed()
    );
    if !card.summary.is_empty() {
        println!("  {}", card.summary.dimmed());
    }
}
