// src/main.rs

use anyhow::Context;
use clap::{Parser, Subcommand};
use log::LevelFilter;
use log4rs::{
    append::console::ConsoleAppender,
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use std::fs;

use wp_gateway::{
    build_sitemap, inject_heading_ids, CommentsClient, ContentGateway, GatewayConfig,
};

/// Command-line surface of the gateway: fetch canonical records from
/// the configured WordPress backend and print them as JSON.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct CommandLineInput {
    #[command(subcommand)]
    command: Command,

    /// Skip GraphQL and query the REST API directly
    #[arg(long, default_value_t = false)]
    rest_only: bool,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all published posts
    Posts,
    /// Fetch one post by slug
    Post {
        slug: String,
        /// Inject heading anchor ids into the content HTML
        #[arg(long, default_value_t = false)]
        anchors: bool,
    },
    /// List all published projects
    Projects,
    /// Fetch one project by slug
    Project {
        slug: String,
        /// Inject heading anchor ids into the content HTML
        #[arg(long, default_value_t = false)]
        anchors: bool,
    },
    /// List the comments of a post
    Comments { post_id: u64 },
    /// Emit sitemap entries for all published content
    Sitemap {
        /// Public site base URL used to build entry URLs
        #[arg(long, default_value = "https://example.com")]
        site_url: String,
    },
}

/// Sets up logging configuration.
fn setup_logging(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let log_file_path = std::env::temp_dir().join("wp_gateway.log");
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}"
    } else {
        "{m}{n}"
    };

    let stderr_appender = ConsoleAppender::builder()
        .target(log4rs::append::console::Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}",
        )))
        .build(&log_file_path)?;

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr_appender)))
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file_appender)),
        )
        .build(
            Root::builder()
                .appender("stderr")
                .appender("file")
                .build(log_level),
        )?;

    log4rs::init_config(config)?;
    log::debug!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn run(cli: CommandLineInput) -> anyhow::Result<()> {
    let mut config = GatewayConfig::from_env();
    if cli.rest_only {
        config = config.with_graphql(false);
    }
    let gateway = ContentGateway::from_config(&config);

    match cli.command {
        Command::Posts => print_json(&gateway.list_posts().await),
        Command::Post { slug, anchors } => match gateway.get_post_by_slug(&slug).await {
            Some(mut post) => {
                if anchors {
                    post.content = inject_heading_ids(&post.content);
                }
                print_json(&post)
            }
            None => {
                eprintln!("No post with slug '{}'", slug);
                std::process::exit(1);
            }
        },
        Command::Projects => print_json(&gateway.list_projects().await),
        Command::Project { slug, anchors } => match gateway.get_project_by_slug(&slug).await {
            Some(mut project) => {
                if anchors {
                    project.content = inject_heading_ids(&project.content);
                }
                print_json(&project)
            }
            None => {
                eprintln!("No project with slug '{}'", slug);
                std::process::exit(1);
            }
        },
        Command::Comments { post_id } => {
            let comments = CommentsClient::new(config)
                .list_comments(post_id)
                .await
                .with_context(|| format!("fetching comments of post {}", post_id))?;
            print_json(&comments)
        }
        Command::Sitemap { site_url } => print_json(&build_sitemap(&gateway, &site_url).await),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CommandLineInput::parse();

    setup_logging(cli.verbose).map_err(|e| anyhow::anyhow!("logging setup failed: {}", e))?;

    run(cli).await
}
