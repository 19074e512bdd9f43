use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use turnberry_place::cms::{CmsError, DrupalClient, ResourceKind};
use turnberry_place::content::SitePage;
use turnberry_place::leads::{HttpLeadSink, LeadError, LeadForm, LeadService};
use turnberry_place::schema::render_scripts;
use turnberry_place::{audit, embeds, pages, SiteConfig};

/// Structured data and lead tooling for the Turnberry Place Las Vegas site
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a page's JSON-LD script blocks
    Render {
        #[arg(value_enum)]
        page: SitePage,
    },
    /// Write JSON-LD for every page to a directory
    Export {
        #[arg(short, long, default_value = "structured_data")]
        out: PathBuf,
    },
    /// Fetch a live page and check its structured data
    Audit { url: String },
    /// Fetch a CMS node by path alias
    Cms { path: String },
    /// Validate and submit a lead
    Lead {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, default_value = "")]
        phone: String,
        #[arg(long, default_value = "")]
        message: String,
    },
    /// Show the map embed and scheduling link
    Embeds,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let config = SiteConfig::from_env();
    info!("🏠 Turnberry Place - {}", config.base_url);

    match cli.command {
        Command::Render { page } => {
            let docs = pages::page_documents(&config, page)?;
            println!("{}", render_scripts(&docs)?);
        }
        Command::Export { out } => {
            let written = pages::export_all(&config, &out).await?;
            for path in written {
                println!("{}", path.display());
            }
        }
        Command::Audit { url } => {
            let report = audit::fetch_and_audit(&url).await?;
            info!("Found {} JSON-LD documents", report.documents);
            if report.issues.is_empty() {
                println!("✅ {}: no issues", report.url);
            } else {
                for issue in &report.issues {
                    println!("❌ {}", issue);
                }
                anyhow::bail!("{} issues found on {}", report.issues.len(), report.url);
            }
        }
        Command::Cms { path } => {
            let client = DrupalClient::new(&config)?;
            match client.fetch_node(&path).await {
                Ok(node) => {
                    println!("{}", serde_json::to_string_pretty(&node)?);
                    if node.kind == ResourceKind::Article {
                        let docs = pages::article_documents(&config, &node)?;
                        println!("{}", render_scripts(&docs)?);
                    }
                }
                Err(CmsError::NotFound { path }) => {
                    println!("404 Not Found: {}", path);
                }
                Err(e) => return Err(e.into()),
            }
        }
        Command::Lead {
            name,
            email,
            phone,
            message,
        } => {
            let service = LeadService::new(HttpLeadSink::new(&config)?);
            let mut form = LeadForm {
                name,
                email,
                phone,
                message,
            };
            match service.submit(&mut form).await {
                Ok(receipt) => println!("✅ Thank you! Submitted at {}", receipt.submitted_at),
                Err(LeadError::Invalid(errors)) => {
                    for (field, message) in errors.iter() {
                        println!("{}: {}", field, message);
                    }
                    anyhow::bail!("lead not submitted");
                }
                Err(e) => {
                    error!("Lead submission failed: {}", e);
                    println!("{}", e.user_message(&config.business.phone));
                    anyhow::bail!("lead not submitted");
                }
            }
        }
        Command::Embeds => {
            let map = embeds::map_embed(&config);
            println!("{}", serde_json::to_string_pretty(&map)?);
            println!("Schedule a tour: {}", embeds::scheduling_url(&config));
        }
    }

    Ok(())
}
