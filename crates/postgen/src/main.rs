//! Command-line social post generator.
//!
//! Collects event details, resolves a generation service from the supplied
//! credential (or a manual selection), and prints one post per platform.

mod render;

use std::env;

use clap::Parser;
use orchestrator::{EventDetails, Orchestrator, ServiceOverride, Session, Tone};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::render::{failed_platforms, render_json, render_posts};

const EXAMPLE_NAME: &str = "AI Developer Conference 2025";
const EXAMPLE_DESCRIPTION: &str = "Join us for three days of cutting-edge AI workshops, keynote presentations from industry leaders, and networking opportunities with the best minds in artificial intelligence. This event features hands-on labs, technical deep dives, and the latest in generative AI, machine learning, and neural networks.";
const EXAMPLE_DATE: &str = "April 15-17, 2025";
const EXAMPLE_LOCATION: &str = "Silicon Valley Convention Center, Mountain View";

#[derive(Debug, Parser)]
#[command(name = "postgen")]
#[command(about = "Generate LinkedIn, Twitter, and WhatsApp posts from event details")]
struct Args {
    /// Provider API key. Falls back to POSTGEN_API_KEY env.
    #[arg(long)]
    api_key: Option<String>,

    /// Service: auto, openai, gemini, anthropic, or mock
    #[arg(long, default_value = "auto")]
    service: ServiceOverride,

    /// Event name
    #[arg(long)]
    name: Option<String>,

    /// Event description
    #[arg(long)]
    description: Option<String>,

    /// Event date
    #[arg(long)]
    date: Option<String>,

    /// Event location
    #[arg(long)]
    location: Option<String>,

    /// Post tone: professional, casual, enthusiastic, sarcastic, formal, humorous
    #[arg(long, default_value = "professional")]
    tone: Tone,

    /// Fill missing event fields from the built-in example event
    #[arg(long)]
    example: bool,

    /// Print posts as a JSON object instead of text
    #[arg(long)]
    json: bool,
}

impl Args {
    fn event(&self) -> EventDetails {
        let pick = |value: &Option<String>, example: &str| match value {
            Some(value) => value.clone(),
            None if self.example => example.to_string(),
            None => String::new(),
        };

        EventDetails::new(
            pick(&self.name, EXAMPLE_NAME),
            pick(&self.description, EXAMPLE_DESCRIPTION),
        )
        .with_date(pick(&self.date, EXAMPLE_DATE))
        .with_location(pick(&self.location, EXAMPLE_LOCATION))
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let credential = args
        .api_key
        .clone()
        .or_else(|| env::var("POSTGEN_API_KEY").ok())
        .unwrap_or_default();

    let orchestrator = Orchestrator::from_env()?;
    let mut session = Session::new();

    let service = session
        .select_service(&orchestrator, &credential, args.service)
        .await;
    if args.service == ServiceOverride::AutoDetect {
        eprintln!("Detected API service: {}", service);
    } else {
        eprintln!("Manually selected: {}", service);
    }

    let event = args.event();
    info!("Generating posts for {} ({} tone)", event.name, args.tone);

    if let Err(err) = session
        .generate(&orchestrator, &credential, &event, args.tone)
        .await
    {
        eprintln!("{}", err);
        std::process::exit(2);
    }

    for notice in session.notices() {
        eprintln!("{}", notice);
    }

    if args.json {
        println!("{}", render_json(session.posts())?);
    } else {
        print!("{}", render_posts(session.posts()));
    }

    let failed = failed_platforms(session.posts());
    if !failed.is_empty() {
        let names: Vec<&str> = failed.iter().map(|platform| platform.as_str()).collect();
        eprintln!("Generation failed for: {}", names.join(", "));
    }

    Ok(())
}
