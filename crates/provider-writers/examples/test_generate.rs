//! Live test for one provider writer.
//!
//! Run with: cargo run -p provider-writers --example test_generate -- openai
//! Provider is one of: openai, gemini, anthropic (default: openai)
//!
//! Make sure to set environment variables in .env:
//!   POSTGEN_API_KEY - credential for the chosen provider

use post_core::{EventDetails, PostWriter, Tone};
use provider_writers::{AnthropicWriter, GeminiWriter, OpenAiWriter, ProviderConfig};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    let provider = env::args().nth(1).unwrap_or_else(|| "openai".to_string());
    let api_key = env::var("POSTGEN_API_KEY")?;
    let config = ProviderConfig::from_env()?;

    let writer: Box<dyn PostWriter> = match provider.as_str() {
        "gemini" => Box::new(GeminiWriter::new(config, api_key)?),
        "anthropic" => Box::new(AnthropicWriter::new(config, api_key)?),
        _ => Box::new(OpenAiWriter::new(config, api_key)?),
    };

    println!("Writer initialized: {}", writer.name());

    let event = EventDetails::new(
        "Rust Meetup",
        "An evening of lightning talks about async Rust and embedded systems.",
    )
    .with_date("June 12")
    .with_location("Community Hall");

    println!("Waiting for responses...\n");

    let posts = writer.write_posts(&event, Tone::Enthusiastic).await;

    for (platform, post) in posts.iter() {
        println!("=== {} ===", platform);
        println!("{}", post);
        println!();
    }

    Ok(())
}
