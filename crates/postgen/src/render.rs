//! Text rendering of generated posts.

use post_core::{GenerationResult, Platform};

/// Render all posts with character counts and limit warnings.
///
/// Empty results render as an empty string.
pub fn render_posts(posts: &GenerationResult) -> String {
    let mut out = String::new();
    if !posts.has_content() {
        return out;
    }

    out.push_str("Generated Posts\n");
    for (platform, post) in posts.iter() {
        let text = post.text();
        out.push_str(&format!("\n=== {} ===\n{}\n", platform, text));
        if text.is_empty() {
            continue;
        }

        let stats = posts.stats(platform);
        out.push_str(&format!("Character count: {}\n", stats.chars));
        if let Some(over) = stats.over_limit {
            out.push_str(&format!(
                "Warning: this post exceeds {}'s {} character limit by {} characters.\n",
                platform,
                platform.char_limit().unwrap_or_default(),
                over
            ));
        }
    }

    out
}

/// Render posts as a `{platform: text}` JSON object.
pub fn render_json(posts: &GenerationResult) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(posts)
}

/// Platforms whose post failed, for the exit summary.
pub fn failed_platforms(posts: &GenerationResult) -> Vec<Platform> {
    posts
        .iter()
        .filter(|(_, post)| post.is_failed())
        .map(|(platform, _)| platform)
        .collect()
}
