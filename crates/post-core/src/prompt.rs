//! Prompt construction and fingerprinting.

use sha2::{Digest, Sha256};

use crate::event::{EventDetails, Platform, Tone};

/// Render the event block embedded in every prompt.
///
/// Name and description are always present; date and location lines are
/// only added when set.
pub fn format_event_info(event: &EventDetails) -> String {
    let mut info = format!("Event Name: {}\n", event.name);
    info.push_str(&format!("Description: {}\n", event.description));
    if let Some(ref date) = event.date {
        info.push_str(&format!("Date: {}\n", date));
    }
    if let Some(ref location) = event.location {
        info.push_str(&format!("Location: {}\n", location));
    }
    info
}

/// Build the instruction text sent to a provider for one platform.
pub fn build_prompt(platform: Platform, event_info: &str, tone: Tone) -> String {
    let tone_name = tone.as_str().to_lowercase();

    let mut prompt = format!(
        "Create a {} {} post about the following event:\n\n",
        tone_name, platform
    );
    prompt.push_str(event_info);
    prompt.push('\n');
    prompt.push_str(&platform_clause(platform));
    prompt.push_str(&format!("\nThe tone should be {}.", tone_name));

    if let Some(elaboration) = tone_elaboration(tone) {
        prompt.push(' ');
        prompt.push_str(elaboration);
    }

    prompt
}

fn platform_clause(platform: Platform) -> String {
    match platform {
        Platform::LinkedIn => "The post should be professional, informative, and include relevant hashtags. It should be suitable for a business audience.".to_string(),
        Platform::Twitter => format!(
            "The post should be concise (under {} characters), engaging, and include relevant hashtags.",
            platform.char_limit().unwrap_or(280)
        ),
        Platform::WhatsApp => "The post should be conversational, informative, and use emojis where appropriate. It should feel personal and friendly.".to_string(),
    }
}

// Casual and Formal have none.
fn tone_elaboration(tone: Tone) -> Option<&'static str> {
    match tone {
        Tone::Sarcastic => {
            Some("Use witty sarcasm and humor while still conveying the important information.")
        }
        Tone::Professional => {
            Some("Use formal language and focus on the business value of the event.")
        }
        Tone::Enthusiastic => Some("Show high energy and excitement about the event."),
        Tone::Humorous => {
            Some("Include appropriate jokes or wordplay while still being informative.")
        }
        Tone::Casual | Tone::Formal => None,
    }
}

/// Compute a stable SHA-256 fingerprint for a prompt string.
pub fn hash_prompt(prompt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(prompt.as_bytes());
    let digest = hasher.finalize();
    let mut hex = String::with_capacity(digest.len() * 2);
    for byte in digest {
        hex.push_str(&format!("{:02x}", byte));
    }
    hex
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tech_conf() -> EventDetails {
        EventDetails::new("Tech Conf", "A great event")
    }

    #[test]
    fn test_event_info_required_fields_only() {
        assert_eq!(
            format_event_info(&tech_conf()),
            "Event Name: Tech Conf\nDescription: A great event\n"
        );
    }

    #[test]
    fn test_event_info_with_date_and_location() {
        let event = tech_conf().with_date("May 1").with_location("Berlin");
        assert_eq!(
            format_event_info(&event),
            "Event Name: Tech Conf\nDescription: A great event\nDate: May 1\nLocation: Berlin\n"
        );
    }

    #[test]
    fn test_prompt_header_and_tone_clause() {
        let info = format_event_info(&tech_conf());
        let prompt = build_prompt(Platform::LinkedIn, &info, Tone::Casual);

        assert!(prompt.starts_with(
            "Create a casual LinkedIn post about the following event:\n\nEvent Name: Tech Conf\n"
        ));
        assert!(prompt.contains("suitable for a business audience."));
        assert!(prompt.ends_with("\nThe tone should be casual."));
    }

    #[test]
    fn test_twitter_prompt_mentions_limit() {
        let info = format_event_info(&tech_conf());
        let prompt = build_prompt(Platform::Twitter, &info, Tone::Formal);

        assert!(prompt.contains("under 280 characters"));
        assert!(prompt.ends_with("The tone should be formal."));
    }

    #[test]
    fn test_whatsapp_prompt_clause() {
        let info = format_event_info(&tech_conf());
        let prompt = build_prompt(Platform::WhatsApp, &info, Tone::Enthusiastic);

        assert!(prompt.contains("use emojis where appropriate"));
        assert!(prompt.ends_with(
            "The tone should be enthusiastic. Show high energy and excitement about the event."
        ));
    }

    #[test]
    fn test_elaboration_only_for_four_tones() {
        let info = format_event_info(&tech_conf());
        for tone in Tone::ALL {
            let prompt = build_prompt(Platform::LinkedIn, &info, tone);
            let plain_ending = format!("The tone should be {}.", tone.as_str().to_lowercase());
            let has_elaboration = !prompt.ends_with(&plain_ending);
            let expected = !matches!(tone, Tone::Casual | Tone::Formal);
            assert_eq!(has_elaboration, expected, "tone {}", tone);
        }
    }

    #[test]
    fn test_prompt_is_pure() {
        let info = format_event_info(&tech_conf().with_date("May 1"));
        for platform in Platform::ALL {
            for tone in Tone::ALL {
                assert_eq!(
                    build_prompt(platform, &info, tone),
                    build_prompt(platform, &info, tone)
                );
            }
        }
    }

    #[test]
    fn test_hash_prompt_stable() {
        let first = hash_prompt("test prompt");
        let second = hash_prompt("test prompt");
        let different = hash_prompt("another prompt");

        assert_eq!(first, second);
        assert_ne!(first, different);
        assert_eq!(first.len(), 64);
    }
}
