//! Baseline templates used by most tones.

use post_core::EventDetails;

use super::TemplateSet;

pub(crate) static TEMPLATES: TemplateSet = TemplateSet {
    linkedin,
    twitter,
    whatsapp,
};

/// Descriptions longer than this are cut for Twitter.
const TWITTER_DESCRIPTION_MAX: usize = 100;
/// Characters kept when a description is cut.
const TWITTER_DESCRIPTION_KEEP: usize = 80;

fn linkedin(event: &EventDetails) -> String {
    let mut post = format!("I'm excited to announce {}!\n\n", event.name);
    post.push_str(&format!("{}\n\n", event.description));
    if let Some(ref date) = event.date {
        post.push_str(&format!("📅 When: {}\n", date));
    }
    if let Some(ref location) = event.location {
        post.push_str(&format!("📍 Where: {}\n", location));
    }
    post.push_str("\nLooking forward to connecting with industry professionals at this event. #ProfessionalDevelopment #Networking");
    post
}

fn twitter(event: &EventDetails) -> String {
    let mut post = format!("Join us for {}! ", event.name);
    post.push_str(&twitter_description(&event.description));
    if let Some((date, location)) = event.date_and_location() {
        post.push_str(&format!(" {} at {}", date, location));
    }
    post.push_str(" #excited #event");
    post
}

fn twitter_description(description: &str) -> String {
    if description.chars().count() > TWITTER_DESCRIPTION_MAX {
        let kept: String = description.chars().take(TWITTER_DESCRIPTION_KEEP).collect();
        format!("{}...", kept)
    } else {
        description.to_string()
    }
}

fn whatsapp(event: &EventDetails) -> String {
    let mut post = format!(
        "Hey everyone! 👋\n\nJust wanted to let you know about {}.\n\n",
        event.name
    );
    post.push_str(&format!("{}\n\n", event.description));
    if let Some(ref date) = event.date {
        post.push_str(&format!("📅 Date: {}\n", date));
    }
    if let Some(ref location) = event.location {
        post.push_str(&format!("📍 Location: {}\n", location));
    }
    post.push_str("\nHope to see you there! Feel free to share with others who might be interested. 😊");
    post
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_description_untouched() {
        let exactly_max = "d".repeat(100);
        assert_eq!(twitter_description(&exactly_max), exactly_max);
    }

    #[test]
    fn test_long_description_truncated() {
        let long = "d".repeat(101);
        let cut = twitter_description(&long);
        assert_eq!(cut, format!("{}...", "d".repeat(80)));
    }

    #[test]
    fn test_truncation_counts_characters() {
        let long = "é".repeat(120);
        let cut = twitter_description(&long);
        assert_eq!(cut.chars().count(), 83);
    }

    #[test]
    fn test_linkedin_includes_single_optional_field() {
        let event = EventDetails::new("Tech Conf", "A great event").with_location("Berlin");
        let post = linkedin(&event);

        assert!(post.contains("📍 Where: Berlin\n"));
        assert!(!post.contains("📅"));
    }

    #[test]
    fn test_twitter_needs_date_and_location() {
        let only_date = EventDetails::new("Tech Conf", "A great event").with_date("May 1");
        assert_eq!(
            twitter(&only_date),
            "Join us for Tech Conf! A great event #excited #event"
        );

        let both = only_date.with_location("Berlin");
        assert_eq!(
            twitter(&both),
            "Join us for Tech Conf! A great event May 1 at Berlin #excited #event"
        );
    }
}
