//! Post templates, one module per template set.
//!
//! Sarcastic and Enthusiastic swap in complete template sets of their own.
//! Every other tone uses the baseline set unchanged, including Humorous,
//! which has prompt elaboration but no template set here.

mod baseline;
mod enthusiastic;
mod sarcastic;

use post_core::{EventDetails, GenerationResult, PostOutcome, Tone};

/// Text builders for each platform.
pub(crate) struct TemplateSet {
    pub linkedin: fn(&EventDetails) -> String,
    pub twitter: fn(&EventDetails) -> String,
    pub whatsapp: fn(&EventDetails) -> String,
}

impl TemplateSet {
    pub(crate) fn render(&self, event: &EventDetails) -> GenerationResult {
        GenerationResult::new(
            PostOutcome::Draft((self.linkedin)(event)),
            PostOutcome::Draft((self.twitter)(event)),
            PostOutcome::Draft((self.whatsapp)(event)),
        )
    }
}

/// Select the template set for a tone.
pub(crate) fn for_tone(tone: Tone) -> &'static TemplateSet {
    match tone {
        Tone::Sarcastic => &sarcastic::TEMPLATES,
        Tone::Enthusiastic => &enthusiastic::TEMPLATES,
        Tone::Professional | Tone::Casual | Tone::Formal | Tone::Humorous => &baseline::TEMPLATES,
    }
}
