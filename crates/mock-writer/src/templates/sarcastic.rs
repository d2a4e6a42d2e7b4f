//! Sarcastic templates.

use post_core::EventDetails;

use super::TemplateSet;

pub(crate) static TEMPLATES: TemplateSet = TemplateSet {
    linkedin,
    twitter,
    whatsapp,
};

fn linkedin(event: &EventDetails) -> String {
    let mut post = format!(
        "Oh great, another event to add to your calendar: {}. 🙄\n\n",
        event.name
    );
    post.push_str(&format!("{}\n\n", event.description));
    if let Some((date, location)) = event.date_and_location() {
        post.push_str(&format!(
            "If you really have nothing better to do on {} at {}, I guess you could show up.\n\n",
            date, location
        ));
    }
    post.push_str("Can't wait to pretend to be interested in small talk. #NetworkingJoy #ProfessionalSmiling");
    post
}

fn twitter(event: &EventDetails) -> String {
    let mut post = format!(
        "Wow, {}! Because what we all needed was ANOTHER event to attend. 🙄 ",
        event.name
    );
    if let Some((date, location)) = event.date_and_location() {
        post.push_str(&format!("{} at {}", date, location));
    }
    post.push_str(" #blessed #sarcasm");
    post
}

fn whatsapp(event: &EventDetails) -> String {
    let mut post = format!(
        "Attention everyone! 📢\n\nApparently we're supposed to be excited about {}.\n\n",
        event.name
    );
    post.push_str(&format!("{}\n\n", event.description));
    if let Some((date, location)) = event.date_and_location() {
        post.push_str(&format!(
            "Mark your calendars (or don't) for {} at {}.\n\n",
            date, location
        ));
    }
    post.push_str("Feel free to come up with creative excuses not to attend. 😂");
    post
}
