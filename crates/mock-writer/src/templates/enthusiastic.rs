//! Enthusiastic templates.

use post_core::EventDetails;

use super::TemplateSet;

pub(crate) static TEMPLATES: TemplateSet = TemplateSet {
    linkedin,
    twitter,
    whatsapp,
};

fn linkedin(event: &EventDetails) -> String {
    let mut post = format!("🎉 INCREDIBLY EXCITED to announce {}!! 🎉\n\n", event.name);
    post.push_str(&format!("{}\n\n", event.description));
    if let Some((date, location)) = event.date_and_location() {
        post.push_str(&format!(
            "📅 MARK YOUR CALENDARS: {}\n📍 BE THERE: {}\n\n",
            date, location
        ));
    }
    post.push_str("This is going to be ABSOLUTELY AMAZING!! Can't WAIT to see everyone there!!! #Excited #BestEventEver");
    post
}

fn twitter(event: &EventDetails) -> String {
    let mut post = format!(
        "OMG! You DO NOT want to miss {}!! It's going to be INCREDIBLE! ",
        event.name
    );
    if let Some((date, location)) = event.date_and_location() {
        post.push_str(&format!("{} at {}", date, location));
    }
    post.push_str(" #CantWait #SoExcited");
    post
}

fn whatsapp(event: &EventDetails) -> String {
    let mut post = format!(
        "HEY EVERYONE!!! 🔥🔥🔥\n\nDROP EVERYTHING YOU'RE DOING! {} is happening and it's going to be EPIC!!!\n\n",
        event.name
    );
    post.push_str(&format!("{}\n\n", event.description));
    if let Some((date, location)) = event.date_and_location() {
        post.push_str(&format!(
            "📅 When: {} (SET THOSE ALARMS!)\n📍 Where: {} (GET THERE EARLY!)\n\n",
            date, location
        ));
    }
    post.push_str("I AM SOOOO EXCITED!!! 🎉🎉🎉 PLEASE COME!!! SHARE WITH EVERYONE!!!");
    post
}
