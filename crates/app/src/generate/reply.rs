//! Reply drafting — tone-selected templates with one bounded lexical
//! substitution.

use serde::Serialize;

use flowforge_domain::settings::Tone;

use crate::choice::ChoiceSource;

const PROFESSIONAL_TEMPLATES: [&str; 2] = [
    "Thank you for your message. I have received your request and will look into it shortly. I will get back to you within 24 hours.",
    "Thanks for reaching out. I've noted the details and will follow up with you by end of day. Please let me know if you have any urgent questions in the meantime.",
];

const FRIENDLY_TEMPLATES: [&str; 2] = [
    "Hi! Thanks for getting in touch. I'll look into this and get back to you soon. Have a great day!",
    "Hey there – received your message. I'll circle back with a proper response shortly. Thanks!",
];

const DIRECT_TEMPLATES: [&str; 2] = [
    "Received. We will respond within 24 hours.",
    "Request noted. Expect a follow-up by end of day.",
];

const HELPFUL_TEMPLATES: [&str; 2] = [
    "Thank you for contacting us. Based on your message, here are the next steps: 1) We'll verify the details, 2) Process your request within 1–2 business days. You'll receive a confirmation email once complete.",
    "Thanks for reaching out. I've forwarded this to the right team. You should hear back within 24 hours. In the meantime, you can check our help center for common answers.",
];

/// Substitutable phrases and their variant pools, in lookup order.
const VARIANTS: [(&str, [&str; 3]); 3] = [
    ("Thank you", ["Thanks", "Thank you", "Many thanks"]),
    ("I will", ["I'll", "I will", "I'd be glad to"]),
    ("please", ["please", "kindly", "when you can"]),
];

/// Characters of the body exposed in the preview.
const PREVIEW_LEN: usize = 80;

/// A drafted reply.
#[derive(Debug, Clone, Serialize)]
pub struct Reply {
    pub body: String,
    pub tone: Tone,
    /// First 80 characters of the body, "…" appended when truncated.
    pub preview: String,
}

/// The fixed template pool for a tone.
#[must_use]
pub fn template_pool(tone: Tone) -> &'static [&'static str; 2] {
    match tone {
        Tone::Professional => &PROFESSIONAL_TEMPLATES,
        Tone::Friendly => &FRIENDLY_TEMPLATES,
        Tone::Direct => &DIRECT_TEMPLATES,
        Tone::Helpful => &HELPFUL_TEMPLATES,
    }
}

/// Replace the first substitutable phrase with one of its fixed variants.
fn slight_variation<C: ChoiceSource>(base: &str, choice: &mut C) -> String {
    for (phrase, variants) in &VARIANTS {
        if base.contains(phrase) {
            return base.replacen(phrase, *choice.pick(variants), 1);
        }
    }
    base.to_string()
}

/// Draft a reply to an inbound message in the given tone.
///
/// The inbound message is accepted but does not vary the output: the body
/// comes from the tone's fixed template pool plus one bounded substitution.
pub fn generate_reply<C: ChoiceSource>(_message: &str, tone: Tone, choice: &mut C) -> Reply {
    let base = *choice.pick(template_pool(tone));
    let body = slight_variation(base, choice);
    let preview = preview_of(&body);
    Reply {
        body,
        tone,
        preview,
    }
}

fn preview_of(body: &str) -> String {
    let mut preview: String = body.chars().take(PREVIEW_LEN).collect();
    if body.chars().count() > PREVIEW_LEN {
        preview.push('…');
    }
    preview
}
