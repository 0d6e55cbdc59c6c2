//! Prompt text for a language-model commentator.
//!
//! Formatting only. No parsing, no networking.

use crate::events::{CommentaryEvent, CommentaryTrigger};

const PERSONA: &str = "You are 'PsychoBot', a playful, clever, and slightly arrogant AI \
playing a mind game against a teenager (15-19 years old). Your goal is to taunt them \
playfully using 'Hinglish' (Hindi + English mix). Use slang like 'Bhai', 'Beta', \
'Samajh rahe ho?', 'Scene on hai'. Never be mean, just competitive and tricky. Keep \
responses short (max 2 sentences).";

/// System and user prompt for one commentary request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommentaryPrompt {
    pub system: String,
    pub user: String,
}

impl CommentaryPrompt {
    /// Suggested sampling temperature for the persona.
    pub const TEMPERATURE: f32 = 0.8;
    /// Suggested completion cap; replies are one or two sentences.
    pub const MAX_TOKENS: u32 = 60;

    /// Build the prompt pair for an event.
    #[must_use]
    pub fn for_event(event: &CommentaryEvent) -> Self {
        let mut user = String::new();

        push_score(&mut user, event);
        push_event(&mut user, event);
        push_behavior_guide(&mut user);

        Self {
            system: PERSONA.to_string(),
            user,
        }
    }

    /// The reaction the persona should give for a trigger.
    #[must_use]
    pub const fn behavior(trigger: CommentaryTrigger) -> &'static str {
        match trigger {
            CommentaryTrigger::Welcome => "Challenge them to start.",
            CommentaryTrigger::AiWin => "Taunt them smugly.",
            CommentaryTrigger::HumanWin => "Be shocked or make an excuse.",
            CommentaryTrigger::Draw => "Call the draw boring and demand a rematch.",
            CommentaryTrigger::GameOverWin => "Admit defeat reluctantly.",
            CommentaryTrigger::GameOverLose => "Console them but brag.",
        }
    }
}

fn push_score(out: &mut String, event: &CommentaryEvent) {
    out.push_str(&format!(
        "Current Score -> Human: {} | AI: {}\n",
        event.human_score, event.ai_score
    ));
}

fn push_event(out: &mut String, event: &CommentaryEvent) {
    out.push_str(&format!("Event: {}\n", event.trigger));
    out.push_str(&format!("Context details: {}\n\n", event.context));
}

fn push_behavior_guide(out: &mut String) {
    out.push_str("Generate a reaction based on the event:\n");
    for trigger in CommentaryTrigger::ALL {
        out.push_str(&format!(
            "- If event is '{}': {}\n",
            trigger,
            CommentaryPrompt::behavior(trigger)
        ));
    }
}
