//! Fixed content shown by the assistant: welcome texts, capability and
//! limitation lists, and the canned prompts offered as buttons.

/// Heading of the welcome panel.
pub const WELCOME_TITLE: &str = "Welcome to SmartBot";

/// Line under the welcome heading.
pub const WELCOME_TAGLINE: &str =
    "Your intelligent assistant for information, creativity, and productivity";

/// Prompt sent by the "Ask About Capabilities" button.
pub const CAPABILITIES_PROMPT: &str = "What can you do?";

/// Prompt sent by the "Ask About Limitations" button.
pub const LIMITATIONS_PROMPT: &str = "What are your limitations?";

/// What the assistant advertises it can do.
pub const CAPABILITIES: [&str; 6] = [
    "Natural language understanding and generation",
    "Contextual conversation memory",
    "Knowledge across multiple domains",
    "Code generation and explanation",
    "Text summarization and analysis",
    "Creative writing and brainstorming",
];

/// What the assistant admits it cannot do yet.
pub const LIMITATIONS: [&str; 6] = [
    "Cannot browse the internet in real-time",
    "May occasionally generate incorrect information",
    "Limited knowledge of events after October 2023",
    "Cannot perform physical actions",
    "No voice interaction capability",
    "Cannot process images or videos",
];

/// Quick-start prompts shown when the conversation is empty.
pub const SUGGESTIONS: [&str; 4] = [
    "What can you do?",
    "How does this work?",
    "Explain AI to me",
    "Tell me a joke",
];

/// Placeholder shown in the empty input field.
pub const INPUT_PLACEHOLDER: &str = "Type your message here...";

/// One of the two cards on the welcome panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WelcomeCard {
    pub heading: &'static str,
    pub intro: &'static str,
    pub items: &'static [&'static str],
    pub button_label: &'static str,
    pub prompt: &'static str,
}

/// The welcome cards in display order.
pub const WELCOME_CARDS: [WelcomeCard; 2] = [
    WelcomeCard {
        heading: "Start Conversation",
        intro: "Discover what I can do for you:",
        items: &CAPABILITIES,
        button_label: "Ask About Capabilities",
        prompt: CAPABILITIES_PROMPT,
    },
    WelcomeCard {
        heading: "What I Can't Do Yet",
        intro: "Current limitations to be aware of:",
        items: &LIMITATIONS,
        button_label: "Ask About Limitations",
        prompt: LIMITATIONS_PROMPT,
    },
];

/// Check if a text is one of the canned prompts.
pub fn is_known_prompt(text: &str) -> bool {
    SUGGESTIONS.contains(&text) || WELCOME_CARDS.iter().any(|card| card.prompt == text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_welcome_cards_wire_fixed_prompts() {
        assert_eq!(WELCOME_CARDS[0].prompt, "What can you do?");
        assert_eq!(WELCOME_CARDS[1].prompt, "What are your limitations?");
        assert_eq!(WELCOME_CARDS[0].items.len(), 6);
        assert_eq!(WELCOME_CARDS[1].items.len(), 6);
    }

    #[test]
    fn test_is_known_prompt() {
        for prompt in SUGGESTIONS {
            assert!(is_known_prompt(prompt));
        }
        assert!(is_known_prompt(LIMITATIONS_PROMPT));
        assert!(!is_known_prompt("What is the weather?"));
    }
}
