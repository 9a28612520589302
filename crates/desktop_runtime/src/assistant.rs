//! Scripted desktop assistant: pattern-matched commands and canned replies.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::clock::LocalDateTime;

const GREETINGS: [&str; 4] = [
    "Hello! How can I help you today?",
    "Hi there! What would you like to do?",
    "Welcome back! Ready to be productive?",
    "Hey! I'm here to help. What do you need?",
];

const FALLBACKS: [&str; 4] = [
    "I'm not sure how to help with that yet. Try asking me to open an app!",
    "I can help you open apps, check the time, or navigate files. What would you like?",
    "That's beyond my current abilities, but I'm learning! Try 'open files' or 'open browser'.",
    "Hmm, I don't understand that command. Try saying 'help' to see what I can do!",
];

const THANKS_REPLY: &str = "You're welcome! Let me know if you need anything else.";
const CLEARED_REPLY: &str = "Chat cleared! How can I help you?";

/// Reply to a help request.
pub const HELP_TEXT: &str = "I can help you with:

**Open Applications:**
• \"Open files\" or \"Open file explorer\"
• \"Open browser\"
• \"Open notes\"
• \"Open settings\"
• \"Open photos\"
• \"Open music\"

**Utilities:**
• \"What time is it?\"
• \"What's the date?\"

**Tips:**
• Double-click desktop icons to open apps
• Drag windows to move them
• Drag window edges to resize
• Click the dock to switch between apps";

/// What the assistant decided to do with a line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssistantCommand {
    /// Reply with a greeting.
    Greet,
    /// Acknowledge thanks.
    Thank,
    /// Open an app by catalog id.
    OpenApp {
        /// Catalog id of the app.
        app_id: &'static str,
    },
    /// Report the current time and date.
    ShowTime,
    /// List what the assistant understands.
    ShowHelp,
    /// Nothing matched.
    Fallback,
}

static GREETING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(hi|hello|hey|howdy|greetings)").expect("valid regex"));
static THANKS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(thanks?|thank\s*you|thx)").expect("valid regex"));

static COMMANDS: Lazy<Vec<(Regex, AssistantCommand)>> = Lazy::new(|| {
    let open = |app_id| AssistantCommand::OpenApp { app_id };
    let table: [(&[&str], AssistantCommand); 9] = [
        (
            &[
                r"open\s*(file|files|file\s*explorer|explorer|finder)",
                r"show\s*(my\s*)?(files|folders)",
            ],
            open("file-explorer"),
        ),
        (
            &[
                r"open\s*(web\s*)?(browser|internet|chrome|safari|firefox)",
                r"browse\s*(the\s*)?(web|internet)",
            ],
            open("browser"),
        ),
        (
            &[
                r"open\s*(notes?|notepad|text\s*editor)",
                r"take\s*(a\s*)?note",
                r"write\s*(a\s*)?note",
            ],
            open("notes"),
        ),
        (
            &[r"open\s*settings?", r"preferences", r"system\s*settings"],
            open("settings"),
        ),
        (
            &[
                r"open\s*(photos?|pictures?|gallery|images?)",
                r"show\s*(my\s*)?(photos?|pictures?)",
            ],
            open("photos"),
        ),
        (&[r"open\s*music", r"play\s*music"], open("music")),
        (
            &[
                r"what\s*time",
                r"current\s*time",
                r"tell\s*(me\s*)?the\s*time",
            ],
            AssistantCommand::ShowTime,
        ),
        (
            &[
                r"what('s|\s*is)\s*(the\s*)?date",
                r"today('s|\s*is)?\s*date",
                r"what\s*day",
            ],
            AssistantCommand::ShowTime,
        ),
        (
            &[
                r"^help$",
                r"what\s*can\s*you\s*do",
                r"how\s*(do\s*)?you\s*work",
                r"commands?",
            ],
            AssistantCommand::ShowHelp,
        ),
    ];

    table
        .iter()
        .flat_map(|(patterns, command)| {
            patterns.iter().map(move |pattern| {
                (
                    Regex::new(&format!("(?i){pattern}")).expect("valid regex"),
                    *command,
                )
            })
        })
        .collect()
});

/// Classifies a line of user input. Matching is case-insensitive on the trimmed text.
pub fn parse_user_input(input: &str) -> AssistantCommand {
    let trimmed = input.trim();
    if GREETING.is_match(trimmed) {
        return AssistantCommand::Greet;
    }
    if THANKS.is_match(trimmed) {
        return AssistantCommand::Thank;
    }
    COMMANDS
        .iter()
        .find(|(pattern, _)| pattern.is_match(trimmed))
        .map(|(_, command)| *command)
        .unwrap_or(AssistantCommand::Fallback)
}

/// Name the assistant uses when announcing an app launch.
pub fn spoken_app_name(app_id: &str) -> &str {
    match app_id {
        "file-explorer" => "File Explorer",
        "browser" => "Browser",
        "notes" => "Notes",
        "settings" => "Settings",
        "photos" => "Photos",
        "music" => "Music",
        other => other,
    }
}

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssistantRole {
    /// Typed by the user.
    User,
    /// Produced by the assistant.
    Assistant,
}

impl AssistantRole {
    /// CSS/data token.
    pub const fn token(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

/// One chat bubble.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantMessage {
    /// Monotonic id, unique within one [`AssistantState`].
    pub id: u64,
    /// Author.
    pub role: AssistantRole,
    /// Plain text; newlines separate paragraphs.
    pub content: String,
}

/// Chat transcript plus the typing indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantState {
    messages: Vec<AssistantMessage>,
    is_typing: bool,
    next_message_id: u64,
    greeting_cursor: usize,
    fallback_cursor: usize,
}

impl Default for AssistantState {
    fn default() -> Self {
        let mut state = Self {
            messages: Vec::new(),
            is_typing: false,
            next_message_id: 1,
            greeting_cursor: 0,
            fallback_cursor: 0,
        };
        let greeting = state.next_greeting();
        state.push(AssistantRole::Assistant, greeting.to_string());
        state
    }
}

impl AssistantState {
    /// Messages in display order.
    pub fn messages(&self) -> &[AssistantMessage] {
        &self.messages
    }

    /// Whether a reply is pending.
    pub fn is_typing(&self) -> bool {
        self.is_typing
    }

    /// Appends the user's message and shows the typing indicator.
    ///
    /// Returns the parsed command, or `None` for blank input.
    pub fn send(&mut self, input: &str) -> Option<AssistantCommand> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return None;
        }
        self.push(AssistantRole::User, trimmed.to_string());
        self.is_typing = true;
        Some(parse_user_input(trimmed))
    }

    /// Appends the reply for `command` and hides the typing indicator.
    pub fn complete(&mut self, command: AssistantCommand, now: &LocalDateTime) {
        let reply = self.reply_for(command, now);
        self.push(AssistantRole::Assistant, reply);
        self.is_typing = false;
    }

    /// Drops the transcript, leaving a single acknowledgement.
    pub fn clear(&mut self) {
        self.messages.clear();
        self.is_typing = false;
        self.push(AssistantRole::Assistant, CLEARED_REPLY.to_string());
    }

    fn reply_for(&mut self, command: AssistantCommand, now: &LocalDateTime) -> String {
        match command {
            AssistantCommand::Greet => self.next_greeting().to_string(),
            AssistantCommand::Thank => THANKS_REPLY.to_string(),
            AssistantCommand::OpenApp { app_id } => {
                format!("Opening {} for you...", spoken_app_name(app_id))
            }
            AssistantCommand::ShowTime => {
                format!("It's {} on {}.", now.format_time(), now.format_long_date())
            }
            AssistantCommand::ShowHelp => HELP_TEXT.to_string(),
            AssistantCommand::Fallback => {
                let reply = FALLBACKS[self.fallback_cursor % FALLBACKS.len()];
                self.fallback_cursor += 1;
                reply.to_string()
            }
        }
    }

    fn next_greeting(&mut self) -> &'static str {
        let greeting = GREETINGS[self.greeting_cursor % GREETINGS.len()];
        self.greeting_cursor += 1;
        greeting
    }

    fn push(&mut self, role: AssistantRole, content: String) {
        self.messages.push(AssistantMessage {
            id: self.next_message_id,
            role,
            content,
        });
        self.next_message_id += 1;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn afternoon() -> LocalDateTime {
        LocalDateTime {
            year: 2026,
            month: 3,
            day: 14,
            weekday: 6,
            hour: 15,
            minute: 7,
        }
    }

    #[test]
    fn open_commands_and_synonyms_resolve_to_apps() {
        let cases = [
            ("open files", "file-explorer"),
            ("Please open File Explorer", "file-explorer"),
            ("show my folders", "file-explorer"),
            ("open chrome", "browser"),
            ("browse the web", "browser"),
            ("take a note", "notes"),
            ("OPEN NOTEPAD", "notes"),
            ("open settings", "settings"),
            ("system settings please", "settings"),
            ("show my pictures", "photos"),
            ("play music", "music"),
        ];
        for (input, app_id) in cases {
            assert_eq!(
                parse_user_input(input),
                AssistantCommand::OpenApp { app_id },
                "{input}"
            );
        }
    }

    #[test]
    fn greetings_thanks_time_and_help_are_recognized() {
        assert_eq!(parse_user_input("  Hello there"), AssistantCommand::Greet);
        assert_eq!(parse_user_input("thank you!"), AssistantCommand::Thank);
        assert_eq!(parse_user_input("thx"), AssistantCommand::Thank);
        assert_eq!(parse_user_input("what time is it?"), AssistantCommand::ShowTime);
        assert_eq!(parse_user_input("What's the date"), AssistantCommand::ShowTime);
        assert_eq!(parse_user_input("what day is it"), AssistantCommand::ShowTime);
        assert_eq!(parse_user_input("help"), AssistantCommand::ShowHelp);
        assert_eq!(parse_user_input("what can you do"), AssistantCommand::ShowHelp);
        assert_eq!(parse_user_input("list commands"), AssistantCommand::ShowHelp);
        assert_eq!(parse_user_input("make me a sandwich"), AssistantCommand::Fallback);
    }

    #[test]
    fn greeting_wins_over_embedded_commands() {
        assert_eq!(parse_user_input("hey, open music"), AssistantCommand::Greet);
    }

    #[test]
    fn conversation_flow_appends_messages_with_increasing_ids() {
        let mut state = AssistantState::default();
        assert_eq!(state.messages()[0].content, GREETINGS[0]);

        let command = state.send("  open notes ").expect("command");
        assert!(state.is_typing());
        assert_eq!(state.messages()[1].content, "open notes");
        assert_eq!(state.messages()[1].role, AssistantRole::User);

        state.complete(command, &afternoon());
        assert!(!state.is_typing());
        assert_eq!(state.messages()[2].content, "Opening Notes for you...");

        let ids: Vec<u64> = state.messages().iter().map(|message| message.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn canned_replies_rotate_deterministically() {
        let mut state = AssistantState::default();
        state.complete(AssistantCommand::Greet, &afternoon());
        state.complete(AssistantCommand::Fallback, &afternoon());
        state.complete(AssistantCommand::Fallback, &afternoon());

        let replies: Vec<&str> = state
            .messages()
            .iter()
            .map(|message| message.content.as_str())
            .collect();
        assert_eq!(
            replies,
            vec![GREETINGS[0], GREETINGS[1], FALLBACKS[0], FALLBACKS[1]]
        );
    }

    #[test]
    fn time_reply_uses_twelve_hour_clock_and_long_date() {
        let mut state = AssistantState::default();
        state.complete(AssistantCommand::ShowTime, &afternoon());
        assert_eq!(
            state.messages()[1].content,
            "It's 3:07 PM on Saturday, March 14, 2026."
        );
    }

    #[test]
    fn blank_input_is_ignored_and_clear_resets() {
        let mut state = AssistantState::default();
        assert_eq!(state.send("   "), None);
        assert_eq!(state.messages().len(), 1);

        state.send("hi");
        state.clear();
        assert_eq!(state.messages().len(), 1);
        assert_eq!(state.messages()[0].content, CLEARED_REPLY);
        assert!(state.messages()[0].id > 2);
        assert!(!state.is_typing());
    }
}
