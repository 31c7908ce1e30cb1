//! Legal agent conversation state

use umbra_core::{ChatMessage, GREETING, QUICK_TOPICS};

/// One conversation with the legal agent.
///
/// Messages are append-only. While `typing` is set a reply is pending and
/// no further message can be sent. Leaving the view ends the conversation;
/// `session` tells replies for an ended conversation apart.
#[derive(Debug, Clone)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub input: String,
    pub typing: bool,
    pub session: u64,
    next_id: u64,
}

impl Default for ChatState {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatState {
    /// A conversation opened by the assistant's greeting
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::assistant(1, GREETING)],
            input: String::new(),
            typing: false,
            session: 0,
            next_id: 2,
        }
    }

    /// Discard the conversation and start over from the greeting
    pub fn restart(&mut self) {
        *self = Self {
            session: self.session + 1,
            ..Self::new()
        };
    }

    fn take_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn can_send(&self) -> bool {
        !self.typing && !self.input.trim().is_empty()
    }

    /// Append the input as a user message and return it as the prompt.
    ///
    /// Returns `None` (and changes nothing) for blank input or while a reply
    /// is pending.
    pub fn send(&mut self) -> Option<String> {
        if !self.can_send() {
            return None;
        }

        let prompt = std::mem::take(&mut self.input);
        let id = self.take_id();
        self.messages.push(ChatMessage::user(id, prompt.clone()));
        self.typing = true;
        Some(prompt)
    }

    /// Append the assistant's answer and re-enable sending
    pub fn receive_reply(&mut self, text: impl Into<String>) {
        let id = self.take_id();
        self.messages.push(ChatMessage::assistant(id, text));
        self.typing = false;
    }

    /// Replace the input with one of the frequent questions
    pub fn load_quick_topic(&mut self, index: usize) -> bool {
        match QUICK_TOPICS.get(index) {
            Some(topic) => {
                self.input = (*topic).to_string();
                true
            }
            None => false,
        }
    }
}
