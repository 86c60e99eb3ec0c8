//! Advisory messages for the user
//!
//! Provides:
//! - Message levels and the message payload shown as a toast by the host
//! - A dispatcher that publishes messages to any number of subscribers
//!
//! Publishing never blocks. Messages sent while nobody is subscribed are dropped.

use tokio::sync::broadcast;

/// Severity of an advisory message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

impl std::fmt::Display for MessageLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MessageLevel::Info => write!(f, "info"),
            MessageLevel::Success => write!(f, "success"),
            MessageLevel::Warning => write!(f, "warning"),
        }
    }
}

/// A user-visible advisory message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub level: MessageLevel,
    pub text: String,
    /// Optional secondary line.
    pub description: Option<String>,
}

impl Message {
    pub fn new(level: MessageLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
            description: None,
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(MessageLevel::Info, text)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(MessageLevel::Success, text)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(MessageLevel::Warning, text)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl std::fmt::Display for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.description {
            Some(description) => write!(f, "{} ({})", self.text, description),
            None => write!(f, "{}", self.text),
        }
    }
}

/// Message dispatcher for publishing advisory messages to subscribers
#[derive(Clone)]
pub struct MessageDispatcher {
    tx: broadcast::Sender<Message>,
}

impl MessageDispatcher {
    /// Create a new dispatcher
    ///
    /// # Arguments
    /// * `buffer_size` - Number of messages retained for slow subscribers
    pub fn new(buffer_size: usize) -> Self {
        let (tx, _) = broadcast::channel(buffer_size.max(1));
        Self { tx }
    }

    /// Subscribe to messages
    pub fn subscribe(&self) -> broadcast::Receiver<Message> {
        self.tx.subscribe()
    }

    /// Publish a message, returning how many subscribers received it
    pub fn publish(&self, message: Message) -> usize {
        tracing::debug!(level = %message.level, text = %message.text, "Advisory message");
        self.tx.send(message).unwrap_or(0)
    }

    /// Get number of active subscribers
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for MessageDispatcher {
    fn default() -> Self {
        Self::new(32)
    }
}

impl std::fmt::Debug for MessageDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageDispatcher")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
