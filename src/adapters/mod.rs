// Trait definitions
pub mod message_sender;

// Conversions
pub mod serenity_convert;

// Implementations
pub mod serenity_message_sender;

// Re-exports for convenience
pub use message_sender::MessageSender;
pub use serenity_message_sender::SerenityMessageSender;
