// Mock implementations for adapter layer testing

pub mod mock_message_sender;

pub use mock_message_sender::MockMessageSender;
