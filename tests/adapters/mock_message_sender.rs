use draftcord::adapters::MessageSender;
use draftcord::adapters::serenity_convert::to_attachment;
use draftcord::draft::{FollowupMessage, MessageBuilder, NewMessage, WebhookMessage};
use serenity::async_trait;
use serenity::model::id::{ChannelId, MessageId};
use std::sync::{Arc, Mutex};

pub struct MockMessageSender {
    pub sent: Arc<Mutex<Vec<SentMessage>>>,
}

#[derive(Debug, Clone)]
pub struct SentMessage {
    pub target: String,
    pub content: Option<String>,
    pub embed_count: usize,
    pub row_count: usize,
    pub files: Vec<(String, Vec<u8>)>,
}

impl Default for MockMessageSender {
    fn default() -> Self {
        Self::new()
    }
}

impl MockMessageSender {
    pub fn new() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn get_sent(&self) -> Vec<SentMessage> {
        self.sent.lock().unwrap().clone()
    }

    /// Record a draft the way the real transport reads it
    fn record<B: MessageBuilder + ?Sized>(&self, target: String, message: &B) -> anyhow::Result<()> {
        let files = message
            .files()
            .iter()
            .map(|file| -> anyhow::Result<(String, Vec<u8>)> {
                let attachment = to_attachment(file)?;
                Ok((attachment.filename.clone(), attachment.data.to_vec()))
            })
            .collect::<anyhow::Result<Vec<_>>>();
        message.reset_file_positions()?;

        let mut sent = self.sent.lock().unwrap();
        sent.push(SentMessage {
            target,
            content: message.content().map(str::to_string),
            embed_count: message.embeds().len(),
            row_count: message.components().len(),
            files: files?,
        });
        Ok(())
    }

    fn next_id(&self) -> MessageId {
        MessageId::new(self.sent.lock().unwrap().len() as u64)
    }
}

#[async_trait]
impl MessageSender for MockMessageSender {
    async fn send_message(
        &self,
        channel_id: ChannelId,
        message: &NewMessage,
    ) -> anyhow::Result<MessageId> {
        self.record(format!("channel:{channel_id}"), message)?;
        Ok(self.next_id())
    }

    async fn send_followup(
        &self,
        interaction_token: &str,
        message: &FollowupMessage,
    ) -> anyhow::Result<MessageId> {
        self.record(format!("followup:{interaction_token}"), message)?;
        Ok(self.next_id())
    }

    async fn execute_webhook(
        &self,
        webhook_url: &str,
        message: &WebhookMessage,
    ) -> anyhow::Result<Option<MessageId>> {
        self.record(format!("webhook:{webhook_url}"), message)?;
        Ok(Some(self.next_id()))
    }
}
