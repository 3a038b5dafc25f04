use serde::{Deserialize, Serialize};
use serenity::model::id::{RoleId, UserId};

/// Rule allowing a kind of mention in the content to actually ping
///
/// A draft without any rules leaves pinging to Discord's defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "id", rename_all = "snake_case")]
pub enum Mention {
    /// `@everyone` and `@here`
    Everyone,
    /// Every user mentioned in the content
    AllUsers,
    /// Every role mentioned in the content
    AllRoles,
    /// One specific user
    User(UserId),
    /// One specific role
    Role(RoleId),
    /// Author of the message being replied to
    RepliedUser,
}

impl From<UserId> for Mention {
    fn from(user_id: UserId) -> Self {
        Mention::User(user_id)
    }
}

impl From<RoleId> for Mention {
    fn from(role_id: RoleId) -> Self {
        Mention::Role(role_id)
    }
}
