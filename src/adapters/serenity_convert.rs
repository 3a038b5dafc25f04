//! Conversions from drafts to serenity builders
//!
//! File streams are read from their current position to the end when the
//! attachments are built. Callers restore positions afterwards with
//! [`MessageBuilder::reset_file_positions`].

use anyhow::Context as _;
use serenity::builder::{
    CreateActionRow, CreateAllowedMentions, CreateAttachment, CreateButton, CreateEmbed,
    CreateEmbedAuthor, CreateEmbedFooter, CreateInteractionResponseFollowup, CreateMessage,
    CreateSelectMenu, CreateSelectMenuKind, CreateSelectMenuOption, ExecuteWebhook,
};
use serenity::model::application::ButtonStyle as SerenityButtonStyle;

use crate::draft::{
    AttachedFile, ButtonStyle, Component, ComponentRow, Embed, FollowupMessage, Mention,
    MessageBuilder, NewMessage, SelectMenu, SelectOption, WebhookMessage,
};

/// Build a `CreateMessage` from a channel message draft
pub fn to_create_message(message: &NewMessage) -> anyhow::Result<CreateMessage> {
    let parts = MessageParts::collect(message)?;

    let mut builder = CreateMessage::new()
        .tts(parts.tts)
        .embeds(parts.embeds)
        .components(parts.components)
        .add_files(parts.attachments);

    if let Some(content) = parts.content {
        builder = builder.content(content);
    }
    let allowed_mentions = match (parts.allowed_mentions, message.reply_ping()) {
        (Some(allowed), Some(ping)) => Some(allowed.replied_user(ping)),
        // Without allowed_mentions Discord pings the replied user
        (None, Some(false)) => Some(default_mentions().replied_user(false)),
        (allowed, _) => allowed,
    };
    if let Some(allowed_mentions) = allowed_mentions {
        builder = builder.allowed_mentions(allowed_mentions);
    }
    if let Some(reference) = message.reply_target() {
        builder = builder.reference_message(reference);
    }

    Ok(builder)
}

/// Build a `CreateInteractionResponseFollowup` from a followup draft
pub fn to_followup(message: &FollowupMessage) -> anyhow::Result<CreateInteractionResponseFollowup> {
    let parts = MessageParts::collect(message)?;

    let mut builder = CreateInteractionResponseFollowup::new()
        .tts(parts.tts)
        .embeds(parts.embeds)
        .components(parts.components)
        .add_files(parts.attachments)
        .ephemeral(message.is_ephemeral());

    if let Some(content) = parts.content {
        builder = builder.content(content);
    }
    if let Some(allowed_mentions) = parts.allowed_mentions {
        builder = builder.allowed_mentions(allowed_mentions);
    }

    Ok(builder)
}

/// Build an `ExecuteWebhook` from a webhook draft
pub fn to_execute_webhook(message: &WebhookMessage) -> anyhow::Result<ExecuteWebhook> {
    let parts = MessageParts::collect(message)?;

    let mut builder = ExecuteWebhook::new()
        .tts(parts.tts)
        .embeds(parts.embeds)
        .components(parts.components)
        .add_files(parts.attachments);

    if let Some(content) = parts.content {
        builder = builder.content(content);
    }
    if let Some(allowed_mentions) = parts.allowed_mentions {
        builder = builder.allowed_mentions(allowed_mentions);
    }
    if let Some(username) = message.username_override() {
        builder = builder.username(username);
    }
    if let Some(avatar_url) = message.avatar_url_override() {
        builder = builder.avatar_url(avatar_url);
    }
    if let Some(thread_id) = message.thread_id() {
        builder = builder.in_thread(thread_id);
    }

    Ok(builder)
}

/// Fields every message kind shares, converted once
struct MessageParts {
    content: Option<String>,
    tts: bool,
    embeds: Vec<CreateEmbed>,
    components: Vec<CreateActionRow>,
    attachments: Vec<CreateAttachment>,
    allowed_mentions: Option<CreateAllowedMentions>,
}

impl MessageParts {
    fn collect<B: MessageBuilder + ?Sized>(message: &B) -> anyhow::Result<Self> {
        let components = message
            .components()
            .iter()
            .map(to_action_row)
            .collect::<anyhow::Result<Vec<_>>>()?;

        let attachments = message
            .files()
            .iter()
            .map(to_attachment)
            .collect::<anyhow::Result<Vec<_>>>()?;

        Ok(Self {
            content: message.content().map(str::to_string),
            tts: message.is_tts(),
            embeds: message.embeds().iter().map(to_embed).collect(),
            components,
            attachments,
            allowed_mentions: to_allowed_mentions(message.mentions()),
        })
    }
}

pub fn to_embed(embed: &Embed) -> CreateEmbed {
    let mut builder = CreateEmbed::new();

    if let Some(title) = &embed.title {
        builder = builder.title(title);
    }
    if let Some(description) = &embed.description {
        builder = builder.description(description);
    }
    if let Some(url) = &embed.url {
        builder = builder.url(url);
    }
    if let Some(colour) = embed.colour {
        builder = builder.colour(colour);
    }
    if let Some(author) = &embed.author {
        builder = builder.author(CreateEmbedAuthor::new(author));
    }
    if let Some(footer) = &embed.footer {
        builder = builder.footer(CreateEmbedFooter::new(footer));
    }
    if let Some(image) = &embed.image {
        builder = builder.image(image);
    }
    if let Some(thumbnail) = &embed.thumbnail {
        builder = builder.thumbnail(thumbnail);
    }

    for field in &embed.fields {
        builder = builder.field(&field.name, &field.value, field.inline);
    }

    builder
}

/// Convert a row into an action row
///
/// Discord accepts either up to 5 buttons or a single select menu per row.
pub fn to_action_row(row: &ComponentRow) -> anyhow::Result<CreateActionRow> {
    match row.components() {
        [Component::SelectMenu(menu)] => Ok(CreateActionRow::SelectMenu(to_select_menu(menu))),
        components if components.iter().any(Component::is_select_menu) => {
            anyhow::bail!("A select menu must be the only component of its row")
        }
        components => Ok(CreateActionRow::Buttons(
            components.iter().filter_map(to_button).collect(),
        )),
    }
}

fn to_button(component: &Component) -> Option<CreateButton> {
    match component {
        Component::Button {
            style,
            label,
            custom_id,
            disabled,
        } => Some(
            CreateButton::new(custom_id)
                .label(label)
                .style(to_button_style(*style))
                .disabled(*disabled),
        ),
        Component::LinkButton {
            label,
            url,
            disabled,
        } => Some(CreateButton::new_link(url).label(label).disabled(*disabled)),
        Component::SelectMenu(_) => None,
    }
}

fn to_button_style(style: ButtonStyle) -> SerenityButtonStyle {
    match style {
        ButtonStyle::Primary => SerenityButtonStyle::Primary,
        ButtonStyle::Secondary => SerenityButtonStyle::Secondary,
        ButtonStyle::Success => SerenityButtonStyle::Success,
        ButtonStyle::Danger => SerenityButtonStyle::Danger,
    }
}

fn to_select_menu(menu: &SelectMenu) -> CreateSelectMenu {
    let SelectMenu {
        custom_id,
        placeholder,
        options,
        min_values,
        max_values,
        disabled,
    } = menu;

    let options = options.iter().map(to_select_option).collect();
    let mut menu = CreateSelectMenu::new(custom_id, CreateSelectMenuKind::String { options })
        .disabled(*disabled);

    if let Some(placeholder) = placeholder {
        menu = menu.placeholder(placeholder);
    }
    if let Some(min_values) = min_values {
        menu = menu.min_values(*min_values);
    }
    if let Some(max_values) = max_values {
        menu = menu.max_values(*max_values);
    }

    menu
}

fn to_select_option(option: &SelectOption) -> CreateSelectMenuOption {
    let mut builder =
        CreateSelectMenuOption::new(&option.label, &option.value).default_selection(option.default);

    if let Some(description) = &option.description {
        builder = builder.description(description);
    }

    builder
}

/// Read an attached file into an upload
pub fn to_attachment(file: &AttachedFile) -> anyhow::Result<CreateAttachment> {
    let data = file
        .read_remaining()
        .with_context(|| format!("Reading attachment {:?}", file.name()))?;

    Ok(CreateAttachment::bytes(data, file.name()))
}

/// Mentions Discord parses when no `allowed_mentions` is sent
fn default_mentions() -> CreateAllowedMentions {
    CreateAllowedMentions::new()
        .everyone(true)
        .all_users(true)
        .all_roles(true)
}

/// Translate mention rules, `None` when no rule was added
///
/// Discord rejects a `users` list alongside `parse: users` (same for roles),
/// so specific ids are dropped once the matching `All*` rule is present.
pub fn to_allowed_mentions(mentions: &[Mention]) -> Option<CreateAllowedMentions> {
    if mentions.is_empty() {
        return None;
    }

    let all_users = mentions.contains(&Mention::AllUsers);
    let all_roles = mentions.contains(&Mention::AllRoles);

    let mut users = Vec::new();
    let mut roles = Vec::new();
    let mut allowed = CreateAllowedMentions::new()
        .all_users(all_users)
        .all_roles(all_roles);

    for mention in mentions {
        match mention {
            Mention::Everyone => allowed = allowed.everyone(true),
            Mention::RepliedUser => allowed = allowed.replied_user(true),
            Mention::AllUsers | Mention::AllRoles => {}
            Mention::User(user_id) if !all_users => users.push(*user_id),
            Mention::Role(role_id) if !all_roles => roles.push(*role_id),
            Mention::User(_) | Mention::Role(_) => {}
        }
    }

    if !users.is_empty() {
        allowed = allowed.users(users);
    }
    if !roles.is_empty() {
        allowed = allowed.roles(roles);
    }

    Some(allowed)
}
