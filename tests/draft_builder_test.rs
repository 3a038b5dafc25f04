// Behavioural tests for message drafts through the public API
// These exercise every variant through the shared MessageBuilder capability

use draftcord::draft::{
    Component, ComponentRow, Embed, FileStream, FollowupMessage, Mention, MessageBuilder,
    MessageDraft, NewMessage, ValidationError, WebhookMessage, file_stream,
};
use rstest::rstest;
use serenity::model::id::{RoleId, UserId};
use std::io::Cursor;

fn stream(data: &[u8]) -> FileStream {
    file_stream(Cursor::new(data.to_vec()))
}

fn buttons(count: usize) -> Vec<Component> {
    (0..count)
        .map(|i| Component::button(format!("Option {i}"), format!("option_{i}")))
        .collect()
}

// Helper function to fill any builder with one of everything
fn populate<B: MessageBuilder>(builder: &mut B) -> Result<(), ValidationError> {
    builder
        .set_content("hi")?
        .set_tts(true)
        .add_embed(Embed::new().title("Status").colour(0x2ECC71))
        .add_file("status.txt", stream(b"all green"), true)?
        .add_component_row(buttons(2))?
        .add_mention(Mention::User(UserId::new(42)));
    Ok(())
}

fn check_content_limit<B: MessageBuilder>(mut builder: B) {
    builder.set_content("a".repeat(2000)).unwrap();
    assert_eq!(builder.content().map(|c| c.chars().count()), Some(2000));

    let result = builder.set_content("b".repeat(2001));

    assert!(matches!(result, Err(ValidationError::ContentTooLong { len: 2001 })));
    assert_eq!(builder.content().map(|c| c.chars().count()), Some(2000));
    assert!(builder.content().unwrap().starts_with('a'));
}

fn check_file_limit<B: MessageBuilder>(mut builder: B) {
    for i in 0..10 {
        builder
            .add_file(format!("{i}.txt"), stream(b"x"), false)
            .unwrap();
    }

    let result = builder.add_file("10.txt", stream(b"x"), false);

    assert!(matches!(result, Err(ValidationError::TooManyFiles)));
    assert_eq!(builder.files().len(), 10);
}

#[test]
fn test_content_limit_for_every_variant() {
    check_content_limit(NewMessage::new());
    check_content_limit(FollowupMessage::new());
    check_content_limit(WebhookMessage::new());
    check_content_limit(MessageDraft::new());
}

#[test]
fn test_file_limit_for_every_variant() {
    check_file_limit(NewMessage::new());
    check_file_limit(FollowupMessage::new());
    check_file_limit(WebhookMessage::new());
    check_file_limit(MessageDraft::new());
}

#[test]
fn test_duplicate_file_name_keeps_count() {
    let mut message = NewMessage::new();
    message.add_file("report.csv", stream(b"a"), false).unwrap();

    let result = message.add_file("report.csv", stream(b"b"), false);

    assert!(matches!(result, Err(ValidationError::DuplicateFileName { .. })));
    assert_eq!(message.files().len(), 1);
}

#[rstest]
#[case::empty(0, false)]
#[case::one(1, true)]
#[case::five(5, true)]
#[case::six(6, false)]
fn test_component_row_sizes(#[case] count: usize, #[case] accepted: bool) {
    let mut message = NewMessage::new();

    let result = message.add_component_row(buttons(count)).map(|_| ());

    assert_eq!(result.is_ok(), accepted);
    assert_eq!(message.components().len(), usize::from(accepted));
}

#[test]
fn test_sixth_row_rejected_after_five() {
    let mut webhook = WebhookMessage::new();
    for _ in 0..5 {
        webhook.add_component_row(buttons(1)).unwrap();
    }

    assert!(webhook.add_component_row(buttons(1)).is_err());
    assert_eq!(webhook.components().len(), 5);

    let row = ComponentRow::new(buttons(1)).unwrap();
    assert!(webhook.add_component_rows([row]).is_err());
    assert_eq!(webhook.components().len(), 5);
}

#[test]
fn test_clear_resets_all_fields() {
    let mut message = NewMessage::new();
    populate(&mut message).unwrap();

    message.clear();

    assert_eq!(message.content(), Some(""));
    assert!(!message.is_tts());
    assert!(message.embeds().is_empty());
    assert!(message.files().is_empty());
    assert!(message.components().is_empty());
    assert!(message.mentions().is_empty());
}

#[test]
fn test_copy_between_variants() {
    let mut original = FollowupMessage::new();
    populate(&mut original).unwrap();
    original.files()[0].read_remaining().unwrap();

    let copy = WebhookMessage::from_builder(&original).unwrap();

    assert_eq!(copy.content(), Some("hi"));
    assert!(copy.is_tts());
    assert_eq!(copy.embeds(), original.embeds());
    assert_eq!(copy.components(), original.components());
    assert_eq!(copy.files(), original.files());
    assert_eq!(copy.mentions(), original.mentions());
    assert_eq!(copy.files()[0].position().unwrap(), 0);
}

#[test]
fn test_copy_from_dyn_builder() {
    let mut original = NewMessage::new();
    populate(&mut original).unwrap();
    let source: &dyn MessageBuilder = &original;

    let copy = MessageDraft::copy_from(source).unwrap();

    assert_eq!(&copy, original.draft());
}

#[test]
fn test_add_embed_absent_is_success() {
    let mut message = NewMessage::new();
    message.add_embed(Embed::new().title("kept"));

    let maybe_embed: Option<Embed> = None;
    message.add_embed(maybe_embed).add_embed(None::<Embed>);

    assert_eq!(message.embeds().len(), 1);
}

#[test]
fn test_mentions_accumulate_in_order() {
    let mut message = NewMessage::new();
    message
        .add_mention(Mention::Role(RoleId::new(5)))
        .add_mentions([Mention::Everyone, Mention::from(UserId::new(6))]);

    assert_eq!(
        message.mentions(),
        &[
            Mention::Role(RoleId::new(5)),
            Mention::Everyone,
            Mention::User(UserId::new(6)),
        ]
    );
}

#[test]
fn test_reattach_files_from_previous_message() {
    let mut first = NewMessage::new();
    first.add_file("shared.png", stream(b"png"), false).unwrap();

    let mut second = FollowupMessage::new();
    second.reattach_files(first.files().iter().cloned());

    assert_eq!(second.files().len(), 1);
    assert!(second.files()[0].shares_stream_with(&first.files()[0]));
}
