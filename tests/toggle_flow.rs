use dialogkit::{
    ChatEvent, Checkbox, DialogSession, Keyboard, MemorySession, Plain, Template, Toggle,
};
use serde_json::{Value, json};

fn tap() -> ChatEvent {
    ChatEvent::new("evt-1", "telegram", "chat-7", "user-42")
}

#[tokio::test]
async fn render_tap_render_tap_walks_both_states() {
    let session = MemorySession::new();
    let checkbox = Checkbox::new("notify", Plain::new("✅ On"), Plain::new("⬜ Off"), false)
        .expect("valid config");

    let first = checkbox
        .render_keyboard(&Value::Null, &session)
        .await
        .unwrap();
    assert_eq!(first.len(), 1);
    assert_eq!(first[0].len(), 1);
    assert_eq!(first[0][0].text, "⬜ Off");
    assert_eq!(first[0][0].payload, "notify:0");

    let handled = checkbox
        .process_callback(&tap(), "notify:0", &session)
        .await
        .unwrap();
    assert!(handled);
    assert!(checkbox.is_checked(&session));

    let second = checkbox
        .render_keyboard(&Value::Null, &session)
        .await
        .unwrap();
    assert_eq!(second[0][0].text, "✅ On");
    assert_eq!(second[0][0].payload, "notify:1");

    let handled = checkbox
        .process_callback(&tap(), "notify:1", &session)
        .await
        .unwrap();
    assert!(handled);
    assert!(!checkbox.is_checked(&session));
}

#[tokio::test]
async fn malformed_discriminator_is_treated_as_checked() {
    let session = MemorySession::new();
    let checkbox = Checkbox::new("notify", Plain::new("✅ On"), Plain::new("⬜ Off"), false)
        .expect("valid config");

    // A mangled token decodes as checked, so the tap lands on unchecked.
    let handled = checkbox
        .process_callback(&tap(), "notify:xyz", &session)
        .await
        .unwrap();

    assert!(handled);
    assert!(!checkbox.is_checked(&session));
    assert_eq!(session.widget_data("notify"), Some(json!(false)));
}

#[tokio::test]
async fn templated_labels_render_against_dialog_data() {
    let session = MemorySession::new();
    let checkbox = Checkbox::new(
        "digest",
        Template::new("✅ Digest for {{ name }}"),
        Template::new("⬜ Digest for {{ name }}"),
        false,
    )
    .expect("valid config");
    let data = json!({"name": "alice"});

    let before = checkbox.render_keyboard(&data, &session).await.unwrap();
    assert_eq!(before[0][0].text, "⬜ Digest for alice");

    checkbox
        .process_callback(&tap(), "digest:0", &session)
        .await
        .unwrap();

    let after = checkbox.render_keyboard(&data, &session).await.unwrap();
    assert_eq!(after[0][0].text, "✅ Digest for alice");
}

#[tokio::test]
async fn foreign_payloads_are_left_for_other_widgets() {
    let session = MemorySession::new();
    let checkbox = Checkbox::new("notify", Plain::new("✅ On"), Plain::new("⬜ Off"), false)
        .expect("valid config");

    let handled = checkbox
        .process_callback(&tap(), "other_widget:0", &session)
        .await
        .unwrap();

    assert!(!handled);
    assert_eq!(session.widget_data("notify"), None);
}
