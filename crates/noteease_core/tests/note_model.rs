use noteease_core::{Note, NoteDraft};
use uuid::Uuid;

#[test]
fn note_serialization_uses_expected_wire_fields() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").expect("fixed uuid should parse");
    let note = Note {
        id,
        title: "Groceries".to_string(),
        content: "milk, eggs".to_string(),
        created_at: 1_700_000_000_000,
        updated_at: 1_700_000_360_000,
    };

    let json = serde_json::to_value(&note).expect("note should serialize");
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["title"], "Groceries");
    assert_eq!(json["content"], "milk, eggs");
    assert_eq!(json["created_at"], 1_700_000_000_000_i64);
    assert_eq!(json["updated_at"], 1_700_000_360_000_i64);

    let decoded: Note = serde_json::from_value(json).expect("note should deserialize");
    assert_eq!(decoded, note);
}

#[test]
fn new_draft_has_no_identity() {
    let draft = NoteDraft::new("title", "");
    assert_eq!(draft.id, None);
    assert_eq!(draft.existing_id(), None);
    assert!(draft.content.is_empty());
}
