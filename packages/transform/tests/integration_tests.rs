//! Integration tests for the transform crate

use otcheck_transform::{is_valid_json, transform_json, Outcome};

const REPL_DOC: &str =
    "Repl.it uses operational transformations to keep everyone in a multiplayer repl in sync.";

#[test]
fn test_skip_delete_works() {
    let valid = is_valid_json(
        REPL_DOC,
        "Repl.it uses operational transformations.",
        r#"[{"op": "skip", "count": 40}, {"op": "delete", "count": 47}]"#,
    )
    .unwrap();

    assert!(valid);
}

#[test]
fn test_delete_from_wrong_offset() {
    let valid = is_valid_json(
        REPL_DOC,
        "Repl.it uses operational transformations.",
        r#"[{"op": "skip", "count": 45}, {"op": "delete", "count": 47}]"#,
    )
    .unwrap();

    assert!(!valid);
}

#[test]
fn test_skip_past_end_of_shortened_document() {
    let json = r#"[{"op": "skip", "count": 40}, {"op": "delete", "count": 47}, {"op": "skip", "count": 2}]"#;

    assert!(!is_valid_json(REPL_DOC, "Repl.it uses operational transformations.", json).unwrap());

    let outcome = transform_json(REPL_DOC, json).unwrap();
    assert_eq!(outcome, Outcome::Undefined { command_index: 2 });
}

#[test]
fn test_delete_insert_works() {
    let valid = is_valid_json(
        REPL_DOC,
        "We use operational transformations to keep everyone in a multiplayer repl in sync.",
        r#"[{"op": "delete", "count": 7}, {"op": "insert", "chars": "We"}, {"op": "skip", "count": 4}, {"op": "delete", "count": 1}]"#,
    )
    .unwrap();

    assert!(valid);
}

#[test]
fn test_delete_insert_mismatch() {
    let valid = is_valid_json(
        REPL_DOC,
        "We can use operational transformations to keep everyone in a multiplayer repl in sync.",
        r#"[{"op": "delete", "count": 7}, {"op": "insert", "chars": "We"}, {"op": "skip", "count": 4}, {"op": "delete", "count": 1}]"#,
    )
    .unwrap();

    assert!(!valid);
}

#[test]
fn test_no_ops() {
    assert!(is_valid_json(REPL_DOC, REPL_DOC, "[]").unwrap());
}

#[test]
fn test_insert_into_empty_document() {
    let outcome = transform_json("", r#"[{"op": "insert", "chars": "Hello, human!"}]"#).unwrap();

    assert_eq!(
        outcome,
        Outcome::Defined {
            document: "Hello, human!".to_string(),
            position: 13,
        }
    );
}

#[test]
fn test_forward_delete() {
    let outcome = transform_json(
        "What is up?",
        r#"[{"op": "skip", "count": 7},{"op": "delete", "count": 3}]"#,
    )
    .unwrap();

    assert_eq!(outcome.document(), Some("What is?"));
    assert_eq!(outcome.position(), Some(7));
}

#[test]
fn test_two_transformations() {
    let outcome = transform_json(
        "Nice!",
        r#"[{"op": "skip", "count": 4},{"op": "insert", "chars": " day"}]"#,
    )
    .unwrap();

    assert_eq!(outcome.document(), Some("Nice day!"));
    assert_eq!(outcome.position(), Some(8));
}

#[test]
fn test_unknown_ot_command() {
    let result = is_valid_json("", "", r#"[{"op": "UNKNOWN_OT_COMMAND"}]"#);

    let err = result.expect_err("unknown command must not produce a boolean");
    assert!(err.is_unknown_command());
}

#[test]
fn test_outcome_serializes_with_state_tag() {
    let outcome = transform_json("Nice!", r#"[{"op": "skip", "count": 4}]"#).unwrap();
    let json = serde_json::to_value(&outcome).unwrap();

    assert_eq!(
        json,
        serde_json::json!({ "state": "defined", "document": "Nice!", "position": 4 })
    );
}
