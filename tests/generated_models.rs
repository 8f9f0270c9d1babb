//! Runs the converters of the checked-in golden module, which
//! `tests/compile.rs` pins to the generator's exact output.
include!("golden/models.rs");

use models::{JsonModel, Owner, Pet, Puppy, Tag};
use serde_json::{Value, json};

fn owner() -> Owner {
    Owner {
        name: "Ada".into(),
        age: 36,
        score: 0.5,
        pets: vec![Pet {
            name: "Rex".into(),
            alive: true,
            grid: vec![vec![1, 2], vec![]],
        }],
        meta: json!({"source": "import"}),
        r#type: "person".into(),
        tag_id: Tag { value: "vip".into() },
    }
}

#[test]
fn absent_and_empty_values_keep_defaults() {
    assert_eq!(Owner::from_json(&json!({})).unwrap(), Owner::default());
    let empty = json!({
        "name": null,
        "age": null,
        "pets": [],
        "meta": {},
        "tag-id": null
    });
    assert_eq!(Owner::from_json(&empty).unwrap(), Owner::default());
}

#[test]
fn empty_containers_are_skipped_even_when_mistyped() {
    // `[]` and `{}` never reach the field's converter
    let payload = json!({"name": [], "age": {}, "score": [], "type": {}});
    assert_eq!(Owner::from_json(&payload).unwrap(), Owner::default());
}

#[test]
fn empty_string_and_zero_are_values() {
    let payload = json!({"name": "", "age": 0, "type": ""});
    assert_eq!(Owner::from_json(&payload).unwrap(), Owner::default());

    // both reach the converter, so a mistyped one is an error
    assert!(Owner::from_json(&json!({"age": ""})).is_err());
    assert!(Owner::from_json(&json!({"name": 0})).is_err());
    assert!(Owner::from_json(&json!({"pets": {"a": 1}})).is_err());
}

#[test]
fn present_values_are_assigned() {
    let payload = json!({
        "name": "Ada",
        "age": 36,
        "score": 0.5,
        "pets": [{"name": "Rex", "alive": true, "grid": [[1, 2], []], "extra": 1}],
        "meta": {"source": "import"},
        "type": "person",
        "tag-id": "vip",
        "unknown": true
    });
    assert_eq!(Owner::from_json(&payload).unwrap(), owner());
}

#[test]
fn to_json_round_trips() {
    let owner = owner();
    let j = owner.to_json();
    assert_eq!(j["type"], json!("person"));
    assert_eq!(j["tag-id"], json!("vip"));
    assert_eq!(j["pets"][0]["grid"], json!([[1, 2], []]));
    assert_eq!(Owner::from_json(&j).unwrap(), owner);

    // defaults serialize every key, including null for the opaque object
    let j = Owner::default().to_json();
    assert_eq!(j.as_object().map(|m| m.len()), Some(7));
    assert_eq!(j["meta"], Value::Null);
    assert_eq!(Owner::from_json(&j).unwrap(), Owner::default());
}

#[test]
fn wrapper_converts_the_bare_value() {
    assert_eq!(Tag::from_json(&json!("x")).unwrap(), Tag { value: "x".into() });
    assert_eq!(Tag { value: "x".into() }.to_json(), json!("x"));
    assert!(Tag::from_json(&json!(null)).is_err());
}

#[test]
fn composed_record_carries_base_fields() {
    let payload = json!({"name": "Pup", "alive": true, "weeks": 9});
    let puppy = Puppy::from_json(&payload).unwrap();
    assert_eq!(
        puppy,
        Puppy {
            name: "Pup".into(),
            alive: true,
            grid: vec![],
            weeks: 9,
        }
    );
    assert_eq!(Puppy::from_json(&puppy.to_json()).unwrap(), puppy);
}
