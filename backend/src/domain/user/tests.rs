//! Tests for the domain user model.

use super::*;
use rstest::rstest;

const VALID_ID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

#[rstest]
#[case("John", "John")]
#[case("  John  ", "John")]
#[case("\tJohn Smith\n", "John Smith")]
#[case("Updated John ", "Updated John")]
#[case("   ", "")]
fn new_trims_surrounding_whitespace(#[case] raw: &str, #[case] expected: &str) {
    let user = User::new(UserId::new(VALID_ID), raw);
    assert_eq!(user.name(), expected);
}

#[rstest]
fn new_preserves_interior_whitespace() {
    let user = User::new(UserId::new(VALID_ID), " Ada  Lovelace ");
    assert_eq!(user.name(), "Ada  Lovelace");
}

#[rstest]
#[case(VALID_ID)]
#[case("123")]
#[case("")]
fn user_id_accepts_opaque_strings(#[case] raw: &str) {
    let user = User::new(UserId::new(raw), "John");
    assert_eq!(user.id().as_str(), raw);
    assert_eq!(user.id().to_string(), raw);
}

#[rstest]
fn random_ids_are_uuid_strings() {
    let id = UserId::random();
    let parsed = Uuid::parse_str(id.as_str()).expect("random id should be a UUID");
    assert_eq!(parsed.get_version_num(), 4);
}

#[rstest]
fn random_ids_are_distinct() {
    assert_ne!(UserId::random(), UserId::random());
}

#[rstest]
fn user_id_serialises_as_plain_string() {
    let id = UserId::new("abc");
    let value = serde_json::to_value(&id).expect("serialise id");
    assert_eq!(value, serde_json::json!("abc"));
    let back: UserId = serde_json::from_value(value).expect("deserialise id");
    assert_eq!(back, id);
}

#[rstest]
fn user_id_converts_to_and_from_string() {
    let id = UserId::from("xyz".to_owned());
    let raw: String = id.clone().into();
    assert_eq!(raw, "xyz");
    assert_eq!(UserId::from("xyz"), id);
}
