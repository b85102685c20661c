//! Truth tables for the peer sets over a three-field object.
//!
//! Each schema declares `A`, `B` and `C`, and every field carries the same
//! peer rule naming the other two.

use rstest::rstest;
use verity_validator::prelude::*;

type PeerSet = fn(Vec<&'static str>) -> Result<SharedValidator, ConfigError>;

fn schema(rule: PeerSet) -> Object {
    object()
        .field_shared("A", rule(vec!["B", "C"]).unwrap())
        .field_shared("B", rule(vec!["A", "C"]).unwrap())
        .field_shared("C", rule(vec!["A", "B"]).unwrap())
        .build()
        .unwrap()
}

fn input(a: bool, b: bool, c: bool) -> Value {
    let mut members = serde_json::Map::new();
    for (key, present) in [("A", a), ("B", b), ("C", c)] {
        if present {
            members.insert(key.to_owned(), json!(key.to_lowercase()));
        }
    }
    Value::Object(members)
}

fn present_count(a: bool, b: bool, c: bool) -> usize {
    [a, b, c].into_iter().filter(|&p| p).count()
}

#[rstest]
fn and_peers_all_or_nothing(
    #[values(false, true)] a: bool,
    #[values(false, true)] b: bool,
    #[values(false, true)] c: bool,
) {
    let schema = schema(|keys| and_peers(keys).map(ValidateExt::shared));
    let expected = matches!(present_count(a, b, c), 0 | 3);
    assert_eq!(okay(&input(a, b, c), &schema), expected);
}

#[rstest]
fn nand_peers_reject_all_present(
    #[values(false, true)] a: bool,
    #[values(false, true)] b: bool,
    #[values(false, true)] c: bool,
) {
    let schema = schema(|keys| nand_peers(keys).map(ValidateExt::shared));
    let expected = present_count(a, b, c) < 3;
    assert_eq!(okay(&input(a, b, c), &schema), expected);
}

#[rstest]
fn or_peers_need_at_least_one(
    #[values(false, true)] a: bool,
    #[values(false, true)] b: bool,
    #[values(false, true)] c: bool,
) {
    let schema = schema(|keys| or_peers(keys).map(ValidateExt::shared));
    let expected = present_count(a, b, c) >= 1;
    assert_eq!(okay(&input(a, b, c), &schema), expected);
}

#[rstest]
fn xor_peers_need_exactly_one(
    #[values(false, true)] a: bool,
    #[values(false, true)] b: bool,
    #[values(false, true)] c: bool,
) {
    let schema = schema(|keys| xor_peers(keys).map(ValidateExt::shared));
    let expected = present_count(a, b, c) == 1;
    assert_eq!(okay(&input(a, b, c), &schema), expected);
}

#[rstest]
fn oxor_peers_allow_at_most_one(
    #[values(false, true)] a: bool,
    #[values(false, true)] b: bool,
    #[values(false, true)] c: bool,
) {
    let schema = schema(|keys| oxor_peers(keys).map(ValidateExt::shared));
    let expected = present_count(a, b, c) <= 1;
    assert_eq!(okay(&input(a, b, c), &schema), expected);
}

// ============================================================================
// SINGLE-PEER ALIASES
// ============================================================================

#[rstest]
#[case(json!({}), true)]
#[case(json!({ "user": "a" }), false)]
#[case(json!({ "password": "b" }), false)]
#[case(json!({ "user": "a", "password": "b" }), true)]
fn and_peer_pairs_credentials(#[case] value: Value, #[case] valid: bool) {
    let login = object()
        .field("user", and_peer("password").unwrap())
        .field("password", and_peer("user").unwrap())
        .build()
        .unwrap();
    assert_eq!(okay(&value, &login), valid);
}

#[test]
fn peer_errors_render_with_the_key() {
    let login = object()
        .field("user", xor_peer("token").unwrap())
        .field("token", xor_peer("user").unwrap())
        .build()
        .unwrap();

    let errors = list_errors(login.validate(&json!({})).as_ref());
    let paths: Vec<&str> = errors.iter().map(|e| e.path.as_str()).collect();
    assert_eq!(paths, ["user", "token"]);
    insta::assert_snapshot!(
        errors[0].err.to_string(),
        @r#"(not("Expected nullish") xor peer "token" not("Expected nullish"))"#
    );
}

#[test]
fn single_key_aliases_match_their_sets() {
    let value = json!({ "a": 1 });
    let pairs: [(SharedValidator, SharedValidator); 3] = [
        (nand_peer("b").unwrap().shared(), nand_peers(["b"]).unwrap().shared()),
        (or_peer("b").unwrap().shared(), or_peers(["b"]).unwrap().shared()),
        (oxor_peer("b").unwrap().shared(), oxor_peers(["b"]).unwrap().shared()),
    ];
    for (single, set) in pairs {
        let a = object().field_shared("a", single).allow_unknown(true).build().unwrap();
        let b = object().field_shared("a", set).allow_unknown(true).build().unwrap();
        assert_eq!(a.validate(&value), b.validate(&value));
    }
}
