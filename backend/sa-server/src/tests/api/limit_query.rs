use crate::LimitQuery;

fn query(raw: &str) -> LimitQuery {
    LimitQuery {
        limit: Some(raw.to_string()),
    }
}

#[test]
fn given_no_limit_when_resolved_then_default() {
    assert_eq!(LimitQuery::default().resolve(10), 10);
}

#[test]
fn given_numeric_limit_when_resolved_then_value() {
    assert_eq!(query("25").resolve(10), 25);
}

#[test]
fn given_trailing_garbage_when_resolved_then_leading_digits_used() {
    assert_eq!(query("7abc").resolve(10), 7);
    assert_eq!(query("12.9").resolve(10), 12);
}

#[test]
fn given_unparseable_limit_when_resolved_then_default() {
    assert_eq!(query("abc").resolve(20), 20);
    assert_eq!(query("").resolve(20), 20);
}

#[test]
fn given_zero_or_negative_limit_when_resolved_then_default() {
    assert_eq!(query("0").resolve(10), 10);
    assert_eq!(query("-5").resolve(10), 10);
}

#[test]
fn given_limit_above_cap_when_resolved_then_passed_through() {
    // Capping is the handler's decision
    assert_eq!(query("51").resolve(10), 51);
}

#[test]
fn given_limit_beyond_i64_when_resolved_then_saturates() {
    let expected = usize::try_from(i64::MAX).unwrap_or(usize::MAX);

    assert_eq!(query("99999999999999999999").resolve(10), expected);
}

#[test]
fn given_huge_negative_limit_when_resolved_then_default() {
    assert_eq!(query("-99999999999999999999").resolve(10), 10);
}
