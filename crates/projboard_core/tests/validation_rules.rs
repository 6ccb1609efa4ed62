use projboard_core::{check, validate, FieldRule, FieldValue, RuleViolation};

#[test]
fn rules_without_constraints_are_always_satisfied() {
    let values = [
        FieldValue::from(""),
        FieldValue::from("   "),
        FieldValue::from("anything at all"),
        FieldValue::from(0_i64),
        FieldValue::from(-3.5),
    ];
    for value in values {
        assert!(validate(&FieldRule::new(value.clone())), "{value:?}");
    }
}

#[test]
fn numeric_range_holds_exactly_between_bounds() {
    let bounds = [(1.0, 5.0), (-2.0, 2.0), (0.0, 0.0), (10.0, 100.0)];
    let samples = [-3.0, -2.0, -0.5, 0.0, 1.0, 2.0, 4.5, 5.0, 5.5, 10.0, 100.0, 101.0];
    for (min, max) in bounds {
        for value in samples {
            let expected = min <= value && value <= max;
            let rule = FieldRule::number(value).min(min).max(max);
            assert_eq!(validate(&rule), expected, "{min} <= {value} <= {max}");
        }
    }
}

#[test]
fn max_length_accepts_short_values_and_rejects_long_ones() {
    // A `>=` comparison here would accept "abcdef" and reject "ab".
    assert!(validate(&FieldRule::text("ab").max_length(5)));
    assert!(!validate(&FieldRule::text("abcdef").max_length(5)));
}

#[test]
fn check_agrees_with_validate() {
    let rules = [
        FieldRule::text("").required(),
        FieldRule::text("hello").min_length(3).max_length(4),
        FieldRule::text("hey").min_length(3).max_length(4),
        FieldRule::number(f64::NAN).min(0.0),
        FieldRule::number(3.0).min(0.0).max(3.0),
    ];
    for rule in rules {
        assert_eq!(validate(&rule), check(&rule).is_ok(), "{rule:?}");
    }
}

#[test]
fn violations_render_readable_messages() {
    let err = check(&FieldRule::text("abc").min_length(5)).unwrap_err();
    assert_eq!(
        err,
        RuleViolation::TooShort {
            min_length: 5,
            actual: 3,
        }
    );
    assert_eq!(err.to_string(), "length 3 is shorter than 5");
}
