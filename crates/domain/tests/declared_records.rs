//! Integration coverage for records checked through derived constraint tables.

use fieldcheck_domain::samples::{self, SMARTPHONE_DESCRIPTION, SMARTPHONE_TITLE};
use fieldcheck_domain::{Gamer, Item, Plane};
use fieldcheck_shared::{
    Constraint, ErrorEnvelope, ErrorKind, ExpectedType, FieldError, Validatable, ValidationMode,
    Violation, validate, validate_all, validate_with,
};
use fieldcheck_validate_derive::Validatable;

fn message<T: Validatable>(record: &T) -> Option<String> {
    validate(record).err().map(|error| error.to_string())
}

#[test]
fn gamer_without_username_reports_null() {
    assert_eq!(
        message(&samples::gamer()).as_deref(),
        Some("Field 'username' in class Gamer cannot be null.")
    );
}

#[test]
fn short_item_description_reports_length() {
    assert_eq!(
        message(&samples::item()).as_deref(),
        Some("Field 'description' in class Item must have length between 3 and 100.")
    );
}

#[test]
fn long_item_description_reports_length() {
    let item = Item::new(Some(SMARTPHONE_TITLE), Some(SMARTPHONE_DESCRIPTION));
    assert!(matches!(
        validate(&item),
        Err(FieldError::ConstraintViolation {
            field: "description",
            violation: Violation::Length {
                min: 3,
                max: 100,
                actual: 166
            },
            ..
        })
    ));
}

#[test]
fn description_length_counts_surrogate_pairs_twice() {
    let two_emoji = Item::new(Some("t"), Some("\u{1F600}\u{1F600}"));
    assert_eq!(validate(&two_emoji), Ok(()));

    let one_emoji = Item::new(Some("t"), Some("\u{1F600}"));
    assert!(matches!(
        validate(&one_emoji),
        Err(FieldError::ConstraintViolation {
            violation: Violation::Length { actual: 2, .. },
            ..
        })
    ));
}

#[test]
fn plane_declares_nothing_and_always_passes() {
    assert_eq!(validate(&samples::plane()), Ok(()));
    assert!(Plane::schema().constrained_fields().next().is_none());
    assert!(samples::plane().validate().is_err());
}

#[test]
fn gamer_of_eighteen_passes() {
    assert_eq!(validate(&Gamer::new(Some("neo"), 18)), Ok(()));
}

#[test]
fn missing_description_is_a_type_mismatch() {
    let item = Item::new(Some("phone"), None);
    let error = validate(&item).err();
    assert!(matches!(
        error,
        Some(FieldError::TypeMismatch {
            expected: ExpectedType::Text,
            found: "null",
            ..
        })
    ));
    assert_eq!(
        error.map(|error| error.to_string()).as_deref(),
        Some("Field 'description' in class Item is not of type String for @StringLength.")
    );
}

#[test]
fn derived_tables_follow_declaration_order() {
    let schema = Gamer::schema();
    assert_eq!(schema.type_name(), "Gamer");
    let fields: Vec<_> = schema
        .fields()
        .iter()
        .map(|field| (field.name(), field.constraints().to_vec()))
        .collect();
    assert_eq!(
        fields,
        vec![
            ("username", vec![Constraint::NotNull]),
            ("age", vec![Constraint::MinValue(12), Constraint::MaxValue(100)]),
        ]
    );
    assert_eq!(
        Item::schema().field("description").map(|(_, field)| field.string_length()),
        Some(Some((3, 100)))
    );
}

#[derive(Validatable)]
#[validate(name = "Account")]
struct AccountDto {
    #[validate(field = "displayName", not_null, length(min = 2))]
    display_name: Option<String>,
    #[validate(min = -10)]
    balance: i64,
    notes: Vec<String>,
}

#[test]
fn container_and_field_renames_reach_messages() {
    let account = AccountDto {
        display_name: Some("x".into()),
        balance: 0,
        notes: Vec::new(),
    };
    assert!(account.notes.is_empty());
    assert_eq!(
        message(&account).as_deref(),
        Some("Field 'displayName' in class Account must have length between 2 and 2147483647.")
    );
}

#[test]
fn negative_bounds_and_open_length_are_supported() {
    let account = AccountDto {
        display_name: Some("long enough".into()),
        balance: -11,
        notes: vec!["overdrawn".into()],
    };
    assert_eq!(
        message(&account).as_deref(),
        Some("Field 'balance' in class Account must be greater than or equal to -10.")
    );
    assert_eq!(account.notes.len(), 1);
}

#[derive(Validatable)]
struct Misdeclared {
    #[validate(length(min = 1, max = 3))]
    count: u16,
    #[validate(max = 5)]
    ratio: f64,
    #[validate(min = 0)]
    id: u64,
}

#[test]
fn wrong_value_types_surface_as_type_mismatches() {
    let record = Misdeclared {
        count: 2,
        ratio: 0.5,
        id: 9,
    };
    let report = validate_all(&record);
    let found: Vec<_> = report
        .errors()
        .iter()
        .map(|error| match error {
            FieldError::TypeMismatch {
                field,
                expected,
                found,
                ..
            } => (*field, *expected, *found),
            FieldError::ConstraintViolation { field, .. } => (*field, ExpectedType::Text, "bad"),
        })
        .collect();
    assert_eq!(
        found,
        vec![
            ("count", ExpectedType::Text, "Integer"),
            ("ratio", ExpectedType::Integer, "f64"),
            ("id", ExpectedType::Integer, "u64"),
        ]
    );

    let envelope = validate(&record).err().map(ErrorEnvelope::from);
    assert_eq!(envelope.map(|error| error.kind), Some(ErrorKind::Invariant));
}

#[derive(Validatable)]
struct Borrowed<'a, T> {
    #[validate(not_null, length(max = 4))]
    code: Option<&'a str>,
    payload: T,
}

#[test]
fn generic_and_borrowed_fields_are_supported() {
    let ok = Borrowed {
        code: Some("abcd"),
        payload: 1_u8,
    };
    let too_long = Borrowed {
        code: Some("abcde"),
        payload: 2_u8,
    };
    assert_eq!(validate(&ok), Ok(()));
    assert_eq!(ok.payload, 1);
    assert_eq!(
        message(&too_long).as_deref(),
        Some("Field 'code' in class Borrowed must have length between 0 and 4.")
    );
    assert_eq!(too_long.payload, 2);
}

#[derive(Validatable)]
struct Impossible {
    #[validate(min = 10, max = 5)]
    level: i32,
}

#[test]
fn max_is_reported_before_min_when_both_fail() {
    let record = Impossible { level: 7 };
    assert_eq!(
        message(&record).as_deref(),
        Some("Field 'level' in class Impossible must be less than or equal to 5.")
    );
    let all: Vec<_> = validate_with(&record, ValidationMode::CollectAll)
        .into_errors()
        .into_iter()
        .map(|error| error.to_string())
        .collect();
    assert_eq!(
        all,
        vec![
            "Field 'level' in class Impossible must be less than or equal to 5.",
            "Field 'level' in class Impossible must be greater than or equal to 10.",
        ]
    );
}

#[test]
fn collect_all_walks_every_field() {
    let item = Item::new(None, Some("no"));
    let messages: Vec<_> = validate_all(&item)
        .errors()
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(
        messages,
        vec![
            "Field 'title' in class Item cannot be null.",
            "Field 'description' in class Item must have length between 3 and 100.",
        ]
    );
}
