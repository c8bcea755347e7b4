//! Nested validation rules and the create-form reducer.

mod common;

use common::valid_record;
use minidash::form::{validate, ContactRecord, FieldPath};
use minidash::ui::create::{CreateFormReducer, CreateFormState, CreateIntent};
use minidash::ui::mvi::Reducer;

#[test]
fn empty_record_fails_every_required_field() {
    let errors = validate(&ContactRecord::default());
    assert!(!errors.is_valid());
    assert_eq!(errors.failed_paths().len(), 12);
    assert_eq!(errors.get(FieldPath::Suite), None);
    assert_eq!(errors.get(FieldPath::Name), Some("Name is required"));
    assert_eq!(errors.get(FieldPath::Lat), Some("Latitude is required"));
    assert_eq!(errors.get(FieldPath::CatchPhrase), Some("Catch phrase is required"));
    assert_eq!(errors.get(FieldPath::Bs), Some("BS is required"));
}

#[test]
fn valid_record_passes() {
    assert!(validate(&valid_record()).is_valid());
}

#[test]
fn ftp_website_fails_only_website() {
    let mut record = valid_record();
    record.website = "ftp://files.example.com".to_string();
    let errors = validate(&record);
    assert_eq!(errors.failed_paths(), vec![FieldPath::Website]);
    assert_eq!(
        errors.get(FieldPath::Website),
        Some("Website must start with http:// or https://")
    );
}

#[test]
fn non_numeric_latitude_fails_only_latitude() {
    let mut record = valid_record();
    record.address.geo.lat = "abc".to_string();
    let errors = validate(&record);
    assert_eq!(errors.failed_paths(), vec![FieldPath::Lat]);
    assert_eq!(errors.get(FieldPath::Lat), Some("Latitude must be a number"));
}

#[test]
fn short_name_and_bad_email() {
    let mut record = valid_record();
    record.name = " A ".to_string();
    record.email = "not-an-email".to_string();
    let errors = validate(&record);
    assert_eq!(errors.get(FieldPath::Name), Some("Name must be at least 2 characters"));
    assert_eq!(errors.get(FieldPath::Email), Some("Email is invalid"));
}

#[test]
fn whitespace_only_counts_as_empty() {
    let mut record = valid_record();
    record.phone = "   ".to_string();
    assert_eq!(validate(&record).get(FieldPath::Phone), Some("Phone is required"));
}

#[test]
fn edit_clears_exactly_one_leaf() {
    let state = CreateFormReducer::reduce(
        CreateFormState::default(),
        CreateIntent::Submit { request: 1 },
    );
    assert_eq!(state.errors.failed_paths().len(), 12);

    let state = CreateFormReducer::reduce(
        state,
        CreateIntent::Edit {
            path: FieldPath::City,
            value: "x".to_string(),
        },
    );
    let failed = state.errors.failed_paths();
    assert_eq!(failed.len(), 11);
    assert!(!failed.contains(&FieldPath::City));
    // Clearing does not re-run validation on the edited value.
    assert_eq!(state.errors.get(FieldPath::Name), Some("Name is required"));
}

#[test]
fn invalid_submit_does_not_start_a_request() {
    let state = CreateFormReducer::reduce(
        CreateFormState::default(),
        CreateIntent::Submit { request: 7 },
    );
    assert!(!state.submitting);
    assert_eq!(state.pending, None);
    assert_eq!(state.focused, FieldPath::Name);
}

#[test]
fn second_submit_while_submitting_is_ignored() {
    let state = CreateFormState {
        record: valid_record(),
        ..CreateFormState::default()
    };
    let state = CreateFormReducer::reduce(state, CreateIntent::Submit { request: 1 });
    assert!(state.is_awaiting(1));
    let state = CreateFormReducer::reduce(state, CreateIntent::Submit { request: 2 });
    assert!(state.is_awaiting(1));
    assert!(!state.is_awaiting(2));
}

#[test]
fn completion_resets_on_success_and_keeps_record_on_failure() {
    let submitted = CreateFormReducer::reduce(
        CreateFormState {
            record: valid_record(),
            ..CreateFormState::default()
        },
        CreateIntent::Submit { request: 3 },
    );

    let failed = CreateFormReducer::reduce(
        submitted.clone(),
        CreateIntent::Completed {
            request: 3,
            success: false,
        },
    );
    assert_eq!(failed.record, valid_record());
    assert!(!failed.submitting);

    let succeeded = CreateFormReducer::reduce(
        submitted,
        CreateIntent::Completed {
            request: 3,
            success: true,
        },
    );
    assert_eq!(succeeded, CreateFormState::default());
}

#[test]
fn completion_for_another_request_is_ignored() {
    let submitted = CreateFormReducer::reduce(
        CreateFormState {
            record: valid_record(),
            ..CreateFormState::default()
        },
        CreateIntent::Submit { request: 3 },
    );
    let after = CreateFormReducer::reduce(
        submitted.clone(),
        CreateIntent::Completed {
            request: 2,
            success: true,
        },
    );
    assert_eq!(after, submitted);
}
