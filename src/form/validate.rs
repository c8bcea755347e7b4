//! Field rules for the create-user form.
//!
//! Every rule runs on every pass; there is no short-circuit between fields.

use crate::form::errors::ErrorTree;
use crate::form::path::FieldPath;
use crate::form::record::{Address, Company, ContactRecord};

const MIN_NAME_CHARS: usize = 2;

/// Validate the whole record, returning a fresh error tree.
pub fn validate(record: &ContactRecord) -> ErrorTree {
    let mut errors = validate_contact(record);
    errors.merge(validate_address(&record.address));
    errors.merge(validate_company(&record.company));
    errors
}

fn validate_contact(record: &ContactRecord) -> ErrorTree {
    let mut errors = ErrorTree::default();

    let name = record.name.trim();
    if name.is_empty() {
        errors.set(FieldPath::Name, "Name is required");
    } else if name.chars().count() < MIN_NAME_CHARS {
        errors.set(FieldPath::Name, "Name must be at least 2 characters");
    }

    if record.email.trim().is_empty() {
        errors.set(FieldPath::Email, "Email is required");
    } else if !looks_like_email(&record.email) {
        errors.set(FieldPath::Email, "Email is invalid");
    }

    require(&mut errors, FieldPath::Phone, &record.phone);

    if record.website.trim().is_empty() {
        errors.set(FieldPath::Website, "Website is required");
    } else if !has_http_scheme(&record.website) {
        errors.set(
            FieldPath::Website,
            "Website must start with http:// or https://",
        );
    }

    errors
}

fn validate_address(address: &Address) -> ErrorTree {
    let mut errors = ErrorTree::default();
    require(&mut errors, FieldPath::Street, &address.street);
    require(&mut errors, FieldPath::City, &address.city);
    require(&mut errors, FieldPath::Zipcode, &address.zipcode);
    coordinate(&mut errors, FieldPath::Lat, &address.geo.lat);
    coordinate(&mut errors, FieldPath::Lng, &address.geo.lng);
    errors
}

fn validate_company(company: &Company) -> ErrorTree {
    let mut errors = ErrorTree::default();
    require(&mut errors, FieldPath::CompanyName, &company.name);
    require(&mut errors, FieldPath::CatchPhrase, &company.catch_phrase);
    require(&mut errors, FieldPath::Bs, &company.bs);
    errors
}

fn require(errors: &mut ErrorTree, path: FieldPath, value: &str) {
    if value.trim().is_empty() {
        errors.set(path, format!("{} is required", path.label()));
    }
}

fn coordinate(errors: &mut ErrorTree, path: FieldPath, value: &str) {
    if value.trim().is_empty() {
        errors.set(path, format!("{} is required", path.label()));
    } else if !is_number(value) {
        errors.set(path, format!("{} must be a number", path.label()));
    }
}

/// Loose `text@text.text` check: non-blank runs around `@` and a dot after it.
pub fn looks_like_email(value: &str) -> bool {
    let chars: Vec<char> = value.chars().collect();
    chars.iter().enumerate().any(|(at, ch)| {
        if *ch != '@' || at == 0 || chars[at - 1].is_whitespace() {
            return false;
        }
        let domain: Vec<char> = chars[at + 1..]
            .iter()
            .copied()
            .take_while(|c| !c.is_whitespace())
            .collect();
        domain
            .iter()
            .enumerate()
            .any(|(idx, c)| *c == '.' && idx > 0 && idx + 1 < domain.len())
    })
}

pub fn has_http_scheme(value: &str) -> bool {
    let lower = value.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Numeric check with browser `Number()` rules on the trimmed text: decimal
/// and exponent forms, unsigned `0x`/`0o`/`0b` integers and spelled-out
/// `Infinity`. Other spellings such as `inf` or `NaN` are rejected.
pub fn is_number(value: &str) -> bool {
    let text = value.trim();
    for (prefix, radix) in RADIX_PREFIXES {
        if let Some(digits) = text.strip_prefix(prefix) {
            return !digits.is_empty() && digits.chars().all(|c| c.is_digit(radix));
        }
    }
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    if unsigned == "Infinity" {
        return true;
    }
    if !unsigned.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return false;
    }
    text.parse::<f64>().is_ok()
}

const RADIX_PREFIXES: [(&str, u32); 6] = [
    ("0x", 16),
    ("0X", 16),
    ("0o", 8),
    ("0O", 8),
    ("0b", 2),
    ("0B", 2),
];
