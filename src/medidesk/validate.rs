//! Field syntax validation for medidesk records.
//!
//! Every predicate is total: it never fails, it only answers whether the
//! value is acceptable. Date and time checks are shape-only; nothing here
//! knows about calendars or clocks, so "2024-99-99" and "99:99" pass.
//! The command layer decides what to tell the user when a check fails.

use crate::model::Gender;

/// A name is 2 to 50 characters of ASCII letters and spaces.
pub fn is_valid_name(name: &str) -> bool {
    (2..=50).contains(&name.chars().count())
        && name.chars().all(|c| c.is_ascii_alphabetic() || c == ' ')
}

/// A contact number is exactly 10 ASCII digits.
pub fn is_valid_contact(contact: &str) -> bool {
    contact.len() == 10 && contact.chars().all(|c| c.is_ascii_digit())
}

/// Accepts "Male", "Female" or "Other" in any letter case.
pub fn is_valid_gender(gender: &str) -> bool {
    gender.parse::<Gender>().is_ok()
}

pub fn is_valid_age(age: u32) -> bool {
    age > 0 && age < 120
}

pub fn is_valid_specialization(specialization: &str) -> bool {
    specialization.chars().count() >= 2
}

/// Shape check for `YYYY-MM-DD`. Digits and hyphens in position only.
pub fn is_valid_date(date: &str) -> bool {
    matches_shape(date, b"nnnn-nn-nn")
}

/// Shape check for `HH:MM`. Digits and colon in position only.
pub fn is_valid_time(time: &str) -> bool {
    matches_shape(time, b"nn:nn")
}

/// Matches a byte string against a shape where `n` stands for an ASCII
/// digit and any other byte stands for itself.
fn matches_shape(s: &str, shape: &[u8]) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == shape.len()
        && bytes.iter().zip(shape).all(|(b, want)| match want {
            b'n' => b.is_ascii_digit(),
            literal => b == literal,
        })
}
