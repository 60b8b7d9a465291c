//! Unique test-data generation.
//!
//! The registration backend rejects duplicate emails and phone numbers, so
//! every run that actually submits the form needs fresh values. Uniqueness
//! here is probabilistic, not allocated: a millisecond timestamp separates
//! sequential runs and a random draw separates parallel workers that land on
//! the same millisecond.
//!
//! The `*_at` variants take the timestamp and RNG explicitly so unit tests
//! can pin both; the plain variants draw from the system clock and thread
//! RNG.

use rand::Rng;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::fixtures::SignUpFixtures;

/// Milliseconds since the Unix epoch
fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Fresh email address derived from `base`.
///
/// Inserts `+{timestamp}{random5}` immediately before the `@`. A base
/// without an `@` is returned unchanged.
#[must_use]
pub fn unique_email(base: &str) -> String {
    unique_email_at(base, now_ms(), &mut rand::thread_rng())
}

/// [`unique_email`] with explicit time and random sources
#[must_use]
pub fn unique_email_at(base: &str, now_ms: u64, rng: &mut impl Rng) -> String {
    let tag: u32 = rng.gen_range(10_000..=99_999);
    match base.find('@') {
        Some(at) => format!("{}+{now_ms}{tag}{}", &base[..at], &base[at..]),
        None => base.to_string(),
    }
}

/// Fresh 11-digit phone number starting with `prefix`.
///
/// Appends the last six digits of the timestamp and the last two digits of
/// an eight-digit random draw.
#[must_use]
pub fn unique_phone_number(prefix: &str) -> String {
    unique_phone_number_at(prefix, now_ms(), &mut rand::thread_rng())
}

/// [`unique_phone_number`] with explicit time and random sources
#[must_use]
pub fn unique_phone_number_at(prefix: &str, now_ms: u64, rng: &mut impl Rng) -> String {
    let draw: u32 = rng.gen_range(10_000_000..=99_999_999);
    format!("{prefix}{:06}{:02}", now_ms % 1_000_000, draw % 100)
}

/// A freshly generated email and phone number for one registration attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniqueSignUpData {
    /// Generated email address
    pub email: String,
    /// Generated phone number
    pub phone_number: String,
}

impl UniqueSignUpData {
    /// Generate both values from the fixture base data.
    ///
    /// The two draws are independent; they only share an approximate
    /// timestamp.
    #[must_use]
    pub fn generate(fixtures: &SignUpFixtures) -> Self {
        Self {
            email: unique_email(&fixtures.credentials.valid_email),
            phone_number: unique_phone_number(&fixtures.phone_numbers.valid_prefix),
        }
    }
}
