//! Field patterns and the valid state code set

use std::sync::LazyLock;

use regex::Regex;

macro_rules! pattern {
    ($name:ident, $re:expr) => {
        pub static $name: LazyLock<Regex> =
            LazyLock::new(|| Regex::new($re).expect("static pattern compiles"));
    };
}

pattern!(NAME, r"^[a-zA-Z'-]+$");
pattern!(SSN, r"^[0-9]{3}-[0-9]{2}-[0-9]{4}$");
pattern!(STATE_CODE, r"^[a-zA-Z]{2}$");
pattern!(POSTAL, r"^[0-9]{5}$");
pattern!(POSTAL_PLUS_FOUR, r"^[0-9]{5}-[0-9]{4}$");
pattern!(EMAIL, r"^[a-zA-Z0-9]+@[a-zA-Z]+\.[a-zA-Z]+$");
pattern!(VISIT_CODE, r"^[a-zA-Z][0-9][a-zA-Z] [0-9][a-zA-Z][0-9]$");
pattern!(BILLING_CODE, r"^[0-9]{3}\.[0-9]{3}\.[0-9]{3}-[0-9]{2}$");
pattern!(ICD10, r"^[a-zA-Z][0-9]{2}$");

/// Accepted gender values, case-sensitive
pub const GENDERS: [&str; 3] = ["Male", "Female", "Other"];

/// US state codes plus DC
pub const VALID_STATES: [&str; 51] = [
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN",
    "IA", "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH",
    "NJ", "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT",
    "VT", "VA", "WA", "WV", "WI", "WY",
];

pub fn is_valid_state(code: &str) -> bool {
    VALID_STATES.contains(&code)
}

pub fn is_valid_postal(postal: &str) -> bool {
    POSTAL.is_match(postal) || POSTAL_PLUS_FOUR.is_match(postal)
}
