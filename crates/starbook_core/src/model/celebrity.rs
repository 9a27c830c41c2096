//! Celebrity domain model.
//!
//! # Responsibility
//! - Define the canonical record shared by the store and the frontend.
//! - Derive `age` from date of birth against a caller-supplied "today".
//! - Enforce the letters-and-whitespace rule for edited countries.
//!
//! # Invariants
//! - `id` is assigned by the upstream data source and never minted locally.
//! - `age` is always consistent with `dob` and the "today" used at decoration.
//! - `CelebrityPatch` can name only the editable fields; identity, names,
//!   `dob` and `age` are not patchable by construction.

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static COUNTRY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z\s]*$").expect("valid country regex"));

/// Stable identifier assigned by the upstream data source.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type CelebrityId = i64;

/// Fixed gender vocabulary used by the static resource.
///
/// Wire strings are preserved exactly, including the capitalized
/// `Rather not say` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "male")]
    Male,
    #[serde(rename = "female")]
    Female,
    #[serde(rename = "transgender")]
    Transgender,
    #[serde(rename = "Rather not say")]
    RatherNotSay,
    #[serde(rename = "other")]
    Other,
}

impl Gender {
    /// All variants in the order the selection control presents them.
    pub const ALL: [Gender; 5] = [
        Gender::Male,
        Gender::Female,
        Gender::Transgender,
        Gender::RatherNotSay,
        Gender::Other,
    ];

    /// Human-readable label for rendering.
    pub fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Transgender => "Transgender",
            Self::RatherNotSay => "Rather not say",
            Self::Other => "Other",
        }
    }

    /// Next variant in presentation order, wrapping at the end.
    pub fn next(self) -> Gender {
        let idx = Self::ALL.iter().position(|g| *g == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous variant in presentation order, wrapping at the start.
    pub fn prev(self) -> Gender {
        let idx = Self::ALL.iter().position(|g| *g == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Resource-shaped record, before age decoration.
///
/// This is exactly the element shape of the static JSON array; no `age`
/// field is expected or accepted from the resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CelebritySeed {
    pub id: CelebrityId,
    pub first: String,
    pub last: String,
    /// Source of truth for age, as `YYYY-MM-DD`.
    pub dob: NaiveDate,
    pub gender: Gender,
    pub country: String,
    pub description: String,
}

/// Canonical in-memory record served to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Celebrity {
    pub id: CelebrityId,
    pub first: String,
    pub last: String,
    pub dob: NaiveDate,
    pub gender: Gender,
    pub country: String,
    pub description: String,
    /// Derived at load time from `dob`; never read from the resource and
    /// never recomputed afterwards.
    pub age: i32,
}

impl Celebrity {
    /// Decorates a resource seed with the age derived at `today`.
    pub fn from_seed(seed: CelebritySeed, today: NaiveDate) -> Self {
        let age = derive_age(seed.dob, today);
        Self {
            id: seed.id,
            first: seed.first,
            last: seed.last,
            dob: seed.dob,
            gender: seed.gender,
            country: seed.country,
            description: seed.description,
            age,
        }
    }

    /// Display name used by rendering and by the filter predicate.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first, self.last)
    }

    /// Whether the adult rule permits editing this record.
    pub fn is_adult(&self) -> bool {
        self.age >= 18
    }
}

/// Partial update accepted by the store.
///
/// Only the editable fields can be named; an unnamed field is left
/// byte-for-byte unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CelebrityPatch {
    pub gender: Option<Gender>,
    pub country: Option<String>,
    pub description: Option<String>,
}

impl CelebrityPatch {
    /// Returns whether the patch names no fields at all.
    pub fn is_empty(&self) -> bool {
        self.gender.is_none() && self.country.is_none() && self.description.is_none()
    }

    /// Replaces exactly the named fields on `record`.
    pub fn apply_to(&self, record: &mut Celebrity) {
        if let Some(gender) = self.gender {
            record.gender = gender;
        }
        if let Some(country) = &self.country {
            record.country = country.clone();
        }
        if let Some(description) = &self.description {
            record.description = description.clone();
        }
    }
}

/// Computes whole years elapsed between `dob` and `today`.
///
/// Rules:
/// - Base value is the calendar year difference.
/// - Decremented by one when `(today.month, today.day)` precedes
///   `(dob.month, dob.day)` lexicographically, so the birthday itself
///   already counts as completed.
pub fn derive_age(dob: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - dob.year();
    if (today.month(), today.day()) < (dob.month(), dob.day()) {
        age -= 1;
    }
    age
}

/// Returns whether `value` is acceptable as an edited country.
///
/// Letters and whitespace only; the empty string is allowed while the user
/// is still typing.
pub fn is_valid_country(value: &str) -> bool {
    COUNTRY_RE.is_match(value)
}
