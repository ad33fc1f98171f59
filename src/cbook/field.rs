//! # Validated Fields
//!
//! Every scalar a contact holds (its name, each phone number, the birthday) is
//! a [`Field`]: a value that can only be obtained through validation. The rule
//! is picked by the field's kind parameter ([`NameRule`], [`PhoneRule`],
//! [`BirthdayRule`]) and runs on construction *and* on every [`Field::set`].
//! There is no way to put an unvalidated value into a field, including
//! deserialization: stored data goes through the same rule.
//!
//! ```
//! use cbook::field::PhoneNumber;
//!
//! let mut phone = PhoneNumber::new("12345").unwrap();
//! assert!(phone.set("+12345").is_err());
//! assert_eq!(phone.as_str(), "12345");
//! ```

use crate::error::{CbookError, Result};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// The validation strategy of a field kind.
pub trait FieldKind {
    type Value: Clone + fmt::Debug + fmt::Display + PartialEq;

    fn validate(raw: &str) -> Result<Self::Value>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Field<K: FieldKind> {
    value: K::Value,
    kind: PhantomData<K>,
}

impl<K: FieldKind> Field<K> {
    pub fn new(raw: &str) -> Result<Self> {
        Ok(Self {
            value: K::validate(raw)?,
            kind: PhantomData,
        })
    }

    /// Replaces the value. On failure the previous value is kept.
    pub fn set(&mut self, raw: &str) -> Result<()> {
        self.value = K::validate(raw)?;
        Ok(())
    }

    pub fn get(&self) -> &K::Value {
        &self.value
    }
}

impl<K: FieldKind<Value = String>> Field<K> {
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl<K: FieldKind> fmt::Display for Field<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

// Stored as the plain string form
impl<K: FieldKind> Serialize for Field<K> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&self.value)
    }
}

impl<'de, K: FieldKind> Deserialize<'de> for Field<K> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(&raw).map_err(serde::de::Error::custom)
    }
}

/// Any non-empty string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameRule;

impl FieldKind for NameRule {
    type Value = String;

    fn validate(raw: &str) -> Result<String> {
        if raw.is_empty() {
            return Err(CbookError::Format("Name cannot be empty".to_string()));
        }
        Ok(raw.to_string())
    }
}

/// ASCII digits only: no spaces, punctuation or leading `+`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhoneRule;

impl FieldKind for PhoneRule {
    type Value = String;

    fn validate(raw: &str) -> Result<String> {
        if raw.is_empty() || !raw.chars().all(|c| c.is_ascii_digit()) {
            return Err(CbookError::Format(format!("Wrong phone format {}", raw)));
        }
        Ok(raw.to_string())
    }
}

/// A `YYYY-MM-DD` date that is not after today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthdayRule;

impl FieldKind for BirthdayRule {
    type Value = NaiveDate;

    fn validate(raw: &str) -> Result<NaiveDate> {
        parse_birthday(raw, today())
    }
}

pub type Name = Field<NameRule>;
pub type PhoneNumber = Field<PhoneRule>;
pub type BirthdayDate = Field<BirthdayRule>;

impl BirthdayDate {
    /// Same as [`Field::new`], checked against the given day instead of the clock.
    pub fn parse_on(raw: &str, today: NaiveDate) -> Result<Self> {
        Ok(Self {
            value: parse_birthday(raw, today)?,
            kind: PhantomData,
        })
    }
}

/// The current local date, time of day dropped.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn parse_birthday(raw: &str, today: NaiveDate) -> Result<NaiveDate> {
    let date = NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| {
        CbookError::Format(format!("Unparseable date {}, expected YYYY-MM-DD", raw))
    })?;
    if date > today {
        return Err(CbookError::Format(
            "Birthday cannot be in the future".to_string(),
        ));
    }
    Ok(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn phone_accepts_digits_only() {
        for ok in ["0", "12345", "0501234567"] {
            assert_eq!(PhoneNumber::new(ok).unwrap().as_str(), ok);
        }
        for bad in ["", "+380501234567", "050 123", "050-123", "(050)", "12a", "１２"] {
            let err = PhoneNumber::new(bad).unwrap_err();
            assert!(matches!(err, CbookError::Format(_)), "{bad} accepted");
        }
    }

    #[test]
    fn phone_checks_every_ascii_character() {
        for c in (0u8..=127).map(char::from) {
            let raw = format!("12{}34", c);
            let result = PhoneNumber::new(&raw);
            if c.is_ascii_digit() {
                assert_eq!(result.unwrap().as_str(), raw);
            } else {
                assert!(matches!(result, Err(CbookError::Format(_))), "{:?} accepted", c);
            }
        }

        for c in ['٣', '३', '½', 'é'] {
            assert!(PhoneNumber::new(&format!("1{}", c)).is_err(), "{c} accepted");
        }
    }

    #[test]
    fn phone_error_names_the_value() {
        let err = PhoneNumber::new("12-34").unwrap_err();
        assert_eq!(err.to_string(), "Wrong phone format 12-34");
    }

    #[test]
    fn set_revalidates_and_keeps_old_value_on_failure() {
        let mut phone = PhoneNumber::new("111").unwrap();
        assert!(phone.set("222x").is_err());
        assert_eq!(phone.as_str(), "111");

        phone.set("222").unwrap();
        assert_eq!(phone.as_str(), "222");
    }

    #[test]
    fn name_must_not_be_empty() {
        assert!(Name::new("").is_err());
        assert_eq!(Name::new("Ann").unwrap().as_str(), "Ann");

        let mut name = Name::new("Ann").unwrap();
        assert!(name.set("").is_err());
        assert_eq!(name.get(), "Ann");
    }

    #[test]
    fn birthday_round_trips_past_dates() {
        let today = day(2024, 6, 15);
        let date = BirthdayDate::parse_on("2000-01-31", today).unwrap();
        assert_eq!(*date.get(), day(2000, 1, 31));
        assert_eq!(date.to_string(), "2000-01-31");
    }

    #[test]
    fn birthday_accepts_today_rejects_tomorrow() {
        let today = day(2024, 6, 15);
        assert!(BirthdayDate::parse_on("2024-06-15", today).is_ok());

        let err = BirthdayDate::parse_on("2024-06-16", today).unwrap_err();
        assert_eq!(err.to_string(), "Birthday cannot be in the future");
    }

    #[test]
    fn birthday_rejects_malformed_dates() {
        let today = day(2024, 6, 15);
        for bad in ["", "15.06.2000", "2000/06/15", "2000-13-01", "2001-02-29", "yesterday"] {
            let err = BirthdayDate::parse_on(bad, today).unwrap_err();
            assert!(err.to_string().starts_with("Unparseable date"), "{bad}");
        }
    }

    #[test]
    fn birthday_set_uses_the_clock() {
        let mut date = BirthdayDate::new("2000-01-01").unwrap();
        let tomorrow = today().succ_opt().unwrap();
        assert!(date.set(&tomorrow.format(DATE_FORMAT).to_string()).is_err());
        date.set(&today().format(DATE_FORMAT).to_string()).unwrap();
        assert_eq!(*date.get(), today());
    }

    #[test]
    fn serializes_as_plain_string() {
        let phone = PhoneNumber::new("12345").unwrap();
        assert_eq!(serde_json::to_string(&phone).unwrap(), "\"12345\"");

        let date = BirthdayDate::new("1999-12-31").unwrap();
        assert_eq!(serde_json::to_string(&date).unwrap(), "\"1999-12-31\"");
    }

    #[test]
    fn deserialization_validates() {
        let phone: PhoneNumber = serde_json::from_str("\"12345\"").unwrap();
        assert_eq!(phone.as_str(), "12345");

        assert!(serde_json::from_str::<PhoneNumber>("\"+1 555\"").is_err());
        assert!(serde_json::from_str::<BirthdayDate>("\"not a date\"").is_err());
        assert!(serde_json::from_str::<Name>("\"\"").is_err());
    }
}
