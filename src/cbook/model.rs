use crate::error::{CbookError, Result};
use crate::field::{today, BirthdayDate, Name, PhoneNumber};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A person entry: one name, any number of phones, an optional birthday.
///
/// The name is the contact's identity inside a [`Directory`](crate::directory::Directory)
/// and cannot be changed once the contact exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    name: Name,
    #[serde(default)]
    phones: Vec<PhoneNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<BirthdayDate>,
}

impl Contact {
    pub fn new(name: &str) -> Result<Self> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<NaiveDate> {
        self.birthday.as_ref().map(|b| *b.get())
    }

    /// Appends a phone. Duplicates are allowed.
    pub fn add_phone(&mut self, number: &str) -> Result<()> {
        self.phones.push(PhoneNumber::new(number)?);
        Ok(())
    }

    /// Removes the first phone equal to `number`. Returns whether one was removed.
    pub fn delete_phone(&mut self, number: &str) -> bool {
        match self.phones.iter().position(|p| p.as_str() == number) {
            Some(pos) => {
                self.phones.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Toggles each given number: an existing equal phone is deleted, a new one
    /// is added. Phones not mentioned are left alone.
    ///
    /// All numbers are validated before anything changes, so a bad number
    /// leaves the contact untouched.
    pub fn replace_phones<I: AsRef<str>>(&mut self, numbers: &[I]) -> Result<()> {
        for number in numbers {
            PhoneNumber::new(number.as_ref())?;
        }
        for number in numbers {
            let number = number.as_ref();
            if !self.delete_phone(number) {
                self.add_phone(number)?;
            }
        }
        Ok(())
    }

    pub fn set_birthday(&mut self, date: &str) -> Result<()> {
        match &mut self.birthday {
            Some(birthday) => birthday.set(date)?,
            None => self.birthday = Some(BirthdayDate::new(date)?),
        }
        Ok(())
    }

    pub fn days_to_next_birthday(&self) -> Result<i64> {
        self.days_to_next_birthday_on(today())
    }

    /// Days from `today` to the birthday's month/day.
    ///
    /// The date rolls into next year only when `today.month >= month` *and*
    /// `today.day > day`. A birthday earlier in the year on a later day of the
    /// month (e.g. March 25th seen on October 19th) stays in the current year
    /// and yields a negative count. Feb 29th falls on Feb 28th in common years.
    pub fn days_to_next_birthday_on(&self, today: NaiveDate) -> Result<i64> {
        let birthday = self.birthday().ok_or_else(|| {
            CbookError::Precondition("Contact doesn't have birthday value".to_string())
        })?;

        let mut year = today.year();
        if today.month() >= birthday.month() && today.day() > birthday.day() {
            year += 1;
        }
        let next = NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
            .ok_or_else(|| CbookError::Precondition(format!("No such date in {}", year)))?;

        Ok((next - today).num_days())
    }

    /// `"<name> : <phone>, <phone>"`, plus `" Birthday: <date>"` when set.
    pub fn describe(&self) -> String {
        let phones = self
            .phones
            .iter()
            .map(|p| p.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        match &self.birthday {
            Some(birthday) => format!("{} : {} Birthday: {}", self.name, phones, birthday),
            None => format!("{} : {}", self.name, phones),
        }
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
