//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every daynotes operation, whichever UI drives it.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns** the session's [`NoteStore`]
//! - **Normalizes inputs** (date arguments -> [`DateKey`], 1-based months -> month indexes)
//! - **Dispatches** to the appropriate command function
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It never prints and holds no business logic of its own.
//!
//! ## Generic Over BlobStorage
//!
//! `DaynotesApi<S: BlobStorage>` is generic over where the notes blob lives:
//! - Production: `DaynotesApi<FileStorage>`
//! - Testing: `DaynotesApi<MemStorage>`

use crate::commands;
use crate::date_key::{self, DateKey};
use crate::error::{DaynotesError, Result};
use crate::store::{BlobStorage, NoteStore};
use chrono::{Datelike, Local, NaiveDate};

pub struct DaynotesApi<S: BlobStorage> {
    store: NoteStore<S>,
    paths: commands::DaynotesPaths,
}

impl<S: BlobStorage> DaynotesApi<S> {
    pub fn new(store: NoteStore<S>, paths: commands::DaynotesPaths) -> Self {
        Self { store, paths }
    }

    /// Sheet for a calendar month, `month` being 1-based as users write it.
    pub fn month_sheet(&self, year: i32, month: u32) -> Result<commands::CmdResult> {
        let month_index = month_index_from_calendar(month)?;
        commands::sheet::run(&self.store, year, month_index)
    }

    pub fn get_note(&self, date: &str) -> Result<commands::CmdResult> {
        let key = parse_date_arg(date)?;
        commands::note::get(&self.store, &key)
    }

    pub fn set_note(&mut self, date: &str, text: &str) -> Result<commands::CmdResult> {
        let key = parse_date_arg(date)?;
        commands::note::set(&mut self.store, &[commands::NoteUpdate::new(key, text)])
    }

    pub fn clear_notes<I: AsRef<str>>(&mut self, dates: &[I]) -> Result<commands::CmdResult> {
        let updates = dates
            .iter()
            .map(|d| parse_date_arg(d.as_ref()).map(commands::NoteUpdate::clear))
            .collect::<Result<Vec<_>>>()?;
        commands::note::set(&mut self.store, &updates)
    }

    pub fn saved_notes(&self) -> Result<commands::CmdResult> {
        commands::view::run(&self.store)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn store(&self) -> &NoteStore<S> {
        &self.store
    }

    pub fn paths(&self) -> &commands::DaynotesPaths {
        &self.paths
    }
}

fn month_index_from_calendar(month: u32) -> Result<u32> {
    if (1..=12).contains(&month) {
        Ok(month - 1)
    } else {
        Err(DaynotesError::Api(format!(
            "Month must be between 1 and 12, got {}",
            month
        )))
    }
}

/// Parse a user-supplied date: `DD/MM/YYYY` (padding optional) or `today`.
pub fn parse_date_arg(input: &str) -> Result<DateKey> {
    let input = input.trim();
    if input.eq_ignore_ascii_case("today") {
        return key_for_date(Local::now().date_naive());
    }
    input.parse()
}

fn key_for_date(date: NaiveDate) -> Result<DateKey> {
    date_key::encode(date.year(), date.month0(), date.day())
}

/// Current `(year, month)` on the host's local calendar, month 1-based.
pub fn current_month() -> (i32, u32) {
    let today = Local::now().date_naive();
    (today.year(), today.month())
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
