//! The month sheet: every day of a month laid out in two side-by-side halves,
//! each day with its key, weekday and current note.
//!
//! For a month of `n` days the left half holds days `1..=n/2` and the right
//! half the rest, so the right column is never shorter than the left. Rows
//! pair day `i` with day `n/2 + i`; when the halves differ in length the last
//! row has an empty left cell.

use crate::commands::CmdResult;
use crate::date_key::{self, DateKey, Weekday};
use crate::error::{DaynotesError, Result};
use crate::store::{BlobStorage, NoteStore};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCell {
    pub key: DateKey,
    pub day: u32,
    pub weekday: Weekday,
    pub note: String,
}

impl DayCell {
    pub fn is_sunday(&self) -> bool {
        self.weekday == Weekday::Sunday
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SheetRow {
    pub left: Option<DayCell>,
    pub right: Option<DayCell>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthSheet {
    pub label: String,
    pub year: i32,
    pub month_index: u32,
    pub rows: Vec<SheetRow>,
}

impl MonthSheet {
    /// All cells in day order.
    pub fn days(&self) -> impl Iterator<Item = &DayCell> {
        let left = self.rows.iter().filter_map(|r| r.left.as_ref());
        let right = self.rows.iter().filter_map(|r| r.right.as_ref());
        left.chain(right)
    }
}

pub fn build<S: BlobStorage>(
    store: &NoteStore<S>,
    year: i32,
    month_index: u32,
) -> Result<MonthSheet> {
    let days_in_month = date_key::days_in_month(year, month_index);
    if days_in_month == 0 || year < 0 {
        return Err(DaynotesError::InvalidDate {
            year,
            month_index,
            day: 1,
        });
    }

    let cell = |day: u32| -> Result<DayCell> {
        let key = date_key::encode(year, month_index, day)?;
        Ok(DayCell {
            note: store.get_note(&key).to_string(),
            weekday: key.weekday(),
            key,
            day,
        })
    };

    let first_half = days_in_month / 2;
    let second_half = days_in_month - first_half;
    let mut rows = Vec::with_capacity(second_half as usize);

    for i in 0..second_half {
        let left = if i < first_half {
            Some(cell(i + 1)?)
        } else {
            None
        };
        let right = Some(cell(first_half + i + 1)?);
        rows.push(SheetRow { left, right });
    }

    Ok(MonthSheet {
        label: date_key::month_label(year, month_index),
        year,
        month_index,
        rows,
    })
}

pub fn run<S: BlobStorage>(store: &NoteStore<S>, year: i32, month_index: u32) -> Result<CmdResult> {
    let sheet = build(store, year, month_index)?;
    Ok(CmdResult::default().with_sheet(sheet))
}
