use crate::config::DaynotesConfig;
use crate::date_key::DateKey;
use crate::model::MonthGroup;
use crate::store::{BlobStorage, NoteStore};
use std::path::PathBuf;

pub mod config;
pub mod note;
pub mod sheet;
pub mod view;

pub use sheet::{DayCell, MonthSheet, SheetRow};

#[derive(Debug, Clone)]
pub struct DaynotesPaths {
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub sheet: Option<MonthSheet>,
    pub month_groups: Vec<MonthGroup>,
    pub note: Option<(DateKey, String)>,
    pub config: Option<DaynotesConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_sheet(mut self, sheet: MonthSheet) -> Self {
        self.sheet = Some(sheet);
        self
    }

    pub fn with_month_groups(mut self, groups: Vec<MonthGroup>) -> Self {
        self.month_groups = groups;
        self
    }

    pub fn with_note(mut self, key: DateKey, text: String) -> Self {
        self.note = Some((key, text));
        self
    }

    pub fn with_config(mut self, config: DaynotesConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// Warn when the stored blob could not be read and the session started empty.
fn load_warning<S: BlobStorage>(store: &NoteStore<S>) -> Option<CmdMessage> {
    store.load_warning().map(|reason| {
        CmdMessage::warning(format!("{}; starting with no notes", reason))
    })
}

/// One edit to apply: blank `text` clears the day.
#[derive(Debug, Clone)]
pub struct NoteUpdate {
    pub key: DateKey,
    pub text: String,
}

impl NoteUpdate {
    pub fn new(key: DateKey, text: impl Into<String>) -> Self {
        Self {
            key,
            text: text.into(),
        }
    }

    pub fn clear(key: DateKey) -> Self {
        Self::new(key, String::new())
    }
}
