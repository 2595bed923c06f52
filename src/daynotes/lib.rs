//! # Daynotes Architecture
//!
//! Daynotes keeps a short note against any calendar day. It is a **UI-agnostic
//! library** with a terminal client on top; the month sheet and the saved-notes
//! view are just two ways of rendering what the library returns.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the NoteStore for the session                       │
//! │  - Normalizes inputs (date strings → DateKeys)              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Month sheet, note edits, grouped view, config            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - NoteStore over the BlobStorage port                      │
//! │  - FileStorage (production), MemStorage (testing)           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Date Keys
//!
//! Each day is addressed by a `DD/MM/YYYY` [`date_key::DateKey`]. The codec is
//! pure calendar arithmetic (proleptic Gregorian), independent of locale and
//! timezone, and round-trips: decoding an encoded day gives the same day back.
//!
//! ## Save Semantics
//!
//! Edits only change the in-memory collection. Nothing is written until an
//! explicit save, which replaces the stored blob in full. Blank text deletes
//! a day's note instead of storing an empty string.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage port, implementations and the `NoteStore`
//! - [`date_key`]: Day keys, month lengths, weekday and month names
//! - [`model`]: `NoteCollection`, `NoteEntry`, `MonthGroup`
//! - [`config`]: Configuration management
//! - [`logging`]: stderr logging bootstrap
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod date_key;
pub mod error;
pub mod init;
pub mod logging;
pub mod model;
pub mod store;
