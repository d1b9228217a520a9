//! Daily note generation.
//!
//! Daily notes have:
//! - Date-based identity, file name `YYYY-MM-DD.md`
//! - Cross links to the previous day and the ISO week note
//! - Empty score fields and reflection sections for later updates

pub mod date;
pub mod template;

pub use date::{DailyDate, NOTE_EXTENSION};
pub use template::{DAILY_TAG, GeneratedNote, TemplateError, TemplateGenerator};
