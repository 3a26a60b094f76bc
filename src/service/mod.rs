use std::backtrace::Backtrace;

use rusqlite::Connection;

use crate::repository::Database;

pub mod folder_service;
pub mod note_service;

/// returns `None` (after logging why) if the database can't be opened
pub fn connect(db: &Database) -> Option<Connection> {
    match db.open_connection() {
        Ok(con) => Some(con),
        Err(e) => {
            log::error!(
                "Failed to get a connection to the database at {}! Error is {e:?}\n{}",
                db.location().display(),
                Backtrace::force_capture()
            );
            None
        }
    }
}
