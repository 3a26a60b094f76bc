use std::path::{Path, PathBuf};
use std::time::Duration;

use rusqlite::{Connection, OpenFlags, Result};

pub mod folder_repository;
pub mod metadata_repository;
pub mod note_repository;

#[cfg(test)]
mod tests;

/// how long a connection waits on another connection's write lock before giving up
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// The single handle to the database, constructed at startup and handed to rocket as managed state.
///
/// Each service call opens its own short-lived connection from this; sqlite takes care of
/// serializing writes between them
#[derive(Debug, Clone)]
pub struct Database {
    location: PathBuf,
}

impl Database {
    pub fn new(location: impl Into<PathBuf>) -> Database {
        Database {
            location: location.into(),
        }
    }

    pub fn location(&self) -> &Path {
        &self.location
    }

    /// opens a new connection with foreign keys enforced
    pub fn open_connection(&self) -> Result<Connection> {
        let con = Connection::open_with_flags(&self.location, OpenFlags::default())?;
        con.pragma_update(None, "foreign_keys", true)?;
        con.busy_timeout(BUSY_TIMEOUT)?;
        Ok(con)
    }

    /// creates the tables if the database hasn't been set up yet
    pub fn initialize(&self) -> Result<()> {
        let con = self.open_connection()?;
        match metadata_repository::get_version(&con) {
            Ok(version) => log::info!(
                "Using database at {} (v{version})",
                self.location.display()
            ),
            // tables haven't been created yet
            Err(_) => {
                log::info!("Creating database at {}...", self.location.display());
                create_db(&con)?;
            }
        };
        Ok(())
    }
}

/// runs init.sql on the database
fn create_db(con: &Connection) -> Result<()> {
    con.execute_batch(include_str!("../assets/init.sql"))
}
