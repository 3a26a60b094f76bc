use std::fs::remove_file;
use std::path::Path;

use chrono::{SubsecRound, Utc};
use rocket::local::blocking::Client;

use crate::build_rocket;
use crate::model::repository::{NewNote, Note};
use crate::repository::{folder_repository, note_repository, Database};

mod api_handler_tests;

/// the text every sanitization test sends
pub static MALICIOUS_TEXT: &str = "bad <script>alert('xss');</script>";
/// what [`MALICIOUS_TEXT`] should look like when it comes back to the client
pub static SANITIZED_TEXT: &str = "bad &lt;script&gt;alert('xss');&lt;/script&gt;";

/// each test thread gets its own database file, so tests can run in parallel
pub fn current_thread_name() -> String {
    let current_thread = std::thread::current();
    current_thread.name().unwrap().to_string()
}

pub fn db_name() -> String {
    format!("{}.sqlite", current_thread_name())
}

/// deletes this thread's database and creates a fresh one
pub fn refresh_db() -> Database {
    remove_file(Path::new(db_name().as_str())).unwrap_or(());
    let db = Database::new(db_name());
    db.initialize().unwrap();
    db
}

pub fn client() -> Client {
    Client::tracked(build_rocket(Database::new(db_name()))).unwrap()
}

pub fn create_folder_db_entry(name: &str) -> i64 {
    let connection = Database::new(db_name()).open_connection().unwrap();
    folder_repository::create_folder(name, &connection)
        .unwrap()
        .id
}

pub fn create_note_db_entry(name: &str, content: &str, folder_id: i64) -> Note {
    let connection = Database::new(db_name()).open_connection().unwrap();
    note_repository::create_note(
        &NewNote {
            name: name.to_string(),
            content: content.to_string(),
            folder_id,
            modified: Utc::now().trunc_subsecs(0),
        },
        &connection,
    )
    .unwrap()
}

pub fn cleanup() {
    remove_file(Path::new(db_name().as_str())).unwrap_or(());
}
