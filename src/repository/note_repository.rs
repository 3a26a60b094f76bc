use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::model::repository::{NewNote, Note, NoteUpdate};

/// returns every note in the database, in the order they were created
pub fn get_all_notes(con: &Connection) -> Result<Vec<Note>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/note/get_all_notes.sql"))?;
    let rows = pst.query_map([], map_note)?;
    let mut notes = Vec::<Note>::new();
    for note in rows {
        notes.push(note?);
    }
    Ok(notes)
}

/// returns `None` if no note has the passed id
pub fn get_note_by_id(id: i64, con: &Connection) -> Result<Option<Note>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/note/get_note_by_id.sql"))?;
    pst.query_row(params![id], map_note).optional()
}

/// creates a note record in the database and returns it with its new id.
///
/// This does not check that the folder exists; the foreign key on `folderid` will fail the insert if it doesn't
pub fn create_note(note: &NewNote, con: &Connection) -> Result<Note, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/note/create_note.sql"))?;
    let id = pst.insert(params![
        note.name,
        note.content,
        note.folder_id,
        format_date(&note.modified)
    ])?;
    Ok(Note {
        id,
        name: note.name.clone(),
        content: note.content.clone(),
        folder_id: note.folder_id,
        modified: note.modified,
    })
}

/// only sets the fields of `update` that are `Some`. Returns the number of rows changed,
/// which will be 0 if the note doesn't exist
pub fn update_note(id: i64, update: &NoteUpdate, con: &Connection) -> Result<usize, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/note/update_note.sql"))?;
    pst.execute(params![
        update.name,
        update.content,
        update.folder_id,
        update.modified.as_ref().map(format_date),
        id
    ])
}

/// returns the number of rows deleted
pub fn delete_note(id: i64, con: &Connection) -> Result<usize, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/note/delete_note.sql"))?;
    pst.execute(params![id])
}

/// dates are saved as rfc 3339 text in UTC, to the second
fn format_date(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn map_note(row: &Row) -> Result<Note, rusqlite::Error> {
    let modified: String = row.get(4)?;
    let modified = DateTime::parse_from_rfc3339(&modified)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(e)))?
        .with_timezone(&Utc);
    Ok(Note {
        id: row.get(0)?,
        name: row.get(1)?,
        content: row.get(2)?,
        folder_id: row.get(3)?,
        modified,
    })
}
