use chrono::{TimeZone, Utc};

use crate::model::repository::{NewNote, Note, NoteUpdate};
use crate::repository::folder_repository::create_folder;
use crate::repository::note_repository::*;
use crate::test::{cleanup, refresh_db};

fn new_note(folder_id: i64) -> NewNote {
    NewNote {
        name: "note".to_string(),
        content: "content".to_string(),
        folder_id,
        modified: Utc.with_ymd_and_hms(2024, 3, 1, 17, 30, 0).unwrap(),
    }
}

#[test]
fn create_note_round_trips_modified() {
    let con = refresh_db().open_connection().unwrap();
    let folder = create_folder("folder", &con).unwrap();
    let created = create_note(&new_note(folder.id), &con).unwrap();
    let retrieved = get_note_by_id(created.id, &con).unwrap().unwrap();
    assert_eq!(retrieved, created);
    assert_eq!(
        retrieved.modified,
        Utc.with_ymd_and_hms(2024, 3, 1, 17, 30, 0).unwrap()
    );
    cleanup();
}

#[test]
fn create_note_fails_for_missing_folder() {
    let con = refresh_db().open_connection().unwrap();
    let res = create_note(&new_note(42), &con);
    assert!(res.is_err());
    assert!(get_all_notes(&con).unwrap().is_empty());
    cleanup();
}

#[test]
fn get_all_notes_in_creation_order() {
    let con = refresh_db().open_connection().unwrap();
    let folder = create_folder("folder", &con).unwrap();
    let first = create_note(&new_note(folder.id), &con).unwrap();
    let second = create_note(&new_note(folder.id), &con).unwrap();
    assert_eq!(get_all_notes(&con).unwrap(), vec![first, second]);
    cleanup();
}

#[test]
fn update_note_only_changes_passed_fields() {
    let con = refresh_db().open_connection().unwrap();
    let folder = create_folder("folder", &con).unwrap();
    let created = create_note(&new_note(folder.id), &con).unwrap();
    let update = NoteUpdate {
        content: Some("new content".to_string()),
        ..NoteUpdate::default()
    };
    assert_eq!(update_note(created.id, &update, &con).unwrap(), 1);
    let retrieved = get_note_by_id(created.id, &con).unwrap().unwrap();
    assert_eq!(
        retrieved,
        Note {
            content: "new content".to_string(),
            ..created
        }
    );
    cleanup();
}

#[test]
fn update_note_missing_returns_0() {
    let con = refresh_db().open_connection().unwrap();
    let update = NoteUpdate {
        name: Some("name".to_string()),
        ..NoteUpdate::default()
    };
    assert_eq!(update_note(42, &update, &con).unwrap(), 0);
    cleanup();
}

#[test]
fn deleting_folder_cascades_to_notes() {
    let con = refresh_db().open_connection().unwrap();
    let folder = create_folder("folder", &con).unwrap();
    let note = create_note(&new_note(folder.id), &con).unwrap();
    crate::repository::folder_repository::delete_folder(folder.id, &con).unwrap();
    assert_eq!(get_note_by_id(note.id, &con).unwrap(), None);
    cleanup();
}

#[test]
fn delete_note_returns_rows_deleted() {
    let con = refresh_db().open_connection().unwrap();
    let folder = create_folder("folder", &con).unwrap();
    let note = create_note(&new_note(folder.id), &con).unwrap();
    assert_eq!(delete_note(note.id, &con).unwrap(), 1);
    assert_eq!(delete_note(note.id, &con).unwrap(), 0);
    cleanup();
}
