use std::backtrace::Backtrace;

use rusqlite::Connection;

use crate::model::error::note_errors::{
    CreateNoteError, DeleteNoteError, GetNoteError, UpdateNoteError,
};
use crate::model::repository::NoteUpdate;
use crate::model::request::note_requests::{CreateNoteRequest, UpdateNoteRequest};
use crate::model::response::NoteApi;
use crate::repository::{folder_repository, note_repository, Database};
use crate::service::connect;

/// returns every note, with the name and content sanitized for the client
pub fn get_notes(db: &Database) -> Result<Vec<NoteApi>, GetNoteError> {
    let con = connect(db).ok_or(GetNoteError::DbFailure)?;
    match note_repository::get_all_notes(&con) {
        Ok(notes) => Ok(notes.into_iter().map(NoteApi::from).collect()),
        Err(e) => {
            log::error!(
                "Failed to retrieve all notes! Error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            Err(GetNoteError::DbFailure)
        }
    }
}

pub fn get_note(id: i64, db: &Database) -> Result<NoteApi, GetNoteError> {
    let con = connect(db).ok_or(GetNoteError::DbFailure)?;
    match note_repository::get_note_by_id(id, &con) {
        Ok(Some(note)) => Ok(NoteApi::from(note)),
        Ok(None) => Err(GetNoteError::NotFound),
        Err(e) => {
            log::error!(
                "Could not retrieve note with id {id}! Error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            Err(GetNoteError::DbFailure)
        }
    }
}

/// creates a note once the request has all its required fields and its folder exists.
/// The note's `modified` date is set to the current time
pub fn create_note(request: CreateNoteRequest, db: &Database) -> Result<NoteApi, CreateNoteError> {
    let note = request.validate().map_err(CreateNoteError::MissingField)?;
    let con = connect(db).ok_or(CreateNoteError::DbFailure)?;
    match folder_exists(note.folder_id, &con) {
        Ok(true) => { /* no op */ }
        Ok(false) => return Err(CreateNoteError::FolderNotFound(note.folder_id)),
        Err(()) => return Err(CreateNoteError::DbFailure),
    };
    match note_repository::create_note(&note, &con) {
        Ok(note) => {
            log::debug!("Created note {} in folder {}", note.id, note.folder_id);
            Ok(NoteApi::from(note))
        }
        Err(e) => {
            log::error!(
                "Failed to create a new note in folder {}! Error is {e:?}\n{}",
                note.folder_id,
                Backtrace::force_capture()
            );
            Err(CreateNoteError::DbFailure)
        }
    }
}

/// applies the fields present in `request` to the note; anything left out keeps its value,
/// including `modified`
pub fn update_note(
    id: i64,
    request: UpdateNoteRequest,
    db: &Database,
) -> Result<(), UpdateNoteError> {
    let con = connect(db).ok_or(UpdateNoteError::DbFailure)?;
    match note_repository::get_note_by_id(id, &con) {
        Ok(Some(_)) => { /* no op */ }
        Ok(None) => return Err(UpdateNoteError::NotFound),
        Err(e) => {
            log::error!(
                "Could not update note with id {id}! Error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            return Err(UpdateNoteError::DbFailure);
        }
    };
    let update = NoteUpdate::from(request);
    if update.is_empty() {
        return Err(UpdateNoteError::NothingToUpdate);
    }
    if let Some(folder_id) = update.folder_id {
        match folder_exists(folder_id, &con) {
            Ok(true) => { /* no op */ }
            Ok(false) => return Err(UpdateNoteError::FolderNotFound(folder_id)),
            Err(()) => return Err(UpdateNoteError::DbFailure),
        };
    }
    match note_repository::update_note(id, &update, &con) {
        // deleted between the check and the update
        Ok(0) => Err(UpdateNoteError::NotFound),
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!(
                "Could not update note with id {id}! Error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            Err(UpdateNoteError::DbFailure)
        }
    }
}

pub fn delete_note(id: i64, db: &Database) -> Result<(), DeleteNoteError> {
    let con = connect(db).ok_or(DeleteNoteError::DbFailure)?;
    match note_repository::delete_note(id, &con) {
        Ok(0) => Err(DeleteNoteError::NotFound),
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!(
                "Could not delete note with id {id}! Error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            Err(DeleteNoteError::DbFailure)
        }
    }
}

/// `Err` means the lookup itself failed, and has already been logged
fn folder_exists(folder_id: i64, con: &Connection) -> Result<bool, ()> {
    match folder_repository::get_folder_by_id(folder_id, con) {
        Ok(folder) => Ok(folder.is_some()),
        Err(e) => {
            log::error!(
                "Failed to check if folder {folder_id} exists! Error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            Err(())
        }
    }
}
