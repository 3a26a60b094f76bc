use rocket::response::status::Created;
use rocket::serde::json::Json;
use rocket::State;

use crate::model::error::note_errors::{
    CreateNoteError, DeleteNoteError, GetNoteError, UpdateNoteError,
};
use crate::model::request::note_requests::{CreateNoteRequest, UpdateNoteRequest};
use crate::model::response::note_responses::{
    CreateNoteResponse, DeleteNoteResponse, GetNoteResponse, GetNotesResponse, UpdateNoteResponse,
};
use crate::model::response::ErrorMessage;
use crate::repository::Database;
use crate::service::note_service;

static NOTE_NOT_FOUND: &str = "Note doesn't exist";

fn folder_not_found(folder_id: i64) -> Json<ErrorMessage> {
    ErrorMessage::new(format!("Folder '{folder_id}' doesn't exist").as_str())
}

#[get("/")]
pub fn get_notes(db: &State<Database>) -> GetNotesResponse {
    match note_service::get_notes(db) {
        Ok(notes) => GetNotesResponse::Success(Json::from(notes)),
        Err(_) => GetNotesResponse::NoteDbError(ErrorMessage::new(
            "Failed to pull note info from database. Check server logs for details",
        )),
    }
}

#[get("/<id>")]
pub fn get_note(id: i64, db: &State<Database>) -> GetNoteResponse {
    match note_service::get_note(id, db) {
        Ok(note) => GetNoteResponse::Success(Json::from(note)),
        Err(GetNoteError::NotFound) => GetNoteResponse::NoteNotFound(ErrorMessage::new(NOTE_NOT_FOUND)),
        Err(GetNoteError::DbFailure) => GetNoteResponse::NoteDbError(ErrorMessage::new(
            "Failed to pull note info from database. Check server logs for details",
        )),
    }
}

#[post("/", data = "<note>")]
pub fn create_note(note: Json<CreateNoteRequest>, db: &State<Database>) -> CreateNoteResponse {
    match note_service::create_note(note.into_inner(), db) {
        Ok(note) => {
            let location = uri!("/api/notes", get_note(note.id)).to_string();
            CreateNoteResponse::Success(Created::new(location).body(Json::from(note)))
        }
        Err(CreateNoteError::MissingField(field)) => {
            CreateNoteResponse::MissingField(ErrorMessage::missing_field(field))
        }
        Err(CreateNoteError::FolderNotFound(folder_id)) => {
            CreateNoteResponse::FolderNotFound(folder_not_found(folder_id))
        }
        Err(CreateNoteError::DbFailure) => CreateNoteResponse::NoteDbError(ErrorMessage::new(
            "Failed to save note to database. Check server logs for details",
        )),
    }
}

#[patch("/<id>", data = "<note>")]
pub fn update_note(
    id: i64,
    note: Json<UpdateNoteRequest>,
    db: &State<Database>,
) -> UpdateNoteResponse {
    match note_service::update_note(id, note.into_inner(), db) {
        Ok(()) => UpdateNoteResponse::Success(()),
        Err(UpdateNoteError::NotFound) => {
            UpdateNoteResponse::NoteNotFound(ErrorMessage::new(NOTE_NOT_FOUND))
        }
        Err(UpdateNoteError::NothingToUpdate) => UpdateNoteResponse::NothingToUpdate(
            ErrorMessage::new(
                "Request body must contain either 'name', 'folderid', 'content' or 'modified'",
            ),
        ),
        Err(UpdateNoteError::FolderNotFound(folder_id)) => {
            UpdateNoteResponse::FolderNotFound(folder_not_found(folder_id))
        }
        Err(UpdateNoteError::DbFailure) => UpdateNoteResponse::NoteDbError(ErrorMessage::new(
            "Failed to update note in database. Check server logs for details",
        )),
    }
}

#[delete("/<id>")]
pub fn delete_note(id: i64, db: &State<Database>) -> DeleteNoteResponse {
    match note_service::delete_note(id, db) {
        Ok(()) => DeleteNoteResponse::Success(()),
        Err(DeleteNoteError::NotFound) => {
            DeleteNoteResponse::NoteNotFound(ErrorMessage::new(NOTE_NOT_FOUND))
        }
        Err(DeleteNoteError::DbFailure) => DeleteNoteResponse::NoteDbError(ErrorMessage::new(
            "Failed to delete note from database. Check server logs for details",
        )),
    }
}
