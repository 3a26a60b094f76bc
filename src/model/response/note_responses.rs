use rocket::response::status::Created;
use rocket::serde::json::Json;

use crate::model::response::{ErrorMessage, NoteApi};

pub type NoContent = ();

#[derive(Responder)]
pub enum GetNotesResponse {
    #[response(status = 200, content_type = "json")]
    Success(Json<Vec<NoteApi>>),
    #[response(status = 500, content_type = "json")]
    NoteDbError(Json<ErrorMessage>),
}

#[derive(Responder)]
pub enum GetNoteResponse {
    #[response(status = 200, content_type = "json")]
    Success(Json<NoteApi>),
    #[response(status = 404, content_type = "json")]
    NoteNotFound(Json<ErrorMessage>),
    #[response(status = 500, content_type = "json")]
    NoteDbError(Json<ErrorMessage>),
}

#[derive(Responder)]
pub enum CreateNoteResponse {
    /// 201, with the `Location` header pointing to the new note
    Success(Created<Json<NoteApi>>),
    #[response(status = 400, content_type = "json")]
    MissingField(Json<ErrorMessage>),
    /// the `folderid` in the request doesn't point to a folder
    #[response(status = 400, content_type = "json")]
    FolderNotFound(Json<ErrorMessage>),
    #[response(status = 500, content_type = "json")]
    NoteDbError(Json<ErrorMessage>),
}

#[derive(Responder)]
pub enum UpdateNoteResponse {
    /// clients rely on 201 here instead of 200
    #[response(status = 201)]
    Success(NoContent),
    #[response(status = 400, content_type = "json")]
    NothingToUpdate(Json<ErrorMessage>),
    #[response(status = 400, content_type = "json")]
    FolderNotFound(Json<ErrorMessage>),
    #[response(status = 404, content_type = "json")]
    NoteNotFound(Json<ErrorMessage>),
    #[response(status = 500, content_type = "json")]
    NoteDbError(Json<ErrorMessage>),
}

#[derive(Responder)]
pub enum DeleteNoteResponse {
    #[response(status = 204)]
    Success(NoContent),
    #[response(status = 404, content_type = "json")]
    NoteNotFound(Json<ErrorMessage>),
    #[response(status = 500, content_type = "json")]
    NoteDbError(Json<ErrorMessage>),
}
