use rocket::response::status::Created;
use rocket::serde::json::Json;

use crate::model::response::{ErrorMessage, FolderApi};

pub type NoContent = ();

#[derive(Responder)]
pub enum GetFoldersResponse {
    #[response(status = 200, content_type = "json")]
    Success(Json<Vec<FolderApi>>),
    #[response(status = 500, content_type = "json")]
    FolderDbError(Json<ErrorMessage>),
}

#[derive(Responder)]
pub enum GetFolderResponse {
    #[response(status = 200, content_type = "json")]
    Success(Json<FolderApi>),
    #[response(status = 404, content_type = "json")]
    FolderNotFound(Json<ErrorMessage>),
    #[response(status = 500, content_type = "json")]
    FolderDbError(Json<ErrorMessage>),
}

#[derive(Responder)]
pub enum CreateFolderResponse {
    /// 201, with the `Location` header pointing to the new folder
    Success(Created<Json<FolderApi>>),
    #[response(status = 400, content_type = "json")]
    MissingField(Json<ErrorMessage>),
    #[response(status = 500, content_type = "json")]
    FolderDbError(Json<ErrorMessage>),
}

#[derive(Responder)]
pub enum UpdateFolderResponse {
    /// clients rely on 201 here instead of 200
    #[response(status = 201)]
    Success(NoContent),
    #[response(status = 400, content_type = "json")]
    NothingToUpdate(Json<ErrorMessage>),
    #[response(status = 404, content_type = "json")]
    FolderNotFound(Json<ErrorMessage>),
    #[response(status = 500, content_type = "json")]
    FolderDbError(Json<ErrorMessage>),
}

#[derive(Responder)]
pub enum DeleteFolderResponse {
    #[response(status = 204)]
    Success(NoContent),
    #[response(status = 404, content_type = "json")]
    FolderNotFound(Json<ErrorMessage>),
    #[response(status = 500, content_type = "json")]
    FolderDbError(Json<ErrorMessage>),
}
