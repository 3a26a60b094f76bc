use rocket::response::status::Created;
use rocket::serde::json::Json;
use rocket::State;

use crate::model::error::folder_errors::{
    CreateFolderError, DeleteFolderError, GetFolderError, UpdateFolderError,
};
use crate::model::request::folder_requests::{CreateFolderRequest, UpdateFolderRequest};
use crate::model::response::folder_responses::{
    CreateFolderResponse, DeleteFolderResponse, GetFolderResponse, GetFoldersResponse,
    UpdateFolderResponse,
};
use crate::model::response::ErrorMessage;
use crate::repository::Database;
use crate::service::folder_service;

static FOLDER_NOT_FOUND: &str = "Folder doesn't exist";

#[get("/")]
pub fn get_folders(db: &State<Database>) -> GetFoldersResponse {
    match folder_service::get_folders(db) {
        Ok(folders) => GetFoldersResponse::Success(Json::from(folders)),
        Err(_) => GetFoldersResponse::FolderDbError(ErrorMessage::new(
            "Failed to pull folder info from database. Check server logs for details",
        )),
    }
}

#[get("/<id>")]
pub fn get_folder(id: i64, db: &State<Database>) -> GetFolderResponse {
    match folder_service::get_folder(id, db) {
        Ok(folder) => GetFolderResponse::Success(Json::from(folder)),
        Err(GetFolderError::NotFound) => {
            GetFolderResponse::FolderNotFound(ErrorMessage::new(FOLDER_NOT_FOUND))
        }
        Err(GetFolderError::DbFailure) => GetFolderResponse::FolderDbError(ErrorMessage::new(
            "Failed to pull folder info from database. Check server logs for details",
        )),
    }
}

#[post("/", data = "<folder>")]
pub fn create_folder(
    folder: Json<CreateFolderRequest>,
    db: &State<Database>,
) -> CreateFolderResponse {
    match folder_service::create_folder(folder.into_inner(), db) {
        Ok(folder) => {
            let location = uri!("/api/folders", get_folder(folder.id)).to_string();
            CreateFolderResponse::Success(Created::new(location).body(Json::from(folder)))
        }
        Err(CreateFolderError::MissingField(field)) => {
            CreateFolderResponse::MissingField(ErrorMessage::missing_field(field))
        }
        Err(CreateFolderError::DbFailure) => CreateFolderResponse::FolderDbError(
            ErrorMessage::new("Failed to save folder to database. Check server logs for details"),
        ),
    }
}

#[patch("/<id>", data = "<folder>")]
pub fn update_folder(
    id: i64,
    folder: Json<UpdateFolderRequest>,
    db: &State<Database>,
) -> UpdateFolderResponse {
    match folder_service::update_folder(id, folder.into_inner(), db) {
        Ok(()) => UpdateFolderResponse::Success(()),
        Err(UpdateFolderError::NotFound) => {
            UpdateFolderResponse::FolderNotFound(ErrorMessage::new(FOLDER_NOT_FOUND))
        }
        Err(UpdateFolderError::NothingToUpdate) => UpdateFolderResponse::NothingToUpdate(
            ErrorMessage::new("Request body must contain 'name'"),
        ),
        Err(UpdateFolderError::DbFailure) => UpdateFolderResponse::FolderDbError(
            ErrorMessage::new("Failed to update folder in database. Check server logs for details"),
        ),
    }
}

#[delete("/<id>")]
pub fn delete_folder(id: i64, db: &State<Database>) -> DeleteFolderResponse {
    match folder_service::delete_folder(id, db) {
        Ok(()) => DeleteFolderResponse::Success(()),
        Err(DeleteFolderError::NotFound) => {
            DeleteFolderResponse::FolderNotFound(ErrorMessage::new(FOLDER_NOT_FOUND))
        }
        Err(DeleteFolderError::DbFailure) => DeleteFolderResponse::FolderDbError(
            ErrorMessage::new("Failed to delete folder from database. Check server logs for details"),
        ),
    }
}
