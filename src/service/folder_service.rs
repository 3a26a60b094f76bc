use std::backtrace::Backtrace;

use crate::model::error::folder_errors::{
    CreateFolderError, DeleteFolderError, GetFolderError, UpdateFolderError,
};
use crate::model::repository::FolderUpdate;
use crate::model::request::folder_requests::{CreateFolderRequest, UpdateFolderRequest};
use crate::model::response::FolderApi;
use crate::repository::{folder_repository, Database};
use crate::service::connect;

/// returns every folder, with names sanitized for the client
pub fn get_folders(db: &Database) -> Result<Vec<FolderApi>, GetFolderError> {
    let con = connect(db).ok_or(GetFolderError::DbFailure)?;
    match folder_repository::get_all_folders(&con) {
        Ok(folders) => Ok(folders.into_iter().map(FolderApi::from).collect()),
        Err(e) => {
            log::error!(
                "Failed to retrieve all folders! Error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            Err(GetFolderError::DbFailure)
        }
    }
}

pub fn get_folder(id: i64, db: &Database) -> Result<FolderApi, GetFolderError> {
    let con = connect(db).ok_or(GetFolderError::DbFailure)?;
    match folder_repository::get_folder_by_id(id, &con) {
        Ok(Some(folder)) => Ok(FolderApi::from(folder)),
        Ok(None) => Err(GetFolderError::NotFound),
        Err(e) => {
            log::error!(
                "Could not retrieve folder with id {id}! Error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            Err(GetFolderError::DbFailure)
        }
    }
}

/// creates a folder after making sure the request has a name, and returns it sanitized
pub fn create_folder(
    request: CreateFolderRequest,
    db: &Database,
) -> Result<FolderApi, CreateFolderError> {
    let name = request.validate().map_err(CreateFolderError::MissingField)?;
    let con = connect(db).ok_or(CreateFolderError::DbFailure)?;
    match folder_repository::create_folder(&name, &con) {
        Ok(folder) => {
            log::debug!("Created folder {}", folder.id);
            Ok(FolderApi::from(folder))
        }
        Err(e) => {
            log::error!(
                "Failed to create a new folder! Error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            Err(CreateFolderError::DbFailure)
        }
    }
}

/// applies the fields present in `request` to the folder; anything left out keeps its value
pub fn update_folder(
    id: i64,
    request: UpdateFolderRequest,
    db: &Database,
) -> Result<(), UpdateFolderError> {
    let con = connect(db).ok_or(UpdateFolderError::DbFailure)?;
    match folder_repository::get_folder_by_id(id, &con) {
        Ok(Some(_)) => { /* no op */ }
        Ok(None) => return Err(UpdateFolderError::NotFound),
        Err(e) => {
            log::error!(
                "Could not update folder with id {id}! Error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            return Err(UpdateFolderError::DbFailure);
        }
    };
    let update = FolderUpdate::from(request);
    if update.is_empty() {
        return Err(UpdateFolderError::NothingToUpdate);
    }
    match folder_repository::update_folder(id, &update, &con) {
        // deleted between the check and the update
        Ok(0) => Err(UpdateFolderError::NotFound),
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!(
                "Could not update folder with id {id}! Error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            Err(UpdateFolderError::DbFailure)
        }
    }
}

/// deletes the folder with the passed id. Any notes inside it are deleted by the database
pub fn delete_folder(id: i64, db: &Database) -> Result<(), DeleteFolderError> {
    let con = connect(db).ok_or(DeleteFolderError::DbFailure)?;
    match folder_repository::delete_folder(id, &con) {
        Ok(0) => Err(DeleteFolderError::NotFound),
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!(
                "Could not delete folder with id {id}! Error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            Err(DeleteFolderError::DbFailure)
        }
    }
}
