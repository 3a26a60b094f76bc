use chrono::SecondsFormat;
use rocket::serde::json::Json;
use rocket::serde::{Deserialize, Serialize};

use crate::model::repository;
use crate::util::sanitize;

pub mod folder_responses;
pub mod note_responses;

/// represents a basic json message
#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct BasicMessage {
    pub message: String,
}

/// the body of every error response: `{"error": {"message": "..."}}`
#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct ErrorMessage {
    pub error: BasicMessage,
}

/// a folder as it's sent to clients. The name is always html-escaped
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(crate = "rocket::serde")]
pub struct FolderApi {
    pub id: i64,
    pub name: String,
}

/// a note as it's sent to clients. The name and content are always html-escaped
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(crate = "rocket::serde")]
pub struct NoteApi {
    pub id: i64,
    pub name: String,
    pub content: String,
    pub folderid: i64,
    /// rfc 3339 in UTC, e.g. `2024-03-01T17:30:00Z`
    pub modified: String,
}

// ----------------------------------

impl ErrorMessage {
    pub fn new(message: &str) -> Json<ErrorMessage> {
        Json::from(ErrorMessage::from(message))
    }

    pub fn missing_field(field: &str) -> Json<ErrorMessage> {
        Self::new(format!("Missing '{field}' in request body").as_str())
    }
}

impl From<&str> for ErrorMessage {
    fn from(value: &str) -> Self {
        Self {
            error: BasicMessage {
                message: value.to_string(),
            },
        }
    }
}

impl From<repository::Folder> for FolderApi {
    fn from(value: repository::Folder) -> Self {
        Self {
            id: value.id,
            name: sanitize(&value.name),
        }
    }
}

impl From<repository::Note> for NoteApi {
    fn from(value: repository::Note) -> Self {
        Self {
            id: value.id,
            name: sanitize(&value.name),
            content: sanitize(&value.content),
            folderid: value.folder_id,
            modified: value.modified.to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}
