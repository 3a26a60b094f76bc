use rocket::serde::{Deserialize, Serialize};

use crate::model::repository::FolderUpdate;

/// every field is optional so a missing one can be reported by name instead of rocket rejecting the body
#[derive(Deserialize, Serialize, Default)]
#[serde(crate = "rocket::serde")]
pub struct CreateFolderRequest {
    pub name: Option<String>,
}

/// unknown fields are dropped during deserialization, so they never reach the database
#[derive(Deserialize, Serialize, Default)]
#[serde(crate = "rocket::serde")]
pub struct UpdateFolderRequest {
    pub name: Option<String>,
}

impl CreateFolderRequest {
    /// returns the folder name, or the name of the first required field that is missing
    pub fn validate(self) -> Result<String, &'static str> {
        self.name.ok_or("name")
    }
}

impl From<UpdateFolderRequest> for FolderUpdate {
    fn from(value: UpdateFolderRequest) -> Self {
        Self { name: value.name }
    }
}
