use chrono::{DateTime, SubsecRound, Utc};
use rocket::serde::{Deserialize, Serialize};

use crate::model::repository::{NewNote, NoteUpdate};

/// every field is optional so a missing one can be reported by name instead of rocket rejecting the body
#[derive(Deserialize, Serialize, Default)]
#[serde(crate = "rocket::serde")]
pub struct CreateNoteRequest {
    pub name: Option<String>,
    pub folderid: Option<i64>,
    pub content: Option<String>,
}

/// unknown fields are dropped during deserialization, so they never reach the database
#[derive(Deserialize, Serialize, Default)]
#[serde(crate = "rocket::serde")]
pub struct UpdateNoteRequest {
    pub name: Option<String>,
    pub folderid: Option<i64>,
    pub content: Option<String>,
    pub modified: Option<DateTime<Utc>>,
}

impl CreateNoteRequest {
    /// checks the required fields in order (`name`, `folderid`, `content`), and
    /// returns the name of the first one that is missing.
    ///
    /// the note's `modified` date is set to now
    pub fn validate(self) -> Result<NewNote, &'static str> {
        let name = self.name.ok_or("name")?;
        let folder_id = self.folderid.ok_or("folderid")?;
        let content = self.content.ok_or("content")?;
        Ok(NewNote {
            name,
            content,
            folder_id,
            modified: Utc::now().trunc_subsecs(0),
        })
    }
}

impl From<UpdateNoteRequest> for NoteUpdate {
    fn from(value: UpdateNoteRequest) -> Self {
        Self {
            name: value.name,
            content: value.content,
            folder_id: value.folderid,
            // the database only keeps seconds
            modified: value.modified.map(|m| m.trunc_subsecs(0)),
        }
    }
}
