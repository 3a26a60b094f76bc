use chrono::{DateTime, Utc};

/// a row in the `folders` table
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Folder {
    /// assigned by the database, cannot be changed
    pub id: i64,
    /// stored exactly as the client sent it. Run it through [`crate::util::sanitize`] before returning it
    pub name: String,
}

/// the columns of a folder that can be changed. `None` fields are left alone
#[derive(Debug, Default, PartialEq, Eq)]
pub struct FolderUpdate {
    pub name: Option<String>,
}

/// a row in the `notes` table
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Note {
    /// assigned by the database, cannot be changed
    pub id: i64,
    pub name: String,
    pub content: String,
    /// the folder this note lives in
    pub folder_id: i64,
    /// stored with second precision
    pub modified: DateTime<Utc>,
}

/// a note that hasn't been saved yet, so it doesn't have an id
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct NewNote {
    pub name: String,
    pub content: String,
    pub folder_id: i64,
    pub modified: DateTime<Utc>,
}

/// the columns of a note that can be changed. `None` fields are left alone
#[derive(Debug, Default, PartialEq, Eq)]
pub struct NoteUpdate {
    pub name: Option<String>,
    pub content: Option<String>,
    pub folder_id: Option<i64>,
    pub modified: Option<DateTime<Utc>>,
}

impl FolderUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
    }
}

impl NoteUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.content.is_none()
            && self.folder_id.is_none()
            && self.modified.is_none()
    }
}
