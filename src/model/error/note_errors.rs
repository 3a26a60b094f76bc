#[derive(PartialEq, Debug)]
pub enum GetNoteError {
    NotFound,
    DbFailure,
}

#[derive(PartialEq, Debug)]
pub enum CreateNoteError {
    /// the request body is missing a required field, in the order they are checked
    MissingField(&'static str),
    /// the requested folder does not exist
    FolderNotFound(i64),
    DbFailure,
}

#[derive(PartialEq, Debug)]
pub enum UpdateNoteError {
    NotFound,
    /// the request body didn't have any fields that can be updated
    NothingToUpdate,
    /// the note was being moved to a folder that does not exist
    FolderNotFound(i64),
    DbFailure,
}

#[derive(PartialEq, Debug)]
pub enum DeleteNoteError {
    NotFound,
    DbFailure,
}
