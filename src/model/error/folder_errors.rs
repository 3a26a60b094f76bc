#[derive(PartialEq, Debug)]
pub enum GetFolderError {
    NotFound,
    DbFailure,
}

#[derive(PartialEq, Debug)]
pub enum CreateFolderError {
    /// the request body is missing a required field, in the order they are checked
    MissingField(&'static str),
    /// the database failed to save the folder
    DbFailure,
}

#[derive(PartialEq, Debug)]
pub enum UpdateFolderError {
    /// The folder could not be found
    NotFound,
    /// the request body didn't have any fields that can be updated
    NothingToUpdate,
    /// the database failed to update the folder
    DbFailure,
}

#[derive(PartialEq, Debug)]
pub enum DeleteFolderError {
    /// folder not in the repository
    NotFound,
    /// database could not execute the query
    DbFailure,
}
