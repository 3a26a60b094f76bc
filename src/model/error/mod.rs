pub mod folder_errors;
pub mod note_errors;
