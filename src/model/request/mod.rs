pub mod folder_requests;
pub mod note_requests;
