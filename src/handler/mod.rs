pub mod api_handler;
pub mod folder_handler;
pub mod note_handler;
