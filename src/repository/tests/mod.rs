mod folder_repository_tests;
mod note_repository_tests;
