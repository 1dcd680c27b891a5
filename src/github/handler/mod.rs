pub mod file_handler;
pub mod repository_handler;
