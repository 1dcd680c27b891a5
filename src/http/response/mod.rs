mod sha_response;
mod state;
mod upsert_file_response;
mod user_response;

pub use sha_response::FileShaResponse;
pub use state::Response;
pub use upsert_file_response::UpsertFileResponse;
pub use user_response::AuthenticatedUserResponse;
