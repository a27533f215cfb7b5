mod delay;
mod random_source;
mod repository_error;
mod session_repository;

pub use delay::Delay;
pub use random_source::RandomSource;
pub use repository_error::RepositoryError;
pub use session_repository::{AppliedEvent, SessionRepository};
