pub mod error;

pub use error::{AppError, EXPIRED_CODE, EXPIRED_MESSAGE};
