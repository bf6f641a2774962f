pub mod error;
pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use error::SpeechError;
pub use models::*;
pub use router::*;
