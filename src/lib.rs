pub mod adapters;
pub mod config;
pub mod domain;
pub mod server;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliArgs;

pub use adapters::LogSink;
pub use config::{LogFormat, ServerConfig};
pub use domain::model::{Ack, ContactSubmission};
pub use domain::ports::ContactSink;
pub use server::{create_router, AppState, ContactServer};
pub use utils::error::{ContactError, Result};
