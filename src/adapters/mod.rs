// Adapters layer: concrete implementations of the domain ports.

pub mod log_sink;

pub use log_sink::LogSink;
