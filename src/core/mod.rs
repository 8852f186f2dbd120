//! Core logger types and traits

pub mod attr;
pub mod context;
pub mod default_logger;
pub mod error;
pub mod handler;
pub mod log_level;
pub mod logger;
pub mod options;
pub mod record;
pub mod timestamp;

pub use attr::{Attr, FieldValue, LEVEL_KEY, MESSAGE_KEY, SOURCE_KEY, TIME_KEY};
pub use context::{Context, TracingContext};
pub use default_logger::{default_logger, set_default_logger};
pub use error::{LoggerError, Result};
pub use handler::Handler;
pub use log_level::{enabled, LogLevel, LEVEL_STEP};
pub use logger::{Logger, LoggerBuilder};
pub use options::{HandlerOptions, OutputFormat};
pub use record::Record;
pub use timestamp::TimestampFormat;
