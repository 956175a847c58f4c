// Library surface for hosts embedding the typing engine and for integration tests.
pub mod analytics;
pub mod app_dirs;
pub mod clock;
pub mod config;
pub mod error;
pub mod history;
pub mod language;
pub mod logging;
pub mod metrics;
pub mod session;
pub mod stats;
pub mod time_series;
pub mod typing_policy;
pub mod util;
pub mod word;
pub mod word_generator;

pub use error::{Error, Result};
pub use metrics::SessionResult;
pub use session::{SessionConfig, TestState, TypingSession};
pub use word::WordUnit;
pub use word_generator::TextGenerator;
