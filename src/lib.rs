pub mod clipboard;
pub mod config;
pub mod controller;
pub mod error;
pub mod logger;
pub mod mode;
pub mod parser;
pub mod prompt;
pub mod remote;
pub mod render;
pub mod ui;

pub use config::{Config, API_PROXY_PATH};
pub use controller::{Completion, Controller, Submission};
pub use error::{ClipboardError, RemoteError, ValidationError};
pub use mode::{Mode, ModeController};
pub use parser::{split_sections, Sections};
pub use prompt::{build_prompt, TranslationRequest};
pub use remote::ProxyClient;
