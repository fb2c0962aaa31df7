mod settings;

pub use settings::{RoastConfig, ServerConfig, Settings};
