//! Roast generation.
//!
//! This module provides:
//! - A fixed store of roast templates with a `{name}` placeholder
//! - A resolver that picks a template at random and substitutes a name
//! - A delayed variant that emulates "thinking" time before answering
//!
//! # Example
//!
//! ```ignore
//! let resolver = RoastResolver::default();
//!
//! // Immediate
//! let roast = resolver.resolve("  Bob  ");
//! assert!(roast.contains("Bob"));
//!
//! // With the default two second pause
//! let roast = resolver.resolve_with_delay("Bob", DEFAULT_THINKING_DELAY).await;
//! ```

mod category;
mod names;
mod resolver;
mod stats;
mod templates;

pub use category::RoastCategory;
pub use names::{random_name, RANDOM_NAMES};
pub use resolver::{
    resolve, resolve_with_delay, trim_name, RoastResolver, DEFAULT_THINKING_DELAY,
    FALLBACK_MESSAGE,
};
pub use stats::{RoastStats, RoastStatsSnapshot};
pub use templates::{TemplateStore, PLACEHOLDER, ROAST_TEMPLATES};
