// Infrastructure
pub mod config;
pub mod error;
pub mod metrics;

// Domain layer (business logic)
pub mod roast;

// Application layer
pub mod api;
pub mod server;
