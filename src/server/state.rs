use std::sync::Arc;
use std::time::Instant;

use crate::config::Settings;
use crate::roast::{RoastResolver, RoastStats, TemplateStore};

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub resolver: RoastResolver,
    pub stats: Arc<RoastStats>,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: Arc::new(settings),
            resolver: RoastResolver::new(TemplateStore::builtin()),
            stats: Arc::new(RoastStats::new()),
            start_time: Instant::now(),
        }
    }

    pub fn templates(&self) -> &TemplateStore {
        self.resolver.store()
    }
}
