use std::time::Duration;

use rand::Rng;

use super::templates::TemplateStore;

/// Returned when no usable name was supplied
pub const FALLBACK_MESSAGE: &str =
    "Enter a name first, genius! Even I need something to work with! 😏";

/// Default "thinking" pause before a delayed roast is delivered
pub const DEFAULT_THINKING_DELAY: Duration = Duration::from_millis(2000);

/// Strip surrounding whitespace and byte order marks from a caller-supplied name
pub fn trim_name(name: &str) -> &str {
    name.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Picks a template at random and fills in the caller's name.
///
/// The resolver holds no mutable state. Concurrent calls are independent of
/// each other and may return the same template back to back.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoastResolver {
    store: TemplateStore,
}

impl RoastResolver {
    /// Create a resolver over `store`.
    ///
    /// # Panics
    ///
    /// Panics if the store is empty.
    pub fn new(store: TemplateStore) -> Self {
        assert!(store.count() > 0, "roast resolver needs at least one template");
        Self { store }
    }

    /// Template store backing this resolver
    pub fn store(&self) -> &TemplateStore {
        &self.store
    }

    /// Resolve a roast for `name` using the thread-local RNG
    pub fn resolve(&self, name: &str) -> String {
        self.resolve_with_rng(name, &mut rand::rng())
    }

    /// Resolve a roast for `name` drawing the template index from `rng`.
    ///
    /// Blank names short-circuit to [`FALLBACK_MESSAGE`] without a draw. The
    /// trimmed name is inserted verbatim, so a name that itself reads `{name}`
    /// shows up unchanged in the output.
    pub fn resolve_with_rng<R: Rng + ?Sized>(&self, name: &str, rng: &mut R) -> String {
        let name = trim_name(name);
        if name.is_empty() {
            return FALLBACK_MESSAGE.to_string();
        }

        let index = rng.random_range(0..self.store.count());
        self.store.render(index, name)
    }

    /// Resolve a roast after waiting at least `delay`.
    ///
    /// Nothing is held while sleeping. The future always completes with a string.
    pub async fn resolve_with_delay(&self, name: &str, delay: Duration) -> String {
        tokio::time::sleep(delay).await;
        self.resolve(name)
    }
}

/// Resolve a roast for `name` from the built-in templates
pub fn resolve(name: &str) -> String {
    RoastResolver::default().resolve(name)
}

/// Resolve a roast for `name` from the built-in templates after `delay`
pub async fn resolve_with_delay(name: &str, delay: Duration) -> String {
    RoastResolver::default().resolve_with_delay(name, delay).await
}
