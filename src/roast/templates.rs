/// Token replaced by the caller's name in every template
pub const PLACEHOLDER: &str = "{name}";

/// Built-in roast templates.
///
/// Every entry carries at least one `{name}` placeholder. Entry 1 uses it twice.
pub const ROAST_TEMPLATES: [&str; 10] = [
    "Hey {name}, I'd roast you, but my mom said I shouldn't burn trash! 🔥",
    "{name}? More like {name}-sty! Even autocorrect doesn't want to acknowledge you! 😂",
    "I was going to make fun of {name}, but then I realized nature already did! 🌿",
    "{name}, you're like a software update - nobody wants you, but you keep showing up anyway! 💻",
    "Dear {name}, I'd call you average, but that would be an insult to average people! 📊",
    "{name}, you're the reason they put directions on shampoo bottles! 🧴",
    "If {name} were a spice, you'd be flour - bland and unnecessary! 🌶️",
    "{name}, you're like a participation trophy - everyone gets one, but nobody really wants it! 🏆",
    "Hey {name}, I heard you went to the library to find your name in the phone book! 📚",
    "{name}, you're so unique, just like everyone else! ✨",
];

/// Immutable, ordered set of roast templates
#[derive(Debug, Clone, Copy)]
pub struct TemplateStore {
    templates: &'static [&'static str],
}

impl Default for TemplateStore {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TemplateStore {
    /// Store backed by [`ROAST_TEMPLATES`]
    pub const fn builtin() -> Self {
        Self {
            templates: &ROAST_TEMPLATES,
        }
    }

    /// Store over an arbitrary static template set
    pub const fn from_static(templates: &'static [&'static str]) -> Self {
        Self { templates }
    }

    /// Number of templates
    pub fn count(&self) -> usize {
        self.templates.len()
    }

    /// Template at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.count()`. Callers draw indices from `0..count()`.
    pub fn get(&self, index: usize) -> &'static str {
        self.templates[index]
    }

    /// Template at `index`, or `None` when out of range
    pub fn try_get(&self, index: usize) -> Option<&'static str> {
        self.templates.get(index).copied()
    }

    /// Iterate templates in store order
    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.templates.iter().copied()
    }

    /// Substitute `name` for every placeholder in the template at `index`
    pub fn render(&self, index: usize, name: &str) -> String {
        self.get(index).replace(PLACEHOLDER, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_count() {
        assert_eq!(TemplateStore::builtin().count(), 10);
    }

    #[test]
    fn test_every_template_has_placeholder() {
        for template in TemplateStore::builtin().iter() {
            assert!(template.contains(PLACEHOLDER), "missing placeholder: {}", template);
        }
    }

    #[test]
    fn test_get_in_order() {
        let store = TemplateStore::builtin();
        assert_eq!(store.get(0), ROAST_TEMPLATES[0]);
        assert_eq!(store.get(9), "{name}, you're so unique, just like everyone else! ✨");
    }

    #[test]
    #[should_panic]
    fn test_get_out_of_range_panics() {
        let store = TemplateStore::builtin();
        let _ = store.get(store.count());
    }

    #[test]
    fn test_try_get_out_of_range() {
        let store = TemplateStore::builtin();
        assert!(store.try_get(3).is_some());
        assert!(store.try_get(10).is_none());
    }

    #[test]
    fn test_render_replaces_all_occurrences() {
        let store = TemplateStore::builtin();
        let rendered = store.render(1, "Ann");
        assert_eq!(
            rendered,
            "Ann? More like Ann-sty! Even autocorrect doesn't want to acknowledge you! 😂"
        );
        assert!(!rendered.contains(PLACEHOLDER));
    }

    #[test]
    fn test_custom_store() {
        static CUSTOM: [&str; 2] = ["a {name}", "{name} b {name}"];
        let store = TemplateStore::from_static(&CUSTOM);
        assert_eq!(store.count(), 2);
        assert_eq!(store.render(1, "x"), "x b x");
    }
}
