//! Engine catalog and engine selection

use super::descriptor::EngineDescriptor;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use std::collections::HashSet;
use tracing::warn;

/// Ordered, immutable set of engines loaded for one search
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EngineCatalog {
    engines: Vec<EngineDescriptor>,
}

impl EngineCatalog {
    /// Create an empty catalog
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a catalog, warning about shortcuts that appear more than once
    pub fn new(engines: Vec<EngineDescriptor>) -> Self {
        let mut seen = HashSet::new();
        for engine in engines.iter().filter(|e| e.has_shortcut()) {
            if !seen.insert(engine.shortcut.as_str()) {
                warn!(
                    "Duplicate shortcut !{} on '{}'; the first engine with it wins",
                    engine.shortcut, engine.name
                );
            }
        }
        Self { engines }
    }

    /// Pick one engine with uniform probability
    pub fn select_random<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&EngineDescriptor> {
        self.engines.choose(rng)
    }

    /// Find the first engine whose shortcut equals `shortcut` exactly
    pub fn select_by_shortcut(&self, shortcut: &str) -> Option<&EngineDescriptor> {
        if shortcut.is_empty() {
            return None;
        }
        self.engines.iter().find(|e| e.shortcut == shortcut)
    }

    /// Iterate over engines in catalog order
    pub fn iter(&self) -> std::slice::Iter<'_, EngineDescriptor> {
        self.engines.iter()
    }

    /// Get number of engines
    pub fn len(&self) -> usize {
        self.engines.len()
    }

    /// Check if catalog is empty
    pub fn is_empty(&self) -> bool {
        self.engines.is_empty()
    }
}

impl<'a> IntoIterator for &'a EngineCatalog {
    type Item = &'a EngineDescriptor;
    type IntoIter = std::slice::Iter<'a, EngineDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn catalog() -> EngineCatalog {
        EngineCatalog::new(vec![
            EngineDescriptor::new("DuckDuckGo", "ddg", "https://duckduckgo.com/?q=%s"),
            EngineDescriptor::new("GitHub", "gh", "https://github.com/search?q=%s"),
            EngineDescriptor::new("Brave", "br", "https://search.brave.com/search?q=%s"),
            EngineDescriptor::new("GitHub Code", "gh", "https://github.com/search?type=code&q=%s"),
        ])
    }

    #[test]
    fn test_select_random_returns_member() {
        let catalog = catalog();
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = HashSet::new();

        for _ in 0..500 {
            let engine = catalog.select_random(&mut rng).unwrap();
            assert!(catalog.iter().any(|e| e == engine));
            seen.insert(engine.url_template.clone());
        }

        // every slot is reachable
        assert_eq!(seen.len(), catalog.len());
    }

    #[test]
    fn test_select_random_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(EngineCatalog::empty().select_random(&mut rng).is_none());
    }

    #[test]
    fn test_select_by_shortcut_first_match() {
        let catalog = catalog();
        let engine = catalog.select_by_shortcut("gh").unwrap();
        assert_eq!(engine.name, "GitHub");
    }

    #[test]
    fn test_select_by_shortcut_exact() {
        let catalog = catalog();
        assert!(catalog.select_by_shortcut("GH").is_none());
        assert!(catalog.select_by_shortcut("g").is_none());
        assert!(catalog.select_by_shortcut("unknown").is_none());
    }

    #[test]
    fn test_empty_shortcut_never_matches() {
        let catalog = EngineCatalog::new(vec![EngineDescriptor::new(
            "Anon",
            "",
            "https://example.com/?q=%s",
        )]);
        assert!(catalog.select_by_shortcut("").is_none());
    }
}
