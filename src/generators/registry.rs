//! The generator registry
//!
//! Maps a (language, API) pair to a generator constructor through an
//! explicit table built at construction time. The set of supported
//! targets is statically known; resolving an unregistered pair returns
//! `None` rather than an error so callers can probe for legality.

use crate::fragments::FragmentStore;
use crate::generators::{DtdGenerator, Generator};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

type Constructor = fn(Arc<FragmentStore>) -> Box<dyn Generator>;

struct RegistryEntry {
    language: &'static str,
    api: Option<&'static str>,
    construct: Constructor,
}

/// Resolves (language, API) pairs to generator instances
pub struct GeneratorRegistry {
    entries: Vec<RegistryEntry>,
    fragments: Arc<FragmentStore>,
}

impl GeneratorRegistry {
    /// Create an empty registry sharing the given fragment store
    pub fn new(fragments: Arc<FragmentStore>) -> Self {
        Self {
            entries: Vec::new(),
            fragments,
        }
    }

    /// The registry with every built-in generator registered
    pub fn with_builtin_generators() -> Self {
        let mut registry = Self::new(Arc::new(FragmentStore::new()));
        registry.register("dtd", None, |fragments| {
            Box::new(DtdGenerator::new(fragments))
        });
        registry
    }

    /// Register a generator constructor for a (language, API) pair.
    ///
    /// A later registration for an already-registered pair shadows the
    /// earlier one.
    pub fn register(
        &mut self,
        language: &'static str,
        api: Option<&'static str>,
        construct: Constructor,
    ) {
        self.entries.retain(|e| (e.language, e.api) != (language, api));
        self.entries.push(RegistryEntry {
            language,
            api,
            construct,
        });
    }

    /// Resolve a (language, API) pair to a generator.
    ///
    /// Returns `None` when no generator is registered for the pair;
    /// this is a legal probe, not an error.
    pub fn resolve(&self, language: &str, api: Option<&str>) -> Option<Box<dyn Generator>> {
        self.entries
            .iter()
            .find(|e| e.language == language && e.api == api)
            .map(|e| (e.construct)(Arc::clone(&self.fragments)))
    }

    /// Every registered (language, API) pair, sorted by language then
    /// API; a missing API sorts before a present one for the same
    /// language
    pub fn list_available(&self) -> BTreeSet<(String, Option<String>)> {
        self.entries
            .iter()
            .map(|e| (e.language.to_string(), e.api.map(str::to_string)))
            .collect()
    }

    /// Registered languages with their descriptions, sorted by language
    pub fn languages(&self) -> BTreeMap<String, String> {
        self.entries
            .iter()
            .map(|e| {
                let generator = (e.construct)(Arc::clone(&self.fragments));
                (
                    e.language.to_string(),
                    generator.describe_language().to_string(),
                )
            })
            .collect()
    }

    /// Registered APIs with their descriptions, sorted by API
    pub fn apis(&self) -> BTreeMap<String, String> {
        self.entries
            .iter()
            .filter(|e| e.api.is_some())
            .filter_map(|e| {
                let generator = (e.construct)(Arc::clone(&self.fragments));
                let api = e.api?;
                let description = generator.describe_api()?;
                Some((api.to_string(), description.to_string()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use crate::model::DocumentType;
    use crate::output::OutputTarget;

    #[derive(Debug)]
    struct StubGenerator;

    impl Generator for StubGenerator {
        fn language(&self) -> &'static str {
            "stub"
        }

        fn api(&self) -> Option<&'static str> {
            Some("sax")
        }

        fn describe_language(&self) -> &'static str {
            "stub target"
        }

        fn describe_api(&self) -> Option<&'static str> {
            Some("event-driven API")
        }

        fn generate(&self, _: &DocumentType, _: &OutputTarget, _: &str) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_resolve_builtin_dtd() {
        let registry = GeneratorRegistry::with_builtin_generators();
        let generator = registry.resolve("dtd", None).unwrap();
        assert_eq!(generator.language(), "dtd");
        assert!(!generator.describe_language().is_empty());
        assert_eq!(generator.describe_api(), None);
    }

    #[test]
    fn test_resolve_unknown_returns_none() {
        let registry = GeneratorRegistry::with_builtin_generators();
        assert!(registry.resolve("not-a-real-language", None).is_none());
        // A registered language with the wrong API does not match.
        assert!(registry.resolve("dtd", Some("sax")).is_none());
    }

    #[test]
    fn test_list_available_ordering() {
        let mut registry = GeneratorRegistry::with_builtin_generators();
        registry.register("dtd", Some("sax"), |_| Box::new(StubGenerator));
        registry.register("ada", None, |_| Box::new(StubGenerator));

        let pairs: Vec<_> = registry.list_available().into_iter().collect();
        assert_eq!(
            pairs,
            vec![
                ("ada".to_string(), None),
                ("dtd".to_string(), None),
                ("dtd".to_string(), Some("sax".to_string())),
            ]
        );
    }

    #[test]
    fn test_reregistration_shadows() {
        let mut registry = GeneratorRegistry::with_builtin_generators();
        registry.register("dtd", None, |_| Box::new(StubGenerator));
        let generator = registry.resolve("dtd", None).unwrap();
        assert_eq!(generator.describe_language(), "stub target");
        assert_eq!(registry.list_available().len(), 1);
    }

    #[test]
    fn test_api_descriptions() {
        let mut registry = GeneratorRegistry::with_builtin_generators();
        registry.register("stub", Some("sax"), |_| Box::new(StubGenerator));

        let apis = registry.apis();
        assert_eq!(apis.get("sax").map(String::as_str), Some("event-driven API"));

        let languages = registry.languages();
        assert!(languages.contains_key("dtd"));
        assert!(languages.contains_key("stub"));
    }
}
