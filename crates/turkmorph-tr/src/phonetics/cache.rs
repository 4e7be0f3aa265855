// Memoized allomorph resolution keyed by automaton transition.

use std::sync::{PoisonError, RwLock};

use hashbrown::HashMap;
use turkmorph_core::PhoneticAttributes;
use turkmorph_graph::TransitionId;

use super::resolver::resolve;

/// Cache key: the transition, which form of its suffix, and the phonetic
/// context the form is resolved in.
type CacheKey = (TransitionId, usize, PhoneticAttributes);

/// Thread-safe cache of resolved suffix forms.
///
/// Resolution is a pure function of the form and the phonetic attributes,
/// so a cached entry is always equal to a fresh resolution. Inapplicable
/// forms are cached as `None` too.
#[derive(Debug, Default)]
pub struct AllomorphCache {
    entries: RwLock<HashMap<CacheKey, Option<String>>>,
}

impl AllomorphCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve `form` (form number `form_index` of the suffix on
    /// `transition`) in the context `attrs`, consulting the cache first.
    pub fn resolve(
        &self,
        transition: TransitionId,
        form_index: usize,
        form: &str,
        attrs: PhoneticAttributes,
    ) -> Option<String> {
        let key = (transition, form_index, attrs);
        {
            let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(hit) = entries.get(&key) {
                return hit.clone();
            }
        }
        let resolved = resolve(form, attrs);
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, resolved.clone());
        resolved
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use turkmorph_graph::basic::basic_suffix_graph;

    use super::*;

    fn some_transition() -> TransitionId {
        let graph = basic_suffix_graph().unwrap();
        let noun_root = graph.state_id("NOUN_ROOT").unwrap();
        graph.outgoing(noun_root).next().unwrap().id
    }

    #[test]
    fn cached_result_equals_fresh_resolution() {
        let cache = AllomorphCache::new();
        let t = some_transition();
        for text in ["kitap", "ev", "araba", "g\u{00F6}z", "bin"] {
            let attrs = PhoneticAttributes::of(text);
            let forms = ["+yI", "DA", "Il", "lArI"];
            for (i, form) in forms.into_iter().enumerate() {
                let first = cache.resolve(t, i, form, attrs);
                let second = cache.resolve(t, i, form, attrs);
                assert_eq!(first, second);
                assert_eq!(first, resolve(form, attrs));
            }
        }
    }

    #[test]
    fn entries_are_keyed_by_context() {
        let cache = AllomorphCache::new();
        let t = some_transition();
        assert!(cache.is_empty());
        cache.resolve(t, 0, "lAr", PhoneticAttributes::of("ev"));
        cache.resolve(t, 0, "lAr", PhoneticAttributes::of("ev"));
        assert_eq!(cache.len(), 1);
        cache.resolve(t, 0, "lAr", PhoneticAttributes::of("kitap"));
        assert_eq!(cache.len(), 2);
        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn inapplicable_forms_are_cached() {
        let cache = AllomorphCache::new();
        let t = some_transition();
        let attrs = PhoneticAttributes::of("araba");
        assert_eq!(cache.resolve(t, 3, "Il", attrs), None);
        assert_eq!(cache.len(), 1);
    }
}
