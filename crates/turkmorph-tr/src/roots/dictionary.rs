// Dictionary root finder: exact lookup of generated lexicon roots.

use std::sync::Arc;

use hashbrown::HashMap;
use turkmorph_core::Root;

use super::{RootFinder, RootFinderError, check_invocation};
use crate::lexicon::Lexicon;

/// Multi-map from surface to every dictionary root with that surface.
///
/// The map is shared behind an `Arc`; finders built from the same lexicon
/// are cheap to clone.
#[derive(Debug, Clone, Default)]
pub struct DictionaryRootFinder {
    roots: Arc<HashMap<String, Vec<Root>>>,
}

impl DictionaryRootFinder {
    pub fn new(roots: impl IntoIterator<Item = Root>) -> Self {
        let mut map: HashMap<String, Vec<Root>> = HashMap::new();
        for root in roots {
            // Full compound forms are also looked up by their stem, so that
            // "atkuyruğ-lar" can find "atkuyruğu".
            if let Some(stem) = root.compound_stem() {
                if stem != root.lexeme.lemma_root {
                    map.entry(stem.to_string()).or_default().push(root.clone());
                }
            }
            map.entry(root.surface.clone()).or_default().push(root);
        }
        Self {
            roots: Arc::new(map),
        }
    }

    pub fn from_lexicon(lexicon: &Lexicon) -> Self {
        Self::new(lexicon.roots())
    }

    /// All roots registered under `surface`.
    pub fn lookup(&self, surface: &str) -> &[Root] {
        self.roots.get(surface).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct lookup keys.
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// A private copy without the roots stored under `surface`. The shared
    /// map is left untouched.
    pub fn without(&self, surface: &str) -> Self {
        let mut map = (*self.roots).clone();
        map.remove(surface);
        Self {
            roots: Arc::new(map),
        }
    }
}

impl RootFinder for DictionaryRootFinder {
    fn name(&self) -> &'static str {
        "dictionary"
    }

    fn handles(&self, partial: &str, _whole: &str) -> bool {
        self.roots.contains_key(partial)
    }

    fn find_roots(&self, partial: &str, whole: &str) -> Result<Vec<Root>, RootFinderError> {
        check_invocation(partial, whole)?;
        Ok(self.lookup(partial).to_vec())
    }
}
