// Allomorph resolution engine
//
// Turns abstract suffix forms ("+yI", "DA", "lArI") into concrete surfaces
// for a given phonetic context, with a per-transition cache in front.

mod cache;
mod resolver;

pub use cache::AllomorphCache;
pub use resolver::resolve;
