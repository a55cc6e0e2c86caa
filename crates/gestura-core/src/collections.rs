//! Collection aliases tuned for small opaque keys.
//!
//! Handle-keyed maps in this workspace never face untrusted keys, so the
//! non-DoS-resistant fast hasher is the default everywhere.

pub mod map {
    pub use rustc_hash::{FxHashMap as HashMap, FxHashSet as HashSet};
    pub use std::collections::hash_map::Entry;
}
