//! Fast hashing aliases.
//!
//! All internal maps key on small ids or caller keys; `ahash` beats SipHash
//! for both without DoS-hardening requirements in an in-process library.

/// Hash map backed by `hashbrown` with the `ahash` hasher.
pub type FxHashMap<K, V> = hashbrown::HashMap<K, V, ahash::RandomState>;

/// Hash set backed by `hashbrown` with the `ahash` hasher.
pub type FxHashSet<T> = hashbrown::HashSet<T, ahash::RandomState>;
