pub mod json_store;

pub use json_store::{fold_keys, CollectionKind, JsonStore};
