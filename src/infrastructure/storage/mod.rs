pub mod preference_storage;

pub use preference_storage::MemoryPreferenceStorage;
