mod json_file;
pub mod memory;
pub mod preference_store;
pub mod search_history;

pub use memory::{MemoryPreferenceStore, MemorySearchHistoryStore};
pub use preference_store::FilePreferenceStore;
pub use search_history::FileSearchHistoryStore;
