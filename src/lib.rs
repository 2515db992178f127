pub mod extract;
pub mod source;
pub mod transport;
pub mod types;
pub mod watcher;

// Re-export for tests
pub use watcher::PriceWatcher;
