//! Composite search plugin system
//!
//! The [`CompositeSearch`] contract hosts invoke before executing a search,
//! the ordered [`PluginManager`] that chains every registered hook, and the
//! default query rewrite plugin.

pub mod default;
pub mod manager;
pub mod trait_def;

pub use default::DefaultSearchPlugin;
pub use manager::PluginManager;
pub use trait_def::CompositeSearch;
