//! Composite search - typed search parameters folded into Solr query syntax
//!
//! A search-plugin subsystem for a content-management search pipeline: the
//! host hands an outgoing [`SearchRequest`] to the [`SearchService`], which
//! extracts typed parameters from the request extras and runs every
//! registered [`CompositeSearch`] hook before the search executes. The
//! bundled [`DefaultSearchPlugin`] rewrites the parameters into a nested
//! boolean query fragment appended to `q`.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod plugins;

pub use application::services::SearchService;
pub use domain::entities::{Junction, SearchParam, SearchRequest};
pub use plugins::{CompositeSearch, DefaultSearchPlugin, PluginManager};
