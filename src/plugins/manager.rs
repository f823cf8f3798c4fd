//! Plugin manager - ordered registry for before-search hooks

use std::sync::Arc;

use tracing::{debug, info};

use crate::application::errors::{PluginError, SearchError};
use crate::domain::entities::{SearchParam, SearchRequest};
use crate::plugins::trait_def::CompositeSearch;

/// Ordered registry of composite-search plugins.
///
/// Hooks run in registration order; the order is part of the contract
/// because each hook observes the rewrites of the hooks before it.
pub struct PluginManager {
    plugins: Vec<Arc<dyn CompositeSearch>>,
}

impl PluginManager {
    pub fn new() -> Self {
        Self {
            plugins: Vec::new(),
        }
    }

    /// Register a plugin at the end of the chain.
    pub fn register<P: CompositeSearch + 'static>(&mut self, plugin: P) -> Result<(), PluginError> {
        if self.has_plugin(plugin.name()) {
            return Err(PluginError::AlreadyRegistered(plugin.name().to_string()));
        }

        info!("Registering search plugin: {}", plugin.name());
        self.plugins.push(Arc::new(plugin));
        Ok(())
    }

    /// Fold the request and parameter list through every registered hook.
    /// Stops at the first error.
    pub fn before_search(
        &self,
        request: &mut SearchRequest,
        params: &mut Vec<SearchParam>,
    ) -> Result<(), SearchError> {
        for plugin in &self.plugins {
            debug!("Running before-search hook: {}", plugin.name());
            plugin.before_search(request, params)?;
        }
        Ok(())
    }

    /// Check if a plugin is registered
    pub fn has_plugin(&self, name: &str) -> bool {
        self.plugins.iter().any(|p| p.name() == name)
    }

    /// Registered plugin names, in chain order
    pub fn names(&self) -> Vec<&str> {
        self.plugins.iter().map(|p| p.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}

impl Default for PluginManager {
    fn default() -> Self {
        Self::new()
    }
}
