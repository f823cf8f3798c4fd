//! Search service - prepares an outgoing search through the plugin chain

use tracing::debug;

use crate::application::errors::SearchError;
use crate::domain::entities::{Junction, SearchParam, SearchRequest};
use crate::infrastructure::config::Config;
use crate::plugins::PluginManager;

/// Applies every registered before-search hook to an outgoing request.
///
/// Typed parameters arrive as three parallel lists on the request extras,
/// keyed by the configured prefix: `<prefix>type`, `<prefix>value` and
/// `<prefix>junction`.
pub struct SearchService {
    manager: PluginManager,
    prefix: String,
    default_junction: Junction,
}

impl SearchService {
    pub fn new(config: &Config, manager: PluginManager) -> Self {
        Self {
            manager,
            prefix: config.params.prefix.clone(),
            default_junction: config.search.default_junction,
        }
    }

    /// Extract typed parameters from the request extras and run the chain.
    /// A request without composite parameters passes through untouched.
    pub fn prepare(&self, request: &mut SearchRequest) -> Result<(), SearchError> {
        let mut params = self.extract_params(request);
        if params.is_empty() {
            debug!("No composite parameters on request");
            return Ok(());
        }

        debug!("Extracted {} composite parameters", params.len());
        self.manager.before_search(request, &mut params)
    }

    /// Zip the three parallel extras lists into typed parameters. The
    /// shortest list bounds the parameter count; unrecognised junctions
    /// fall back to the configured default.
    fn extract_params(&self, request: &SearchRequest) -> Vec<SearchParam> {
        let fields = request.extra_list(&format!("{}type", self.prefix));
        let values = request.extra_list(&format!("{}value", self.prefix));
        let junctions = request.extra_list(&format!("{}junction", self.prefix));

        fields
            .into_iter()
            .zip(values)
            .zip(junctions)
            .map(|((field, value), junction)| {
                SearchParam::new(
                    field,
                    value,
                    Junction::parse_or(&junction, self.default_junction),
                )
            })
            .collect()
    }
}
