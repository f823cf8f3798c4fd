//! Plugin trait definitions

use crate::application::errors::SearchError;
use crate::domain::entities::{SearchParam, SearchRequest};

/// Contract for composite-search plugins.
///
/// The host invokes every registered plugin, in registration order,
/// immediately before executing a search. A hook may rewrite the outgoing
/// request and the typed parameter list; plugins later in the chain observe
/// any changes made here.
pub trait CompositeSearch: Send + Sync {
    /// Unique identifier for the plugin
    fn name(&self) -> &str;

    /// Human-readable description
    fn description(&self) -> &str {
        ""
    }

    /// Rewrite the outgoing request and/or the parameter list.
    fn before_search(
        &self,
        request: &mut SearchRequest,
        params: &mut Vec<SearchParam>,
    ) -> Result<(), SearchError>;
}
