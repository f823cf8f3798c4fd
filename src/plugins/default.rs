//! Default search plugin - nested boolean rewrite of typed parameters

use tracing::debug;

use crate::application::errors::SearchError;
use crate::domain::entities::{Junction, SearchParam, SearchRequest};
use crate::infrastructure::solr::solr_literal;
use crate::plugins::trait_def::CompositeSearch;

/// Folds the typed parameters into a single nested boolean fragment and
/// appends it to the outgoing query.
///
/// Parameters are traversed in reverse, so the fragment nests to the right:
/// the first parameter in the list ends up outermost. Each word of a value
/// passes through [`solr_literal`]; parameters whose value tokenizes to
/// nothing are skipped. A `NOT` parameter renders as a `-field:(...)`
/// exclusion and contributes `AND` as the nesting junction.
#[derive(Debug, Default)]
pub struct DefaultSearchPlugin;

impl CompositeSearch for DefaultSearchPlugin {
    fn name(&self) -> &str {
        "default"
    }

    fn description(&self) -> &str {
        "Rewrites typed search parameters into a nested boolean query fragment"
    }

    fn before_search(
        &self,
        request: &mut SearchRequest,
        params: &mut Vec<SearchParam>,
    ) -> Result<(), SearchError> {
        let mut query = String::new();

        for param in params.iter().rev() {
            let value = param.words().map(solr_literal).collect::<Vec<_>>().join(" ");
            if value.is_empty() {
                debug!("Skipping '{}' parameter with empty value", param.field);
                continue;
            }

            let sign = if param.junction == Junction::Not { '-' } else { '+' };
            let fragment = format!("{}{}:({})", sign, param.field, value);

            query = if query.is_empty() {
                fragment
            } else {
                // A NOT entry excludes its own field but still nests the
                // accumulated query with AND.
                let junction = if param.junction == Junction::Not {
                    Junction::And
                } else {
                    param.junction
                };
                format!("{} {} ({})", fragment, junction, query)
            };
        }

        request.append_q(&query);
        Ok(())
    }
}
