//! Composite search pipeline integration tests
//! Run with: cargo test --test composite_search_test

use std::sync::Once;

use serde_json::json;

use composite_search::infrastructure::config::Config;
use composite_search::{
    CompositeSearch, DefaultSearchPlugin, Junction, PluginManager, SearchParam, SearchRequest,
    SearchService,
};

static INIT: Once = Once::new();

fn ensure_init() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt::init();
    });
}

fn default_service() -> SearchService {
    let mut manager = PluginManager::new();
    manager
        .register(DefaultSearchPlugin)
        .expect("fresh manager accepts the default plugin");
    SearchService::new(&Config::default(), manager)
}

/// Rewrites `author` parameters to the index's real field name before the
/// default plugin folds them into the query.
struct FieldAliasPlugin;

impl CompositeSearch for FieldAliasPlugin {
    fn name(&self) -> &str {
        "field-alias"
    }

    fn before_search(
        &self,
        _request: &mut SearchRequest,
        params: &mut Vec<SearchParam>,
    ) -> Result<(), composite_search::application::errors::SearchError> {
        for param in params.iter_mut() {
            if param.field == "author" {
                param.field = "creator".to_string();
            }
        }
        Ok(())
    }
}

#[test]
fn rewrites_query_from_raw_extras() {
    ensure_init();

    let service = default_service();
    let mut request = SearchRequest::new("license_id:cc-by")
        .with_extra("ext_composite_type", json!(["title", "notes", "tags"]))
        .with_extra("ext_composite_value", json!(["open data", "draft", "geo"]))
        .with_extra("ext_composite_junction", json!(["", "NOT", "OR"]));

    service.prepare(&mut request).expect("pipeline run");

    assert_eq!(
        request.q,
        "license_id:cc-by +title:(\"open\" \"data\") AND (-notes:(\"draft\") AND (+tags:(\"geo\")))"
    );
}

#[test]
fn request_without_composite_extras_passes_through() {
    ensure_init();

    let service = default_service();
    let mut request = SearchRequest::new("plain query")
        .with_extra("ext_page", json!("2"))
        .with_extra("ext_composite_type", json!([]));

    service.prepare(&mut request).expect("pipeline run");

    assert_eq!(request.q, "plain query");
}

#[test]
fn custom_prefix_is_honored() {
    ensure_init();

    let yaml = "search:\n  default-junction: AND\nparams:\n  prefix: ext_alt_\n";
    let config: Config = serde_yaml::from_str(yaml).expect("valid yaml");

    let mut manager = PluginManager::new();
    manager.register(DefaultSearchPlugin).expect("register");
    let service = SearchService::new(&config, manager);

    let mut request = SearchRequest::default()
        .with_extra("ext_alt_type", json!("title"))
        .with_extra("ext_alt_value", json!("cat"))
        .with_extra("ext_alt_junction", json!(""))
        // Parameters under the default prefix must be invisible now.
        .with_extra("ext_composite_type", json!("notes"))
        .with_extra("ext_composite_value", json!("dog"))
        .with_extra("ext_composite_junction", json!(""));

    service.prepare(&mut request).expect("pipeline run");

    assert_eq!(request.q, "+title:(\"cat\")");
}

#[test]
fn earlier_plugins_rewrite_params_for_later_ones() {
    ensure_init();

    let mut manager = PluginManager::new();
    manager.register(FieldAliasPlugin).expect("register alias");
    manager.register(DefaultSearchPlugin).expect("register default");
    let service = SearchService::new(&Config::default(), manager);

    let mut request = SearchRequest::default()
        .with_extra("ext_composite_type", json!(["author"]))
        .with_extra("ext_composite_value", json!(["smith"]))
        .with_extra("ext_composite_junction", json!([""]));

    service.prepare(&mut request).expect("pipeline run");

    assert_eq!(request.q, "+creator:(\"smith\")");
}

#[test]
fn configured_default_junction_applies_to_blank_rows() {
    ensure_init();

    let mut config = Config::default();
    config.search.default_junction = Junction::Or;

    let mut manager = PluginManager::new();
    manager.register(DefaultSearchPlugin).expect("register");
    let service = SearchService::new(&config, manager);

    let mut request = SearchRequest::default()
        .with_extra("ext_composite_type", json!(["title", "notes"]))
        .with_extra("ext_composite_value", json!(["cat", "dog"]))
        .with_extra("ext_composite_junction", json!(["", ""]));

    service.prepare(&mut request).expect("pipeline run");

    assert_eq!(request.q, "+title:(\"cat\") OR (+notes:(\"dog\"))");
}
