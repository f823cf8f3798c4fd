//! Solr client helpers
//!
//! Only the slice of the search client this crate needs: turning raw user
//! tokens into literals that are safe to splice into the textual query
//! syntax.

/// Return a safe literal string for a Solr query.
///
/// Conservative by intent: instead of backslash-escaping every special
/// character, embedded double quotes are dropped and the token is wrapped
/// in quotes, so it cannot terminate the surrounding quoting or change the
/// query structure. Phrase syntax is not expressible through this helper.
pub fn solr_literal(token: &str) -> String {
    if token.contains('"') {
        format!("\"{}\"", token.replace('"', ""))
    } else {
        format!("\"{}\"", token)
    }
}
