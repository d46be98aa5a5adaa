//! Deep-link composition for the target app.
//!
//! Builds the custom-scheme URI handed to the host for navigation, keeping
//! the attribution referrer ahead of every other parameter so it survives the
//! app-to-app hand-off, and rewriting the result into Android's composite
//! `intent://` form when a package id is available.

use crate::params::ParamMap;

/// Attribution parameter that must ride first in the composed link.
pub const REFERRER_KEY: &str = "airbridge_referrer";

/// Compose the deep link from the configured base scheme and the incoming
/// parameters.
///
/// With no parameters the base scheme is returned unchanged. Otherwise the
/// first parameter is attached with `?`, or with `&` when the base already
/// embeds a query component. When `airbridge_referrer` is present its
/// re-encoded value leads, and the remaining parameters follow as one
/// `&`-joined query string. Pure and deterministic: identical inputs yield
/// byte-identical output.
pub fn compose(base_scheme: &str, params: &ParamMap) -> String {
    if params.is_empty() {
        return base_scheme.to_string();
    }

    let join = if base_scheme.contains('?') { '&' } else { '?' };

    let Some(referrer) = params.get(REFERRER_KEY) else {
        return format!("{base_scheme}{join}{}", params.to_query_string());
    };

    let mut link = format!(
        "{base_scheme}{join}{REFERRER_KEY}={}",
        urlencoding::encode(referrer)
    );
    let mut rest = params.clone();
    rest.remove(REFERRER_KEY);
    if !rest.is_empty() {
        link.push('&');
        link.push_str(&rest.to_query_string());
    }
    link
}

/// Rewrite a composed deep link into Android's `intent://` composite form.
///
/// `scheme://rest` becomes
/// `intent://rest#Intent;scheme=<scheme>;package=<package>;end`, which lets
/// Chrome route straight to the target package without an interstitial.
/// Returns `None` when the link carries no `scheme://` prefix.
pub fn intent_uri(deep_link: &str, package: &str) -> Option<String> {
    let (scheme, rest) = deep_link.split_once("://")?;
    if scheme.is_empty() {
        return None;
    }
    Some(format!(
        "intent://{rest}#Intent;scheme={scheme};package={package};end"
    ))
}
