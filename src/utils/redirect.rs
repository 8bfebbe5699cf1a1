//! Redirect target helpers.

use std::borrow::Cow;

/// Returns a `Location` value browsers treat as absolute.
///
/// Stored URLs are not validated, so values like `www.teste.com` are common.
/// Those get an `https://` prefix; anything with a scheme passes through.
pub fn redirect_target(original_url: &str) -> Cow<'_, str> {
    if has_scheme(original_url) {
        Cow::Borrowed(original_url)
    } else {
        Cow::Owned(format!("https://{}", original_url.trim_start_matches('/')))
    }
}

fn has_scheme(url: &str) -> bool {
    let Some((scheme, _)) = url.split_once(':') else {
        return false;
    };

    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        && url[scheme.len()..].starts_with("://")
}
