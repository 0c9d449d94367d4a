//! URL formatting

use crate::engines::{EngineDescriptor, PLACEHOLDER};

/// Characters `encodeURIComponent` leaves alone but `urlencoding` escapes
const EXTRA_UNRESERVED: [(&str, &str); 5] = [
    ("%21", "!"),
    ("%27", "'"),
    ("%28", "("),
    ("%29", ")"),
    ("%2A", "*"),
];

/// Percent-encode a query component the way browsers' `encodeURIComponent` does
///
/// Unescaped: `A-Z a-z 0-9 - _ . ! ~ * ' ( )`. Everything else is encoded
/// byte-wise from UTF-8 with uppercase hex.
pub fn encode_uri_component(input: &str) -> String {
    let mut encoded = urlencoding::encode(input).into_owned();
    // A literal '%' is always emitted as "%25", so these never match across escapes
    for (escaped, plain) in EXTRA_UNRESERVED {
        if encoded.contains(escaped) {
            encoded = encoded.replace(escaped, plain);
        }
    }
    encoded
}

/// Substitute the encoded query for the first placeholder in the engine's template
pub fn format_search_url(engine: &EngineDescriptor, query: &str) -> String {
    engine
        .url_template
        .replacen(PLACEHOLDER, &encode_uri_component(query), 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(template: &str) -> EngineDescriptor {
        EngineDescriptor::new("Test", "t", template)
    }

    #[test]
    fn test_encode_uri_component() {
        assert_eq!(encode_uri_component("a b"), "a%20b");
        assert_eq!(encode_uri_component("!unknown foo"), "!unknown%20foo");
        assert_eq!(encode_uri_component("-_.!~*'()"), "-_.!~*'()");
        assert_eq!(encode_uri_component("a+b&c=d/e?f#g"), "a%2Bb%26c%3Dd%2Fe%3Ff%23g");
        assert_eq!(encode_uri_component("100%"), "100%25");
        assert_eq!(encode_uri_component("%21"), "%2521");
        assert_eq!(encode_uri_component("café"), "caf%C3%A9");
        assert_eq!(encode_uri_component(""), "");
    }

    #[test]
    fn test_replaces_first_placeholder_only() {
        let url = format_search_url(&engine("https://x.com/?q=%s&lang=%s"), "a b");
        assert_eq!(url, "https://x.com/?q=a%20b&lang=%s");
    }

    #[test]
    fn test_rest_of_template_untouched() {
        let url = format_search_url(&engine("https://x.com/%s/path?a=1"), "rust");
        assert_eq!(url, "https://x.com/rust/path?a=1");
    }

    #[test]
    fn test_query_containing_placeholder() {
        let url = format_search_url(&engine("https://x.com/?q=%s"), "%s");
        assert_eq!(url, "https://x.com/?q=%25s");
    }

    #[test]
    fn test_empty_query() {
        let url = format_search_url(&engine("https://github.com/search?q=%s"), "");
        assert_eq!(url, "https://github.com/search?q=");
    }
}
