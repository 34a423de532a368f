use std::collections::HashMap;

use percent_encoding::{percent_encode, AsciiSet, CONTROLS};

/// https://url.spec.whatwg.org/#fragment-percent-encode-set
const FRAGMENT: &AsciiSet = &CONTROLS.add(b' ').add(b'"').add(b'<').add(b'>').add(b'`');

/// https://url.spec.whatwg.org/#path-percent-encode-set
const PATH: &AsciiSet = &FRAGMENT.add(b'#').add(b'?').add(b'{').add(b'}');

/// https://url.spec.whatwg.org/#userinfo-percent-encode-set
const USERINFO: &AsciiSet = &PATH
    .add(b'/')
    .add(b':')
    .add(b';')
    .add(b'=')
    .add(b'@')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'|');

/// `+` and `%` must never pass through unencoded or the query parser on the
/// host side reassembles them into the wrong characters.
const ACADEMY_SET: &AsciiSet = &USERINFO.add(b'+').add(b'%');

/// `percent_encoding` crate recommends you to create your own set for encoding.
/// To be consistent in the whole codebase - we created a function that can be used
/// for encoding related stuff.
pub fn url_encode(data: &[u8]) -> String {
    percent_encode(data, ACADEMY_SET).to_string()
}

/// Serialize a query mapping into a URL query string.
///
/// Values are percent-encoded; key order follows map iteration order and is
/// not significant to the service.
pub fn format_query(params: &HashMap<String, String>) -> String {
    params
        .iter()
        .map(|(key, value)| format!("{}={}", key, url_encode(value.as_bytes())))
        .collect::<Vec<String>>()
        .join("&")
}

#[cfg(test)]
mod should {
    use super::*;

    #[test]
    fn encode_reserved_characters() {
        assert_eq!(url_encode(b"a b+c"), "a%20b%2Bc");
        assert_eq!(url_encode(b"plain"), "plain");
    }

    #[test]
    fn format_query_with_all_pairs() {
        let params = HashMap::from([
            ("a".to_string(), "1".to_string()),
            ("b".to_string(), "x".to_string()),
        ]);

        let query = format_query(&params);
        let mut pairs: Vec<&str> = query.split('&').collect();
        pairs.sort_unstable();

        assert_eq!(pairs, vec!["a=1", "b=x"]);
    }

    #[test]
    fn format_query_encodes_values() {
        let params = HashMap::from([("search".to_string(), "rust 101".to_string())]);

        assert_eq!(format_query(&params), "search=rust%20101");
    }

    #[test]
    fn format_empty_query() {
        assert_eq!(format_query(&HashMap::new()), "");
    }
}
