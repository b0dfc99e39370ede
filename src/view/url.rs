//! One-way conversions between URL query strings and page queries.
//!
//! `parse_params` runs on navigation, `serialize_query` on user input.
//! Neither calls the other, so a state change never feeds back into itself.

use tracing::warn;

/// A page query that round-trips through URL parameters
pub trait UrlQuery: Default {
    /// Build from decoded pairs. Absent, empty or unknown values fall back
    /// to their defaults.
    fn from_pairs(pairs: &QueryPairs) -> Self;

    /// Non-default parameters in a stable order
    fn to_pairs(&self) -> Vec<(&'static str, String)>;
}

/// Decoded `key=value` pairs of a query string, in order of appearance
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryPairs(Vec<(String, String)>);

impl QueryPairs {
    /// Decode a raw query string (with or without a leading `?`).
    /// Both `+` and `%20` decode to a space. Undecodable input yields no pairs.
    pub fn decode(raw: &str) -> Self {
        let raw = raw.strip_prefix('?').unwrap_or(raw);
        match serde_urlencoded::from_str::<Vec<(String, String)>>(raw) {
            Ok(pairs) => Self(pairs),
            Err(e) => {
                warn!(error = %e, query = %raw, "Ignoring malformed query string");
                Self::default()
            }
        }
    }

    /// First value for `key`, treating an empty value as absent
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .filter(|v| !v.is_empty())
    }
}

/// Split `/path?query` into its path and raw query
pub fn split_url(url: &str) -> (&str, &str) {
    url.split_once('?').unwrap_or((url, ""))
}

/// URL (or a `?`-prefixed query string) -> page query
pub fn parse_params<Q: UrlQuery>(url: &str) -> Q {
    let (_, raw) = split_url(url);
    Q::from_pairs(&QueryPairs::decode(raw))
}

/// Page query -> URL for `path`. Values are percent-encoded; default
/// parameters are left out, and with none left the bare path is returned.
pub fn serialize_query<Q: UrlQuery>(path: &str, query: &Q) -> String {
    let encoded: Vec<String> = query
        .to_pairs()
        .into_iter()
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(&v)))
        .collect();

    if encoded.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, encoded.join("&"))
    }
}
