use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Deserialize)]
pub struct FetchRequest {
    #[serde(default)]
    pub search: String,
}

/// One organization as returned by the ProPublica search API.
///
/// Every field may be null upstream. Fields not listed here are kept in
/// `extra` so the record is relayed unmodified.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    pub ein: Option<i64>,
    pub strein: Option<String>,
    pub name: Option<String>,
    pub sub_name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub ntee_code: Option<String>,
    pub raw_ntee_code: Option<String>,
    pub subseccd: Option<i64>,
    pub has_subseccd: Option<bool>,
    pub have_filings: Option<bool>,
    pub have_extracts: Option<bool>,
    pub have_pdfs: Option<bool>,
    pub score: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Search results, both as decoded from upstream and as served from `/fetch`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub organizations: Vec<Organization>,
    #[serde(default)]
    pub total_results: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub err: Option<String>,
}

impl SearchResponse {
    /// Empty result carrying the reason the search could not be completed.
    pub fn failed(err: impl Into<String>) -> Self {
        Self {
            err: Some(err.into()),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_upstream_payload_with_nulls_and_extra_fields() {
        let upstream = json!({
            "total_results": 1,
            "num_pages": 1,
            "cur_page": 0,
            "organizations": [{
                "ein": 142007220,
                "strein": "14-2007220",
                "name": "Pro Publica Inc",
                "sub_name": null,
                "city": "New York",
                "state": "NY",
                "ntee_code": "A20",
                "raw_ntee_code": "A20",
                "subseccd": 3,
                "has_subseccd": true,
                "have_filings": null,
                "have_extracts": null,
                "have_pdfs": null,
                "score": 2.3,
                "fiscal_year": 2022
            }]
        });

        let response: SearchResponse = serde_json::from_value(upstream).unwrap();
        assert_eq!(response.total_results, 1);
        assert!(response.err.is_none());

        let org = &response.organizations[0];
        assert_eq!(org.ein, Some(142007220));
        assert_eq!(org.name.as_deref(), Some("Pro Publica Inc"));
        assert_eq!(org.sub_name, None);
        assert_eq!(org.extra["fiscal_year"], 2022);

        let relayed = serde_json::to_value(org).unwrap();
        assert_eq!(relayed["fiscal_year"], 2022);
        assert_eq!(relayed["sub_name"], Value::Null);
    }

    #[test]
    fn failed_response_is_empty_with_error() {
        let body = serde_json::to_value(SearchResponse::failed("timed out")).unwrap();
        assert_eq!(
            body,
            json!({ "organizations": [], "total_results": 0, "err": "timed out" })
        );
    }

    #[test]
    fn missing_search_decodes_as_empty() {
        let req: FetchRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.search, "");
    }
}
