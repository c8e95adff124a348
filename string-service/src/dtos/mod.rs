use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct UppercaseRequest {
    #[serde(default)]
    pub s: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct UppercaseResponse {
    pub v: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub err: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ConcatRequest {
    #[serde(default)]
    pub s: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ConcatResponse {
    pub v: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub err: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CountRequest {
    #[serde(default)]
    pub s: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct CountResponse {
    pub v: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn err_is_omitted_when_absent() {
        let body = serde_json::to_value(UppercaseResponse {
            v: "AAA".to_string(),
            err: None,
        })
        .unwrap();
        assert_eq!(body, json!({ "v": "AAA" }));
    }

    #[test]
    fn err_is_rendered_when_present() {
        let body = serde_json::to_value(ConcatResponse {
            v: String::new(),
            err: Some("empty string".to_string()),
        })
        .unwrap();
        assert_eq!(body, json!({ "v": "", "err": "empty string" }));
    }

    #[test]
    fn missing_input_decodes_as_empty() {
        let req: CountRequest = serde_json::from_str("{}").unwrap();
        assert!(req.s.is_empty());
    }
}
