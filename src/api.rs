//! Wire types for `POST /api/search`, shared by the server and the client.

use serde::{Deserialize, Serialize};

use crate::lookup::{CompanyInfo, LookupStatus};

/// Path of the search endpoint.
pub const SEARCH_PATH: &str = "/api/search";

/// Search request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    #[serde(default)]
    pub company_name: Option<String>,
}

impl SearchRequest {
    pub fn new(company_name: impl Into<String>) -> Self {
        Self {
            company_name: Some(company_name.into()),
        }
    }
}

/// Successful search response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyInfoBody {
    pub name: String,
    pub logo: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub not_found: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub error: bool,
}

/// Error response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl From<CompanyInfo> for CompanyInfoBody {
    fn from(info: CompanyInfo) -> Self {
        Self {
            name: info.name,
            logo: info.logo,
            description: info.description,
            not_found: info.status == LookupStatus::NotFound,
            error: info.status == LookupStatus::Error,
        }
    }
}

impl From<CompanyInfoBody> for CompanyInfo {
    fn from(body: CompanyInfoBody) -> Self {
        let status = if body.error {
            LookupStatus::Error
        } else if body.not_found {
            LookupStatus::NotFound
        } else {
            LookupStatus::Found
        };
        Self {
            name: body.name,
            logo: body.logo,
            description: body.description,
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_found_omits_flags() {
        let body = CompanyInfoBody::from(CompanyInfo {
            name: "Acme".to_string(),
            logo: "https://example.com/acme.svg".to_string(),
            description: "Anvils.".to_string(),
            status: LookupStatus::Found,
        });
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "name": "Acme",
                "logo": "https://example.com/acme.svg",
                "description": "Anvils.",
            })
        );
    }

    #[test]
    fn test_not_found_flag_is_camel_case() {
        let body = CompanyInfoBody::from(CompanyInfo::not_found("foo bar"));
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["notFound"], json!(true));
        assert!(value.get("error").is_none());
    }

    #[test]
    fn test_status_from_flags() {
        let decode = |value: serde_json::Value| {
            CompanyInfo::from(serde_json::from_value::<CompanyInfoBody>(value).unwrap()).status
        };
        let base = json!({"name": "n", "logo": "l", "description": "d"});

        assert_eq!(decode(base.clone()), LookupStatus::Found);

        let mut not_found = base.clone();
        not_found["notFound"] = json!(true);
        assert_eq!(decode(not_found), LookupStatus::NotFound);

        let mut error = base;
        error["error"] = json!(true);
        error["notFound"] = json!(true);
        assert_eq!(decode(error), LookupStatus::Error);
    }

    #[test]
    fn test_request_field_name() {
        let request: SearchRequest =
            serde_json::from_value(json!({"companyName": "Tesla"})).unwrap();
        assert_eq!(request.company_name.as_deref(), Some("Tesla"));

        let request: SearchRequest = serde_json::from_value(json!({})).unwrap();
        assert!(request.company_name.is_none());
    }
}
