//! Request-body extraction with case-insensitive field names.

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::ApiError;
use crate::storage::fold_keys;

/// JSON body extractor that folds object keys to lowercase before
/// deserializing, so field-name matching is case-insensitive on the wire the
/// same way it is in the store.
#[derive(Debug)]
pub struct PortalJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for PortalJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state).await?;
        let body = serde_json::from_value(fold_keys(value))
            .map_err(|err| ApiError::unprocessable(err.to_string()))?;
        Ok(Self(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header::CONTENT_TYPE, Request as HttpRequest},
    };

    use crate::domain::{Profile, Purchase};

    fn json_request(payload: &str) -> Request {
        HttpRequest::builder()
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string()))
            .expect("build request")
    }

    #[tokio::test]
    async fn folds_body_keys_before_deserializing() {
        let request = json_request(r#"{"Id": "Ord-1", "PRICE": 2.5, "Status": "pending"}"#);

        let PortalJson(purchase): PortalJson<Purchase> =
            PortalJson::from_request(request, &()).await.expect("extract");

        assert_eq!(purchase.id, "Ord-1");
        assert_eq!(purchase.status, "pending");
    }

    #[tokio::test]
    async fn folded_keys_reach_multi_word_fields() {
        let request = json_request(r#"{"PersonType": "company", "TaxId": "30-1-2"}"#);

        let PortalJson(profile): PortalJson<Profile> =
            PortalJson::from_request(request, &()).await.expect("extract");

        assert_eq!(profile.person_type, "company");
        assert_eq!(profile.tax_id, "30-1-2");
    }

    #[tokio::test]
    async fn malformed_payload_is_a_client_error() {
        let request = json_request("{not valid json");

        let err = PortalJson::<Purchase>::from_request(request, &())
            .await
            .expect_err("garbage must not extract");
        assert!(err.status().is_client_error(), "got {}", err.status());
    }
}
