//! # REST Backend
//!
//! Speaks the order service's JSON contract:
//!
//! | Method | Path | Request body | Response |
//! |---|---|---|---|
//! | GET | `/orders` | none | JSON array |
//! | POST | `/orders` | JSON draft | JSON entity with assigned id |
//! | PUT | `/orders/:id` | none | JSON entity, advanced |
//! | DELETE | `/orders/:id` | none | ignored |
//!
//! Ids are appended as a single escaped path segment, so `a/b` becomes `/orders/a%2Fb`.
//!
//! Failures are classified once, here:
//! - no response at all (refused, DNS, timeout) → [`ApiError::Network`]
//! - any non-2xx status → [`ApiError::Status`] carrying the response body
//! - a 2xx body that does not decode → [`ApiError::Malformed`]

use async_trait::async_trait;
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Display;
use std::marker::PhantomData;
use store_framework::{ApiError, Backend, StoreEntity};
use thiserror::Error;
use tracing::{debug, instrument};

/// The base URL has no path to append a collection to (e.g. `mailto:`).
#[derive(Debug, Error)]
#[error("{0} cannot be used as a base URL")]
pub struct BaseUrlError(pub String);

/// A [`Backend`] for one REST collection (e.g., `/orders`).
pub struct RestBackend<T> {
    http: reqwest::Client,
    collection_url: Url,
    _entity: PhantomData<fn() -> T>,
}

impl<T> RestBackend<T> {
    /// # Arguments
    /// * `http` - Shared HTTP client (timeouts are configured on it)
    /// * `base_url` - Service root, e.g. `http://localhost:5000`; a trailing slash is ignored
    /// * `collection` - Collection path, e.g. `orders`
    pub fn new(
        http: reqwest::Client,
        base_url: Url,
        collection: &str,
    ) -> Result<Self, BaseUrlError> {
        if base_url.cannot_be_a_base() {
            return Err(BaseUrlError(base_url.to_string()));
        }
        let mut collection_url = base_url;
        if let Ok(mut segments) = collection_url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(collection.split('/').filter(|segment| !segment.is_empty()));
        }
        Ok(Self {
            http,
            collection_url,
            _entity: PhantomData,
        })
    }

    pub fn collection_url(&self) -> &str {
        self.collection_url.as_str()
    }

    /// The collection URL with `id` appended as one escaped path segment.
    pub fn item_url(&self, id: &impl Display) -> Url {
        let mut url = self.collection_url.clone();
        // `new` rejected URLs without path segments.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.push(&id.to_string());
        }
        url
    }
}

fn network(e: reqwest::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

/// Reads the body, rejecting non-2xx statuses before any decoding.
async fn read_body(response: reqwest::Response) -> Result<String, ApiError> {
    let status = response.status();
    let body = response.text().await.map_err(network)?;
    if !status.is_success() {
        return Err(ApiError::Status {
            status: status.as_u16(),
            body,
        });
    }
    Ok(body)
}

async fn decode<R: DeserializeOwned>(response: reqwest::Response) -> Result<R, ApiError> {
    let body = read_body(response).await?;
    serde_json::from_str(&body).map_err(|e| ApiError::Malformed(e.to_string()))
}

#[async_trait]
impl<T> Backend<T> for RestBackend<T>
where
    T: StoreEntity + DeserializeOwned,
    T::Draft: Serialize,
{
    #[instrument(skip(self), fields(url = %self.collection_url))]
    async fn list(&self) -> Result<Vec<T>, ApiError> {
        debug!("GET");
        let response = self
            .http
            .get(self.collection_url.clone())
            .send()
            .await
            .map_err(network)?;
        decode(response).await
    }

    #[instrument(skip(self, draft), fields(url = %self.collection_url))]
    async fn create(&self, draft: &T::Draft) -> Result<T, ApiError> {
        debug!(?draft, "POST");
        let response = self
            .http
            .post(self.collection_url.clone())
            .json(draft)
            .send()
            .await
            .map_err(network)?;
        decode(response).await
    }

    #[instrument(skip(self))]
    async fn advance(&self, id: &T::Id) -> Result<T, ApiError> {
        debug!("PUT");
        let response = self
            .http
            .put(self.item_url(id))
            .send()
            .await
            .map_err(network)?;
        decode(response).await
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &T::Id) -> Result<(), ApiError> {
        debug!("DELETE");
        let response = self
            .http
            .delete(self.item_url(id))
            .send()
            .await
            .map_err(network)?;
        read_body(response).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Order;

    fn backend(base: &str) -> RestBackend<Order> {
        RestBackend::new(reqwest::Client::new(), Url::parse(base).unwrap(), "orders").unwrap()
    }

    #[test]
    fn test_urls_tolerate_trailing_slash() {
        let backend = backend("http://localhost:5000/");
        assert_eq!(backend.collection_url(), "http://localhost:5000/orders");
        assert_eq!(
            backend.item_url(&"abc").as_str(),
            "http://localhost:5000/orders/abc"
        );
        assert_eq!(
            self::backend("http://erp.local/api/").collection_url(),
            "http://erp.local/api/orders"
        );
    }

    #[test]
    fn test_item_url_escapes_reserved_characters() {
        let backend = backend("http://localhost:5000");
        assert_eq!(
            backend.item_url(&"a/b").as_str(),
            "http://localhost:5000/orders/a%2Fb"
        );
        assert_eq!(
            backend.item_url(&"x?force=1").as_str(),
            "http://localhost:5000/orders/x%3Fforce=1"
        );
    }

    #[test]
    fn test_rejects_cannot_be_a_base_url() {
        let result = RestBackend::<Order>::new(
            reqwest::Client::new(),
            Url::parse("mailto:orders@example.com").unwrap(),
            "orders",
        );
        assert!(result.is_err());
    }
}
