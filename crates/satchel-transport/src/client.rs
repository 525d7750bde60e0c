//! # Remote Cart Client
//!
//! The [`CartTransport`] seam and its HTTP implementation.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Remote Cart Operations                             │
//! │                                                                         │
//! │  fetch_cart()               GET  <base>/cart.js                        │
//! │                             ◄─── JSON cart snapshot                     │
//! │                                                                         │
//! │  add_line(v, qty)           POST <base>/cart/add.js                    │
//! │                             ───► id=<v>&quantity=<qty>                 │
//! │                                                                         │
//! │  set_line_quantity(v, qty)  POST <base>/cart/update.js                 │
//! │                             ───► updates[<v>]=<qty>   (0 = remove)     │
//! │                                                                         │
//! │  Mutations return (), NOT a cart: the caller re-fetches to observe     │
//! │  the effect. The server stays the single source of truth.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why a trait?
//! The drawer controller takes `Arc<dyn CartTransport>`, so unit tests
//! inject a recording mock and multiple drawers can share one client.

use async_trait::async_trait;
use reqwest::{Client, Response};
use satchel_core::{Cart, VariantId};
use tracing::{debug, warn};

use crate::config::TransportConfig;
use crate::error::{TransportError, TransportResult};

// =============================================================================
// Transport Seam
// =============================================================================

/// Async interface to the remote cart resource.
///
/// ## Contract
/// No operation mutates client-held state. After `add_line` or
/// `set_line_quantity` succeeds, the only way to observe the new cart is
/// another `fetch_cart` call.
#[async_trait]
pub trait CartTransport: Send + Sync {
    /// Retrieves the current server cart state.
    async fn fetch_cart(&self) -> TransportResult<Cart>;

    /// Requests the server add `quantity` units of `variant`.
    async fn add_line(&self, variant: VariantId, quantity: i64) -> TransportResult<()>;

    /// Requests the server set the line for `variant` to exactly `quantity`.
    ///
    /// A quantity of 0 removes the line; the server is the authority on
    /// whether it disappears from the next snapshot.
    async fn set_line_quantity(&self, variant: VariantId, quantity: i64) -> TransportResult<()>;
}

// =============================================================================
// HTTP Implementation
// =============================================================================

/// [`CartTransport`] over HTTP, speaking the storefront's AJAX cart API.
///
/// Holds a cookie jar so every request carries the storefront session,
/// mirroring the same-origin-credentials behavior of an on-page client.
pub struct HttpCartTransport {
    config: TransportConfig,
    client: Client,
}

impl HttpCartTransport {
    /// Creates a client for the configured storefront.
    pub fn new(config: TransportConfig) -> TransportResult<Self> {
        let client = Client::builder()
            .cookie_store(true)
            .timeout(config.timeout())
            .build()?;
        Ok(HttpCartTransport { config, client })
    }

    /// Maps a non-success response to [`TransportError::Http`], capturing
    /// the body text when it can be read — the remote cart resource puts
    /// its diagnostics there ("sold out", "invalid variant", ...).
    async fn reject(response: Response) -> TransportError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        TransportError::Http { status, body }
    }
}

#[async_trait]
impl CartTransport for HttpCartTransport {
    async fn fetch_cart(&self) -> TransportResult<Cart> {
        let url = self.config.endpoint(&self.config.cart_path)?;
        debug!(%url, "fetching cart snapshot");

        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(Self::reject(response).await);
        }

        let body = response.text().await?;
        let cart: Cart = serde_json::from_str(&body).map_err(|e| {
            warn!(error = %e, "cart snapshot did not parse");
            TransportError::MalformedResponse(e.to_string())
        })?;

        debug!(
            items = cart.items.len(),
            total = cart.total_price.minor(),
            "cart snapshot fetched"
        );
        Ok(cart)
    }

    async fn add_line(&self, variant: VariantId, quantity: i64) -> TransportResult<()> {
        let url = self.config.endpoint(&self.config.add_path)?;
        debug!(%variant, quantity, "adding line");

        let form = [
            ("id", variant.to_string()),
            ("quantity", quantity.to_string()),
        ];
        let response = self.client.post(url).form(&form).send().await?;
        if !response.status().is_success() {
            return Err(Self::reject(response).await);
        }
        Ok(())
    }

    async fn set_line_quantity(&self, variant: VariantId, quantity: i64) -> TransportResult<()> {
        let url = self.config.endpoint(&self.config.update_path)?;
        debug!(%variant, quantity, "updating line quantity");

        // The update endpoint keys the form field by variant id
        let form = [(format!("updates[{variant}]"), quantity.to_string())];
        let response = self.client.post(url).form(&form).send().await?;
        if !response.status().is_success() {
            return Err(Self::reject(response).await);
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use satchel_core::Money;
    use serde_json::json;
    use wiremock::matchers::{body_string_contains, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn transport_for(server: &MockServer) -> HttpCartTransport {
        let config = TransportConfig::new(&server.uri()).expect("config");
        HttpCartTransport::new(config).expect("client")
    }

    #[tokio::test]
    async fn fetch_cart_parses_snapshot() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/cart.js"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [{
                    "variant_id": 42,
                    "quantity": 2,
                    "price": 500,
                    "title": "Tea Towel"
                }],
                "total_price": 1000,
                "currency": "EUR",
                "item_count": 2
            })))
            .mount(&server)
            .await;

        let cart = transport_for(&server).await.fetch_cart().await.expect("cart");
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].variant_id, VariantId(42));
        assert_eq!(cart.total_price, Money::from_minor(1000));
    }

    #[tokio::test]
    async fn fetch_cart_maps_non_success_with_body() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/cart.js"))
            .respond_with(ResponseTemplate::new(500).set_body_string("backend down"))
            .mount(&server)
            .await;

        let err = transport_for(&server).await.fetch_cart().await.unwrap_err();
        match err {
            TransportError::Http { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "backend down");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn fetch_cart_rejects_malformed_body() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/cart.js"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
            .mount(&server)
            .await;

        let err = transport_for(&server).await.fetch_cart().await.unwrap_err();
        assert!(matches!(err, TransportError::MalformedResponse(_)));
        assert!(err.is_server_error());
    }

    #[tokio::test]
    async fn add_line_posts_form_encoded_fields() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/cart/add.js"))
            .and(header("content-type", "application/x-www-form-urlencoded"))
            .and(body_string_contains("id=42"))
            .and(body_string_contains("quantity=2"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        transport_for(&server)
            .await
            .add_line(VariantId(42), 2)
            .await
            .expect("add succeeds");
    }

    #[tokio::test]
    async fn add_line_surfaces_server_body_text() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/cart/add.js"))
            .respond_with(ResponseTemplate::new(422).set_body_string("variant 42 is sold out"))
            .mount(&server)
            .await;

        let err = transport_for(&server)
            .await
            .add_line(VariantId(42), 1)
            .await
            .unwrap_err();
        match err {
            TransportError::Http { status, body } => {
                assert_eq!(status, 422);
                assert!(body.contains("sold out"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn set_line_quantity_keys_form_by_variant() {
        let server = MockServer::start().await;

        // Form encoding percent-escapes the brackets in updates[42]
        Mock::given(method("POST"))
            .and(path("/cart/update.js"))
            .and(body_string_contains("updates%5B42%5D=3"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        transport_for(&server)
            .await
            .set_line_quantity(VariantId(42), 3)
            .await
            .expect("update succeeds");
    }

    #[tokio::test]
    async fn set_line_quantity_zero_is_a_valid_request() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/cart/update.js"))
            .and(body_string_contains("updates%5B7%5D=0"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        transport_for(&server)
            .await
            .set_line_quantity(VariantId(7), 0)
            .await
            .expect("removal request succeeds");
    }
}
