//! Recording mock for the transport seam, shared by the controller, router,
//! and facade tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use satchel_core::{Cart, Money, VariantId};
use satchel_transport::{CartTransport, TransportError, TransportResult};

/// In-memory [`CartTransport`] that records calls and can be told to fail
/// or to hold mutations in flight for a while.
pub(crate) struct MockTransport {
    cart: Mutex<Cart>,
    add_calls: Mutex<Vec<(VariantId, i64)>>,
    set_calls: Mutex<Vec<(VariantId, i64)>>,
    fetch_count: AtomicUsize,
    fail_fetch: AtomicBool,
    fail_add: AtomicBool,
    delay: Mutex<Duration>,
}

impl MockTransport {
    /// Mock serving an empty EUR cart.
    pub fn new() -> Arc<Self> {
        Self::with_cart(Cart {
            items: Vec::new(),
            total_price: Money::zero(),
            currency: "EUR".to_string(),
            item_count: None,
        })
    }

    /// Mock serving `cart` on every fetch.
    pub fn with_cart(cart: Cart) -> Arc<Self> {
        Arc::new(MockTransport {
            cart: Mutex::new(cart),
            add_calls: Mutex::new(Vec::new()),
            set_calls: Mutex::new(Vec::new()),
            fetch_count: AtomicUsize::new(0),
            fail_fetch: AtomicBool::new(false),
            fail_add: AtomicBool::new(false),
            delay: Mutex::new(Duration::ZERO),
        })
    }

    /// Makes every mutating call take this long (under a paused clock this
    /// keeps a request "in flight" until the test advances time).
    pub fn set_delay(&self, delay: Duration) {
        *self.delay.lock().unwrap() = delay;
    }

    pub fn fail_fetch(&self, fail: bool) {
        self.fail_fetch.store(fail, Ordering::SeqCst);
    }

    pub fn fail_add(&self, fail: bool) {
        self.fail_add.store(fail, Ordering::SeqCst);
    }

    pub fn add_calls(&self) -> Vec<(VariantId, i64)> {
        self.add_calls.lock().unwrap().clone()
    }

    pub fn set_calls(&self) -> Vec<(VariantId, i64)> {
        self.set_calls.lock().unwrap().clone()
    }

    pub fn fetch_count(&self) -> usize {
        self.fetch_count.load(Ordering::SeqCst)
    }

    async fn in_flight_delay(&self) {
        let delay = *self.delay.lock().unwrap();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl CartTransport for MockTransport {
    async fn fetch_cart(&self) -> TransportResult<Cart> {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);
        if self.fail_fetch.load(Ordering::SeqCst) {
            return Err(TransportError::Network("mock fetch failure".into()));
        }
        Ok(self.cart.lock().unwrap().clone())
    }

    async fn add_line(&self, variant: VariantId, quantity: i64) -> TransportResult<()> {
        self.add_calls.lock().unwrap().push((variant, quantity));
        self.in_flight_delay().await;
        if self.fail_add.load(Ordering::SeqCst) {
            return Err(TransportError::Http {
                status: 422,
                body: "mock add rejected".to_string(),
            });
        }
        Ok(())
    }

    async fn set_line_quantity(&self, variant: VariantId, quantity: i64) -> TransportResult<()> {
        self.set_calls.lock().unwrap().push((variant, quantity));
        self.in_flight_delay().await;
        Ok(())
    }
}
