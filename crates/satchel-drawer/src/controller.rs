//! # Drawer Controller
//!
//! Owns the drawer's open/closed state machine, focus management, and the
//! orchestration of every mutation: transport call → fresh snapshot →
//! render.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Drawer States                                      │
//! │                                                                         │
//! │            open(): capture focus, visuals+ARIA on,                      │
//! │                    focus first, install trap                            │
//! │  ┌────────┐ ─────────────────────────────────────► ┌────────┐          │
//! │  │ Closed │                                        │  Open  │          │
//! │  └────────┘ ◄───────────────────────────────────── └────────┘          │
//! │            close(): visuals+ARIA off, drop trap,                        │
//! │                     restore captured focus                              │
//! │                                                                         │
//! │  open() while Open: no-op     close() while Closed: no-op              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Mutation Ordering
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  AT MOST ONE IN-FLIGHT MUTATING REQUEST                                 │
//! │                                                                         │
//! │  add_item ──► guard taken? ──no──► dropped (logged, not queued)        │
//! │                   │yes                                                  │
//! │                   ▼                                                     │
//! │          add_line → fetch_cart → render → open                          │
//! │                   │                                                     │
//! │                   ▼ (success OR failure)                                │
//! │          guard dropped → flag cleared                                   │
//! │                                                                         │
//! │  Overlapping mutations would interleave their re-fetch steps and let   │
//! │  a stale snapshot render over a fresh one. Dropping, not queueing,     │
//! │  keeps the order trivially correct.                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All transport errors stop here: logged via `tracing`, never surfaced as
//! UI. A failed add leaves the trigger visually inert; a failed refresh
//! leaves the previous render in place.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use satchel_core::{Cart, VariantId};
use satchel_transport::CartTransport;
use tracing::{debug, warn};

use crate::config::DrawerConfig;
use crate::debounce::Debouncer;
use crate::error::DrawerResult;
use crate::events::Key;
use crate::page::{DrawerPage, FocusTarget};
use crate::render;

// =============================================================================
// UI State
// =============================================================================

/// Client-owned, ephemeral drawer state.
#[derive(Default)]
struct UiState {
    is_open: bool,

    /// Element focused when the drawer opened; restored at close if it
    /// still accepts focus.
    last_focused: Option<FocusTarget>,

    /// Panel focus order frozen at open time; the trap cycles within it.
    trap: Vec<FocusTarget>,
}

// =============================================================================
// In-Flight Guard
// =============================================================================

/// Clears the in-flight flag on drop, whatever path the mutation exits by.
struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}

// =============================================================================
// Drawer Controller
// =============================================================================

/// The drawer's state machine and mutation orchestrator.
///
/// Every collaborator is an instance field — the transport injected as
/// `Arc<dyn CartTransport>`, the page as its strategy object — so multiple
/// independent drawers can coexist and tests can substitute both.
pub struct DrawerController {
    page: Box<dyn DrawerPage>,
    transport: Arc<dyn CartTransport>,
    config: DrawerConfig,
    debouncer: Debouncer,
    ui: Mutex<UiState>,
    in_flight: AtomicBool,
}

impl DrawerController {
    pub fn new(
        page: Box<dyn DrawerPage>,
        transport: Arc<dyn CartTransport>,
        config: DrawerConfig,
    ) -> Self {
        DrawerController {
            page,
            transport,
            config,
            debouncer: Debouncer::new(),
            ui: Mutex::new(UiState::default()),
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn is_open(&self) -> bool {
        self.ui.lock().expect("ui state poisoned").is_open
    }

    // -------------------------------------------------------------------------
    // State Machine
    // -------------------------------------------------------------------------

    /// Closed → Open. No-op while already open.
    pub fn open(&self) {
        let mut ui = self.ui.lock().expect("ui state poisoned");
        if ui.is_open {
            return;
        }
        ui.is_open = true;
        ui.last_focused = self.page.focused();

        self.page.set_open_visuals(true);
        self.page.set_aria_expanded(true);

        let trap = self.page.focusables();
        if let Some(first) = trap.first() {
            self.page.focus(first);
        }
        ui.trap = trap;
        debug!("drawer opened");
    }

    /// Open → Closed. No-op while already closed.
    pub fn close(&self) {
        let mut ui = self.ui.lock().expect("ui state poisoned");
        if !ui.is_open {
            return;
        }
        ui.is_open = false;
        ui.trap.clear();

        self.page.set_open_visuals(false);
        self.page.set_aria_expanded(false);

        if let Some(previous) = ui.last_focused.take() {
            if !self.page.focus(&previous) {
                debug!(element = %previous.0, "focus restore skipped; element gone");
            }
        }
        debug!("drawer closed");
    }

    /// Close if open; otherwise fetch a fresh cart and open.
    pub async fn toggle(&self) {
        if self.is_open() {
            self.close();
        } else {
            self.fetch_then_open().await;
        }
    }

    /// Fetches and renders, then opens — opening even when the fetch
    /// failed, so the user is never stuck with an unopenable drawer.
    pub async fn fetch_then_open(&self) {
        if let Err(error) = self.refresh().await {
            warn!(%error, "cart fetch failed; opening with last rendered state");
        }
        self.open();
    }

    // -------------------------------------------------------------------------
    // Synchronization
    // -------------------------------------------------------------------------

    /// Fetches the current server cart and renders it.
    ///
    /// This is the only way page content ever changes: a fresh snapshot,
    /// never a local patch.
    pub async fn refresh(&self) -> DrawerResult<Cart> {
        let cart = self.transport.fetch_cart().await?;
        render::render(self.page.as_ref(), Some(&cart), &self.config.default_currency);
        Ok(cart)
    }

    /// Adds `quantity` units of `variant`, re-fetches, renders, and opens
    /// the drawer.
    ///
    /// Dropped (not queued) when another mutation is in flight. Errors are
    /// logged and swallowed; the drawer does not open on failure.
    pub async fn add_item(&self, variant: VariantId, quantity: i64) {
        let Some(_guard) = self.begin_mutation() else {
            debug!(%variant, "add dropped; another mutation is in flight");
            return;
        };

        let result = async {
            self.transport.add_line(variant, quantity).await?;
            self.refresh().await?;
            DrawerResult::Ok(())
        }
        .await;

        match result {
            Ok(()) => self.open(),
            Err(error) => warn!(%variant, %error, "add to cart failed"),
        }
    }

    /// Schedules a debounced quantity update for `variant`.
    ///
    /// Open/closed state is not changed by the eventual commit; the user is
    /// editing inside the drawer already.
    pub fn change_quantity(self: &Arc<Self>, variant: VariantId, quantity: i64) {
        let controller = Arc::clone(self);
        self.debouncer.schedule(
            variant,
            self.config.debounce_delay(),
            async move {
                controller.commit_quantity(variant, quantity).await;
            },
        );
    }

    /// Removes the line for `variant` immediately.
    ///
    /// Removal is a discrete action, not a typing stream: it bypasses the
    /// debounce delay and cancels any pending edit for the same variant.
    pub async fn remove_item(&self, variant: VariantId) {
        if self.debouncer.cancel(variant) {
            debug!(%variant, "pending quantity edit superseded by removal");
        }
        self.commit_quantity(variant, 0).await;
    }

    /// Commits a quantity (0 = remove) under the in-flight guard, then
    /// re-fetches and renders.
    async fn commit_quantity(&self, variant: VariantId, quantity: i64) {
        let Some(_guard) = self.begin_mutation() else {
            debug!(%variant, "quantity update dropped; another mutation is in flight");
            return;
        };

        let result = async {
            self.transport.set_line_quantity(variant, quantity).await?;
            self.refresh().await?;
            DrawerResult::Ok(())
        }
        .await;

        if let Err(error) = result {
            warn!(%variant, quantity, %error, "quantity update failed");
        }
    }

    fn begin_mutation(&self) -> Option<InFlightGuard<'_>> {
        self.in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
            .then_some(InFlightGuard {
                flag: &self.in_flight,
            })
    }

    // -------------------------------------------------------------------------
    // Keyboard
    // -------------------------------------------------------------------------

    /// Handles a key event while the drawer may be open.
    ///
    /// Returns true when the event was consumed (the page should suppress
    /// its default behavior, the way a trap swallows a boundary Tab).
    pub fn handle_key(&self, key: &Key) -> bool {
        match key {
            Key::Escape => {
                if self.is_open() {
                    self.close();
                    true
                } else {
                    false
                }
            }
            Key::Tab { shift } => self.cycle_trap(*shift),
        }
    }

    /// Tab/Shift+Tab confinement: only the boundary moves are intercepted;
    /// interior moves are the page's own business.
    fn cycle_trap(&self, shift: bool) -> bool {
        let (first, last) = {
            let ui = self.ui.lock().expect("ui state poisoned");
            if !ui.is_open || ui.trap.is_empty() {
                return false;
            }
            (
                ui.trap.first().cloned().expect("trap not empty"),
                ui.trap.last().cloned().expect("trap not empty"),
            )
        };

        let focused = self.page.focused();
        if shift && focused.as_ref() == Some(&first) {
            self.page.focus(&last);
            true
        } else if !shift && focused.as_ref() == Some(&last) {
            self.page.focus(&first);
            true
        } else {
            false
        }
    }

    // -------------------------------------------------------------------------
    // Opaque Navigations
    // -------------------------------------------------------------------------

    /// Checkout trigger: an opaque redirect, nothing more.
    pub fn checkout(&self) {
        self.page.navigate(&self.config.checkout_url);
    }

    /// View-cart trigger: an opaque redirect, nothing more.
    pub fn view_cart(&self) {
        self.page.navigate(&self.config.cart_url);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
