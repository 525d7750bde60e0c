//! # satchel-drawer: Cart Drawer Synchronization Engine
//!
//! Keeps a slide-in cart drawer's contents, item quantities, and subtotal
//! consistent with a server-held cart, under concurrent user edits, through
//! asynchronous network calls, with accessible focus management.
//!
//! ## Control Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  user action ──► EventRouter ──► DrawerController operation            │
//! │                                        │                                │
//! │                                        ▼                                │
//! │                               CartTransport call                        │
//! │                                        │ success                        │
//! │                                        ▼                                │
//! │                          fresh Cart snapshot ──► render ──► page       │
//! │                                        │                                │
//! │                                        ▼                                │
//! │                          drawer opens / stays open                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Guarantees
//!
//! - **Snapshot rendering**: the page only ever shows a cart the server
//!   just returned; nothing is patched locally.
//! - **One mutation in flight**: a second add/update arriving while one is
//!   pending is dropped, so re-fetch-and-render sequences never interleave.
//! - **One timer per line**: rapid quantity edits coalesce into a single
//!   network call per quiescence period.
//! - **Accessible modality**: focus is captured on open, trapped inside the
//!   panel, and restored on close; Escape always closes.
//!
//! ## Module Organization
//! ```text
//! satchel_drawer/
//! ├── api.rs         ◄─── CartDrawer facade (mount, add, update, fetch...)
//! ├── controller.rs  ◄─── state machine, focus trap, in-flight guard
//! ├── render.rs      ◄─── cart snapshot → page mutations
//! ├── markup.rs      ◄─── escaping + item row construction
//! ├── debounce.rs    ◄─── per-variant mutation debouncer
//! ├── events.rs      ◄─── delegated event routing
//! ├── page.rs        ◄─── DrawerPage strategy trait + hooks
//! ├── memory.rs      ◄─── headless page for tests and the demo
//! ├── config.rs      ◄─── DrawerConfig (+ TOML loading)
//! └── error.rs       ◄─── DrawerError
//! ```

pub mod api;
pub mod config;
pub mod controller;
pub mod debounce;
pub mod error;
pub mod events;
pub mod markup;
pub mod memory;
pub mod page;
pub mod render;

#[cfg(test)]
mod testutil;

pub use api::CartDrawer;
pub use config::DrawerConfig;
pub use controller::DrawerController;
pub use debounce::Debouncer;
pub use error::{DrawerError, DrawerResult};
pub use events::{EventNode, EventRouter, Key, PageEvent, Selectors};
pub use memory::MemoryPage;
pub use page::{DrawerPage, FocusTarget, Hook, ItemNode};
pub use render::render;
