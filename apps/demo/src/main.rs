//! # Satchel Demo
//!
//! Terminal harness for the cart drawer engine: mounts a drawer over the
//! headless [`MemoryPage`], points the HTTP transport at a storefront, and
//! drives it from stdin commands.
//!
//! ## Configuration
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. SATCHEL_STORE_URL env var          (overrides the base URL)        │
//! │  2. SATCHEL_CONFIG env var             (path to a satchel.toml)        │
//! │  3. platform config dir satchel.toml   (when present)                  │
//! │  4. built-in defaults                  (localhost, 350ms debounce)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Commands
//! ```text
//! show                 print the drawer's rendered state
//! open / close / toggle
//! add <variant> [qty]  add to cart (opens the drawer on success)
//! qty <variant> <qty>  debounced quantity edit (0 removes)
//! remove <variant>     immediate removal
//! checkout / viewcart  opaque navigations (printed)
//! quit
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use serde::Deserialize;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use satchel_core::VariantId;
use satchel_drawer::{CartDrawer, DrawerConfig, MemoryPage};
use satchel_transport::{HttpCartTransport, TransportConfig};

// =============================================================================
// Configuration
// =============================================================================

/// The demo's satchel.toml shape: one section per library crate.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DemoConfig {
    transport: TransportConfig,
    drawer: DrawerConfig,
}

impl DemoConfig {
    /// Loads configuration with the documented precedence.
    fn load() -> Self {
        let path = std::env::var_os("SATCHEL_CONFIG")
            .map(PathBuf::from)
            .or_else(DrawerConfig::default_path)
            .filter(|p| p.exists());

        let mut config = match path {
            Some(path) => match std::fs::read_to_string(&path)
                .map_err(|e| e.to_string())
                .and_then(|raw| toml::from_str::<DemoConfig>(&raw).map_err(|e| e.to_string()))
            {
                Ok(config) => {
                    info!(path = %path.display(), "config loaded");
                    config
                }
                Err(error) => {
                    warn!(path = %path.display(), %error, "config unreadable; using defaults");
                    DemoConfig::default()
                }
            },
            None => {
                debug!("no config file; using defaults");
                DemoConfig::default()
            }
        };

        if let Ok(url) = std::env::var("SATCHEL_STORE_URL") {
            match url.parse() {
                Ok(parsed) => config.transport.base_url = parsed,
                Err(error) => warn!(%url, %error, "SATCHEL_STORE_URL ignored"),
            }
        }

        config
    }
}

// =============================================================================
// Entry Point
// =============================================================================

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = DemoConfig::load();
    info!(store = %config.transport.base_url, "satchel demo starting");

    let transport = Arc::new(HttpCartTransport::new(config.transport)?);
    let page = MemoryPage::new();
    let drawer = match CartDrawer::mount(page.clone(), transport, config.drawer) {
        Ok(drawer) => drawer,
        Err(error) => {
            // A storefront page without cart markup is not an error condition
            debug!(%error, "page incomplete; cart drawer disabled");
            return Ok(());
        }
    };

    // Initial sync so the badge is right before the first open; a dead
    // store just means an empty drawer until the next interaction.
    if let Err(error) = drawer.fetch().await {
        warn!(%error, "initial cart fetch failed");
    }
    print_state(&page);

    repl(drawer, page).await;
    Ok(())
}

// =============================================================================
// Command Loop
// =============================================================================

async fn repl(drawer: CartDrawer, page: MemoryPage) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    print_help();

    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            _ => break, // EOF
        };
        let mut words = line.split_whitespace();
        let command = match words.next() {
            Some(word) => word,
            None => continue,
        };

        match command {
            "help" => print_help(),
            "show" => print_state(&page),
            "open" => drawer.open().await,
            "close" => drawer.close(),
            "toggle" => drawer.toggle().await,
            "add" => match parse_variant(words.next()) {
                Some(variant) => {
                    let quantity = words.next().and_then(|q| q.parse().ok()).unwrap_or(1);
                    drawer.add(variant, quantity).await;
                    print_state(&page);
                }
                None => println!("usage: add <variant> [qty]"),
            },
            "qty" => match (parse_variant(words.next()), words.next()) {
                (Some(variant), Some(quantity)) => {
                    drawer.update(variant, quantity.parse().unwrap_or(0));
                    println!("scheduled (commits after the debounce delay)");
                }
                _ => println!("usage: qty <variant> <qty>"),
            },
            "remove" => match parse_variant(words.next()) {
                Some(variant) => {
                    drawer.remove(variant).await;
                    print_state(&page);
                }
                None => println!("usage: remove <variant>"),
            },
            "checkout" => drawer.checkout(),
            "viewcart" => drawer.view_cart(),
            "quit" | "exit" => break,
            other => println!("unknown command: {other} (try 'help')"),
        }
    }

    info!("satchel demo stopped");
}

fn parse_variant(word: Option<&str>) -> Option<VariantId> {
    word.and_then(|w| w.parse::<u64>().ok()).map(VariantId)
}

// =============================================================================
// Output
// =============================================================================

fn print_help() {
    println!("commands: show | open | close | toggle | add <variant> [qty] | qty <variant> <qty> | remove <variant> | checkout | viewcart | quit");
}

fn print_state(page: &MemoryPage) {
    let (badge, badge_visible) = page.badge();
    println!(
        "drawer: {}  badge: {}",
        if page.is_open() { "OPEN" } else { "closed" },
        if badge_visible { badge.as_str() } else { "(hidden)" },
    );

    let items = page.items();
    if page.empty_visible() || items.is_empty() {
        println!("  (cart is empty)");
    } else {
        for item in &items {
            println!(
                "  variant {:>12}  qty {:>3}  [{}]",
                item.variant_id, item.quantity, item.line_key
            );
        }
    }
    println!("  subtotal: {}", page.subtotal());

    for url in page.navigations() {
        println!("  navigated to: {url}");
    }
}
