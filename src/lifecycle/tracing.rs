//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the `tracing-subscriber` formatter used by the demo binary
//! and available to embedding applications.
//!
//! ## Configuration
//!
//! The compact format hides the crate/module prefix (`with_target(false)`); the actor
//! loop tags every event with `entity_type` instead, so lines stay short. The level is
//! read from `RUST_LOG`.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: startup (with preloaded size), shutdown (with final size)
//! - **Entity Operations**: Create, List, Get, Update, Delete and Actions
//! - **Client Calls**: one span per client method via `#[instrument]`
//! - **Errors**: not-found ids and failed hooks at `warn`
//!
//! ## Usage Examples
//!
//! ```bash
//! RUST_LOG=info cargo run     # lifecycle and mutations
//! RUST_LOG=debug cargo run    # full payloads and per-item resolution
//! RUST_LOG=catalog_cart::framework=debug cargo run
//! ```
//!
//! **With `RUST_LOG=info`**, the demo scenario reads:
//!
//! ```text
//! INFO Actor started entity_type="Product" size=0
//! INFO Actor started entity_type="Cart" size=0
//! INFO Created entity_type="Product" id=mg2k1x0f3q8z1c7d2w size=1
//! INFO Created entity_type="Cart" id=mg2k1x0g9a4n0r5u1e size=1
//! INFO Action ok entity_type="Cart" id=mg2k1x0g9a4n0r5u1e
//! ```

/// Initializes structured logging. Safe to call more than once; later calls are no-ops.
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // entity_type already says where an event came from
        .compact()
        .try_init();
}
