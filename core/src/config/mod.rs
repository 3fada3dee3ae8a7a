//! Endpoint and retry configuration.
//!
//! Split into:
//! - `types.rs` (data structures + defaults)
//! - `load.rs`  (IO: load_default + env overrides)

mod load;
mod types;

pub use load::load_default;
pub use types::*;
