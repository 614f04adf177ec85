//! Top-level facade crate for botwire.
//!
//! Re-exports the protocol core and the client runtime so users can depend
//! on a single crate.

pub mod core {
    pub use botwire_core::*;
}

pub mod client {
    pub use botwire_client::*;
}
