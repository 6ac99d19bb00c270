//! HTTP layer — the `Transport` seam and its `reqwest` implementation.

pub mod transport;

#[cfg(feature = "http")]
pub mod client;

#[cfg(feature = "http")]
pub use client::ReqwestTransport;
pub use transport::Transport;
