mod appointments;
mod attendance;
mod auth;
pub mod client;
mod payments;
mod services;
pub mod types;

pub use client::*;
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests;
