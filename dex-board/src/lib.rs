//! Server-rendered tables of the DexScreener token boosts and token profiles.
//!
//! Each page request activates one view: a single upstream fetch whose
//! settled state is rendered as HTML.
//!
pub mod board;
pub mod fetch;
pub mod handlers;
pub mod normalizer;
pub mod render;
pub mod routes;
pub mod types;
pub mod utils;

#[cfg(test)]
mod tests;
