//! View-specific DTO types, one module per dashboard visualization.
//!
//! These are the output shapes consumed by the charts, the map and the
//! municipality table. The service layer in [`crate::services`] produces
//! them; the HTTP layer serializes them as-is.

pub mod demographics;
pub mod export;
pub mod histogram;
pub mod municipalities;
pub mod statistics;
pub mod temporal;
