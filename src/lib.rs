//! # Sentinela RDW Backend
//!
//! Aggregation engine for a public-health RDW surveillance dashboard.
//!
//! This crate ingests patient hematology records (RDW — red cell
//! distribution width — plus demographic and location metadata), aggregates
//! them by municipality, time, age, and sex, and exposes the resulting
//! summaries to chart, map, and table consumers through a REST API.
//!
//! ## Features
//!
//! - **Ingestion**: deserialize record batches from JSON with tolerant,
//!   field-level exclusion rules for missing data
//! - **Statistics**: global totals, mean RDW, elevated counts, active cities
//! - **Municipality Aggregation**: per-city summaries with demographics
//! - **Temporal Aggregation**: daily per-city mean RDW series
//! - **Demographics**: age-group and sex distributions
//! - **Histogram**: fixed-bin global RDW frequency distribution
//! - **HTTP API**: RESTful endpoints for frontend integration
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Data Transfer Objects (DTOs) for API responses
//! - [`models`]: patient record type and pure classification helpers
//! - [`routes`]: view-specific DTO definitions
//! - [`services`]: the aggregation engine and dataset store
//! - [`http`]: Axum-based HTTP server and request handlers
//! - [`config`]: server configuration
//!
//! Processing is batch-oriented and atomic: one call transforms a full
//! in-memory record sequence into a consistent bundle of aggregates, or
//! fails leaving any previously installed aggregates untouched.

pub mod api;

pub mod config;
pub mod models;

pub mod routes;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
