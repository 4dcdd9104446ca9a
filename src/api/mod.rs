//! API Module
//!
//! HTTP access to the PokeAPI service.
//!
//! # Endpoints
//! - `GET /location-area/?offset=&limit=` - Paged location areas
//! - `GET /location-area/{name}` - One area with its encounter table
//! - `GET /location/{name}` - One location with its region
//! - `GET /pokemon/{name}` - One pokemon

pub mod client;

pub use client::{ApiClient, PAGE_SIZE};
