//! # restaurant-db - MongoDB bootstrap for the restaurant service
//!
//! ## Environment Variables
//!
//! - `DATABASE_URL` or `MONGODB_URL`: MongoDB connection string
//! - `RESTAURANT_ADDRESS`, `RESTAURANT_DATABASE`, `RESTAURANT_CONNECT_TIMEOUT`: explicit overrides
//! - `RUST_LOG`: log filter (defaults to `info`)

pub mod cli;
pub mod config;
pub mod db;
pub mod errors;
pub mod handlers;
