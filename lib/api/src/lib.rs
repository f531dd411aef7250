//! # scoutX API
//!
//! REST presentation surface for the scoutX player similarity engine.
//!
//! The API is a thin adapter: it resolves request bodies into the engine's
//! query types, runs them against the shared [`scoutx_storage::ScoutContext`],
//! and renders records and scores as JSON. Zero-survivor results are a valid
//! `200` with an empty list; unknown ids are `404`.

pub mod rest;

pub use rest::RestApi;
