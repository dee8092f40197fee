//! Lead Tracker Library
//!
//! In-memory CRUD backend for local businesses with a derived lead score,
//! plus the HTTP client used by the command-line tools.
//!
//! # Modules
//!
//! - `api`: HTTP surface (handlers, router).
//! - `core`: Domain logic (models, store, scoring, filtering, errors).
//! - `integrations`: Client-side tooling (API client, export, seeding).
//! - `obs`: Tracing setup.
//! - `api_client`: Typed client for the backend API.
//! - `config`: Server and client configuration.
//! - `errors`: Error types.
//! - `export`: CSV and JSON export.
//! - `filter`: List filtering.
//! - `handlers`: HTTP request handlers.
//! - `models`: Business record and request payloads.
//! - `routes`: Router assembly.
//! - `scoring`: Lead score computation.
//! - `seed`: Bulk loading through the API.
//! - `store`: In-memory business store.
//! - `validation`: Payload validation and the validating JSON extractor.

pub mod api;
pub mod core;
pub mod integrations;
pub mod obs;

pub mod api_client;
pub mod config;
pub mod errors;
pub mod export;
pub mod filter;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod scoring;
pub mod seed;
pub mod store;
pub mod validation;
