//! # fairway-store
//!
//! Remote backing-store access and the image ingestion pipeline.
//!
//! This crate provides:
//! - a thin client for the store's REST surface (filtered selects, RPC)
//! - the existence guard that makes ingestion idempotent
//! - the prioritized insertion strategy chain for binary payloads
//! - the catalog-driven ingestion driver and its offline SQL-generation
//!   variant
//! - a mock store for deterministic tests
//!
//! ## Example
//!
//! ```rust,ignore
//! use fairway_core::AERIAL_CATALOG;
//! use fairway_store::{ingest, RestStore, StoreConfig};
//!
//! let config = StoreConfig::from_env()?;
//! let store = RestStore::new(&config)?;
//! let outcome = ingest::run_catalog(&store, "GUIDELINES/images".as_ref(), AERIAL_CATALOG).await?;
//! println!("{}", outcome.summary);
//! ```

pub mod client;
pub mod config;
pub mod images;
pub mod ingest;
pub mod insert;
pub mod mock;
pub mod sqlgen;

pub use client::RestClient;
pub use config::{StoreConfig, ENV_STORE_KEY, ENV_STORE_URL};
pub use images::{ReferenceStore, RestStore};
pub use ingest::{run_catalog, IngestOutcome};
pub use insert::{
    InsertChain, InsertMethod, RawExecuteSql, StoredFunctionBase64, StoredFunctionHex,
};
pub use sqlgen::{generate_insert_files, GeneratedSql};
