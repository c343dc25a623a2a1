//! In-process document store shared by the campus lab exercises.
//!
//! Models the document database the lab servers talk to: a client connects
//! to an address, picks a database and a collection, performs exactly one
//! operation, and closes. Collections are schemaless vectors of JSON-valued
//! documents; queries use the small set of predicate shapes the labs bake
//! into their routes. Each exercise owns its own database namespace, so
//! nothing is shared between labs except the store process itself.
//!
/// Document type and the `doc!` construction macro
pub mod document;
/// Query predicates
pub mod filter;
/// Client, database, and collection handles
pub mod client;
/// Error type
pub mod error;
/// Registry and collection internals
mod store;

pub use client::{Client, Collection, Database};
pub use document::Document;
pub use error::Error;
pub use filter::Filter;
pub use store::active_connections;
