//! Process-global store registry and collection internals.
//!
//! Each address names an independent store instance holding named databases
//! of named collections. Collections are plain vectors of documents behind
//! an async lock, so every operation is a suspension point and insertion
//! order is the iteration order.
//!
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use once_cell::sync::Lazy;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::{Document, Filter};

/// All store instances in this process, keyed by address
static REGISTRY: Lazy<std::sync::RwLock<HashMap<String, Arc<StoreInner>>>> =
    Lazy::new(|| std::sync::RwLock::new(HashMap::new()));

/// One store instance: its databases plus a count of open client handles
pub(crate) struct StoreInner {
    pub(crate) databases: RwLock<HashMap<String, Arc<DatabaseInner>>>,
    pub(crate) active_clients: AtomicUsize,
}

pub(crate) struct DatabaseInner {
    pub(crate) collections: RwLock<HashMap<String, Arc<CollectionInner>>>,
}

pub(crate) struct CollectionInner {
    documents: RwLock<Vec<Document>>,
}

/// Look up the store behind an address, creating it on first use
pub(crate) fn store_for(addr: &str) -> Arc<StoreInner> {
    let mut registry = REGISTRY.write().unwrap();
    registry
        .entry(addr.to_string())
        .or_insert_with(|| {
            Arc::new(StoreInner {
                databases: RwLock::new(HashMap::new()),
                active_clients: AtomicUsize::new(0),
            })
        })
        .clone()
}

/// Number of client handles currently open against an address.
///
/// Exists so the scoped acquire/release discipline is observable: after a
/// handler finishes, its connection must be gone again on success and
/// failure paths alike.
pub fn active_connections(addr: &str) -> usize {
    REGISTRY
        .read()
        .unwrap()
        .get(addr)
        .map(|store| store.active_clients.load(Ordering::Relaxed))
        .unwrap_or(0)
}

impl DatabaseInner {
    pub(crate) fn new() -> Self {
        Self {
            collections: RwLock::new(HashMap::new()),
        }
    }
}

impl CollectionInner {
    pub(crate) fn new() -> Self {
        Self {
            documents: RwLock::new(Vec::new()),
        }
    }

    /// Append one document; duplicates are permitted
    pub(crate) async fn insert_one(&self, document: Document) {
        self.documents.write().await.push(document);
    }

    /// All matching documents in insertion order
    pub(crate) async fn find(&self, filter: &Filter) -> Vec<Document> {
        self.documents
            .read()
            .await
            .iter()
            .filter(|document| filter.matches(document))
            .cloned()
            .collect()
    }

    /// Set one field on the first matching document; reports whether any matched
    pub(crate) async fn update_one(&self, filter: &Filter, field: &str, value: Value) -> bool {
        let mut documents = self.documents.write().await;
        match documents.iter_mut().find(|document| filter.matches(document)) {
            Some(document) => {
                document.set(field, value);
                true
            }
            None => false,
        }
    }

    /// Remove every matching document, returning how many were removed
    pub(crate) async fn delete_many(&self, filter: &Filter) -> usize {
        let mut documents = self.documents.write().await;
        let before = documents.len();
        documents.retain(|document| !filter.matches(document));
        before - documents.len()
    }
}
