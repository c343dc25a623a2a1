//! Client handles for talking to a store.
//!
//! Every handler opens a fresh `Client` at the start of its invocation and
//! closes it at the end; nothing is pooled or reused across requests. The
//! release is unconditional: dropping the handle releases the connection on
//! every path, and `close` simply makes the release point explicit. Handles
//! derived from a client stop working once that client is closed.
//!
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use serde_json::Value;

use crate::error::Error;
use crate::store::{self, CollectionInner, DatabaseInner, StoreInner};
use crate::{Document, Filter};

/// Open connection to one store instance
pub struct Client {
    store: Arc<StoreInner>,
    open: Arc<AtomicBool>,
}

/// Named database namespace reached through a client
pub struct Database {
    store: Arc<StoreInner>,
    open: Arc<AtomicBool>,
    name: String,
}

/// Named collection within a database
pub struct Collection {
    store: Arc<StoreInner>,
    open: Arc<AtomicBool>,
    database: String,
    name: String,
}

impl Client {
    /// Connect to the store behind an address.
    ///
    /// An empty address is rejected; anything else names a store instance,
    /// created on first use.
    pub async fn connect(addr: &str) -> Result<Self, Error> {
        if addr.trim().is_empty() {
            return Err(Error::InvalidAddress(addr.to_string()));
        }
        let store = store::store_for(addr);
        store.active_clients.fetch_add(1, Ordering::Relaxed);
        Ok(Self {
            store,
            open: Arc::new(AtomicBool::new(true)),
        })
    }

    /// Namespace handle for one database
    pub fn database(&self, name: &str) -> Database {
        Database {
            store: Arc::clone(&self.store),
            open: Arc::clone(&self.open),
            name: name.to_string(),
        }
    }

    /// Close the connection.
    ///
    /// Consuming the client releases its slot; the same release runs on
    /// drop, so an early return cannot leak a connection.
    pub async fn close(self) {}
}

impl Drop for Client {
    fn drop(&mut self) {
        self.open.store(false, Ordering::Relaxed);
        self.store.active_clients.fetch_sub(1, Ordering::Relaxed);
    }
}

impl Database {
    /// Name of this database
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Handle for one collection, created on first operation
    pub fn collection(&self, name: &str) -> Collection {
        Collection {
            store: Arc::clone(&self.store),
            open: Arc::clone(&self.open),
            database: self.name.clone(),
            name: name.to_string(),
        }
    }
}

impl Collection {
    /// Name of this collection
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Insert exactly one document. Duplicates are permitted; there is no
    /// uniqueness invariant on any field.
    pub async fn insert_one(&self, document: Document) -> Result<(), Error> {
        self.inner().await?.insert_one(document).await;
        Ok(())
    }

    /// Fetch all documents matching the filter, in insertion order
    pub async fn find(&self, filter: &Filter) -> Result<Vec<Document>, Error> {
        Ok(self.inner().await?.find(filter).await)
    }

    /// Set one field on the first document matching the filter.
    ///
    /// Returns whether any document matched; a miss leaves the collection
    /// unchanged.
    pub async fn update_one(
        &self,
        filter: &Filter,
        field: &str,
        value: impl Into<Value>,
    ) -> Result<bool, Error> {
        Ok(self.inner().await?.update_one(filter, field, value.into()).await)
    }

    /// Remove every document matching the filter, returning the count
    /// removed. Zero is a valid outcome, not an error.
    pub async fn delete_many(&self, filter: &Filter) -> Result<usize, Error> {
        Ok(self.inner().await?.delete_many(filter).await)
    }

    async fn inner(&self) -> Result<Arc<CollectionInner>, Error> {
        if !self.open.load(Ordering::Relaxed) {
            return Err(Error::ConnectionClosed);
        }
        let database = self
            .store
            .databases
            .write()
            .await
            .entry(self.database.clone())
            .or_insert_with(|| Arc::new(DatabaseInner::new()))
            .clone();
        let collection = database
            .collections
            .write()
            .await
            .entry(self.name.clone())
            .or_insert_with(|| Arc::new(CollectionInner::new()))
            .clone();
        Ok(collection)
    }
}
