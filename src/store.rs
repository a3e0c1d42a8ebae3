//! Record store backed by whole-file JSON snapshots.
//!
//! All three collections are loaded wholesale at startup and rewritten
//! wholesale after every mutation. The store is single-process and
//! single-threaded: there is no file locking, and concurrent processes
//! race on the JSON files with last-writer-wins semantics.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::StoreError;
use crate::models::{Customer, Order, Product};

const PRODUCTS_FILE: &str = "products.json";
const CUSTOMERS_FILE: &str = "customers.json";
const ORDERS_FILE: &str = "orders.json";

pub struct Store {
    data_dir: PathBuf,
    pub products: BTreeMap<String, Product>,
    pub customers: BTreeMap<String, Customer>,
    pub orders: BTreeMap<String, Order>,
}

impl Store {
    /// Open the store rooted at `data_dir`, creating the directory if needed
    /// and loading whatever collections already exist on disk. A missing
    /// file is an empty collection, not an error.
    pub fn open(data_dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir).map_err(|e| StoreError::Io {
            path: data_dir.clone(),
            source: e,
        })?;

        let mut store = Store {
            data_dir,
            products: BTreeMap::new(),
            customers: BTreeMap::new(),
            orders: BTreeMap::new(),
        };
        store.load_all()?;
        Ok(store)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn load_all(&mut self) -> Result<(), StoreError> {
        for product in load_collection::<Product>(&self.data_dir.join(PRODUCTS_FILE))? {
            self.products.insert(product.id.clone(), product);
        }
        for customer in load_collection::<Customer>(&self.data_dir.join(CUSTOMERS_FILE))? {
            self.customers.insert(customer.id.clone(), customer);
        }
        for order in load_collection::<Order>(&self.data_dir.join(ORDERS_FILE))? {
            self.orders.insert(order.id.clone(), order);
        }

        debug!(
            products = self.products.len(),
            customers = self.customers.len(),
            orders = self.orders.len(),
            "Store loaded"
        );
        Ok(())
    }

    /// Rewrite all three collections. Every mutating command ends here.
    pub fn save_all(&self) -> Result<(), StoreError> {
        save_collection(
            &self.data_dir.join(PRODUCTS_FILE),
            &self.products.values().collect::<Vec<_>>(),
        )?;
        save_collection(
            &self.data_dir.join(CUSTOMERS_FILE),
            &self.customers.values().collect::<Vec<_>>(),
        )?;
        save_collection(
            &self.data_dir.join(ORDERS_FILE),
            &self.orders.values().collect::<Vec<_>>(),
        )?;

        debug!("Store saved");
        Ok(())
    }
}

fn load_collection<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, StoreError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => {
            return Err(StoreError::Io {
                path: path.to_path_buf(),
                source: e,
            })
        }
    };

    serde_json::from_str(&raw).map_err(|e| StoreError::Json {
        path: path.to_path_buf(),
        source: e,
    })
}

fn save_collection<T: Serialize>(path: &Path, records: &[&T]) -> Result<(), StoreError> {
    let json = serde_json::to_string_pretty(records).map_err(|e| StoreError::Json {
        path: path.to_path_buf(),
        source: e,
    })?;

    fs::write(path, json).map_err(|e| StoreError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}
