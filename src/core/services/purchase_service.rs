//! Load/mutate/save round trips for the purchase collection.

use crate::{
    core::errors::{PortalError, Result},
    domain::{Purchase, PurchaseBook},
    storage::{CollectionKind, JsonStore},
};

/// CRUD operations over the purchase book, persisted as a whole document on
/// every mutation.
pub struct PurchaseService {
    store: JsonStore,
}

impl PurchaseService {
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }

    /// Returns the purchases in insertion order. A non-blank `status` keeps
    /// only entries whose label matches it case-insensitively; a blank or
    /// absent filter returns everything.
    pub fn list(&self, status: Option<&str>) -> Result<Vec<Purchase>> {
        let book = self.load_book()?;
        let purchases = match status.map(str::trim) {
            Some(filter) if !filter.is_empty() => book
                .purchases
                .into_iter()
                .filter(|purchase| purchase.has_status(filter))
                .collect(),
            _ => book.purchases,
        };
        Ok(purchases)
    }

    /// Fetches a purchase by id, matching case-insensitively.
    pub fn get(&self, id: &str) -> Result<Purchase> {
        let book = self.load_book()?;
        book.purchases
            .into_iter()
            .find(|purchase| purchase.has_id(id))
            .ok_or_else(|| PortalError::PurchaseNotFound(id.to_string()))
    }

    /// Appends a new purchase after checking id uniqueness (up to letter
    /// case) and returns the stored record.
    pub fn create(&self, purchase: Purchase) -> Result<Purchase> {
        let mut book = self.load_book()?;
        if book
            .purchases
            .iter()
            .any(|existing| existing.has_id(&purchase.id))
        {
            return Err(PortalError::PurchaseExists(purchase.id));
        }
        book.purchases.push(purchase.clone());
        self.store.save(CollectionKind::Purchases, &book)?;
        Ok(purchase)
    }

    /// Replaces the purchase stored under `id` in place. The stored id always
    /// equals the path id; a differing id in the body is ignored.
    pub fn update(&self, id: &str, mut purchase: Purchase) -> Result<()> {
        let mut book = self.load_book()?;
        let position = book
            .purchases
            .iter()
            .position(|existing| existing.has_id(id))
            .ok_or_else(|| PortalError::PurchaseNotFound(id.to_string()))?;
        purchase.id = id.to_string();
        book.purchases[position] = purchase;
        self.store.save(CollectionKind::Purchases, &book)
    }

    /// Removes every purchase matching `id` case-insensitively (zero or one
    /// expected in a well-formed book).
    pub fn delete(&self, id: &str) -> Result<()> {
        let mut book = self.load_book()?;
        let before = book.purchases.len();
        book.purchases.retain(|existing| !existing.has_id(id));
        if book.purchases.len() == before {
            return Err(PortalError::PurchaseNotFound(id.to_string()));
        }
        self.store.save(CollectionKind::Purchases, &book)
    }

    fn load_book(&self) -> Result<PurchaseBook> {
        Ok(self
            .store
            .load(CollectionKind::Purchases)?
            .unwrap_or_default())
    }
}
