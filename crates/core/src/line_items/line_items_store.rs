use std::sync::Mutex;

use log::debug;

use super::line_items_model::LineItem;
use crate::errors::Result;

/// Ordered, append-only list of accepted line items.
///
/// Items keep insertion order and have no identity beyond their position.
/// One mutex guards every operation.
#[derive(Debug, Default)]
pub struct LineItemStore {
    items: Mutex<Vec<LineItem>>,
}

impl LineItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&self, item: LineItem) -> Result<()> {
        let mut items = self.items.lock()?;
        debug!("Appending line item '{}'", item.name);
        items.push(item);
        Ok(())
    }

    /// Appends all items under a single lock acquisition, so they land
    /// contiguously and in order.
    pub fn append_all(&self, new_items: Vec<LineItem>) -> Result<usize> {
        let mut items = self.items.lock()?;
        let count = new_items.len();
        items.extend(new_items);
        debug!("Appended {} line items, store now holds {}", count, items.len());
        Ok(count)
    }

    pub fn clear(&self) -> Result<()> {
        let mut items = self.items.lock()?;
        debug!("Clearing {} line items", items.len());
        items.clear();
        Ok(())
    }

    /// Snapshot of the current contents, in insertion order.
    pub fn all(&self) -> Result<Vec<LineItem>> {
        let items = self.items.lock()?;
        Ok(items.clone())
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.items.lock()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}
