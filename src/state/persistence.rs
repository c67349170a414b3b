use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{MealError, Result};
use crate::models::OrderRecord;

/// Well-known name under which the most recent order is kept.
pub const LATEST_ORDER_KEY: &str = "orderData";

/// Where placed orders go and where the confirmation view reads them back.
pub trait OrderStore {
    /// Persist a record, returning its order id.
    fn save(&mut self, record: &OrderRecord) -> Result<String>;

    fn load(&self, order_id: &str) -> Result<Option<OrderRecord>>;

    /// The most recently saved order, if any.
    fn latest(&self) -> Result<Option<OrderRecord>>;
}

/// Stores each order as pretty JSON in a directory, plus a copy of the
/// latest one under [`LATEST_ORDER_KEY`].
#[derive(Debug, Clone)]
pub struct JsonFileOrderStore {
    dir: PathBuf,
}

impl JsonFileOrderStore {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, name: &str) -> Result<PathBuf> {
        let valid = !name.is_empty()
            && name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(MealError::InvalidInput(format!("invalid order id '{}'", name)));
        }
        Ok(self.dir.join(format!("{}.json", name)))
    }

    fn read(&self, name: &str) -> Result<Option<OrderRecord>> {
        let path = self.path_for(name)?;
        if !path.exists() {
            debug!(path = %path.display(), "order file not found");
            return Ok(None);
        }
        let content = fs::read_to_string(&path)?;
        Ok(Some(serde_json::from_str(&content)?))
    }
}

impl OrderStore for JsonFileOrderStore {
    fn save(&mut self, record: &OrderRecord) -> Result<String> {
        fs::create_dir_all(&self.dir)?;

        let json = serde_json::to_string_pretty(record)?;
        fs::write(self.path_for(&record.order_id)?, &json)?;
        fs::write(self.path_for(LATEST_ORDER_KEY)?, &json)?;

        info!(order_id = %record.order_id, dir = %self.dir.display(), "order saved");
        Ok(record.order_id.clone())
    }

    fn load(&self, order_id: &str) -> Result<Option<OrderRecord>> {
        self.read(order_id)
    }

    fn latest(&self) -> Result<Option<OrderRecord>> {
        self.read(LATEST_ORDER_KEY)
    }
}

/// In-process store, mainly for tests and dry runs.
#[derive(Debug, Clone, Default)]
pub struct MemoryOrderStore {
    orders: HashMap<String, OrderRecord>,
    latest: Option<String>,
}

impl MemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

impl OrderStore for MemoryOrderStore {
    fn save(&mut self, record: &OrderRecord) -> Result<String> {
        self.orders.insert(record.order_id.clone(), record.clone());
        self.latest = Some(record.order_id.clone());
        Ok(record.order_id.clone())
    }

    fn load(&self, order_id: &str) -> Result<Option<OrderRecord>> {
        Ok(self.orders.get(order_id).cloned())
    }

    fn latest(&self) -> Result<Option<OrderRecord>> {
        Ok(self
            .latest
            .as_ref()
            .and_then(|id| self.orders.get(id))
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EnergyState, MacroTotals, MealPlan, MealSelection, Profile, Restrictions};
    use crate::planner::order::{assemble, OrderInputs};
    use tempfile::TempDir;

    fn sample_record() -> OrderRecord {
        assemble(
            OrderInputs {
                profile: &Profile::default(),
                energy: &EnergyState::default(),
                restrictions: &Restrictions::default(),
                meal_plan: &MealPlan::default(),
                selection: &MealSelection::default(),
                macros: &MacroTotals::default(),
            },
            99,
        )
    }

    #[test]
    fn test_json_store_roundtrip() {
        let dir = TempDir::new().unwrap();
        let mut store = JsonFileOrderStore::new(dir.path().join("orders"));

        let record = sample_record();
        let id = store.save(&record).unwrap();
        assert_eq!(id, record.order_id);

        assert_eq!(store.load(&id).unwrap(), Some(record.clone()));
        assert_eq!(store.latest().unwrap(), Some(record));
        assert!(dir.path().join("orders").join("orderData.json").exists());
    }

    #[test]
    fn test_json_store_missing_order() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileOrderStore::new(dir.path());
        assert_eq!(store.load("SW1").unwrap(), None);
        assert_eq!(store.latest().unwrap(), None);
    }

    #[test]
    fn test_json_store_rejects_path_like_ids() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileOrderStore::new(dir.path());
        assert!(matches!(
            store.load("../etc/passwd"),
            Err(MealError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_memory_store_latest_tracks_last_save() {
        let mut store = MemoryOrderStore::new();
        let first = sample_record();
        let second = sample_record();
        store.save(&first).unwrap();
        store.save(&second).unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.latest().unwrap().map(|r| r.order_id), Some(second.order_id));
        assert!(store.load(&first.order_id).unwrap().is_some());
    }
}
