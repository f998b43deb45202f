use crate::error::StoreError;

/// Key the last submitted city is stored under.
pub const CITY_STORAGE_KEY: &str = "userCity";

/// Persistence for the last submitted city.
///
/// The value is overwritten on every valid submission and read once at
/// startup to prefill the city input.
pub trait CityStore {
    fn load(&self) -> Option<String>;
    fn save(&mut self, city: &str) -> Result<(), StoreError>;
}

/// In-memory store. The city lives as long as the value does.
#[derive(Debug, Clone, Default)]
pub struct MemoryCityStore {
    city: Option<String>,
}

impl MemoryCityStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CityStore for MemoryCityStore {
    fn load(&self) -> Option<String> {
        self.city.clone()
    }

    fn save(&mut self, city: &str) -> Result<(), StoreError> {
        self.city = Some(city.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_overwrites() {
        let mut store = MemoryCityStore::new();
        assert_eq!(store.load(), None);
        store.save("Bamenda").unwrap();
        store.save("Pune").unwrap();
        assert_eq!(store.load().as_deref(), Some("Pune"));
    }
}
