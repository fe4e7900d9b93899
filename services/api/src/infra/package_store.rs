use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use uuid::Uuid;

use crate::domain::repository::PackageRepository;
use crate::domain::types::Package;
use crate::error::ApiError;

/// In-process document map implementing the package-store boundary.
/// A database-backed repository can replace this behind the same trait
/// without touching use cases or handlers.
#[derive(Clone, Default)]
pub struct InMemoryPackageRepository {
    inner: Arc<Mutex<HashMap<Uuid, Package>>>,
}

impl InMemoryPackageRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PackageRepository for InMemoryPackageRepository {
    async fn create(&self, package: &Package) -> Result<(), ApiError> {
        let mut map = self.inner.lock().expect("package store mutex poisoned");
        map.insert(package.id, package.clone());
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Package>, ApiError> {
        let map = self.inner.lock().expect("package store mutex poisoned");
        let mut packages: Vec<Package> = map.values().cloned().collect();
        packages.sort_by_key(|p| p.created_at);
        Ok(packages)
    }

    async fn find(&self, id: Uuid) -> Result<Option<Package>, ApiError> {
        let map = self.inner.lock().expect("package store mutex poisoned");
        Ok(map.get(&id).cloned())
    }

    async fn update(&self, package: &Package) -> Result<(), ApiError> {
        let mut map = self.inner.lock().expect("package store mutex poisoned");
        map.insert(package.id, package.clone());
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ApiError> {
        let mut map = self.inner.lock().expect("package store mutex poisoned");
        Ok(map.remove(&id).is_some())
    }
}
