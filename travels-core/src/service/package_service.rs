use std::sync::Arc;

use tracing::info;

use crate::error::TravelsError;
use crate::model::Package;
use crate::repository::PackageRepository;

pub struct PackageService {
    packages: Arc<dyn PackageRepository>,
}

impl PackageService {
    pub fn new(packages: Arc<dyn PackageRepository>) -> Self {
        Self { packages }
    }

    pub async fn list(&self) -> Result<Vec<Package>, TravelsError> {
        Ok(self.packages.find_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Package, TravelsError> {
        self.packages
            .find_by_id(id)
            .await?
            .ok_or(TravelsError::NotFound {
                resource: "Package",
                id,
            })
    }

    /// Fresh creates only: an existing id is rejected.
    pub async fn add(&self, package: Package) -> Result<Package, TravelsError> {
        if self.packages.find_by_id(package.id).await?.is_some() {
            return Err(TravelsError::AlreadyExists(format!(
                "Package with is id: {} already exists",
                package.id
            )));
        }
        self.packages.save(&package).await?;
        info!(package_id = package.id, "package added");
        Ok(package)
    }
}
