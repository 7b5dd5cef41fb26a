use async_trait::async_trait;
use sqlx::PgPool;

use travels_core::model::Package;
use travels_core::repository::{PackageRepository, RepositoryError};

pub struct PostgresPackageRepository {
    pool: PgPool,
}

impl PostgresPackageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct PackageRow {
    id: i32,
    package_name: String,
    trip_duration: String,
    cost_per_person: i32,
}

impl From<PackageRow> for Package {
    fn from(row: PackageRow) -> Self {
        Package {
            id: row.id,
            package_name: row.package_name,
            trip_duration: row.trip_duration,
            cost_per_person: row.cost_per_person,
        }
    }
}

#[async_trait]
impl PackageRepository for PostgresPackageRepository {
    async fn find_all(&self) -> Result<Vec<Package>, RepositoryError> {
        let rows = sqlx::query_as::<_, PackageRow>(
            "SELECT id, package_name, trip_duration, cost_per_person FROM package",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Package::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Package>, RepositoryError> {
        let row = sqlx::query_as::<_, PackageRow>(
            "SELECT id, package_name, trip_duration, cost_per_person \
             FROM package WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Package::from))
    }

    // Duplicate ids are rejected upstream by the package service.
    async fn save(&self, package: &Package) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO package (id, package_name, trip_duration, cost_per_person)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(package.id)
        .bind(&package.package_name)
        .bind(&package.trip_duration)
        .bind(package.cost_per_person)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
