use async_trait::async_trait;
use sqlx::PgPool;

use travels_core::model::Customer;
use travels_core::repository::{CustomerRepository, RepositoryError};

pub struct PostgresCustomerRepository {
    pool: PgPool,
}

impl PostgresCustomerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct CustomerRow {
    customer_id: i32,
    first_name: String,
    last_name: String,
    email: String,
    password: String,
}

impl From<CustomerRow> for Customer {
    fn from(row: CustomerRow) -> Self {
        Customer {
            customer_id: row.customer_id,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            password: row.password,
        }
    }
}

#[async_trait]
impl CustomerRepository for PostgresCustomerRepository {
    async fn find_all(&self) -> Result<Vec<Customer>, RepositoryError> {
        let rows = sqlx::query_as::<_, CustomerRow>(
            "SELECT customer_id, first_name, last_name, email, password FROM customer",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Customer::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Customer>, RepositoryError> {
        let row = sqlx::query_as::<_, CustomerRow>(
            "SELECT customer_id, first_name, last_name, email, password \
             FROM customer WHERE customer_id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Customer::from))
    }

    // Sign-up is an upsert on id: saving an existing customer overwrites.
    async fn save(&self, customer: &Customer) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO customer (customer_id, first_name, last_name, email, password)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (customer_id) DO UPDATE
            SET first_name = $2, last_name = $3, email = $4, password = $5
            "#,
        )
        .bind(customer.customer_id)
        .bind(&customer.first_name)
        .bind(&customer.last_name)
        .bind(&customer.email)
        .bind(&customer.password)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM customer WHERE customer_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
