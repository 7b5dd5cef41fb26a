use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use travels_core::model::Ticket;
use travels_core::predicate::{Constraint, TicketPredicate};
use travels_core::repository::{RepositoryError, TicketRepository};

pub struct PostgresTicketRepository {
    pool: PgPool,
}

impl PostgresTicketRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const SELECT_TICKET: &str =
    "SELECT ticket_id, customer_id, package_id, travel_date, total_members, total_cost \
     FROM ticket";

#[derive(sqlx::FromRow)]
struct TicketRow {
    ticket_id: i32,
    customer_id: i32,
    package_id: i32,
    travel_date: chrono::NaiveDate,
    total_members: i32,
    total_cost: i32,
}

impl From<TicketRow> for Ticket {
    fn from(row: TicketRow) -> Self {
        Ticket {
            ticket_id: row.ticket_id,
            customer_id: row.customer_id,
            package_id: row.package_id,
            travel_date: row.travel_date,
            total_members: row.total_members,
            total_cost: row.total_cost,
        }
    }
}

/// Translate a predicate into a parameterized WHERE clause. Values are
/// always bound, never spliced into the SQL text.
fn predicate_query(predicate: &TicketPredicate) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(SELECT_TICKET);
    for (i, constraint) in predicate.constraints().iter().enumerate() {
        builder.push(if i == 0 { " WHERE " } else { " AND " });
        match constraint {
            Constraint::CustomerIdEq(id) => {
                builder.push("customer_id = ").push_bind(*id);
            }
            Constraint::PackageIdEq(id) => {
                builder.push("package_id = ").push_bind(*id);
            }
            Constraint::TravelDateEq(date) => {
                builder.push("travel_date = ").push_bind(*date);
            }
        }
    }
    builder
}

#[async_trait]
impl TicketRepository for PostgresTicketRepository {
    async fn find_all(&self) -> Result<Vec<Ticket>, RepositoryError> {
        let rows = sqlx::query_as::<_, TicketRow>(SELECT_TICKET)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Ticket::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Ticket>, RepositoryError> {
        let row = sqlx::query_as::<_, TicketRow>(
            "SELECT ticket_id, customer_id, package_id, travel_date, total_members, total_cost \
             FROM ticket WHERE ticket_id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Ticket::from))
    }

    // Create-or-replace: a colliding ticket_id overwrites the stored row.
    async fn save(&self, ticket: &Ticket) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO ticket (ticket_id, customer_id, package_id, travel_date, total_members, total_cost)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (ticket_id) DO UPDATE
            SET customer_id = $2, package_id = $3, travel_date = $4, total_members = $5, total_cost = $6
            "#,
        )
        .bind(ticket.ticket_id)
        .bind(ticket.customer_id)
        .bind(ticket.package_id)
        .bind(ticket.travel_date)
        .bind(ticket.total_members)
        .bind(ticket.total_cost)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM ticket WHERE ticket_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn find_by_predicate(
        &self,
        predicate: &TicketPredicate,
    ) -> Result<Vec<Ticket>, RepositoryError> {
        let mut builder = predicate_query(predicate);
        let rows = builder
            .build_query_as::<TicketRow>()
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Ticket::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn empty_predicate_builds_an_unfiltered_select() {
        let sql = predicate_query(&TicketPredicate::new()).into_sql();
        assert_eq!(sql, SELECT_TICKET);
    }

    #[test]
    fn constraints_become_a_parameterized_conjunction() {
        let predicate = TicketPredicate::new()
            .customer_id(123)
            .package_id(999)
            .travel_date(NaiveDate::from_ymd_opt(2022, 12, 15).unwrap());

        let sql = predicate_query(&predicate).into_sql();
        assert_eq!(
            sql,
            format!(
                "{SELECT_TICKET} WHERE customer_id = $1 AND package_id = $2 AND travel_date = $3"
            )
        );
    }

    #[test]
    fn single_constraint_has_no_trailing_and() {
        let sql = predicate_query(&TicketPredicate::new().package_id(7)).into_sql();
        assert_eq!(sql, format!("{SELECT_TICKET} WHERE package_id = $1"));
    }
}
