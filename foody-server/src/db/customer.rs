//! Customer statements (`Clients`)

use async_trait::async_trait;
use shared::error::AppResult;
use shared::models::{Customer, CustomerCreate, ORDER_STATUS_PAID, RankedCustomer};

use super::{CustomerGateway, PgGateway};

#[async_trait]
impl CustomerGateway for PgGateway {
    async fn list_customers(&self) -> AppResult<Vec<Customer>> {
        let rows: Vec<Customer> = sqlx::query_as(
            r#"
            SELECT id_client AS id, nom AS last_name, prenom AS first_name,
                   contact, points_fidelite AS loyalty_points
            FROM Clients
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn top_customers(&self) -> AppResult<Vec<RankedCustomer>> {
        let rows: Vec<RankedCustomer> = sqlx::query_as(
            r#"
            SELECT c.id_client AS id, c.nom AS last_name, c.prenom AS first_name,
                   c.contact, c.points_fidelite AS loyalty_points,
                   RANK() OVER (ORDER BY COALESCE(paid.total, 0) DESC) AS rank
            FROM Clients c
            LEFT JOIN (
                SELECT id_client, SUM(total_commande) AS total
                FROM Commandes
                WHERE statut = $1
                GROUP BY id_client
            ) AS paid ON c.id_client = paid.id_client
            ORDER BY rank DESC
            "#,
        )
        .bind(ORDER_STATUS_PAID)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn create_customer(&self, data: &CustomerCreate) -> AppResult<Vec<Customer>> {
        let rows: Vec<Customer> = sqlx::query_as(
            r#"
            INSERT INTO Clients (nom, prenom, contact, points_fidelite)
            VALUES ($1, $2, $3, 0)
            RETURNING id_client AS id, nom AS last_name, prenom AS first_name,
                      contact, points_fidelite AS loyalty_points
            "#,
        )
        .bind(&data.last_name)
        .bind(&data.first_name)
        .bind(&data.contact)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn delete_customer(&self, id: i32) -> AppResult<()> {
        sqlx::query("DELETE FROM Clients WHERE id_client = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
