//! Order statements (`Commandes`, `Details_Commande`)

use async_trait::async_trait;
use shared::error::AppResult;
use shared::models::{ORDER_STATUS_IN_PROGRESS, Order, OrderCreate, OrderLine, PendingOrder};

use super::{OrderGateway, PgGateway};

#[async_trait]
impl OrderGateway for PgGateway {
    async fn list_orders(&self) -> AppResult<Vec<Order>> {
        let rows: Vec<Order> = sqlx::query_as(
            r#"
            SELECT id_commande AS id, id_client AS customer_id, id_employe AS employee_id,
                   date_commande AS created_at, statut AS status, total_commande AS total
            FROM Commandes
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn list_pending_orders(&self) -> AppResult<Vec<PendingOrder>> {
        let rows: Vec<PendingOrder> = sqlx::query_as(
            r#"
            SELECT id_commande AS id, id_client AS customer_id, id_employe AS employee_id,
                   date_commande AS created_at, total_commande AS total
            FROM Commandes
            WHERE statut = $1
            "#,
        )
        .bind(ORDER_STATUS_IN_PROGRESS)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn list_done_orders(&self) -> AppResult<Vec<Order>> {
        let rows: Vec<Order> = sqlx::query_as(
            r#"
            SELECT id_commande AS id, id_client AS customer_id, id_employe AS employee_id,
                   date_commande AS created_at, statut AS status, total_commande AS total
            FROM Commandes
            WHERE statut <> $1
            "#,
        )
        .bind(ORDER_STATUS_IN_PROGRESS)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn find_order(&self, id: i32) -> AppResult<Option<Order>> {
        let row: Option<Order> = sqlx::query_as(
            r#"
            SELECT id_commande AS id, id_client AS customer_id, id_employe AS employee_id,
                   date_commande AS created_at, statut AS status, total_commande AS total
            FROM Commandes
            WHERE id_commande = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn list_order_lines(&self, order_id: i32) -> AppResult<Vec<OrderLine>> {
        let rows: Vec<OrderLine> = sqlx::query_as(
            r#"
            SELECT m.id_plat AS dish_id, m.nom_plat AS dish_name, m.description,
                   m.prix AS price, d.quantite AS quantity
            FROM Details_Commande d
                LEFT JOIN Menus m ON d.id_plat = m.id_plat
            WHERE d.id_commande = $1
            "#,
        )
        .bind(order_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn create_order(&self, data: &OrderCreate) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO Commandes (id_client, id_employe, date_commande, statut, total_commande)
            VALUES ($1, $2, NOW(), $3, $4)
            "#,
        )
        .bind(data.customer_id)
        .bind(data.employee_id)
        .bind(ORDER_STATUS_IN_PROGRESS)
        .bind(data.total)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn update_order_status(&self, id: i32, status: Option<&str>) -> AppResult<()> {
        sqlx::query("UPDATE Commandes SET statut = $1 WHERE id_commande = $2")
            .bind(status)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn delete_order(&self, id: i32) -> AppResult<()> {
        sqlx::query("DELETE FROM Commandes WHERE id_commande = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
