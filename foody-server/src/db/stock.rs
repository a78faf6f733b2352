//! Stock statements (`Inventaire`, `Menus`)

use async_trait::async_trait;
use shared::error::AppResult;
use shared::models::{Dish, InventoryCreate, InventoryItem};

use super::{PgGateway, StockGateway};

#[async_trait]
impl StockGateway for PgGateway {
    async fn list_inventory(&self) -> AppResult<Vec<InventoryItem>> {
        let rows: Vec<InventoryItem> = sqlx::query_as(
            r#"
            SELECT id_produit AS id, nom_produit AS name,
                   quantite_disponible AS quantity, seuil_critique AS threshold
            FROM Inventaire
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn list_restock(&self) -> AppResult<Vec<InventoryItem>> {
        let rows: Vec<InventoryItem> = sqlx::query_as(
            r#"
            SELECT id_produit AS id, nom_produit AS name,
                   quantite_disponible AS quantity, seuil_critique AS threshold
            FROM Inventaire
            WHERE quantite_disponible < seuil_critique
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn list_available_dishes(&self) -> AppResult<Vec<Dish>> {
        let rows: Vec<Dish> = sqlx::query_as(
            r#"
            SELECT id_plat AS id, nom_plat AS name, description, prix AS price
            FROM Menus
            WHERE disponibilite = TRUE
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn update_quantity(&self, id: i32, quantity: Option<i32>) -> AppResult<()> {
        sqlx::query("UPDATE Inventaire SET quantite_disponible = $1 WHERE id_produit = $2")
            .bind(quantity)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn create_inventory_item(&self, data: &InventoryCreate) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO Inventaire (nom_produit, quantite_disponible, seuil_critique)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(&data.name)
        .bind(data.quantity)
        .bind(data.threshold)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn delete_inventory_item(&self, id: i32) -> AppResult<()> {
        sqlx::query("DELETE FROM Inventaire WHERE id_produit = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
