use sea_orm::{
    ColumnTrait, Condition, ConnectionTrait, DatabaseConnection, EntityTrait, FromQueryResult,
    LoaderTrait, Order, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
    TransactionTrait,
    sea_query::{Expr, Func},
};
use tracing::{error, info};

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        menu::{
            entities::{MenuItem, NewMenuItem},
            ports::MenuItemRepository,
            value_objects::{CategoryStats, GetMenuItemsFilter},
        },
    },
    entity::{
        ingredients,
        item_ingredients,
        menu_items::{ActiveModel, Column, Entity, Model},
    },
    infrastructure::menu::mappers::map_menu_item,
};

#[derive(Debug, FromQueryResult)]
struct CategoryRow {
    category: Option<String>,
    item_count: i64,
}

#[derive(Debug, Clone)]
pub struct PostgresMenuItemRepository {
    pub db: DatabaseConnection,
}

impl PostgresMenuItemRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn with_ingredients(&self, models: Vec<Model>) -> Result<Vec<MenuItem>, CoreError> {
        if models.is_empty() {
            return Ok(Vec::new());
        }

        let ingredients = models
            .load_many_to_many(ingredients::Entity, item_ingredients::Entity, &self.db)
            .await
            .map_err(|e| {
                error!("Failed to load menu item ingredients: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(models
            .iter()
            .zip(ingredients.iter())
            .map(|(model, ingredients)| map_menu_item(model, ingredients))
            .collect())
    }

    async fn fetch(&self, query: Select<Entity>) -> Result<Vec<MenuItem>, CoreError> {
        let models = query.all(&self.db).await.map_err(|e| {
            error!("Failed to get menu items: {}", e);
            CoreError::InternalServerError
        })?;

        self.with_ingredients(models).await
    }
}

/// Applies a sort string like `category,-price`. Unknown fields are ignored
/// and id is always the final tiebreaker.
fn apply_sort(mut query: Select<Entity>, sort: Option<&str>) -> Select<Entity> {
    if let Some(sort_str) = sort {
        for sort_part in sort_str.split(',') {
            let sort_part = sort_part.trim();
            let (field, order) = match sort_part.strip_prefix('-') {
                Some(field) => (field, Order::Desc),
                None => (sort_part, Order::Asc),
            };

            let column = match field {
                "id" => Column::Id,
                "name" => Column::Name,
                "price" => Column::Price,
                "category" => Column::Category,
                _ => continue,
            };

            query = query.order_by(column, order);
        }
    }

    query.order_by(Column::Id, Order::Asc)
}

fn filter_condition(filter: &GetMenuItemsFilter) -> Condition {
    let mut condition = Condition::all();

    if let Some(ref category) = filter.category {
        condition = condition.add(Column::Category.eq(category.clone()));
    }

    if let Some(ref name) = filter.name_ilike
        && !name.trim().is_empty()
    {
        let pattern = format!("%{}%", name.trim().to_lowercase());
        condition = condition.add(Expr::expr(Func::lower(Expr::col(Column::Name))).like(pattern));
    }

    if let Some(price_gte) = filter.price_gte {
        condition = condition.add(Column::Price.gte(price_gte));
    }

    if let Some(price_lte) = filter.price_lte {
        condition = condition.add(Column::Price.lte(price_lte));
    }

    condition
}

impl MenuItemRepository for PostgresMenuItemRepository {
    async fn find_all(&self) -> Result<Vec<MenuItem>, CoreError> {
        self.fetch(Entity::find().order_by_asc(Column::Id)).await
    }

    async fn find_by_ids(&self, ids: Vec<i32>) -> Result<Vec<MenuItem>, CoreError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        self.fetch(
            Entity::find()
                .filter(Column::Id.is_in(ids))
                .order_by_asc(Column::Id),
        )
        .await
    }

    async fn find_by_id(&self, item_id: i32) -> Result<Option<MenuItem>, CoreError> {
        let model = Entity::find_by_id(item_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get menu item {}: {}", item_id, e);
                CoreError::InternalServerError
            })?;

        match model {
            Some(model) => Ok(self.with_ingredients(vec![model]).await?.into_iter().next()),
            None => Ok(None),
        }
    }

    async fn find_page(&self, filter: GetMenuItemsFilter) -> Result<Vec<MenuItem>, CoreError> {
        let query = Entity::find().filter(filter_condition(&filter));
        let query = apply_sort(query, filter.sort.as_deref())
            .offset(filter.skip)
            .limit(filter.limit);

        self.fetch(query).await
    }

    async fn count(&self) -> Result<u64, CoreError> {
        Entity::find().count(&self.db).await.map_err(|e| {
            error!("Failed to count menu items: {}", e);
            CoreError::InternalServerError
        })
    }

    async fn category_stats(&self) -> Result<Vec<CategoryStats>, CoreError> {
        let rows = Entity::find()
            .select_only()
            .column(Column::Category)
            .column_as(Expr::col(Column::Id).count(), "item_count")
            .group_by(Column::Category)
            .order_by_asc(Column::Category)
            .into_model::<CategoryRow>()
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get menu category stats: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(rows
            .into_iter()
            .map(|row| CategoryStats {
                category: row.category,
                item_count: row.item_count,
            })
            .collect())
    }

    async fn replace_all(&self, items: Vec<NewMenuItem>) -> Result<u64, CoreError> {
        let inserted = items.len() as u64;

        let txn = self.db.begin().await.map_err(|e| {
            error!("Failed to start menu seeding transaction: {}", e);
            CoreError::InternalServerError
        })?;

        txn.execute_unprepared(
            "TRUNCATE TABLE item_ingredients, ingredients, menu_items RESTART IDENTITY CASCADE",
        )
        .await
        .map_err(|e| {
            error!("Failed to clear menu items: {}", e);
            CoreError::InternalServerError
        })?;

        if !items.is_empty() {
            let models: Vec<ActiveModel> = items.into_iter().map(ActiveModel::from).collect();

            Entity::insert_many(models).exec(&txn).await.map_err(|e| {
                error!("Failed to insert menu items: {}", e);
                CoreError::InternalServerError
            })?;
        }

        txn.commit().await.map_err(|e| {
            error!("Failed to commit menu seeding transaction: {}", e);
            CoreError::InternalServerError
        })?;

        info!(inserted, "menu catalog replaced");

        Ok(inserted)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use sea_orm::{DbBackend, QueryTrait};

    use super::*;

    fn sql(filter: &GetMenuItemsFilter) -> String {
        apply_sort(
            Entity::find().filter(filter_condition(filter)),
            filter.sort.as_deref(),
        )
        .build(DbBackend::Postgres)
        .to_string()
    }

    #[test]
    fn test_default_query_orders_by_id() {
        let sql = sql(&GetMenuItemsFilter::default());
        assert!(sql.ends_with(r#"ORDER BY "menu_items"."id" ASC"#));
        // An empty Condition::all() still renders as `WHERE TRUE`
        assert!(sql.contains("WHERE TRUE ORDER BY"));
        assert!(!sql.contains(r#""menu_items"."category""#));
        assert!(!sql.contains("LOWER"));
    }

    #[test]
    fn test_sort_fields_and_direction() {
        let sql = sql(&GetMenuItemsFilter {
            sort: Some("category, -price,unknown".to_string()),
            ..Default::default()
        });
        assert!(sql.contains(
            r#"ORDER BY "menu_items"."category" ASC, "menu_items"."price" DESC, "menu_items"."id" ASC"#
        ));
    }

    #[test]
    fn test_filters_build_where_clause() {
        let sql = sql(&GetMenuItemsFilter {
            category: Some("Breakfast".to_string()),
            name_ilike: Some(" Toast ".to_string()),
            price_gte: Some(Decimal::new(500, 2)),
            ..Default::default()
        });
        assert!(sql.contains(r#""menu_items"."category" = 'Breakfast'"#));
        assert!(sql.contains("LOWER"));
        assert!(sql.contains("'%toast%'"));
        assert!(sql.contains(r#""menu_items"."price" >="#));
    }
}
