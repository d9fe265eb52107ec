use std::collections::HashMap;

use diesel::prelude::*;

use crate::domain::order::{NewOrder as DomainNewOrder, Order as DomainOrder, OrderStatus};
use crate::models::order::{
    NewOrder as DbNewOrder, NewOrderItem as DbNewOrderItem, Order as DbOrder,
    OrderItem as DbOrderItem, UpdateOrderStatus,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, OrderReader, OrderWriter};

impl OrderReader for DieselRepository {
    fn get_order_by_id(&self, id: i32) -> RepositoryResult<Option<DomainOrder>> {
        use crate::schema::{order_items, orders};

        let mut conn = self.conn()?;
        let order = orders::table
            .filter(orders::id.eq(id))
            .first::<DbOrder>(&mut conn)
            .optional()?;

        let Some(order) = order else {
            return Ok(None);
        };

        let items = order_items::table
            .filter(order_items::order_id.eq(order.id))
            .order(order_items::id.asc())
            .load::<DbOrderItem>(&mut conn)?;

        Ok(Some(DomainOrder::from((order, items))))
    }

    fn list_orders_for_user(&self, user_id: i32) -> RepositoryResult<Vec<DomainOrder>> {
        use crate::schema::{order_items, orders};

        let mut conn = self.conn()?;

        let db_orders = orders::table
            .filter(orders::user_id.eq(user_id))
            .order(orders::created_at.desc())
            .load::<DbOrder>(&mut conn)?;

        if db_orders.is_empty() {
            return Ok(Vec::new());
        }

        let order_ids: Vec<i32> = db_orders.iter().map(|order| order.id).collect();

        let rows = order_items::table
            .filter(order_items::order_id.eq_any(&order_ids))
            .order(order_items::id.asc())
            .load::<DbOrderItem>(&mut conn)?;

        let mut items_by_order: HashMap<i32, Vec<DbOrderItem>> = HashMap::new();
        for item in rows {
            items_by_order.entry(item.order_id).or_default().push(item);
        }

        Ok(db_orders
            .into_iter()
            .map(|order| {
                let order_id = order.id;
                let items = items_by_order.remove(&order_id).unwrap_or_default();
                DomainOrder::from((order, items))
            })
            .collect())
    }
}

impl OrderWriter for DieselRepository {
    fn create_order(&self, new_order: &DomainNewOrder) -> RepositoryResult<DomainOrder> {
        use crate::schema::{order_items, orders, products};

        let mut conn = self.conn()?;

        // The immediate transaction takes the SQLite write lock up
        // front, so the per-line stock checks and decrements below
        // cannot interleave with a concurrent checkout.
        conn.immediate_transaction::<DomainOrder, RepositoryError, _>(|conn| {
            for item in &new_order.items {
                let updated = diesel::update(
                    products::table
                        .filter(products::id.eq(item.product_id))
                        .filter(products::stock.ge(item.quantity)),
                )
                .set(products::stock.eq(products::stock - item.quantity))
                .execute(conn)?;

                if updated == 0 {
                    let available = products::table
                        .filter(products::id.eq(item.product_id))
                        .select(products::stock)
                        .first::<i32>(conn)
                        .optional()?
                        .unwrap_or(0);

                    return Err(RepositoryError::InsufficientStock {
                        product_id: item.product_id,
                        name: item.name.clone(),
                        available,
                    });
                }
            }

            let created = diesel::insert_into(orders::table)
                .values(&DbNewOrder::from(new_order))
                .get_result::<DbOrder>(conn)?;

            let order_id = created.id;

            if !new_order.items.is_empty() {
                let payload: Vec<DbNewOrderItem> = new_order
                    .items
                    .iter()
                    .map(|item| DbNewOrderItem::from_domain(order_id, item))
                    .collect();

                diesel::insert_into(order_items::table)
                    .values(&payload)
                    .execute(conn)?;
            }

            let items = order_items::table
                .filter(order_items::order_id.eq(order_id))
                .order(order_items::id.asc())
                .load::<DbOrderItem>(conn)?;

            Ok(DomainOrder::from((created, items)))
        })
    }

    fn update_order_status(
        &self,
        order_id: i32,
        status: OrderStatus,
    ) -> RepositoryResult<DomainOrder> {
        use crate::schema::{order_items, orders};

        let mut conn = self.conn()?;

        let changes = UpdateOrderStatus {
            status: status.as_str(),
            updated_at: chrono::Local::now().naive_utc(),
        };

        let updated = diesel::update(orders::table.filter(orders::id.eq(order_id)))
            .set(&changes)
            .get_result::<DbOrder>(&mut conn)?;

        let items = order_items::table
            .filter(order_items::order_id.eq(order_id))
            .order(order_items::id.asc())
            .load::<DbOrderItem>(&mut conn)?;

        Ok(DomainOrder::from((updated, items)))
    }
}
