use tracing::info;

use crate::error::StoreError;
use crate::models::{now_iso, round2, short_id, CreateOrder, Order, OrderItem};
use crate::store::Store;

/// Place an order: validate every line item, deduct stock, accrue loyalty
/// points, persist. Validation covers all items before any stock moves, so
/// a failing item leaves the whole inventory untouched.
pub fn create_order(store: &mut Store, order: CreateOrder) -> Result<Order, StoreError> {
    // Validate stock and capture prices for every item
    let mut item_details: Vec<(String, u32, f64, String)> = Vec::new();

    for item in &order.items {
        let product = store
            .products
            .get(&item.product_id)
            .ok_or_else(|| StoreError::ProductNotFound(item.product_id.clone()))?;

        if item.quantity == 0 {
            return Err(StoreError::InvalidQuantity(item.quantity));
        }
        if product.stock < item.quantity {
            return Err(StoreError::InsufficientStock {
                name: product.name.clone(),
                requested: item.quantity,
                available: product.stock,
            });
        }

        item_details.push((
            item.product_id.clone(),
            item.quantity,
            product.price,
            product.name.clone(),
        ));
    }

    // Deduct inventory and build the line items
    let mut items = Vec::new();
    let mut total = 0.0;

    for (product_id, quantity, unit_price, name) in item_details {
        if let Some(product) = store.products.get_mut(&product_id) {
            product.stock -= quantity;
        }

        let subtotal = round2(unit_price * f64::from(quantity));
        total += subtotal;

        items.push(OrderItem {
            product_id,
            name,
            unit_price,
            quantity,
            subtotal,
        });
    }

    let placed = Order {
        id: short_id(10),
        customer_id: order.customer_id,
        items,
        created_at: now_iso(),
        total: round2(total),
    };

    // Loyalty points: one point per whole currency unit spent. A reference
    // to an unknown customer accrues nothing and is not an error.
    if let Some(customer_id) = &placed.customer_id {
        if let Some(customer) = store.customers.get_mut(customer_id) {
            customer.points += placed.total.floor() as u64;
        }
    }

    store.orders.insert(placed.id.clone(), placed.clone());
    store.save_all()?;

    info!(
        order_id = %placed.id,
        total = placed.total,
        items = placed.items.len(),
        "Order placed"
    );

    Ok(placed)
}

pub fn get_order(store: &Store, id: &str) -> Result<Order, StoreError> {
    store
        .orders
        .get(id)
        .cloned()
        .ok_or_else(|| StoreError::OrderNotFound(id.to_string()))
}
