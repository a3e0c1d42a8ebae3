//! Demo mode: seed sample data when the store is empty, place two example
//! orders, and render a human-readable summary.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::commands::{customers, orders, products, reports};
use crate::error::StoreError;
use crate::models::{CreateCustomer, CreateOrder, CreateOrderItem, CreateProduct};
use crate::store::Store;

pub fn run_demo(store: &mut Store, output_path: Option<&Path>) -> Result<String, StoreError> {
    seed_if_empty(store)?;

    let product_list = products::get_products(store);
    let customer_list = customers::get_customers(store);

    // One loyalty order and one walk-in order against the current menu
    if let (Some(first), Some(second)) = (product_list.first(), product_list.get(1)) {
        orders::create_order(
            store,
            CreateOrder {
                customer_id: customer_list.first().map(|c| c.id.clone()),
                items: vec![
                    CreateOrderItem {
                        product_id: first.id.clone(),
                        quantity: 2,
                    },
                    CreateOrderItem {
                        product_id: second.id.clone(),
                        quantity: 1,
                    },
                ],
            },
        )?;
    }
    if let Some(third) = product_list.get(2) {
        orders::create_order(
            store,
            CreateOrder {
                customer_id: None,
                items: vec![CreateOrderItem {
                    product_id: third.id.clone(),
                    quantity: 3,
                }],
            },
        )?;
    }

    let summary = render_summary(store);
    if let Some(path) = output_path {
        fs::write(path, &summary).map_err(|e| StoreError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
    }

    Ok(summary)
}

fn seed_if_empty(store: &mut Store) -> Result<(), StoreError> {
    if store.products.is_empty() {
        let seed = [
            ("Espresso", 4.50, 50, "Short black coffee", "Drinks"),
            ("Cappuccino", 7.00, 30, "Espresso with steamed milk", "Drinks"),
            ("Cheese Bread", 3.50, 40, "Traditional cheese roll", "Snacks"),
        ];
        for (name, price, stock, description, category) in seed {
            products::create_product(
                store,
                CreateProduct {
                    name: name.to_string(),
                    price,
                    stock,
                    description: description.to_string(),
                    category: category.to_string(),
                },
            )?;
        }
    }

    if store.customers.is_empty() {
        let seed = [
            ("Ana Silva", "61999990000", "ana@mail.com"),
            ("Joao Pereira", "61988880000", "joao@mail.com"),
        ];
        for (name, phone, email) in seed {
            customers::create_customer(
                store,
                CreateCustomer {
                    name: name.to_string(),
                    phone: phone.to_string(),
                    email: email.to_string(),
                },
            )?;
        }
    }

    Ok(())
}

fn render_summary(store: &Store) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "=== DEMO: Coffee Shop Tia Rosa sample run ===");
    let _ = writeln!(out, "Products:");
    for p in products::get_products(store) {
        let _ = writeln!(
            out,
            "  - {} | {} | $ {:.2} | stock: {}",
            p.id, p.name, p.price, p.stock
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Customers:");
    for c in customers::get_customers(store) {
        let _ = writeln!(out, "  - {} | {} | points: {}", c.id, c.name, c.points);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Orders:");
    for o in store.orders.values() {
        let customer = o.customer_id.as_deref().unwrap_or("walk-in");
        let _ = writeln!(
            out,
            "  - Order {} | customer: {} | total: $ {:.2} | items: {}",
            o.id,
            customer,
            o.total,
            o.items.len()
        );
    }

    let summary = reports::get_day_summary(store, None);
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Sales for {}: total $ {:.2} in {} orders",
        summary.date, summary.total_revenue, summary.total_orders
    );

    out
}
