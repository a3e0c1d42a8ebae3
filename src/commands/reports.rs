use crate::models::{round2, DaySummary, Order};
use crate::store::Store;

/// Sales summary for one calendar date (default: today). A full timestamp
/// narrows to its date prefix, so `2024-05-17T09:30:00` and `2024-05-17`
/// select the same day.
pub fn get_day_summary(store: &Store, date: Option<&str>) -> DaySummary {
    let date = match date {
        Some(d) => d.split_once('T').map(|(day, _)| day).unwrap_or(d).to_string(),
        None => chrono::Local::now().format("%Y-%m-%d").to_string(),
    };

    let mut orders: Vec<Order> = store
        .orders
        .values()
        .filter(|o| o.created_at.starts_with(&date))
        .cloned()
        .collect();
    orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let total_revenue = round2(orders.iter().map(|o| o.total).sum::<f64>());

    DaySummary {
        date,
        total_revenue,
        total_orders: orders.len() as i32,
        orders,
    }
}
