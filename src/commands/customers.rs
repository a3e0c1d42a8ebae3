use crate::error::StoreError;
use crate::models::{short_id, CreateCustomer, Customer};
use crate::store::Store;

pub fn get_customers(store: &Store) -> Vec<Customer> {
    let mut customers: Vec<Customer> = store.customers.values().cloned().collect();
    customers.sort_by(|a, b| a.name.cmp(&b.name));
    customers
}

pub fn create_customer(store: &mut Store, customer: CreateCustomer) -> Result<Customer, StoreError> {
    let customer = Customer {
        id: short_id(8),
        name: customer.name,
        phone: customer.phone,
        email: customer.email,
        points: 0,
    };

    store.customers.insert(customer.id.clone(), customer.clone());
    store.save_all()?;

    Ok(customer)
}

pub fn get_customer(store: &Store, id: &str) -> Result<Customer, StoreError> {
    store
        .customers
        .get(id)
        .cloned()
        .ok_or_else(|| StoreError::CustomerNotFound(id.to_string()))
}

/// Case-insensitive substring match on the customer name.
pub fn find_customers(store: &Store, query: &str) -> Vec<Customer> {
    let query = query.to_lowercase();
    store
        .customers
        .values()
        .filter(|c| c.name.to_lowercase().contains(&query))
        .cloned()
        .collect()
}
