use crate::error::StoreError;
use crate::models::{round2, short_id, CreateProduct, Product, UpdateProduct};
use crate::store::Store;

pub fn get_products(store: &Store) -> Vec<Product> {
    let mut products: Vec<Product> = store.products.values().cloned().collect();
    products.sort_by(|a, b| a.name.cmp(&b.name));
    products
}

pub fn create_product(store: &mut Store, product: CreateProduct) -> Result<Product, StoreError> {
    let product = Product {
        id: short_id(8),
        name: product.name,
        price: round2(product.price),
        stock: product.stock,
        description: product.description,
        category: product.category,
    };

    store.products.insert(product.id.clone(), product.clone());
    store.save_all()?;

    Ok(product)
}

/// Apply a per-field update. `None` fields keep their current value.
pub fn update_product(store: &mut Store, update: UpdateProduct) -> Result<Product, StoreError> {
    let product = store
        .products
        .get_mut(&update.id)
        .ok_or_else(|| StoreError::ProductNotFound(update.id.clone()))?;

    if let Some(name) = update.name {
        product.name = name;
    }
    if let Some(price) = update.price {
        product.price = round2(price);
    }
    if let Some(stock) = update.stock {
        product.stock = stock;
    }
    if let Some(description) = update.description {
        product.description = description;
    }
    if let Some(category) = update.category {
        product.category = category;
    }

    let product = product.clone();
    store.save_all()?;

    Ok(product)
}
