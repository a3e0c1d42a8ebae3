//! Interactive text-menu front end. All order-placement and parse failures
//! are printed and the loop continues; only stdin/stdout failures abort.

use std::io::{self, Write};

use crate::commands::{customers, orders, products, reports};
use crate::models::{
    CreateCustomer, CreateOrder, CreateOrderItem, CreateProduct, UpdateProduct,
};
use crate::store::Store;

const MENU: &str = "
Coffee Shop Tia Rosa
1) List products
2) Add product
3) Edit product (by id)
4) List customers
5) Add customer
6) Place order
7) Today's sales
0) Exit
";

pub fn run_menu(store: &mut Store) -> io::Result<()> {
    loop {
        println!("{MENU}");
        let choice = match prompt("Choose an option: ") {
            Ok(choice) => choice,
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => break,
            Err(e) => return Err(e),
        };

        match choice.as_str() {
            "1" => list_products(store),
            "2" => add_product(store)?,
            "3" => edit_product(store)?,
            "4" => list_customers(store),
            "5" => add_customer(store)?,
            "6" => place_order(store)?,
            "7" => today_sales(store),
            "0" => {
                println!("Bye.");
                break;
            }
            _ => println!("Invalid option. Try again."),
        }
    }

    Ok(())
}

fn prompt(label: &str) -> io::Result<String> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
    }
    Ok(line.trim().to_string())
}

fn list_products(store: &Store) {
    for p in products::get_products(store) {
        println!("{} | {} | $ {:.2} | stock: {}", p.id, p.name, p.price, p.stock);
    }
}

fn add_product(store: &mut Store) -> io::Result<()> {
    let name = prompt("Product name: ")?;
    let price = match prompt("Price (e.g. 5.50): ")?.parse::<f64>() {
        Ok(price) if price >= 0.0 => price,
        _ => {
            println!("Invalid price.");
            return Ok(());
        }
    };
    let stock = match prompt("Initial stock: ")?.parse::<u32>() {
        Ok(stock) => stock,
        Err(_) => {
            println!("Invalid stock.");
            return Ok(());
        }
    };
    let description = prompt("Description (optional): ")?;
    let category = prompt("Category (optional): ")?;

    let request = CreateProduct {
        name,
        price,
        stock,
        description,
        category,
    };
    match products::create_product(store, request) {
        Ok(p) => println!("Product created: {} | {}", p.id, p.name),
        Err(e) => println!("Error: {e}"),
    }
    Ok(())
}

fn edit_product(store: &mut Store) -> io::Result<()> {
    let id = prompt("Product id: ")?;
    let current = match store.products.get(&id) {
        Some(p) => p.clone(),
        None => {
            println!("Product not found.");
            return Ok(());
        }
    };

    println!("Leave a field blank to keep its current value.");
    let name = prompt(&format!("Name [{}]: ", current.name))?;
    let price = prompt(&format!("Price [{}]: ", current.price))?;
    let stock = prompt(&format!("Stock [{}]: ", current.stock))?;

    let mut update = UpdateProduct {
        id,
        name: None,
        price: None,
        stock: None,
        description: None,
        category: None,
    };
    if !name.is_empty() {
        update.name = Some(name);
    }
    if !price.is_empty() {
        match price.parse::<f64>() {
            Ok(price) if price >= 0.0 => update.price = Some(price),
            _ => {
                println!("Invalid price.");
                return Ok(());
            }
        }
    }
    if !stock.is_empty() {
        match stock.parse::<u32>() {
            Ok(stock) => update.stock = Some(stock),
            Err(_) => {
                println!("Invalid stock.");
                return Ok(());
            }
        }
    }

    match products::update_product(store, update) {
        Ok(_) => println!("Product updated."),
        Err(e) => println!("Error: {e}"),
    }
    Ok(())
}

fn list_customers(store: &Store) {
    for c in customers::get_customers(store) {
        println!("{} | {} | points: {}", c.id, c.name, c.points);
    }
}

fn add_customer(store: &mut Store) -> io::Result<()> {
    let name = prompt("Customer name: ")?;
    let phone = prompt("Phone (optional): ")?;
    let email = prompt("Email (optional): ")?;

    match customers::create_customer(store, CreateCustomer { name, phone, email }) {
        Ok(c) => println!("Customer created: {} | {}", c.id, c.name),
        Err(e) => println!("Error: {e}"),
    }
    Ok(())
}

fn place_order(store: &mut Store) -> io::Result<()> {
    let customer_id = loop {
        let input = prompt("Customer id (blank for walk-in): ")?;
        if input.is_empty() {
            break None;
        }
        match customers::get_customer(store, &input) {
            Ok(c) => {
                println!("Customer: {} ({} points)", c.name, c.points);
                break Some(input);
            }
            Err(e) => println!("{e}"),
        }
    };

    let mut items: Vec<CreateOrderItem> = Vec::new();
    println!("Add items (type 'ok' to finish):");
    loop {
        let product_id = prompt("Product id: ")?;
        if product_id.eq_ignore_ascii_case("ok") {
            break;
        }
        let product = match store.products.get(&product_id) {
            Some(p) => p.clone(),
            None => {
                println!("Product not found. Try again.");
                continue;
            }
        };
        let quantity = match prompt("Quantity: ")?.parse::<u32>() {
            Ok(quantity) => quantity,
            Err(_) => {
                println!("Invalid quantity.");
                continue;
            }
        };

        println!("Item added: {} x{}", product.name, quantity);
        items.push(CreateOrderItem {
            product_id,
            quantity,
        });
    }

    if items.is_empty() {
        println!("No items, order discarded.");
        return Ok(());
    }

    match orders::create_order(store, CreateOrder { customer_id, items }) {
        Ok(order) => println!("Order placed: {} | total $ {:.2}", order.id, order.total),
        Err(e) => println!("Could not place order: {e}"),
    }
    Ok(())
}

fn today_sales(store: &Store) {
    let summary = reports::get_day_summary(store, None);
    println!(
        "Sales for {}: total $ {:.2} in {} orders",
        summary.date, summary.total_revenue, summary.total_orders
    );
}
