//! Shared display helpers for products and sessions.
//!
//! Used by `products`, `status`, and the interactive `browse` screens so
//! the catalog renders the same everywhere.

use crate::auth::User;
use crate::catalog::Product;
use crate::ui::{OutputMode, Table, UserInterface};

/// Marker for the favorite column.
pub fn favorite_marker(is_favorite: bool) -> &'static str {
    if is_favorite {
        "★"
    } else {
        "☆"
    }
}

pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

/// Build the product table; verbose mode adds stock and the discounted price.
pub fn product_table(products: &[Product], mode: OutputMode) -> Table {
    let detailed = mode.shows_details();

    let mut headers = vec!["★", "ID", "Title", "Category", "Price"];
    if detailed {
        headers.extend(["Deal", "Stock"]);
    }
    let mut table = Table::new(headers).align_right(1).align_right(4);
    if detailed {
        table = table.align_right(5).align_right(6);
    }

    for product in products {
        let mut row = vec![
            favorite_marker(product.is_favorite).to_string(),
            product.id.to_string(),
            product.title.clone(),
            product.category.clone(),
            format_price(product.price),
        ];
        if detailed {
            row.push(format_price(product.discounted_price()));
            row.push(product.stock.to_string());
        }
        table.add_row(&row);
    }

    table
}

/// Print a product list, or `empty_message` when there is nothing to show.
pub fn show_products(ui: &mut dyn UserInterface, products: &[Product], empty_message: &str) {
    if products.is_empty() {
        ui.message(empty_message);
        return;
    }
    let table = product_table(products, ui.output_mode());
    ui.message(&table.render());
}

/// One-line description of a logged-in user.
pub fn describe_user(user: &User) -> String {
    if user.email.is_empty() {
        format!("{} ({})", user.display_name(), user.username)
    } else {
        format!("{} ({}, {})", user.display_name(), user.username, user.email)
    }
}
