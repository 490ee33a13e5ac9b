//! Products command implementation.
//!
//! The `turtleshop products` command lists the catalog. It is guarded: without
//! a saved session it redirects to login and exits with
//! [`EXIT_NOT_LOGGED_IN`].

use std::collections::BTreeSet;

use crate::catalog::{Product, ProductId};
use crate::cli::args::ProductsArgs;
use crate::error::Result;
use crate::router::{Route, Router};
use crate::shop::Shop;
use crate::store::{auth, products};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display::show_products;
use super::EXIT_NOT_LOGGED_IN;

/// The products command implementation.
pub struct ProductsCommand {
    shop: Shop,
    args: ProductsArgs,
    router: Router,
}

impl ProductsCommand {
    pub fn new(shop: Shop, args: ProductsArgs) -> Self {
        Self {
            shop,
            args,
            router: Router::new(),
        }
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    /// Toggle each `--favorite` id once, however often it was given.
    fn apply_favorite_flags(&mut self, ui: &mut dyn UserInterface) {
        let mut seen = BTreeSet::new();
        let ids: Vec<ProductId> = self
            .args
            .favorites
            .iter()
            .copied()
            .filter(|id| seen.insert(*id))
            .collect();

        for id in ids {
            if !self.shop.state().products.products.iter().any(|p| p.id == id) {
                ui.warning(&format!("No product with id {} in the catalog", id));
                continue;
            }
            self.shop.toggle_favorite(id);
        }
    }

    fn listing(&self) -> Vec<Product> {
        if self.args.favorites_only {
            products::select_favorite_products(self.shop.state())
        } else {
            products::select_all_products(self.shop.state())
        }
    }
}

impl Command for ProductsCommand {
    fn execute(&mut self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.shop.check_auth_status();

        let authenticated = self.shop.select(auth::select_is_authenticated);
        if self.router.activate(Route::Products.path(), authenticated) == Route::Login {
            ui.error("Not logged in");
            ui.show_hint("Run `turtleshop login` first");
            return Ok(CommandResult::failure(EXIT_NOT_LOGGED_IN));
        }

        let mut spinner = ui.start_spinner("Loading products...");
        self.shop.load_products();
        if let Some(error) = products::select_products_error(self.shop.state()) {
            spinner.finish_error("Could not load products");
            ui.error(&error);
            return Ok(CommandResult::failure(1));
        }
        let count = self.shop.state().products.products.len();
        spinner.finish_success(&format!("Loaded {} products", count));

        self.apply_favorite_flags(ui);
        let listing = self.listing();

        if self.args.json {
            println!("{}", serde_json::to_string_pretty(&listing)?);
            return Ok(CommandResult::success());
        }

        let empty = if self.args.favorites_only {
            "No favorites yet"
        } else {
            "The catalog is empty"
        };
        show_products(ui, &listing, empty);

        if ui.output_mode().shows_status() {
            let favorites = products::select_favorite_count(self.shop.state());
            ui.message(&format!("{} of {} marked favorite", favorites, count));
        }

        Ok(CommandResult::success())
    }
}
