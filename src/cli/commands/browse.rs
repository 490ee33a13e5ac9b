//! Interactive storefront.
//!
//! `turtleshop browse` (also the default when no subcommand is given) walks
//! the login, products and favorites screens. Every screen change goes through
//! the [`Router`], so the guarded screens bounce to login without a session.

use crate::auth::Credentials;
use crate::catalog::ProductId;
use crate::error::Result;
use crate::favorites::FavoritesScreen;
use crate::router::{Route, Router};
use crate::shop::Shop;
use crate::store::{auth, products};
use crate::ui::{Prompt, PromptOption, PromptType, UserInterface};

use super::dispatcher::{Command, CommandResult};
use super::display::show_products;
use super::login::{login_with_feedback, prompt_credentials};

/// What a screen asks the loop to do next.
enum Flow {
    Go(&'static str),
    Quit,
}

fn menu(key: &str, question: &str, options: &[(&str, &str)]) -> Prompt {
    let options = options
        .iter()
        .map(|(label, value)| PromptOption::new(*label, *value))
        .collect();
    Prompt::new(key, question, PromptType::Select { options })
}

/// Ask for a product id; `None` if the answer is not one.
fn ask_product_id(ui: &mut dyn UserInterface) -> Result<Option<ProductId>> {
    let answer = ui
        .prompt(&Prompt::new("product_id", "Product id", PromptType::Input))?
        .as_string();
    match answer.trim().parse::<ProductId>() {
        Ok(id) => Ok(Some(id)),
        Err(_) => {
            ui.error(&format!("'{}' is not a product id", answer.trim()));
            Ok(None)
        }
    }
}

/// The browse command implementation.
pub struct BrowseCommand {
    shop: Shop,
    router: Router,
    session_minutes: Option<u32>,
}

impl BrowseCommand {
    pub fn new(shop: Shop) -> Self {
        Self {
            shop,
            router: Router::new(),
            session_minutes: None,
        }
    }

    /// Token lifetime requested by the login screen.
    pub fn with_session_minutes(mut self, minutes: Option<u32>) -> Self {
        self.session_minutes = minutes;
        self
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn shop(&self) -> &Shop {
        &self.shop
    }

    fn login_screen(&mut self, ui: &mut dyn UserInterface) -> Result<Flow> {
        ui.show_header("Login");

        let (username, password) = prompt_credentials(ui, None, None)?;
        if username.is_empty() || password.is_empty() {
            ui.error("Username and password are required");
        } else {
            let credentials =
                Credentials::new(username, password).with_expiry(self.session_minutes);
            if login_with_feedback(&mut self.shop, ui, credentials).is_some() {
                return Ok(Flow::Go(Route::Products.path()));
            }
        }

        let next = ui
            .prompt(&menu(
                "login_action",
                "Login failed",
                &[("Try again", "retry"), ("Quit", "quit")],
            ))?
            .as_string();
        Ok(match next.as_str() {
            "retry" => Flow::Go(Route::Login.path()),
            _ => Flow::Quit,
        })
    }

    fn load_catalog(&mut self, ui: &mut dyn UserInterface) {
        let mut spinner = ui.start_spinner("Loading products...");
        self.shop.load_products();
        match products::select_products_error(self.shop.state()) {
            Some(error) => {
                spinner.finish_error("Could not load products");
                ui.error(&error);
            }
            None => spinner.finish_success("Products loaded"),
        }
    }

    fn products_screen(&mut self, ui: &mut dyn UserInterface) -> Result<Flow> {
        ui.show_header("Products");
        self.load_catalog(ui);

        loop {
            let catalog = products::select_all_products(self.shop.state());
            show_products(ui, &catalog, "The catalog is empty");
            let favorites = products::select_favorite_count(self.shop.state());
            ui.message(&format!("{} favorite(s)", favorites));

            let choice = ui
                .prompt(&menu(
                    "products_action",
                    "What next?",
                    &[
                        ("Toggle a favorite", "toggle"),
                        ("Clear favorites", "clear"),
                        ("Reload", "reload"),
                        ("Show favorites", "favorites"),
                        ("Log out", "logout"),
                        ("Quit", "quit"),
                    ],
                ))?
                .as_string();

            match choice.as_str() {
                "toggle" => {
                    if let Some(id) = ask_product_id(ui)? {
                        if catalog.iter().any(|p| p.id == id) {
                            self.shop.toggle_favorite(id);
                        } else {
                            ui.warning(&format!("No product with id {}", id));
                        }
                    }
                }
                "clear" => {
                    let confirmed = ui
                        .prompt(
                            &Prompt::new(
                                "clear_favorites",
                                "Clear all favorites?",
                                PromptType::Confirm,
                            )
                            .with_default("no"),
                        )?
                        .as_bool()
                        .unwrap_or(false);
                    if confirmed {
                        self.shop.clear_favorites();
                        ui.success("Favorites cleared");
                    }
                }
                "reload" => self.load_catalog(ui),
                "favorites" => return Ok(Flow::Go(Route::Favorites.path())),
                "logout" => return Ok(self.logout(ui)),
                _ => return Ok(Flow::Quit),
            }
        }
    }

    fn favorites_screen(&mut self, ui: &mut dyn UserInterface) -> Result<Flow> {
        ui.show_header("Favorites");
        let mut screen = FavoritesScreen::enter(&mut self.shop);

        loop {
            screen.refresh();
            show_products(ui, screen.visible(), "No favorites yet");

            let choice = ui
                .prompt(&menu(
                    "favorites_action",
                    "What next?",
                    &[
                        ("Toggle a favorite", "toggle"),
                        ("Back to products", "back"),
                        ("Log out", "logout"),
                        ("Quit", "quit"),
                    ],
                ))?
                .as_string();

            match choice.as_str() {
                "toggle" => {
                    // Ids not on screen still go to the store.
                    if let Some(id) = ask_product_id(ui)? {
                        screen.toggle(&mut self.shop, id);
                    }
                }
                "back" => return Ok(Flow::Go(Route::Products.path())),
                "logout" => return Ok(self.logout(ui)),
                _ => return Ok(Flow::Quit),
            }
        }
    }

    fn logout(&mut self, ui: &mut dyn UserInterface) -> Flow {
        self.shop.logout();
        ui.success("Logged out");
        Flow::Go(Route::Login.path())
    }
}

impl Command for BrowseCommand {
    fn execute(&mut self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.shop.check_auth_status();
        ui.show_header("TurtleShop");

        let mut path = Route::Products.path();
        loop {
            let authenticated = self.shop.select(auth::select_is_authenticated);
            let flow = match self.router.activate(path, authenticated) {
                Route::Login => self.login_screen(ui)?,
                Route::Products => self.products_screen(ui)?,
                Route::Favorites => self.favorites_screen(ui)?,
            };
            match flow {
                Flow::Go(next) => path = next,
                Flow::Quit => break,
            }
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockShopApi;
    use crate::auth::User;
    use crate::catalog::{Product, ProductsPage};
    use crate::effects::Effects;
    use crate::session::{SessionStore, SESSION_KEY};
    use crate::storage::MemoryStorage;
    use crate::ui::MockUI;

    fn emily() -> User {
        User {
            id: 1,
            username: "emilys".into(),
            first_name: "Emily".into(),
            last_name: "Johnson".into(),
            access_token: "access".into(),
            ..Default::default()
        }
    }

    fn catalog() -> ProductsPage {
        ProductsPage {
            products: vec![
                Product::new(1, "Essence Mascara Lash Princess"),
                Product::new(2, "Eyeshadow Palette with Mirror"),
                Product::new(3, "Powder Canister"),
            ],
            total: 3,
            skip: 0,
            limit: 30,
        }
    }

    fn api() -> MockShopApi {
        MockShopApi::new()
            .with_account("emilys", "emilyspass", emily())
            .with_catalog(catalog())
    }

    fn command(storage: &MemoryStorage) -> BrowseCommand {
        BrowseCommand::new(Shop::new(Effects::new(
            api(),
            SessionStore::new(storage.clone()),
        )))
    }

    fn logged_in() -> MemoryStorage {
        MemoryStorage::new().with_item(SESSION_KEY, &serde_json::to_string(&emily()).unwrap())
    }

    #[test]
    fn guard_sends_anonymous_user_to_login() {
        let mut cmd = command(&MemoryStorage::new());
        let mut ui = MockUI::new();
        ui.set_prompt_response("login_action", "quit");

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert_eq!(cmd.router().current(), Some(Route::Login));
        assert_eq!(ui.prompts_shown()[0], "username");
        assert!(ui.has_error("required"));
    }

    #[test]
    fn login_then_products() {
        let storage = MemoryStorage::new();
        let mut cmd = command(&storage);
        let mut ui = MockUI::new();
        ui.set_prompt_response("username", "emilys");
        ui.set_prompt_response("password", "emilyspass");
        ui.set_prompt_response("products_action", "quit");

        cmd.execute(&mut ui).unwrap();

        assert_eq!(cmd.router().history(), &[Route::Login, Route::Products]);
        assert!(storage.contains(SESSION_KEY));
        assert!(ui.has_message("Powder Canister"));
    }

    #[test]
    fn failed_login_offers_retry() {
        let mut cmd = command(&MemoryStorage::new());
        let mut ui = MockUI::new();
        ui.queue_prompt_responses("username", vec!["emilys", "emilys"]);
        ui.queue_prompt_responses("password", vec!["wrong", "emilyspass"]);
        ui.queue_prompt_responses("login_action", vec!["retry"]);
        ui.set_prompt_response("products_action", "quit");

        cmd.execute(&mut ui).unwrap();

        assert!(ui.has_error("Invalid credentials"));
        assert!(cmd.shop().is_authenticated());
        assert_eq!(cmd.router().current(), Some(Route::Products));
    }

    #[test]
    fn restored_session_skips_login() {
        let mut cmd = command(&logged_in());
        let mut ui = MockUI::new();
        ui.set_prompt_response("products_action", "quit");

        cmd.execute(&mut ui).unwrap();

        assert!(!ui.prompts_shown().iter().any(|p| p == "username"));
        assert_eq!(cmd.router().history(), &[Route::Products]);
    }

    #[test]
    fn toggle_and_clear_from_products() {
        let mut cmd = command(&logged_in());
        let mut ui = MockUI::new();
        ui.queue_prompt_responses(
            "products_action",
            vec!["toggle", "toggle", "toggle", "clear", "quit"],
        );
        ui.queue_prompt_responses("product_id", vec!["2", "abc", "42"]);
        ui.set_prompt_response("clear_favorites", "yes");

        cmd.execute(&mut ui).unwrap();

        assert!(ui.has_message("1 favorite(s)"));
        assert!(ui.has_error("'abc' is not a product id"));
        assert!(ui.has_warning("No product with id 42"));
        assert!(ui.has_success("Favorites cleared"));
        assert_eq!(products::select_favorite_count(cmd.shop().state()), 0);
    }

    #[test]
    fn unfavorited_items_stay_on_favorites_screen() {
        let mut cmd = command(&logged_in());
        let mut ui = MockUI::new();
        ui.queue_prompt_responses("products_action", vec!["toggle", "favorites"]);
        ui.queue_prompt_responses("product_id", vec!["2", "2"]);
        ui.queue_prompt_responses("favorites_action", vec!["toggle", "quit"]);

        cmd.execute(&mut ui).unwrap();

        // The last rendering still lists the product, now unmarked.
        let last = ui.messages().last().unwrap();
        assert!(last.contains("Eyeshadow Palette with Mirror"));
        assert!(last.contains("☆"));
        assert_eq!(products::select_favorite_count(cmd.shop().state()), 0);
    }

    #[test]
    fn logout_returns_to_login() {
        let storage = logged_in();
        let mut cmd = command(&storage);
        let mut ui = MockUI::new();
        ui.set_prompt_response("products_action", "logout");
        ui.set_prompt_response("login_action", "quit");

        cmd.execute(&mut ui).unwrap();

        assert!(ui.has_success("Logged out"));
        assert!(!storage.contains(SESSION_KEY));
        assert_eq!(cmd.router().current(), Some(Route::Login));
    }
}
