//! Favorites screen view-model.
//!
//! The store's favorite subset is authoritative, but the favorites screen
//! keeps its own visible list so that an item the user just unmarked does not
//! vanish from under the cursor. It stays listed, shown as not-favorite,
//! until the screen is left and entered again.

use crate::catalog::{Product, ProductId};
use crate::shop::Shop;
use crate::store::products::{self, ProductsAction};
use crate::store::{Action, Selection};

/// Sticky list of products shown on the favorites screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FavoritesView {
    visible: Vec<Product>,
}

impl FavoritesView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one emission of the store's favorite subset into the visible list.
    ///
    /// `None` is ignored. The first non-empty list seen on an empty view is
    /// taken as is; later ones refresh items still present, keep absent ones
    /// as not-favorite, and append newcomers in incoming order.
    pub fn apply(&mut self, incoming: Option<&[Product]>) {
        let Some(incoming) = incoming else {
            return;
        };

        if self.visible.is_empty() {
            self.visible = incoming.to_vec();
            return;
        }

        for item in &mut self.visible {
            match incoming.iter().find(|p| p.id == item.id) {
                Some(fresh) => *item = fresh.clone(),
                None => item.is_favorite = false,
            }
        }

        let newcomers: Vec<Product> = incoming
            .iter()
            .filter(|p| !self.visible.iter().any(|v| v.id == p.id))
            .cloned()
            .collect();
        self.visible.extend(newcomers);
    }

    /// The action to dispatch for a toggle on this screen.
    ///
    /// The view itself is untouched; it changes with the next emission.
    pub fn toggle(&self, id: ProductId) -> Action {
        ProductsAction::ToggleFavorite(id).into()
    }

    pub fn visible(&self) -> &[Product] {
        &self.visible
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.visible.iter().any(|p| p.id == id)
    }
}

/// One visit to the favorites screen.
///
/// Created on route entry and dropped on exit; dropping it also ends its
/// store subscription.
pub struct FavoritesScreen {
    view: FavoritesView,
    favorites: Selection<Vec<Product>>,
}

impl FavoritesScreen {
    /// Enter the screen with an empty view and a fresh subscription.
    pub fn enter(shop: &mut Shop) -> Self {
        let mut screen = Self {
            view: FavoritesView::new(),
            favorites: shop.select(products::select_favorite_products),
        };
        screen.refresh();
        screen
    }

    /// Apply every emission received since the last refresh.
    pub fn refresh(&mut self) {
        for emission in self.favorites.by_ref() {
            self.view.apply(Some(emission.as_slice()));
        }
    }

    /// Toggle a product through the store and pick up the result.
    pub fn toggle(&mut self, shop: &mut Shop, id: ProductId) {
        shop.dispatch(self.view.toggle(id));
        self.refresh();
    }

    pub fn visible(&self) -> &[Product] {
        self.view.visible()
    }
}
