//! Products slice of the store.
//!
//! The favorite-ID set is the only authority on favorite status. Every
//! transition that touches either the set or the catalog recomputes
//! `is_favorite` from the set, so the two can never drift apart.

use std::collections::BTreeSet;

use crate::catalog::{Product, ProductId, ProductsPage};

use super::AppState;

/// Catalog and favorites state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductsState {
    pub products: Vec<Product>,
    pub favorite_ids: BTreeSet<ProductId>,
    pub loading: bool,
    pub error: Option<String>,
    /// Catalog size reported by the last successful load.
    pub total: u32,
}

/// Actions handled by the products slice.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductsAction {
    /// Start a catalog fetch; the effect performs it.
    LoadProducts,
    LoadProductsSuccess(ProductsPage),
    LoadProductsFailure(String),
    ToggleFavorite(ProductId),
    ClearFavorites,
}

impl ProductsAction {
    /// Stable label for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::LoadProducts => "[Products] Load Products",
            Self::LoadProductsSuccess(_) => "[Products] Load Products Success",
            Self::LoadProductsFailure(_) => "[Products] Load Products Failure",
            Self::ToggleFavorite(_) => "[Products] Toggle Favorite",
            Self::ClearFavorites => "[Products] Clear Favorites",
        }
    }
}

/// Products reducer.
pub fn reduce(state: ProductsState, action: &ProductsAction) -> ProductsState {
    match action {
        ProductsAction::LoadProducts => ProductsState {
            loading: true,
            error: None,
            ..state
        },
        ProductsAction::LoadProductsSuccess(page) => {
            let products = page
                .products
                .iter()
                .cloned()
                .map(|mut product| {
                    product.is_favorite = state.favorite_ids.contains(&product.id);
                    product
                })
                .collect();
            ProductsState {
                products,
                loading: false,
                error: None,
                total: page.total,
                ..state
            }
        }
        ProductsAction::LoadProductsFailure(error) => ProductsState {
            loading: false,
            error: Some(error.clone()),
            ..state
        },
        ProductsAction::ToggleFavorite(id) => {
            let mut state = state;
            if !state.favorite_ids.remove(id) {
                state.favorite_ids.insert(*id);
            }
            let is_favorite = state.favorite_ids.contains(id);
            if let Some(product) = state.products.iter_mut().find(|p| p.id == *id) {
                product.is_favorite = is_favorite;
            }
            state
        }
        ProductsAction::ClearFavorites => {
            let mut state = state;
            state.favorite_ids.clear();
            for product in &mut state.products {
                product.is_favorite = false;
            }
            state
        }
    }
}

pub fn select_all_products(state: &AppState) -> Vec<Product> {
    state.products.products.clone()
}

/// Catalog products currently marked favorite, in catalog order.
pub fn select_favorite_products(state: &AppState) -> Vec<Product> {
    state
        .products
        .products
        .iter()
        .filter(|p| p.is_favorite)
        .cloned()
        .collect()
}

pub fn select_favorite_ids(state: &AppState) -> BTreeSet<ProductId> {
    state.products.favorite_ids.clone()
}

pub fn select_favorite_count(state: &AppState) -> usize {
    state.products.favorite_ids.len()
}

pub fn select_products_loading(state: &AppState) -> bool {
    state.products.loading
}

pub fn select_products_error(state: &AppState) -> Option<String> {
    state.products.error.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(ids: &[ProductId]) -> ProductsPage {
        ProductsPage {
            products: ids
                .iter()
                .map(|id| Product::new(*id, format!("Product {}", id)))
                .collect(),
            total: ids.len() as u32,
            skip: 0,
            limit: 30,
        }
    }

    fn loaded(ids: &[ProductId]) -> ProductsState {
        reduce(
            ProductsState::default(),
            &ProductsAction::LoadProductsSuccess(page(ids)),
        )
    }

    fn assert_flags_agree(state: &ProductsState) {
        for product in &state.products {
            assert_eq!(
                product.is_favorite,
                state.favorite_ids.contains(&product.id),
                "product {} disagrees with the favorite set",
                product.id
            );
        }
    }

    #[test]
    fn load_sets_loading_and_clears_error() {
        let state = ProductsState {
            error: Some("boom".into()),
            ..Default::default()
        };
        let next = reduce(state, &ProductsAction::LoadProducts);
        assert!(next.loading);
        assert!(next.error.is_none());
    }

    #[test]
    fn load_success_recomputes_favorites_from_set() {
        let mut state = ProductsState::default();
        state.favorite_ids.insert(2);

        let mut incoming = page(&[1, 2, 3]);
        // The server's flag is not trusted.
        incoming.products[0].is_favorite = true;

        let next = reduce(state, &ProductsAction::LoadProductsSuccess(incoming));
        let flags: Vec<bool> = next.products.iter().map(|p| p.is_favorite).collect();
        assert_eq!(flags, vec![false, true, false]);
        assert_eq!(next.total, 3);
        assert!(!next.loading);
    }

    #[test]
    fn load_failure_keeps_products_and_sets_error() {
        let state = reduce(loaded(&[1, 2]), &ProductsAction::LoadProducts);
        let next = reduce(
            state,
            &ProductsAction::LoadProductsFailure("Failed to load products".into()),
        );
        assert!(!next.loading);
        assert_eq!(next.error.as_deref(), Some("Failed to load products"));
        assert_eq!(next.products.len(), 2);
    }

    #[test]
    fn toggle_flips_membership_and_flag() {
        let next = reduce(loaded(&[1, 2]), &ProductsAction::ToggleFavorite(1));
        assert!(next.favorite_ids.contains(&1));
        assert!(next.products[0].is_favorite);

        let next = reduce(next, &ProductsAction::ToggleFavorite(1));
        assert!(!next.favorite_ids.contains(&1));
        assert!(!next.products[0].is_favorite);
    }

    #[test]
    fn toggle_of_unknown_product_only_touches_the_set() {
        let next = reduce(loaded(&[1]), &ProductsAction::ToggleFavorite(999));
        assert!(next.favorite_ids.contains(&999));
        assert!(!next.products[0].is_favorite);
    }

    #[test]
    fn favorites_toggled_before_load_apply_on_load() {
        let state = reduce(ProductsState::default(), &ProductsAction::ToggleFavorite(3));
        let next = reduce(state, &ProductsAction::LoadProductsSuccess(page(&[1, 3])));
        assert!(next.products[1].is_favorite);
        assert_flags_agree(&next);
    }

    #[test]
    fn clear_empties_set_and_flags() {
        let state = reduce(loaded(&[1, 2]), &ProductsAction::ToggleFavorite(1));
        let state = reduce(state, &ProductsAction::ToggleFavorite(2));
        let next = reduce(state, &ProductsAction::ClearFavorites);
        assert!(next.favorite_ids.is_empty());
        assert!(next.products.iter().all(|p| !p.is_favorite));
    }

    #[test]
    fn membership_follows_toggle_parity() {
        // A few fixed toggle sequences, including ids outside the catalog.
        let sequences: [&[ProductId]; 4] = [
            &[1, 1, 1],
            &[1, 2, 3, 2, 1, 2],
            &[4, 4, 5, 9, 9, 9, 5],
            &[3, 1, 3, 3, 2, 2, 1, 1],
        ];

        for sequence in sequences {
            let mut state = loaded(&[1, 2, 3, 4, 5]);
            for id in sequence {
                state = reduce(state, &ProductsAction::ToggleFavorite(*id));
                assert_flags_agree(&state);
            }
            for id in [1, 2, 3, 4, 5, 9] {
                let toggles = sequence.iter().filter(|t| **t == id).count();
                assert_eq!(
                    state.favorite_ids.contains(&id),
                    toggles % 2 == 1,
                    "id {} after {:?}",
                    id,
                    sequence
                );
            }
        }
    }

    #[test]
    fn favorite_products_selector_keeps_catalog_order() {
        let mut app = AppState::default();
        app.products = loaded(&[5, 6, 7]);
        app.products = reduce(app.products, &ProductsAction::ToggleFavorite(7));
        app.products = reduce(app.products, &ProductsAction::ToggleFavorite(5));

        let ids: Vec<ProductId> = select_favorite_products(&app).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![5, 7]);
        assert_eq!(select_favorite_count(&app), 2);
    }
}
