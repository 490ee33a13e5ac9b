//! Products effects.

use crate::store::products::ProductsAction;

use super::Effects;

impl Effects {
    pub(super) fn run_products(&mut self, action: &ProductsAction) -> Option<ProductsAction> {
        match action {
            ProductsAction::LoadProducts => Some(self.load_products()),
            _ => None,
        }
    }

    fn load_products(&mut self) -> ProductsAction {
        let token = if self.authenticated_catalog {
            self.session.token()
        } else {
            None
        };

        match self.api.catalog(token.as_deref()) {
            Ok(page) => {
                tracing::debug!("Loaded {} of {} products", page.products.len(), page.total);
                ProductsAction::LoadProductsSuccess(page)
            }
            Err(e) => ProductsAction::LoadProductsFailure(e.to_string()),
        }
    }
}
