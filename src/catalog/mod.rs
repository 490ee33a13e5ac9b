//! Catalog data model.
//!
//! Products and the paginated page shape returned by `GET /products`.

mod product;

pub use product::{Dimensions, Product, ProductId, ProductMeta, ProductsPage, Review};
