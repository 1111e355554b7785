pub mod catalog;
pub mod reviews;

pub use catalog::ProductCatalogHolder;
pub use reviews::ReviewHolder;
