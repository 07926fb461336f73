mod envelope;
pub use self::envelope::{PaginatedResult, ServiceResponse};

mod product;
pub use self::product::{Product, ProductID};
