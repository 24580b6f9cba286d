pub mod backend;
pub mod expression;
pub mod query;
pub mod record;
pub mod value;
