mod category;
mod expense;

pub use category::Category;
pub use expense::{validate_and_build, Expense};
pub(crate) use expense::parse_amount;
