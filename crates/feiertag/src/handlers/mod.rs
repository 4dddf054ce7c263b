pub mod business_days;
pub mod envelope;
pub mod error;
pub mod health;
pub mod holidays;
pub mod methods;
pub mod states;
pub mod validation;

pub use error::AppError;
