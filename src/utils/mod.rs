pub mod error;
pub mod gcd;
pub mod logger;
pub mod validation;
