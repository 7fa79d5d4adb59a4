//! Route modules organized by bounded context.

pub mod draws;
pub mod health;
pub mod links;
