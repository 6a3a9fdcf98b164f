//! Customers: budget-bounded buyers that also listen to store events.

pub mod alerts;
pub mod customer;

pub use alerts::CustomerAlerts;
pub use customer::Customer;
