pub mod catalog;
pub mod coerce;
pub mod errors;
pub mod order;
pub mod payment;
pub mod ports;
