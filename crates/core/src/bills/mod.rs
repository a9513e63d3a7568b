//! Bills module - recurring or one-off bills and their payment status.

mod bills_model;

pub use bills_model::{Bill, BillStatus, BillUpdate, NewBill};
