pub mod action;
pub mod board_ops;
pub mod list_ops;
pub mod reorder;

pub use list_ops::StoreError;
