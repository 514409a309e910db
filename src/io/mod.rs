pub mod config_io;
pub mod paths;
pub mod store_io;
