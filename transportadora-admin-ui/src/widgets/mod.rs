pub mod data_table;
pub mod empty_state;
pub mod header;
pub mod server_status;
pub mod sidebar;
