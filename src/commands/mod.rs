pub mod clipboard;
pub mod export;
pub mod stats;
pub mod tickets;
