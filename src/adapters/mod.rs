// Adapters layer: concrete stores behind the domain ports.

pub mod catalog_file;
pub mod export;
pub mod local_store;
pub mod memory;
