pub mod bloom_event;
pub mod catalog;
pub mod dataset;
pub mod page;
pub mod vegetation;
