pub mod client;
pub mod feed_store;
pub mod fixtures;
pub mod id_generator;
