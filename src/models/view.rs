pub mod feed;
pub mod rpc;
