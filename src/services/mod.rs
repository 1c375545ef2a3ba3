pub mod carcheck_client;
pub mod token_store;
