pub mod ml_client;
