pub mod abstract_trait;
pub mod cache;
pub mod config;
pub mod di;
pub mod domain;
pub mod errors;
pub mod handler;
pub mod ingest;
pub mod model;
pub mod repository;
pub mod service;
pub mod state;
pub mod utils;
