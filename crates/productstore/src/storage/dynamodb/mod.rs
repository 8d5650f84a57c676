//! DynamoDB storage backend implementation.
//!
//! Implements the repository trait from `productstore_core::storage` using
//! `aws-sdk-dynamodb` against the single products table.

mod client;
mod error;
mod expressions;
mod marshal;
mod repository;

pub use client::create_client;
pub use repository::DynamoDbRepository;
