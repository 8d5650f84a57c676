pub mod dynamodb;

#[cfg(any(test, feature = "inmemory"))]
pub mod inmemory;
