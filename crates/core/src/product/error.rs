use thiserror::Error;

/// Errors that can occur when constructing a product from raw data.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProductError {
    #[error("Product data must be a JSON object")]
    NotAnObject,
    #[error("Product record has a missing or empty id")]
    MissingId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_an_object_display() {
        assert_eq!(
            ProductError::NotAnObject.to_string(),
            "Product data must be a JSON object"
        );
    }

    #[test]
    fn test_missing_id_display() {
        assert_eq!(
            ProductError::MissingId.to_string(),
            "Product record has a missing or empty id"
        );
    }
}
