#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProductError {
    #[error("Invalid product id: {0}")]
    InvalidId(i64),
    #[error("Please enter a search keyword.")]
    KeywordEmpty,
}
