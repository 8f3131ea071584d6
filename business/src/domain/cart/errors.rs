#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CartError {
    #[error("Please choose a product option before adding it to the cart.")]
    InvalidAttribute,
}
