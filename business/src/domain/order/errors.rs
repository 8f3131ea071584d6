#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OrderError {
    #[error("Unsupported order type: {0}")]
    InvalidType(i32),
    #[error("Please enter a contact phone number.")]
    PhoneEmpty,
    #[error("Please enter a contact email.")]
    EmailEmpty,
    #[error("Please enter a delivery address.")]
    AddressEmpty,
    #[error("Order total must be greater than zero.")]
    InvalidTotal,
    #[error("Your cart is empty.")]
    NoItems,
    #[error("Every item must have a quantity of at least one.")]
    InvalidQuantity,
}
