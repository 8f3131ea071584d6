#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UserError {
    #[error("There is nothing to update.")]
    NothingToUpdate,
    #[error("Full name cannot be empty.")]
    FullNameEmpty,
    #[error("Please enter a valid phone number.")]
    InvalidPhone,
}
