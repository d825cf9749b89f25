//! Rental error types.

use thiserror::Error;

/// Errors that can occur during rental operations.
///
/// Each precondition violation is a distinct kind with a fixed message.
/// "Not exist" signals an absent input or removal target; "not found"
/// signals a failed lookup by key. The two are separate kinds.
#[derive(Debug, Error)]
pub enum RentalError {
    /// A user with the same email is already registered.
    #[error("Duplicate user.")]
    DuplicateUser,

    /// The user targeted for removal does not exist.
    #[error("User does not exist.")]
    UserNotExist,

    /// No user is registered under the looked-up email.
    #[error("User not found.")]
    UserNotFound,

    /// No bike was supplied for registration.
    #[error("Bike not exist.")]
    BikeNotExist,

    /// No bike is registered under the looked-up ID.
    #[error("Bike not found.")]
    BikeNotFound,

    /// The bike is already rented out.
    #[error("Unavailable bike.")]
    UnavailableBike,

    /// No open rent matches the bike and user.
    #[error("Rent not found.")]
    RentNotFound,

    /// Credential capability failure.
    #[error("Credential error: {0}")]
    Credential(String),
}

/// Result type for rental operations.
pub type RentalResult<T> = Result<T, RentalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_messages() {
        assert_eq!(RentalError::DuplicateUser.to_string(), "Duplicate user.");
        assert_eq!(RentalError::UserNotExist.to_string(), "User does not exist.");
        assert_eq!(RentalError::UserNotFound.to_string(), "User not found.");
        assert_eq!(RentalError::BikeNotExist.to_string(), "Bike not exist.");
        assert_eq!(RentalError::BikeNotFound.to_string(), "Bike not found.");
        assert_eq!(RentalError::UnavailableBike.to_string(), "Unavailable bike.");
        assert_eq!(RentalError::RentNotFound.to_string(), "Rent not found.");
    }
}
