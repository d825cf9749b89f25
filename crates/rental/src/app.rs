//! Rental application orchestrator.

use std::collections::HashMap;
use std::sync::Arc;

use entities::{Bike, Location, Rent, User};
use uuid::Uuid;

use crate::{Argon2Hasher, Clock, CredentialHasher, RentalError, RentalResult, SystemClock};

/// The rental application.
///
/// Owns every registered user and bike plus the rent history, and is the
/// sole entry point for mutations. Users are keyed by email, bikes by ID.
/// One logical caller at a time; no internal locking is provided.
pub struct App {
    clock: Arc<dyn Clock>,
    hasher: Arc<dyn CredentialHasher>,
    users: HashMap<String, User>,
    bikes: HashMap<Uuid, Bike>,
    rents: Vec<Rent>,
}

impl App {
    /// Creates an app over the wall clock and the argon2 hasher.
    pub fn new() -> Self {
        Self::with_capabilities(Arc::new(SystemClock), Arc::new(Argon2Hasher))
    }

    /// Creates an app with substitute clock and hasher capabilities.
    pub fn with_capabilities(clock: Arc<dyn Clock>, hasher: Arc<dyn CredentialHasher>) -> Self {
        Self {
            clock,
            hasher,
            users: HashMap::new(),
            bikes: HashMap::new(),
            rents: Vec::new(),
        }
    }

    // =========================================================================
    // User operations
    // =========================================================================

    /// Registers a user and returns its generated ID.
    ///
    /// The plaintext password is hashed through the credential capability
    /// before the user is stored.
    pub async fn register_user(&mut self, mut user: User) -> RentalResult<Uuid> {
        if self.users.contains_key(&user.email) {
            return Err(RentalError::DuplicateUser);
        }

        let hash = self.hasher.hash(&user.password).await?;
        user.password_hash = Some(hash);

        let id = user.id;
        tracing::info!(user_id = %id, email = %user.email, "registered user");
        self.users.insert(user.email.clone(), user);
        Ok(id)
    }

    /// Removes the user registered under the given email.
    pub fn remove_user(&mut self, email: &str) -> RentalResult<()> {
        if self.users.remove(email).is_none() {
            return Err(RentalError::UserNotExist);
        }

        tracing::info!(email = %email, "removed user");
        Ok(())
    }

    /// Finds a user by email.
    pub fn find_user(&self, email: &str) -> RentalResult<&User> {
        self.users.get(email).ok_or(RentalError::UserNotFound)
    }

    /// Finds a user by ID.
    pub fn find_user_by_id(&self, id: Uuid) -> RentalResult<&User> {
        self.users
            .values()
            .find(|user| user.id == id)
            .ok_or(RentalError::UserNotFound)
    }

    /// Checks a password against the stored hash of the user registered
    /// under the given email.
    ///
    /// An unknown email fails with [`RentalError::UserNotFound`], the same
    /// way [`App::find_user`] does; a known user with a wrong password
    /// yields `Ok(false)`.
    pub async fn authenticate(&self, email: &str, password: &str) -> RentalResult<bool> {
        let user = self.find_user(email)?;
        let hash = user
            .password_hash
            .as_deref()
            .ok_or_else(|| RentalError::Credential("no stored hash".into()))?;

        self.hasher.verify(password, hash).await
    }

    // =========================================================================
    // Bike operations
    // =========================================================================

    /// Registers a bike and returns its ID.
    ///
    /// `None` stands for an absent input and is rejected with
    /// [`RentalError::BikeNotExist`].
    pub fn register_bike(&mut self, bike: Option<Bike>) -> RentalResult<Uuid> {
        let bike = bike.ok_or(RentalError::BikeNotExist)?;

        let id = bike.id;
        tracing::info!(bike_id = %id, name = %bike.name, "registered bike");
        self.bikes.insert(id, bike);
        Ok(id)
    }

    /// Finds a bike by ID.
    pub fn find_bike(&self, id: Uuid) -> RentalResult<&Bike> {
        self.bikes.get(&id).ok_or(RentalError::BikeNotFound)
    }

    /// Moves a bike to a new location.
    pub fn move_bike_to(&mut self, bike_id: Uuid, location: Location) -> RentalResult<()> {
        let bike = self
            .bikes
            .get_mut(&bike_id)
            .ok_or(RentalError::BikeNotFound)?;
        bike.location = location;

        tracing::info!(
            bike_id = %bike_id,
            latitude = location.latitude,
            longitude = location.longitude,
            "moved bike"
        );
        Ok(())
    }

    // =========================================================================
    // Rental lifecycle
    // =========================================================================

    /// Rents a bike to the user registered under the given email.
    ///
    /// Opens a rent starting at the clock's current time and marks the
    /// bike unavailable. Nothing is mutated on failure.
    pub fn rent_bike(&mut self, bike_id: Uuid, email: &str) -> RentalResult<()> {
        self.find_bike(bike_id)?;
        let user_id = self.find_user(email)?.id;

        let bike = self
            .bikes
            .get_mut(&bike_id)
            .ok_or(RentalError::BikeNotFound)?;
        if !bike.available {
            return Err(RentalError::UnavailableBike);
        }
        bike.available = false;

        let rent = Rent::new(bike_id, user_id, self.clock.now());
        tracing::info!(bike_id = %bike_id, user_id = %user_id, rent_id = %rent.id, "rented bike");
        self.rents.push(rent);
        Ok(())
    }

    /// Returns a rented bike and computes the amount owed.
    ///
    /// The amount is the continuous fractional hour count since the rent
    /// started, times the bike's hourly rate. The closed rent stays in the
    /// history and the bike becomes available again.
    pub fn return_bike(&mut self, bike_id: Uuid, email: &str) -> RentalResult<f64> {
        let rate = self.find_bike(bike_id)?.rate;
        let user_id = self.find_user(email)?.id;
        let now = self.clock.now();

        let rent = self
            .rents
            .iter_mut()
            .find(|rent| rent.is_open() && rent.bike_id == bike_id && rent.user_id == user_id)
            .ok_or(RentalError::RentNotFound)?;

        let hours = (now - rent.start).num_seconds() as f64 / 3600.0;
        let amount = hours * rate;
        rent.end = Some(now);
        rent.amount = Some(amount);

        // existence checked above
        if let Some(bike) = self.bikes.get_mut(&bike_id) {
            bike.available = true;
        }

        tracing::info!(bike_id = %bike_id, user_id = %user_id, amount, "returned bike");
        Ok(amount)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// All registered users, in no particular order.
    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.users.values()
    }

    /// All registered bikes, in no particular order.
    pub fn bikes(&self) -> impl Iterator<Item = &Bike> {
        self.bikes.values()
    }

    /// The rent history in creation order, open rents included.
    pub fn rents(&self) -> &[Rent] {
        &self.rents
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
