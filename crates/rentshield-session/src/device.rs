//! Device capabilities the session depends on: position and notifications.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GeoError {
    #[error("geolocation permission denied")]
    Denied,
    #[error("geolocation is not available on this device")]
    Unavailable,
    #[error("position lookup failed: {0}")]
    Failed(String),
}

#[async_trait]
pub trait Geolocator: Send + Sync {
    async fn current_position(&self) -> Result<Position, GeoError>;
}

/// Answer to a notification permission prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Granted,
    Denied,
    /// The prompt was dismissed without an answer.
    Dismissed,
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn request_permission(&self) -> Permission;
    fn notify(&self, title: &str, body: &str);
}

/// Always reports the same position.
pub struct FixedGeolocator(pub Position);

#[async_trait]
impl Geolocator for FixedGeolocator {
    async fn current_position(&self) -> Result<Position, GeoError> {
        Ok(self.0)
    }
}

/// A device without geolocation support.
pub struct NoGeolocator;

#[async_trait]
impl Geolocator for NoGeolocator {
    async fn current_position(&self) -> Result<Position, GeoError> {
        Err(GeoError::Unavailable)
    }
}
