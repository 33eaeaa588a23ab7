//! Resolving the human-readable location shown in the header.

use std::sync::Arc;

use rentshield_ai::{Analyst, analysis};
use tracing::{info, warn};

use crate::device::{GeoError, Geolocator};

/// Shown until the lookup for the current sign-in resolves.
pub const LOCATING: &str = "Locating...";
/// Used when the device refuses or cannot provide a position.
pub const DENIED_LOCATION: &str = "London, UK";
/// Used when a position was obtained but the reverse lookup failed.
pub const LOOKUP_FAILED_LOCATION: &str = "Hackney, London";

/// The location lookup issued on sign-in.
pub struct LocationTicket {
    epoch: u64,
    geolocator: Arc<dyn Geolocator>,
    analyst: Arc<dyn Analyst>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationResolution {
    epoch: u64,
    location: String,
}

impl LocationTicket {
    pub(crate) fn new(
        epoch: u64,
        geolocator: Arc<dyn Geolocator>,
        analyst: Arc<dyn Analyst>,
    ) -> Self {
        Self {
            epoch,
            geolocator,
            analyst,
        }
    }

    pub async fn run(self) -> LocationResolution {
        let location = match self.geolocator.current_position().await {
            Ok(position) => {
                match analysis::identify_location(
                    self.analyst.as_ref(),
                    position.latitude,
                    position.longitude,
                )
                .await
                {
                    Ok(place) => {
                        info!(location = %place, "location resolved");
                        place
                    }
                    Err(e) => {
                        warn!(error = %e, "location lookup failed");
                        LOOKUP_FAILED_LOCATION.to_string()
                    }
                }
            }
            Err(e @ (GeoError::Denied | GeoError::Unavailable)) => {
                info!(reason = %e, "no device position");
                DENIED_LOCATION.to_string()
            }
            Err(e) => {
                warn!(error = %e, "geolocation failed");
                DENIED_LOCATION.to_string()
            }
        };
        LocationResolution {
            epoch: self.epoch,
            location,
        }
    }
}

impl LocationResolution {
    pub fn location(&self) -> &str {
        &self.location
    }

    pub(crate) fn epoch(&self) -> u64 {
        self.epoch
    }

    pub(crate) fn into_location(self) -> String {
        self.location
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::{FixedGeolocator, NoGeolocator, Position};
    use crate::testing::{ScriptedAnalyst, StubGeolocator};

    fn london() -> Position {
        Position {
            latitude: 51.545,
            longitude: -0.055,
        }
    }

    #[tokio::test]
    async fn resolves_place_name() {
        let analyst = Arc::new(ScriptedAnalyst::replies(["  Hackney Wick, London \n"]));
        let ticket = LocationTicket::new(1, Arc::new(FixedGeolocator(london())), analyst.clone());
        let res = ticket.run().await;
        assert_eq!(res.location(), "Hackney Wick, London");
        assert_eq!(analyst.calls(), 1);
    }

    #[tokio::test]
    async fn denied_falls_back_without_model_call() {
        let analyst = Arc::new(ScriptedAnalyst::replies(["unused"]));
        let geo = Arc::new(StubGeolocator::failing(GeoError::Denied));
        let res = LocationTicket::new(1, geo, analyst.clone()).run().await;
        assert_eq!(res.location(), DENIED_LOCATION);
        assert_eq!(analyst.calls(), 0);
    }

    #[tokio::test]
    async fn unavailable_matches_denied() {
        let analyst = Arc::new(ScriptedAnalyst::replies::<[&str; 0]>([]));
        let res = LocationTicket::new(1, Arc::new(NoGeolocator), analyst).run().await;
        assert_eq!(res.location(), "London, UK");
    }

    #[tokio::test]
    async fn lookup_failure_uses_distinct_fallback() {
        let analyst = Arc::new(ScriptedAnalyst::failing());
        let res = LocationTicket::new(1, Arc::new(FixedGeolocator(london())), analyst)
            .run()
            .await;
        assert_eq!(res.location(), LOOKUP_FAILED_LOCATION);
    }

    #[tokio::test]
    async fn blank_lookup_counts_as_failure() {
        let analyst = Arc::new(ScriptedAnalyst::replies(["   "]));
        let res = LocationTicket::new(1, Arc::new(FixedGeolocator(london())), analyst)
            .run()
            .await;
        assert_eq!(res.location(), "Hackney, London");
    }
}
