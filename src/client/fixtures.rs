//! Test fixtures and builders for API model types
//!
//! Provides builder patterns for creating test data with sensible defaults.
//! Import via `use crate::client::fixtures::*` in test modules.

#![allow(dead_code)]

use super::models::{
    Aircraft, FlightEndpoint, FlightOffer, FlightOffersResponse, Itinerary, OfferPrice, Segment,
};

// ============================================================================
// SegmentBuilder
// ============================================================================

/// Builder for creating test Segment instances.
///
/// # Example
/// ```ignore
/// let segment = SegmentBuilder::new("AA")
///     .route("ORD", "2025-08-05T17:40:00", "BCN", "2025-08-06T08:50:00")
///     .aircraft("789")
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct SegmentBuilder {
    carrier_code: String,
    number: Option<String>,
    from: String,
    departs_at: String,
    to: String,
    arrives_at: String,
    aircraft: Option<String>,
}

impl SegmentBuilder {
    /// Create a new builder for the given carrier.
    pub fn new(carrier_code: impl Into<String>) -> Self {
        Self {
            carrier_code: carrier_code.into(),
            number: Some("100".to_string()),
            from: "ORD".to_string(),
            departs_at: "2025-08-05T17:40:00".to_string(),
            to: "BCN".to_string(),
            arrives_at: "2025-08-06T08:50:00".to_string(),
            aircraft: Some("789".to_string()),
        }
    }

    /// Set airports and local timestamps.
    pub fn route(
        mut self,
        from: impl Into<String>,
        departs_at: impl Into<String>,
        to: impl Into<String>,
        arrives_at: impl Into<String>,
    ) -> Self {
        self.from = from.into();
        self.departs_at = departs_at.into();
        self.to = to.into();
        self.arrives_at = arrives_at.into();
        self
    }

    /// Set the aircraft code.
    pub fn aircraft(mut self, code: impl Into<String>) -> Self {
        self.aircraft = Some(code.into());
        self
    }

    /// Drop the aircraft block entirely.
    pub fn no_aircraft(mut self) -> Self {
        self.aircraft = None;
        self
    }

    /// Build the Segment instance.
    pub fn build(self) -> Segment {
        Segment {
            carrier_code: self.carrier_code,
            number: self.number,
            departure: FlightEndpoint {
                iata_code: Some(self.from),
                at: self.departs_at,
            },
            arrival: FlightEndpoint {
                iata_code: Some(self.to),
                at: self.arrives_at,
            },
            aircraft: self.aircraft.map(|code| Aircraft { code: Some(code) }),
        }
    }
}

// ============================================================================
// OfferBuilder
// ============================================================================

/// Builder for creating test FlightOffer instances.
///
/// Defaults to a nonstop AA round trip, `PT9H10M` out and `PT10H5M` back,
/// priced at `"456.70"` USD.
#[derive(Debug, Clone)]
pub struct OfferBuilder {
    id: String,
    total: String,
    currency: Option<String>,
    itineraries: Vec<Itinerary>,
}

impl OfferBuilder {
    /// Create a new builder with the given offer ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            total: "456.70".to_string(),
            currency: Some("USD".to_string()),
            itineraries: vec![
                Itinerary {
                    duration: "PT9H10M".to_string(),
                    segments: vec![SegmentBuilder::new("AA").build()],
                },
                Itinerary {
                    duration: "PT10H5M".to_string(),
                    segments: vec![
                        SegmentBuilder::new("AA")
                            .route("BCN", "2025-08-08T11:00:00", "ORD", "2025-08-08T14:05:00")
                            .build(),
                    ],
                },
            ],
        }
    }

    /// Set the total price string.
    pub fn price(mut self, total: impl Into<String>) -> Self {
        self.total = total.into();
        self
    }

    /// Set the currency code.
    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    /// Replace the outbound itinerary.
    pub fn outbound(mut self, duration: impl Into<String>, segments: Vec<Segment>) -> Self {
        let itinerary = Itinerary {
            duration: duration.into(),
            segments,
        };
        if self.itineraries.is_empty() {
            self.itineraries.push(itinerary);
        } else {
            self.itineraries[0] = itinerary;
        }
        self
    }

    /// Replace the return itinerary duration.
    pub fn return_duration(mut self, duration: impl Into<String>) -> Self {
        if let Some(itinerary) = self.itineraries.get_mut(1) {
            itinerary.duration = duration.into();
        }
        self
    }

    /// Drop the return leg, making this a one-way offer.
    pub fn one_way(mut self) -> Self {
        self.itineraries.truncate(1);
        self
    }

    /// Drop every itinerary.
    pub fn no_itineraries(mut self) -> Self {
        self.itineraries.clear();
        self
    }

    /// Build the FlightOffer instance.
    pub fn build(self) -> FlightOffer {
        FlightOffer {
            id: self.id,
            itineraries: self.itineraries,
            price: OfferPrice {
                total: self.total,
                currency: self.currency,
            },
        }
    }
}

/// Wrap offers in a response envelope.
pub fn response(offers: Vec<FlightOffer>) -> FlightOffersResponse {
    FlightOffersResponse { data: offers }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offer_builder_defaults() {
        let offer = OfferBuilder::new("1").build();

        assert_eq!(offer.id, "1");
        assert_eq!(offer.price.total, "456.70");
        assert_eq!(offer.itineraries.len(), 2);
        assert_eq!(offer.itineraries[0].segments[0].carrier_code, "AA");
    }

    #[test]
    fn test_offer_builder_one_way() {
        let offer = OfferBuilder::new("1").one_way().build();
        assert_eq!(offer.itineraries.len(), 1);
    }

    #[test]
    fn test_segment_builder_no_aircraft() {
        let segment = SegmentBuilder::new("BA").no_aircraft().build();
        assert!(segment.aircraft.is_none());
        assert_eq!(segment.carrier_code, "BA");
    }
}
