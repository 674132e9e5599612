//! Hotel domain model

use chrono::{DateTime, Utc};

/// A hotel offered in travel packages
#[derive(Debug, Clone, PartialEq)]
pub struct Hotel {
    pub id: i32,
    /// Display name, unique across the catalog
    pub name: String,
    pub city: String,
    /// Star rating, 1 to 5
    pub stars: i32,
    pub description: Option<String>,
    /// Inactive hotels are kept for history but take no new departures
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Hotel {
    pub fn new(name: String, city: String, stars: i32) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            name,
            city,
            stars,
            description: None,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_hotel_starts_active() {
        let hotel = Hotel::new("Mar Azul".to_string(), "Cartagena".to_string(), 4);
        assert!(hotel.is_active);
        assert_eq!(hotel.stars, 4);
        assert!(hotel.description.is_none());
    }
}
