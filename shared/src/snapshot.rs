use crate::stallingsnet::coordinates;
use crate::stallingsnet::feed::Facility;
use serde::Serialize;

/// All facilities returned by one poll of the feed, in upstream order.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct Snapshot {
    facilities: Vec<Facility>,
}

impl Snapshot {
    pub fn new(facilities: Vec<Facility>) -> Self {
        Self { facilities }
    }

    /// Builds a snapshot from freshly parsed feed records, attaching registry
    /// coordinates by facility name.
    pub fn enriched(mut facilities: Vec<Facility>) -> Self {
        for facility in &mut facilities {
            let coordinate = coordinates::lookup(&facility.facility_name);
            facility.lat = coordinate.map(|c| c.lat);
            facility.lon = coordinate.map(|c| c.lon);
        }
        Self { facilities }
    }

    pub fn facilities(&self) -> &[Facility] {
        &self.facilities
    }

    pub fn len(&self) -> usize {
        self.facilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facilities.is_empty()
    }

    /// Facilities without a registry match.
    pub fn unlocated(&self) -> impl Iterator<Item = &Facility> {
        self.facilities
            .iter()
            .filter(|f| f.lat.is_none() || f.lon.is_none())
    }
}

impl FromIterator<Facility> for Snapshot {
    fn from_iter<I: IntoIterator<Item = Facility>>(iter: I) -> Self {
        Self {
            facilities: iter.into_iter().collect(),
        }
    }
}
