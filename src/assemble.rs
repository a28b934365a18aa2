//! Radar assembly from sanitized entry records.
//!
//! Ring order is the zero-based first-seen position of each distinct ring
//! name across the whole record sequence; quadrants are created lazily in
//! encounter order and keep their entries in input order. The ring cap is
//! enforced before any entity is constructed, so a failing row set never
//! yields a partial radar.

use indexmap::{IndexMap, IndexSet};

use crate::constants::radar;
use crate::data::{Entry, Quadrant, Radar, Ring, RingRef};
use crate::errors::RadarError;
use crate::sanitize::EntryRecord;
use crate::types::{QuadrantName, RingName, SheetName};
use crate::utils::capitalize;

/// Group sanitized records into the radar aggregate.
pub fn assemble(
    records: &[EntryRecord],
    current_sheet_name: impl Into<SheetName>,
    alternative_sheet_names: Vec<SheetName>,
) -> Result<Radar, RadarError> {
    let ring_names: IndexSet<RingName> =
        records.iter().map(|record| record.ring.clone()).collect();
    if ring_names.len() > radar::MAX_RINGS {
        return Err(RadarError::malformed(radar::TOO_MANY_RINGS_MSG));
    }
    let rings: Vec<Ring> = ring_names
        .iter()
        .enumerate()
        .map(|(order, name)| Ring {
            name: name.clone(),
            order,
        })
        .collect();

    let mut quadrants: IndexMap<QuadrantName, Quadrant> = IndexMap::new();
    for record in records {
        let ring = RingRef(
            ring_names
                .get_index_of(&record.ring)
                .expect("ring name registered in the first pass"),
        );
        let name = capitalize(&record.quadrant);
        let quadrant = quadrants
            .entry(name.clone())
            .or_insert_with(|| Quadrant::new(name));
        quadrant.entries.push(Entry {
            name: record.name.clone(),
            ring,
            is_new: record.is_new,
            topic: record.topic.clone(),
            description: record.description.clone(),
        });
    }

    Ok(Radar {
        rings,
        quadrants: quadrants.into_values().collect(),
        current_sheet_name: current_sheet_name.into(),
        alternative_sheet_names,
    })
}
