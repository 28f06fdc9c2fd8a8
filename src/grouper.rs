//! Grouping of parsed lines into beacons.
//!
//! [`BeaconGrouper`] keeps beacons in a `Vec` in the order their ICCID was
//! first seen, with a side index from ICCID to slot for constant-time lookup.

use crate::models::{Beacon, UNKNOWN_ICCID};
use crate::parser::{LineProcessor, ParsedLine};
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct BeaconGrouper {
    beacons: Vec<Beacon>,
    index: HashMap<String, usize>,
    lines_processed: usize,
}

impl BeaconGrouper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn beacon_count(&self) -> usize {
        self.beacons.len()
    }

    pub fn lines_processed(&self) -> usize {
        self.lines_processed
    }

    pub fn into_beacons(self) -> Vec<Beacon> {
        self.beacons
    }
}

impl LineProcessor for BeaconGrouper {
    type Output = Vec<Beacon>;

    fn process_line(&mut self, line: ParsedLine, line_number: usize) {
        let iccid = line.iccid.unwrap_or_else(|| UNKNOWN_ICCID.to_string());

        let slot = match self.index.get(&iccid) {
            Some(&slot) => slot,
            None => {
                tracing::debug!(iccid = %iccid, line_number, "New beacon");
                let slot = self.beacons.len();
                self.beacons.push(Beacon::new(iccid.clone()));
                self.index.insert(iccid, slot);
                slot
            }
        };

        self.beacons[slot].positions.push(line.position);
        self.lines_processed += 1;
    }

    fn finalize(self) -> Self::Output {
        tracing::debug!(
            beacons = self.beacons.len(),
            positions = self.lines_processed,
            "Grouping complete"
        );
        self.into_beacons()
    }
}
