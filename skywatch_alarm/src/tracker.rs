/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

//! the visit tracker - folds successive snapshot batches into per-aircraft visit state
//! and emits one completed visit per discrete flyover, carrying the closest approach
//! observation collected while the visit was open

use std::collections::{HashMap, HashSet};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uom::si::length::mile;

use skywatch_adsb::{AircraftObservation, Snapshot};
use crate::errors::{config_error, Result};

/* #region zone membership ***************************************************************************/

/// the alarm zone around the receiver position
#[derive(Debug,Clone,Serialize,Deserialize)]
#[serde(default)]
pub struct ZoneConfig {
    pub distance_threshold_miles: f64,    // lateral "too close" trigger
    pub elevation_threshold_degrees: f64, // "nearly overhead" trigger
    pub coast_window: u32, // consecutive missed batches tolerated before a visit completes
}

impl Default for ZoneConfig {
    fn default()->Self {
        ZoneConfig {
            distance_threshold_miles: 1.0,
            elevation_threshold_degrees: 50.0,
            coast_window: 5,
        }
    }
}

impl ZoneConfig {
    pub fn validate (&self)->Result<()> {
        if !self.distance_threshold_miles.is_finite() || self.distance_threshold_miles <= 0.0 {
            return Err( config_error( format!("invalid zone distance threshold: {}", self.distance_threshold_miles)))
        }
        if !self.elevation_threshold_degrees.is_finite() {
            return Err( config_error( format!("invalid zone elevation threshold: {}", self.elevation_threshold_degrees)))
        }
        Ok(())
    }
}

/// the zone membership predicate. The two triggers are independent - a close but low
/// approach and a distant but steep overhead pass are both noteworthy. Note there is
/// deliberately no upper distance bound on the elevation trigger.
/// An observation without a resolved position is never a member
pub fn is_in_zone (obs: &AircraftObservation, zone: &ZoneConfig)->bool {
    match &obs.geometry {
        Some(g) => {
            g.distance.get::<mile>() < zone.distance_threshold_miles
                || g.elevation.degrees() > zone.elevation_threshold_degrees
        }
        None => false
    }
}

/* #endregion zone membership */

/* #region visits ***********************************************************************************/

/// the tracked lifetime of one aircraft's presence inside the alarm zone, from first
/// entry to coast-confirmed exit. Exclusively owned by the tracker until emitted
#[derive(Debug,Clone)]
struct Visit {
    best: AircraftObservation, // the minimum distance observation seen so far
    opened: DateTime<Utc>,
    missed: u32, // consecutive batches in which the aircraft was not a zone member
}

/// a visit that has exited coasting and is ready for notification
#[derive(Debug,Clone)]
pub struct CompletedVisit {
    pub best: AircraftObservation,
    pub opened: DateTime<Utc>,
    pub closed: DateTime<Utc>,
}

impl CompletedVisit {
    pub fn icao24 (&self)->&str { self.best.icao24.as_str() }
}

/// the tracker state machine. Holds exactly one open visit per aircraft id; an id with
/// no open visit and no zone membership has no representation here
pub struct VisitTracker {
    zone: ZoneConfig,
    visits: HashMap<String,Visit>,
}

impl VisitTracker {
    pub fn new (zone: ZoneConfig)->Result<Self> {
        zone.validate()?;
        Ok( VisitTracker { zone, visits: HashMap::new() } )
    }

    pub fn zone (&self)->&ZoneConfig { &self.zone }

    pub fn has_open_visits (&self)->bool { !self.visits.is_empty() }

    pub fn open_visit_count (&self)->usize { self.visits.len() }

    /// fold the next snapshot batch into the visit state and return the visits that
    /// completed with this batch (in ascending aircraft id order, for determinism).
    ///
    /// Batches have to arrive in order - it is the only ordering signal we have. Feeding
    /// an unchanged batch twice (same snapshot time) is the caller's responsibility to
    /// avoid. Malformed individual observations never fail this - an observation without
    /// position is simply never a member and is excluded from tracking
    pub fn ingest (&mut self, snapshot: &Snapshot)->Vec<CompletedVisit> {
        let now = snapshot.time.to_utc();

        let members: HashSet<&str> = snapshot.aircraft.iter()
            .filter( |obs| is_in_zone( obs, &self.zone))
            .map( |obs| obs.icao24.as_str())
            .collect();

        //--- open new visits, refresh existing ones
        for obs in snapshot.aircraft.iter().filter( |obs| members.contains( obs.icao24.as_str())) {
            match self.visits.get_mut( obs.icao24.as_str()) {
                Some(visit) => {
                    visit.missed = 0;
                    // strict improvement only - on a tie the earliest sample stays, which
                    // keeps the emitted closest approach deterministic
                    if let (Some(d), Some(d_best)) = (obs.distance(), visit.best.distance()) {
                        if d < d_best {
                            debug!("{} closer: {:.2}mi", obs.icao24, d.get::<mile>());
                            visit.best = obs.clone();
                        }
                    }
                }
                None => {
                    info!("{} entered alarm zone: {}", obs.icao24, obs);
                    self.visits.insert( obs.icao24.clone(), Visit { best: obs.clone(), opened: now, missed: 0 });
                }
            }
        }

        //--- count misses for open visits that were not members of this batch
        let mut completed_ids: Vec<String> = Vec::new();
        for (id, visit) in self.visits.iter_mut() {
            if !members.contains( id.as_str()) {
                visit.missed += 1;
                if visit.missed > self.zone.coast_window {
                    completed_ids.push( id.clone());
                }
            }
        }

        //--- emit and remove visits whose coast window is exhausted
        completed_ids.sort();

        let mut completed: Vec<CompletedVisit> = Vec::with_capacity( completed_ids.len());
        for id in &completed_ids {
            if let Some(visit) = self.visits.remove( id) {
                info!("{} left alarm zone, closest approach: {}", id, visit.best);
                completed.push( CompletedVisit { best: visit.best, opened: visit.opened, closed: now });
            }
        }

        completed
    }
}

/* #endregion visits */
