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
#![allow(unused)]

//! normalized aircraft observation model plus the telemetry feed adapters that produce it.
//! Feed specific raw records are parsed in the respective source modules and never leave them -
//! consumers only see [`Snapshot`] batches of [`AircraftObservation`] values with observer
//! relative geometry already attached

use std::{collections::HashSet, fmt, time::Duration};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use uom::si::{f64::Length, length::{foot, mile}};

use skywatch_common::{
    angle::{Angle90, Angle360, Latitude, Longitude},
    datetime::deserialize_duration,
    geo::{elevation_angle, haversine_distance, initial_bearing, GeoPos},
    units::feet,
};

pub mod feed;
pub use feed::FeedSource;

pub mod dump1090;
pub mod vrs;

pub mod errors;
use errors::{invariant_error, Result};

/// observer relative geometry of one position report, computed once when the raw
/// record is normalized and never re-derived later
#[derive(Debug,Clone,Copy)]
pub struct ZoneGeometry {
    pub distance: Length,   // great circle distance receiver -> aircraft
    pub bearing: Angle360,  // initial bearing receiver -> aircraft
    pub elevation: Angle90, // angle above the horizon as seen from the receiver
}

pub fn zone_geometry (receiver: &GeoPos, pos: &GeoPos, altitude: Length)->ZoneGeometry {
    let distance = haversine_distance( receiver, pos);
    let bearing = initial_bearing( receiver, pos);

    // degenerate zero distance would make the elevation angle undefined - report straight up
    let elevation = if distance.get::<mile>() > 0.0 {
        elevation_angle( altitude, distance)
    } else {
        Angle90::from_degrees(90.0)
    };

    ZoneGeometry { distance, bearing, elevation }
}

/// one aircraft's state at one snapshot instant.
/// Fields that are not contained in the raw record are surfaced as explicit None - only
/// altitude, vertical rate and speed default to 0, which is what the telemetry sources
/// themselves report for on-ground or not-yet-resolved aircraft
#[derive(Debug,Clone)]
pub struct AircraftObservation {
    pub icao24: String,            // mode-S transponder hex id, stable per airframe
    pub squawk: Option<String>,
    pub callsign: Option<String>,

    pub position: Option<GeoPos>,
    pub altitude_ft: i64,
    pub vertical_rate_fpm: i64,
    pub heading: Option<Angle360>,
    pub groundspeed_mph: f64,

    pub rssi_db: f64,
    pub messages: u64,
    pub seen_sec: f64,             // seconds since the last message from this aircraft

    pub time: DateTime<Tz>,        // snapshot time in receiver local timezone

    /// present if and only if `position` is present
    pub geometry: Option<ZoneGeometry>,
}

impl AircraftObservation {
    #[inline]
    pub fn distance (&self)->Option<Length> {
        self.geometry.as_ref().map( |g| g.distance)
    }

    #[inline]
    pub fn altitude (&self)->Length {
        feet( self.altitude_ft as f64)
    }

    /// what to call this aircraft in outbound messages - the callsign if we have one,
    /// the hex id otherwise
    pub fn flight_label (&self)->&str {
        match &self.callsign {
            Some(cs) if !cs.is_empty() => cs.as_str(),
            _ => self.icao24.as_str()
        }
    }
}

impl fmt::Display for AircraftObservation {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!( f, "AircraftObservation( icao24: {}", self.icao24)?;
        if let Some(cs) = &self.callsign { write!( f, ", cs: \"{cs}\"")?; }
        if let Some(p) = &self.position { write!( f, ", pos: {}", p)?; }
        if let Some(g) = &self.geometry {
            write!( f, ", dist: {:.1}mi, brg: {:.0}, elev: {:.1}",
                g.distance.get::<mile>(), g.bearing.degrees(), g.elevation.degrees())?;
        }
        write!( f, ", alt: {}ft", self.altitude_ft)?;
        if let Some(hdg) = self.heading { write!( f, ", hdg: {:.0}", hdg.degrees())?; }
        write!( f, ", spd: {:.1}mph, time: {})", self.groundspeed_mph, self.time.format("%H:%M:%S"))
    }
}

/// one poll's worth of aircraft observations sharing a timestamp - the atomic unit
/// the visit tracker consumes
#[derive(Debug,Clone)]
pub struct Snapshot {
    pub source: String,
    pub time: DateTime<Tz>,
    pub aircraft: Vec<AircraftObservation>,
}

impl Snapshot {
    /// note this enforces the at-most-one-observation-per-icao24 batch invariant
    pub fn new (source: String, time: DateTime<Tz>, aircraft: Vec<AircraftObservation>)->Result<Self> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(aircraft.len());
        for obs in &aircraft {
            if !seen.insert( obs.icao24.as_str()) {
                return Err( invariant_error( format!("duplicate aircraft id in batch: {}", obs.icao24)))
            }
        }

        Ok( Snapshot { source, time, aircraft } )
    }

    pub fn len (&self)->usize { self.aircraft.len() }
    pub fn is_empty (&self)->bool { self.aircraft.is_empty() }
}

/* #region receiver config ***************************************************************************/

/// which telemetry source format the configured data url speaks
#[derive(Debug,Clone,Copy,PartialEq,Eq,Serialize,Deserialize)]
pub enum FeedDriver {
    Dump1090,
    VirtualRadarServer,
}

/// the static receiver description - read once at startup, immutable thereafter
#[derive(Debug,Clone,Serialize,Deserialize)]
pub struct ReceiverConfig {
    pub name: String,      // the receiver station name
    pub driver: FeedDriver,
    pub url: String,       // of the aircraft list endpoint to poll

    pub latitude: Latitude,   // receiver position (the alarm zone center)
    pub longitude: Longitude,
    pub timezone: Tz,         // timezone observation timestamps are reported in

    #[serde(default="default_request_timeout", deserialize_with="deserialize_duration")]
    pub request_timeout: Duration,
}

fn default_request_timeout ()->Duration { Duration::from_secs(5) }

impl ReceiverConfig {
    pub fn position (&self)->GeoPos {
        GeoPos::new( self.latitude, self.longitude)
    }
}

/* #endregion receiver config */
