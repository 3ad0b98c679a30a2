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

//! geodesic functions for observer-relative aircraft geometry.
//! These are deliberately closed-form spherical approximations - at ranges where an
//! aircraft is visible from the ground the error against a full WGS84 solution is
//! well below the accuracy of the position reports themselves

use std::fmt;
use serde::{Serialize,Deserialize};
use strum::IntoStaticStr;
use uom::si::{f64::Length, length::{foot,mile}};

use crate::angle::{normalize_360, Angle360, Angle90, Latitude, Longitude};

/// mean earth radius used for great circle distances
pub const EARTH_RADIUS_MILES: f64 = 3956.0;

pub const FEET_PER_MILE: f64 = 5280.0;

/// a geographic surface position
#[derive(Debug,Clone,Copy,Serialize,Deserialize)]
pub struct GeoPos {
    pub lat: Latitude,
    pub lon: Longitude,
}

impl GeoPos {
    pub fn new (lat: Latitude, lon: Longitude)->Self {
        GeoPos { lat, lon }
    }

    pub fn from_degrees (lat: f64, lon: f64)->Self {
        GeoPos { lat: Latitude::from_degrees(lat), lon: Longitude::from_degrees(lon) }
    }
}

impl fmt::Display for GeoPos {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.5},{:.5})", self.lat.degrees(), self.lon.degrees())
    }
}

/// haversine great circle distance between two surface positions
pub fn haversine_distance (a: &GeoPos, b: &GeoPos)->Length {
    let dlat = (b.lat.degrees() - a.lat.degrees()).to_radians();
    let dlon = (b.lon.degrees() - a.lon.degrees()).to_radians();

    let h = (dlat/2.0).sin().powi(2) + a.lat.cos() * b.lat.cos() * (dlon/2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().asin();

    Length::new::<mile>( c * EARTH_RADIUS_MILES)
}

/// initial bearing from `a` towards `b`:
///   θ = atan2( sin(Δlon)*cos(lat2), cos(lat1)*sin(lat2) − sin(lat1)*cos(lat2)*cos(Δlon) )
pub fn initial_bearing (a: &GeoPos, b: &GeoPos)->Angle360 {
    let dlon = (b.lon.degrees() - a.lon.degrees()).to_radians();

    let x = dlon.sin() * b.lat.cos();
    let y = a.lat.cos() * b.lat.sin() - a.lat.sin() * b.lat.cos() * dlon.cos();

    Angle360::from_radians( x.atan2(y))
}

/// elevation angle above the horizon for an aircraft at `altitude` and great circle
/// distance `distance` from the observer. Callers have to guard against non-positive
/// distances (directly overhead positions are reported with distance > 0 in practice)
pub fn elevation_angle (altitude: Length, distance: Length)->Angle90 {
    let alt_ft = altitude.get::<foot>();
    let dist_ft = distance.get::<mile>() * FEET_PER_MILE;

    Angle90::from_radians( (alt_ft / dist_ft).atan())
}

/// the 8 point compass rose, plus a marker for aircraft that have not reported a track yet
#[derive(Debug,Clone,Copy,PartialEq,Eq,Serialize,Deserialize,IntoStaticStr)]
pub enum CompassDirection {
    N, NE, E, SE, S, SW, W, NW,

    #[strum(serialize="?")]
    Unknown
}

impl CompassDirection {
    /// bucket a heading into compass points with half open boundaries at 22.5deg increments
    pub fn from_degrees (deg: f64)->Self {
        use CompassDirection::*;
        let deg = normalize_360(deg);

        if deg < 22.5 || deg >= 337.5 { N }
        else if deg < 67.5  { NE }
        else if deg < 112.5 { E }
        else if deg < 157.5 { SE }
        else if deg < 202.5 { S }
        else if deg < 247.5 { SW }
        else if deg < 292.5 { W }
        else { NW }
    }

    pub fn from_heading (heading: Option<Angle360>)->Self {
        match heading {
            Some(hdg) => Self::from_degrees( hdg.degrees()),
            None => CompassDirection::Unknown
        }
    }

    pub fn is_known (&self)->bool {
        !matches!( self, CompassDirection::Unknown)
    }
}

impl fmt::Display for CompassDirection {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = self.into();
        f.write_str(s)
    }
}
