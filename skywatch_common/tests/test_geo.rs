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

use uom::si::length::{foot,mile};
use skywatch_common::angle::{normalize_360, Angle360};
use skywatch_common::geo::{elevation_angle, haversine_distance, initial_bearing, CompassDirection, GeoPos};
use skywatch_common::units::{self, feet, miles};

/// unit tests for observer-relative geometry
/// run with "cargo test test_distance -- --nocapture"

#[test]
fn test_distance () {
    let lax = GeoPos::from_degrees( 33.9425, -118.4081);
    let sfo = GeoPos::from_degrees( 37.6189, -122.3750);

    let dist = haversine_distance( &lax, &sfo).get::<mile>();
    println!("LAX -> SFO: {:.1}mi", dist);
    assert!( (dist - 337.28).abs() < 0.1);

    // distance is symmetric
    let back = haversine_distance( &sfo, &lax).get::<mile>();
    assert!( (dist - back).abs() < 1e-9);

    // zero for identical positions
    assert!( haversine_distance( &lax, &lax).get::<mile>().abs() < 1e-12);
}

#[test]
fn test_bearing () {
    let lax = GeoPos::from_degrees( 33.9425, -118.4081);
    let sfo = GeoPos::from_degrees( 37.6189, -122.3750);

    let brg = initial_bearing( &lax, &sfo).degrees();
    println!("LAX -> SFO: {:.1}deg", brg);
    assert!( (brg - 319.95).abs() < 0.1);

    // due north keeps bearing 0
    let a = GeoPos::from_degrees( 33.0, -117.0);
    let b = GeoPos::from_degrees( 34.0, -117.0);
    assert!( initial_bearing( &a, &b).degrees().abs() < 1e-9);
}

#[test]
fn test_elevation () {
    // 5280ft above the observer at 1mi ground distance is a 45deg elevation
    let elev = elevation_angle( feet(5280.0), miles(1.0));
    assert!( (elev.degrees() - 45.0).abs() < 1e-9);

    let elev = elevation_angle( feet(1000.0), miles(0.5));
    assert!( (elev.degrees() - 20.746).abs() < 1e-3);
}

#[test]
fn test_compass_bucketing () {
    use CompassDirection::*;

    assert_eq!( CompassDirection::from_degrees(0.0), N);
    assert_eq!( CompassDirection::from_degrees(22.4), N);
    assert_eq!( CompassDirection::from_degrees(22.5), NE); // half open boundary
    assert_eq!( CompassDirection::from_degrees(90.0), E);
    assert_eq!( CompassDirection::from_degrees(180.0), S);
    assert_eq!( CompassDirection::from_degrees(247.5), W);
    assert_eq!( CompassDirection::from_degrees(337.4), NW);
    assert_eq!( CompassDirection::from_degrees(337.5), N); // wrap around boundary
    assert_eq!( CompassDirection::from_degrees(359.9), N);

    assert_eq!( CompassDirection::from_heading(None), Unknown);
    assert_eq!( CompassDirection::from_heading( Some(Angle360::from_degrees(45.0))), NE);
    assert_eq!( format!("{}", Unknown), "?");
    assert_eq!( format!("{}", SW), "SW");
}

#[test]
fn test_conversions () {
    assert!( (units::knots_to_mph(100.0) - 115.078).abs() < 1e-9);
    assert!( (units::miles_to_kilometers(1.0) - 1.609344).abs() < 1e-9);
    assert!( (units::miles_to_nautical_miles(5.0) - 4.344879).abs() < 1e-5);
    assert!( (units::feet_to_meters(1000.0) - 304.8).abs() < 1e-9);

    // round trips
    assert!( (units::kilometers_to_miles( units::miles_to_kilometers(3.7)) - 3.7).abs() < 1e-12);
    assert!( (units::mph_to_knots( units::knots_to_mph(250.0)) - 250.0).abs() < 1e-12);
}

#[test]
fn test_angle_normalization () {
    assert_eq!( normalize_360(-90.0), 270.0);
    assert_eq!( normalize_360(370.0), 10.0);
    assert_eq!( Angle360::from_degrees(720.5).degrees(), 0.5);
}
