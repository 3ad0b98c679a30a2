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

use std::time::Duration;
use chrono::Timelike;
use uom::si::length::mile;

use skywatch_common::angle::{Latitude, Longitude};
use skywatch_adsb::{dump1090, vrs, errors::SkywatchAdsbError, FeedDriver, ReceiverConfig};

//--- test data

// full record, positionless record, on-ground record
const DUMP1090_FEED: &'static str = r#"{
    "now" : 1584202814.0,
    "aircraft" : [
        {"hex":"a1b2c3","squawk":"3514","flight":"UAL814  ","lat":33.701,"lon":-117.834,
         "altitude":11025,"vert_rate":-1088,"track":244.0,"speed":336.0,"messages":446,"seen":0.2,"rssi":-28.2},
        {"hex":"ab82ae","messages":23,"seen":12.6,"rssi":-31.0},
        {"hex":"a94413","flight":"  ","lat":33.746,"lon":-117.826,"altitude":"ground","messages":102,"seen":1.1,"rssi":-12.4}
    ]
}"#;

const DUMP1090_DUPLICATE: &'static str = r#"{
    "now" : 1584202814.0,
    "aircraft" : [
        {"hex":"a1b2c3","lat":33.701,"lon":-117.834,"altitude":11025},
        {"hex":"a1b2c3","lat":33.702,"lon":-117.835,"altitude":11000}
    ]
}"#;

const VRS_FEED: &'static str = r#"{
    "stm": 1584202814000,
    "acList": [
        {"Icao":"A1B2C3","Sqk":"3514","Call":"UAL814","Lat":33.701,"Long":-117.834,
         "Alt":11025,"Vsi":-1088,"Trak":244.0,"Spd":336.0,"Sig":112.0,"CMsgs":446,"TSecs":85.0},
        {"Icao":"AB82AE","CMsgs":23,"Sig":14.0},
        {"Icao":"A94413","Lat":33.746,"Long":-117.826,"Alt":1900,"Gnd":true,"CMsgs":102}
    ]
}"#;

fn test_receiver (driver: FeedDriver)->ReceiverConfig {
    ReceiverConfig {
        name: "test-receiver".to_string(),
        driver,
        url: "http://localhost:8080/data/aircraft.json".to_string(),
        latitude: Latitude::from_degrees(33.7458),
        longitude: Longitude::from_degrees(-117.8262),
        timezone: chrono_tz::Tz::America__Los_Angeles,
        request_timeout: Duration::from_secs(5),
    }
}

// run with "cargo test test_dump1090 -- --nocapture"

#[test]
fn test_dump1090_normalization () {
    let config = test_receiver( FeedDriver::Dump1090);
    let snapshot = dump1090::parse_snapshot( &config, DUMP1090_FEED).unwrap();

    assert_eq!( snapshot.source, "test-receiver");
    assert_eq!( snapshot.aircraft.len(), 3);

    let a = &snapshot.aircraft[0];
    println!("{}", a);
    assert_eq!( a.icao24, "a1b2c3");
    assert_eq!( a.squawk.as_deref(), Some("3514"));
    assert_eq!( a.callsign.as_deref(), Some("UAL814")); // trailing blanks trimmed
    assert_eq!( a.altitude_ft, 11025);
    assert_eq!( a.vertical_rate_fpm, -1088);
    assert!( (a.groundspeed_mph - 386.662).abs() < 1e-2); // 336kt
    assert!( a.position.is_some());

    // derived geometry is attached exactly once, at parse time
    let g = a.geometry.as_ref().unwrap();
    assert!( (g.distance.get::<mile>() - 3.1255).abs() < 1e-3);
    assert!( (g.bearing.degrees() - 188.24).abs() < 0.01);
    assert!( (g.elevation.degrees() - 33.746).abs() < 0.01);

    // positionless records surface absence, they don't default
    let b = &snapshot.aircraft[1];
    assert!( b.position.is_none());
    assert!( b.geometry.is_none());
    assert!( b.callsign.is_none());
    assert_eq!( b.altitude_ft, 0);
    assert_eq!( b.groundspeed_mph, 0.0);

    // "ground" altitude maps to 0, blank callsign to None
    let c = &snapshot.aircraft[2];
    assert_eq!( c.altitude_ft, 0);
    assert!( c.callsign.is_none());
    assert!( c.geometry.is_some());
}

#[test]
fn test_dump1090_snapshot_time () {
    let config = test_receiver( FeedDriver::Dump1090);
    let snapshot = dump1090::parse_snapshot( &config, DUMP1090_FEED).unwrap();

    // 2020-03-14 16:20:14 UTC is 09:20:14 PDT
    assert_eq!( snapshot.time.hour(), 9);
    assert_eq!( snapshot.time.minute(), 20);
    assert_eq!( snapshot.aircraft[0].time, snapshot.time);
}

#[test]
fn test_dump1090_duplicate_id () {
    let config = test_receiver( FeedDriver::Dump1090);
    match dump1090::parse_snapshot( &config, DUMP1090_DUPLICATE) {
        Err(SkywatchAdsbError::InvariantError(msg)) => {
            println!("got expected error: {}", msg);
            assert!( msg.contains("a1b2c3"));
        }
        _ => panic!("duplicate id not rejected")
    }
}

#[test]
fn test_vrs_normalization () {
    let config = test_receiver( FeedDriver::VirtualRadarServer);
    let snapshot = vrs::parse_snapshot( &config, VRS_FEED).unwrap();

    assert_eq!( snapshot.aircraft.len(), 3);

    let a = &snapshot.aircraft[0];
    assert_eq!( a.icao24, "A1B2C3");
    assert_eq!( a.callsign.as_deref(), Some("UAL814"));
    assert_eq!( a.altitude_ft, 11025);
    assert!( (a.groundspeed_mph - 386.662).abs() < 1e-2);
    assert!( a.geometry.is_some());

    let b = &snapshot.aircraft[1];
    assert!( b.position.is_none() && b.geometry.is_none());

    // on-ground aircraft report altitude 0 no matter what Alt says
    let c = &snapshot.aircraft[2];
    assert_eq!( c.altitude_ft, 0);

    // both drivers produce the same snapshot time for the same instant
    let d1090 = dump1090::parse_snapshot( &test_receiver(FeedDriver::Dump1090), DUMP1090_FEED).unwrap();
    assert_eq!( snapshot.time, d1090.time);
}
