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

use chrono::{DateTime, TimeZone};
use chrono_tz::Tz;

use skywatch_common::{angle::{Angle90, Angle360}, geo::GeoPos, units::miles};
use skywatch_adsb::{AircraftObservation, ZoneGeometry};
use skywatch_alarm::{
    render_alarm_text, AirportInfo, AlarmDispatchConfig, RouteInfo, TagConfig,
};

//--- test scaffolding

fn obs_at (hour: u32, alt_ft: i64, hdg_deg: f64, spd_mph: f64)->AircraftObservation {
    AircraftObservation {
        icao24: "a1b2c3".to_string(),
        squawk: Some( "3514".to_string()),
        callsign: Some( "UAL814".to_string()),
        position: Some( GeoPos::from_degrees( 33.7, -117.8)),
        altitude_ft: alt_ft,
        vertical_rate_fpm: -500,
        heading: Some( Angle360::from_degrees( hdg_deg)),
        groundspeed_mph: spd_mph,
        rssi_db: -21.5,
        messages: 250,
        seen_sec: 0.2,
        time: Tz::UTC.with_ymd_and_hms( 2025, 6, 1, hour, 0, 5).unwrap(),
        geometry: Some( ZoneGeometry {
            distance: miles(0.3),
            bearing: Angle360::from_degrees( 45.0),
            elevation: Angle90::from_degrees( 60.0),
        }),
    }
}

fn sample_route ()->RouteInfo {
    RouteInfo {
        origin: AirportInfo {
            name: "Los Angeles Intl".to_string(),
            alt_code: Some( "LAX".to_string()),
            code: Some( "KLAX".to_string()),
        },
        destination: AirportInfo {
            name: "John Wayne".to_string(),
            alt_code: Some( "SNA".to_string()),
            code: Some( "KSNA".to_string()),
        },
    }
}

//--- message rendering

#[test]
fn test_render_base_message () {
    let config = AlarmDispatchConfig::default();
    let text = render_alarm_text( &config, &obs_at( 12, 5000, 210.0, 180.0), None);
    println!("{}", text);

    assert!( text.starts_with( "UAL814: 0.3mi (0.5km/0.3nm) away @ 5000ft (1524m) and 60.0° frm hrzn"));
    assert!( text.contains( "heading SW @ 180.0mi/h"));
    assert!( text.contains( "-500ft/min"));
    assert!( text.contains( "-21.5dB"));
    assert!( text.contains( "12:00:05"));
    assert!( !text.contains( " from ")); // no enrichment, no route clause
    assert!( text.contains( "#skywatch") && text.contains( "#ADSB")); // unconditional tags
}

#[test]
fn test_render_with_route () {
    let config = AlarmDispatchConfig::default();
    let route = sample_route();
    let text = render_alarm_text( &config, &obs_at( 12, 5000, 210.0, 180.0), Some(&route));
    println!("{}", text);

    assert!( text.contains( " from Los Angeles Intl (LAX) to John Wayne (SNA)."));
}

#[test]
fn test_conditional_tags () {
    let config = AlarmDispatchConfig::default();

    // low and moving quickly, but not in the landing band
    let text = render_alarm_text( &config, &obs_at( 12, 800, 180.0, 350.0), None);
    assert!( text.contains( "#2CloseForComfort"));
    assert!( text.contains( "#MovingQuickly"));
    assert!( !text.contains( "#ProbablyLanding"));
    assert!( !text.contains( "#AfterHours"));

    // landing band altitude towards the landing-probable directions
    let text = render_alarm_text( &config, &obs_at( 12, 1500, 210.0, 200.0), None);
    assert!( text.contains( "#ProbablyLanding"));
    assert!( !text.contains( "#2CloseForComfort"));

    // after hours + very fast
    let text = render_alarm_text( &config, &obs_at( 23, 5000, 210.0, 600.0), None);
    assert!( text.contains( "#AfterHours"));
    assert!( text.contains( "#FlyingFast"));
    assert!( !text.contains( "#MovingQuickly")); // bands don't overlap
}

#[test]
fn test_tag_length_gating () {
    // baseline without any tags
    let mut config = AlarmDispatchConfig::default();
    config.tags.always = vec![];
    let base = render_alarm_text( &config, &obs_at( 12, 5000, 210.0, 180.0), None);
    let base_len = base.chars().count();

    // leave room for exactly one of the two unconditional tags
    let mut config = AlarmDispatchConfig::default();
    config.max_message_len = base_len + 1 + "#skywatch".chars().count();
    let text = render_alarm_text( &config, &obs_at( 12, 5000, 210.0, 180.0), None);

    assert!( text.ends_with( "#skywatch"));
    assert!( !text.contains( "#ADSB"));
    assert!( text.chars().count() <= config.max_message_len);
}

//--- sample config files

#[test]
fn test_sample_configs_parse () {
    use skywatch_common::config::load_config;

    let receiver: skywatch_adsb::ReceiverConfig = load_config( "configs/receiver.ron").unwrap();
    assert_eq!( receiver.name, "home");
    assert_eq!( receiver.driver, skywatch_adsb::FeedDriver::Dump1090);
    assert!( (receiver.latitude.degrees() - 33.7458).abs() < 1e-9);

    let alarm: skywatch_alarm::AlarmConfig = load_config( "configs/alarm.ron").unwrap();
    alarm.validate().unwrap();
    assert_eq!( alarm.zone.coast_window, 5);
    assert_eq!( alarm.poll_interval, std::time::Duration::from_millis(500));
    assert_eq!( alarm.dispatch.max_message_len, 280);
    assert!( !alarm.dispatch.template.is_empty()); // omitted in the file, filled from default

    let slack: skywatch_alarm::SlackAlarmConfig = load_config( "configs/slack_alarm.ron").unwrap();
    assert_eq!( slack.alarm_channels.len(), 2);
    assert_eq!( slack.alarm_channels[0].flight, "*");
    assert!( slack.alarm_channels[0].max_distance_miles.is_infinite());
    assert!( (slack.alarm_channels[1].max_distance_miles - 0.5).abs() < 1e-9);

    let map: skywatch_alarm::MapImageConfig = load_config( "configs/map_image.ron").unwrap();
    assert!( map.url.contains( "{icao24}"));

    let route: skywatch_alarm::FlightRouteConfig = load_config( "configs/flight_route.ron").unwrap();
    assert_eq!( route.max_results, 10);
}
