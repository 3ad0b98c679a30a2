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

//! feed adapter for the dump1090 `aircraft.json` endpoint
//!
//! payload example:
//! ```json
//! { "now" : 1584202814.8,
//!   "aircraft" : [
//!     {"hex":"a1b2c3","squawk":"3514","flight":"UAL814  ","lat":33.701,"lon":-117.834,
//!      "altitude":11025,"vert_rate":-1088,"track":244,"speed":336,"messages":446,
//!      "seen":0.2,"rssi":-28.2},
//!     {"hex":"~aa4bc7","altitude":"ground","messages":23,"seen":12.6,"rssi":-31.0}
//!   ]
//! }
//! ```
//! note that positionless aircraft simply lack the lat/lon members and that altitude
//! can be the literal `"ground"`. Newer dump1090 forks renamed altitude/speed into
//! alt_baro/gs, which we accept as aliases

use async_trait::async_trait;
use chrono::DateTime;
use reqwest::Client;
use serde::{Deserialize, Deserializer};
use tracing::debug;

use skywatch_common::{angle::Angle360, geo::GeoPos, units::knots_to_mph};

use crate::feed::{new_http_client, normalize_callsign, FeedSource};
use crate::errors::{parse_error, Result};
use crate::{zone_geometry, AircraftObservation, ReceiverConfig, Snapshot};

#[derive(Deserialize,Debug)]
struct RawFeed {
    now: f64, // epoch seconds of this snapshot
    aircraft: Vec<RawAircraft>,
}

#[derive(Deserialize,Debug)]
struct RawAircraft {
    hex: Option<String>,
    squawk: Option<String>,
    flight: Option<String>,

    lat: Option<f64>,
    lon: Option<f64>,

    #[serde(default, alias="alt_baro", deserialize_with="de_altitude")]
    altitude: i64,
    #[serde(default, alias="baro_rate")]
    vert_rate: i64,
    track: Option<f64>,
    #[serde(default, alias="gs")]
    speed: f64, // knots

    #[serde(default)]
    messages: u64,
    #[serde(default)]
    seen: f64,
    #[serde(default)]
    rssi: f64,
}

/// altitude is either feet or the literal "ground"
fn de_altitude<'de,D> (deserializer: D)->std::result::Result<i64,D::Error> where D: Deserializer<'de> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawAltitude { Feet(i64), Label(String) }

    Ok( match RawAltitude::deserialize(deserializer)? {
        RawAltitude::Feet(ft) => ft,
        RawAltitude::Label(_) => 0 // "ground"
    })
}

pub struct Dump1090Source {
    config: ReceiverConfig,
    client: Client,
}

impl Dump1090Source {
    pub fn new (config: ReceiverConfig)->Result<Self> {
        let client = new_http_client( &config)?;
        Ok( Dump1090Source { config, client } )
    }
}

#[async_trait]
impl FeedSource for Dump1090Source {
    async fn fetch (&self)->Result<Snapshot> {
        let raw: RawFeed = self.client.get( &self.config.url).send().await?
            .error_for_status()?
            .json().await?;
        normalize( &self.config, raw)
    }

    fn source (&self)->&str { self.config.name.as_str() }
}

/// parse a raw dump1090 payload into a normalized snapshot (also the test entry point)
pub fn parse_snapshot (config: &ReceiverConfig, data: &str)->Result<Snapshot> {
    let raw: RawFeed = serde_json::from_str(data)?;
    normalize( config, raw)
}

fn normalize (config: &ReceiverConfig, raw: RawFeed)->Result<Snapshot> {
    let time = DateTime::from_timestamp_millis( (raw.now * 1000.0) as i64)
        .ok_or_else( || parse_error!("invalid snapshot timestamp: {}", raw.now))?
        .with_timezone( &config.timezone);

    let receiver = config.position();
    let mut aircraft: Vec<AircraftObservation> = Vec::with_capacity( raw.aircraft.len());

    for a in raw.aircraft {
        let Some(icao24) = a.hex else {
            debug!("dropping aircraft record without hex id");
            continue
        };

        let position = match (a.lat, a.lon) {
            (Some(lat), Some(lon)) => Some( GeoPos::from_degrees( lat, lon)),
            _ => None
        };
        let altitude_ft = a.altitude;
        let geometry = position.as_ref().map( |pos| {
            zone_geometry( &receiver, pos, skywatch_common::units::feet( altitude_ft as f64))
        });

        aircraft.push( AircraftObservation {
            icao24,
            squawk: a.squawk,
            callsign: normalize_callsign( a.flight),
            position,
            altitude_ft,
            vertical_rate_fpm: a.vert_rate,
            heading: a.track.map( Angle360::from_degrees),
            groundspeed_mph: knots_to_mph( a.speed),
            rssi_db: a.rssi,
            messages: a.messages,
            seen_sec: a.seen,
            time,
            geometry,
        });
    }

    Snapshot::new( config.name.clone(), time, aircraft)
}
