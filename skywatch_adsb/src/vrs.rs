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

//! feed adapter for the VirtualRadarServer `AircraftList.json` endpoint.
//! VRS reports one `stm` epoch milliseconds server timestamp per response and
//! PascalCase per-aircraft members (Icao, Call, Lat, Long, Alt, Vsi, Trak, Spd, ...)

use async_trait::async_trait;
use chrono::DateTime;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use skywatch_common::{angle::Angle360, geo::GeoPos, units::knots_to_mph};

use crate::feed::{new_http_client, normalize_callsign, FeedSource};
use crate::errors::{parse_error, Result};
use crate::{zone_geometry, AircraftObservation, ReceiverConfig, Snapshot};

#[derive(Deserialize,Debug)]
struct RawFeed {
    #[serde(rename="acList")]
    ac_list: Vec<RawAircraft>,
    stm: i64, // server epoch millis of this snapshot
}

#[derive(Deserialize,Debug)]
#[serde(rename_all="PascalCase")]
struct RawAircraft {
    icao: Option<String>,
    sqk: Option<String>,
    call: Option<String>,

    lat: Option<f64>,
    long: Option<f64>,

    #[serde(default)]
    alt: i64, // ft
    #[serde(default)]
    vsi: i64, // ft/min
    trak: Option<f64>,
    #[serde(default)]
    spd: f64, // knots

    #[serde(default)]
    sig: f64, // relative signal level - surfaced as-is
    #[serde(default, rename="CMsgs")]
    c_msgs: u64,
    #[serde(default, rename="TSecs")]
    t_secs: f64,
    #[serde(default)]
    gnd: bool,
}

pub struct VrsSource {
    config: ReceiverConfig,
    client: Client,
}

impl VrsSource {
    pub fn new (config: ReceiverConfig)->Result<Self> {
        let client = new_http_client( &config)?;
        Ok( VrsSource { config, client } )
    }
}

#[async_trait]
impl FeedSource for VrsSource {
    async fn fetch (&self)->Result<Snapshot> {
        let raw: RawFeed = self.client.get( &self.config.url).send().await?
            .error_for_status()?
            .json().await?;
        normalize( &self.config, raw)
    }

    fn source (&self)->&str { self.config.name.as_str() }
}

/// parse a raw VRS payload into a normalized snapshot (also the test entry point)
pub fn parse_snapshot (config: &ReceiverConfig, data: &str)->Result<Snapshot> {
    let raw: RawFeed = serde_json::from_str(data)?;
    normalize( config, raw)
}

fn normalize (config: &ReceiverConfig, raw: RawFeed)->Result<Snapshot> {
    let time = DateTime::from_timestamp_millis( raw.stm)
        .ok_or_else( || parse_error!("invalid snapshot timestamp: {}", raw.stm))?
        .with_timezone( &config.timezone);

    let receiver = config.position();
    let mut aircraft: Vec<AircraftObservation> = Vec::with_capacity( raw.ac_list.len());

    for a in raw.ac_list {
        let Some(icao24) = a.icao else {
            debug!("dropping aircraft record without Icao id");
            continue
        };

        let position = match (a.lat, a.long) {
            (Some(lat), Some(lon)) => Some( GeoPos::from_degrees( lat, lon)),
            _ => None
        };
        let altitude_ft = if a.gnd { 0 } else { a.alt };
        let geometry = position.as_ref().map( |pos| {
            zone_geometry( &receiver, pos, skywatch_common::units::feet( altitude_ft as f64))
        });

        aircraft.push( AircraftObservation {
            icao24,
            squawk: a.sqk,
            callsign: normalize_callsign( a.call),
            position,
            altitude_ft,
            vertical_rate_fpm: a.vsi,
            heading: a.trak.map( Angle360::from_degrees),
            groundspeed_mph: knots_to_mph( a.spd),
            rssi_db: a.sig,
            messages: a.c_msgs,
            seen_sec: a.t_secs,
            time,
            geometry,
        });
    }

    Snapshot::new( config.name.clone(), time, aircraft)
}
