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

//! flight route enrichment - looks up origin/destination for a callsign from a
//! FlightXML style web service. Enrichment is strictly optional; lookup failures or
//! unknown flights degrade the notification to the base message

use std::{fmt, time::Duration};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use skywatch_common::datetime::{deserialize_duration, serialize_duration};
use crate::errors::Result;

#[derive(Debug,Clone,Serialize,Deserialize)]
pub struct FlightRouteConfig {
    /// the FlightInfoStatus endpoint, e.g.
    /// "https://flightxml.flightaware.com/json/FlightXML3/FlightInfoStatus"
    pub url: String,
    pub username: String,
    pub api_key: String,

    #[serde(default="default_max_results")]
    pub max_results: u32,

    #[serde(default="default_request_timeout", deserialize_with="deserialize_duration", serialize_with="serialize_duration")]
    pub request_timeout: Duration,
}

fn default_max_results ()->u32 { 10 }
fn default_request_timeout ()->Duration { Duration::from_secs(5) }

#[derive(Debug,Clone,Deserialize)]
pub struct AirportInfo {
    #[serde(rename="airport_name")]
    pub name: String,
    #[serde(rename="alternate_ident")]
    pub alt_code: Option<String>,
    pub code: Option<String>,
}

impl AirportInfo {
    /// short human readable label: "Los Angeles Intl (LAX)"
    pub fn label (&self)->String {
        match self.alt_code.as_deref().or( self.code.as_deref()) {
            Some(code) if !code.is_empty() => format!("{} ({})", self.name, code),
            _ => self.name.clone()
        }
    }
}

#[derive(Debug,Clone)]
pub struct RouteInfo {
    pub origin: AirportInfo,
    pub destination: AirportInfo,
}

impl fmt::Display for RouteInfo {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.origin.label(), self.destination.label())
    }
}

//--- the raw response layout (only the members we use)

#[derive(Deserialize,Debug)]
struct RawResponse {
    #[serde(rename="FlightInfoStatusResult")]
    result: RawResult,
}

#[derive(Deserialize,Debug)]
struct RawResult {
    #[serde(default)]
    flights: Vec<RawFlight>,
}

#[derive(Deserialize,Debug)]
struct RawFlight {
    status: String,
    origin: AirportInfo,
    destination: AirportInfo,
}

pub struct RouteInfoClient {
    config: FlightRouteConfig,
    client: Client,
}

impl RouteInfoClient {
    pub fn new (config: FlightRouteConfig)->Result<Self> {
        let client = Client::builder().timeout( config.request_timeout).build()?;
        Ok( RouteInfoClient { config, client } )
    }

    /// look up the currently active route for a callsign. Ok(None) means the service
    /// knows no matching airborne/enroute flight - that is not an error
    pub async fn flight_route (&self, callsign: &str)->Result<Option<RouteInfo>> {
        let ident = callsign.trim();

        let response = self.client.get( &self.config.url)
            .basic_auth( &self.config.username, Some( &self.config.api_key))
            .query( &[ ("ident", ident), ("howMany", self.config.max_results.to_string().as_str()) ])
            .send().await?
            .error_for_status()?;

        let raw: RawResponse = response.json().await?;

        // the result list covers past and scheduled flights too - only "On" (airborne)
        // and "En" (enroute) entries describe the flight we are looking at
        for flight in raw.result.flights {
            if flight.status == "On" || flight.status == "En" {
                return Ok( Some( RouteInfo { origin: flight.origin, destination: flight.destination }))
            }
        }

        Ok(None)
    }
}
