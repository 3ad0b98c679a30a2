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

//! map image capture for alarm notifications. The capture endpoint is a map renderer
//! that accepts an aircraft id (e.g. a tar1090/dump1090 screenshot service); we download
//! the rendered image into the cache dir and attach the file to the outbound notification

use std::{fs, path::PathBuf, time::Duration};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use skywatch_common::{config::cache_dir, datetime::{deserialize_duration, serialize_duration, utc_now}};
use crate::errors::{op_failed, Result};

#[derive(Debug,Clone,Serialize,Deserialize)]
pub struct MapImageConfig {
    /// capture endpoint with an `{icao24}` placeholder, e.g.
    /// "http://localhost:8088/screenshot?icao={icao24}"
    pub url: String,

    #[serde(default="default_request_timeout", deserialize_with="deserialize_duration", serialize_with="serialize_duration")]
    pub request_timeout: Duration,
}

fn default_request_timeout ()->Duration { Duration::from_secs(15) }

/// downloads rendered map images keyed by aircraft id. The underlying http session is
/// long-lived and can be recycled between visits
pub struct MapImageSource {
    config: MapImageConfig,
    client: Client,
}

impl MapImageSource {
    pub fn new (config: MapImageConfig)->Result<Self> {
        let client = new_client( &config)?;
        Ok( MapImageSource { config, client } )
    }

    /// fetch the rendered map image for the given aircraft id and store it in the cache dir.
    /// Failures here degrade the notification to text-only, they never abort it
    pub async fn capture (&self, icao24: &str)->Result<PathBuf> {
        // ids can carry marker chars ('~' for non-icao addresses) that the renderer won't know
        let id: String = icao24.chars().filter( |c| c.is_ascii_alphanumeric()).collect();
        let uri = self.config.url.replace( "{icao24}", id.as_str());

        let response = self.client.get( &uri).send().await?.error_for_status()?;
        let data = response.bytes().await?;
        if data.is_empty() {
            return Err( op_failed( format!("empty capture response for {}", id)))
        }

        let path = cache_dir().join( format!("{}-{}.png", utc_now().format("%Y%m%d-%H%M%S_%3f"), id));
        fs::write( &path, &data)?;

        Ok(path)
    }

    /// drop and re-create the underlying http session. Only call while no visits are open
    pub fn recycle (&mut self)->Result<()> {
        self.client = new_client( &self.config)?;
        Ok(())
    }
}

fn new_client (config: &MapImageConfig)->Result<Client> {
    Ok( Client::builder().timeout( config.request_timeout).build()? )
}
