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

use async_trait::async_trait;
use reqwest::Client;

use crate::{dump1090::Dump1090Source, vrs::VrsSource, FeedDriver, ReceiverConfig, Snapshot};
use crate::errors::Result;

/// abstract interface for telemetry sources that can be polled for aircraft snapshots.
/// One impl per raw wire format, all producing the same normalized [`Snapshot`].
/// Impls are selected by the configured [`FeedDriver`], not by inheritance
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// poll the endpoint and return the normalized snapshot. Whether the snapshot
    /// is new data is decided by the caller (via the snapshot time)
    async fn fetch (&self)->Result<Snapshot>;

    /// the receiver station name
    fn source (&self)->&str;
}

/// create the [`FeedSource`] impl for the configured driver
pub fn new_feed_source (config: ReceiverConfig)->Result<Box<dyn FeedSource>> {
    Ok( match config.driver {
        FeedDriver::Dump1090 => Box::new( Dump1090Source::new( config)?),
        FeedDriver::VirtualRadarServer => Box::new( VrsSource::new( config)?),
    })
}

pub (crate) fn new_http_client (config: &ReceiverConfig)->Result<Client> {
    Ok( Client::builder().timeout( config.request_timeout).build()? )
}

/// trim a raw callsign field and turn placeholder values into explicit absence
pub (crate) fn normalize_callsign (raw: Option<String>)->Option<String> {
    raw.and_then( |cs| {
        let cs = cs.trim();
        if cs.is_empty() || cs == "N/A" { None } else { Some(cs.to_string()) }
    })
}
