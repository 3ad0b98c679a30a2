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

//! zone-entry tracking and notification for an ADS-B receiver feed.
//!
//! The heart of this crate is the [`tracker::VisitTracker`] state machine that turns a
//! stream of time-stamped aircraft snapshots into a deduplicated stream of one-notification-
//! per-visit events, each carrying the closest approach observation of that visit. Everything
//! around it is a stateless transform or an I/O adapter: the [`tracker::is_in_zone`] membership
//! predicate, the [`alarm::AlarmDispatcher`] with its pluggable [`alarm::AlarmMessenger`]
//! impls, the optional map capture and route enrichment collaborators

use std::time::Duration;
use serde::{Deserialize, Serialize};

mod tracker;
pub use tracker::*;

pub mod alarm;
pub use alarm::*;

mod slack_messenger;
pub use slack_messenger::*;

mod screenshot;
pub use screenshot::*;

mod route_info;
pub use route_info::*;

pub mod errors;
pub use errors::*;

use skywatch_common::datetime::{deserialize_duration, serialize_duration};

/// the top level alarm process config - read once at startup, immutable thereafter
#[derive(Debug,Clone,Serialize,Deserialize)]
#[serde(default)]
pub struct AlarmConfig {
    pub zone: ZoneConfig,

    #[serde(deserialize_with="deserialize_duration", serialize_with="serialize_duration")]
    pub poll_interval: Duration,

    /// how often the capture http session is recycled (only happens while no visits are open)
    #[serde(deserialize_with="deserialize_duration", serialize_with="serialize_duration")]
    pub recycle_interval: Duration,

    pub dispatch: AlarmDispatchConfig,
}

impl Default for AlarmConfig {
    fn default()->Self {
        AlarmConfig {
            zone: ZoneConfig::default(),
            poll_interval: Duration::from_millis(500),
            recycle_interval: Duration::from_secs(3600),
            dispatch: AlarmDispatchConfig::default(),
        }
    }
}

impl AlarmConfig {
    pub fn validate (&self)->errors::Result<()> {
        self.zone.validate()?;
        if self.poll_interval.is_zero() {
            return Err( errors::config_error("poll interval must be positive"))
        }
        Ok(())
    }
}
