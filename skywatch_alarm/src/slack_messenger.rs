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
use serde::Deserialize;

use skywatch_common::slack::{self, FileAttachment};
use crate::alarm::{Alarm, AlarmMessenger};
use crate::errors::Result;

#[derive(Deserialize,Debug)]
pub struct SlackAlarmConfig {
    pub token: String,
    pub alarm_channels: Vec<SlackAlarmChannel>
}

/// the channel an alarm should be sent to, including optional filter values for flight id
/// prefix and maximum closest-approach distance.
/// we keep this as a flat struct so that it can be extended with format specifiers and
/// alarm specific actions
#[derive(Deserialize,Debug)]
pub struct SlackAlarmChannel {
    /// the Slack channel ID
    pub id: String,

    #[serde(default="default_flight")]
    pub flight: String,

    #[serde(default="default_max_distance")]
    pub max_distance_miles: f64
}

fn default_flight ()->String { "*".into() }          // all flights
fn default_max_distance ()->f64 { f64::INFINITY }    // any closest approach

impl SlackAlarmChannel {
    pub fn matches (&self, alarm: &Alarm) -> bool {
        (self.flight == "*" || alarm.flight.starts_with( &self.flight) || alarm.icao24.starts_with( &self.flight))
        && (alarm.distance_miles <= self.max_distance_miles)
    }
}

/// Slack API based messenger for flyover alarm notifications
pub struct SlackAlarmMessenger {
    config: SlackAlarmConfig,
    client: Client,
}

impl SlackAlarmMessenger {
    pub fn new (config: SlackAlarmConfig)->Self {
        SlackAlarmMessenger { config, client: Client::new() }
    }
}

#[async_trait]
impl AlarmMessenger for SlackAlarmMessenger {

    async fn send_alarm (&self, alarm: &Alarm)->Result<()> {
        let config = &self.config;
        let files = get_file_attachments( alarm);

        for alarm_channel in &config.alarm_channels {
            if alarm_channel.matches( alarm) {
                if files.is_empty() {
                    slack::send_msg( &self.client, &config.token, &alarm_channel.id, &alarm.description, None).await?;
                } else {
                    slack::send_msg_with_files( &self.client, &config.token, &alarm_channel.id, &alarm.description, &files).await?;
                }
            }
        }

        Ok(())
    }
}

fn get_file_attachments (alarm: &Alarm)->Vec<FileAttachment> {
    let mut attachments: Vec<FileAttachment> = Vec::new();

    if let Some(pathname) = &alarm.image {
        if pathname.is_file() {
            attachments.push( FileAttachment { path: pathname.clone(), caption: alarm.flight.clone() })
        }
    }

    attachments
}
