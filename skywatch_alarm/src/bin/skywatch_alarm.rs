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

use std::time::Instant;
use anyhow::Result;
use chrono::DateTime;
use chrono_tz::Tz;
use clap::Parser;
use tokio::time::sleep;
use tracing::{debug, info, warn};

use skywatch_common::config::load_config;
use skywatch_adsb::{errors::SkywatchAdsbError, feed::new_feed_source, ReceiverConfig};
use skywatch_alarm::{
    create_messengers, AlarmConfig, AlarmDispatcher, AlarmMessenger, ConsoleAlarmMessenger,
    MapImageSource, RouteInfoClient, SlackAlarmMessenger, VisitTracker,
};

/// watch an ADS-B receiver feed for aircraft entering the alarm zone and send one
/// notification per visit, timed to the closest point of approach
#[derive(Parser,Debug)]
struct Opt {
    /// receiver config file
    #[arg(long, default_value="receiver.ron")]
    receiver: String,

    /// alarm config file
    #[arg(long, default_value="alarm.ron")]
    alarm: String,

    /// optional Slack messenger config file
    #[arg(long)]
    slack: Option<String>,

    /// optional map capture config file
    #[arg(long)]
    map_image: Option<String>,

    /// optional flight route lookup config file
    #[arg(long)]
    flight_route: Option<String>,
}

#[tokio::main]
async fn main ()->Result<()> {
    tracing_subscriber::fmt::init();
    let opt = Opt::parse();

    let receiver_config: ReceiverConfig = load_config( &opt.receiver)?;
    let alarm_config: AlarmConfig = load_config( &opt.alarm)?;
    alarm_config.validate()?;

    let mut messengers: Vec<Box<dyn AlarmMessenger>> = create_messengers!( ConsoleAlarmMessenger{});
    if let Some(path) = &opt.slack {
        messengers.push( Box::new( SlackAlarmMessenger::new( load_config(path)?)));
    }

    let capture = match &opt.map_image {
        Some(path) => Some( MapImageSource::new( load_config(path)?)?),
        None => None
    };
    let routes = match &opt.flight_route {
        Some(path) => Some( RouteInfoClient::new( load_config(path)?)?),
        None => None
    };

    let feed = new_feed_source( receiver_config)?;
    let mut tracker = VisitTracker::new( alarm_config.zone.clone())?;
    let mut dispatcher = AlarmDispatcher::new( alarm_config.dispatch.clone(), messengers, capture, routes);

    info!("watching receiver {} (zone: <{}mi or >{}deg, coast {})", feed.source(),
        alarm_config.zone.distance_threshold_miles, alarm_config.zone.elevation_threshold_degrees,
        alarm_config.zone.coast_window);

    let mut last_time: Option<DateTime<Tz>> = None;
    let mut last_recycle = Instant::now();

    loop {
        sleep( alarm_config.poll_interval).await;

        let snapshot = match feed.fetch().await {
            Ok(snapshot) => snapshot,
            Err(e) => match e {
                // broken batch invariants are receiver/programming errors - don't keep going
                SkywatchAdsbError::InvariantError(_) => return Err(e.into()),
                _ => { warn!("snapshot poll failed: {e}"); continue }
            }
        };

        // unchanged feed poll - skip ingest entirely
        if last_time.as_ref() == Some(&snapshot.time) { continue }
        last_time = Some(snapshot.time);

        debug!("now: {} ({} aircraft)", snapshot.time, snapshot.len());

        // dispatch runs to completion (or per-call timeout) before the next ingest so that
        // side effects for a visit never overlap the tracker's own state mutation
        for visit in tracker.ingest( &snapshot) {
            dispatcher.dispatch( &visit).await;
        }

        if last_recycle.elapsed() >= alarm_config.recycle_interval && !tracker.has_open_visits() {
            match dispatcher.recycle_capture() {
                Ok(()) => last_recycle = Instant::now(),
                Err(e) => warn!("capture session recycle failed: {e}")
            }
        }
    }
}
