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

//! alarm notification dispatch for completed visits - map capture, route enrichment,
//! message rendering and messenger fan-out. Every step here is independently skippable
//! on failure; a completed visit always results in at most one notification attempt
//! per messenger and is considered finished afterwards (no retry, no re-queue)

use std::{path::PathBuf, time::Duration};
use async_trait::async_trait;
use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};
use tokio::time::timeout;
use tracing::{debug, info, warn};
use uom::si::length::mile;

use skywatch_common::{
    datetime::{deserialize_duration, local_now, serialize_duration},
    geo::CompassDirection,
    units,
};
use skywatch_adsb::AircraftObservation;

use crate::errors::Result;
use crate::route_info::{RouteInfo, RouteInfoClient};
use crate::screenshot::MapImageSource;
use crate::tracker::CompletedVisit;

/* #region alarm data *******************************************************************************/

/// abstract alarm data handed to messengers
#[derive(Debug)]
pub struct Alarm {
    pub icao24: String,
    pub flight: String,         // callsign or hex id, whitespace stripped
    pub distance_miles: f64,    // closest approach distance
    pub description: String,    // the rendered, length gated message text
    pub time: DateTime<Utc>,    // closest approach time
    pub image: Option<PathBuf>, // captured map image, if any
}

/// abstract interface for messenger services (Slack, console, SMS etc).
/// since this is a simple interface that is hopefully not called too often we use `async_trait`
/// to make it object-safe
#[async_trait]
pub trait AlarmMessenger: Send + Sync {
    /// impls have to make sure this is guaranteed to return in bounded time so that we know
    /// if notifications were sent out
    async fn send_alarm (&self, alarm: &Alarm)->Result<()>;
}

#[macro_export]
macro_rules! create_messengers {
    ( $( $msgr:expr ),* ) => {
        vec![
            $( Box::new($msgr) as Box<dyn $crate::alarm::AlarmMessenger> ),*
        ]
    }
}

/// this is just a dummy Messenger that prints out alarms to the console (used for testing)
pub struct ConsoleAlarmMessenger {}

#[async_trait]
impl AlarmMessenger for ConsoleAlarmMessenger {
    async fn send_alarm (&self, alarm: &Alarm)->Result<()> {
        println!("{} {}", local_now().format("%Y-%m-%d %H:%M:%S"), alarm.description);
        Ok(())
    }
}

/* #endregion alarm data */

/* #region dispatch config **************************************************************************/

#[derive(Debug,Clone,Serialize,Deserialize)]
#[serde(default)]
pub struct AlarmDispatchConfig {
    pub attach_image: bool,
    #[serde(deserialize_with="deserialize_duration", serialize_with="serialize_duration")]
    pub image_timeout: Duration,
    #[serde(deserialize_with="deserialize_duration", serialize_with="serialize_duration")]
    pub route_timeout: Duration,
    #[serde(deserialize_with="deserialize_duration", serialize_with="serialize_duration")]
    pub send_timeout: Duration,

    pub max_message_len: usize, // the notification channel maximum - gates tag appending
    pub template: String,
    pub tags: TagConfig,
}

impl Default for AlarmDispatchConfig {
    fn default()->Self {
        AlarmDispatchConfig {
            attach_image: true,
            image_timeout: Duration::from_secs(20),
            route_timeout: Duration::from_secs(5),
            send_timeout: Duration::from_secs(10),
            max_message_len: 280,
            template: DEFAULT_TEMPLATE.to_string(),
            tags: TagConfig::default(),
        }
    }
}

pub const DEFAULT_TEMPLATE: &str =
    "{flight}: {dist_mi}mi ({dist_km}km/{dist_nm}nm) away @ {alt_ft}ft ({alt_m}m) and {elev}° frm hrzn, heading {dir} @ {spd_mph}mi/h, {vr_fpm}ft/min, {rssi}dB, {time}{route}.";

/// category tag rules, all thresholds configurable. Conditional tags are appended in
/// field order, unconditional ones last, each only while the message stays within the
/// channel maximum length
#[derive(Debug,Clone,Serialize,Deserialize)]
#[serde(default)]
pub struct TagConfig {
    pub quiet_start_hour: u32, // local hour from which on a flyover counts as after-hours
    pub quiet_end_hour: u32,   // local hour until which a flyover counts as after-hours
    pub after_hours: String,

    pub low_altitude_ft: i64,
    pub low_altitude: String,

    pub landing_band_ft: (i64,i64), // altitude band that makes a landing plausible
    pub landing_directions: Vec<CompassDirection>, // towards the landing-probable quadrant
    pub landing: String,

    pub high_band_ft: (i64,i64),
    pub high: String,
    pub very_high_ft: i64,
    pub very_high: String,

    pub fast_band_mph: (f64,f64),
    pub fast: String,
    pub very_fast_mph: f64,
    pub very_fast: String,

    pub always: Vec<String>, // unconditional tags, appended last (also length gated)
}

impl Default for TagConfig {
    fn default()->Self {
        TagConfig {
            quiet_start_hour: 23,
            quiet_end_hour: 7,
            after_hours: "#AfterHours".to_string(),
            low_altitude_ft: 1000,
            low_altitude: "#2CloseForComfort".to_string(),
            landing_band_ft: (1000, 2500),
            landing_directions: vec![ CompassDirection::S, CompassDirection::SW ],
            landing: "#ProbablyLanding".to_string(),
            high_band_ft: (20000, 35000),
            high: "#UpInTheClouds".to_string(),
            very_high_ft: 35000,
            very_high: "#WayTheHeckUpThere".to_string(),
            fast_band_mph: (300.0, 500.0),
            fast: "#MovingQuickly".to_string(),
            very_fast_mph: 500.0,
            very_fast: "#FlyingFast".to_string(),
            always: vec![ "#skywatch".to_string(), "#ADSB".to_string() ],
        }
    }
}

/* #endregion dispatch config */

/* #region message rendering ************************************************************************/

/// substitute `{key}` placeholders. Unknown placeholders are left alone so that template
/// typos show up in the output instead of silently disappearing
fn render_template (template: &str, fields: &[(&str,String)])->String {
    let mut text = template.to_string();
    for (key,value) in fields {
        text = text.replace( format!("{{{key}}}").as_str(), value.as_str());
    }
    text
}

fn alarm_fields (obs: &AircraftObservation, route: Option<&RouteInfo>)->Vec<(&'static str,String)> {
    // completed visits always carry geometry (they were zone members) but the renderer
    // keeps the legacy -1/0 convention for the degenerate case
    let (dist, brg, elev) = match &obs.geometry {
        Some(g) => (g.distance.get::<mile>(), g.bearing.degrees(), g.elevation.degrees()),
        None => (-1.0, 0.0, 0.0)
    };
    let dir = CompassDirection::from_heading( obs.heading);
    let route_str = match route {
        Some(r) => format!(" from {} to {}", r.origin.label(), r.destination.label()),
        None => String::new()
    };

    vec![
        ("flight", obs.flight_label().split_whitespace().collect()),
        ("icao24", obs.icao24.clone()),
        ("dist_mi", format!("{:.1}", dist)),
        ("dist_km", format!("{:.1}", units::miles_to_kilometers(dist))),
        ("dist_nm", format!("{:.1}", units::miles_to_nautical_miles(dist))),
        ("alt_ft", format!("{}", obs.altitude_ft)),
        ("alt_m", format!("{:.0}", units::feet_to_meters(obs.altitude_ft as f64))),
        ("elev", format!("{:.1}", elev)),
        ("brg", format!("{:.0}", brg)),
        ("dir", dir.to_string()),
        ("spd_mph", format!("{:.1}", obs.groundspeed_mph)),
        ("spd_kmh", format!("{:.1}", units::miles_to_kilometers(obs.groundspeed_mph))),
        ("spd_kt", format!("{:.1}", units::mph_to_knots(obs.groundspeed_mph))),
        ("vr_fpm", format!("{}", obs.vertical_rate_fpm)),
        ("rssi", format!("{:.1}", obs.rssi_db)),
        ("time", obs.time.format("%H:%M:%S").to_string()),
        ("route", route_str),
    ]
}

fn category_tags<'a> (cfg: &'a TagConfig, obs: &AircraftObservation)->Vec<&'a str> {
    let mut tags: Vec<&str> = Vec::new();
    let dir = CompassDirection::from_heading( obs.heading);
    let hour = obs.time.hour();
    let alt = obs.altitude_ft;
    let spd = obs.groundspeed_mph;

    if hour < cfg.quiet_end_hour || hour >= cfg.quiet_start_hour {
        tags.push( cfg.after_hours.as_str());
    }
    if alt < cfg.low_altitude_ft {
        tags.push( cfg.low_altitude.as_str());
    }
    if alt >= cfg.landing_band_ft.0 && alt < cfg.landing_band_ft.1 && cfg.landing_directions.contains(&dir) {
        tags.push( cfg.landing.as_str());
    }
    if alt >= cfg.high_band_ft.0 && alt < cfg.high_band_ft.1 {
        tags.push( cfg.high.as_str());
    }
    if alt >= cfg.very_high_ft {
        tags.push( cfg.very_high.as_str());
    }
    if spd >= cfg.fast_band_mph.0 && spd < cfg.fast_band_mph.1 {
        tags.push( cfg.fast.as_str());
    }
    if spd >= cfg.very_fast_mph {
        tags.push( cfg.very_fast.as_str());
    }

    tags
}

fn append_gated (text: &mut String, tag: &str, max_len: usize) {
    if text.chars().count() + 1 + tag.chars().count() <= max_len {
        text.push(' ');
        text.push_str( tag);
    }
}

/// render the outbound message for a closest approach observation: template substitution
/// plus length gated category tags
pub fn render_alarm_text (config: &AlarmDispatchConfig, obs: &AircraftObservation, route: Option<&RouteInfo>)->String {
    let mut text = render_template( &config.template, &alarm_fields( obs, route));

    for tag in category_tags( &config.tags, obs) {
        append_gated( &mut text, tag, config.max_message_len);
    }
    for tag in &config.tags.always {
        append_gated( &mut text, tag.as_str(), config.max_message_len);
    }

    text
}

/* #endregion message rendering */

/* #region dispatcher *******************************************************************************/

/// converts completed visits into delivery requests and hands them off to the configured
/// messengers. Owns the (recyclable) capture session and the route lookup client
pub struct AlarmDispatcher {
    config: AlarmDispatchConfig,
    messengers: Vec<Box<dyn AlarmMessenger>>,
    capture: Option<MapImageSource>,
    routes: Option<RouteInfoClient>,
}

impl AlarmDispatcher {
    pub fn new (config: AlarmDispatchConfig,
                messengers: Vec<Box<dyn AlarmMessenger>>,
                capture: Option<MapImageSource>,
                routes: Option<RouteInfoClient>)->Self
    {
        AlarmDispatcher { config, messengers, capture, routes }
    }

    /// re-create the capture http session. Callers have to make sure no visit is
    /// currently open so that we don't invalidate an in-progress capture target
    pub fn recycle_capture (&mut self)->Result<()> {
        if let Some(capture) = &mut self.capture {
            capture.recycle()?;
            debug!("capture session recycled");
        }
        Ok(())
    }

    /// turn one completed visit into notifications. Capture and route lookup run
    /// concurrently but this only returns once all side effects for the visit are done
    /// (or timed out) - callers await this before ingesting the next batch
    pub async fn dispatch (&self, visit: &CompletedVisit) {
        let obs = &visit.best;

        let (image, route) = tokio::join!( self.capture_image( obs), self.lookup_route( obs));

        let description = render_alarm_text( &self.config, obs, route.as_ref());
        let alarm = Alarm {
            icao24: obs.icao24.clone(),
            flight: obs.flight_label().split_whitespace().collect(),
            distance_miles: obs.distance().map( |d| d.get::<mile>()).unwrap_or(-1.0),
            description,
            time: obs.time.to_utc(),
            image,
        };

        for msgr in &self.messengers {
            match timeout( self.config.send_timeout, msgr.send_alarm( &alarm)).await {
                Ok(Ok(())) => {}
                Ok(Err(e)) => warn!("failed to send alarm notification: {e}"),
                Err(_) => warn!("alarm notification timed out for {}", alarm.icao24),
            }
        }

        info!("finished visit of {} ({:.1}mi closest approach)", alarm.icao24, alarm.distance_miles);
    }

    async fn capture_image (&self, obs: &AircraftObservation)->Option<PathBuf> {
        if !self.config.attach_image { return None }
        let capture = self.capture.as_ref()?;

        match timeout( self.config.image_timeout, capture.capture( &obs.icao24)).await {
            Ok(Ok(path)) => Some(path),
            Ok(Err(e)) => { warn!("map capture failed for {}: {e}", obs.icao24); None }
            Err(_) => { warn!("map capture timed out for {}", obs.icao24); None }
        }
    }

    async fn lookup_route (&self, obs: &AircraftObservation)->Option<RouteInfo> {
        let routes = self.routes.as_ref()?;
        let callsign = obs.callsign.as_deref()?;

        match timeout( self.config.route_timeout, routes.flight_route( callsign)).await {
            Ok(Ok(Some(route))) => Some(route),
            Ok(Ok(None)) => { debug!("no active route for {}", callsign); None }
            Ok(Err(e)) => { warn!("route lookup failed for {}: {e}", callsign); None }
            Err(_) => { warn!("route lookup timed out for {}", callsign); None }
        }
    }
}

/* #endregion dispatcher */
