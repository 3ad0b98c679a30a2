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

//! console tool to display the current receiver picture, sorted by distance

use anyhow::Result;
use clap::Parser;
use tokio::time::sleep;
use uom::si::length::mile;

use skywatch_common::{config::load_config, datetime::secs_f64};
use skywatch_adsb::{feed::new_feed_source, ReceiverConfig, Snapshot};

#[derive(Parser,Debug)]
struct Opt {
    /// receiver config file
    #[arg(long, default_value="receiver.ron")]
    receiver: String,

    /// keep polling instead of printing a single snapshot
    #[arg(short, long)]
    watch: bool,

    /// poll interval in seconds (with --watch)
    #[arg(long, default_value="2.0")]
    interval: f64,
}

#[tokio::main]
async fn main ()->Result<()> {
    let opt = Opt::parse();

    let config: ReceiverConfig = load_config( &opt.receiver)?;
    let feed = new_feed_source( config)?;

    loop {
        match feed.fetch().await {
            Ok(snapshot) => {
                if opt.watch { print!("\x1B[2J\x1B[H"); } // clear screen
                print_snapshot( &snapshot);
            }
            Err(e) => eprintln!("poll failed: {e}")
        }

        if !opt.watch { break }
        sleep( secs_f64( opt.interval)).await;
    }

    Ok(())
}

fn print_snapshot (snapshot: &Snapshot) {
    println!("Now: {}", snapshot.time.format("%Y-%m-%d %H:%M:%S"));
    println!("|  icao   | flight  | miles |   az  |  el  |  alt  | mi/h  | vert  | rssi  | mesgs | seen |");
    println!("|---------+---------+-------+-------+------+-------+-------+-------+-------+-------+------|");

    let mut positioned: Vec<_> = snapshot.aircraft.iter()
        .filter( |obs| obs.geometry.is_some())
        .collect();
    positioned.sort_by( |a,b| a.distance().partial_cmp( &b.distance()).unwrap_or(std::cmp::Ordering::Equal));

    for obs in positioned {
        let (dist, az, el) = match &obs.geometry {
            Some(g) => (g.distance.get::<mile>(), g.bearing.degrees(), g.elevation.degrees()),
            None => (-1.0, 0.0, 0.0) // not reached - kept for the legacy sentinel convention
        };

        println!("| {:<7} | {:^8}| {:>5.1} | {:>5.1} | {:>4.1} | {:>5} | {:>5.1} | {:>+5} | {:>5.1} | {:>5} | {:>4.1} |",
            obs.icao24,
            obs.callsign.as_deref().unwrap_or("N/A"),
            dist, az, el,
            obs.altitude_ft,
            obs.groundspeed_mph,
            obs.vertical_rate_fpm,
            obs.rssi_db,
            obs.messages,
            obs.seen_sec);
    }
}
