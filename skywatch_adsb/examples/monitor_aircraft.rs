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

//! example to dump normalized aircraft snapshots from a configured receiver:
//! ```
//! cargo run --example monitor_aircraft
//! ```

use anyhow::Result;
use skywatch_common::{config::load_config, datetime::secs};
use skywatch_adsb::{feed::new_feed_source, ReceiverConfig};

#[tokio::main]
async fn main ()->Result<()> {
    tracing_subscriber::fmt::init();

    let config: ReceiverConfig = load_config( "receiver.ron")?;
    let feed = new_feed_source( config)?;

    loop {
        match feed.fetch().await {
            Ok(snapshot) => {
                println!("------------------ {}", snapshot.time);
                for obs in &snapshot.aircraft {
                    if obs.position.is_some() {
                        println!("{}", obs);
                    }
                }
            }
            Err(e) => eprintln!("poll failed: {e}")
        }

        tokio::time::sleep( secs(2)).await;
    }
}
