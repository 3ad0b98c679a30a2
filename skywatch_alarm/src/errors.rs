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

use thiserror::Error;
use skywatch_common::map_to_opaque_error;

pub type Result<T> = std::result::Result<T, SkywatchAlarmError>;

/// skywatch_alarm specific error type. Note that we need those to be Clone, hence we use
/// our own mapping into opaque types that do not store the source error
#[derive(Error,Debug,Clone)]
pub enum SkywatchAlarmError {
    #[error("IO error {0}")]
    IOError(String),

    #[error("config error {0}")]
    ConfigError(String),

    #[error("http error {0}")]
    HttpError(String),

    #[error("JSON error {0}")]
    JsonError(String),

    #[error("feed error {0}")]
    FeedError(String),

    #[error("send error {0}")]
    SendError(String),

    #[error("timeout error {0}")]
    TimeoutError(String),

    /// a generic error
    #[error("operation failed {0}")]
    OpFailed(String)
}

map_to_opaque_error!{ std::io::Error => SkywatchAlarmError::IOError }
map_to_opaque_error!{ serde_json::Error => SkywatchAlarmError::JsonError }
map_to_opaque_error!{ reqwest::Error => SkywatchAlarmError::HttpError }
map_to_opaque_error!{ skywatch_common::config::ConfigError => SkywatchAlarmError::ConfigError }
map_to_opaque_error!{ skywatch_adsb::errors::SkywatchAdsbError => SkywatchAlarmError::FeedError }
map_to_opaque_error!{ tokio::time::error::Elapsed => SkywatchAlarmError::TimeoutError }
map_to_opaque_error!{ Box<dyn std::error::Error + Send + Sync> => SkywatchAlarmError::SendError }

pub fn op_failed (msg: impl ToString)->SkywatchAlarmError {
    SkywatchAlarmError::OpFailed(msg.to_string())
}

pub fn config_error (msg: impl ToString)->SkywatchAlarmError {
    SkywatchAlarmError::ConfigError(msg.to_string())
}

pub fn send_error (msg: impl ToString)->SkywatchAlarmError {
    SkywatchAlarmError::SendError(msg.to_string())
}
