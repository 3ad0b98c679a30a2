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

pub type Result<T> = std::result::Result<T, SkywatchAdsbError>;

/// skywatch_adsb specific error type. Note that we need those to be Clone, hence we use
/// our own mapping into opaque types that do not store the source error
#[derive(Error,Debug,Clone)]
pub enum SkywatchAdsbError {

    #[error("config error {0}")]
    ConfigError(String),

    #[error("http error {0}")]
    HttpError(String),

    #[error("JSON error {0}")]
    JsonError(String),

    #[error("parse error {0}")]
    ParseError(String),

    /// broken batch invariants (such as duplicate aircraft ids) are programming/receiver
    /// errors and must not be degraded into data-quality exclusions
    #[error("invariant violated {0}")]
    InvariantError(String),

    #[error("operation failed {0}")]
    OpFailedError(String)
}

map_to_opaque_error!{ std::io::Error => SkywatchAdsbError::OpFailedError }
map_to_opaque_error!{ reqwest::Error => SkywatchAdsbError::HttpError }
map_to_opaque_error!{ serde_json::Error => SkywatchAdsbError::JsonError }
map_to_opaque_error!{ chrono::ParseError => SkywatchAdsbError::ParseError }
map_to_opaque_error!{ skywatch_common::config::ConfigError => SkywatchAdsbError::ConfigError }

pub fn op_failed (msg: impl ToString)->SkywatchAdsbError {
    SkywatchAdsbError::OpFailedError(msg.to_string())
}

pub fn invariant_error (msg: impl ToString)->SkywatchAdsbError {
    SkywatchAdsbError::InvariantError(msg.to_string())
}

macro_rules! parse_error {
    ($fmt:literal $(, $arg:expr )* ) => {
        $crate::errors::SkywatchAdsbError::ParseError( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use parse_error;
