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

//! RON config file loading. Configs are looked up by filename in `$SKYWATCH_ROOT/configs/`
//! or a local `./configs/` dir, read once at startup and treated as immutable thereafter

use std::{env, fs, path::{Path,PathBuf}, sync::OnceLock};
use serde::Deserialize;
use thiserror::Error;

use crate::map_to_opaque_error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Error,Debug,Clone)]
pub enum ConfigError {
    #[error("config file not found {0}")]
    NotFoundError(String),

    #[error("IO error {0}")]
    IOError(String),

    #[error("RON error {0}")]
    RonError(String),
}

map_to_opaque_error!{ std::io::Error => ConfigError::IOError }
map_to_opaque_error!{ ron::error::SpannedError => ConfigError::RonError }

const ROOT_ENV_VAR: &str = "SKYWATCH_ROOT";

static ROOT_DIR: OnceLock<PathBuf> = OnceLock::new();

/// the global root dir: `$SKYWATCH_ROOT` or the current dir
pub fn root_dir ()->&'static PathBuf {
    ROOT_DIR.get_or_init( || {
        match env::var( ROOT_ENV_VAR) {
            Ok(dir) => PathBuf::from(dir),
            Err(_) => PathBuf::from(".")
        }
    })
}

/// where downloaded artifacts (such as captured map images) go. Created on demand
pub fn cache_dir ()->PathBuf {
    let dir = root_dir().join("cache");
    if !dir.is_dir() { fs::create_dir_all(&dir); }
    dir
}

/// resolve a config file spec: either an explicit (existing) path or a filename
/// to look up in the known config dirs
pub fn find_config_file (spec: impl AsRef<Path>)->Option<PathBuf> {
    let spec = spec.as_ref();
    if spec.is_file() { return Some(spec.to_path_buf()) }

    for dir in [root_dir().join("configs"), PathBuf::from("configs")] {
        let path = dir.join(spec);
        if path.is_file() { return Some(path) }
    }

    None
}

/// load a RON config of type C
pub fn load_config<C> (spec: impl AsRef<Path>)->Result<C> where C: for<'a> Deserialize<'a> {
    let path = find_config_file( spec.as_ref())
        .ok_or_else( || ConfigError::NotFoundError( spec.as_ref().display().to_string()))?;

    let data = fs::read(&path)?;
    Ok( ron::de::from_bytes( data.as_slice())? )
}
