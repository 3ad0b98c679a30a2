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

use uom::si::{f64::Length, length::{foot,kilometer,meter,mile,nautical_mile}};

//--- uom quantity ctors

#[inline]
pub fn miles (len: f64)->Length { Length::new::<mile>(len) }

#[inline]
pub fn kilometers (len: f64)->Length { Length::new::<kilometer>(len) }

#[inline]
pub fn nautical_miles (len: f64)->Length { Length::new::<nautical_mile>(len) }

#[inline]
pub fn feet (len: f64)->Length { Length::new::<foot>(len) }

#[inline]
pub fn meters (len: f64)->Length { Length::new::<meter>(len) }

//--- plain f64 conversions (total functions, no error cases)

pub const KNOTS_TO_MPH: f64 = 1.15078;
pub const KILOMETERS_PER_MILE: f64 = 1.609344;
pub const MILES_PER_NAUTICAL_MILE: f64 = 1.15078;
pub const METERS_PER_FOOT: f64 = 0.3048;

#[inline]
pub fn knots_to_mph (kt: f64)->f64 { kt * KNOTS_TO_MPH }

#[inline]
pub fn mph_to_knots (mph: f64)->f64 { mph / KNOTS_TO_MPH }

#[inline]
pub fn miles_to_kilometers (mi: f64)->f64 { mi * KILOMETERS_PER_MILE }

#[inline]
pub fn kilometers_to_miles (km: f64)->f64 { km / KILOMETERS_PER_MILE }

#[inline]
pub fn miles_to_nautical_miles (mi: f64)->f64 { mi / MILES_PER_NAUTICAL_MILE }

#[inline]
pub fn nautical_miles_to_miles (nm: f64)->f64 { nm * MILES_PER_NAUTICAL_MILE }

#[inline]
pub fn feet_to_meters (ft: f64)->f64 { ft * METERS_PER_FOOT }

#[inline]
pub fn meters_to_feet (m: f64)->f64 { m / METERS_PER_FOOT }
