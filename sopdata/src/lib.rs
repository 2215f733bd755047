// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Facility SOP dataset schema.
//!
//! This crate defines the record types of the dataset that a facility's
//! standard operating procedures are published as: per-airport runway
//! flows, departure and arrival procedures, and the letters of agreement
//! coordinated with adjacent centers. All records derive serde traits, so
//! a dataset can be read from any serialized form; the encoding itself is
//! not part of the schema.
//!
//! The records carry the data as authored. Cross-record invariants (flow
//! vocabulary, agreement-set references, pair symmetry) are checked by the
//! model built on top of these records, not here.

mod classification;
mod records;

pub use classification::*;
pub use records::*;
