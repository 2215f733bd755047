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

//! Dataset record types.
//!
//! Each struct is a flat representation of one dataset entity with the
//! field names the dataset is authored with. List- and map-valued fields
//! that older snapshots omit default to empty, so both snapshot
//! generations deserialize. An empty constraint list means "no
//! restriction" wherever it appears; the model interprets that, not the
//! schema.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::classification::PlaneCategory;

/// A complete SOP dataset: the airports of one facility and the letters
/// of agreement it coordinates with adjacent centers.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub airports: Vec<AirportRecord>,
    #[serde(default)]
    pub loa: LoaIndexRecord,
}

/// One airport's SOP entry.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct AirportRecord {
    /// Airport identifier (e.g. `"oak"`). Lookups treat it
    /// case-insensitively.
    pub id: String,
    /// Identifier of the center that owns the airport (e.g. `"zoa"`).
    pub artcc: String,
    /// Date the SOP was last amended.
    #[serde(default)]
    pub updated: Option<NaiveDate>,
    /// Runway flows keyed by flow name. Flow names are a vocabulary shared
    /// across the dataset: `"sfow"` names the same operating configuration
    /// wherever it appears.
    #[serde(default)]
    pub flows: BTreeMap<String, FlowRecord>,
    #[serde(default)]
    pub diagrams: Option<DiagramsRecord>,
    #[serde(default)]
    pub departures: Option<DeparturesRecord>,
    #[serde(default)]
    pub arrivals: Option<ArrivalsRecord>,
}

/// A named runway-use configuration.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct FlowRecord {
    /// Direction label (e.g. `"west"`).
    #[serde(default)]
    pub direction: String,
    /// Runways active under this configuration.
    #[serde(default)]
    pub rwys: Vec<String>,
}

/// Reference attachments on an airport record.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct DiagramsRecord {
    /// Airport diagram URL.
    #[serde(default)]
    pub airport: Option<String>,
}

/// The departure procedures of one airport, grouped by flight rule.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct DeparturesRecord {
    /// Published SIDs in declaration order.
    #[serde(default)]
    pub sids: Vec<SidRecord>,
    /// VFR departure instructions, if the SOP publishes any.
    #[serde(default)]
    pub vfr: Option<VfrRecord>,
}

/// VFR departure instructions.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct VfrRecord {
    #[serde(default)]
    pub proc: Vec<ProcRecord>,
}

/// A published standard instrument departure.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct SidRecord {
    /// Full procedure name (e.g. `"SKYLINE"`).
    pub name: String,
    /// Short name (e.g. `"SKYL"`).
    pub abbr: String,
    /// Amendment number of the published chart.
    pub revision: u32,
    /// Source chart URL.
    pub url: String,
    /// Transition fix names; empty when the procedure has none.
    #[serde(default)]
    pub transitions: Vec<String>,
    pub is_rnav: bool,
    /// Altitude the procedure is capped at. Absent means the procedure is
    /// not altitude-capped; a cap of zero would be a real (if unusual)
    /// cap.
    #[serde(default)]
    pub top_altitude: Option<u32>,
    /// Minutes after departure to expect filed altitude.
    pub expect_time: u32,
    /// Departure instructions, one entry per classification and flow
    /// combination the SOP distinguishes.
    #[serde(default)]
    pub proc: Vec<ProcRecord>,
}

/// One departure instruction entry of a SID or a VFR group.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct ProcRecord {
    /// Categories the entry applies to; empty applies to all.
    #[serde(default)]
    pub plane_classifications: Vec<PlaneCategory>,
    /// Free text; may encode several frequencies (e.g. `"120.9 northbound
    /// / 135.1 oceanic"`). Not parsed further.
    pub departure_freq: String,
    pub climb_via_sid: bool,
    /// Flows the entry applies under; empty applies under any flow.
    #[serde(default)]
    pub flows: Vec<String>,
    /// Runways the entry applies to; empty applies to all.
    #[serde(default)]
    pub rwys: Vec<String>,
    /// Human-readable altitude instruction (e.g. `"CVS x 10,000"`).
    pub altitude: String,
    #[serde(default)]
    pub notes: String,
}

/// The arrival procedures of one airport.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct ArrivalsRecord {
    /// Published STARs keyed by name.
    #[serde(default)]
    pub stars: BTreeMap<String, StarRecord>,
}

/// A published standard terminal arrival route.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct StarRecord {
    pub name: String,
    pub revision: u32,
    pub url: String,
    #[serde(default)]
    pub transitions: Vec<String>,
    pub is_rnav: bool,
    pub dme_required: bool,
    /// Arrival instructions; may be empty for STARs the SOP lists without
    /// per-flow handling.
    #[serde(default)]
    pub proc: Vec<ArrProcRecord>,
}

/// One arrival instruction entry of a STAR.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct ArrProcRecord {
    #[serde(default)]
    pub plane_classifications: Vec<PlaneCategory>,
    #[serde(default)]
    pub flows: Vec<String>,
    #[serde(default)]
    pub rwys: Vec<String>,
    #[serde(default)]
    pub notes: String,
}

/// One pre-coordinated routing option of a letter of agreement.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct LoaRecord {
    /// Departure airports the entry covers; empty covers any airport in
    /// the departing center.
    #[serde(default)]
    pub dep_apts: Vec<String>,
    #[serde(default)]
    pub dep_flows: Vec<String>,
    #[serde(default)]
    pub arr_flows: Vec<String>,
    #[serde(default)]
    pub plane_classifications: Vec<PlaneCategory>,
    pub route: RouteSpec,
    pub is_rnav: bool,
    #[serde(default)]
    pub notes: String,
}

/// The authorized routing of an agreement entry: either a single route or
/// an ordered list of alternatives, any one of which is authorized.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RouteSpec {
    One(String),
    Any(Vec<String>),
}

impl RouteSpec {
    /// The authorized routes, a single-element slice for
    /// [`One`](Self::One).
    pub fn options(&self) -> &[String] {
        match self {
            Self::One(route) => std::slice::from_ref(route),
            Self::Any(routes) => routes.as_slice(),
        }
    }
}

/// The letter-of-agreement index as authored: each center's map of
/// neighbors to the shared agreement-set identifier, and the entry lists
/// keyed by that identifier.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct LoaIndexRecord {
    /// `artcc -> { neighbor artcc -> agreement-set id }`. An agreement is
    /// one document referenced identically from either side, so both
    /// directions should name the same set id.
    #[serde(default)]
    pub pair_map: BTreeMap<String, BTreeMap<String, String>>,
    /// `agreement-set id -> entries`, ordered as authored.
    #[serde(default)]
    pub sets: BTreeMap<String, Vec<LoaRecord>>,
}
