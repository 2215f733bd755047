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

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use sopdata::{PlaneCategory, ProcRecord, SidRecord};

use crate::filter::admits;

/// A published standard instrument departure.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sid {
    /// Full procedure name (e.g. `"SKYLINE"`).
    pub name: String,
    /// Short name (e.g. `"SKYL"`).
    pub abbr: String,
    /// Amendment number of the published chart.
    pub revision: u32,
    /// Source chart URL.
    pub url: String,
    pub transitions: Vec<String>,
    pub is_rnav: bool,
    /// Altitude cap, absent when the procedure is uncapped.
    pub top_altitude: Option<u32>,
    /// Minutes after departure to expect filed altitude.
    pub expect_time: u32,
    /// Departure instructions, in SOP order. A SID keeps one entry per
    /// classification and flow combination its SOP distinguishes, so a
    /// filtered query can match several of them.
    pub procs: Vec<DepartureProc>,
}

/// One departure instruction entry.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DepartureProc {
    /// Categories the entry applies to; empty applies to all.
    pub classifications: Vec<PlaneCategory>,
    /// Departure frequency as free text; may list several.
    pub departure_freq: String,
    pub climb_via_sid: bool,
    /// Flows the entry applies under; empty applies under any flow.
    pub flows: Vec<String>,
    /// Runways the entry applies to; empty applies to all.
    pub runways: Vec<String>,
    /// Altitude instruction (e.g. `"CVS x 10,000"`).
    pub altitude: String,
    pub notes: String,
}

impl DepartureProc {
    /// Whether this entry applies to a category under an optional flow and
    /// runway.
    pub fn applies_to(
        &self,
        category: PlaneCategory,
        flow: Option<&str>,
        runway: Option<&str>,
    ) -> bool {
        category.matches(&self.classifications)
            && admits(&self.flows, flow)
            && admits(&self.runways, runway)
    }
}

/// A SID together with the instruction entries a query matched.
///
/// Borrows from the registry; the stored procedure is never mutated or
/// narrowed in place.
#[derive(Clone, Debug)]
pub struct DepartureMatch<'a> {
    pub sid: &'a Sid,
    pub procs: Vec<&'a DepartureProc>,
}

impl From<SidRecord> for Sid {
    fn from(record: SidRecord) -> Self {
        Self {
            name: record.name,
            abbr: record.abbr,
            revision: record.revision,
            url: record.url,
            transitions: record.transitions,
            is_rnav: record.is_rnav,
            top_altitude: record.top_altitude,
            expect_time: record.expect_time,
            procs: record.proc.into_iter().map(DepartureProc::from).collect(),
        }
    }
}

impl From<ProcRecord> for DepartureProc {
    fn from(record: ProcRecord) -> Self {
        Self {
            classifications: record.plane_classifications,
            departure_freq: record.departure_freq,
            climb_via_sid: record.climb_via_sid,
            flows: record.flows,
            runways: record.rwys,
            altitude: record.altitude,
            notes: record.notes,
        }
    }
}

impl Sid {
    pub(crate) fn to_record(&self) -> SidRecord {
        SidRecord {
            name: self.name.clone(),
            abbr: self.abbr.clone(),
            revision: self.revision,
            url: self.url.clone(),
            transitions: self.transitions.clone(),
            is_rnav: self.is_rnav,
            top_altitude: self.top_altitude,
            expect_time: self.expect_time,
            proc: self.procs.iter().map(DepartureProc::to_record).collect(),
        }
    }
}

impl DepartureProc {
    pub(crate) fn to_record(&self) -> ProcRecord {
        ProcRecord {
            plane_classifications: self.classifications.clone(),
            departure_freq: self.departure_freq.clone(),
            climb_via_sid: self.climb_via_sid,
            flows: self.flows.clone(),
            rwys: self.runways.clone(),
            altitude: self.altitude.clone(),
            notes: self.notes.clone(),
        }
    }
}
