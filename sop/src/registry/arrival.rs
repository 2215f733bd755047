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

use sopdata::{ArrProcRecord, PlaneCategory, StarRecord};

use crate::filter::admits;

/// A published standard terminal arrival route.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Star {
    pub name: String,
    pub revision: u32,
    pub url: String,
    pub transitions: Vec<String>,
    pub is_rnav: bool,
    pub dme_required: bool,
    /// Arrival instructions; empty for STARs the SOP lists without
    /// per-flow handling.
    pub procs: Vec<ArrivalProc>,
}

/// One arrival instruction entry.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ArrivalProc {
    pub classifications: Vec<PlaneCategory>,
    pub flows: Vec<String>,
    pub runways: Vec<String>,
    pub notes: String,
}

impl ArrivalProc {
    /// Whether this entry applies to a category under an optional flow.
    pub fn applies_to(&self, category: PlaneCategory, flow: Option<&str>) -> bool {
        category.matches(&self.classifications) && admits(&self.flows, flow)
    }
}

/// A STAR together with the instruction entries a query matched.
#[derive(Clone, Debug)]
pub struct ArrivalMatch<'a> {
    pub star: &'a Star,
    pub procs: Vec<&'a ArrivalProc>,
}

impl From<StarRecord> for Star {
    fn from(record: StarRecord) -> Self {
        Self {
            name: record.name,
            revision: record.revision,
            url: record.url,
            transitions: record.transitions,
            is_rnav: record.is_rnav,
            dme_required: record.dme_required,
            procs: record.proc.into_iter().map(ArrivalProc::from).collect(),
        }
    }
}

impl From<ArrProcRecord> for ArrivalProc {
    fn from(record: ArrProcRecord) -> Self {
        Self {
            classifications: record.plane_classifications,
            flows: record.flows,
            runways: record.rwys,
            notes: record.notes,
        }
    }
}

impl Star {
    pub(crate) fn to_record(&self) -> StarRecord {
        StarRecord {
            name: self.name.clone(),
            revision: self.revision,
            url: self.url.clone(),
            transitions: self.transitions.clone(),
            is_rnav: self.is_rnav,
            dme_required: self.dme_required,
            proc: self.procs.iter().map(ArrivalProc::to_record).collect(),
        }
    }
}

impl ArrivalProc {
    pub(crate) fn to_record(&self) -> ArrProcRecord {
        ArrProcRecord {
            plane_classifications: self.classifications.clone(),
            flows: self.flows.clone(),
            rwys: self.runways.clone(),
            notes: self.notes.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_applies_under_listed_flows() {
        let entry = ArrivalProc {
            classifications: vec![PlaneCategory::Jet],
            flows: vec!["sfow".to_string()],
            runways: vec!["30".to_string()],
            notes: String::new(),
        };

        assert!(entry.applies_to(PlaneCategory::Jet, Some("sfow")));
        assert!(!entry.applies_to(PlaneCategory::Jet, Some("sfoe")));
        assert!(!entry.applies_to(PlaneCategory::Prop, Some("sfow")));
    }

    #[test]
    fn unrestricted_entry_applies_to_everything() {
        let entry = ArrivalProc {
            classifications: Vec::new(),
            flows: Vec::new(),
            runways: Vec::new(),
            notes: String::new(),
        };

        assert!(entry.applies_to(PlaneCategory::Prop, Some("oake")));
        assert!(entry.applies_to(PlaneCategory::All, None));
    }
}
