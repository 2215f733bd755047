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

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use sopdata::{
    AirportRecord, ArrivalsRecord, DeparturesRecord, DiagramsRecord, FlightRule, FlowRecord,
    VfrRecord,
};

use super::arrival::Star;
use super::departure::{DepartureProc, Sid};

/// One airport of the registry with its flows and procedures.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Airport {
    /// Identifier as authored (e.g. `"oak"`).
    pub ident: String,
    /// Identifier of the owning center.
    pub artcc: String,
    /// Date the SOP was last amended.
    pub updated: Option<NaiveDate>,
    /// Runway flows in name order. Empty for airports listed without
    /// flows.
    pub flows: Vec<Flow>,
    /// Airport diagram URL.
    pub diagram: Option<String>,
    /// Published SIDs in SOP order.
    pub sids: Vec<Sid>,
    /// VFR departure instructions.
    pub vfr_departures: Vec<DepartureProc>,
    /// Published STARs keyed by lowercased name.
    pub stars: HashMap<String, Star>,
}

/// A named runway-use configuration.
///
/// The name is a vocabulary token shared across the dataset; `"sfow"`
/// names the same configuration at every airport that references it.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Flow {
    pub name: String,
    /// Direction label (e.g. `"west"`).
    pub direction: String,
    /// Runways active under this configuration.
    pub runways: Vec<String>,
}

impl Airport {
    /// Looks up a flow by name, case-insensitively.
    pub fn flow(&self, name: &str) -> Option<&Flow> {
        self.flows.iter().find(|f| f.name.eq_ignore_ascii_case(name))
    }

    /// Looks up a STAR by name, case-insensitively.
    pub fn star(&self, name: &str) -> Option<&Star> {
        self.stars.get(&name.to_ascii_lowercase())
    }

    /// The departure instruction entries published for a flight rule: the
    /// SIDs' entries flattened in SOP order for IFR, the pattern entries
    /// for VFR.
    pub fn departure_procs(&self, rule: FlightRule) -> impl Iterator<Item = &DepartureProc> {
        let (sids, vfr): (&[Sid], &[DepartureProc]) = match rule {
            FlightRule::Ifr => (self.sids.as_slice(), &[]),
            FlightRule::Vfr => (&[], self.vfr_departures.as_slice()),
        };

        sids.iter().flat_map(|sid| sid.procs.iter()).chain(vfr.iter())
    }
}

impl From<AirportRecord> for Airport {
    fn from(record: AirportRecord) -> Self {
        let (sids, vfr_departures) = match record.departures {
            Some(departures) => (
                departures.sids.into_iter().map(Sid::from).collect(),
                departures
                    .vfr
                    .map(|vfr| vfr.proc.into_iter().map(DepartureProc::from).collect())
                    .unwrap_or_default(),
            ),
            None => (Vec::new(), Vec::new()),
        };

        let stars = record
            .arrivals
            .map(|arrivals| {
                arrivals
                    .stars
                    .into_iter()
                    .map(|(name, star)| (name.to_ascii_lowercase(), Star::from(star)))
                    .collect()
            })
            .unwrap_or_default();

        Self {
            ident: record.id,
            artcc: record.artcc,
            updated: record.updated,
            flows: record
                .flows
                .into_iter()
                .map(|(name, flow)| Flow {
                    name,
                    direction: flow.direction,
                    runways: flow.rwys,
                })
                .collect(),
            diagram: record.diagrams.and_then(|d| d.airport),
            sids,
            vfr_departures,
            stars,
        }
    }
}

impl Airport {
    pub(crate) fn to_record(&self) -> AirportRecord {
        let departures = (!self.sids.is_empty() || !self.vfr_departures.is_empty()).then(|| {
            DeparturesRecord {
                sids: self.sids.iter().map(Sid::to_record).collect(),
                vfr: (!self.vfr_departures.is_empty()).then(|| VfrRecord {
                    proc: self
                        .vfr_departures
                        .iter()
                        .map(DepartureProc::to_record)
                        .collect(),
                }),
            }
        });

        let arrivals = (!self.stars.is_empty()).then(|| ArrivalsRecord {
            stars: self
                .stars
                .iter()
                .map(|(name, star)| (name.clone(), star.to_record()))
                .collect::<BTreeMap<_, _>>(),
        });

        AirportRecord {
            id: self.ident.clone(),
            artcc: self.artcc.clone(),
            updated: self.updated,
            flows: self
                .flows
                .iter()
                .map(|flow| {
                    (
                        flow.name.clone(),
                        FlowRecord {
                            direction: flow.direction.clone(),
                            rwys: flow.runways.clone(),
                        },
                    )
                })
                .collect(),
            diagrams: self.diagram.clone().map(|airport| DiagramsRecord {
                airport: Some(airport),
            }),
            departures,
            arrivals,
        }
    }
}
