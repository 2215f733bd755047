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

//! Airport Procedure Registry.
//!
//! The registry maps an airport identifier to its owning center, runway
//! flows, and departure and arrival procedures. It is built once from
//! dataset records, validates the dataset's structural invariants while
//! building, and serves lookups from then on without ever mutating its
//! state.

use std::collections::{HashMap, HashSet};

use log::debug;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use sopdata::{AirportRecord, PlaneCategory};

use crate::error::{Error, Result, ValidationError};

mod airport;
mod arrival;
mod departure;

pub use airport::{Airport, Flow};
pub use arrival::{ArrivalMatch, ArrivalProc, Star};
pub use departure::{DepartureMatch, DepartureProc, Sid};

/// The per-airport procedure reference of one dataset.
///
/// Identifiers are matched case-insensitively throughout. Queries that
/// find the airport but match no procedure return empty sequences; only
/// unknown keys are errors.
///
/// # Examples
///
/// ```
/// # use sop::prelude::*;
/// # fn flows(registry: &ProcedureRegistry) -> Result<()> {
/// for flow in registry.flows("oak")? {
///     println!("{}: runways {}", flow.name, flow.runways.join(", "));
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ProcedureRegistry {
    airports: HashMap<String, Airport>,
}

impl ProcedureRegistry {
    /// Builds the registry from dataset records.
    ///
    /// Fails on the first structural defect: a duplicate airport
    /// identifier, or a procedure entry referencing a flow name that no
    /// airport in the dataset defines. Flow names are a shared vocabulary,
    /// so an entry may reference another airport's flow; only tokens that
    /// exist nowhere are defects.
    pub fn try_from_records(
        records: Vec<AirportRecord>,
    ) -> std::result::Result<Self, ValidationError> {
        let mut airports = HashMap::with_capacity(records.len());

        for record in records {
            let key = record.id.to_ascii_lowercase();
            if airports.contains_key(&key) {
                return Err(ValidationError::DuplicateAirport(record.id));
            }
            airports.insert(key, Airport::from(record));
        }

        let registry = Self { airports };
        registry.check_flow_vocabulary()?;

        debug!(
            "procedure registry built: {} airports, {} flows",
            registry.airports.len(),
            registry
                .airports
                .values()
                .map(|a| a.flows.len())
                .sum::<usize>(),
        );

        Ok(registry)
    }

    fn check_flow_vocabulary(&self) -> std::result::Result<(), ValidationError> {
        let vocabulary: HashSet<String> = self
            .airports
            .values()
            .flat_map(|airport| airport.flows.iter())
            .map(|flow| flow.name.to_ascii_lowercase())
            .collect();

        let check = |flows: &[String],
                     airport: &str,
                     procedure: &str|
         -> std::result::Result<(), ValidationError> {
            match flows
                .iter()
                .find(|flow| !vocabulary.contains(&flow.to_ascii_lowercase()))
            {
                Some(flow) => Err(ValidationError::UnknownFlow {
                    airport: airport.to_string(),
                    procedure: procedure.to_string(),
                    flow: flow.clone(),
                }),
                None => Ok(()),
            }
        };

        for airport in self.airports.values() {
            for sid in &airport.sids {
                for proc in &sid.procs {
                    check(&proc.flows, &airport.ident, &sid.name)?;
                }
            }
            for proc in &airport.vfr_departures {
                check(&proc.flows, &airport.ident, "VFR")?;
            }
            for star in airport.stars.values() {
                for proc in &star.procs {
                    check(&proc.flows, &airport.ident, &star.name)?;
                }
            }
        }

        Ok(())
    }

    /// Looks up an airport, case-insensitively.
    pub fn airport(&self, ident: &str) -> Result<&Airport> {
        self.airports
            .get(&ident.to_ascii_lowercase())
            .ok_or_else(|| Error::UnknownAirport(ident.to_string()))
    }

    /// The flows of an airport.
    ///
    /// Returns an empty slice for airports listed without flows; only an
    /// unknown airport is an error.
    pub fn flows(&self, ident: &str) -> Result<&[Flow]> {
        Ok(self.airport(ident)?.flows.as_slice())
    }

    /// The SIDs of an airport that have at least one instruction entry
    /// applying to the category under the optional flow and runway, each
    /// narrowed to its applying entries.
    ///
    /// SIDs are returned in SOP declaration order. The stored data is not
    /// modified; the matches borrow from the registry.
    pub fn departures(
        &self,
        ident: &str,
        category: PlaneCategory,
        flow: Option<&str>,
        runway: Option<&str>,
    ) -> Result<Vec<DepartureMatch<'_>>> {
        let airport = self.airport(ident)?;

        Ok(airport
            .sids
            .iter()
            .filter_map(|sid| {
                let procs: Vec<_> = sid
                    .procs
                    .iter()
                    .filter(|proc| proc.applies_to(category, flow, runway))
                    .collect();

                (!procs.is_empty()).then_some(DepartureMatch { sid, procs })
            })
            .collect())
    }

    /// The STARs of an airport that have at least one instruction entry
    /// applying to the category under the optional flow, each narrowed to
    /// its applying entries.
    ///
    /// STARs are keyed for lookup, not declared in a meaningful order, so
    /// the iteration order is unspecified.
    pub fn arrivals(
        &self,
        ident: &str,
        category: PlaneCategory,
        flow: Option<&str>,
    ) -> Result<Vec<ArrivalMatch<'_>>> {
        let airport = self.airport(ident)?;

        Ok(airport
            .stars
            .values()
            .filter_map(|star| {
                let procs: Vec<_> = star
                    .procs
                    .iter()
                    .filter(|proc| proc.applies_to(category, flow))
                    .collect();

                (!procs.is_empty()).then_some(ArrivalMatch { star, procs })
            })
            .collect())
    }

    /// Looks up a STAR by airport and name, case-insensitively.
    pub fn star(&self, ident: &str, name: &str) -> Result<&Star> {
        self.airport(ident)?
            .star(name)
            .ok_or_else(|| Error::UnknownStar {
                airport: ident.to_string(),
                star: name.to_string(),
            })
    }

    /// All airports, in unspecified order.
    pub fn airports(&self) -> impl Iterator<Item = &Airport> {
        self.airports.values()
    }

    /// Exports the registry back to dataset records, sorted by identifier.
    ///
    /// Together with [`try_from_records`](Self::try_from_records) this
    /// makes the registry representable in any serialized form without a
    /// serde bound on the registry itself.
    pub fn to_records(&self) -> Vec<AirportRecord> {
        let mut records: Vec<_> = self.airports.values().map(Airport::to_record).collect();
        records.sort_by(|a, b| a.id.cmp(&b.id));
        records
    }
}
