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

//! Letter-of-Agreement Resolution Index.
//!
//! An agreement is one document shared by two centers and referenced
//! identically from either side, while each center authors its own
//! neighbor map. The index therefore resolves in two layers: an unordered
//! center pair maps to the canonical agreement-set identifier, and that
//! identifier maps to the ordered entry list. The indirection keeps the
//! entries stored once while either party queries under its own
//! center-first view.

use std::collections::{BTreeMap, HashMap};

use log::{debug, warn};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use sopdata::LoaIndexRecord;

use crate::error::{Error, Result, ValidationError};

mod entry;

pub use entry::{Loa, LoaQuery};

/// The letter-of-agreement reference of one dataset.
///
/// # Examples
///
/// ```
/// # use sop::prelude::*;
/// # fn handoff(loa: &LoaIndex) -> Result<()> {
/// let query = LoaQuery {
///     departure_airport: Some("oak"),
///     category: PlaneCategory::Jet,
///     ..LoaQuery::between("zoa", "zla")
/// };
///
/// for entry in loa.applicable(&query)? {
///     println!("route: {}", entry.route.options().join(" or "));
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LoaIndex {
    /// `center -> { neighbor -> agreement-set id }`, all lowercased.
    neighbors: HashMap<String, HashMap<String, String>>,
    /// `agreement-set id -> entries`, ordered as authored.
    sets: HashMap<String, Vec<Loa>>,
}

impl LoaIndex {
    /// Builds the index from the dataset's agreement records.
    ///
    /// Fails on the first structural defect: a neighbor map referencing an
    /// unregistered agreement set, or the two sides of a pairing naming
    /// different sets. A one-sided pairing is accepted with a warning
    /// since [`agreement_set`](Self::agreement_set) falls back to the
    /// authored direction, but symmetric authoring is the invariant the
    /// fallback defends, not replaces.
    pub fn try_from_records(
        record: LoaIndexRecord,
    ) -> std::result::Result<Self, ValidationError> {
        // normalize before validating so mixed-case authoring cannot hide
        // a defect
        let mut neighbors: BTreeMap<String, BTreeMap<String, String>> = BTreeMap::new();
        for (artcc, map) in record.pair_map {
            let artcc = artcc.to_ascii_lowercase();
            for (neighbor, set) in map {
                neighbors
                    .entry(artcc.clone())
                    .or_default()
                    .insert(neighbor.to_ascii_lowercase(), set.to_ascii_lowercase());
            }
        }

        let sets: HashMap<String, Vec<Loa>> = record
            .sets
            .into_iter()
            .map(|(id, entries)| {
                (
                    id.to_ascii_lowercase(),
                    entries.into_iter().map(Loa::from).collect(),
                )
            })
            .collect();

        for (artcc, map) in &neighbors {
            for (neighbor, set) in map {
                if !sets.contains_key(set) {
                    return Err(ValidationError::DanglingAgreementSet {
                        artcc: artcc.clone(),
                        neighbor: neighbor.clone(),
                        set: set.clone(),
                    });
                }

                match neighbors.get(neighbor).and_then(|m| m.get(artcc)) {
                    Some(reverse) if reverse != set => {
                        return Err(ValidationError::ConflictingPairing {
                            left: artcc.clone(),
                            right: neighbor.clone(),
                            sets: (set.clone(), reverse.clone()),
                        });
                    }
                    Some(_) => {}
                    None => {
                        warn!(
                            "pair map lists {artcc} -> {neighbor} ({set}) without the \
                             reverse entry; lookups rely on the fallback"
                        );
                    }
                }
            }
        }

        debug!(
            "LOA index built: {} centers, {} agreement sets",
            neighbors.len(),
            sets.len(),
        );

        Ok(Self {
            neighbors: neighbors
                .into_iter()
                .map(|(artcc, map)| (artcc, map.into_iter().collect()))
                .collect(),
            sets,
        })
    }

    /// Resolves the canonical agreement-set identifier of a center pair.
    ///
    /// The pair is unordered: `(a, b)` and `(b, a)` resolve to the same
    /// identifier. The second center's map is consulted when the first
    /// has no entry, which covers one-sided authoring.
    pub fn agreement_set(&self, left: &str, right: &str) -> Result<&str> {
        let l = left.to_ascii_lowercase();
        let r = right.to_ascii_lowercase();

        self.neighbors
            .get(&l)
            .and_then(|map| map.get(&r))
            .or_else(|| self.neighbors.get(&r).and_then(|map| map.get(&l)))
            .map(String::as_str)
            .ok_or_else(|| Error::UnknownAgreement {
                left: left.to_string(),
                right: right.to_string(),
            })
    }

    /// The entries of an agreement set, ordered as authored.
    pub fn agreements(&self, set: &str) -> Result<&[Loa]> {
        self.sets
            .get(&set.to_ascii_lowercase())
            .map(Vec::as_slice)
            .ok_or_else(|| Error::UnknownAgreementSet(set.to_string()))
    }

    /// The entries agreed between two centers, in either order.
    pub fn between(&self, left: &str, right: &str) -> Result<&[Loa]> {
        let set = self.agreement_set(left, right)?;
        self.agreements(set)
    }

    /// The entries covering a cross-boundary routing question.
    ///
    /// Resolves the center pair, then filters the agreement list by the
    /// query's airport, flows, and category. Zero covering entries is a
    /// successful empty result; only an unresolvable pair is an error.
    pub fn applicable(&self, query: &LoaQuery<'_>) -> Result<Vec<&Loa>> {
        let entries = self.between(query.departure, query.arrival)?;

        Ok(entries
            .iter()
            .filter(|entry| entry.applies_to(query))
            .collect())
    }

    /// Exports the index back to dataset records.
    pub fn to_records(&self) -> LoaIndexRecord {
        LoaIndexRecord {
            pair_map: self
                .neighbors
                .iter()
                .map(|(artcc, map)| {
                    (
                        artcc.clone(),
                        map.iter()
                            .map(|(neighbor, set)| (neighbor.clone(), set.clone()))
                            .collect(),
                    )
                })
                .collect(),
            sets: self
                .sets
                .iter()
                .map(|(id, entries)| (id.clone(), entries.iter().map(Loa::to_record).collect()))
                .collect(),
        }
    }
}
