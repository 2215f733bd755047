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

use sopdata::{LoaRecord, PlaneCategory, RouteSpec};

use crate::filter::admits;

/// One pre-coordinated routing option of a letter of agreement.
///
/// Every constraint list follows the dataset's wildcard convention: empty
/// restricts nothing. `departure_airports` left empty covers any airport
/// in the departing center.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Loa {
    pub departure_airports: Vec<String>,
    pub departure_flows: Vec<String>,
    /// Arrival flows, named in the receiving center's flow vocabulary
    /// (which may belong to facilities outside this dataset).
    pub arrival_flows: Vec<String>,
    pub classifications: Vec<PlaneCategory>,
    /// The authorized routing; several alternatives mean any one of them
    /// is authorized.
    pub route: RouteSpec,
    pub is_rnav: bool,
    pub notes: String,
}

impl Loa {
    /// Whether this entry covers the query.
    pub fn applies_to(&self, query: &LoaQuery<'_>) -> bool {
        query.category.matches(&self.classifications)
            && admits(&self.departure_airports, query.departure_airport)
            && admits(&self.departure_flows, query.departure_flow)
            && admits(&self.arrival_flows, query.arrival_flow)
    }
}

impl From<LoaRecord> for Loa {
    fn from(record: LoaRecord) -> Self {
        Self {
            departure_airports: record.dep_apts,
            departure_flows: record.dep_flows,
            arrival_flows: record.arr_flows,
            classifications: record.plane_classifications,
            route: record.route,
            is_rnav: record.is_rnav,
            notes: record.notes,
        }
    }
}

impl Loa {
    pub(crate) fn to_record(&self) -> LoaRecord {
        LoaRecord {
            dep_apts: self.departure_airports.clone(),
            dep_flows: self.departure_flows.clone(),
            arr_flows: self.arrival_flows.clone(),
            plane_classifications: self.classifications.clone(),
            route: self.route.clone(),
            is_rnav: self.is_rnav,
            notes: self.notes.clone(),
        }
    }
}

/// A cross-boundary routing question put to the index.
///
/// Only the two centers are required; the optional fields narrow the
/// result and the category defaults to [`PlaneCategory::All`].
///
/// # Examples
///
/// ```
/// use sop::loa::LoaQuery;
/// use sop::PlaneCategory;
///
/// let query = LoaQuery {
///     departure_airport: Some("sfo"),
///     category: PlaneCategory::Prop,
///     ..LoaQuery::between("zoa", "zla")
/// };
/// # let _ = query;
/// ```
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct LoaQuery<'a> {
    /// Departing center.
    pub departure: &'a str,
    /// Receiving center.
    pub arrival: &'a str,
    pub departure_airport: Option<&'a str>,
    pub departure_flow: Option<&'a str>,
    pub arrival_flow: Option<&'a str>,
    pub category: PlaneCategory,
}

impl<'a> LoaQuery<'a> {
    /// An unconstrained query between two centers.
    pub fn between(departure: &'a str, arrival: &'a str) -> Self {
        Self {
            departure,
            arrival,
            departure_airport: None,
            departure_flow: None,
            arrival_flow: None,
            category: PlaneCategory::All,
        }
    }
}
