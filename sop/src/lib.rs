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

//! Reference model for ATC facility standard operating procedures.
//!
//! A facility publishes its SOPs as a dataset of per-airport runway flows,
//! departure and arrival procedures, and the letters of agreement
//! coordinated with adjacent centers. This crate loads such a dataset
//! (see [`sopdata`]) into two independently queryable components:
//!
//! - the [`ProcedureRegistry`](registry::ProcedureRegistry), answering
//!   what flows and procedures an airport has, and
//! - the [`LoaIndex`](loa::LoaIndex), resolving an unordered center pair
//!   to the shared agreement entries.
//!
//! Construction is one-shot and fail-fast: every structural invariant of
//! the dataset is checked before the first query is served, and a defect
//! yields a [`ValidationError`] instead of a partially valid model. After
//! construction the model is immutable; every query takes `&self`, so
//! concurrent readers need no coordination.
//!
//! # Examples
//!
//! ```
//! use sop::prelude::*;
//!
//! # fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//! let dataset: sop::Dataset = serde_json::from_str(
//!     r#"{
//!         "airports": [{
//!             "id": "oak",
//!             "artcc": "zoa",
//!             "flows": {"sfow": {"direction": "west", "rwys": ["28", "30"]}}
//!         }]
//!     }"#,
//! )?;
//!
//! let data = SopData::try_from_dataset(dataset)?;
//! assert_eq!(data.registry().airport("OAK")?.artcc, "zoa");
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod error;
pub mod loa;
pub mod registry;

mod filter;

pub use error::{Error, Result, ValidationError};
pub use sopdata::{Dataset, FlightRule, PlaneCategory, PlaneEquipment, RouteSpec};

use loa::LoaIndex;
use registry::ProcedureRegistry;

/// A facility's complete SOP reference: the airport procedure registry
/// and the letter-of-agreement index built from one dataset.
///
/// The two components are independent: an airport record names its
/// owning center but does not resolve agreements itself, that is the
/// caller's move using [`loa`](Self::loa).
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SopData {
    registry: ProcedureRegistry,
    loa: LoaIndex,
}

impl SopData {
    /// Builds the model from a dataset, validating every structural
    /// invariant.
    ///
    /// A [`ValidationError`] is fatal: no value is returned, so a
    /// partially valid model cannot serve queries.
    pub fn try_from_dataset(dataset: Dataset) -> std::result::Result<Self, ValidationError> {
        let registry = ProcedureRegistry::try_from_records(dataset.airports)?;
        let loa = LoaIndex::try_from_records(dataset.loa)?;

        Ok(Self { registry, loa })
    }

    pub fn registry(&self) -> &ProcedureRegistry {
        &self.registry
    }

    pub fn loa(&self) -> &LoaIndex {
        &self.loa
    }

    /// Exports the model back to a dataset.
    ///
    /// The export reproduces every airport, flow, and procedure name, so
    /// a model can be re-encoded in any serialized form the schema crate
    /// can write.
    pub fn to_dataset(&self) -> Dataset {
        Dataset {
            airports: self.registry.to_records(),
            loa: self.loa.to_records(),
        }
    }
}

/// The commonly used types in one import.
pub mod prelude {
    pub use crate::error::{Error, Result, ValidationError};
    pub use crate::loa::{Loa, LoaIndex, LoaQuery};
    pub use crate::registry::{
        Airport, ArrivalMatch, DepartureMatch, Flow, ProcedureRegistry, Sid, Star,
    };
    pub use crate::SopData;
    pub use sopdata::{Dataset, FlightRule, PlaneCategory, RouteSpec};
}
