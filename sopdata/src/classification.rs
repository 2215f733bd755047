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

//! Closed classification vocabularies used as filter keys throughout the
//! dataset.
//!
//! The encodings are the dataset's legacy single-letter codes, so the
//! variants serialize to `"j"`, `"t"`, `"p"` and the empty string rather
//! than their names.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Aircraft performance category.
///
/// Procedure entries and agreement entries restrict themselves to a set of
/// categories; [`All`](Self::All) is the dataset's catch-all encoded as an
/// empty string.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
#[derive(Serialize, Deserialize)]
pub enum PlaneCategory {
    #[serde(rename = "p")]
    Prop,
    #[serde(rename = "t")]
    Turboprop,
    #[serde(rename = "j")]
    Jet,
    #[default]
    #[serde(rename = "")]
    All,
}

impl PlaneCategory {
    /// Whether a category filter list admits this category.
    ///
    /// An empty filter admits every category, as does a filter containing
    /// [`All`](Self::All). Querying with `All` matches every entry. This is
    /// the single definition of classification matching; every filtering
    /// query goes through it.
    pub fn matches(self, filter: &[PlaneCategory]) -> bool {
        self == Self::All
            || filter.is_empty()
            || filter.contains(&self)
            || filter.contains(&Self::All)
    }
}

impl fmt::Display for PlaneCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Prop => write!(f, "prop"),
            Self::Turboprop => write!(f, "turboprop"),
            Self::Jet => write!(f, "jet"),
            Self::All => write!(f, "all"),
        }
    }
}

/// Legacy FAA equipment code.
///
/// Part of the dataset vocabulary for notes and future filtering; the
/// model attaches no matching semantics to it.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[derive(Serialize, Deserialize)]
pub enum PlaneEquipment {
    /// DME, no transponder.
    #[serde(rename = "a")]
    A,
    /// RVSM capable.
    #[serde(rename = "w")]
    W,
    /// RNAV with GNSS and RVSM.
    #[serde(rename = "l")]
    L,
    /// RNAV with GNSS, no RVSM.
    #[serde(rename = "g")]
    G,
}

/// Flight-plan type a departure procedure group applies to.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlightRule {
    Ifr,
    Vfr,
}
