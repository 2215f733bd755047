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

use std::error;
use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

/// A query for an unknown key.
///
/// Unknown keys are ordinary outcomes of reference lookups and distinct
/// from a query that succeeds with zero matches, which returns an empty
/// sequence instead.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Error {
    /// No airport with this identifier in the registry.
    UnknownAirport(String),
    /// The airport exists but publishes no STAR with this name.
    UnknownStar { airport: String, star: String },
    /// Neither center's neighbor map pairs it with the other.
    UnknownAgreement { left: String, right: String },
    /// No agreement set registered under this identifier.
    UnknownAgreementSet(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownAirport(ident) => {
                write!(f, "unknown airport \"{ident}\"")
            }
            Self::UnknownStar { airport, star } => {
                write!(f, "airport \"{airport}\" has no STAR \"{star}\"")
            }
            Self::UnknownAgreement { left, right } => {
                write!(f, "no agreement between \"{left}\" and \"{right}\"")
            }
            Self::UnknownAgreementSet(set) => {
                write!(f, "unknown agreement set \"{set}\"")
            }
        }
    }
}

impl error::Error for Error {}

/// A defect in the dataset found while building the model.
///
/// Always fatal: construction returns the error and no model value, since
/// a partially valid model could return wrong routing guidance.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum ValidationError {
    /// Two airport records share an identifier (case-insensitively).
    DuplicateAirport(String),
    /// A procedure entry names a flow that exists in no airport's flow
    /// set.
    UnknownFlow {
        airport: String,
        procedure: String,
        flow: String,
    },
    /// A neighbor map references an agreement set that is not registered.
    DanglingAgreementSet {
        artcc: String,
        neighbor: String,
        set: String,
    },
    /// The two sides of a pairing name different agreement sets.
    ConflictingPairing {
        left: String,
        right: String,
        sets: (String, String),
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateAirport(ident) => {
                write!(f, "duplicate airport record \"{ident}\"")
            }
            Self::UnknownFlow {
                airport,
                procedure,
                flow,
            } => {
                write!(
                    f,
                    "procedure \"{procedure}\" at \"{airport}\" references flow \"{flow}\" \
                     which no airport defines"
                )
            }
            Self::DanglingAgreementSet {
                artcc,
                neighbor,
                set,
            } => {
                write!(
                    f,
                    "pair map \"{artcc}\" -> \"{neighbor}\" references unregistered \
                     agreement set \"{set}\""
                )
            }
            Self::ConflictingPairing { left, right, sets } => {
                write!(
                    f,
                    "\"{left}\" and \"{right}\" pair to different agreement sets \
                     (\"{}\" and \"{}\")",
                    sets.0, sets.1
                )
            }
        }
    }
}

impl error::Error for ValidationError {}
