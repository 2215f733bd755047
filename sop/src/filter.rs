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

/// Whether a constraint list admits a queried value.
///
/// This is the dataset's one wildcard convention: an empty constraint list
/// restricts nothing, and a query without a value is not filtered on that
/// field. Every list-valued constraint (flows, runways, departure
/// airports) is matched through here, case-insensitively.
pub(crate) fn admits(constraint: &[String], value: Option<&str>) -> bool {
    match value {
        None => true,
        Some(value) => {
            constraint.is_empty() || constraint.iter().any(|c| c.eq_ignore_ascii_case(value))
        }
    }
}
