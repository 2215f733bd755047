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

use std::collections::HashSet;

use sop::prelude::*;

const SOP_DATA: &str = r#"{
  "airports": [
    {
      "id": "oak",
      "artcc": "zoa",
      "updated": "2023-02-24",
      "flows": {
        "sfow": {"direction": "west", "rwys": ["28", "30"]},
        "oake": {"direction": "east", "rwys": ["10", "12"]},
        "sfoe": {"direction": "east", "rwys": ["10", "12"]}
      },
      "diagrams": {
        "airport": "https://aeronav.faa.gov/d-tpp/2305/00294AD.PDF"
      },
      "departures": {
        "sids": [
          {
            "name": "CNDL",
            "abbr": "CNDL",
            "revision": 5,
            "url": "https://aeronav.faa.gov/d-tpp/2305/00294CNDEL.PDF",
            "transitions": ["KAYAX", "KTINA", "NTELL", "SUSSEY", "YYUNG"],
            "is_rnav": true,
            "top_altitude": 10000,
            "expect_time": 10,
            "proc": [
              {
                "plane_classifications": ["j"],
                "departure_freq": "135.1",
                "climb_via_sid": true,
                "flows": ["sfow"],
                "altitude": "CVS",
                "notes": "southbound"
              }
            ]
          },
          {
            "name": "OAK",
            "abbr": "OAK",
            "revision": 5,
            "url": "https://aeronav.faa.gov/d-tpp/2305/00294OAKLAND.PDF",
            "transitions": [],
            "is_rnav": false,
            "expect_time": 10,
            "proc": [
              {
                "plane_classifications": ["j"],
                "departure_freq": "120.9 northbound / 135.1 oceanic",
                "climb_via_sid": true,
                "flows": ["sfow"],
                "altitude": "CVS x FL190 (J); CVS x 10,000 (DH8D)",
                "notes": "northbound / oceanic"
              },
              {
                "plane_classifications": ["j"],
                "departure_freq": "120.9",
                "climb_via_sid": false,
                "flows": ["sfoe"],
                "altitude": "3,000",
                "notes": ""
              }
            ]
          },
          {
            "name": "NIMITZ",
            "abbr": "NIMI",
            "revision": 8,
            "url": "https://aeronav.faa.gov/d-tpp/2305/00294NIMITZ.PDF",
            "transitions": [],
            "is_rnav": false,
            "expect_time": 10,
            "proc": [
              {
                "plane_classifications": ["p", "t"],
                "departure_freq": "120.9",
                "climb_via_sid": false,
                "flows": ["sfow"],
                "altitude": "3,000",
                "notes": ""
              }
            ]
          }
        ],
        "vfr": {
          "proc": [
            {
              "plane_classifications": [],
              "departure_freq": "120.9",
              "climb_via_sid": false,
              "flows": [],
              "altitude": "at or below 2,500",
              "notes": "remain clear of the SFO Class B"
            }
          ]
        }
      },
      "arrivals": {
        "stars": {
          "EMZOH": {
            "name": "EMZOH",
            "revision": 3,
            "url": "https://aeronav.faa.gov/d-tpp/2305/00294EMZOH.PDF",
            "transitions": ["LIDAT", "ALWYS"],
            "is_rnav": true,
            "dme_required": false,
            "proc": [
              {
                "plane_classifications": ["j"],
                "flows": ["sfow"],
                "rwys": ["30"],
                "notes": ""
              }
            ]
          },
          "BDEGA": {
            "name": "BDEGA",
            "revision": 4,
            "url": "https://aeronav.faa.gov/d-tpp/2305/00294BDEGA.PDF",
            "transitions": ["LMT", "RBL"],
            "is_rnav": true,
            "dme_required": false,
            "proc": []
          }
        }
      }
    },
    {"id": "sfo", "artcc": "zoa", "flows": {
      "sfow": {"direction": "west", "rwys": ["28L", "28R"]},
      "sfoe": {"direction": "east", "rwys": ["10L", "10R"]}
    }},
    {"id": "sjc", "artcc": "zoa", "flows": {
      "sfow": {"direction": "west", "rwys": ["30L", "30R"]},
      "sfoe": {"direction": "east", "rwys": ["12L", "12R"]},
      "sjce": {"direction": "east", "rwys": ["12L", "12R"]}
    }},
    {"id": "mry", "artcc": "zoa"}
  ],
  "loa": {
    "pair_map": {
      "zoa": {"zla": "zoa-zla", "zse": "zoa-zse"},
      "zla": {"zoa": "zoa-zla"},
      "zse": {"zoa": "zoa-zse"}
    },
    "sets": {
      "zoa-zla": [
        {
          "dep_apts": ["sfo", "oak", "sjc"],
          "arr_flows": ["sanw"],
          "route": ["AVE SHIVE BURGL", "PXN P130 SHIVE"],
          "is_rnav": true,
          "notes": "San Diego landing west"
        },
        {
          "arr_flows": ["sanw"],
          "plane_classifications": ["p", "t"],
          "route": "SNS V25 OCN",
          "is_rnav": false,
          "notes": "coastal, non-turbojet"
        },
        {
          "arr_flows": ["sane"],
          "route": "AVE SHIVE",
          "is_rnav": false,
          "notes": "San Diego landing east"
        },
        {
          "dep_apts": ["smf"],
          "arr_flows": ["sanw"],
          "plane_classifications": ["j"],
          "route": "FRAME LAX",
          "is_rnav": false,
          "notes": ""
        }
      ],
      "zoa-zse": [
        {
          "route": "LMT",
          "is_rnav": false,
          "notes": "northbound handoff at LMT"
        }
      ]
    }
  }
}"#;

fn data() -> SopData {
    let dataset: Dataset = serde_json::from_str(SOP_DATA).expect("dataset should parse");
    SopData::try_from_dataset(dataset).expect("dataset should validate")
}

#[test]
fn airport_lookup_ignores_case() {
    let data = data();

    let lower = data.registry().airport("oak").unwrap();
    let upper = data.registry().airport("OAK").unwrap();
    let mixed = data.registry().airport("Oak").unwrap();

    assert_eq!(lower, upper);
    assert_eq!(lower, mixed);
    assert_eq!(lower.updated.map(|d| d.to_string()), Some("2023-02-24".to_string()));
    assert_eq!(
        lower.diagram.as_deref(),
        Some("https://aeronav.faa.gov/d-tpp/2305/00294AD.PDF")
    );
}

#[test]
fn unknown_airport_is_not_an_empty_record() {
    let data = data();

    assert_eq!(
        data.registry().airport("zzz"),
        Err(Error::UnknownAirport("zzz".to_string()))
    );
}

#[test]
fn oak_flows_and_runway_sets() {
    let data = data();

    let flows = data.registry().flows("oak").unwrap();
    assert_eq!(flows.len(), 3);

    let by_name = |name: &str| {
        flows
            .iter()
            .find(|f| f.name == name)
            .unwrap_or_else(|| panic!("flow {name} should exist"))
    };
    assert_eq!(by_name("sfow").runways, ["28", "30"]);
    assert_eq!(by_name("oake").runways, ["10", "12"]);
    assert_eq!(by_name("sfoe").runways, ["10", "12"]);

    // flow-less airports are stubs, not errors
    assert!(data.registry().flows("mry").unwrap().is_empty());
}

#[test]
fn departures_narrow_to_the_queried_flow() {
    let data = data();

    let matches = data
        .registry()
        .departures("oak", PlaneCategory::Jet, Some("sfoe"), None)
        .unwrap();

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].sid.name, "OAK");
    assert_eq!(matches[0].procs.len(), 1);
    assert_eq!(matches[0].procs[0].altitude, "3,000");

    // the sfow entry of the same SID is excluded, not narrowed in the
    // stored data
    let stored = data.registry().airport("oak").unwrap();
    let oak_sid = stored.sids.iter().find(|s| s.name == "OAK").unwrap();
    assert_eq!(oak_sid.procs.len(), 2);
}

#[test]
fn departures_keep_sop_order_and_respect_categories() {
    let data = data();

    let jets = data
        .registry()
        .departures("oak", PlaneCategory::Jet, Some("sfow"), None)
        .unwrap();
    let names: Vec<_> = jets.iter().map(|m| m.sid.name.as_str()).collect();
    assert_eq!(names, ["CNDL", "OAK"]);

    let props = data
        .registry()
        .departures("oak", PlaneCategory::Prop, Some("sfow"), None)
        .unwrap();
    let names: Vec<_> = props.iter().map(|m| m.sid.name.as_str()).collect();
    assert_eq!(names, ["NIMITZ"]);
}

#[test]
fn catch_all_departures_are_a_superset() {
    let data = data();

    let all = data
        .registry()
        .departures("oak", PlaneCategory::All, None, None)
        .unwrap();

    for category in [
        PlaneCategory::Jet,
        PlaneCategory::Turboprop,
        PlaneCategory::Prop,
    ] {
        let specific = data
            .registry()
            .departures("oak", category, None, None)
            .unwrap();

        for matched in &specific {
            assert!(all.iter().any(|m| m.sid.name == matched.sid.name));
        }
    }
}

#[test]
fn vfr_departures_are_grouped_by_flight_rule() {
    let data = data();
    let oak = data.registry().airport("oak").unwrap();

    let vfr: Vec<_> = oak.departure_procs(FlightRule::Vfr).collect();
    assert_eq!(vfr.len(), 1);
    assert_eq!(vfr[0].altitude, "at or below 2,500");

    let ifr: Vec<_> = oak.departure_procs(FlightRule::Ifr).collect();
    assert_eq!(ifr.len(), 4);
}

#[test]
fn star_lookup_and_arrival_filtering() {
    let data = data();

    let star = data.registry().star("oak", "bdega").unwrap();
    assert_eq!(star.name, "BDEGA");
    assert_eq!(star.transitions, ["LMT", "RBL"]);

    assert!(matches!(
        data.registry().star("oak", "SERFR"),
        Err(Error::UnknownStar { .. })
    ));

    let arrivals = data
        .registry()
        .arrivals("oak", PlaneCategory::Jet, Some("sfow"))
        .unwrap();
    assert_eq!(arrivals.len(), 1);
    assert_eq!(arrivals[0].star.name, "EMZOH");

    // BDEGA has no instruction entries, so no filtered query returns it
    let arrivals = data
        .registry()
        .arrivals("oak", PlaneCategory::All, None)
        .unwrap();
    assert_eq!(arrivals.len(), 1);
}

#[test]
fn agreement_resolution_is_symmetric() {
    let data = data();

    let forward = data.loa().agreement_set("zoa", "zla").unwrap();
    let reverse = data.loa().agreement_set("zla", "zoa").unwrap();

    assert_eq!(forward, "zoa-zla");
    assert_eq!(forward, reverse);
    assert!(!data.loa().agreements(forward).unwrap().is_empty());
}

#[test]
fn every_pairing_reaches_its_agreement_set() {
    let data = data();

    for (left, right) in [("zoa", "zla"), ("zoa", "zse")] {
        let set = data.loa().agreement_set(left, right).unwrap();
        assert!(data.loa().agreements(set).is_ok());
        assert_eq!(data.loa().agreement_set(right, left).unwrap(), set);
    }
}

#[test]
fn applicable_agreements_for_a_prop_into_san_diego_west() {
    let data = data();

    let matches = data
        .loa()
        .applicable(&LoaQuery {
            departure_airport: Some("sfo"),
            arrival_flow: Some("sanw"),
            category: PlaneCategory::Prop,
            ..LoaQuery::between("zoa", "zla")
        })
        .unwrap();

    assert_eq!(matches.len(), 2);
    for entry in &matches {
        assert!(
            entry.departure_airports.is_empty()
                || entry.departure_airports.iter().any(|a| a == "sfo")
        );
        assert!(entry.arrival_flows.iter().any(|f| f == "sanw"));
        assert!(
            entry.classifications.is_empty()
                || entry.classifications.contains(&PlaneCategory::Prop)
        );
    }

    // the alternative-route form surfaces all authorized options
    assert_eq!(
        matches[0].route.options(),
        ["AVE SHIVE BURGL", "PXN P130 SHIVE"]
    );
}

#[test]
fn catch_all_category_matches_a_superset_of_agreements() {
    let data = data();

    let all = data
        .loa()
        .applicable(&LoaQuery::between("zoa", "zla"))
        .unwrap();

    for category in [
        PlaneCategory::Jet,
        PlaneCategory::Turboprop,
        PlaneCategory::Prop,
    ] {
        let specific = data
            .loa()
            .applicable(&LoaQuery {
                category,
                ..LoaQuery::between("zoa", "zla")
            })
            .unwrap();

        assert!(specific.len() <= all.len());
        for entry in &specific {
            assert!(all.iter().any(|e| e == entry));
        }
    }
}

#[test]
fn unrelated_centers_have_no_agreement() {
    let data = data();

    assert_eq!(
        data.loa().agreement_set("zla", "zse"),
        Err(Error::UnknownAgreement {
            left: "zla".to_string(),
            right: "zse".to_string(),
        })
    );
}

#[test]
fn export_preserves_every_name() {
    let data = data();
    let exported = data.to_dataset();

    let ids: HashSet<_> = exported.airports.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, HashSet::from(["oak", "sfo", "sjc", "mry"]));

    let oak = exported.airports.iter().find(|a| a.id == "oak").unwrap();
    let flow_names: HashSet<_> = oak.flows.keys().map(String::as_str).collect();
    assert_eq!(flow_names, HashSet::from(["sfow", "oake", "sfoe"]));

    let sid_names: Vec<_> = oak
        .departures
        .as_ref()
        .unwrap()
        .sids
        .iter()
        .map(|s| s.name.as_str())
        .collect();
    assert_eq!(sid_names, ["CNDL", "OAK", "NIMITZ"]);

    let star_names: HashSet<_> = oak
        .arrivals
        .as_ref()
        .unwrap()
        .stars
        .values()
        .map(|s| s.name.as_str())
        .collect();
    assert_eq!(star_names, HashSet::from(["EMZOH", "BDEGA"]));

    // the export is itself a valid dataset
    let rebuilt = SopData::try_from_dataset(exported).unwrap();
    assert_eq!(rebuilt.registry().airport("oak").unwrap().sids.len(), 3);
}
