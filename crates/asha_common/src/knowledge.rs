//! Built-in disaster knowledge pack.
//!
//! Static, high-confidence guidance for the supported disasters: one
//! definition per disaster, do/avoid/why guidance for each phase, and
//! per-place safety verdicts. Loaded once, read-only afterwards.
//!
//! The same schema round-trips through JSON, so an external pack file can
//! replace the built-in table without touching the resolver.

use crate::disaster::{Disaster, Phase, SafetyCategory};
use crate::error::AshaError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Why a place is safe or dangerous, what to do there, and how.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuidanceEntry {
    pub reason: String,
    pub solution: String,
    pub how: String,
}

/// Ordered do/avoid lists plus a why-paragraph for one phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseGuidance {
    pub recommended: Vec<String>,
    pub avoid: Vec<String>,
    pub explanation: String,
}

/// Guidance for all three phases of one disaster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseTable {
    pub before: PhaseGuidance,
    pub during: PhaseGuidance,
    pub after: PhaseGuidance,
}

impl PhaseTable {
    pub fn get(&self, phase: Phase) -> &PhaseGuidance {
        match phase {
            Phase::Before => &self.before,
            Phase::During => &self.during,
            Phase::After => &self.after,
        }
    }
}

/// Everything the store knows about one disaster.
///
/// Place names are unique within each safety category. Scan order within a
/// category is the map's sorted order, which keeps location matching
/// deterministic regardless of how a pack file listed its entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisasterKnowledge {
    pub definition: String,
    pub phases: PhaseTable,
    #[serde(rename = "safe")]
    pub safe_places: BTreeMap<String, GuidanceEntry>,
    #[serde(rename = "unsafe")]
    pub unsafe_places: BTreeMap<String, GuidanceEntry>,
}

impl DisasterKnowledge {
    pub fn places(&self, category: SafetyCategory) -> &BTreeMap<String, GuidanceEntry> {
        match category {
            SafetyCategory::Safe => &self.safe_places,
            SafetyCategory::Unsafe => &self.unsafe_places,
        }
    }
}

/// The immutable knowledge store: disaster -> everything known about it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnowledgeBase {
    disasters: BTreeMap<Disaster, DisasterKnowledge>,
}

impl KnowledgeBase {
    /// The built-in pack.
    pub fn builtin() -> Self {
        let disasters = BUILTIN_PACK
            .iter()
            .map(|spec| (spec.disaster, spec.to_knowledge()))
            .collect();
        Self { disasters }
    }

    /// Load a pack from its JSON representation.
    pub fn from_json_str(json: &str) -> Result<Self, AshaError> {
        let pack: Self = serde_json::from_str(json)?;
        pack.validate()?;
        Ok(pack)
    }

    /// Load a pack from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self, AshaError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn to_json(&self) -> Result<String, AshaError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Look up one disaster's table.
    ///
    /// Failure means the pack is out of sync with the `Disaster` enum,
    /// which `validate` rules out for packs built through the public
    /// constructors.
    pub fn lookup(&self, disaster: Disaster) -> Result<&DisasterKnowledge, AshaError> {
        self.disasters
            .get(&disaster)
            .ok_or_else(|| AshaError::UnknownDisaster(disaster.as_str().to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Disaster, &DisasterKnowledge)> {
        self.disasters.iter().map(|(d, k)| (*d, k))
    }

    /// Every `Disaster` variant must have an entry.
    fn validate(&self) -> Result<(), AshaError> {
        for disaster in Disaster::ALL {
            if !self.disasters.contains_key(&disaster) {
                return Err(AshaError::InvalidPack(format!(
                    "missing entry for disaster '{}'",
                    disaster
                )));
            }
        }
        Ok(())
    }
}

// ============================================================================
// Built-in pack content
// ============================================================================

struct PlaceSpec {
    place: &'static str,
    reason: &'static str,
    solution: &'static str,
    how: &'static str,
}

struct PhaseSpec {
    recommended: &'static [&'static str],
    avoid: &'static [&'static str],
    explanation: &'static str,
}

struct DisasterSpec {
    disaster: Disaster,
    definition: &'static str,
    before: PhaseSpec,
    during: PhaseSpec,
    after: PhaseSpec,
    safe_places: &'static [PlaceSpec],
    unsafe_places: &'static [PlaceSpec],
}

impl DisasterSpec {
    fn to_knowledge(&self) -> DisasterKnowledge {
        fn phase(spec: &PhaseSpec) -> PhaseGuidance {
            PhaseGuidance {
                recommended: spec.recommended.iter().map(|s| s.to_string()).collect(),
                avoid: spec.avoid.iter().map(|s| s.to_string()).collect(),
                explanation: spec.explanation.to_string(),
            }
        }

        fn places(specs: &[PlaceSpec]) -> BTreeMap<String, GuidanceEntry> {
            specs
                .iter()
                .map(|s| {
                    (
                        s.place.to_string(),
                        GuidanceEntry {
                            reason: s.reason.to_string(),
                            solution: s.solution.to_string(),
                            how: s.how.to_string(),
                        },
                    )
                })
                .collect()
        }

        DisasterKnowledge {
            definition: self.definition.to_string(),
            phases: PhaseTable {
                before: phase(&self.before),
                during: phase(&self.during),
                after: phase(&self.after),
            },
            safe_places: places(self.safe_places),
            unsafe_places: places(self.unsafe_places),
        }
    }
}

const BUILTIN_PACK: &[DisasterSpec] = &[
    DisasterSpec {
        disaster: Disaster::Earthquake,
        definition: "An earthquake is the sudden shaking of the ground caused by movement \
                     of tectonic plates beneath the Earth's surface.",
        before: PhaseSpec {
            recommended: &[
                "Secure heavy furniture and appliances.",
                "Identify safe spots like under sturdy tables.",
                "Prepare an emergency kit with essentials.",
                "Practice earthquake safety drills.",
            ],
            avoid: &[
                "Do not place heavy objects on high shelves.",
                "Do not ignore structural safety of buildings.",
            ],
            explanation: "Preparing in advance reduces the risk of injury and damage during \
                          an earthquake.",
        },
        during: PhaseSpec {
            recommended: &[
                "Drop, Cover, and Hold On.",
                "Take shelter under a sturdy table or desk.",
                "Stay away from windows and glass.",
                "If outdoors, move to an open area away from buildings.",
            ],
            avoid: &[
                "Do not run outside during shaking.",
                "Do not use elevators.",
                "Do not stand near heavy furniture.",
            ],
            explanation: "Most earthquake injuries occur due to falling objects. Taking cover \
                          protects the head and upper body.",
        },
        after: PhaseSpec {
            recommended: &[
                "Check for injuries and provide first aid.",
                "Be prepared for aftershocks.",
                "Follow instructions from authorities.",
                "Inspect buildings for damage before entering.",
            ],
            avoid: &[
                "Do not enter damaged buildings.",
                "Do not spread unverified information.",
            ],
            explanation: "Aftershocks and structural damage pose ongoing risks after the main \
                          earthquake.",
        },
        safe_places: &[
            PlaceSpec {
                place: "table",
                reason: "A sturdy table can protect you from falling debris.",
                solution: "Take cover under a sturdy table or desk.",
                how: "Get under the table, cover your head and neck, and hold on.",
            },
            PlaceSpec {
                place: "desk",
                reason: "Desks can shield you from falling objects.",
                solution: "Take cover under the desk.",
                how: "Hold the desk legs and protect your head.",
            },
            PlaceSpec {
                place: "open area",
                reason: "Open areas reduce the risk of falling debris.",
                solution: "Move to an open area away from buildings.",
                how: "Stay low and protect your head.",
            },
        ],
        unsafe_places: &[
            PlaceSpec {
                place: "tree",
                reason: "Trees may fall or drop branches during shaking.",
                solution: "Move away from trees to an open area.",
                how: "Cover your head and stay alert.",
            },
            PlaceSpec {
                place: "road",
                reason: "Nearby buildings or poles may collapse.",
                solution: "Move away from buildings to an open space.",
                how: "Drop, Cover, and Hold On if debris starts falling.",
            },
            PlaceSpec {
                place: "window",
                reason: "Glass can shatter and cause serious injuries.",
                solution: "Move away from windows.",
                how: "Take cover under sturdy furniture.",
            },
            PlaceSpec {
                place: "roof",
                reason: "Upper levels experience stronger shaking.",
                solution: "Stay inside and take cover immediately.",
                how: "Get under sturdy furniture.",
            },
        ],
    },
    DisasterSpec {
        disaster: Disaster::Flood,
        definition: "A flood occurs when water overflows onto normally dry land, often due \
                     to heavy rain, river overflow, or dam failure.",
        before: PhaseSpec {
            recommended: &[
                "Identify higher ground and evacuation routes.",
                "Prepare emergency supplies and documents.",
                "Monitor official weather warnings.",
            ],
            avoid: &[
                "Do not ignore flood warnings.",
                "Do not build or stay in flood-prone areas unnecessarily.",
            ],
            explanation: "Early preparation allows timely evacuation and reduces flood-related \
                          risks.",
        },
        during: PhaseSpec {
            recommended: &[
                "Move to higher ground immediately.",
                "Follow evacuation orders.",
                "Disconnect electricity if instructed.",
            ],
            avoid: &[
                "Do not walk or drive through flood water.",
                "Do not touch electrical equipment in wet areas.",
            ],
            explanation: "Flood waters can be fast-moving and electrically hazardous.",
        },
        after: PhaseSpec {
            recommended: &[
                "Return only after authorities declare it safe.",
                "Avoid contaminated food and water.",
                "Check for structural damage.",
            ],
            avoid: &[
                "Do not consume untreated water.",
                "Do not ignore health symptoms.",
            ],
            explanation: "Flood aftermath can involve contamination and hidden structural \
                          dangers.",
        },
        safe_places: &[
            PlaceSpec {
                place: "roof",
                reason: "Roofs keep you above rising floodwater.",
                solution: "Move to the roof if water is rising rapidly.",
                how: "Avoid edges and signal for help.",
            },
            PlaceSpec {
                place: "higher floor",
                reason: "Higher floors are safer than ground level.",
                solution: "Move to higher floors inside your house.",
                how: "Avoid basements and ground floors.",
            },
        ],
        unsafe_places: &[
            PlaceSpec {
                place: "road",
                reason: "Floodwater can sweep people away.",
                solution: "Move to higher ground immediately.",
                how: "Never walk or drive through floodwater.",
            },
            PlaceSpec {
                place: "tree",
                reason: "Trees can collapse or be submerged.",
                solution: "Move to a stable building or higher ground.",
                how: "Avoid standing near trees in floods.",
            },
            PlaceSpec {
                place: "basement",
                reason: "Basements fill quickly with water.",
                solution: "Move to upper floors.",
                how: "Evacuate early if possible.",
            },
        ],
    },
    DisasterSpec {
        disaster: Disaster::Cyclone,
        definition: "A cyclone is a large rotating storm system with strong winds and heavy \
                     rain. In India, cyclones usually form over warm oceans and cause wind \
                     damage, flooding, and storm surges.",
        before: PhaseSpec {
            recommended: &[
                "Secure loose objects around the home.",
                "Prepare emergency supplies and documents.",
                "Know evacuation shelters and routes.",
            ],
            avoid: &[
                "Do not delay evacuation preparations.",
                "Do not rely on unofficial information.",
            ],
            explanation: "Strong winds and flooding make early preparation critical during \
                          cyclones.",
        },
        during: PhaseSpec {
            recommended: &[
                "Stay indoors in a safe shelter.",
                "Keep away from windows and doors.",
                "Follow official warnings.",
            ],
            avoid: &[
                "Do not go outside during the cyclone.",
                "Do not ignore evacuation orders.",
            ],
            explanation: "Cyclones cause injury mainly through flying debris and structural \
                          damage.",
        },
        after: PhaseSpec {
            recommended: &[
                "Avoid fallen power lines.",
                "Check for injuries and damage.",
                "Use safe drinking water only.",
            ],
            avoid: &[
                "Do not touch damaged electrical lines.",
                "Do not return until cleared by authorities.",
            ],
            explanation: "Post-cyclone hazards include electrical risks and unstable \
                          structures.",
        },
        safe_places: &[
            PlaceSpec {
                place: "interior room",
                reason: "Interior rooms are shielded from wind-blown debris.",
                solution: "Shelter in a small interior room without windows.",
                how: "Stay on the lowest floor and keep supplies within reach.",
            },
            PlaceSpec {
                place: "storm shelter",
                reason: "Storm shelters are built to withstand cyclone winds.",
                solution: "Move to the nearest storm shelter before winds pick up.",
                how: "Bring water, a torch, and a battery radio.",
            },
        ],
        unsafe_places: &[
            PlaceSpec {
                place: "window",
                reason: "Strong winds can shatter glass and hurl debris.",
                solution: "Stay away from windows and glass doors.",
                how: "Shelter in an interior room on the lowest floor.",
            },
            PlaceSpec {
                place: "tree",
                reason: "Trees can be uprooted or lose branches in high winds.",
                solution: "Move indoors to a sturdy building.",
                how: "Keep clear of anything that can fall or fly.",
            },
            PlaceSpec {
                place: "road",
                reason: "Roads are exposed to flying debris and flash flooding.",
                solution: "Do not travel while the cyclone is active.",
                how: "Wait indoors until authorities declare it safe.",
            },
            PlaceSpec {
                place: "coast",
                reason: "Storm surges can flood coastal areas within minutes.",
                solution: "Evacuate inland to higher ground.",
                how: "Follow the marked evacuation routes early.",
            },
        ],
    },
];
