//! Keyword-based intent classification.
//!
//! Deliberately not NLP: every check is case-insensitive substring
//! containment against fixed keyword tables, so the same input always
//! classifies the same way. The resolver composes these checks; swapping in
//! a smarter matcher later only touches this module.
//!
//! Precedence rules:
//! - Disaster keywords are scanned in the fixed order of `DISASTER_KEYWORDS`;
//!   first match wins.
//! - Location matching scans a disaster's unsafe set before its safe set, so
//!   a hazard warning is never masked by a coincidental safe-place match.

use crate::disaster::{Disaster, Phase, SafetyCategory};
use crate::knowledge::{DisasterKnowledge, GuidanceEntry};

/// Explicitly ordered (keyword, disaster) pairs. Scan order is the
/// documented precedence: earthquake, flood, cyclone, with each synonym
/// listed directly after its disaster's name.
pub const DISASTER_KEYWORDS: &[(&str, Disaster)] = &[
    ("earthquake", Disaster::Earthquake),
    ("quake", Disaster::Earthquake),
    ("flood", Disaster::Flood),
    ("cyclone", Disaster::Cyclone),
    ("storm", Disaster::Cyclone),
];

/// Phrases that mark a definition request.
const DEFINITION_PHRASES: &[&str] = &["what is", "define", "meaning of", "explain"];

/// Phrases that mark a general "what should I do" request.
const GENERAL_ACTION_PHRASES: &[&str] = &[
    "what should i do",
    "what to do",
    "during",
    "precautions",
    "safety measures",
    "safety",
    "rules",
    "precaution",
];

/// Ordered (keyword, phase) pairs; first match wins.
const PHASE_KEYWORDS: &[(&str, Phase)] = &[
    ("before", Phase::Before),
    ("prepare", Phase::Before),
    ("during", Phase::During),
    ("aftermath", Phase::After),
    ("after", Phase::After),
];

/// Disaster-independent place names, used as a fallback when no disaster
/// could be identified. Matches the union of the per-disaster tables.
const KNOWN_PLACES: &[&str] = &[
    "window",
    "windows",
    "road",
    "tree",
    "roof",
    "table",
    "desk",
    "basement",
    "higher floor",
    "coast",
];

/// A hazard-location hit inside one disaster's table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocationMatch<'a> {
    pub category: SafetyCategory,
    pub place: &'a str,
    pub guidance: &'a GuidanceEntry,
}

/// Pure keyword classifier over normalized (lower-cased) input.
#[derive(Debug, Default, Clone, Copy)]
pub struct IntentClassifier;

impl IntentClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Which disaster does the text mention, if any?
    pub fn detect_disaster(&self, text: &str) -> Option<Disaster> {
        let text = text.to_lowercase();
        DISASTER_KEYWORDS
            .iter()
            .find(|(keyword, _)| text.contains(keyword))
            .map(|(_, disaster)| *disaster)
    }

    /// Is the user asking what a disaster is?
    pub fn is_definition_question(&self, text: &str) -> bool {
        let text = text.to_lowercase();
        DEFINITION_PHRASES.iter().any(|p| text.contains(p))
    }

    /// Is the user asking what to do in general?
    pub fn is_general_action_question(&self, text: &str) -> bool {
        let text = text.to_lowercase();
        GENERAL_ACTION_PHRASES.iter().any(|p| text.contains(p))
    }

    /// Which phase is the text about, if it names one?
    pub fn detect_phase(&self, text: &str) -> Option<Phase> {
        let text = text.to_lowercase();
        PHASE_KEYWORDS
            .iter()
            .find(|(keyword, _)| text.contains(keyword))
            .map(|(_, phase)| *phase)
    }

    /// Scan one disaster's tables for a place named in the text.
    ///
    /// Unsafe entries take priority over safe ones; within a category the
    /// scan follows the table's sorted order.
    pub fn detect_location<'a>(
        &self,
        text: &str,
        knowledge: &'a DisasterKnowledge,
    ) -> Option<LocationMatch<'a>> {
        let text = text.to_lowercase();
        for category in [SafetyCategory::Unsafe, SafetyCategory::Safe] {
            for (place, guidance) in knowledge.places(category) {
                if text.contains(place.as_str()) {
                    return Some(LocationMatch {
                        category,
                        place,
                        guidance,
                    });
                }
            }
        }
        None
    }

    /// Fallback: does the text name any known place at all?
    pub fn detect_place_only(&self, text: &str) -> Option<&'static str> {
        let text = text.to_lowercase();
        KNOWN_PLACES.iter().find(|p| text.contains(*p)).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::KnowledgeBase;

    #[test]
    fn test_detect_disaster_exact_names() {
        let classifier = IntentClassifier::new();
        for disaster in Disaster::ALL {
            let text = format!("tell me about the {} please", disaster.as_str());
            assert_eq!(classifier.detect_disaster(&text), Some(disaster));
        }
    }

    #[test]
    fn test_detect_disaster_synonyms() {
        let classifier = IntentClassifier::new();
        assert_eq!(
            classifier.detect_disaster("the quake last night"),
            Some(Disaster::Earthquake)
        );
        assert_eq!(
            classifier.detect_disaster("a big storm is coming"),
            Some(Disaster::Cyclone)
        );
    }

    #[test]
    fn test_detect_disaster_scan_order() {
        let classifier = IntentClassifier::new();
        // Both flood and storm are present; earthquake-flood-cyclone order wins.
        assert_eq!(
            classifier.detect_disaster("storm and flood warnings"),
            Some(Disaster::Flood)
        );
    }

    #[test]
    fn test_detect_disaster_case_insensitive() {
        let classifier = IntentClassifier::new();
        assert_eq!(
            classifier.detect_disaster("WHAT IS AN EARTHQUAKE"),
            Some(Disaster::Earthquake)
        );
    }

    #[test]
    fn test_detect_disaster_none() {
        let classifier = IntentClassifier::new();
        assert_eq!(classifier.detect_disaster("is it safe outside?"), None);
        assert_eq!(classifier.detect_disaster(""), None);
    }

    #[test]
    fn test_definition_question() {
        let classifier = IntentClassifier::new();
        assert!(classifier.is_definition_question("what is a flood"));
        assert!(classifier.is_definition_question("Define cyclone"));
        assert!(classifier.is_definition_question("the meaning of earthquake"));
        assert!(classifier.is_definition_question("explain floods to me"));
        assert!(!classifier.is_definition_question("is the roof safe"));
    }

    #[test]
    fn test_general_action_question() {
        let classifier = IntentClassifier::new();
        assert!(classifier.is_general_action_question("what should i do in a flood"));
        assert!(classifier.is_general_action_question("earthquake precautions"));
        assert!(classifier.is_general_action_question("cyclone safety measures"));
        assert!(classifier.is_general_action_question("safety rules"));
        assert!(!classifier.is_general_action_question("what is a cyclone"));
    }

    #[test]
    fn test_detect_phase() {
        let classifier = IntentClassifier::new();
        assert_eq!(
            classifier.detect_phase("how to prepare for a cyclone"),
            Some(Phase::Before)
        );
        assert_eq!(
            classifier.detect_phase("what to do during an earthquake"),
            Some(Phase::During)
        );
        assert_eq!(
            classifier.detect_phase("what to do after a flood"),
            Some(Phase::After)
        );
        assert_eq!(
            classifier.detect_phase("the aftermath of the quake"),
            Some(Phase::After)
        );
        assert_eq!(classifier.detect_phase("flood precautions"), None);
    }

    #[test]
    fn test_unsafe_priority_for_every_unsafe_place() {
        let classifier = IntentClassifier::new();
        let kb = KnowledgeBase::builtin();
        for disaster in Disaster::ALL {
            let knowledge = kb.lookup(disaster).unwrap();
            for place in knowledge.unsafe_places.keys() {
                let text = format!("is it safe near the {}", place);
                let hit = classifier.detect_location(&text, knowledge).unwrap();
                assert_eq!(hit.category, SafetyCategory::Unsafe, "{place} in {disaster}");
                assert_eq!(hit.place, place);
            }
        }
    }

    #[test]
    fn test_detect_location_safe_place() {
        let classifier = IntentClassifier::new();
        let kb = KnowledgeBase::builtin();
        let earthquake = kb.lookup(Disaster::Earthquake).unwrap();
        let hit = classifier
            .detect_location("should i hide under the table", earthquake)
            .unwrap();
        assert_eq!(hit.category, SafetyCategory::Safe);
        assert_eq!(hit.place, "table");
    }

    #[test]
    fn test_detect_location_miss() {
        let classifier = IntentClassifier::new();
        let kb = KnowledgeBase::builtin();
        let earthquake = kb.lookup(Disaster::Earthquake).unwrap();
        // Basement is a flood hazard, not an earthquake one.
        assert!(classifier
            .detect_location("is the basement okay", earthquake)
            .is_none());
    }

    #[test]
    fn test_detect_place_only() {
        let classifier = IntentClassifier::new();
        assert_eq!(classifier.detect_place_only("near the windows"), Some("window"));
        assert_eq!(classifier.detect_place_only("in the basement"), Some("basement"));
        assert_eq!(classifier.detect_place_only("on the moon"), None);
    }
}
