//! Response resolution - turns a classified question into canned guidance.
//!
//! One entry point, `Resolver::handle_turn`. Every classification gap
//! degrades to a more generic response, ending in an explicit prompt for the
//! missing disaster name; unmatched input never produces an error. The only
//! error path is an internal consistency fault between the `Disaster` enum
//! and the knowledge pack, which `Resolver::new` rules out up front.
//!
//! Branch precedence per turn:
//! 1. definition question
//! 2. hazard-location verdict
//! 3. general action / phase guidance
//! 4. place named without a resolvable disaster
//! 5. prompt for the disaster name
//! 6. fallback to the disaster's default guidance
//!
//! The location check deliberately runs before the general-action check:
//! "is a tree safe during a flood" must answer for the tree even though
//! "during" also reads as a general-action keyword.

use crate::classifier::{IntentClassifier, LocationMatch};
use crate::disaster::{Disaster, Phase, SafetyCategory};
use crate::error::AshaError;
use crate::knowledge::{KnowledgeBase, PhaseGuidance};
use crate::session::SessionState;
use tracing::debug;

/// Prompt returned when neither the text nor the session names a disaster.
pub const DISASTER_PROMPT: &str =
    "Please mention the disaster (earthquake, flood, or cyclone).";

/// Resolves user turns against the knowledge store.
pub struct Resolver {
    knowledge: KnowledgeBase,
    classifier: IntentClassifier,
}

impl Resolver {
    /// Build a resolver over a validated pack. Fails if any `Disaster`
    /// variant has no entry, so `handle_turn` lookups cannot miss later.
    pub fn new(knowledge: KnowledgeBase) -> Result<Self, AshaError> {
        for disaster in Disaster::ALL {
            knowledge.lookup(disaster)?;
        }
        Ok(Self {
            knowledge,
            classifier: IntentClassifier::new(),
        })
    }

    /// Resolver over the built-in pack. The built-in table is complete by
    /// construction.
    pub fn builtin() -> Self {
        Self::new(KnowledgeBase::builtin()).expect("built-in pack covers every disaster")
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    /// Resolve one user turn.
    ///
    /// Reads the session's last-disaster context when the text has no
    /// explicit mention and updates it when a disaster was resolved.
    /// Appending turns to the session log is the caller's job.
    pub fn handle_turn(
        &self,
        user_text: &str,
        session: &mut SessionState,
    ) -> Result<String, AshaError> {
        let explicit = self.classifier.detect_disaster(user_text);
        let disaster = explicit.or_else(|| session.last_disaster());
        debug!(?explicit, ?disaster, "resolving turn");

        let Some(disaster) = disaster else {
            // No disaster in the text or the session context.
            if self.classifier.detect_place_only(user_text).is_some() {
                debug!("place named without a disaster");
                return Ok(generic_place_response());
            }
            return Ok(DISASTER_PROMPT.to_string());
        };

        let knowledge = self.knowledge.lookup(disaster)?;
        session.set_last_disaster(disaster);

        if self.classifier.is_definition_question(user_text) {
            debug!(%disaster, "definition question");
            return Ok(knowledge.definition.clone());
        }

        if let Some(hit) = self.classifier.detect_location(user_text, knowledge) {
            debug!(%disaster, place = hit.place, category = %hit.category, "location verdict");
            return Ok(format_verdict(&hit));
        }

        if self.classifier.is_general_action_question(user_text) {
            let phase = self.classifier.detect_phase(user_text).unwrap_or(Phase::During);
            debug!(%disaster, %phase, "general action question");
            return Ok(format_phase_guidance(
                disaster,
                phase,
                knowledge.phases.get(phase),
            ));
        }

        if self.classifier.detect_place_only(user_text).is_some() {
            // A place the disaster's own tables do not cover.
            debug!(%disaster, "unlisted place");
            return Ok(generic_place_response());
        }

        // Disaster resolved but nothing else matched: default guidance,
        // honoring a phase keyword when the text carries one.
        let phase = self.classifier.detect_phase(user_text).unwrap_or(Phase::During);
        debug!(%disaster, %phase, "fallback to default guidance");
        Ok(format_phase_guidance(
            disaster,
            phase,
            knowledge.phases.get(phase),
        ))
    }
}

/// Verdict string for a matched hazard location.
fn format_verdict(hit: &LocationMatch<'_>) -> String {
    let prefix = match hit.category {
        SafetyCategory::Safe => "YES — SAFE.",
        SafetyCategory::Unsafe => "NO — NOT SAFE.",
    };
    format!(
        "{} {}\n\nWhat to do:\n{}\n\nHow:\n{}",
        prefix, hit.guidance.reason, hit.guidance.solution, hit.guidance.how
    )
}

/// Do/avoid/why rendering of one phase block.
fn format_phase_guidance(disaster: Disaster, phase: Phase, guidance: &PhaseGuidance) -> String {
    let mut out = format!("{} safety ({}):\n\nWhat to do:\n", disaster.title(), phase);
    for action in &guidance.recommended {
        out.push_str("- ");
        out.push_str(action);
        out.push('\n');
    }
    out.push_str("\nAvoid:\n");
    for action in &guidance.avoid {
        out.push_str("- ");
        out.push_str(action);
        out.push('\n');
    }
    out.push_str("\nWhy:\n");
    out.push_str(&guidance.explanation);
    out
}

/// Generic template when a place is named but no disaster is resolvable, or
/// the resolved disaster's tables do not list the place.
fn generic_place_response() -> String {
    "No, it is not safe.\n\n\
     Why:\n\
     Certain places like windows, roads, or trees can become dangerous during disasters.\n\n\
     What to do:\n\
     Move to a safer interior or open area depending on the situation.\n\n\
     How:\n\
     Stay calm, protect your head, and follow official safety instructions."
        .to_string()
}
