//! End-to-end resolution scenarios through the public API.
//!
//! Each case drives `Resolver::handle_turn` the way the chat client does:
//! the caller appends turns to the session log, the resolver reads and
//! updates the last-disaster context.
//!
//! Run with: cargo test --test resolver_scenarios

use asha_common::{
    Disaster, KnowledgeBase, Resolver, Role, SessionState, DISASTER_PROMPT,
};

/// Drive one turn the way ashactl does: log the question, resolve, log the
/// answer.
fn chat_turn(resolver: &Resolver, session: &mut SessionState, text: &str) -> String {
    session.push_turn(Role::User, text);
    let reply = resolver.handle_turn(text, session).unwrap();
    session.push_turn(Role::Assistant, reply.clone());
    reply
}

#[test]
fn scenario_definition_verbatim() {
    let resolver = Resolver::builtin();
    let mut session = SessionState::new();

    let reply = chat_turn(&resolver, &mut session, "what is an earthquake");
    let expected = resolver
        .knowledge()
        .lookup(Disaster::Earthquake)
        .unwrap()
        .definition
        .clone();
    assert_eq!(reply, expected);
}

#[test]
fn scenario_unsafe_tree_during_flood() {
    let resolver = Resolver::builtin();
    let mut session = SessionState::new();

    let reply = chat_turn(&resolver, &mut session, "is a tree safe during a flood");
    let entry = &resolver
        .knowledge()
        .lookup(Disaster::Flood)
        .unwrap()
        .unsafe_places["tree"];

    assert!(reply.starts_with("NO — NOT SAFE."));
    assert!(reply.contains(&entry.reason));
    assert!(reply.contains(&entry.solution));
    assert!(reply.contains(&entry.how));
}

#[test]
fn scenario_window_with_cyclone_context() {
    let resolver = Resolver::builtin();
    let mut session = SessionState::new();

    chat_turn(&resolver, &mut session, "tell me about cyclone safety");
    assert_eq!(session.last_disaster(), Some(Disaster::Cyclone));

    let reply = chat_turn(&resolver, &mut session, "window");
    assert!(reply.starts_with("NO — NOT SAFE."));
    assert!(reply.contains("Strong winds can shatter glass"));
}

#[test]
fn scenario_precautions_with_earthquake_context() {
    let resolver = Resolver::builtin();
    let mut session = SessionState::new();

    chat_turn(&resolver, &mut session, "what is an earthquake");
    let reply = chat_turn(&resolver, &mut session, "precautions");

    assert!(reply.starts_with("Earthquake safety (during):"));
    assert!(reply.contains("- Drop, Cover, and Hold On."));
    assert!(reply.contains("- Do not use elevators."));
    assert!(reply.contains("Why:"));
}

#[test]
fn scenario_context_survives_definition_followup() {
    let resolver = Resolver::builtin();
    let mut session = SessionState::new();

    chat_turn(&resolver, &mut session, "flood precautions");
    let reply = chat_turn(&resolver, &mut session, "what is it");
    assert!(reply.starts_with("A flood occurs"));
}

#[test]
fn scenario_unknown_input_prompts_not_crashes() {
    let resolver = Resolver::builtin();
    let mut session = SessionState::new();

    for text in ["", "   ", "hello", "is it dangerous?"] {
        assert_eq!(chat_turn(&resolver, &mut session, text), DISASTER_PROMPT);
    }
    assert!(session.last_disaster().is_none());
}

#[test]
fn scenario_exact_names_always_detected() {
    let resolver = Resolver::builtin();
    for disaster in Disaster::ALL {
        let mut session = SessionState::new();
        chat_turn(
            &resolver,
            &mut session,
            &format!("what should i do in a {}", disaster.as_str()),
        );
        assert_eq!(session.last_disaster(), Some(disaster));
    }
}

#[test]
fn scenario_identical_turns_identical_replies() {
    let resolver = Resolver::builtin();

    let run = || {
        let mut session = SessionState::new();
        [
            "what is a cyclone",
            "precautions",
            "is the coast safe",
            "what about after",
        ]
        .map(|text| chat_turn(&resolver, &mut session, text))
    };

    assert_eq!(run(), run());
}

#[test]
fn scenario_phase_selection_from_text() {
    let resolver = Resolver::builtin();
    let mut session = SessionState::new();

    let before = chat_turn(&resolver, &mut session, "what to do before a flood");
    assert!(before.starts_with("Flood safety (before):"));

    // "how to prepare" has no general-action phrase; the fallback still
    // honors the phase keyword.
    let prepare = chat_turn(&resolver, &mut session, "how to prepare for a flood");
    assert!(prepare.starts_with("Flood safety (before):"));

    let after = chat_turn(&resolver, &mut session, "what to do after the flood");
    assert!(after.starts_with("Flood safety (after):"));
}

#[test]
fn scenario_external_pack_behaves_like_builtin() {
    let json = KnowledgeBase::builtin().to_json().unwrap();
    let resolver = Resolver::new(KnowledgeBase::from_json_str(&json).unwrap()).unwrap();

    let mut session = SessionState::new();
    let reply = chat_turn(&resolver, &mut session, "what is a flood");
    assert!(reply.starts_with("A flood occurs"));
}

#[test]
fn scenario_conversation_log_is_append_only() {
    let resolver = Resolver::builtin();
    let mut session = SessionState::new();

    chat_turn(&resolver, &mut session, "what is a flood");
    chat_turn(&resolver, &mut session, "precautions");

    let roles: Vec<Role> = session.turns().iter().map(|t| t.role).collect();
    assert_eq!(
        roles,
        vec![Role::User, Role::Assistant, Role::User, Role::Assistant]
    );
}
