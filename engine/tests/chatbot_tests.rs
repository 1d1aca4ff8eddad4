//! KhetBot responder integration tests
//!
//! Covers keyword matching order, both languages, the fallback string and
//! determinism of repeated calls.

use proptest::prelude::*;

use agrirate_engine::chatbot::{chatbot_reply, fallback_response, topic_response, ChatTopic};
use agrirate_engine::types::Language;

#[test]
fn test_pest_question_returns_exact_canned_response() {
    let reply = chatbot_reply("How do I control pests on my farm?", Language::English);
    assert_eq!(reply, topic_response(ChatTopic::PestControl, Language::English));
    assert!(reply.starts_with("For pest control:"));
}

#[test]
fn test_unmatched_question_returns_exact_fallback() {
    let reply = chatbot_reply("xyz123", Language::English);
    assert_eq!(
        reply,
        "I'm here to help. Ask me about pest control, irrigation, fertilizer, or crop protection."
    );
}

#[test]
fn test_urdu_question_gets_urdu_response() {
    let reply = chatbot_reply("فصل کو پانی کب دینا چاہیے؟", Language::Urdu);
    assert_eq!(reply, topic_response(ChatTopic::Irrigation, Language::Urdu));
}

#[test]
fn test_language_selects_response_not_matching() {
    // An English query can still be answered in Urdu
    let reply = chatbot_reply("fertilizer dose?", Language::Urdu);
    assert_eq!(reply, topic_response(ChatTopic::Fertilizer, Language::Urdu));
}

#[test]
fn test_keyword_declared_order_wins_over_position_in_query() {
    // "crop" appears first in the query but "pest" is declared earlier
    let reply = chatbot_reply("crop pests are eating everything", Language::English);
    assert_eq!(reply, topic_response(ChatTopic::PestControl, Language::English));
}

#[test]
fn test_responses_are_multi_line() {
    for topic in [
        ChatTopic::PestControl,
        ChatTopic::Irrigation,
        ChatTopic::Fertilizer,
        ChatTopic::CropProtection,
    ] {
        for language in [Language::English, Language::Urdu] {
            assert!(topic_response(topic, language).lines().count() >= 4);
        }
    }
}

proptest! {
    #[test]
    fn prop_reply_is_deterministic(query in ".{0,40}") {
        let first = chatbot_reply(&query, Language::English);
        let second = chatbot_reply(&query, Language::English);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_reply_is_always_a_known_string(query in ".{0,40}") {
        let reply = chatbot_reply(&query, Language::Urdu);
        let known = [
            topic_response(ChatTopic::PestControl, Language::Urdu),
            topic_response(ChatTopic::Irrigation, Language::Urdu),
            topic_response(ChatTopic::Fertilizer, Language::Urdu),
            topic_response(ChatTopic::CropProtection, Language::Urdu),
            fallback_response(Language::Urdu),
        ];
        prop_assert!(known.contains(&reply.as_str()));
    }
}
