use super::*;

#[test]
fn keyword_hits_pick_framework() {
    let c = KeywordFrameworkClassifier;
    assert_eq!(
        c.classify("A prisoner's dilemma with a zero-sum payoff"),
        Framework::GameTheory
    );
    assert_eq!(
        c.classify("Why the siege turned on deception and terrain"),
        Framework::SunTzu
    );
    assert_eq!(
        c.classify("Manufacturing consent: propaganda in modern media"),
        Framework::Propaganda
    );
}

#[test]
fn story_type_fallback_applies_without_keywords() {
    let c = KeywordFrameworkClassifier;
    assert_eq!(c.classify("New sanctions on exports"), Framework::GameTheory);
    assert_eq!(c.classify("The dollar slips again"), Framework::SystemsThinking);
    assert_eq!(c.classify("Army recruitment falls"), Framework::SunTzu);
    assert_eq!(c.classify("A merger nobody noticed"), Framework::FortyEightLaws);
}

#[test]
fn default_is_forty_eight_laws() {
    let c = KeywordFrameworkClassifier;
    assert_eq!(c.classify("an ordinary morning"), Framework::FortyEightLaws);
    assert_eq!(c.classify(""), Framework::FortyEightLaws);
}

#[test]
fn ties_keep_earlier_framework() {
    let c = KeywordFrameworkClassifier;
    // One hit each for Sun Tzu ("battle") and Jung Shadow ("shadow").
    assert_eq!(c.classify("battle in the shadow"), Framework::SunTzu);
}

#[test]
fn serde_uses_display_names() {
    assert_eq!(
        serde_json::to_string(&Framework::FortyEightLaws).unwrap(),
        "\"48 Laws\""
    );
    assert_eq!(Framework::EvolutionaryPsych.to_string(), "Evolutionary Psych");
}
