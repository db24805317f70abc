/// Analytical lens a story is told through.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Framework {
    /// Greene's laws of power.
    #[serde(rename = "48 Laws")]
    FortyEightLaws,
    /// The Art of War.
    #[serde(rename = "Sun Tzu")]
    SunTzu,
    /// The Prince.
    #[serde(rename = "Machiavelli")]
    Machiavelli,
    /// Incentives and equilibria.
    #[serde(rename = "Game Theory")]
    GameTheory,
    /// Projection and the unconscious.
    #[serde(rename = "Jung Shadow")]
    JungShadow,
    /// Biases and heuristics.
    #[serde(rename = "Behavioral Econ")]
    BehavioralEcon,
    /// Control and endurance.
    #[serde(rename = "Stoicism")]
    Stoicism,
    /// Narrative control.
    #[serde(rename = "Propaganda")]
    Propaganda,
    /// Feedback loops and second-order effects.
    #[serde(rename = "Systems Thinking")]
    SystemsThinking,
    /// Status, tribes and instinct.
    #[serde(rename = "Evolutionary Psych")]
    EvolutionaryPsych,
}

impl Framework {
    /// Display name.
    pub fn as_str(self) -> &'static str {
        match self {
            Framework::FortyEightLaws => "48 Laws",
            Framework::SunTzu => "Sun Tzu",
            Framework::Machiavelli => "Machiavelli",
            Framework::GameTheory => "Game Theory",
            Framework::JungShadow => "Jung Shadow",
            Framework::BehavioralEcon => "Behavioral Econ",
            Framework::Stoicism => "Stoicism",
            Framework::Propaganda => "Propaganda",
            Framework::SystemsThinking => "Systems Thinking",
            Framework::EvolutionaryPsych => "Evolutionary Psych",
        }
    }
}

impl std::fmt::Display for Framework {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Picks the analytical framework for a story from its angle, hook and headline.
pub trait FrameworkClassifier {
    /// Always returns a framework; falls back to a default when nothing matches.
    fn classify(&self, text: &str) -> Framework;
}

const SIGNALS: [(Framework, &[&str]); 10] = [
    (
        Framework::FortyEightLaws,
        &[
            "law of power",
            "48 laws",
            "robert greene",
            "conceal",
            "crush your enemy",
            "court power",
            "law 3",
            "law 15",
            "power play",
            "power grab",
        ],
    ),
    (
        Framework::SunTzu,
        &[
            "art of war",
            "sun tzu",
            "military",
            "warfare",
            "deception",
            "terrain",
            "flank",
            "siege",
            "strategic retreat",
            "battle",
        ],
    ),
    (
        Framework::Machiavelli,
        &[
            "machiavelli",
            "the prince",
            "prince",
            "virtù",
            "fortuna",
            "feared or loved",
            "fox and lion",
            "principality",
            "sovereignty",
        ],
    ),
    (
        Framework::GameTheory,
        &[
            "game theory",
            "nash equilibrium",
            "prisoner",
            "dilemma",
            "zero-sum",
            "incentive",
            "payoff",
            "dominant strategy",
            "tit for tat",
        ],
    ),
    (
        Framework::JungShadow,
        &[
            "shadow",
            "jung",
            "unconscious",
            "projection",
            "persona",
            "archetype",
            "collective unconscious",
        ],
    ),
    (
        Framework::BehavioralEcon,
        &[
            "behavioral",
            "loss aversion",
            "anchoring",
            "sunk cost",
            "nudge",
            "kahneman",
            "bias",
            "irrational",
            "heuristic",
        ],
    ),
    (
        Framework::Stoicism,
        &[
            "stoic",
            "marcus aurelius",
            "seneca",
            "epictetus",
            "control",
            "fate",
            "virtue",
            "endure",
        ],
    ),
    (
        Framework::Propaganda,
        &[
            "propaganda",
            "bernays",
            "chomsky",
            "manufacturing consent",
            "media",
            "narrative control",
            "information war",
            "censorship",
            "perception management",
        ],
    ),
    (
        Framework::SystemsThinking,
        &[
            "system",
            "feedback loop",
            "second-order",
            "unintended consequences",
            "complexity",
            "emergent",
            "cascade",
            "interconnected",
        ],
    ),
    (
        Framework::EvolutionaryPsych,
        &[
            "evolutionary",
            "tribal",
            "dominance hierarchy",
            "in-group",
            "out-group",
            "status",
            "instinct",
            "survival",
            "primal",
        ],
    ),
];

/// Story-type hints used only when no framework keyword matched.
const STORY_TYPE_HINTS: [(Framework, &[&str]); 4] = [
    (
        Framework::FortyEightLaws,
        &["corporate", "company", "ceo", "merger", "monopoly"],
    ),
    (
        Framework::GameTheory,
        &["sanction", "tariff", "trade war", "embargo"],
    ),
    (
        Framework::SystemsThinking,
        &["currency", "dollar", "debt", "inflation", "fed"],
    ),
    (
        Framework::SunTzu,
        &["army", "nato", "defense", "missile", "nuclear"],
    ),
];

/// Keyword-count classifier with a story-type fallback.
#[derive(Clone, Copy, Debug, Default)]
pub struct KeywordFrameworkClassifier;

impl FrameworkClassifier for KeywordFrameworkClassifier {
    fn classify(&self, text: &str) -> Framework {
        let text = text.to_lowercase();

        let mut best = Framework::FortyEightLaws;
        let mut best_score = 0;
        for (framework, keywords) in SIGNALS {
            let score = keywords.iter().filter(|kw| text.contains(*kw)).count();
            if score > best_score {
                best_score = score;
                best = framework;
            }
        }
        if best_score > 0 {
            return best;
        }

        STORY_TYPE_HINTS
            .iter()
            .find(|(_, words)| words.iter().any(|w| text.contains(w)))
            .map(|(f, _)| *f)
            .unwrap_or(Framework::FortyEightLaws)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/classify/framework.rs"]
mod tests;
