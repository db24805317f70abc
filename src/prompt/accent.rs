/// Accent lighting color threaded through every prompt of a video.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct AccentColor(pub String);

impl AccentColor {
    /// Cool accent for technology and power topics.
    pub fn cold_teal() -> Self {
        Self("cold teal".to_string())
    }

    /// Warm accent for money and history topics.
    pub fn warm_amber() -> Self {
        Self("warm amber".to_string())
    }

    /// Red accent for conflict topics.
    pub fn muted_crimson() -> Self {
        Self("muted crimson".to_string())
    }

    /// Color text as inserted into prompts.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for AccentColor {
    fn default() -> Self {
        Self::cold_teal()
    }
}

impl std::fmt::Display for AccentColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Closed set of topic categories that drive the accent color.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum TopicCategory {
    /// International relations and statecraft.
    Geopolitical,
    /// Artificial intelligence and technology.
    AiTech,
    /// Corporate power and monopolies.
    CorporatePower,
    /// Surveillance and intelligence.
    Surveillance,
    /// Macroeconomics.
    Economic,
    /// Markets and finance.
    Financial,
    /// Historical dynasties and empires.
    HistoricalPower,
    /// Inherited wealth.
    OldMoney,
    /// Conflict in general.
    Conflict,
    /// Armed warfare.
    Warfare,
    /// Political violence.
    PoliticalViolence,
}

impl TopicCategory {
    /// Every category.
    pub const ALL: [TopicCategory; 11] = [
        TopicCategory::Geopolitical,
        TopicCategory::AiTech,
        TopicCategory::CorporatePower,
        TopicCategory::Surveillance,
        TopicCategory::Economic,
        TopicCategory::Financial,
        TopicCategory::HistoricalPower,
        TopicCategory::OldMoney,
        TopicCategory::Conflict,
        TopicCategory::Warfare,
        TopicCategory::PoliticalViolence,
    ];

    /// Stable snake_case label.
    pub fn as_str(self) -> &'static str {
        match self {
            TopicCategory::Geopolitical => "geopolitical",
            TopicCategory::AiTech => "ai_tech",
            TopicCategory::CorporatePower => "corporate_power",
            TopicCategory::Surveillance => "surveillance",
            TopicCategory::Economic => "economic",
            TopicCategory::Financial => "financial",
            TopicCategory::HistoricalPower => "historical_power",
            TopicCategory::OldMoney => "old_money",
            TopicCategory::Conflict => "conflict",
            TopicCategory::Warfare => "warfare",
            TopicCategory::PoliticalViolence => "political_violence",
        }
    }

    /// Parse a snake_case label.
    pub fn parse(label: &str) -> Option<TopicCategory> {
        let s = label.trim().to_ascii_lowercase();
        TopicCategory::ALL.into_iter().find(|c| c.as_str() == s)
    }

    /// Accent color for this category.
    pub fn accent(self) -> AccentColor {
        match self {
            TopicCategory::Geopolitical
            | TopicCategory::AiTech
            | TopicCategory::CorporatePower
            | TopicCategory::Surveillance => AccentColor::cold_teal(),
            TopicCategory::Economic
            | TopicCategory::Financial
            | TopicCategory::HistoricalPower
            | TopicCategory::OldMoney => AccentColor::warm_amber(),
            TopicCategory::Conflict | TopicCategory::Warfare | TopicCategory::PoliticalViolence => {
                AccentColor::muted_crimson()
            }
        }
    }
}

impl std::fmt::Display for TopicCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Explicit color wins, then the category's color, then the default.
pub fn resolve_accent_color(
    explicit: Option<&str>,
    category: Option<TopicCategory>,
) -> AccentColor {
    if let Some(c) = explicit.map(str::trim).filter(|c| !c.is_empty()) {
        return AccentColor(c.to_string());
    }
    category.map(TopicCategory::accent).unwrap_or_default()
}

#[cfg(test)]
#[path = "../../tests/unit/prompt/accent.rs"]
mod tests;
