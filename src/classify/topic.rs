use crate::prompt::accent::TopicCategory;

/// Maps free text (title, summary, tags) to a topic category.
pub trait TopicClassifier {
    /// Best-fit category, or `None` when nothing matches.
    fn classify(&self, text: &str) -> Option<TopicCategory>;
}

/// Keyword-count classifier over a fixed table.
#[derive(Clone, Debug)]
pub struct KeywordTopicClassifier {
    table: Vec<(TopicCategory, Vec<String>)>,
}

impl KeywordTopicClassifier {
    /// Classifier over a caller-supplied table. Earlier entries win ties.
    pub fn with_table(table: Vec<(TopicCategory, Vec<String>)>) -> Self {
        let table = table
            .into_iter()
            .map(|(c, kws)| (c, kws.into_iter().map(|k| k.to_lowercase()).collect()))
            .collect();
        Self { table }
    }
}

impl Default for KeywordTopicClassifier {
    fn default() -> Self {
        let table: [(TopicCategory, &[&str]); 11] = [
            (
                TopicCategory::Warfare,
                &["war ", "warfare", "invasion", "missile", "troops", "battle", "nato"],
            ),
            (
                TopicCategory::PoliticalViolence,
                &["assassination", "coup", "insurrection", "terror", "riot"],
            ),
            (
                TopicCategory::Conflict,
                &["conflict", "rivalry", "feud", "standoff", "clash"],
            ),
            (
                TopicCategory::Surveillance,
                &["surveillance", "spy", "intelligence agency", "tracking", "privacy"],
            ),
            (
                TopicCategory::AiTech,
                &["artificial intelligence", " ai ", "robot", "algorithm", "chip", "tech"],
            ),
            (
                TopicCategory::CorporatePower,
                &["corporate", "monopoly", "ceo", "merger", "conglomerate", "big tech"],
            ),
            (
                TopicCategory::Financial,
                &["stock", "bank", "hedge fund", "wall street", "market crash", "investor"],
            ),
            (
                TopicCategory::Economic,
                &["economy", "inflation", "tariff", "recession", "currency", "debt"],
            ),
            (
                TopicCategory::OldMoney,
                &["dynasty", "heir", "inheritance", "old money", "aristocrat", "family fortune"],
            ),
            (
                TopicCategory::HistoricalPower,
                &["empire", "emperor", "medieval", "ancient", "monarch", "colonial"],
            ),
            (
                TopicCategory::Geopolitical,
                &["geopolit", "sanction", "diplomac", "treaty", "sovereign", "border"],
            ),
        ];
        Self::with_table(
            table
                .into_iter()
                .map(|(c, kws)| (c, kws.iter().map(|k| k.to_string()).collect()))
                .collect(),
        )
    }
}

impl TopicClassifier for KeywordTopicClassifier {
    fn classify(&self, text: &str) -> Option<TopicCategory> {
        // Padding lets whole-word keywords like " ai " match at the edges.
        let text = format!(" {} ", text.to_lowercase());
        let mut best: Option<(TopicCategory, usize)> = None;
        for (category, keywords) in &self.table {
            let score = keywords.iter().filter(|kw| text.contains(kw.as_str())).count();
            if score > best.map_or(0, |(_, s)| s) {
                best = Some((*category, score));
            }
        }
        best.map(|(c, _)| c)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/classify/topic.rs"]
mod tests;
