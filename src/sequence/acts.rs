use crate::foundation::error::{StoryframeError, StoryframeResult};

/// One of the six ordinal narrative phases of a video.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Act {
    /// Cold open.
    Act1,
    /// Setup.
    Act2,
    /// First escalation.
    Act3,
    /// Second escalation.
    Act4,
    /// Synthesis.
    Act5,
    /// Close.
    Act6,
}

impl Act {
    /// All acts in timeline order.
    pub const ALL: [Act; 6] = [
        Act::Act1,
        Act::Act2,
        Act::Act3,
        Act::Act4,
        Act::Act5,
        Act::Act6,
    ];

    /// 1-based act number.
    pub fn number(self) -> u8 {
        match self {
            Act::Act1 => 1,
            Act::Act2 => 2,
            Act::Act3 => 3,
            Act::Act4 => 4,
            Act::Act5 => 5,
            Act::Act6 => 6,
        }
    }

    /// Act for a 1-based number.
    pub fn from_number(n: u64) -> Option<Act> {
        match n {
            1 => Some(Act::Act1),
            2 => Some(Act::Act2),
            3 => Some(Act::Act3),
            4 => Some(Act::Act4),
            5 => Some(Act::Act5),
            6 => Some(Act::Act6),
            _ => None,
        }
    }

    /// Parse `"act3"`, `"Act 3"` or `"3"`.
    pub fn parse(label: &str) -> StoryframeResult<Act> {
        let s = label.trim().to_ascii_lowercase();
        let digits = s.strip_prefix("act").unwrap_or(&s).trim();
        digits
            .parse::<u64>()
            .ok()
            .and_then(Act::from_number)
            .ok_or_else(|| StoryframeError::validation(format!("unknown act label '{label}'")))
    }

    /// Stable lowercase label (`"act1"`..`"act6"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Act::Act1 => "act1",
            Act::Act2 => "act2",
            Act::Act3 => "act3",
            Act::Act4 => "act4",
            Act::Act5 => "act5",
            Act::Act6 => "act6",
        }
    }

    /// Echo imagery is only eligible in the middle of the arc.
    pub fn allows_echo(self) -> bool {
        matches!(self, Act::Act3 | Act::Act4 | Act::Act5)
    }
}

impl std::fmt::Display for Act {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cumulative end time (seconds) of each act.
///
/// `act6_end` doubles as the total video duration.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ActTimestamps {
    /// End of act 1.
    pub act1_end: f64,
    /// End of act 2.
    pub act2_end: f64,
    /// End of act 3.
    pub act3_end: f64,
    /// End of act 4.
    pub act4_end: f64,
    /// End of act 5.
    pub act5_end: f64,
    /// End of act 6 (total duration).
    pub act6_end: f64,
}

impl Default for ActTimestamps {
    fn default() -> Self {
        // 25-minute reference cut.
        Self {
            act1_end: 90.0,
            act2_end: 360.0,
            act3_end: 720.0,
            act4_end: 1020.0,
            act5_end: 1320.0,
            act6_end: 1500.0,
        }
    }
}

impl ActTimestamps {
    /// Breakpoints in act order.
    pub fn ends(&self) -> [f64; 6] {
        [
            self.act1_end,
            self.act2_end,
            self.act3_end,
            self.act4_end,
            self.act5_end,
            self.act6_end,
        ]
    }

    /// Total video duration in seconds.
    pub fn total_seconds(&self) -> f64 {
        self.act6_end
    }

    /// Rescale every breakpoint so that the video lasts `total_seconds`.
    pub fn scaled_to(&self, total_seconds: f64) -> StoryframeResult<Self> {
        if !total_seconds.is_finite() || total_seconds <= 0.0 {
            return Err(StoryframeError::config(
                "total_seconds must be finite and > 0",
            ));
        }
        self.validate()?;
        let k = total_seconds / self.act6_end;
        Ok(Self {
            act1_end: self.act1_end * k,
            act2_end: self.act2_end * k,
            act3_end: self.act3_end * k,
            act4_end: self.act4_end * k,
            act5_end: self.act5_end * k,
            act6_end: total_seconds,
        })
    }

    /// Breakpoints must be finite, positive and strictly increasing.
    pub fn validate(&self) -> StoryframeResult<()> {
        let ends = self.ends();
        for (act, end) in Act::ALL.iter().zip(ends) {
            if !end.is_finite() || end <= 0.0 {
                return Err(StoryframeError::config(format!(
                    "{act}_end must be finite and > 0 (got {end})"
                )));
            }
        }
        for w in 1..ends.len() {
            if ends[w] <= ends[w - 1] {
                return Err(StoryframeError::config(format!(
                    "act breakpoints must be strictly increasing: {}_end ({}) <= {}_end ({})",
                    Act::ALL[w],
                    ends[w],
                    Act::ALL[w - 1],
                    ends[w - 1]
                )));
            }
        }
        Ok(())
    }

    /// Act containing `timestamp`.
    pub fn act_at(&self, timestamp: f64) -> Act {
        let ends = self.ends();
        for (act, end) in Act::ALL.iter().zip(ends).take(5) {
            if timestamp < end {
                return *act;
            }
        }
        Act::Act6
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/acts.rs"]
mod tests;
