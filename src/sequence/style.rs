/// Visual treatment assigned to one generated image.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum VisualStyle {
    /// Primary style: cinematic photorealistic documentary frame.
    Dossier,
    /// Secondary style: photoreal background with a glowing data overlay.
    Schema,
    /// Tertiary style: painterly historical reconstruction, shown in short clusters.
    Echo,
}

impl VisualStyle {
    /// All styles, in weighted-draw order.
    pub const ALL: [VisualStyle; 3] = [VisualStyle::Dossier, VisualStyle::Schema, VisualStyle::Echo];

    /// Stable lowercase label.
    pub fn as_str(self) -> &'static str {
        match self {
            VisualStyle::Dossier => "dossier",
            VisualStyle::Schema => "schema",
            VisualStyle::Echo => "echo",
        }
    }

    /// Parse a style label, case-insensitively.
    pub fn parse(label: &str) -> Option<VisualStyle> {
        match label.trim().to_ascii_lowercase().as_str() {
            "dossier" => Some(VisualStyle::Dossier),
            "schema" => Some(VisualStyle::Schema),
            "echo" => Some(VisualStyle::Echo),
            _ => None,
        }
    }

    pub(crate) fn slot(self) -> usize {
        match self {
            VisualStyle::Dossier => 0,
            VisualStyle::Schema => 1,
            VisualStyle::Echo => 2,
        }
    }
}

impl std::fmt::Display for VisualStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Framing / camera-angle directive.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Composition {
    /// Wide establishing shot.
    Wide,
    /// Waist-up figure in context.
    Medium,
    /// Detail close-up.
    Closeup,
    /// Environment only, no figure.
    Environmental,
    /// Chest-up figure, face partially shadowed.
    Portrait,
    /// High-angle surveillance view.
    Overhead,
    /// Low angle looking up.
    LowAngle,
}

impl Composition {
    /// Rotation order used when cycling compositions within one style.
    pub const CYCLE: [Composition; 7] = [
        Composition::Wide,
        Composition::Medium,
        Composition::Closeup,
        Composition::Environmental,
        Composition::Portrait,
        Composition::Overhead,
        Composition::LowAngle,
    ];

    /// Stable lowercase label.
    pub fn as_str(self) -> &'static str {
        match self {
            Composition::Wide => "wide",
            Composition::Medium => "medium",
            Composition::Closeup => "closeup",
            Composition::Environmental => "environmental",
            Composition::Portrait => "portrait",
            Composition::Overhead => "overhead",
            Composition::LowAngle => "low_angle",
        }
    }

    /// Parse a composition label, case-insensitively.
    pub fn parse(label: &str) -> Option<Composition> {
        let s = label.trim().to_ascii_lowercase();
        Composition::CYCLE.into_iter().find(|c| c.as_str() == s)
    }

    /// The composition after this one in [`Composition::CYCLE`], wrapping around.
    pub fn next_in_cycle(self) -> Composition {
        let i = Composition::CYCLE
            .iter()
            .position(|c| *c == self)
            .unwrap_or(0);
        Composition::CYCLE[(i + 1) % Composition::CYCLE.len()]
    }

    /// Base camera move for this framing.
    pub fn ken_burns(self) -> KenBurnsDirection {
        match self {
            Composition::Wide | Composition::Portrait | Composition::Overhead => {
                KenBurnsDirection::SlowZoomIn
            }
            Composition::Medium => KenBurnsDirection::SlowPanRight,
            Composition::Closeup => KenBurnsDirection::SlowZoomOut,
            Composition::Environmental => KenBurnsDirection::SlowPanLeft,
            Composition::LowAngle => KenBurnsDirection::SlowTiltUp,
        }
    }
}

impl std::fmt::Display for Composition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pan / zoom move applied to a still image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KenBurnsDirection {
    /// Scale 1.0 -> 1.15.
    SlowZoomIn,
    /// Scale 1.15 -> 1.0.
    SlowZoomOut,
    /// Horizontal drift to the right.
    SlowPanRight,
    /// Horizontal drift to the left.
    SlowPanLeft,
    /// Vertical drift upwards.
    SlowTiltUp,
}

impl KenBurnsDirection {
    /// Stable lowercase label.
    pub fn as_str(self) -> &'static str {
        match self {
            KenBurnsDirection::SlowZoomIn => "slow_zoom_in",
            KenBurnsDirection::SlowZoomOut => "slow_zoom_out",
            KenBurnsDirection::SlowPanRight => "slow_pan_right",
            KenBurnsDirection::SlowPanLeft => "slow_pan_left",
            KenBurnsDirection::SlowTiltUp => "slow_tilt_up",
        }
    }

    /// Opposite pan for pan moves, `None` for zooms and tilts.
    pub fn pan_alternate(self) -> Option<KenBurnsDirection> {
        match self {
            KenBurnsDirection::SlowPanRight => Some(KenBurnsDirection::SlowPanLeft),
            KenBurnsDirection::SlowPanLeft => Some(KenBurnsDirection::SlowPanRight),
            _ => None,
        }
    }
}

impl std::fmt::Display for KenBurnsDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/style.rs"]
mod tests;
