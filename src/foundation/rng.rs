/// Small seeded generator used wherever a run must be reproducible from its seed.
#[derive(Clone, Copy, Debug)]
pub struct Rng64 {
    state: u64,
}

impl Rng64 {
    /// Create a generator from an explicit seed.
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Next raw 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        // SplitMix64
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform value in `[0, 1)`.
    pub fn next_f64_01(&mut self) -> f64 {
        // 53 bits of precision.
        let v = self.next_u64() >> 11;
        (v as f64) * (1.0 / ((1u64 << 53) as f64))
    }

    /// Draw one item from `(item, weight)` pairs.
    ///
    /// Entries with a non-positive weight are never returned. Returns `None` when no entry has a
    /// positive weight.
    pub fn pick_weighted<T: Copy>(&mut self, entries: &[(T, f64)]) -> Option<T> {
        let total: f64 = entries.iter().map(|(_, w)| w.max(0.0)).sum();
        if total <= 0.0 {
            return None;
        }

        let r = self.next_f64_01() * total;
        let mut cumulative = 0.0;
        let mut last_positive = None;
        for &(item, w) in entries {
            if w <= 0.0 {
                continue;
            }
            cumulative += w;
            last_positive = Some(item);
            if r < cumulative {
                return Some(item);
            }
        }
        // Rounding can leave `r` a hair above the final cumulative sum.
        last_positive
    }
}

/// Resolve an optional caller seed, drawing a fresh one from the thread RNG when absent.
pub fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(rand::random::<u64>)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/rng.rs"]
mod tests;
