/// Linear interpolation `a + (b - a) * t`.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Frame-rate independent smoothing factor `1 - decay^dt`.
///
/// `decay` is the fraction of the remaining distance left after one second. Negative `dt` is
/// treated as zero so the factor always stays in `[0, 1]`.
pub fn damp_factor(decay: f64, dt: f64) -> f64 {
    let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
    (1.0 - decay.clamp(0.0, 1.0).powf(dt)).clamp(0.0, 1.0)
}

/// Exponential approach of `value` towards `target` over `dt` seconds.
pub fn damp(value: f64, target: f64, decay: f64, dt: f64) -> f64 {
    lerp(value, target, damp_factor(decay, dt))
}

/// Small deterministic generator used for every random visual element.
#[derive(Clone, Copy, Debug)]
pub struct Rng64 {
    state: u64,
}

impl Rng64 {
    /// Seed a new generator.
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

    /// Uniform value in `[lo, hi)`.
    pub fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64_01()
    }

    /// Uniform index in `[0, n)`. Returns 0 for `n == 0`.
    pub fn below(&mut self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        ((self.next_f64_01() * n as f64) as usize).min(n - 1)
    }

    /// `true` with probability `p`.
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64_01() < p
    }

    /// Derive an independent generator for a named sub-stream.
    pub fn fork(&self, stream: u64) -> Self {
        Self::new(self.state ^ stream.wrapping_mul(0xD6E8_FEB8_6659_FD93))
    }
}

/// Fisher-Yates shuffle driven by `rng`.
pub fn shuffle<T>(items: &mut [T], rng: &mut Rng64) {
    for i in (1..items.len()).rev() {
        let j = rng.below(i + 1);
        items.swap(i, j);
    }
}

/// Seed drawn from system entropy, used when no explicit seed was configured.
pub fn entropy_seed() -> u64 {
    fastrand::u64(..)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
