use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::animation::card::AnimationTuning;
use crate::foundation::error::{TarotError, TarotResult};
use crate::foundation::math::entropy_seed;
use crate::scene::driver::SceneOpts;

/// JSON-facing scene configuration.
///
/// Every field is optional; an empty object reproduces the stock scene with an entropy seed.
///
/// ```json
/// { "seed": 42, "animation": { "deal_stride_s": 0.25 } }
/// ```
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SceneConfig {
    /// Seed for every random visual element. Drawn from system entropy when absent.
    pub seed: Option<u64>,
    /// Skip painting textures at mount (headless hosts).
    pub headless: bool,
    /// Deal timing and channel decay rates.
    pub animation: AnimationTuning,
}

impl SceneConfig {
    /// Parse a config from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> TarotResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| TarotError::serde(format!("parse scene config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse a config from a JSON file on disk.
    pub fn from_json_file(path: impl AsRef<Path>) -> TarotResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            TarotError::storage(format!("open scene config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check the animation tuning.
    pub fn validate(&self) -> TarotResult<()> {
        self.animation.validate()
    }

    /// Configured seed, or a fresh entropy seed.
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(entropy_seed)
    }

    /// Mount options derived from this config.
    pub fn scene_opts(&self) -> SceneOpts {
        SceneOpts {
            textures: !self.headless,
            tuning: self.animation,
        }
    }
}
