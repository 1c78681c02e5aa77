use std::collections::BTreeMap;
use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use tracing::debug;

use crate::hex::{HexParseError, Rgb, parse_hex};
use crate::mix::{shade, tint};

/// Slate scale returned for base colors that cannot be parsed.
pub const FALLBACK_SHADES: [&str; 11] = [
    "#f8fafc", "#f1f5f9", "#e2e8f0", "#cbd5e1", "#94a3b8", "#64748b", "#475569", "#334155",
    "#1e293b", "#0f172a", "#020617",
];

/// One of the eleven keys of a palette, lightest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
    S50,
    S100,
    S200,
    S300,
    S400,
    S500,
    S600,
    S700,
    S800,
    S900,
    S950,
}

enum Recipe {
    Tint(f64),
    Base,
    Shade(f64),
}

impl Step {
    pub const ALL: [Step; 11] = [
        Step::S50,
        Step::S100,
        Step::S200,
        Step::S300,
        Step::S400,
        Step::S500,
        Step::S600,
        Step::S700,
        Step::S800,
        Step::S900,
        Step::S950,
    ];

    pub const fn value(self) -> u16 {
        match self {
            Step::S50 => 50,
            Step::S100 => 100,
            Step::S200 => 200,
            Step::S300 => 300,
            Step::S400 => 400,
            Step::S500 => 500,
            Step::S600 => 600,
            Step::S700 => 700,
            Step::S800 => 800,
            Step::S900 => 900,
            Step::S950 => 950,
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Weights are the fraction of the base color that is kept.
    const fn recipe(self) -> Recipe {
        match self {
            Step::S50 => Recipe::Tint(0.05),
            Step::S100 => Recipe::Tint(0.10),
            Step::S200 => Recipe::Tint(0.25),
            Step::S300 => Recipe::Tint(0.40),
            Step::S400 => Recipe::Tint(0.70),
            Step::S500 => Recipe::Base,
            Step::S600 => Recipe::Shade(0.90),
            Step::S700 => Recipe::Shade(0.70),
            Step::S800 => Recipe::Shade(0.50),
            Step::S900 => Recipe::Shade(0.30),
            Step::S950 => Recipe::Shade(0.15),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
#[error("unknown palette step '{0}'")]
pub struct UnknownStep(pub String);

impl FromStr for Step {
    type Err = UnknownStep;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Step::ALL
            .into_iter()
            .find(|step| step.to_string() == s)
            .ok_or_else(|| UnknownStep(s.to_string()))
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PaletteDecodeError {
    #[error(transparent)]
    UnknownStep(#[from] UnknownStep),
    #[error("missing palette step {0}")]
    MissingStep(Step),
    #[error("step {step} has invalid color '{value}': {source}")]
    InvalidColor {
        step: Step,
        value: String,
        source: HexParseError,
    },
    #[error("step {step} must be '#' followed by six hex digits, got '{value}'")]
    MissingHash { step: Step, value: String },
}

/// An 11-step shade scale keyed by [`Step`].
///
/// Serializes as a flat object, `{"50": "#...", ..., "950": "#..."}`, in
/// ascending step order.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "BTreeMap<String, String>")]
pub struct Palette {
    shades: [String; 11],
}

impl Palette {
    pub fn fallback() -> Self {
        Self {
            shades: FALLBACK_SHADES.map(str::to_string),
        }
    }

    pub fn get(&self, step: Step) -> &str {
        &self.shades[step.index()]
    }

    /// The step 500 entry, which is the base color as it was supplied.
    pub fn base(&self) -> &str {
        self.get(Step::S500)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Step, &str)> + '_ {
        Step::ALL
            .into_iter()
            .map(move |step| (step, self.get(step)))
    }

    pub fn is_fallback(&self) -> bool {
        self.shades.iter().map(String::as_str).eq(FALLBACK_SHADES)
    }
}

impl Index<Step> for Palette {
    type Output = str;

    fn index(&self, step: Step) -> &Self::Output {
        self.get(step)
    }
}

impl Serialize for Palette {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.shades.len()))?;
        for (step, color) in self.iter() {
            map.serialize_entry(&step.to_string(), color)?;
        }
        map.end()
    }
}

impl TryFrom<BTreeMap<String, String>> for Palette {
    type Error = PaletteDecodeError;

    fn try_from(mut entries: BTreeMap<String, String>) -> Result<Self, Self::Error> {
        if let Some(key) = entries.keys().find(|key| key.parse::<Step>().is_err()) {
            return Err(UnknownStep(key.clone()).into());
        }

        let mut shades: [String; 11] = Default::default();
        for step in Step::ALL {
            let value = entries
                .remove(&step.to_string())
                .ok_or(PaletteDecodeError::MissingStep(step))?;

            if let Err(source) = parse_hex(&value) {
                return Err(PaletteDecodeError::InvalidColor {
                    step,
                    value,
                    source,
                });
            }

            // Only the base step may keep the caller's formatting.
            if step != Step::S500 && !value.starts_with('#') {
                return Err(PaletteDecodeError::MissingHash { step, value });
            }

            shades[step.index()] = value;
        }

        Ok(Self { shades })
    }
}

/// Expands `base_hex` into a full palette, or returns the fallback palette
/// when it cannot be parsed. Never fails.
pub fn generate_palette(base_hex: &str) -> Palette {
    match try_generate_palette(base_hex) {
        Ok(palette) => palette,
        Err(err) => {
            debug!(%err, input = base_hex, "unparseable base color, using fallback palette");
            Palette::fallback()
        }
    }
}

/// Like [`generate_palette`], but reports unparseable input instead of
/// substituting the fallback.
pub fn try_generate_palette(base_hex: &str) -> Result<Palette, HexParseError> {
    let base = parse_hex(base_hex)?;
    Ok(build(base, base_hex))
}

fn build(base: Rgb, base_hex: &str) -> Palette {
    let shades = Step::ALL.map(|step| match step.recipe() {
        Recipe::Tint(weight) => tint(base, weight).to_hex(),
        Recipe::Base => base_hex.to_string(),
        Recipe::Shade(weight) => shade(base, weight).to_hex(),
    });

    Palette { shades }
}
