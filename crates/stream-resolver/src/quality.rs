use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};
use tracing::info;

use crate::error::{ResolveError, Result};
use crate::media::{ResolutionResult, StreamVariant};

/// Label the platform gives to the original, untranscoded rendition.
/// Every live channel carries it, so it doubles as the fallback.
pub const SOURCE_QUALITY: &str = "source";

/// Quality names accepted from callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Quality {
    Best,
    High,
    Medium,
    Low,
    Mobile,
    Audio,
}

impl Quality {
    pub fn parse(input: &str) -> Result<Self> {
        input.trim().parse::<Self>().map_err(|_| {
            ResolveError::invalid_input(format!(
                "unknown quality `{}`, expected one of: {}",
                input.trim(),
                Self::names().join(", ")
            ))
        })
    }

    /// The label this quality carries inside the variant playlist.
    pub fn native_label(self) -> &'static str {
        match self {
            Self::Best => SOURCE_QUALITY,
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::Mobile => "mobile",
            Self::Audio => "audio only",
        }
    }

    pub fn as_str(self) -> &'static str {
        self.into()
    }

    pub fn names() -> Vec<&'static str> {
        Self::iter().map(Self::as_str).collect()
    }
}

/// Picks the variant for `requested`.
///
/// The first variant whose label matches wins. Without a match the *last*
/// `source` variant is returned and `exact_match` is `false`: partner
/// playlists sometimes repeat `source`, and the final entry is the one to use.
pub fn select(variants: &[StreamVariant], requested: Quality) -> Result<ResolutionResult> {
    let target = requested.native_label();
    let mut fallback = None;

    for variant in variants {
        if variant.quality == target {
            return Ok(ResolutionResult {
                selected: variant.clone(),
                exact_match: true,
            });
        }
        if variant.quality == SOURCE_QUALITY {
            fallback = Some(variant);
        }
    }

    match fallback {
        Some(variant) => {
            info!(
                "quality \"{}\" wasn't available, falling back to \"{}\"",
                requested, SOURCE_QUALITY
            );
            Ok(ResolutionResult {
                selected: variant.clone(),
                exact_match: false,
            })
        }
        None => Err(ResolveError::NoQualityAvailable {
            requested: requested.to_string(),
        }),
    }
}
