//! # Versioned Naming Conventions
//!
//! The schema stores enums as bare integer tags and selection criteria as
//! bare bits. Their semantic names are conventions that must be versioned
//! *outside* the schema and shipped alongside a production, so that a
//! downstream analysis reading a file from last year resolves bit 3 and tag 2
//! to what they meant back then.
//!
//! This module keeps all display-name lookups out of the core row types and
//! bundles the three required conventions (cut layouts, enum-name maps, and
//! the mixing-binning configuration) into a single serializable
//! [`ConventionManifest`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::mixing::MixingBinning;
use crate::schema::FEMTO_FORMAT_VERSION;
use crate::selection::CutLayout;
use crate::tables::{McType, ParticleOriginMcTruth, ParticleType, TrackType};

/// Display name of a particle type, used for histogram directories.
pub fn particle_type_name(ty: ParticleType) -> &'static str {
    match ty {
        ParticleType::Track => "Tracks",
        ParticleType::V0 => "V0",
        ParticleType::V0Child => "V0Child",
        ParticleType::Cascade => "Cascade",
        ParticleType::CascadeBachelor => "CascadeBachelor",
        ParticleType::CharmHadron => "CharmHadron",
    }
}

/// Histogram name of the template-fit observable for a particle type, i.e.
/// what `temp_fit_var` means for rows of that type. Charm hadrons carry
/// their observables in the heavy-flavor family instead.
pub fn temp_fit_var_name(ty: ParticleType) -> Option<&'static str> {
    match ty {
        ParticleType::Track => Some("/hDCAxy"),
        ParticleType::V0 => Some("/hCPA"),
        ParticleType::V0Child => Some("/hDCAxy"),
        ParticleType::Cascade => Some("/hCPA"),
        ParticleType::CascadeBachelor => Some("/hDCAxy"),
        ParticleType::CharmHadron => None,
    }
}

/// Short display name of a V0-child track type.
pub fn track_type_name(ty: TrackType) -> &'static str {
    match ty {
        TrackType::NoChild => "Trk",
        TrackType::PosChild => "Pos",
        TrackType::NegChild => "Neg",
    }
}

/// Display suffix of an MC-truth origin classification.
pub fn origin_name(origin: ParticleOriginMcTruth) -> &'static str {
    match origin {
        ParticleOriginMcTruth::Primary => "_Primary",
        ParticleOriginMcTruth::Secondary => "_Secondary",
        ParticleOriginMcTruth::Material => "_Material",
        ParticleOriginMcTruth::NotPrimary => "_NotPrimary",
        ParticleOriginMcTruth::Fake => "_Fake",
        ParticleOriginMcTruth::WrongCollision => "_WrongCollision",
        ParticleOriginMcTruth::SecondaryDaughterLambda => "_SecondaryDaughterLambda",
        ParticleOriginMcTruth::SecondaryDaughterSigmaPlus => "_SecondaryDaughterSigmaPlus",
        ParticleOriginMcTruth::Else => "_Else",
    }
}

/// Display suffix distinguishing reconstructed from truth-level output.
pub fn mc_type_suffix(ty: McType) -> &'static str {
    match ty {
        McType::Recon => "",
        McType::Truth => "_MC",
    }
}

/// The externally versioned conventions of one production configuration.
///
/// A manifest is written once per production and consumed by every analysis
/// that reads the derived tables: (a) the bit-position → criterion mappings
/// for `cut` and `pid_cut`, (b) the enum-integer → semantic-name maps, and
/// (c) the mixing-binning configuration. The schema itself never enforces
/// any of these; a mismatch between manifest and tables is a named
/// fragility of the format, caught by convention, not by code.
///
/// # Example
///
/// ```
/// use femtoderived::conventions::ConventionManifest;
/// use femtoderived::mixing::MixingBinning;
/// use femtoderived::selection::CutLayout;
///
/// let mut cuts = CutLayout::new("prod-2024a");
/// cuts.push("pt > 0.5")?;
/// let manifest = ConventionManifest::new(cuts, CutLayout::new("prod-2024a-pid"),
///                                        MixingBinning::default());
/// let json = manifest.to_json()?;
/// let back = ConventionManifest::from_json(&json)?;
/// assert_eq!(back.particle_types["V0"], 1);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConventionManifest {
    /// Version of the derived-table format the production wrote.
    pub format_version: String,
    /// Bit layout of the generic selection container.
    pub cut_layout: CutLayout,
    /// Bit layout of the PID selection container.
    pub pid_cut_layout: CutLayout,
    /// Mixing-binning configuration used for the hash-bin column.
    pub binning: MixingBinning,
    /// Particle-type name → stored tag.
    pub particle_types: BTreeMap<String, u8>,
    /// Track-type name → stored tag.
    pub track_types: BTreeMap<String, u8>,
    /// MC-origin name → stored tag.
    pub origin_types: BTreeMap<String, u8>,
}

impl ConventionManifest {
    /// Bundles the conventions of a production; the enum-name maps are
    /// filled from the closed enumerations of this crate version.
    pub fn new(cut_layout: CutLayout, pid_cut_layout: CutLayout, binning: MixingBinning) -> Self {
        Self {
            format_version: FEMTO_FORMAT_VERSION.to_string(),
            cut_layout,
            pid_cut_layout,
            binning,
            particle_types: ParticleType::ALL
                .iter()
                .map(|&t| (particle_type_name(t).to_string(), t.as_u8()))
                .collect(),
            track_types: TrackType::ALL
                .iter()
                .map(|&t| (track_type_name(t).to_string(), t.as_u8()))
                .collect(),
            origin_types: ParticleOriginMcTruth::ALL
                .iter()
                .map(|&o| (origin_name(o).to_string(), o.as_u8()))
                .collect(),
        }
    }

    /// Serializes the manifest for storage alongside the tables.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Restores a manifest written by [`to_json`](Self::to_json).
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_particle_type_has_a_name() {
        let names: Vec<_> = ParticleType::ALL
            .iter()
            .map(|&t| particle_type_name(t))
            .collect();
        assert_eq!(
            names,
            ["Tracks", "V0", "V0Child", "Cascade", "CascadeBachelor", "CharmHadron"]
        );
    }

    #[test]
    fn temp_fit_var_names_follow_particle_kind() {
        assert_eq!(temp_fit_var_name(ParticleType::Track), Some("/hDCAxy"));
        assert_eq!(temp_fit_var_name(ParticleType::V0), Some("/hCPA"));
        assert_eq!(temp_fit_var_name(ParticleType::CharmHadron), None);
    }

    #[test]
    fn manifest_round_trip_preserves_layouts() {
        let mut cuts = CutLayout::new("prod-test");
        cuts.push("pt > 0.5").ok();
        cuts.push("|eta| < 0.8").ok();
        let mut pid = CutLayout::new("prod-test-pid");
        pid.push("nSigmaTPC(p) < 3").ok();

        let manifest = ConventionManifest::new(cuts, pid, MixingBinning::default());
        let json = manifest.to_json().expect("serialize");
        let back = ConventionManifest::from_json(&json).expect("deserialize");

        assert_eq!(back, manifest);
        assert_eq!(back.cut_layout.bit("|eta| < 0.8"), Some(1));
        assert_eq!(back.particle_types["CharmHadron"], 5);
        assert_eq!(back.origin_types["_Fake"], 4);
        assert_eq!(back.format_version, FEMTO_FORMAT_VERSION);
    }
}
