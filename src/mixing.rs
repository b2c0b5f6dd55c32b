//! # Event-Mixing Bins
//!
//! Event mixing pairs particles from different but kinematically similar
//! collisions to build an uncorrelated reference sample. Which collisions are
//! "similar" is decided by a single integer grouping key, the hash bin,
//! computed per collision at commit time: equal bins mean mixing-compatible.
//!
//! The assignment is a pure function of the configured scalar tuple. It must
//! be reproducible for identical inputs and configuration across runs, which
//! rules out randomness, iteration-order dependence and cross-call state.
//! Bin widths are configuration, not constants, and belong to the externally
//! versioned conventions of a production (see
//! [`crate::conventions::ConventionManifest`]).

use serde::{Deserialize, Serialize};

use crate::tables::Collision;

/// Which multiplicity axes enter the mixing key, besides the vertex-z axis
/// that is always included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionBinning {
    /// Bin collisions in number of charged tracks.
    Mult,
    /// Bin collisions in multiplicity percentile.
    MultPercentile,
    /// Bin collisions in both charged-track count and percentile.
    MultMultPercentile,
}

/// Event-mixing binning configuration: the policy plus one bin width per
/// dimension. All widths must be positive and finite; deserialization rejects
/// anything else with [`InvalidBinning`], and the commit path re-checks via
/// [`validate`](MixingBinning::validate) because the fields are public.
///
/// # Example
///
/// ```
/// use femtoderived::mixing::{CollisionBinning, MixingBinning};
/// use femtoderived::tables::Collision;
///
/// let binning = MixingBinning {
///     policy: CollisionBinning::Mult,
///     vertex_width: 2.0,
///     mult_width: 5,
///     percentile_width: 10.0,
/// };
/// let a = Collision { pos_z: 1.0, mult_v0m: 30.0, mult_ntr: 10, sphericity: 0.5, mag_field: 0.5 };
/// let b = Collision { mult_ntr: 10, ..a.clone() };
/// let c = Collision { mult_ntr: 999, ..a.clone() };
/// assert_eq!(binning.hash_bin(&a), binning.hash_bin(&b));
/// assert_ne!(binning.hash_bin(&a), binning.hash_bin(&c));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedMixingBinning")]
pub struct MixingBinning {
    /// Multiplicity axes included in the key.
    pub policy: CollisionBinning,
    /// Bin width of the vertex-z axis (cm).
    pub vertex_width: f32,
    /// Bin width of the charged-track multiplicity axis.
    pub mult_width: i32,
    /// Bin width of the multiplicity-percentile axis.
    pub percentile_width: f32,
}

impl Default for MixingBinning {
    fn default() -> Self {
        Self {
            policy: CollisionBinning::MultMultPercentile,
            vertex_width: 2.0,
            mult_width: 20,
            percentile_width: 10.0,
        }
    }
}

/// Error for a binning configuration whose widths cannot define bins.
#[derive(Debug, Clone, thiserror::Error)]
#[error(
    "mixing bin widths must be positive and finite \
     (vertex {vertex_width}, mult {mult_width}, percentile {percentile_width})"
)]
pub struct InvalidBinning {
    /// Configured vertex-z width.
    pub vertex_width: f32,
    /// Configured charged-track multiplicity width.
    pub mult_width: i32,
    /// Configured multiplicity-percentile width.
    pub percentile_width: f32,
}

#[derive(Deserialize)]
struct UncheckedMixingBinning {
    policy: CollisionBinning,
    vertex_width: f32,
    mult_width: i32,
    percentile_width: f32,
}

impl TryFrom<UncheckedMixingBinning> for MixingBinning {
    type Error = InvalidBinning;

    fn try_from(raw: UncheckedMixingBinning) -> Result<Self, Self::Error> {
        let binning = Self {
            policy: raw.policy,
            vertex_width: raw.vertex_width,
            mult_width: raw.mult_width,
            percentile_width: raw.percentile_width,
        };
        binning.validate()?;
        Ok(binning)
    }
}

impl MixingBinning {
    /// Checks that every configured width can define bins.
    ///
    /// A zero or negative width has no floor-bin interpretation (a zero
    /// integer width would divide by zero). Deserialization rejects such
    /// configurations up front; [`commit`](crate::batch::DerivedTables::commit)
    /// re-checks before binning because the fields are public.
    pub fn validate(&self) -> Result<(), InvalidBinning> {
        let floats_ok = self.vertex_width > 0.0
            && self.vertex_width.is_finite()
            && self.percentile_width > 0.0
            && self.percentile_width.is_finite();
        if floats_ok && self.mult_width > 0 {
            Ok(())
        } else {
            Err(InvalidBinning {
                vertex_width: self.vertex_width,
                mult_width: self.mult_width,
                percentile_width: self.percentile_width,
            })
        }
    }

    /// Computes the mixing bin of a collision.
    ///
    /// Per-dimension indices are floor-assigned (`floor(value / width)`, and
    /// `div_euclid` for the integer axis), so boundary values always land in
    /// the lower bin and never split between adjacent bins. The indices are
    /// folded into a single id with a fixed FNV-style accumulator: identical
    /// tuples always collide (required), distinct tuples may in principle
    /// collide (allowed, bins only gate mixing eligibility).
    pub fn hash_bin(&self, collision: &Collision) -> i32 {
        let mut h = fold(FNV_OFFSET, float_bin(collision.pos_z, self.vertex_width));
        match self.policy {
            CollisionBinning::Mult => {
                h = fold(h, int_bin(collision.mult_ntr, self.mult_width));
            }
            CollisionBinning::MultPercentile => {
                h = fold(h, float_bin(collision.mult_v0m, self.percentile_width));
            }
            CollisionBinning::MultMultPercentile => {
                h = fold(h, int_bin(collision.mult_ntr, self.mult_width));
                h = fold(h, float_bin(collision.mult_v0m, self.percentile_width));
            }
        }
        h as i32
    }
}

const FNV_OFFSET: i64 = 0x0cbf_29ce_8422_2325_u64 as i64;
const FNV_PRIME: i64 = 0x0000_0100_0000_01b3;

fn fold(h: i64, index: i64) -> i64 {
    h.wrapping_mul(FNV_PRIME).wrapping_add(index)
}

fn float_bin(value: f32, width: f32) -> i64 {
    (f64::from(value) / f64::from(width)).floor() as i64
}

fn int_bin(value: i32, width: i32) -> i64 {
    i64::from(value.div_euclid(width))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collision(pos_z: f32, mult_ntr: i32, mult_v0m: f32) -> Collision {
        Collision {
            pos_z,
            mult_v0m,
            mult_ntr,
            sphericity: 0.0,
            mag_field: 0.5,
        }
    }

    fn mult_binning(width: i32) -> MixingBinning {
        MixingBinning {
            policy: CollisionBinning::Mult,
            vertex_width: 2.0,
            mult_width: width,
            percentile_width: 10.0,
        }
    }

    #[test]
    fn equal_tuples_share_a_bin() {
        let binning = mult_binning(5);
        let a = collision(1.3, 10, 30.0);
        let b = collision(1.3, 10, 99.0); // percentile not part of the Mult policy
        assert_eq!(binning.hash_bin(&a), binning.hash_bin(&b));
    }

    #[test]
    fn distant_multiplicities_separate() {
        let binning = mult_binning(5);
        let a = collision(1.3, 10, 30.0);
        let c = collision(1.3, 999, 30.0);
        assert_ne!(binning.hash_bin(&a), binning.hash_bin(&c));
    }

    #[test]
    fn assignment_is_deterministic() {
        let binning = MixingBinning::default();
        let col = collision(-7.2, 42, 17.5);
        let first = binning.hash_bin(&col);
        for _ in 0..100 {
            assert_eq!(binning.hash_bin(&col), first);
        }
    }

    #[test]
    fn boundaries_floor_into_the_lower_bin() {
        let binning = mult_binning(5);
        // mult 9 and 5 share floor index 1; mult 10 starts index 2
        assert_eq!(
            binning.hash_bin(&collision(0.0, 5, 0.0)),
            binning.hash_bin(&collision(0.0, 9, 0.0))
        );
        assert_ne!(
            binning.hash_bin(&collision(0.0, 9, 0.0)),
            binning.hash_bin(&collision(0.0, 10, 0.0))
        );
        // vertex boundary: 2.0 belongs to the bin starting at 2.0
        assert_eq!(
            binning.hash_bin(&collision(2.0, 5, 0.0)),
            binning.hash_bin(&collision(3.9, 5, 0.0))
        );
        assert_ne!(
            binning.hash_bin(&collision(1.9, 5, 0.0)),
            binning.hash_bin(&collision(2.0, 5, 0.0))
        );
    }

    #[test]
    fn negative_values_bin_consistently() {
        let binning = mult_binning(5);
        // div_euclid floors toward negative infinity, same as the float axis
        assert_eq!(
            binning.hash_bin(&collision(-0.1, -3, 0.0)),
            binning.hash_bin(&collision(-1.9, -1, 0.0))
        );
        assert_ne!(
            binning.hash_bin(&collision(-0.1, -3, 0.0)),
            binning.hash_bin(&collision(-0.1, 3, 0.0))
        );
    }

    #[test]
    fn policies_use_their_configured_axes() {
        let base = collision(0.0, 10, 30.0);
        let other_pct = collision(0.0, 10, 55.0);

        let pct = MixingBinning {
            policy: CollisionBinning::MultPercentile,
            ..MixingBinning::default()
        };
        assert_ne!(pct.hash_bin(&base), pct.hash_bin(&other_pct));

        let mult_only = MixingBinning {
            policy: CollisionBinning::Mult,
            ..MixingBinning::default()
        };
        assert_eq!(mult_only.hash_bin(&base), mult_only.hash_bin(&other_pct));
    }

    #[test]
    fn non_positive_widths_fail_validation() {
        let mut binning = MixingBinning::default();
        assert!(binning.validate().is_ok());

        binning.mult_width = 0;
        assert!(binning.validate().is_err());

        binning.mult_width = 20;
        binning.vertex_width = -1.0;
        assert!(binning.validate().is_err());

        binning.vertex_width = f32::NAN;
        assert!(binning.validate().is_err());

        binning.vertex_width = 2.0;
        binning.percentile_width = 0.0;
        assert!(binning.validate().is_err());
    }

    #[test]
    fn deserialization_rejects_degenerate_widths() {
        let zero_mult =
            r#"{"policy":"Mult","vertex_width":2.0,"mult_width":0,"percentile_width":10.0}"#;
        assert!(serde_json::from_str::<MixingBinning>(zero_mult).is_err());

        let negative_vertex =
            r#"{"policy":"Mult","vertex_width":-2.0,"mult_width":5,"percentile_width":10.0}"#;
        assert!(serde_json::from_str::<MixingBinning>(negative_vertex).is_err());

        let valid =
            r#"{"policy":"Mult","vertex_width":2.0,"mult_width":5,"percentile_width":10.0}"#;
        let binning = serde_json::from_str::<MixingBinning>(valid).expect("valid widths");
        assert_eq!(binning.mult_width, 5);
    }

    #[test]
    fn config_json_round_trip() {
        let binning = MixingBinning::default();
        let json = serde_json::to_string(&binning).expect("serialize");
        let back: MixingBinning = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, binning);
        assert_eq!(back.hash_bin(&collision(3.0, 7, 12.0)),
                   binning.hash_bin(&collision(3.0, 7, 12.0)));
    }
}
