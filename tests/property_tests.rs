//! Property-based tests of the data-model contracts that must hold for
//! arbitrary inputs: mask filtering, kinematic derivations and mixing-bin
//! determinism.

use proptest::prelude::*;

use femtoderived::kinematics::Kinematics;
use femtoderived::mixing::{CollisionBinning, MixingBinning};
use femtoderived::selection::CutContainer;
use femtoderived::tables::{Collision, Particle, ParticleType};

fn particle(pt: f32, eta: f32, phi: f32, cut: u32) -> Particle {
    Particle {
        collision_id: 0,
        pt,
        eta,
        phi,
        part_type: ParticleType::Track,
        cut: CutContainer::from_bits(cut),
        pid_cut: CutContainer::EMPTY,
        temp_fit_var: 0.0,
        children: Vec::new(),
        m_lambda: 0.0,
        m_anti_lambda: 0.0,
        m_kaon: 0.0,
    }
}

fn binning_strategy() -> impl Strategy<Value = MixingBinning> {
    (
        prop_oneof![
            Just(CollisionBinning::Mult),
            Just(CollisionBinning::MultPercentile),
            Just(CollisionBinning::MultMultPercentile),
        ],
        0.5f32..10.0,
        1i32..50,
        0.5f32..25.0,
    )
        .prop_map(|(policy, vertex_width, mult_width, percentile_width)| MixingBinning {
            policy,
            vertex_width,
            mult_width,
            percentile_width,
        })
}

fn collision_strategy() -> impl Strategy<Value = Collision> {
    (-12.0f32..12.0, 0.0f32..100.0, -50i32..500, 0.0f32..1.0).prop_map(
        |(pos_z, mult_v0m, mult_ntr, sphericity)| Collision {
            pos_z,
            mult_v0m,
            mult_ntr,
            sphericity,
            mag_field: 0.5,
        },
    )
}

proptest! {
    /// `(m & R) == R` is exactly "every required bit is set".
    #[test]
    fn mask_matches_equals_per_bit_conjunction(mask: u32, required: u32) {
        let container = CutContainer::from_bits(mask);
        let required = CutContainer::from_bits(required);

        let by_bits = (0u8..32)
            .filter(|&b| required.test(b))
            .all(|b| container.test(b));
        prop_assert_eq!(container.matches(required), by_bits);
    }

    /// A mask always passes itself and the empty requirement; requiring one
    /// extra unset bit always fails.
    #[test]
    fn mask_matching_edge_requirements(mask: u32) {
        let container = CutContainer::from_bits(mask);
        prop_assert!(container.matches(container));
        prop_assert!(container.matches(CutContainer::EMPTY));

        if mask != u32::MAX {
            let unset = (0u8..32).find(|&b| !container.test(b)).unwrap();
            let stricter = CutContainer::from_bits(mask).with(unset);
            prop_assert!(!container.matches(stricter));
        }
    }

    /// Derived momentum components recombine to the stored triple.
    #[test]
    fn kinematics_recombine(
        pt in 0.01f32..50.0,
        eta in -2.0f32..2.0,
        phi in 0.0f32..std::f32::consts::TAU,
    ) {
        let p = particle(pt, eta, phi, 0);

        let pt_back = (p.px() * p.px() + p.py() * p.py()).sqrt();
        prop_assert!((pt_back - pt).abs() <= 1e-3 * pt.max(1.0));

        let p_back = (p.px() * p.px() + p.py() * p.py() + p.pz() * p.pz()).sqrt();
        prop_assert!((p_back - p.p()).abs() <= 1e-3 * p.p().max(1.0));

        // theta and pz agree on the hemisphere
        prop_assert_eq!(p.pz() > 0.0, p.theta() < std::f32::consts::FRAC_PI_2);
    }

    /// Bin assignment is a pure function: identical tuples always collide,
    /// and values inside one vertex bin never split.
    #[test]
    fn hash_bin_is_deterministic(
        binning in binning_strategy(),
        collision in collision_strategy(),
    ) {
        let first = binning.hash_bin(&collision);
        prop_assert_eq!(binning.hash_bin(&collision), first);
        prop_assert_eq!(binning.hash_bin(&collision.clone()), first);
    }

    /// Collisions whose per-dimension floor indices agree share a bin.
    #[test]
    fn hash_bin_respects_floor_widths(
        binning in binning_strategy(),
        collision in collision_strategy(),
        jitter in 0.0f32..1.0,
    ) {
        // move pos_z inside its own bin
        let lower = (collision.pos_z / binning.vertex_width).floor() * binning.vertex_width;
        let shifted = Collision {
            pos_z: lower + jitter * binning.vertex_width * 0.999,
            ..collision.clone()
        };
        // float rounding may push the shifted value across the boundary
        let index = |z: f32| (f64::from(z) / f64::from(binning.vertex_width)).floor();
        let same_index = index(shifted.pos_z) == index(collision.pos_z);
        if same_index {
            prop_assert_eq!(binning.hash_bin(&shifted), binning.hash_bin(&collision));
        }
    }
}
