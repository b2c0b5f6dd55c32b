use super::*;
use crate::selection::CutContainer;

#[test]
fn particle_type_round_trip() {
    for ty in ParticleType::ALL {
        assert_eq!(ParticleType::try_from(ty.as_u8()).ok(), Some(ty));
    }
    assert!(ParticleType::try_from(6).is_err());
    assert!(ParticleType::try_from(255).is_err());
}

#[test]
fn origin_round_trip_and_rejection() {
    for origin in ParticleOriginMcTruth::ALL {
        assert_eq!(
            ParticleOriginMcTruth::try_from(origin.as_u8()).ok(),
            Some(origin)
        );
    }
    let err = ParticleOriginMcTruth::try_from(9).expect_err("out of range");
    assert_eq!(err.value, 9);
    assert_eq!(err.kind, "ParticleOriginMcTruth");
}

#[test]
fn track_type_tags_match_convention() {
    assert_eq!(TrackType::NoChild.as_u8(), 0);
    assert_eq!(TrackType::PosChild.as_u8(), 1);
    assert_eq!(TrackType::NegChild.as_u8(), 2);
    assert!(TrackType::try_from(3).is_err());
}

#[test]
fn mass_hypotheses_only_for_decay_types() {
    assert!(ParticleType::V0.has_mass_hypotheses());
    assert!(ParticleType::Cascade.has_mass_hypotheses());
    assert!(!ParticleType::Track.has_mass_hypotheses());
    assert!(!ParticleType::V0Child.has_mass_hypotheses());
    assert!(!ParticleType::CharmHadron.has_mass_hypotheses());
}

#[test]
fn mc_label_states() {
    assert!(!McLabel::NONE.is_matched());
    assert_eq!(McLabel::NONE.index(), None);

    let label = McLabel::matched(7);
    assert!(label.is_matched());
    assert_eq!(label.index(), Some(7));

    assert_eq!(McLabel::default(), McLabel::NONE);
}

#[test]
fn fake_origin_is_not_a_genuine_match() {
    assert!(!ParticleOriginMcTruth::Fake.is_genuine_match());
    assert!(!ParticleOriginMcTruth::WrongCollision.is_genuine_match());
    assert!(ParticleOriginMcTruth::Primary.is_genuine_match());
    assert!(ParticleOriginMcTruth::SecondaryDaughterLambda.is_genuine_match());
}

#[test]
fn third_prong_consistency() {
    let mut cand = HfCandidate {
        collision_id: 0,
        charge: 1,
        prong0_id: 10,
        prong1_id: 11,
        prong2_id: None,
        prong0_pt: 1.0,
        prong1_pt: 1.2,
        prong2_pt: None,
        prong0_eta: 0.1,
        prong1_eta: -0.2,
        prong2_eta: None,
        prong0_phi: 0.5,
        prong1_phi: 1.5,
        prong2_phi: None,
        candidate_sel_flag: 1,
        bdt_bkg: 0.1,
        bdt_prompt: 0.8,
        bdt_fd: 0.1,
        m: 1.86,
        pt: 2.4,
        p: 3.0,
        eta: 0.0,
        phi: 1.0,
        y: 0.0,
    };
    assert_eq!(cand.prong_count(), 2);
    assert!(cand.third_prong_consistent());

    cand.prong2_id = Some(12);
    assert_eq!(cand.prong_count(), 3);
    assert!(!cand.third_prong_consistent());

    cand.prong2_pt = Some(0.9);
    cand.prong2_eta = Some(0.3);
    cand.prong2_phi = Some(2.0);
    assert!(cand.third_prong_consistent());
}

#[test]
fn particle_masks_are_independent() {
    let particle = Particle {
        collision_id: 0,
        pt: 1.0,
        eta: 0.0,
        phi: 0.0,
        part_type: ParticleType::Track,
        cut: CutContainer::from_bits(0b0110),
        pid_cut: CutContainer::from_bits(0b0001),
        temp_fit_var: 0.01,
        children: Vec::new(),
        m_lambda: 0.0,
        m_anti_lambda: 0.0,
        m_kaon: 0.0,
    };
    assert!(particle.cut.matches(CutContainer::from_bits(0b0010)));
    assert!(!particle.pid_cut.matches(CutContainer::from_bits(0b0010)));
}
