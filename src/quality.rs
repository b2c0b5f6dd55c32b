//! Post-production quality audit of a committed store.
//!
//! Commit-time validation guarantees per-event integrity; this audit re-checks
//! the merged store as a whole, the way a consumer would see it, and reports
//! per-check results instead of failing fast. It is meant for production
//! sign-off and debugging, not for the hot path.

use std::fmt;

use crate::batch::DerivedTables;

/// Outcome of a single audit check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckStatus {
    /// The check passed.
    Ok,
    /// The check passed with a caveat worth a human look.
    Warning(String),
    /// The check failed.
    Failed(String),
}

/// A single named audit check with its outcome.
#[derive(Debug, Clone)]
pub struct QualityCheck {
    /// Short name of the check.
    pub name: &'static str,
    /// Outcome.
    pub status: CheckStatus,
}

/// Collected results of one audit run.
#[derive(Debug, Clone, Default)]
pub struct QualityReport {
    /// All checks, in execution order.
    pub checks: Vec<QualityCheck>,
}

impl QualityReport {
    fn push(&mut self, name: &'static str, status: CheckStatus) {
        if let CheckStatus::Failed(reason) = &status {
            log::warn!("quality check '{name}' failed: {reason}");
        }
        self.checks.push(QualityCheck { name, status });
    }

    /// Whether no check failed. Warnings do not fail the report.
    pub fn is_passing(&self) -> bool {
        !self
            .checks
            .iter()
            .any(|c| matches!(c.status, CheckStatus::Failed(_)))
    }

    /// Warnings raised by the audit.
    pub fn warnings(&self) -> impl Iterator<Item = &QualityCheck> {
        self.checks
            .iter()
            .filter(|c| matches!(c.status, CheckStatus::Warning(_)))
    }
}

impl fmt::Display for QualityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "quality report: {} checks, {}",
            self.checks.len(),
            if self.is_passing() { "passing" } else { "FAILING" }
        )?;
        for check in &self.checks {
            match &check.status {
                CheckStatus::Ok => writeln!(f, "  [ok]   {}", check.name)?,
                CheckStatus::Warning(reason) => {
                    writeln!(f, "  [warn] {}: {}", check.name, reason)?
                }
                CheckStatus::Failed(reason) => {
                    writeln!(f, "  [FAIL] {}: {}", check.name, reason)?
                }
            }
        }
        Ok(())
    }
}

/// Audits a committed store.
///
/// Covers companion-table alignment, reference ranges, the children relation
/// and heavy-flavor prong consistency. A mis-association tag (`Fake`,
/// `WrongCollision`) that still carries a truth label is reported as a
/// warning: the state is legal but worth a look during MC validation.
pub fn audit(tables: &DerivedTables) -> QualityReport {
    let mut report = QualityReport::default();

    check_companions(tables, &mut report);
    check_collision_refs(tables, &mut report);
    check_children(tables, &mut report);
    check_labels(tables, &mut report);
    check_hf(tables, &mut report);

    report
}

fn check_companions(tables: &DerivedTables, report: &mut QualityReport) {
    let collisions = tables.collisions().len();
    let particles = tables.particles().len();

    let mismatches: Vec<String> = [
        ("collision_masks", tables.masks().len(), collisions),
        ("downsample", tables.downsample().len(), collisions),
        ("hashes", tables.hash_bins().len(), collisions),
        ("ext_particles", tables.ext_particles().len(), particles),
        ("track_refs", tables.track_ids().len(), particles),
        ("mc_labels", tables.labels().len(), particles),
        ("ext_mc_labels", tables.ext_labels().len(), particles),
        (
            "hf_candidates_mc",
            tables.hf_candidate_mc().len(),
            tables.hf_candidates().len(),
        ),
    ]
    .iter()
    .filter(|(_, rows, expected)| rows != expected)
    .map(|(table, rows, expected)| format!("{table}: {rows} rows, expected {expected}"))
    .collect();

    let status = if mismatches.is_empty() {
        CheckStatus::Ok
    } else {
        CheckStatus::Failed(mismatches.join("; "))
    };
    report.push("companion alignment", status);
}

fn check_collision_refs(tables: &DerivedTables, report: &mut QualityReport) {
    let collisions = tables.collisions().len() as u32;

    let bad_particles = tables
        .particles()
        .iter()
        .filter(|p| p.collision_id >= collisions)
        .count();
    let bad_candidates = tables
        .hf_candidates()
        .iter()
        .filter(|c| c.collision_id >= collisions)
        .count();
    let bad_generated = tables
        .hf_mc_gen()
        .iter()
        .filter(|g| g.collision_id >= collisions)
        .count();

    let status = if bad_particles + bad_candidates + bad_generated == 0 {
        CheckStatus::Ok
    } else {
        CheckStatus::Failed(format!(
            "dangling collision references: {bad_particles} particles, \
             {bad_candidates} hf candidates, {bad_generated} generated rows"
        ))
    };
    report.push("collision references", status);
}

fn check_children(tables: &DerivedTables, report: &mut QualityReport) {
    let mut violations = Vec::new();
    for (index, particle) in tables.particles().iter().enumerate() {
        if particle.children.len() > 2 {
            violations.push(format!("row {index}: {} children", particle.children.len()));
            continue;
        }
        for &child in &particle.children {
            let child = child as usize;
            if child >= index {
                violations.push(format!("row {index}: child {child} is not an earlier row"));
            } else if tables.particles()[child].collision_id != particle.collision_id {
                violations.push(format!("row {index}: child {child} in another collision"));
            }
        }
    }

    let status = if violations.is_empty() {
        CheckStatus::Ok
    } else {
        CheckStatus::Failed(violations.join("; "))
    };
    report.push("children relation", status);
}

fn check_labels(tables: &DerivedTables, report: &mut QualityReport) {
    let mc_rows = tables.mc_particles().len() as u32;
    let ext_mc_rows = tables.ext_mc_particles().len() as u32;

    let dangling = tables
        .labels()
        .iter()
        .filter_map(|l| l.index())
        .filter(|&i| i >= mc_rows)
        .count()
        + tables
            .ext_labels()
            .iter()
            .filter_map(|l| l.index())
            .filter(|&i| i >= ext_mc_rows)
            .count();
    let status = if dangling == 0 {
        CheckStatus::Ok
    } else {
        CheckStatus::Failed(format!("{dangling} labels point past the truth tables"))
    };
    report.push("label ranges", status);

    // dangling labels were already reported above; skip them here
    let tagged = tables
        .labels()
        .iter()
        .filter_map(|l| l.index())
        .filter_map(|i| tables.mc_particles().get(i as usize))
        .filter(|mc| !mc.origin.is_genuine_match())
        .count();
    let status = if tagged == 0 {
        CheckStatus::Ok
    } else {
        CheckStatus::Warning(format!(
            "{tagged} labeled particles carry a mis-association origin tag"
        ))
    };
    report.push("mis-association labels", status);
}

fn check_hf(tables: &DerivedTables, report: &mut QualityReport) {
    let inconsistent = tables
        .hf_candidates()
        .iter()
        .filter(|c| !c.third_prong_consistent())
        .count();
    let status = if inconsistent == 0 {
        CheckStatus::Ok
    } else {
        CheckStatus::Failed(format!(
            "{inconsistent} candidates with half-set third-prong columns"
        ))
    };
    report.push("third-prong consistency", status);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::EventBuilder;
    use crate::mixing::MixingBinning;
    use crate::selection::CutContainer;
    use crate::tables::{
        Collision, ExtParticle, McParticle, Particle, ParticleOriginMcTruth, ParticleType,
    };

    fn collision() -> Collision {
        Collision {
            pos_z: 1.0,
            mult_v0m: 13.0,
            mult_ntr: 10,
            sphericity: 0.5,
            mag_field: 0.5,
        }
    }

    fn track() -> Particle {
        Particle {
            collision_id: 0,
            pt: 1.0,
            eta: 0.2,
            phi: 1.0,
            part_type: ParticleType::Track,
            cut: CutContainer::from_bits(1),
            pid_cut: CutContainer::EMPTY,
            temp_fit_var: 0.0,
            children: Vec::new(),
            m_lambda: 0.0,
            m_anti_lambda: 0.0,
            m_kaon: 0.0,
        }
    }

    #[test]
    fn test_empty_store_passes() {
        let report = audit(&DerivedTables::new());
        assert!(report.is_passing());
        assert_eq!(report.warnings().count(), 0);
    }

    #[test]
    fn test_committed_store_passes() {
        let mut tables = DerivedTables::new();
        let mut event = EventBuilder::new(collision());
        let a = event
            .add_particle(track(), ExtParticle::default(), 1, &[])
            .expect("a");
        let b = event
            .add_particle(track(), ExtParticle::default(), 2, &[])
            .expect("b");
        event
            .add_particle(
                Particle {
                    part_type: ParticleType::V0,
                    ..track()
                },
                ExtParticle::default(),
                -1,
                &[a, b],
            )
            .expect("v0");
        tables
            .commit(event, &MixingBinning::default())
            .expect("commit");

        let report = audit(&tables);
        assert!(report.is_passing(), "{report}");
    }

    #[test]
    fn test_fake_label_is_a_warning_not_a_failure() {
        let mut tables = DerivedTables::new();
        let mut event = EventBuilder::new(collision());
        let p = event
            .add_particle(track(), ExtParticle::default(), 1, &[])
            .expect("particle");
        let mc = event.add_mc_particle(
            McParticle {
                origin: ParticleOriginMcTruth::Fake,
                pdg_code: 211,
                pt: 1.0,
                eta: 0.1,
                phi: 2.0,
            },
            None,
        );
        event.label_particle(p, mc).expect("label");
        tables
            .commit(event, &MixingBinning::default())
            .expect("commit");

        let report = audit(&tables);
        assert!(report.is_passing());
        assert_eq!(report.warnings().count(), 1);
    }

    #[test]
    fn test_report_display() {
        let report = audit(&DerivedTables::new());
        let text = report.to_string();
        assert!(text.contains("quality report"));
        assert!(text.contains("[ok]"));
    }
}
