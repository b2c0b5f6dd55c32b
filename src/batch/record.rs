//! Arrow `RecordBatch` export of the committed tables.
//!
//! Each table converts independently with its reference schema from
//! [`crate::schema`], so a consumer can materialize only the tables it reads.

use std::sync::Arc;

use arrow::array::{
    ArrayRef, BooleanBuilder, Float32Builder, Int32Builder, Int64Builder, Int8Builder,
    ListBuilder, UInt32Builder, UInt8Builder,
};
use arrow::error::ArrowError;
use arrow::record_batch::RecordBatch;

use crate::schema;
use crate::schema::children_item_field;

use super::{DerivedTables, PairResults};

fn finish_f32<'a>(values: impl Iterator<Item = &'a f32>) -> ArrayRef {
    let mut builder = Float32Builder::new();
    for v in values {
        builder.append_value(*v);
    }
    Arc::new(builder.finish())
}

fn finish_i32<'a>(values: impl Iterator<Item = &'a i32>) -> ArrayRef {
    let mut builder = Int32Builder::new();
    for v in values {
        builder.append_value(*v);
    }
    Arc::new(builder.finish())
}

fn finish_i8(values: impl Iterator<Item = i8>) -> ArrayRef {
    let mut builder = Int8Builder::new();
    for v in values {
        builder.append_value(v);
    }
    Arc::new(builder.finish())
}

fn finish_u8(values: impl Iterator<Item = u8>) -> ArrayRef {
    let mut builder = UInt8Builder::new();
    for v in values {
        builder.append_value(v);
    }
    Arc::new(builder.finish())
}

fn finish_u32(values: impl Iterator<Item = u32>) -> ArrayRef {
    let mut builder = UInt32Builder::new();
    for v in values {
        builder.append_value(v);
    }
    Arc::new(builder.finish())
}

impl DerivedTables {
    /// Converts the collision table to a record batch.
    pub fn collision_batch(&self) -> Result<RecordBatch, ArrowError> {
        RecordBatch::try_new(
            schema::create_collision_schema_arc(),
            vec![
                finish_f32(self.collisions.iter().map(|c| &c.pos_z)),
                finish_f32(self.collisions.iter().map(|c| &c.mult_v0m)),
                finish_i32(self.collisions.iter().map(|c| &c.mult_ntr)),
                finish_f32(self.collisions.iter().map(|c| &c.sphericity)),
                finish_f32(self.collisions.iter().map(|c| &c.mag_field)),
            ],
        )
    }

    /// Converts the 1:1 collision-mask table to a record batch.
    pub fn collision_mask_batch(&self) -> Result<RecordBatch, ArrowError> {
        RecordBatch::try_new(
            schema::create_collision_mask_schema_arc(),
            vec![
                finish_u32(self.masks.iter().map(|m| m.bitmask_track_one)),
                finish_u32(self.masks.iter().map(|m| m.bitmask_track_two)),
                finish_u32(self.masks.iter().map(|m| m.bitmask_track_three)),
            ],
        )
    }

    /// Converts the 1:1 downsampling-flag table to a record batch.
    pub fn downsample_batch(&self) -> Result<RecordBatch, ArrowError> {
        let mut flags = BooleanBuilder::new();
        for &keep in &self.downsample {
            flags.append_value(keep);
        }
        RecordBatch::try_new(
            schema::create_downsample_schema_arc(),
            vec![Arc::new(flags.finish())],
        )
    }

    /// Converts the 1:1 event-mixing hash table to a record batch.
    pub fn hash_batch(&self) -> Result<RecordBatch, ArrowError> {
        RecordBatch::try_new(
            schema::create_hash_schema_arc(),
            vec![finish_i32(self.hash_bins.iter())],
        )
    }

    /// Converts the particle table to a record batch.
    pub fn particle_batch(&self) -> Result<RecordBatch, ArrowError> {
        // the list builder must agree with the schema on the element field
        let mut children = ListBuilder::new(UInt32Builder::new()).with_field(children_item_field());
        for particle in &self.particles {
            for &child in &particle.children {
                children.values().append_value(child);
            }
            children.append(true);
        }

        RecordBatch::try_new(
            schema::create_particle_schema_arc(),
            vec![
                finish_u32(self.particles.iter().map(|p| p.collision_id)),
                finish_f32(self.particles.iter().map(|p| &p.pt)),
                finish_f32(self.particles.iter().map(|p| &p.eta)),
                finish_f32(self.particles.iter().map(|p| &p.phi)),
                finish_u8(self.particles.iter().map(|p| p.part_type.as_u8())),
                finish_u32(self.particles.iter().map(|p| p.cut.bits())),
                finish_u32(self.particles.iter().map(|p| p.pid_cut.bits())),
                finish_f32(self.particles.iter().map(|p| &p.temp_fit_var)),
                Arc::new(children.finish()),
                finish_f32(self.particles.iter().map(|p| &p.m_lambda)),
                finish_f32(self.particles.iter().map(|p| &p.m_anti_lambda)),
                finish_f32(self.particles.iter().map(|p| &p.m_kaon)),
            ],
        )
    }

    /// Converts the 1:1 extended-particle table to a record batch.
    pub fn ext_particle_batch(&self) -> Result<RecordBatch, ArrowError> {
        let rows = &self.ext_particles;
        RecordBatch::try_new(
            schema::create_ext_particle_schema_arc(),
            vec![
                finish_i8(rows.iter().map(|r| r.sign)),
                finish_u8(rows.iter().map(|r| r.tpc_n_cls_found)),
                finish_u8(rows.iter().map(|r| r.tpc_n_cls_findable)),
                finish_u8(rows.iter().map(|r| r.tpc_n_cls_crossed_rows)),
                finish_u8(rows.iter().map(|r| r.tpc_n_cls_shared)),
                finish_f32(rows.iter().map(|r| &r.tpc_inner_param)),
                finish_u8(rows.iter().map(|r| r.its_n_cls)),
                finish_u8(rows.iter().map(|r| r.its_n_cls_inner_barrel)),
                finish_f32(rows.iter().map(|r| &r.dca_xy)),
                finish_f32(rows.iter().map(|r| &r.dca_z)),
                finish_f32(rows.iter().map(|r| &r.tpc_signal)),
                finish_f32(rows.iter().map(|r| &r.tpc_n_sigma_el)),
                finish_f32(rows.iter().map(|r| &r.tpc_n_sigma_pi)),
                finish_f32(rows.iter().map(|r| &r.tpc_n_sigma_ka)),
                finish_f32(rows.iter().map(|r| &r.tpc_n_sigma_pr)),
                finish_f32(rows.iter().map(|r| &r.tpc_n_sigma_de)),
                finish_f32(rows.iter().map(|r| &r.tof_n_sigma_el)),
                finish_f32(rows.iter().map(|r| &r.tof_n_sigma_pi)),
                finish_f32(rows.iter().map(|r| &r.tof_n_sigma_ka)),
                finish_f32(rows.iter().map(|r| &r.tof_n_sigma_pr)),
                finish_f32(rows.iter().map(|r| &r.tof_n_sigma_de)),
                finish_f32(rows.iter().map(|r| &r.daugh_dca)),
                finish_f32(rows.iter().map(|r| &r.trans_radius)),
                finish_f32(rows.iter().map(|r| &r.decay_vtx_x)),
                finish_f32(rows.iter().map(|r| &r.decay_vtx_y)),
                finish_f32(rows.iter().map(|r| &r.decay_vtx_z)),
            ],
        )
    }

    /// Converts the 1:1 track-reference table to a record batch.
    pub fn track_ref_batch(&self) -> Result<RecordBatch, ArrowError> {
        RecordBatch::try_new(
            schema::create_track_ref_schema_arc(),
            vec![finish_i32(self.track_ids.iter())],
        )
    }

    /// Converts the MC-particle table to a record batch.
    pub fn mc_particle_batch(&self) -> Result<RecordBatch, ArrowError> {
        RecordBatch::try_new(
            schema::create_mc_particle_schema_arc(),
            vec![
                finish_u8(self.mc_particles.iter().map(|m| m.origin.as_u8())),
                finish_i32(self.mc_particles.iter().map(|m| &m.pdg_code)),
                finish_f32(self.mc_particles.iter().map(|m| &m.pt)),
                finish_f32(self.mc_particles.iter().map(|m| &m.eta)),
                finish_f32(self.mc_particles.iter().map(|m| &m.phi)),
            ],
        )
    }

    /// Converts the 1:1 extended MC-particle table to a record batch.
    pub fn ext_mc_particle_batch(&self) -> Result<RecordBatch, ArrowError> {
        RecordBatch::try_new(
            schema::create_ext_mc_particle_schema_arc(),
            vec![finish_i32(self.ext_mc_particles.iter().map(|m| &m.mother_pdg))],
        )
    }

    /// Converts the nullable truth-label table to a record batch.
    pub fn mc_label_batch(&self) -> Result<RecordBatch, ArrowError> {
        let mut labels = UInt32Builder::new();
        for label in &self.labels {
            labels.append_option(label.index());
        }
        RecordBatch::try_new(
            schema::create_mc_label_schema_arc(),
            vec![Arc::new(labels.finish())],
        )
    }

    /// Converts the nullable extended-truth-label table to a record batch.
    pub fn ext_mc_label_batch(&self) -> Result<RecordBatch, ArrowError> {
        let mut labels = UInt32Builder::new();
        for label in &self.ext_labels {
            labels.append_option(label.index());
        }
        RecordBatch::try_new(
            schema::create_ext_mc_label_schema_arc(),
            vec![Arc::new(labels.finish())],
        )
    }

    /// Converts the heavy-flavor candidate table to a record batch.
    pub fn hf_candidate_batch(&self) -> Result<RecordBatch, ArrowError> {
        let rows = &self.hf_candidates;

        let mut prong2_id = Int32Builder::new();
        let mut prong2_pt = Float32Builder::new();
        let mut prong2_eta = Float32Builder::new();
        let mut prong2_phi = Float32Builder::new();
        for row in rows {
            prong2_id.append_option(row.prong2_id);
            prong2_pt.append_option(row.prong2_pt);
            prong2_eta.append_option(row.prong2_eta);
            prong2_phi.append_option(row.prong2_phi);
        }

        RecordBatch::try_new(
            schema::create_hf_candidate_schema_arc(),
            vec![
                finish_u32(rows.iter().map(|r| r.collision_id)),
                finish_i8(rows.iter().map(|r| r.charge)),
                finish_i32(rows.iter().map(|r| &r.prong0_id)),
                finish_i32(rows.iter().map(|r| &r.prong1_id)),
                Arc::new(prong2_id.finish()),
                finish_f32(rows.iter().map(|r| &r.prong0_pt)),
                finish_f32(rows.iter().map(|r| &r.prong1_pt)),
                Arc::new(prong2_pt.finish()),
                finish_f32(rows.iter().map(|r| &r.prong0_eta)),
                finish_f32(rows.iter().map(|r| &r.prong1_eta)),
                Arc::new(prong2_eta.finish()),
                finish_f32(rows.iter().map(|r| &r.prong0_phi)),
                finish_f32(rows.iter().map(|r| &r.prong1_phi)),
                Arc::new(prong2_phi.finish()),
                finish_i8(rows.iter().map(|r| r.candidate_sel_flag)),
                finish_f32(rows.iter().map(|r| &r.bdt_bkg)),
                finish_f32(rows.iter().map(|r| &r.bdt_prompt)),
                finish_f32(rows.iter().map(|r| &r.bdt_fd)),
                finish_f32(rows.iter().map(|r| &r.m)),
                finish_f32(rows.iter().map(|r| &r.pt)),
                finish_f32(rows.iter().map(|r| &r.p)),
                finish_f32(rows.iter().map(|r| &r.eta)),
                finish_f32(rows.iter().map(|r| &r.phi)),
                finish_f32(rows.iter().map(|r| &r.y)),
            ],
        )
    }

    /// Converts the nullable 1:1 heavy-flavor MC companion table to a record
    /// batch.
    pub fn hf_candidate_mc_batch(&self) -> Result<RecordBatch, ArrowError> {
        let mut flag_mc = Int8Builder::new();
        let mut origin_mc_rec = Int8Builder::new();
        for companion in &self.hf_candidate_mc {
            flag_mc.append_option(companion.map(|c| c.flag_mc));
            origin_mc_rec.append_option(companion.map(|c| c.origin_mc_rec));
        }
        RecordBatch::try_new(
            schema::create_hf_candidate_mc_schema_arc(),
            vec![Arc::new(flag_mc.finish()), Arc::new(origin_mc_rec.finish())],
        )
    }

    /// Converts the generator-level heavy-flavor table to a record batch.
    pub fn hf_mc_gen_batch(&self) -> Result<RecordBatch, ArrowError> {
        let rows = &self.hf_mc_gen;
        RecordBatch::try_new(
            schema::create_hf_mc_gen_schema_arc(),
            vec![
                finish_u32(rows.iter().map(|r| r.collision_id)),
                finish_f32(rows.iter().map(|r| &r.pt)),
                finish_f32(rows.iter().map(|r| &r.eta)),
                finish_f32(rows.iter().map(|r| &r.phi)),
                finish_f32(rows.iter().map(|r| &r.y)),
                finish_i8(rows.iter().map(|r| r.flag_mc)),
                finish_i8(rows.iter().map(|r| r.origin_mc_gen)),
            ],
        )
    }
}

impl PairResults {
    /// Converts the pair-result table to a record batch.
    pub fn to_batch(&self) -> Result<RecordBatch, ArrowError> {
        let rows = &self.rows;

        let mut process_type = Int64Builder::new();
        for row in rows {
            process_type.append_value(row.process_type);
        }

        RecordBatch::try_new(
            schema::create_pair_result_schema_arc(),
            vec![
                finish_f32(rows.iter().map(|r| &r.m)),
                finish_f32(rows.iter().map(|r| &r.pt)),
                finish_f32(rows.iter().map(|r| &r.pt_assoc)),
                finish_f32(rows.iter().map(|r| &r.bdt_bkg)),
                finish_f32(rows.iter().map(|r| &r.bdt_prompt)),
                finish_f32(rows.iter().map(|r| &r.bdt_fd)),
                finish_f32(rows.iter().map(|r| &r.k_star)),
                finish_f32(rows.iter().map(|r| &r.k_t)),
                finish_f32(rows.iter().map(|r| &r.m_t)),
                finish_i32(rows.iter().map(|r| &r.mult)),
                finish_f32(rows.iter().map(|r| &r.mult_percentile)),
                finish_i8(rows.iter().map(|r| r.pair_sign)),
                Arc::new(process_type.finish()),
            ],
        )
    }
}
