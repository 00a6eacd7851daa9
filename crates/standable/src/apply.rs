//! Result application: writing a classification onto per-face material slots.

use standable_core::{ClassificationResult, MarkerSlots, MeshSink, Result, StandableError};

/// Counts of faces marked by [`apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ApplyReport {
    pub standable_marked: usize,
    pub non_standable_marked: usize,
}

impl ApplyReport {
    /// Total number of faces marked.
    pub fn total(&self) -> usize {
        self.standable_marked + self.non_standable_marked
    }
}

/// Assigns the standable / non-standable marker slot to every face of `sink`.
///
/// Standable faces are marked first, then non-standable ones. Before each write
/// the target slot is checked; if it is absent the function stops with
/// `MissingMaterialSlot`, reporting how many faces were already marked.
/// Geometry is never touched.
pub fn apply<S: MeshSink + ?Sized>(
    sink: &mut S,
    result: &ClassificationResult,
    slots: MarkerSlots,
) -> Result<ApplyReport> {
    if sink.face_count() != result.face_count() {
        return Err(StandableError::SizeMismatch {
            expected: sink.face_count(),
            actual: result.face_count(),
        });
    }

    let mut report = ApplyReport::default();
    let slot_count = sink.material_slot_count();

    for &face in result.standable() {
        if slots.standable >= slot_count {
            return Err(StandableError::MissingMaterialSlot {
                slot: slots.standable,
                marked: report.total(),
            });
        }
        sink.set_face_material(face, slots.standable)?;
        report.standable_marked += 1;
    }

    for &face in result.non_standable() {
        if slots.non_standable >= slot_count {
            return Err(StandableError::MissingMaterialSlot {
                slot: slots.non_standable,
                marked: report.total(),
            });
        }
        sink.set_face_material(face, slots.non_standable)?;
        report.non_standable_marked += 1;
    }

    log::debug!(
        "marked {} standable and {} non-standable faces",
        report.standable_marked,
        report.non_standable_marked
    );
    Ok(report)
}
