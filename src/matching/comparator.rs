use crate::error::MatchError;

use super::signature::{MeshSignature, Signature, SolidSignature};

/// One ordered, short-circuiting comparison stage. Gates run cheapest first;
/// a candidate fails overall at the first gate it fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    /// Volume difference within tolerance.
    Volume,
    /// Surface-area difference within tolerance.
    Area,
    /// Edge count and total edge length (solids), or face and vertex counts
    /// (meshes).
    Structure,
    /// Rank-wise comparison of the sorted edge-start distance multisets.
    /// Solids only.
    EdgeDistances,
}

/// Tests whether a candidate signature matches the reference under an
/// absolute tolerance.
///
/// All tolerance comparisons are strict `<`. For mesh signatures the volume
/// and area gates widen by `reference.area * tol`, compensating for the lower
/// precision of mesh mass-property integration — a tuned heuristic inherited
/// from long use, deliberately asymmetric with solids and deliberately based
/// on the reference area in both gates.
///
/// # Errors
///
/// Returns [`MatchError::KindMismatch`] if the signatures are of different
/// kinds. Mixed-kind comparison is a programming error, not a non-match.
pub fn matches(reference: &Signature, candidate: &Signature, tol: f64) -> Result<bool, MatchError> {
    Ok(first_failing_gate(reference, candidate, tol)?.is_none())
}

/// Returns the first gate the candidate fails, or `None` on a full match.
///
/// Exposes the cascade's short-circuit order: gates after the returned one
/// are never evaluated.
///
/// # Errors
///
/// Returns [`MatchError::KindMismatch`] if the signatures are of different
/// kinds.
pub fn first_failing_gate(
    reference: &Signature,
    candidate: &Signature,
    tol: f64,
) -> Result<Option<Gate>, MatchError> {
    match (reference, candidate) {
        (Signature::Solid(reference), Signature::Solid(candidate)) => {
            Ok(solid_gates(reference, candidate, tol))
        }
        (Signature::Mesh(reference), Signature::Mesh(candidate)) => {
            Ok(mesh_gates(reference, candidate, tol))
        }
        _ => Err(MatchError::KindMismatch {
            reference: reference.kind(),
            candidate: candidate.kind(),
        }),
    }
}

fn solid_gates(reference: &SolidSignature, candidate: &SolidSignature, tol: f64) -> Option<Gate> {
    if (candidate.volume - reference.volume).abs() >= tol {
        return Some(Gate::Volume);
    }
    if (candidate.area - reference.area).abs() >= tol {
        return Some(Gate::Area);
    }
    if candidate.edge_count != reference.edge_count
        || (candidate.total_edge_length - reference.total_edge_length).abs() >= tol
    {
        return Some(Gate::Structure);
    }
    if !distance_multisets_match(
        &reference.edge_start_distances,
        &candidate.edge_start_distances,
        tol,
    ) {
        return Some(Gate::EdgeDistances);
    }
    None
}

fn mesh_gates(reference: &MeshSignature, candidate: &MeshSignature, tol: f64) -> Option<Gate> {
    // Mesh mass-property slack; both terms derive from the reference area.
    let err = reference.area * tol;

    if (candidate.volume - reference.volume).abs() >= tol + err {
        return Some(Gate::Volume);
    }
    if (candidate.area - reference.area).abs() >= tol + err {
        return Some(Gate::Area);
    }
    if candidate.face_count != reference.face_count
        || candidate.vertex_count != reference.vertex_count
    {
        return Some(Gate::Structure);
    }
    None
}

/// Tolerant multiset equality: sorts copies of both sequences and requires
/// every rank-wise difference to stay under `tol`. Order-independent, so two
/// solids whose edges are enumerated differently still match.
fn distance_multisets_match(reference: &[f64], candidate: &[f64], tol: f64) -> bool {
    if reference.len() != candidate.len() {
        return false;
    }

    let mut reference = reference.to_vec();
    let mut candidate = candidate.to_vec();
    reference.sort_unstable_by(f64::total_cmp);
    candidate.sort_unstable_by(f64::total_cmp);

    reference
        .iter()
        .zip(&candidate)
        .all(|(a, b)| (a - b).abs() < tol)
}
