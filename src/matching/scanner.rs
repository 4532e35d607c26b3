use std::time::{Duration, Instant};

use tracing::{debug, trace};

use crate::adapter::GeometryAdapter;
use crate::error::MatchError;
use crate::topology::ShapeKind;

use super::comparator;
use super::signature::{ExtractSignature, Signature};

/// One candidate in a scan: an identifier to report on match, a handle to
/// query geometry through, and the declared shape kind.
///
/// Candidate lists are expected to be deduplicated and to exclude the
/// reference shape; the scanner does neither.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<I, H> {
    /// Identifier reported in the [`MatchSet`].
    pub id: I,
    /// Adapter handle for the candidate's geometry.
    pub shape: H,
    /// Declared kind; must equal the reference signature's kind.
    pub kind: ShapeKind,
}

impl<I, H> Candidate<I, H> {
    /// Creates a new candidate entry.
    #[must_use]
    pub fn new(id: I, shape: H, kind: ShapeKind) -> Self {
        Self { id, shape, kind }
    }
}

/// The ordered identifiers of candidates whose signature matched the
/// reference. Built once per scan, in candidate input order, and immutable
/// afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchSet<I> {
    ids: Vec<I>,
}

impl<I> MatchSet<I> {
    /// Returns the matched identifiers in input order.
    #[must_use]
    pub fn ids(&self) -> &[I] {
        &self.ids
    }

    /// Returns the number of matches.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` if nothing matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterates over the matched identifiers.
    pub fn iter(&self) -> std::slice::Iter<'_, I> {
        self.ids.iter()
    }
}

impl<'a, I> IntoIterator for &'a MatchSet<I> {
    type Item = &'a I;
    type IntoIter = std::slice::Iter<'a, I>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Progress event emitted after each candidate is handled, whether it
/// matched, failed a gate, or was skipped. Observation never affects the
/// scan's result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanProgress {
    /// Zero-based position of the candidate in the input list.
    pub index: usize,
    /// Total number of candidates in the scan.
    pub total: usize,
    /// Whether this candidate matched the reference.
    pub matched: bool,
}

/// Summary of one completed scan.
#[derive(Debug, Clone)]
pub struct ScanReport<I> {
    /// Identifiers of the matching candidates, in input order.
    pub matches: MatchSet<I>,
    /// Number of candidates consumed, including skipped ones.
    pub checked: usize,
    /// Wall time spent scanning.
    pub elapsed: Duration,
}

/// Scans a candidate list for shapes congruent to a reference signature.
///
/// Candidates are handled strictly in input order. A candidate that is not a
/// closed boundary is skipped before any mass-property extraction is paid
/// for; a candidate whose extraction fails is skipped silently. The full
/// candidate list is always consumed; no partial result is ever returned.
pub struct FindCongruent<'a, I, H> {
    reference: &'a Signature,
    candidates: Vec<Candidate<I, H>>,
    tol: f64,
}

impl<'a, I: Clone, H: Copy> FindCongruent<'a, I, H> {
    /// Creates a new `FindCongruent` scan against a reference signature,
    /// using the caller's absolute model tolerance.
    #[must_use]
    pub fn new(reference: &'a Signature, candidates: Vec<Candidate<I, H>>, tol: f64) -> Self {
        Self {
            reference,
            candidates,
            tol,
        }
    }

    /// Executes the scan without progress observation.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::KindMismatch`] if any candidate's declared kind
    /// differs from the reference signature's kind. The check runs before any
    /// candidate is examined.
    pub fn execute<A>(&self, adapter: &A) -> Result<ScanReport<I>, MatchError>
    where
        A: GeometryAdapter<Handle = H>,
    {
        self.execute_with_progress(adapter, |_| {})
    }

    /// Executes the scan, invoking `progress` after each candidate.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::KindMismatch`] if any candidate's declared kind
    /// differs from the reference signature's kind.
    pub fn execute_with_progress<A, F>(
        &self,
        adapter: &A,
        mut progress: F,
    ) -> Result<ScanReport<I>, MatchError>
    where
        A: GeometryAdapter<Handle = H>,
        F: FnMut(ScanProgress),
    {
        let kind = self.reference.kind();
        for candidate in &self.candidates {
            if candidate.kind != kind {
                return Err(MatchError::KindMismatch {
                    reference: kind,
                    candidate: candidate.kind,
                });
            }
        }

        let start = Instant::now();
        let total = self.candidates.len();
        debug!(total, ?kind, "scanning candidates");

        let mut ids = Vec::new();
        for (index, candidate) in self.candidates.iter().enumerate() {
            let mut matched = false;
            if adapter.is_closed(candidate.shape) {
                match ExtractSignature::new(candidate.shape, candidate.kind).execute(adapter) {
                    Ok(signature) => {
                        matched = comparator::matches(self.reference, &signature, self.tol)?;
                    }
                    Err(failure) => {
                        debug!(index, error = %failure, "skipping candidate after failed extraction");
                    }
                }
            } else {
                trace!(index, "skipping candidate that is not closed");
            }

            if matched {
                ids.push(candidate.id.clone());
            }
            progress(ScanProgress {
                index,
                total,
                matched,
            });
        }

        let elapsed = start.elapsed();
        debug!(matched = ids.len(), ?elapsed, "scan complete");

        Ok(ScanReport {
            matches: MatchSet { ids },
            checked: total,
            elapsed,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::adapter::BoundaryEdge;
    use crate::math::{Point3, Vector3};
    use crate::matching::SolidSignature;
    use crate::operations::creation::{MakeBox, MakeMesh, MakeMeshBox};
    use crate::operations::transform::{Rotate, Translate};
    use crate::topology::{ModelStore, Shape};

    const TOL: f64 = 1e-6;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn extract(store: &ModelStore, shape: Shape) -> Signature {
        ExtractSignature::new(shape, shape.kind()).execute(store).unwrap()
    }

    #[test]
    fn finds_congruent_solids_in_input_order() {
        let mut store = ModelStore::new();
        let reference = MakeBox::new(p(0.0, 0.0, 0.0), p(1.0, 1.0, 1.0))
            .execute(&mut store)
            .unwrap();

        // Same cube, moved far away and rotated by an odd angle.
        let moved = MakeBox::new(p(0.0, 0.0, 0.0), p(1.0, 1.0, 1.0))
            .execute(&mut store)
            .unwrap();
        Translate::new(Shape::Solid(moved), Vector3::new(8.0, -3.0, 2.0))
            .execute(&mut store)
            .unwrap();
        Rotate::new(
            Shape::Solid(moved),
            p(8.5, -2.5, 2.5),
            Vector3::new(1.0, 2.0, 3.0),
            0.7,
        )
        .execute(&mut store)
        .unwrap();

        // Slightly scaled copy: volume differs by ~3e-3.
        let scaled = MakeBox::new(p(0.0, 0.0, 0.0), p(1.001, 1.001, 1.001))
            .execute(&mut store)
            .unwrap();

        // Congruent but with one face removed from the shell.
        let open = MakeBox::new(p(0.0, 0.0, 0.0), p(1.0, 1.0, 1.0))
            .execute(&mut store)
            .unwrap();
        let open_shell = store.solid(open).unwrap().shell;
        store.shell_mut(open_shell).unwrap().faces.pop();

        // A second congruent copy, translated only.
        let shifted = MakeBox::new(p(4.0, 4.0, 4.0), p(5.0, 5.0, 5.0))
            .execute(&mut store)
            .unwrap();

        let reference_signature = extract(&store, Shape::Solid(reference));
        let candidates = vec![
            Candidate::new(10_u32, Shape::Solid(moved), ShapeKind::Solid),
            Candidate::new(20, Shape::Solid(scaled), ShapeKind::Solid),
            Candidate::new(30, Shape::Solid(open), ShapeKind::Solid),
            Candidate::new(40, Shape::Solid(shifted), ShapeKind::Solid),
        ];

        let report = FindCongruent::new(&reference_signature, candidates, TOL)
            .execute(&store)
            .unwrap();

        assert_eq!(report.matches.ids(), &[10, 40]);
        assert_eq!(report.checked, 4);
    }

    #[test]
    fn finds_congruent_meshes_and_skips_degenerates() {
        let mut store = ModelStore::new();
        let reference = MakeMeshBox::new(p(0.0, 0.0, 0.0), p(1.0, 2.0, 3.0))
            .execute(&mut store)
            .unwrap();

        let moved = MakeMeshBox::new(p(0.0, 0.0, 0.0), p(1.0, 2.0, 3.0))
            .execute(&mut store)
            .unwrap();
        Translate::new(Shape::Mesh(moved), Vector3::new(-4.0, 0.5, 9.0))
            .execute(&mut store)
            .unwrap();

        let bigger = MakeMeshBox::new(p(0.0, 0.0, 0.0), p(2.0, 2.0, 3.0))
            .execute(&mut store)
            .unwrap();

        // Closed by side-pairing but volumeless: extraction fails, skipped.
        let slab = MakeMesh::new(
            vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0)],
            vec![[0, 1, 2], [0, 2, 1]],
        )
        .execute(&mut store)
        .unwrap();

        let reference_signature = extract(&store, Shape::Mesh(reference));
        let candidates = vec![
            Candidate::new("moved", Shape::Mesh(moved), ShapeKind::Mesh),
            Candidate::new("bigger", Shape::Mesh(bigger), ShapeKind::Mesh),
            Candidate::new("slab", Shape::Mesh(slab), ShapeKind::Mesh),
        ];

        let report = FindCongruent::new(&reference_signature, candidates, TOL)
            .execute(&store)
            .unwrap();

        assert_eq!(report.matches.ids(), &["moved"]);
        assert_eq!(report.checked, 3);
    }

    #[test]
    fn mixed_kinds_are_rejected_before_scanning() {
        let mut store = ModelStore::new();
        let reference = MakeBox::new(p(0.0, 0.0, 0.0), p(1.0, 1.0, 1.0))
            .execute(&mut store)
            .unwrap();
        let stray_mesh = MakeMeshBox::new(p(0.0, 0.0, 0.0), p(1.0, 1.0, 1.0))
            .execute(&mut store)
            .unwrap();

        let reference_signature = extract(&store, Shape::Solid(reference));
        let candidates = vec![Candidate::new(1_u32, Shape::Mesh(stray_mesh), ShapeKind::Mesh)];

        let mut events = 0;
        let result = FindCongruent::new(&reference_signature, candidates, TOL)
            .execute_with_progress(&store, |_| events += 1);

        assert!(matches!(
            result,
            Err(MatchError::KindMismatch {
                reference: ShapeKind::Solid,
                candidate: ShapeKind::Mesh,
            })
        ));
        assert_eq!(events, 0);
    }

    #[test]
    fn progress_is_reported_for_every_candidate() {
        let mut store = ModelStore::new();
        let reference = MakeBox::new(p(0.0, 0.0, 0.0), p(1.0, 1.0, 1.0))
            .execute(&mut store)
            .unwrap();
        let twin = MakeBox::new(p(2.0, 2.0, 2.0), p(3.0, 3.0, 3.0))
            .execute(&mut store)
            .unwrap();
        let other = MakeBox::new(p(0.0, 0.0, 0.0), p(2.0, 1.0, 1.0))
            .execute(&mut store)
            .unwrap();

        let reference_signature = extract(&store, Shape::Solid(reference));
        let candidates = vec![
            Candidate::new(1_u32, Shape::Solid(twin), ShapeKind::Solid),
            Candidate::new(2, Shape::Solid(other), ShapeKind::Solid),
        ];

        let mut events = Vec::new();
        FindCongruent::new(&reference_signature, candidates, TOL)
            .execute_with_progress(&store, |event| events.push(event))
            .unwrap();

        assert_eq!(
            events,
            vec![
                ScanProgress {
                    index: 0,
                    total: 2,
                    matched: true
                },
                ScanProgress {
                    index: 1,
                    total: 2,
                    matched: false
                },
            ]
        );
    }

    // Instrumented adapter for observing which queries a scan performs.
    struct MockShape {
        closed: bool,
        volume: Option<(f64, Point3)>,
        area: Option<f64>,
    }

    #[derive(Default)]
    struct MockAdapter {
        shapes: Vec<MockShape>,
        closed_calls: Cell<usize>,
        volume_calls: Cell<usize>,
        area_calls: Cell<usize>,
    }

    impl GeometryAdapter for MockAdapter {
        type Handle = usize;

        fn is_closed(&self, shape: usize) -> bool {
            self.closed_calls.set(self.closed_calls.get() + 1);
            self.shapes[shape].closed
        }

        fn volume_and_centroid(&self, shape: usize) -> Option<(f64, Point3)> {
            self.volume_calls.set(self.volume_calls.get() + 1);
            self.shapes[shape].volume
        }

        fn area(&self, shape: usize) -> Option<f64> {
            self.area_calls.set(self.area_calls.get() + 1);
            self.shapes[shape].area
        }

        fn boundary_edges(&self, _shape: usize) -> Vec<BoundaryEdge> {
            Vec::new()
        }

        fn face_count(&self, _shape: usize) -> usize {
            0
        }

        fn vertex_count(&self, _shape: usize) -> usize {
            0
        }
    }

    fn empty_solid_signature() -> Signature {
        Signature::Solid(SolidSignature {
            volume: 1.0,
            area: 6.0,
            centroid: Point3::origin(),
            edge_count: 0,
            total_edge_length: 0.0,
            edge_start_distances: Vec::new(),
        })
    }

    #[test]
    fn empty_candidate_list_makes_no_adapter_calls() {
        let adapter = MockAdapter::default();
        let reference = empty_solid_signature();

        let report = FindCongruent::<u32, usize>::new(&reference, Vec::new(), TOL)
            .execute(&adapter)
            .unwrap();

        assert!(report.matches.is_empty());
        assert_eq!(report.checked, 0);
        assert_eq!(adapter.closed_calls.get(), 0);
        assert_eq!(adapter.volume_calls.get(), 0);
    }

    #[test]
    fn unclosed_candidate_is_never_extracted() {
        let adapter = MockAdapter {
            shapes: vec![MockShape {
                closed: false,
                volume: Some((1.0, Point3::origin())),
                area: Some(6.0),
            }],
            ..MockAdapter::default()
        };
        let reference = empty_solid_signature();

        let report = FindCongruent::new(
            &reference,
            vec![Candidate::new(7_u32, 0_usize, ShapeKind::Solid)],
            TOL,
        )
        .execute(&adapter)
        .unwrap();

        assert!(report.matches.is_empty());
        assert_eq!(adapter.closed_calls.get(), 1);
        assert_eq!(adapter.volume_calls.get(), 0);
        assert_eq!(adapter.area_calls.get(), 0);
    }

    #[test]
    fn failed_volume_query_stops_extraction_before_area() {
        let adapter = MockAdapter {
            shapes: vec![MockShape {
                closed: true,
                volume: None,
                area: Some(6.0),
            }],
            ..MockAdapter::default()
        };
        let reference = empty_solid_signature();

        let report = FindCongruent::new(
            &reference,
            vec![Candidate::new(7_u32, 0_usize, ShapeKind::Solid)],
            TOL,
        )
        .execute(&adapter)
        .unwrap();

        assert!(report.matches.is_empty());
        assert_eq!(adapter.volume_calls.get(), 1);
        assert_eq!(adapter.area_calls.get(), 0);
    }
}
