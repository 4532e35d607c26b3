mod comparator;
mod scanner;
mod signature;

pub use comparator::{first_failing_gate, matches, Gate};
pub use scanner::{Candidate, FindCongruent, MatchSet, ScanProgress, ScanReport};
pub use signature::{ExtractSignature, MeshSignature, Signature, SolidSignature};
