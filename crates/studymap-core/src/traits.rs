use crate::{ProblemId, Result};
use rustc_hash::FxHashSet;

/// Persistence seam for the completion set.
///
/// Backends are key-value blobs with no transactional guarantees; the
/// progress tracker treats `load` failures as an empty set and `save`
/// failures as best-effort.
pub trait CompletionStore {
    fn load(&self) -> Result<FxHashSet<ProblemId>>;
    fn save(&self, completed: &FxHashSet<ProblemId>) -> Result<()>;
}
