use super::domain::{ChangesetEntry, DocumentFinding};
use super::{repolink, stage};

/// Evaluates one document: stage classification plus repository links with
/// the excluded-organization filter applied. Pure and deterministic.
#[derive(Debug, Clone)]
pub struct DocumentEvaluator {
    excluded_org: String,
}

impl DocumentEvaluator {
    pub fn new(excluded_org: impl Into<String>) -> Self {
        Self {
            excluded_org: excluded_org.into(),
        }
    }

    pub fn evaluate(&self, entry: &ChangesetEntry) -> DocumentFinding {
        let stage = stage::classify(&entry.content);
        let raw = repolink::extract(&entry.content);
        let raw_matches = raw.len();
        let repos = raw
            .into_iter()
            .filter(|repo| !self.is_excluded(&repo.owner))
            .collect();

        DocumentFinding {
            path: entry.path.clone(),
            stage,
            repos,
            raw_matches,
        }
    }

    // Exact-match comparison: "kth-other" is a different owner than "KTH".
    fn is_excluded(&self, owner: &str) -> bool {
        owner.eq_ignore_ascii_case(&self.excluded_org)
    }
}
