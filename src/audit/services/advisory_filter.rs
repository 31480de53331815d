use crate::audit::domain::{Action, Advisory, AdvisoryId, AuditReport};
use std::collections::HashSet;

/// AdvisoryFilter - Splits a report into pass-through and ignored advisories
///
/// Ignoring an advisory only affects what is reported and the exit code;
/// the underlying scan is unchanged. Ignore IDs are matched against each
/// advisory's upstream sources, never against the IDs assigned to entries
/// that only depend on other vulnerable packages.
#[derive(Debug, Clone, Default)]
pub struct AdvisoryFilter {
    ignore_ids: Vec<AdvisoryId>,
    ignore_set: HashSet<AdvisoryId>,
}

/// Result of applying an [`AdvisoryFilter`] to a report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOutcome {
    /// Advisory IDs not in the ignore set, in report order
    pub pass_through_ids: Vec<AdvisoryId>,
    /// Advisory IDs whose sources are all in the ignore set, in report order
    pub ignored_ids: Vec<AdvisoryId>,
    /// Actions resolving at least one pass-through advisory
    pub pass_through_actions: Vec<Action>,
    /// Ignore IDs that matched no advisory source in the report
    pub unmatched_ignore_ids: Vec<AdvisoryId>,
}

impl FilterOutcome {
    pub fn has_pass_through(&self) -> bool {
        !self.pass_through_ids.is_empty()
    }
}

impl AdvisoryFilter {
    /// Creates a filter from advisory IDs to ignore; duplicates are dropped
    pub fn new(ignore_ids: impl IntoIterator<Item = AdvisoryId>) -> Self {
        let mut ignore_set = HashSet::new();
        let ignore_ids = ignore_ids
            .into_iter()
            .filter(|id| ignore_set.insert(*id))
            .collect();
        Self {
            ignore_ids,
            ignore_set,
        }
    }

    pub fn is_ignored(&self, id: AdvisoryId) -> bool {
        self.ignore_set.contains(&id)
    }

    /// An advisory is suppressed only when every one of its sources is ignored
    pub fn suppresses(&self, advisory: &Advisory) -> bool {
        !advisory.sources().is_empty() && advisory.sources().iter().all(|id| self.is_ignored(*id))
    }

    /// Partitions the report's advisories and keeps only the actions that
    /// still matter once ignored advisories are set aside
    pub fn apply(&self, report: &AuditReport) -> FilterOutcome {
        let (ignored, pass_through): (Vec<&Advisory>, Vec<&Advisory>) = report
            .advisories()
            .iter()
            .partition(|advisory| self.suppresses(advisory));
        let ignored_ids: Vec<AdvisoryId> = ignored.iter().map(|a| a.id()).collect();
        let pass_through_ids: Vec<AdvisoryId> = pass_through.iter().map(|a| a.id()).collect();

        let pass_through_set: HashSet<AdvisoryId> = pass_through_ids.iter().copied().collect();
        let pass_through_actions = Self::filter_actions(report.actions(), &pass_through_set);

        let present: HashSet<AdvisoryId> = report
            .advisories()
            .iter()
            .flat_map(|a| a.sources().iter().copied())
            .collect();
        let unmatched_ignore_ids = self
            .ignore_ids
            .iter()
            .copied()
            .filter(|id| !present.contains(id))
            .collect();

        FilterOutcome {
            pass_through_ids,
            ignored_ids,
            pass_through_actions,
            unmatched_ignore_ids,
        }
    }

    /// Retains actions that resolve at least one pass-through advisory
    pub fn filter_actions(actions: &[Action], pass_through: &HashSet<AdvisoryId>) -> Vec<Action> {
        actions
            .iter()
            .filter(|action| action.resolves().iter().any(|id| pass_through.contains(id)))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::domain::{ActionKind, Advisory, ReportSchema, Severity};

    fn advisory(id: AdvisoryId, severity: Severity) -> Advisory {
        Advisory::new(
            id,
            severity,
            format!("Advisory {}", id),
            format!("module-{}", id),
            String::new(),
            String::new(),
            String::new(),
            vec![],
        )
    }

    fn install(module: &str, resolves: Vec<AdvisoryId>) -> Action {
        Action::new(
            ActionKind::Install,
            module.to_string(),
            Some("1.0.0".to_string()),
            false,
            None,
            resolves,
        )
    }

    fn sample_report() -> AuditReport {
        AuditReport::new(
            vec![
                advisory(1, Severity::High),
                advisory(2, Severity::Low),
                advisory(3, Severity::Critical),
                advisory(4, Severity::Moderate),
            ],
            vec![
                install("a", vec![1]),
                install("b", vec![2]),
                install("c", vec![2, 3]),
                install("d", vec![2, 2]),
            ],
            ReportSchema::Legacy,
        )
    }

    #[test]
    fn test_no_ignores_passes_everything_through() {
        let outcome = AdvisoryFilter::default().apply(&sample_report());
        assert_eq!(outcome.pass_through_ids, vec![1, 2, 3, 4]);
        assert!(outcome.ignored_ids.is_empty());
        assert_eq!(outcome.pass_through_actions.len(), 4);
        assert!(outcome.has_pass_through());
    }

    #[test]
    fn test_high_and_low_with_low_ignored() {
        let report = AuditReport::new(
            vec![advisory(1, Severity::High), advisory(2, Severity::Low)],
            vec![],
            ReportSchema::Legacy,
        );
        let outcome = AdvisoryFilter::new([2]).apply(&report);
        assert_eq!(outcome.pass_through_ids, vec![1]);
        assert_eq!(outcome.ignored_ids, vec![2]);
        assert!(outcome.has_pass_through());
    }

    #[test]
    fn test_partition_is_complete_and_disjoint() {
        let report = sample_report();
        let all: HashSet<AdvisoryId> = [1, 2, 3, 4].into_iter().collect();
        let ignore_sets: Vec<Vec<AdvisoryId>> = vec![
            vec![],
            vec![1],
            vec![2, 4],
            vec![1, 2, 3, 4],
            vec![5, 6],
            vec![3, 99, 3],
        ];

        for ignore in ignore_sets {
            let outcome = AdvisoryFilter::new(ignore.clone()).apply(&report);
            let pass: HashSet<_> = outcome.pass_through_ids.iter().copied().collect();
            let ignored: HashSet<_> = outcome.ignored_ids.iter().copied().collect();

            assert!(pass.is_disjoint(&ignored), "ignore set {:?}", ignore);
            let union: HashSet<_> = pass.union(&ignored).copied().collect();
            assert_eq!(union, all, "ignore set {:?}", ignore);
        }
    }

    #[test]
    fn test_action_kept_iff_it_resolves_a_pass_through_advisory() {
        let report = sample_report();
        for ignore in [vec![2], vec![1, 3], vec![2, 3], vec![1, 2, 3, 4]] {
            let outcome = AdvisoryFilter::new(ignore.clone()).apply(&report);
            let pass: HashSet<_> = outcome.pass_through_ids.iter().copied().collect();

            for action in report.actions() {
                let expected = action.resolves().iter().any(|id| pass.contains(id));
                let kept = outcome.pass_through_actions.contains(action);
                assert_eq!(kept, expected, "action {} with ignore {:?}", action.module(), ignore);
            }
        }
    }

    #[test]
    fn test_ignoring_everything_drops_all_actions() {
        let outcome = AdvisoryFilter::new([1, 2, 3, 4]).apply(&sample_report());
        assert!(outcome.pass_through_ids.is_empty());
        assert!(outcome.pass_through_actions.is_empty());
        assert!(!outcome.has_pass_through());
    }

    #[test]
    fn test_mixed_action_survives_when_one_advisory_remains() {
        let outcome = AdvisoryFilter::new([2]).apply(&sample_report());
        let modules: Vec<&str> = outcome
            .pass_through_actions
            .iter()
            .map(|a| a.module())
            .collect();
        assert_eq!(modules, vec!["a", "c"]);
    }

    #[test]
    fn test_unmatched_ignore_ids_reported() {
        let outcome = AdvisoryFilter::new([2, 42, 42, 7]).apply(&sample_report());
        assert_eq!(outcome.unmatched_ignore_ids, vec![42, 7]);
    }

    fn transitive_report() -> AuditReport {
        // 500 and 502 are upstream advisories; 900 depends on both, 901 on 500 only
        AuditReport::new(
            vec![
                advisory(500, Severity::High),
                advisory(502, Severity::Low).with_sources([502, 503]),
                advisory(900, Severity::High).with_sources([500, 502, 503]),
                advisory(901, Severity::Moderate).with_sources([500]),
                advisory(902, Severity::Low).with_sources([]),
            ],
            vec![],
            ReportSchema::V2,
        )
    }

    #[test]
    fn test_ignoring_root_source_clears_dependents() {
        let outcome = AdvisoryFilter::new([500]).apply(&transitive_report());
        assert_eq!(outcome.ignored_ids, vec![500, 901]);
        assert_eq!(outcome.pass_through_ids, vec![502, 900, 902]);
        assert!(outcome.unmatched_ignore_ids.is_empty());
    }

    #[test]
    fn test_entry_needs_every_source_ignored() {
        let report = transitive_report();

        let outcome = AdvisoryFilter::new([502]).apply(&report);
        assert!(outcome.ignored_ids.is_empty());
        assert!(outcome.unmatched_ignore_ids.is_empty());

        let outcome = AdvisoryFilter::new([503]).apply(&report);
        assert!(outcome.ignored_ids.is_empty());
        assert!(outcome.unmatched_ignore_ids.is_empty());

        let outcome = AdvisoryFilter::new([500, 502, 503]).apply(&report);
        assert_eq!(outcome.ignored_ids, vec![500, 502, 900, 901]);
        assert_eq!(outcome.pass_through_ids, vec![902]);
    }

    #[test]
    fn test_assigned_ids_do_not_match_ignore_entries() {
        let outcome = AdvisoryFilter::new([901, 902]).apply(&transitive_report());
        assert!(outcome.ignored_ids.is_empty());
        assert_eq!(outcome.unmatched_ignore_ids, vec![901, 902]);
    }

    #[test]
    fn test_empty_report() {
        let outcome = AdvisoryFilter::new([1]).apply(&AuditReport::empty());
        assert!(outcome.pass_through_ids.is_empty());
        assert!(outcome.ignored_ids.is_empty());
        assert_eq!(outcome.unmatched_ignore_ids, vec![1]);
        assert!(!outcome.has_pass_through());
    }
}
