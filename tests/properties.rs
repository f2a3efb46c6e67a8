use std::collections::HashSet;

use chrono::{Duration, NaiveDate};
use jobboard::query::JobFilter;
use jobboard::session::Session;
use jobboard::{DependencyEdge, DependencyGraph, JobStatus};
use jobboard_test_utils::builders::JobBuilder;
use proptest::prelude::*;

const POOL: usize = 8;

fn name(i: usize) -> String {
    format!("J{i}")
}

fn edges_strategy() -> impl Strategy<Value = Vec<DependencyEdge>> {
    proptest::collection::vec((0..POOL, 0..POOL), 0..24)
        .prop_map(|pairs| pairs.into_iter().map(|(a, b)| DependencyEdge::new(name(a), name(b))).collect())
}

// Jobs J0..J{n-1} exist; higher indices in the edge pool are dangling.
// Each job gets a (start offset, due offset) in days from a fixed base.
fn session_strategy() -> impl Strategy<Value = Session> {
    (
        proptest::collection::vec((0i64..30, 0i64..30), 0..POOL),
        edges_strategy(),
    )
        .prop_map(|(days, edges)| {
            let base = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
            let mut session = Session::new();
            for (i, (start, due)) in days.into_iter().enumerate() {
                let mut job = JobBuilder::new(&name(i)).build();
                job.start_date = base + Duration::days(start);
                job.due_date = base + Duration::days(due);
                session.add_job(job).unwrap();
            }
            for edge in edges {
                session.add_dependency(edge.predecessor, edge.successor);
            }
            session
        })
}

fn jobs_strategy() -> impl Strategy<Value = Session> {
    let status = prop_oneof![
        Just(JobStatus::Scheduled),
        Just(JobStatus::InProgress),
        Just(JobStatus::Completed),
        Just(JobStatus::Delayed),
    ];
    proptest::collection::vec((status, 0..3usize, 0..3usize), 0..12).prop_map(|rows| {
        let mut session = Session::new();
        for (i, (status, op, machine)) in rows.into_iter().enumerate() {
            let job = JobBuilder::new(&name(i))
                .status(status)
                .operator(&format!("op{op}"))
                .machine(&format!("M{machine}"))
                .build();
            session.add_job(job).unwrap();
        }
        session
    })
}

proptest! {
    #[test]
    fn graph_rebuild_is_deterministic(edges in edges_strategy()) {
        let a = DependencyGraph::from_edges(&edges);
        let b = DependencyGraph::from_edges(&edges);
        prop_assert_eq!(a.nodes().collect::<Vec<_>>(), b.nodes().collect::<Vec<_>>());
        prop_assert_eq!(a.edges(), b.edges());

        let distinct: HashSet<(&str, &str)> = edges
            .iter()
            .map(|e| (e.predecessor.as_str(), e.successor.as_str()))
            .collect();
        prop_assert_eq!(a.edge_count(), distinct.len());
    }

    #[test]
    fn conflict_iff_successor_starts_strictly_before_due(session in session_strategy()) {
        let report = session.check_conflicts();
        let store = session.jobs();

        let expected: Vec<String> = session
            .dependencies()
            .iter()
            .filter_map(|e| {
                let a = store.get(&e.predecessor)?;
                let b = store.get(&e.successor)?;
                (b.start_date < a.due_date).then(|| {
                    format!("{} starts before its dependency {} completes.", e.successor, e.predecessor)
                })
            })
            .collect();
        prop_assert_eq!(report.messages(), expected);

        for conflict in &report.conflicts {
            prop_assert!(store.contains(&conflict.predecessor));
            prop_assert!(store.contains(&conflict.successor));
        }

        let dangling = session
            .dependencies()
            .iter()
            .filter(|e| !store.contains(&e.predecessor) || !store.contains(&e.successor))
            .count();
        prop_assert_eq!(report.unresolved.len(), dangling);
    }

    #[test]
    fn full_inclusion_filter_returns_store_in_order(session in jobs_strategy()) {
        let filtered: Vec<&str> = session
            .filter_jobs(&session.default_filter())
            .into_iter()
            .map(|j| j.work_order.as_str())
            .collect();
        let all: Vec<&str> = session.jobs().iter().map(|j| j.work_order.as_str()).collect();
        prop_assert_eq!(filtered, all);
    }

    #[test]
    fn empty_inclusion_sets_return_nothing(session in jobs_strategy()) {
        prop_assert!(session.filter_jobs(&JobFilter::default()).is_empty());
        let no_operators = session.default_filter().with_operators(Vec::<String>::new());
        prop_assert!(session.filter_jobs(&no_operators).is_empty());
    }
}
