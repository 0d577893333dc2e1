//! Add-mode reconciliation against the in-memory guild.

mod support;

use std::sync::Arc;

use papersync_core::{Reconciler, RowIter, ScheduleLoader, ScheduleSource};
use papersync_domain::{
    PaperSyncError, ReportAction, Result as DomainResult, RunMode, ScheduleRow,
};
use support::platform::{InMemoryPlatform, Mutation, BOT_ID};
use support::{context, record, row};

const APRIL_7: &str = "Monday, April 7, 2025";

struct FixedRows(Vec<ScheduleRow>);

impl ScheduleSource for FixedRows {
    fn rows(&self) -> DomainResult<RowIter<'_>> {
        Ok(Box::new(self.0.clone().into_iter().map(Ok)))
    }

    fn describe(&self) -> String {
        "fixture".to_string()
    }
}

#[tokio::test]
async fn test_end_to_end_on_empty_guild() {
    let platform = InMemoryPlatform::new();
    let reconciler = Reconciler::new(Arc::new(platform.clone()));
    let mut ctx = context(RunMode::Add);

    reconciler.add(&mut ctx, &[record(2, APRIL_7, "12", "test-paper")]).await;

    assert_eq!(platform.category_names(), vec!["April Presentations"]);
    assert_eq!(platform.channel_names(), vec!["p12-test-paper"]);
    assert_eq!(platform.parent_of("p12-test-paper").as_deref(), Some("April Presentations"));

    let pinned = platform.pinned_contents("p12-test-paper");
    assert_eq!(pinned.len(), 1);
    assert_eq!(
        pinned[0],
        "**📜 Paper being presented**: X\n\
         **🌐 Paper Link**: http://y\n\
         **📅 Presentation Date**: Monday, April 07, 2025\n\
         **🗣️ Presenter(s)**: A, B\n\
         **🗃️ Topic Category**: NLP"
    );

    let report = ctx.into_report();
    assert_eq!(report.count(ReportAction::CategoryCreated), 1);
    assert_eq!(report.count(ReportAction::ChannelCreated), 1);
    assert_eq!(report.count(ReportAction::SummaryPosted), 1);
    assert!(report.failures().is_empty());
}

#[tokio::test]
async fn test_second_run_performs_no_mutations() {
    let platform = InMemoryPlatform::new();
    let reconciler = Reconciler::new(Arc::new(platform.clone()));
    let records = vec![
        record(2, APRIL_7, "12", "test-paper"),
        record(3, "Monday, May 5, 2025", "13", "other-paper"),
    ];

    reconciler.add(&mut context(RunMode::Add), &records).await;
    platform.clear_mutations();

    let mut ctx = context(RunMode::Add);
    reconciler.add(&mut ctx, &records).await;

    assert!(platform.mutations().is_empty());
    let report = ctx.into_report();
    assert_eq!(report.platform_mutations(), 0);
    assert_eq!(report.count(ReportAction::SummaryUnchanged), 2);
}

#[tokio::test]
async fn test_drifted_summary_is_deleted_then_reposted() {
    let platform = InMemoryPlatform::new()
        .with_category("April Presentations")
        .with_channel(Some("April Presentations"), "p12-test-paper")
        .with_message(
            "p12-test-paper",
            BOT_ID,
            "papersync",
            "**📜 Paper being presented**: Old",
            true,
        );
    let reconciler = Reconciler::new(Arc::new(platform.clone()));
    let mut ctx = context(RunMode::Add);

    reconciler.add(&mut ctx, &[record(2, APRIL_7, "12", "test-paper")]).await;

    assert_eq!(
        platform.mutations(),
        vec![
            Mutation::DeleteMessage("p12-test-paper".into()),
            Mutation::Send("p12-test-paper".into()),
            Mutation::Pin("p12-test-paper".into()),
        ]
    );
    let expected = record(2, APRIL_7, "12", "test-paper").summary();
    assert_eq!(platform.pinned_contents("p12-test-paper"), vec![expected.body().to_string()]);
    assert_eq!(ctx.report.count(ReportAction::SummaryReplaced), 1);
}

#[tokio::test]
async fn test_whitespace_difference_counts_as_drift() {
    let expected = record(2, APRIL_7, "12", "test-paper").summary();
    let platform = InMemoryPlatform::new()
        .with_category("April Presentations")
        .with_channel(Some("April Presentations"), "p12-test-paper")
        .with_message(
            "p12-test-paper",
            BOT_ID,
            "papersync",
            &format!("{}\n", expected.body()),
            true,
        );
    let reconciler = Reconciler::new(Arc::new(platform.clone()));

    reconciler.add(&mut context(RunMode::Add), &[record(2, APRIL_7, "12", "test-paper")]).await;

    assert_eq!(platform.mutations().len(), 3);
}

#[tokio::test]
async fn test_missing_bot_pin_self_heals_and_ignores_other_authors() {
    let platform = InMemoryPlatform::new()
        .with_category("April Presentations")
        .with_channel(Some("April Presentations"), "p12-test-paper")
        .with_message("p12-test-paper", 42, "alice", "welcome everyone", true);
    let reconciler = Reconciler::new(Arc::new(platform.clone()));
    let mut ctx = context(RunMode::Add);

    reconciler.add(&mut ctx, &[record(2, APRIL_7, "12", "test-paper")]).await;

    assert_eq!(
        platform.mutations(),
        vec![Mutation::Send("p12-test-paper".into()), Mutation::Pin("p12-test-paper".into())]
    );
    assert_eq!(platform.pinned_contents("p12-test-paper").len(), 2);
    assert_eq!(ctx.report.count(ReportAction::SummaryPosted), 1);
}

#[tokio::test]
async fn test_category_is_created_once_per_month() {
    let platform = InMemoryPlatform::new();
    let reconciler = Reconciler::new(Arc::new(platform.clone()));

    reconciler
        .add(
            &mut context(RunMode::Add),
            &[
                record(2, APRIL_7, "1", "first"),
                record(3, "Monday, April 14, 2025", "2", "second"),
                record(4, "Monday, April 21, 2025", "3", ""),
            ],
        )
        .await;

    let created: Vec<_> = platform
        .mutations()
        .into_iter()
        .filter(|m| matches!(m, Mutation::CreateCategory(_)))
        .collect();
    assert_eq!(created, vec![Mutation::CreateCategory("April Presentations".into())]);
    assert_eq!(platform.channel_names(), vec!["p1-first", "p2-second"]);
}

#[tokio::test]
async fn test_existing_category_is_reused() {
    let platform = InMemoryPlatform::new().with_category("April Presentations");
    let reconciler = Reconciler::new(Arc::new(platform.clone()));

    reconciler.add(&mut context(RunMode::Add), &[record(2, APRIL_7, "12", "test-paper")]).await;

    assert_eq!(platform.category_names(), vec!["April Presentations"]);
    let created = Mutation::CreateCategory("April Presentations".into());
    assert!(!platform.mutations().contains(&created));
}

#[tokio::test]
async fn test_label_without_id_creates_category_but_skips_channel() {
    let platform = InMemoryPlatform::new();
    let reconciler = Reconciler::new(Arc::new(platform.clone()));
    let mut ctx = context(RunMode::Add);

    reconciler.add(&mut ctx, &[record(2, APRIL_7, "", "test-paper")]).await;

    assert_eq!(platform.category_names(), vec!["April Presentations"]);
    assert!(platform.channel_names().is_empty());
    assert_eq!(ctx.report.skipped_count(), 1);
}

#[tokio::test]
async fn test_send_failure_does_not_stop_later_records() {
    let platform = InMemoryPlatform::new().failing_send_in("p1-first");
    let reconciler = Reconciler::new(Arc::new(platform.clone()));
    let mut ctx = context(RunMode::Add);

    reconciler
        .add(&mut ctx, &[record(2, APRIL_7, "1", "first"), record(3, APRIL_7, "2", "second")])
        .await;

    assert_eq!(platform.channel_names(), vec!["p1-first", "p2-second"]);
    assert!(platform.pinned_contents("p1-first").is_empty());
    assert_eq!(platform.pinned_contents("p2-second").len(), 1);

    let failures = ctx.report.failures();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].subject, "p1-first");
}

#[tokio::test]
async fn test_malformed_date_row_is_skipped_and_later_rows_run() {
    let source = FixedRows(vec![
        row(2, "April 7 2025", "1", "bad-date"),
        row(3, APRIL_7, "12", "test-paper"),
    ]);
    let platform = InMemoryPlatform::new();
    let reconciler = Reconciler::new(Arc::new(platform.clone()));
    let mut ctx = context(RunMode::Add);

    let records = ScheduleLoader::new(Arc::new(source)).load(&mut ctx.report).unwrap();
    reconciler.add(&mut ctx, &records).await;

    assert_eq!(platform.channel_names(), vec!["p12-test-paper"]);
    assert_eq!(ctx.report.skipped_count(), 1);
    let skipped = &ctx.report.events()[0];
    assert_eq!(skipped.subject, "line 2");
}

#[test]
fn test_missing_schedule_is_not_found() {
    struct Missing;

    impl ScheduleSource for Missing {
        fn rows(&self) -> DomainResult<RowIter<'_>> {
            Err(PaperSyncError::NotFound("schedule.csv".into()))
        }

        fn describe(&self) -> String {
            "schedule.csv".to_string()
        }
    }

    let mut ctx = context(RunMode::Add);
    let result = ScheduleLoader::new(Arc::new(Missing)).load(&mut ctx.report);
    assert!(matches!(result, Err(PaperSyncError::NotFound(_))));
}
