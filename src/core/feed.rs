/// Per-project record feeds
///
/// UIs re-run this over the full record snapshot on every refresh: filter
/// the records that belong to a project, newest first, capped. Cheap enough
/// that nothing incremental is worth the bookkeeping.

use crate::catalog::models::{Project, Record, RecordKind};
use crate::core::resolver::Resolver;
use chrono::DateTime;

/// Default number of records a feed keeps
pub const DEFAULT_FEED_LIMIT: usize = 20;

/// Newest records belonging to a project, every kind mixed
///
/// Bodies are scanned. Records without a parseable ISO 8601 `created_at`
/// sort after everything dated.
pub fn project_feed<'a>(
    records: &'a [Record],
    project: &Project,
    resolver: &Resolver,
    limit: usize,
) -> Vec<&'a Record> {
    feed_where(records, project, resolver, limit, |_| true)
}

/// Same feed, restricted to one record kind
pub fn project_feed_of_kind<'a>(
    records: &'a [Record],
    kind: &RecordKind,
    project: &Project,
    resolver: &Resolver,
    limit: usize,
) -> Vec<&'a Record> {
    feed_where(records, project, resolver, limit, |record| &record.kind == kind)
}

fn feed_where<'a>(
    records: &'a [Record],
    project: &Project,
    resolver: &Resolver,
    limit: usize,
    keep: impl Fn(&Record) -> bool,
) -> Vec<&'a Record> {
    let mut feed: Vec<&Record> = records
        .iter()
        .filter(|record| keep(record))
        .filter(|record| resolver.belongs_to_project(record, project, true))
        .collect();

    // Stable sort: records sharing a timestamp keep their snapshot order
    feed.sort_by_key(|record| std::cmp::Reverse(timestamp(record)));
    feed.truncate(limit);
    feed
}

fn timestamp(record: &Record) -> i64 {
    record
        .created_at
        .as_deref()
        .and_then(|ts| DateTime::parse_from_rfc3339(ts).ok())
        .map(|dt| dt.timestamp_millis())
        .unwrap_or(i64::MIN)
}
