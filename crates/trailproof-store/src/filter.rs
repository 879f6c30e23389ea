//! Query filters and cursor pagination shared by every backend.

use serde::{Deserialize, Serialize};
use trailproof_core::TrailEvent;

/// Page size used when none is given.
pub const DEFAULT_LIMIT: usize = 100;

/// Criteria for selecting events.
///
/// Every predicate is optional and compares by exact string equality.
/// `from_time`/`to_time` are inclusive and compared lexicographically, which
/// is chronological for the fixed-width timestamp format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryFilters {
    /// Match this event type.
    pub event_type: Option<String>,
    /// Match this actor.
    pub actor_id: Option<String>,
    /// Match this tenant.
    pub tenant_id: Option<String>,
    /// Match this trace id.
    pub trace_id: Option<String>,
    /// Match this session id.
    pub session_id: Option<String>,
    /// Earliest timestamp (inclusive).
    pub from_time: Option<String>,
    /// Latest timestamp (inclusive).
    pub to_time: Option<String>,
    /// Maximum number of events per page.
    pub limit: usize,
    /// Event id to resume after (exclusive).
    pub cursor: Option<String>,
}

impl Default for QueryFilters {
    fn default() -> Self {
        Self {
            event_type: None,
            actor_id: None,
            tenant_id: None,
            trace_id: None,
            session_id: None,
            from_time: None,
            to_time: None,
            limit: DEFAULT_LIMIT,
            cursor: None,
        }
    }
}

impl QueryFilters {
    /// Filters matching everything, first page of [`DEFAULT_LIMIT`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts to one event type.
    pub fn event_type(mut self, value: impl Into<String>) -> Self {
        self.event_type = Some(value.into());
        self
    }

    /// Restricts to one actor.
    pub fn actor_id(mut self, value: impl Into<String>) -> Self {
        self.actor_id = Some(value.into());
        self
    }

    /// Restricts to one tenant.
    pub fn tenant_id(mut self, value: impl Into<String>) -> Self {
        self.tenant_id = Some(value.into());
        self
    }

    /// Restricts to one trace.
    pub fn trace_id(mut self, value: impl Into<String>) -> Self {
        self.trace_id = Some(value.into());
        self
    }

    /// Restricts to one session.
    pub fn session_id(mut self, value: impl Into<String>) -> Self {
        self.session_id = Some(value.into());
        self
    }

    /// Lower timestamp bound (inclusive).
    pub fn from_time(mut self, value: impl Into<String>) -> Self {
        self.from_time = Some(value.into());
        self
    }

    /// Upper timestamp bound (inclusive).
    pub fn to_time(mut self, value: impl Into<String>) -> Self {
        self.to_time = Some(value.into());
        self
    }

    /// Page size.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Resume after the event with this id.
    pub fn cursor(mut self, value: impl Into<String>) -> Self {
        self.cursor = Some(value.into());
        self
    }

    /// Returns true if the event satisfies every configured predicate.
    /// The cursor and limit are not predicates.
    pub fn matches(&self, event: &TrailEvent) -> bool {
        fn eq(expected: &Option<String>, actual: Option<&str>) -> bool {
            match expected {
                Some(expected) => actual == Some(expected.as_str()),
                None => true,
            }
        }

        if !eq(&self.event_type, Some(event.event_type()))
            || !eq(&self.actor_id, Some(event.actor_id()))
            || !eq(&self.tenant_id, Some(event.tenant_id()))
            || !eq(&self.trace_id, event.trace_id())
            || !eq(&self.session_id, event.session_id())
        {
            return false;
        }

        if let Some(ref from) = self.from_time {
            if event.timestamp() < from.as_str() {
                return false;
            }
        }

        if let Some(ref to) = self.to_time {
            if event.timestamp() > to.as_str() {
                return false;
            }
        }

        true
    }
}

/// One page of query results.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QueryResult {
    /// Matching events in insertion order.
    pub events: Vec<TrailEvent>,
    /// Cursor for the next page, when more matches remain.
    pub next_cursor: Option<String>,
}

/// Applies `filters` to an ordered event sequence.
///
/// An unknown cursor yields an empty page with no `next_cursor`. When the
/// matches exceed `limit`, `next_cursor` is the id of the last event kept.
pub fn paginate(events: &[TrailEvent], filters: &QueryFilters) -> QueryResult {
    let start = match filters.cursor {
        Some(ref cursor) => match events.iter().position(|e| e.event_id() == cursor.as_str()) {
            Some(index) => index + 1,
            None => return QueryResult::default(),
        },
        None => 0,
    };

    let mut matched = events[start..].iter().filter(|e| filters.matches(e));
    let page: Vec<TrailEvent> = matched.by_ref().take(filters.limit).cloned().collect();
    let has_more = matched.next().is_some();

    let next_cursor = if has_more {
        page.last().map(|e| e.event_id().to_string())
    } else {
        None
    };

    QueryResult {
        events: page,
        next_cursor,
    }
}
