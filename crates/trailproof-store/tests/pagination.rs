use proptest::prelude::*;
use serde_json::Map;
use trailproof_core::{EventEnvelope, TrailEvent, GENESIS_HASH};
use trailproof_store::{paginate, QueryFilters};

fn make_events(n: usize) -> Vec<TrailEvent> {
    (0..n)
        .map(|i| {
            TrailEvent::provisional(EventEnvelope {
                event_id: format!("evt-{i}"),
                event_type: (if i % 3 == 0 { "a.x" } else { "b.y" }).to_string(),
                timestamp: "2025-01-15T10:30:00.000Z".to_string(),
                actor_id: "agent-1".to_string(),
                tenant_id: "acme".to_string(),
                payload: Map::new(),
                prev_hash: GENESIS_HASH.to_string(),
            })
        })
        .collect()
}

fn walk(events: &[TrailEvent], base: QueryFilters, limit: usize) -> Vec<String> {
    let mut seen = Vec::new();
    let mut cursor: Option<String> = None;
    loop {
        let mut filters = base.clone().limit(limit);
        filters.cursor = cursor.take();
        let page = paginate(events, &filters);
        assert!(page.events.len() <= limit);
        seen.extend(page.events.iter().map(|e| e.event_id().to_string()));
        match page.next_cursor {
            Some(next) => cursor = Some(next),
            None => break,
        }
    }
    seen
}

proptest! {
    #[test]
    fn cursor_walk_visits_every_event_once(n in 0usize..60, limit in 1usize..15) {
        let events = make_events(n);
        let expected: Vec<String> = events.iter().map(|e| e.event_id().to_string()).collect();
        prop_assert_eq!(walk(&events, QueryFilters::new(), limit), expected);
    }

    #[test]
    fn cursor_walk_respects_filters(n in 0usize..60, limit in 1usize..15) {
        let events = make_events(n);
        let expected: Vec<String> = events
            .iter()
            .filter(|e| e.event_type() == "a.x")
            .map(|e| e.event_id().to_string())
            .collect();
        prop_assert_eq!(walk(&events, QueryFilters::new().event_type("a.x"), limit), expected);
    }
}
