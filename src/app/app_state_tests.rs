//! Tests for App state transitions

use ratatui::crossterm::event::KeyCode;

use super::*;
use crate::fetch::{FetchError, Suggestion};
use crate::test_utils::test_helpers::{app_with_suggestions, key, ms, test_app, type_text};

fn titles(app: &App) -> Vec<&str> {
    app.suggestions
        .suggestions()
        .iter()
        .map(|s| s.title.as_str())
        .collect()
}

#[test]
fn test_app_initialization() {
    let (app, _worker) = test_app();

    assert_eq!(app.focus, Focus::Input);
    assert_eq!(app.query(), "");
    assert!(!app.suggestions.is_visible());
    assert_eq!(app.suggestions.highlighted(), None);
    assert!(!app.debouncer.is_pending());
    assert!(!app.should_quit());
    assert_eq!(app.last_search(), None);
}

#[test]
fn test_rapid_typing_sends_one_request_for_final_text() {
    let (mut app, mut worker) = test_app();
    let start = Instant::now();

    type_text(&mut app, "bat", start);
    app.tick(start + ms(100));
    type_text(&mut app, "m", start + ms(100));
    app.tick(start + ms(200));
    type_text(&mut app, "a", start + ms(200));

    app.tick(start + ms(300));
    assert!(worker.drain_requests().is_empty());

    app.tick(start + ms(500));
    let requests = worker.drain_requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].query, "batma");
}

#[test]
fn test_query_updates_immediately_on_typing() {
    let (mut app, mut worker) = test_app();

    type_text(&mut app, "heat", Instant::now());

    assert_eq!(app.query(), "heat");
    assert!(app.debouncer.is_pending());
    assert!(worker.drain_requests().is_empty());
}

#[test]
fn test_request_carries_untrimmed_query() {
    let (mut app, mut worker) = test_app();
    let start = Instant::now();

    type_text(&mut app, " heat ", start);
    app.tick(start + ms(300));

    let requests = worker.drain_requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].query, " heat ");
}

#[test]
fn test_successful_response_shows_list() {
    let (app, _worker, _now) = app_with_suggestions("batma", &["Batman", "Batman Begins"]);

    assert!(app.suggestions.is_visible());
    assert_eq!(titles(&app), vec!["Batman", "Batman Begins"]);
    assert_eq!(app.suggestions.highlighted(), None);
}

#[test]
fn test_whitespace_only_query_never_fetches() {
    let (mut app, mut worker) = test_app();
    let start = Instant::now();

    type_text(&mut app, "   ", start);
    app.tick(start + ms(300));

    assert!(worker.drain_requests().is_empty());
    assert_eq!(app.query(), "   ");
    assert!(!app.suggestions.is_visible());
    assert!(app.suggestions.suggestions().is_empty());
}

#[test]
fn test_deleting_all_text_clears_and_hides_list() {
    let (mut app, mut worker, now) = app_with_suggestions("bat", &["Batman"]);

    for _ in 0..3 {
        app.handle_key_event(key(KeyCode::Backspace), now);
    }

    assert_eq!(app.query(), "");
    assert!(!app.suggestions.is_visible());
    assert!(app.suggestions.suggestions().is_empty());
    assert_eq!(app.suggestions.highlighted(), None);

    app.tick(now + ms(300));
    assert!(worker.drain_requests().is_empty());
    assert!(!app.suggestions.is_visible());
}

#[test]
fn test_response_for_cleared_query_is_ignored() {
    let (mut app, mut worker) = test_app();
    let start = Instant::now();

    type_text(&mut app, "b", start);
    app.tick(start + ms(300));
    let request = worker.drain_requests().pop().unwrap();

    app.handle_key_event(key(KeyCode::Backspace), start + ms(350));
    worker.respond(request.request_id, &["Batman"]);
    app.tick(start + ms(360));

    assert!(app.suggestions.suggestions().is_empty());
    assert!(!app.suggestions.is_visible());
}

#[test]
fn test_stale_response_is_discarded() {
    let (mut app, mut worker) = test_app();
    let start = Instant::now();

    type_text(&mut app, "bat", start);
    app.tick(start + ms(300));
    type_text(&mut app, "m", start + ms(310));
    app.tick(start + ms(610));

    let requests = worker.drain_requests();
    assert_eq!(requests.len(), 2);

    // Newer answer arrives first, then the older one
    worker.respond(requests[1].request_id, &["Batman"]);
    worker.respond(requests[0].request_id, &["Bats", "Battleship"]);
    app.tick(start + ms(620));

    assert_eq!(titles(&app), vec!["Batman"]);
}

#[test]
fn test_fetch_failure_keeps_previous_state() {
    let (mut app, mut worker, now) = app_with_suggestions("bat", &["Batman", "Batman Begins"]);

    type_text(&mut app, "z", now);
    app.tick(now + ms(300));
    let request = worker.drain_requests().pop().unwrap();

    worker
        .responses
        .send(FetchResponse {
            request_id: request.request_id,
            result: Err(FetchError::Network("connection refused".to_string())),
        })
        .unwrap();
    app.tick(now + ms(310));

    assert!(app.suggestions.is_visible());
    assert_eq!(titles(&app), vec!["Batman", "Batman Begins"]);
}

#[test]
fn test_no_fetcher_does_not_panic() {
    let mut app = App::new(&Config::default(), None);
    let start = Instant::now();

    type_text(&mut app, "heat", start);
    app.tick(start + ms(300));

    assert_eq!(app.query(), "heat");
    assert!(!app.suggestions.is_visible());
}

#[test]
fn test_arrow_down_previews_title() {
    let (mut app, mut worker, now) = app_with_suggestions("batma", &["Batman", "Batman Begins"]);

    assert!(app.highlight_next());

    assert_eq!(app.suggestions.highlighted(), Some(0));
    assert_eq!(app.query(), "Batman");

    // Previewing is not typing: no new fetch is scheduled
    assert!(!app.debouncer.is_pending());
    app.tick(now + ms(1000));
    assert!(worker.drain_requests().is_empty());
}

#[test]
fn test_arrow_navigation_bounds() {
    let (mut app, _worker, _now) = app_with_suggestions("batma", &["Batman", "Batman Begins"]);

    app.highlight_previous();
    assert_eq!(app.suggestions.highlighted(), None);
    assert_eq!(app.query(), "batma");

    app.highlight_next();
    app.highlight_next();
    app.highlight_next();
    assert_eq!(app.suggestions.highlighted(), Some(1));
    assert_eq!(app.query(), "Batman Begins");

    app.highlight_previous();
    app.highlight_previous();
    assert_eq!(app.suggestions.highlighted(), None);
    // Moving back to no highlight leaves the last previewed title
    assert_eq!(app.query(), "Batman");
}

#[test]
fn test_arrows_not_navigable_without_list() {
    let (mut app, _worker) = test_app();

    assert!(!app.highlight_next());
    assert!(!app.highlight_previous());
}

#[test]
fn test_submit_without_highlight_searches_verbatim() {
    let (mut app, _worker, _now) = app_with_suggestions(" batma ", &["Batman"]);

    app.submit();

    assert_eq!(app.last_search(), Some(" batma "));
    assert!(app.suggestions.is_visible());
}

#[test]
fn test_submit_with_highlight_selects() {
    let (mut app, _worker, _now) = app_with_suggestions("batma", &["Batman", "Batman Begins"]);
    app.highlight_next();
    app.highlight_next();

    app.submit();

    assert_eq!(app.query(), "Batman Begins");
    assert!(!app.suggestions.is_visible());
    assert_eq!(app.suggestions.highlighted(), None);
    assert_eq!(app.focus, Focus::Input);
    assert_eq!(app.last_search(), None);
}

#[test]
fn test_select_cancels_pending_work() {
    let (mut app, mut worker, now) = app_with_suggestions("bat", &["Batman"]);
    type_text(&mut app, "m", now);
    app.tick(now + ms(300));
    let in_flight = worker.drain_requests().pop().unwrap();
    type_text(&mut app, "a", now + ms(310));

    app.select_suggestion("Batman");
    worker.respond(in_flight.request_id, &["Batman", "Batman Returns"]);
    app.tick(now + ms(1000));

    assert!(worker.drain_requests().is_empty());
    assert!(!app.suggestions.is_visible());
    assert_eq!(app.query(), "Batman");
}

#[test]
fn test_blur_hides_after_grace_delay() {
    let (mut app, _worker, now) = app_with_suggestions("bat", &["Batman"]);

    app.move_focus(Focus::SearchButton, now);
    app.tick(now + ms(199));
    assert!(app.suggestions.is_visible());

    app.tick(now + ms(200));
    assert!(!app.suggestions.is_visible());
}

#[test]
fn test_refocus_reshows_list_without_fetching() {
    let (mut app, mut worker, now) = app_with_suggestions("bat", &["Batman"]);
    app.move_focus(Focus::Background, now);
    app.tick(now + ms(200));
    assert!(!app.suggestions.is_visible());

    app.move_focus(Focus::Input, now + ms(500));

    assert!(app.suggestions.is_visible());
    assert_eq!(titles(&app), vec!["Batman"]);
    assert!(worker.drain_requests().is_empty());
}

#[test]
fn test_refocus_within_grace_keeps_list() {
    let (mut app, _worker, now) = app_with_suggestions("bat", &["Batman"]);

    app.move_focus(Focus::SearchButton, now);
    app.move_focus(Focus::Input, now + ms(100));
    app.tick(now + ms(300));

    assert!(app.suggestions.is_visible());
}

#[test]
fn test_focus_with_empty_query_keeps_list_hidden() {
    let (mut app, _worker) = test_app();
    app.focus = Focus::Background;

    app.move_focus(Focus::Input, Instant::now());

    assert!(!app.suggestions.is_visible());
}

#[test]
fn test_dismiss_hides_then_quits() {
    let (mut app, _worker, _now) = app_with_suggestions("bat", &["Batman"]);
    app.highlight_next();

    app.dismiss();
    assert!(!app.suggestions.is_visible());
    assert_eq!(app.suggestions.highlighted(), None);
    assert!(!app.should_quit());

    app.dismiss();
    assert!(app.should_quit());
}

#[test]
fn test_select_index_out_of_range_is_ignored() {
    let (mut app, _worker, _now) = app_with_suggestions("bat", &["Batman"]);

    app.select_index(5);

    assert_eq!(app.query(), "bat");
    assert!(app.suggestions.is_visible());
}

#[test]
fn test_handle_fetch_response_replaces_wholesale() {
    let (mut app, _worker, _now) = app_with_suggestions("bat", &["Batman", "Batman Begins"]);
    let request_id = app.request_id;

    app.handle_fetch_response(FetchResponse {
        request_id,
        result: Ok(vec![Suggestion::new("Bats")]),
    });

    assert_eq!(titles(&app), vec!["Bats"]);
}

#[test]
fn test_selected_title_is_kept_exactly() {
    let (mut app, _worker, _now) = app_with_suggestions("bat", &["Batman ", "Batman Begins"]);

    app.highlight_next();
    assert_eq!(app.query(), "Batman ");

    app.select_index(0);
    assert_eq!(app.query(), "Batman ");
}

#[test]
fn test_preview_during_pending_debounce_fetches_typed_text() {
    let (mut app, mut worker, now) = app_with_suggestions("bat", &["Batman", "Batman Begins"]);

    type_text(&mut app, "m", now);
    assert!(app.highlight_next());
    assert_eq!(app.query(), "Batman");

    app.tick(now + ms(300));

    let requests = worker.drain_requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].query, "batm");
}
