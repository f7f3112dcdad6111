use super::*;

#[test]
fn fetch_state_default_is_idle() {
    assert_eq!(FetchState::<u8>::default(), FetchState::Idle);
}

#[test]
fn from_result_maps_ok_and_err() {
    let ok: FetchState<u8> = FetchState::from_result(Ok::<u8, String>(3));
    assert_eq!(ok, FetchState::Loaded(3));

    let err: FetchState<u8> = FetchState::from_result(Err::<u8, _>("HTTP 403"));
    assert_eq!(err, FetchState::Failed("HTTP 403".to_owned()));
}

#[test]
fn pending_covers_idle_and_loading_only() {
    assert!(FetchState::<u8>::Idle.is_pending());
    assert!(FetchState::<u8>::Loading.is_pending());
    assert!(!FetchState::Loaded(1).is_pending());
    assert!(!FetchState::<u8>::Failed("x".into()).is_pending());
}

#[test]
fn accessors_expose_value_and_error() {
    assert_eq!(FetchState::Loaded(7).loaded(), Some(&7));
    assert_eq!(FetchState::<u8>::Loading.loaded(), None);
    assert_eq!(FetchState::<u8>::Failed("boom".into()).error(), Some("boom"));
    assert_eq!(FetchState::Loaded(1).error(), None);
}

#[test]
fn map_transforms_loaded_and_keeps_other_states() {
    assert_eq!(FetchState::Loaded(2).map(|n| n * 10), FetchState::Loaded(20));
    assert_eq!(FetchState::<u8>::Loading.map(|n| n * 10), FetchState::Loading);
    assert_eq!(FetchState::<u8>::Failed("e".into()).map(|n| n * 10), FetchState::Failed("e".into()));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn spawn_fetch_marks_target_loading_outside_browser() {
    let target = RwSignal::new(FetchState::<u8>::Idle);
    let seq = RequestSeq::new();
    spawn_fetch(target, &seq, async { Ok::<u8, String>(1) });
    assert_eq!(target.get_untracked(), FetchState::Loading);
    assert!(seq.is_current(1));
}

// =============================================================
// Request sequencing
// =============================================================

#[test]
fn request_seq_keeps_only_latest_ticket_current() {
    let seq = RequestSeq::new();
    let first = seq.begin();
    let second = seq.begin();
    assert!(!seq.is_current(first));
    assert!(seq.is_current(second));

    seq.invalidate();
    assert!(!seq.is_current(second));
}

#[test]
fn request_seq_clones_share_the_counter() {
    let seq = RequestSeq::new();
    let ticket = seq.clone().begin();
    assert!(seq.is_current(ticket));
}

#[test]
fn settle_stores_the_current_response() {
    let target = RwSignal::new(FetchState::<&str>::Loading);
    let seq = RequestSeq::new();
    let ticket = seq.begin();
    assert!(settle(target, &seq, ticket, Ok::<_, String>("b")));
    assert_eq!(target.get_untracked(), FetchState::Loaded("b"));
}

#[test]
fn settle_drops_a_response_that_finishes_after_a_newer_one() {
    let target = RwSignal::new(FetchState::<&str>::Idle);
    let seq = RequestSeq::new();
    let ticket_a = seq.begin();
    let ticket_b = seq.begin();

    assert!(settle(target, &seq, ticket_b, Ok::<_, String>("b")));
    assert!(!settle(target, &seq, ticket_a, Ok::<_, String>("a")));
    assert_eq!(target.get_untracked(), FetchState::Loaded("b"));
}

#[test]
fn settle_drops_a_superseded_failure() {
    let target = RwSignal::new(FetchState::<u8>::Loading);
    let seq = RequestSeq::new();
    let stale = seq.begin();
    seq.begin();
    assert!(!settle(target, &seq, stale, Err::<u8, _>("timeout")));
    assert_eq!(target.get_untracked(), FetchState::Loading);
}

#[test]
fn gated_reports_config_failure_first() {
    let config: FetchState<()> = FetchState::Failed("config request failed: 500".into());
    let view = FetchState::Loaded(vec![1_u8]);
    assert_eq!(gated(&config, &view), FetchState::Failed("config request failed: 500".into()));
}

#[test]
fn gated_is_pending_until_config_loads() {
    let view = FetchState::Loaded(1_u8);
    assert_eq!(gated(&FetchState::<()>::Idle, &view), FetchState::Loading);
    assert_eq!(gated(&FetchState::<()>::Loading, &view), FetchState::Loading);
}

#[test]
fn gated_passes_view_state_through_once_configured() {
    let config = FetchState::Loaded(());
    assert_eq!(gated(&config, &FetchState::Loaded(2_u8)), FetchState::Loaded(2));
    assert_eq!(gated(&config, &FetchState::<u8>::Failed("x".into())), FetchState::Failed("x".into()));
}
