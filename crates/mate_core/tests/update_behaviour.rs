use std::sync::Once;

use mate_core::{
    update, AppState, ConversionFailure, ConversionResult, DownloadLocations, Effect, FailureKind,
    Msg, OutputFormat, Phase, GENERIC_FAILURE_MESSAGE, TIMEOUT_MESSAGE, VALIDATION_MESSAGE,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(mate_logging::initialize_for_tests);
}

fn submit_link(state: AppState, input: &str) -> (AppState, Vec<Effect>) {
    let (state, _) = update(state, Msg::InputChanged(input.to_string()));
    update(state, Msg::Submitted)
}

fn sample_result() -> ConversionResult {
    ConversionResult {
        title: "T".to_string(),
        thumbnail_url: "http://x/thumb.jpg".to_string(),
        download_locations: DownloadLocations {
            mp3: "http://x/a.mp3".to_string(),
            mp4: "http://x/a.mp4".to_string(),
        },
    }
}

fn only_request_id(effects: &[Effect]) -> u64 {
    match effects {
        [Effect::RequestConversion { request_id, .. }] => *request_id,
        other => panic!("expected a single request effect, got {other:?}"),
    }
}

#[test]
fn new_state_is_idle_with_mp3_selected() {
    init_logging();
    let view = AppState::new().view();

    assert_eq!(view.phase, Phase::Idle);
    assert_eq!(view.input, "");
    assert_eq!(view.format, OutputFormat::Mp3);
    assert_eq!(view.result, None);
    assert_eq!(view.error_message, None);
    assert_eq!(view.active_download_location, None);
}

#[test]
fn blank_submissions_fail_validation_without_effects() {
    init_logging();
    for input in ["", "   ", "\t\n", " \r\n "] {
        let (state, effects) = submit_link(AppState::new(), input);

        assert!(effects.is_empty(), "input {input:?} produced effects");
        assert_eq!(state.phase(), Phase::Failed);
        assert_eq!(state.error_message(), Some(VALIDATION_MESSAGE));
        assert_eq!(state.error().map(|e| e.kind), Some(FailureKind::Validation));
        assert_eq!(state.result(), None);
    }
}

#[test]
fn valid_submission_enters_pending_and_requests_trimmed_link() {
    init_logging();
    let (mut state, effects) = submit_link(AppState::new(), "  https://youtube.com/watch?v=abc \n");

    assert_eq!(
        effects,
        vec![Effect::RequestConversion {
            request_id: 1,
            url: "https://youtube.com/watch?v=abc".to_string(),
        }]
    );
    let view = state.view();
    assert_eq!(view.phase, Phase::Pending);
    assert_eq!(view.pending_url.as_deref(), Some("https://youtube.com/watch?v=abc"));
    assert_eq!(view.input, "  https://youtube.com/watch?v=abc \n");
    assert!(state.consume_dirty());
    assert!(!state.consume_dirty());
}

#[test]
fn happy_path_resolves_and_exposes_link_for_selected_format() {
    init_logging();
    let (state, effects) = submit_link(AppState::new(), "https://youtube.com/watch?v=abc");
    let request_id = only_request_id(&effects);

    let (state, effects) = update(
        state,
        Msg::ConversionFinished {
            request_id,
            outcome: Ok(sample_result()),
        },
    );

    assert!(effects.is_empty());
    assert_eq!(state.phase(), Phase::Resolved);
    assert_eq!(state.result().map(|r| r.title.as_str()), Some("T"));
    assert_eq!(state.error_message(), None);
    assert_eq!(state.active_download_location(), Some("http://x/a.mp3"));

    let (state, _) = update(state, Msg::FormatToggled);
    assert_eq!(state.selected_format(), OutputFormat::Mp4);
    assert_eq!(state.active_download_location(), Some("http://x/a.mp4"));
    assert_eq!(state.view().active_download_location.as_deref(), Some("http://x/a.mp4"));
}

#[test]
fn toggling_never_touches_result_or_phase() {
    init_logging();
    // Before submitting.
    let (state, _) = update(AppState::new(), Msg::FormatToggled);
    assert_eq!(state.selected_format(), OutputFormat::Mp4);
    assert_eq!(state.phase(), Phase::Idle);

    // While pending.
    let (state, effects) = submit_link(state, "https://youtube.com/watch?v=abc");
    let request_id = only_request_id(&effects);
    let (state, effects) = update(state, Msg::FormatToggled);
    assert!(effects.is_empty());
    assert_eq!(state.phase(), Phase::Pending);
    assert_eq!(state.awaited_request(), Some(request_id));
    assert_eq!(state.active_download_location(), None);

    // After resolving.
    let (state, _) = update(
        state,
        Msg::ConversionFinished {
            request_id,
            outcome: Ok(sample_result()),
        },
    );
    assert_eq!(state.active_download_location(), Some("http://x/a.mp3"));

    let mut state = state;
    for expected in ["http://x/a.mp4", "http://x/a.mp3", "http://x/a.mp4"] {
        let (next, _) = update(state, Msg::FormatToggled);
        assert_eq!(next.result(), Some(&sample_result()));
        assert_eq!(next.phase(), Phase::Resolved);
        assert_eq!(next.active_download_location(), Some(expected));
        state = next;
    }
}

#[test]
fn format_survives_new_submissions() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::FormatToggled);
    let (state, _) = submit_link(state, "https://youtube.com/watch?v=abc");
    let (state, _) = submit_link(state, "   ");

    assert_eq!(state.selected_format(), OutputFormat::Mp4);
}

#[test]
fn service_error_is_surfaced_verbatim() {
    init_logging();
    let (state, effects) = submit_link(AppState::new(), "https://youtube.com/watch?v=abc");
    let request_id = only_request_id(&effects);

    let (state, _) = update(
        state,
        Msg::ConversionFinished {
            request_id,
            outcome: Err(ConversionFailure::service("bad link")),
        },
    );

    assert_eq!(state.phase(), Phase::Failed);
    assert_eq!(state.error_message(), Some("bad link"));
    assert_eq!(state.result(), None);
    assert_eq!(state.active_download_location(), None);
}

#[test]
fn service_error_keeps_its_surrounding_whitespace() {
    init_logging();
    assert_eq!(
        ConversionFailure::service("  bad link\n").user_message(),
        "  bad link\n"
    );

    let (state, effects) = submit_link(AppState::new(), "https://youtube.com/watch?v=abc");
    let request_id = only_request_id(&effects);
    let (state, _) = update(
        state,
        Msg::ConversionFinished {
            request_id,
            outcome: Err(ConversionFailure::service("  bad link\n")),
        },
    );

    assert_eq!(state.phase(), Phase::Failed);
    assert_eq!(state.error_message(), Some("  bad link\n"));
}

#[test]
fn failures_without_text_fall_back_to_generic_message() {
    init_logging();
    let cases = [
        (ConversionFailure::transport(None), GENERIC_FAILURE_MESSAGE),
        (ConversionFailure::transport(Some("  ".to_string())), GENERIC_FAILURE_MESSAGE),
        (ConversionFailure::malformed(), GENERIC_FAILURE_MESSAGE),
        (ConversionFailure::timeout(), TIMEOUT_MESSAGE),
        (
            ConversionFailure::transport(Some("connection refused".to_string())),
            "connection refused",
        ),
    ];

    for (failure, expected) in cases {
        let kind = failure.kind;
        let (state, effects) = submit_link(AppState::new(), "https://youtube.com/watch?v=abc");
        let request_id = only_request_id(&effects);
        let (state, _) = update(
            state,
            Msg::ConversionFinished {
                request_id,
                outcome: Err(failure),
            },
        );

        assert_eq!(state.phase(), Phase::Failed);
        assert_eq!(state.error_message(), Some(expected));
        assert_eq!(state.error().map(|e| e.kind), Some(kind));
    }
}

#[test]
fn resubmitting_after_failure_starts_a_clean_cycle() {
    init_logging();
    let (state, effects) = submit_link(AppState::new(), "https://youtube.com/watch?v=bad");
    let first = only_request_id(&effects);
    let (state, _) = update(
        state,
        Msg::ConversionFinished {
            request_id: first,
            outcome: Err(ConversionFailure::service("bad link")),
        },
    );
    assert_eq!(state.phase(), Phase::Failed);

    let (state, effects) = submit_link(state, "https://youtube.com/watch?v=abc");
    let second = only_request_id(&effects);
    assert!(second > first);
    let view = state.view();
    assert_eq!(view.phase, Phase::Pending);
    assert_eq!(view.error_message, None);
    assert_eq!(view.result, None);

    let (state, _) = update(
        state,
        Msg::ConversionFinished {
            request_id: second,
            outcome: Ok(sample_result()),
        },
    );
    assert_eq!(state.phase(), Phase::Resolved);
    assert_eq!(state.error(), None);
}

#[test]
fn resubmitting_after_success_discards_previous_result() {
    init_logging();
    let (state, effects) = submit_link(AppState::new(), "https://youtube.com/watch?v=abc");
    let request_id = only_request_id(&effects);
    let (state, _) = update(
        state,
        Msg::ConversionFinished {
            request_id,
            outcome: Ok(sample_result()),
        },
    );

    let (state, _) = update(state, Msg::Submitted);
    assert_eq!(state.phase(), Phase::Pending);
    assert_eq!(state.result(), None);
    assert_eq!(state.active_download_location(), None);
}

#[test]
fn editing_input_keeps_phase_and_result() {
    init_logging();
    let (state, effects) = submit_link(AppState::new(), "https://youtube.com/watch?v=abc");
    let request_id = only_request_id(&effects);
    let (state, _) = update(
        state,
        Msg::ConversionFinished {
            request_id,
            outcome: Ok(sample_result()),
        },
    );

    let (state, effects) = update(state, Msg::InputChanged("something else".to_string()));
    assert!(effects.is_empty());
    assert_eq!(state.input(), "something else");
    assert_eq!(state.phase(), Phase::Resolved);
    assert_eq!(state.result(), Some(&sample_result()));
}
