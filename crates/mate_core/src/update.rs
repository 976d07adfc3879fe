use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            state.set_input(text);
            Vec::new()
        }
        Msg::FormatToggled => {
            state.toggle_format();
            Vec::new()
        }
        Msg::Submitted => {
            let url = state.input().trim().to_owned();
            if url.is_empty() {
                state.fail_validation();
                return (state, Vec::new());
            }
            // Latest submission wins: a new id makes any in-flight answer stale.
            let request_id = state.begin_request(url.clone());
            vec![Effect::RequestConversion { request_id, url }]
        }
        Msg::ConversionFinished {
            request_id,
            outcome,
        } => {
            state.apply_completion(request_id, outcome);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
