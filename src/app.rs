use copilot_core::view::{CHAT_HEADING, DASHBOARD_HEADING, PAGE_TITLE};
use copilot_core::{Message, SessionView};
use wasm_bindgen::prelude::*;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::{create_session, end_session, error_message, fetch_session, send_message};
use crate::components::{ChatView, Dashboard, LogSidebar};
use crate::types::{DashboardView, ProcessingState, TranscriptLine};

#[function_component(App)]
pub fn app() -> Html {
    let session_id = use_state(|| None::<String>);
    let view = use_state(|| None::<SessionView>);
    let processing_state = use_state(|| ProcessingState::Idle);

    // Every page load starts a fresh session, so a reload clears the page
    {
        let session_id = session_id.clone();
        let view = view.clone();
        let processing_state = processing_state.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match create_session().await {
                    Ok(created) => {
                        session_id.set(Some(created.session_id));
                        view.set(Some(created.view));
                    }
                    Err(e) => {
                        let error_msg = format!("Could not start a session: {}", error_message(&e));
                        web_sys::console::log_1(&error_msg.clone().into());
                        processing_state.set(ProcessingState::Error(error_msg));
                    }
                }
            });
            || ()
        });
    }

    // Leaving or reloading the page ends the session on the backend
    use_effect_with((*session_id).clone(), |session_id| {
        let listener = session_id.clone().and_then(|id| {
            let window = web_sys::window()?;
            let on_pagehide = Closure::<dyn FnMut()>::new(move || {
                if let Err(e) = end_session(&id) {
                    web_sys::console::log_1(&format!("Could not end session: {}", error_message(&e)).into());
                }
            });
            window
                .add_event_listener_with_callback("pagehide", on_pagehide.as_ref().unchecked_ref())
                .ok()?;
            Some((window, on_pagehide))
        });

        move || {
            if let Some((window, on_pagehide)) = listener {
                let _ = window
                    .remove_event_listener_with_callback("pagehide", on_pagehide.as_ref().unchecked_ref());
            }
        }
    });

    let on_send = {
        let session_id = session_id.clone();
        let view = view.clone();
        let processing_state = processing_state.clone();
        Callback::from(move |text: String| {
            let Some(id) = (*session_id).clone() else {
                processing_state.set(ProcessingState::Error("No active session".to_string()));
                return;
            };

            // Show the user's line before the agent answers
            if let Some(current) = (*view).clone() {
                let mut pending = current;
                pending
                    .transcript
                    .push(TranscriptLine::for_message(&Message::user(text.clone())));
                view.set(Some(pending));
            }
            processing_state.set(ProcessingState::Loading);

            let view = view.clone();
            let processing_state = processing_state.clone();
            spawn_local(async move {
                match send_message(&id, &text).await {
                    Ok(updated) => {
                        view.set(Some(updated));
                        processing_state.set(ProcessingState::Idle);
                    }
                    Err(e) => {
                        let error_msg = format!("Agent error: {}", error_message(&e));
                        web_sys::console::log_1(&error_msg.clone().into());
                        processing_state.set(ProcessingState::Error(error_msg));
                        if let Ok(current) = fetch_session(&id).await {
                            view.set(Some(current));
                        }
                    }
                }
            });
        })
    };

    let busy = matches!(*processing_state, ProcessingState::Loading);
    let (dashboard, transcript, raw_logs) = match &*view {
        Some(current) => (
            current.dashboard.clone(),
            current.transcript.clone(),
            current.raw_logs.clone(),
        ),
        None => (
            DashboardView::Empty {
                message: "Starting session...".to_string(),
            },
            Vec::new(),
            Vec::new(),
        ),
    };

    html! {
        <div style="display:flex; flex-direction:row; height:100vh; font-family:Arial,sans-serif;">
            <div style="width:350px; min-width:350px; padding:1.5em; background:#f8f9fa; border-right:1px solid #ddd; overflow-y:auto;">
                <LogSidebar {raw_logs} />
            </div>
            <div style="flex:1; display:flex; flex-direction:column; padding:1em 2em; gap:1em; overflow-y:auto;">
                <h1 style="margin:0; color:#333;">{ PAGE_TITLE }</h1>

                <h2 style="margin:0.5em 0 0 0; color:#333;">{ DASHBOARD_HEADING }</h2>
                <Dashboard view={dashboard} />

                <h2 style="margin:0.5em 0 0 0; color:#333;">{ CHAT_HEADING }</h2>
                { match &*processing_state {
                    ProcessingState::Error(msg) => html! {
                        <div style="padding:1em; background:#f8d7da; border:1px solid #f5c6cb; border-radius:4px;">
                            <strong style="color:#721c24;">{ "✗ Error!" }</strong>
                            <div style="margin-top:0.5em; color:#721c24; font-size:0.9em;">
                                { msg }
                            </div>
                        </div>
                    },
                    _ => html! {}
                }}
                <ChatView {transcript} {busy} {on_send} />
            </div>
        </div>
    }
}
