use copilot_core::chat::{BUSY_LABEL, INPUT_LABEL, SEND_LABEL};
use copilot_core::Role;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::types::TranscriptLine;

#[derive(Properties, PartialEq)]
pub struct ChatViewProps {
    pub transcript: Vec<TranscriptLine>,
    pub busy: bool,
    pub on_send: Callback<String>,
}

#[function_component(ChatView)]
pub fn chat_view(props: &ChatViewProps) -> Html {
    let input = use_state(String::new);

    let on_input = {
        let input = input.clone();
        Callback::from(move |event: InputEvent| {
            let target = event.target_unchecked_into::<HtmlInputElement>();
            input.set(target.value());
        })
    };

    let on_submit = {
        let input = input.clone();
        let on_send = props.on_send.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let text = (*input).clone();
            if text.trim().is_empty() {
                return;
            }
            input.set(String::new());
            on_send.emit(text);
        })
    };

    html! {
        <div style="display:flex; flex-direction:column; gap:0.75em;">
            <div style="display:flex; flex-direction:column; gap:0.5em;">
                { for props.transcript.iter().map(|line| {
                    let background = match line.role {
                        Role::User => "#f8f9fa",
                        Role::Assistant => "#ffffff",
                    };
                    html! {
                        <div style={format!("padding:0.5em 0.75em; border:1px solid #eee; border-radius:4px; background:{}; white-space:pre-wrap;", background)}>
                            { format!("{} ", line.marker) }
                            <strong>{ format!("{}:", line.speaker) }</strong>
                            { format!(" {}", line.content) }
                        </div>
                    }
                })}
            </div>

            { if props.busy {
                html! {
                    <div style="display:flex; align-items:center; gap:0.5em; color:#0056b3;">
                        <div class="spinner" style="
                            width:16px; height:16px;
                            border:2px solid #f3f3f3;
                            border-top:2px solid #007bff;
                            border-radius:50%;
                            animation:spin 1s linear infinite;
                        "></div>
                        <span>{ BUSY_LABEL }</span>
                    </div>
                }
            } else {
                html! {}
            }}

            <form onsubmit={on_submit} style="display:flex; flex-direction:column; gap:0.5em;">
                <label for="user-input" style="font-weight:bold; color:#555;">{ INPUT_LABEL }</label>
                <div style="display:flex; gap:0.5em;">
                    <input
                        id="user-input"
                        type="text"
                        value={(*input).clone()}
                        oninput={on_input}
                        disabled={props.busy}
                        style="flex:1; padding:0.5em; border:1px solid #ccc; border-radius:4px;"
                    />
                    <button
                        type="submit"
                        disabled={props.busy}
                        style={format!(
                            "padding:0.5em 1.5em; border:none; border-radius:4px; {}",
                            if props.busy {
                                "background:#ccc; cursor:not-allowed;"
                            } else {
                                "background:#007bff; color:white; cursor:pointer;"
                            }
                        )}
                    >
                        { SEND_LABEL }
                    </button>
                </div>
            </form>
        </div>
    }
}
