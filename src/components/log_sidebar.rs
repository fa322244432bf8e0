use copilot_core::sidebar::SIDEBAR_HEADER;
use yew::prelude::*;

use crate::types::RawLogView;

#[derive(Properties, PartialEq)]
pub struct LogSidebarProps {
    pub raw_logs: Vec<RawLogView>,
}

#[function_component(LogSidebar)]
pub fn log_sidebar(props: &LogSidebarProps) -> Html {
    html! {
        <div style="display:flex; flex-direction:column; gap:0.5em;">
            <h2 style="margin:0 0 0.5em 0; font-size:1.2em; color:#333;">{ SIDEBAR_HEADER }</h2>
            { for props.raw_logs.iter().map(|log| html! {
                <div>
                    <strong style="color:#555;">{ log.title() }</strong>
                    <pre style="margin:0.25em 0 0 0; padding:0.5em; background:#fff; border:1px solid #ddd; border-radius:4px; font-size:0.8em; white-space:pre-wrap; word-break:break-word;">
                        { log.pretty_json() }
                    </pre>
                </div>
            })}
        </div>
    }
}
