use yew::prelude::*;

use crate::types::DashboardView;

const CELL_STYLE: &str = "padding:0.5em 0.75em; border-bottom:1px solid #ddd; text-align:left; vertical-align:top;";

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub view: DashboardView,
}

/// Ticket table, one row per turn. Rows are tinted red when the agent asked
/// for escalation and green otherwise.
#[function_component(Dashboard)]
pub fn dashboard(props: &DashboardProps) -> Html {
    match &props.view {
        DashboardView::Empty { message } => html! {
            <div style="padding:1em; background:#e7f3ff; border:1px solid #b3d9ff; border-radius:4px; color:#0056b3;">
                { message }
            </div>
        },
        DashboardView::Table { columns, rows } => html! {
            <div style="overflow-x:auto; border:1px solid #ddd; border-radius:4px;">
                <table style="width:100%; border-collapse:collapse; font-size:0.9em;">
                    <thead>
                        <tr style="background:#f5f5f5;">
                            { for columns.iter().map(|column| html! {
                                <th style={CELL_STYLE}>{ column }</th>
                            })}
                        </tr>
                    </thead>
                    <tbody>
                        { for rows.iter().map(|row| html! {
                            <tr style={row.style.css()}>
                                { for row.cells().into_iter().map(|cell| html! {
                                    <td style={CELL_STYLE}>{ cell }</td>
                                })}
                            </tr>
                        })}
                    </tbody>
                </table>
            </div>
        },
    }
}
