//! Left-pane list of tools.

use leptos::prelude::*;

use crate::state::tools::{Tool, ToolsState};

/// Vertical button list; the selected tool is highlighted.
#[component]
pub fn ToolSelector() -> impl IntoView {
    let tools = expect_context::<RwSignal<ToolsState>>();

    let buttons = Tool::ALL
        .into_iter()
        .map(|tool| {
            let class = move || {
                if tools.get().selected == tool {
                    "btn btn-primary text-start"
                } else {
                    "btn btn-outline-secondary text-start"
                }
            };
            view! {
                <button
                    type="button"
                    class=class
                    on:click=move |_| tools.update(|t| t.selected = tool)
                >
                    {tool.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <nav class="tool-selector d-grid gap-1 p-2">
            <h6 class="text-body-secondary mb-1">"Tools"</h6>
            {buttons}
        </nav>
    }
}
