//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::base64_tools::{Base64Decode, Base64Encode};
use crate::components::hash_tool::HashTool;
use crate::components::resize_scope::{ResizeScope, Resizer};
use crate::components::status_bar::StatusBar;
use crate::components::tool_selector::ToolSelector;
use crate::state::tools::{Tool, ToolsState};
use crate::state::ui::UiState;
use crate::util::theme;

/// Root application component.
///
/// Provides the shared [`UiState`] and [`ToolsState`], applies the saved
/// theme, starts keyboard zoom handling, and lays out the tool selector and
/// the selected tool as two resizable panes above the status bar.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let initial_theme = theme::read_preference();
    theme::apply(initial_theme);
    let ui = RwSignal::new(UiState::with_theme(initial_theme));
    provide_context(ui);
    let tools = RwSignal::new(ToolsState::default());
    provide_context(tools);

    #[cfg(feature = "csr")]
    start_zoom_shortcuts(ui);

    view! {
        <Title text="panelkit"/>

        <div class="app d-flex flex-column vh-100">
            <header class="app__header px-2 py-1 border-bottom">"panelkit"</header>
            <ResizeScope class="app__body d-flex flex-row flex-grow-1 overflow-hidden">
                <section class="app__pane" style="flex: 3; overflow: auto;">
                    <ToolSelector/>
                </section>
                <Resizer/>
                <section class="app__pane" style="flex: 7; overflow: auto;">
                    {move || match tools.with(|t| t.selected) {
                        Tool::Base64Encode => view! { <Base64Encode/> }.into_any(),
                        Tool::Base64Decode => view! { <Base64Decode/> }.into_any(),
                        Tool::Hash => view! { <HashTool/> }.into_any(),
                    }}
                </section>
            </ResizeScope>
            <StatusBar/>
        </div>
    }
}

/// Forward document key presses into a zoom loop for the life of the page.
#[cfg(feature = "csr")]
fn start_zoom_shortcuts(ui: RwSignal<UiState>) {
    use futures::StreamExt;
    use futures::channel::mpsc;

    use crate::util::keyboard::{self, Platform};
    use crate::util::zoom::{self, ZoomCommand};

    let (tx, mut rx) = mpsc::unbounded();
    if let Err(err) = keyboard::forward_keydown(tx) {
        leptos::logging::error!("keyboard shortcuts disabled: {err}");
        return;
    }

    let platform = Platform::detect();
    wasm_bindgen_futures::spawn_local(async move {
        while let Some(press) = rx.next().await {
            let Some(cmd) = ZoomCommand::from_key_press(&press, platform) else {
                continue;
            };
            ui.update(|u| {
                u.zoom_by(cmd);
            });
            let level = ui.get_untracked().zoom;
            leptos::logging::log!("zoom {cmd:?} -> {}", level.css_value());
            zoom::apply_zoom(level);
        }
    });
}
