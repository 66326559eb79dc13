//! Bottom status bar with the light/dark theme switch.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::theme;

/// Status bar at the bottom of the window.
#[component]
pub fn StatusBar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let zoom_label = move || format!("{:.0}%", ui.get().zoom.factor() * 100.0);
    let on_toggle = move |_| {
        let next = theme::toggle(ui.get_untracked().theme);
        ui.update(|u| u.theme = next);
    };

    view! {
        <div class="status-bar d-flex align-items-center px-2 border-top">
            <span class="status-bar__zoom">{zoom_label}</span>
            <div class="form-check form-switch ms-auto">
                <input
                    class="form-check-input"
                    type="checkbox"
                    role="switch"
                    id="ThemeSelector"
                    prop:checked=move || !ui.get().is_light()
                    on:change=on_toggle
                />
                <label class="form-check-label" for="ThemeSelector">
                    "Dark mode"
                </label>
            </div>
        </div>
    }
}
