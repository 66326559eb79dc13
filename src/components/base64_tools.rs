//! Base64 encode and decode panes.
//!
//! Each pane edits its own form inside `ToolsState`; outputs are recomputed
//! from the form whenever it changes. Option groups are Bootstrap `btn-check`
//! radios.

use leptos::prelude::*;

use crate::state::tools::ToolsState;
use crate::util::codec::{DecodeOutput, EncodeOutput, InputKind};

fn input_class(valid: bool) -> &'static str {
    if valid { "form-control font-monospace" } else { "form-control font-monospace border-danger" }
}

/// One `btn-check` radio plus its label.
fn option_radio(
    group: &'static str,
    key: &'static str,
    label: &'static str,
    checked: Signal<bool>,
    on_pick: impl Fn() + 'static,
) -> impl IntoView {
    let id = format!("{group}-{key}");
    view! {
        <input
            type="radio"
            class="btn-check"
            name=group
            id=id.clone()
            autocomplete="off"
            prop:checked=checked
            on:change=move |_| on_pick()
        />
        <label class="btn btn-outline-primary btn-sm" for=id>{label}</label>
    }
}

#[component]
pub fn Base64Encode() -> impl IntoView {
    let tools = expect_context::<RwSignal<ToolsState>>();
    let output = Memo::new(move |_| tools.with(|t| t.encode.output()));

    let input_kinds = InputKind::ALL
        .into_iter()
        .map(|kind| {
            option_radio(
                "Base64Encode-input",
                kind.key(),
                kind.label(),
                Signal::derive(move || tools.with(|t| t.encode.input_kind == kind)),
                move || tools.update(|t| t.encode.input_kind = kind),
            )
        })
        .collect_view();
    let output_kinds = EncodeOutput::ALL
        .into_iter()
        .map(|kind| {
            option_radio(
                "Base64Encode-output",
                kind.key(),
                kind.label(),
                Signal::derive(move || tools.with(|t| t.encode.output_kind == kind)),
                move || tools.update(|t| t.encode.output_kind = kind),
            )
        })
        .collect_view();

    view! {
        <div class="tool-pane d-flex flex-column gap-2 p-2">
            <div class="btn-group" role="group" aria-label="Input">{input_kinds}</div>
            <textarea
                class=move || input_class(output.get().input_valid)
                rows="6"
                placeholder="Input"
                prop:value=move || tools.with(|t| t.encode.input.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    tools.update(|t| t.encode.input = value);
                }
            ></textarea>
            <div class="btn-group" role="group" aria-label="Output">{output_kinds}</div>
            <textarea
                class="form-control font-monospace"
                rows="6"
                readonly=true
                prop:value=move || output.get().text
            ></textarea>
        </div>
    }
}

#[component]
pub fn Base64Decode() -> impl IntoView {
    let tools = expect_context::<RwSignal<ToolsState>>();
    let output = Memo::new(move |_| tools.with(|t| t.decode.output()));

    let output_kinds = DecodeOutput::ALL
        .into_iter()
        .map(|kind| {
            option_radio(
                "Base64Decode-output",
                kind.key(),
                kind.label(),
                Signal::derive(move || tools.with(|t| t.decode.output_kind == kind)),
                move || tools.update(|t| t.decode.output_kind = kind),
            )
        })
        .collect_view();

    view! {
        <div class="tool-pane d-flex flex-column gap-2 p-2">
            <textarea
                class=move || input_class(output.get().input_valid)
                rows="6"
                placeholder="Base64"
                prop:value=move || tools.with(|t| t.decode.input.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    tools.update(|t| t.decode.input = value);
                }
            ></textarea>
            <div class="btn-group" role="group" aria-label="Output">{output_kinds}</div>
            <textarea
                class="form-control font-monospace"
                rows="12"
                readonly=true
                prop:value=move || output.get().text
            ></textarea>
        </div>
    }
}
