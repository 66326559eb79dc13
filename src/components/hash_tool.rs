//! Digest table pane.

use leptos::prelude::*;

use crate::state::tools::ToolsState;
use crate::util::codec::InputKind;

#[component]
pub fn HashTool() -> impl IntoView {
    let tools = expect_context::<RwSignal<ToolsState>>();
    let rows = Memo::new(move |_| tools.with(|t| t.hash.rows()));
    let valid = Memo::new(move |_| tools.with(|t| t.hash.input_valid()));

    let input_kinds = InputKind::ALL
        .into_iter()
        .map(|kind| {
            let id = format!("HashTool-input-{}", kind.key());
            view! {
                <input
                    type="radio"
                    class="btn-check"
                    name="HashTool-input"
                    id=id.clone()
                    autocomplete="off"
                    prop:checked=move || tools.with(|t| t.hash.input_kind == kind)
                    on:change=move |_| tools.update(|t| t.hash.input_kind = kind)
                />
                <label class="btn btn-outline-primary btn-sm" for=id>{kind.label()}</label>
            }
        })
        .collect_view();

    view! {
        <div class="tool-pane d-flex flex-column gap-2 p-2">
            <div class="btn-group" role="group" aria-label="Input">{input_kinds}</div>
            <textarea
                class=move || {
                    if valid.get() {
                        "form-control font-monospace"
                    } else {
                        "form-control font-monospace border-danger"
                    }
                }
                rows="4"
                placeholder="Input"
                prop:value=move || tools.with(|t| t.hash.input.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    tools.update(|t| t.hash.input = value);
                }
            ></textarea>
            <table class="table table-sm">
                <thead>
                    <tr>
                        <th>"Algorithm"</th>
                        <th>"Bytes (Bits)"</th>
                        <th>"Hash"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        rows.get()
                            .into_iter()
                            .map(|row| {
                                view! {
                                    <tr>
                                        <td>{row.algorithm.label()}</td>
                                        <td>{format!("{} ({})", row.size_bytes, row.size_bytes * 8)}</td>
                                        <td class="font-monospace text-break">{row.hex}</td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}
