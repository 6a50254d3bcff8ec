//! Demo request form

use aim_core::{
    DemoField, DemoRequestForm, FieldUpdate, ProductionLines, SubmissionBackend, SubmissionStatus,
};
use leptos::*;

use crate::backend::TimerBackend;

const INPUT_CLASS: &str = "w-full px-4 py-2 rounded-lg border border-gray-300 focus:ring-2 focus:ring-blue-500 focus:border-blue-500";

#[component]
pub fn DemoRequestPanel() -> impl IntoView {
    let form = create_rw_signal(DemoRequestForm::new());
    let backend = store_value(TimerBackend::new());

    let status = move || form.with(|f| f.status());
    let value = move |field: DemoField| move || form.with(|f| f.request().value_of(field).to_string());
    let on_input = move |field: DemoField| {
        move |ev: leptos::ev::Event| match FieldUpdate::from_input(field, event_target_value(&ev)) {
            Ok(update) => form.update(|f| f.update_field(update)),
            Err(err) => tracing::warn!(error = %err, "Ignoring demo form input"),
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(request) = form.try_update(|f| f.begin_submit()).flatten() else {
            return;
        };
        let backend = backend.get_value();
        spawn_local(async move {
            let outcome = backend.submit(&request).await;
            // No-op once the panel has been unmounted
            form.try_update(|f| f.finish_submit(outcome));
        });
    };

    view! {
        <Show
            when=move || status() != SubmissionStatus::Submitted
            fallback=|| view! {
                <div class="text-center py-8 animate-fade-in">
                    <div class="text-6xl text-green-500 mb-4">"✓"</div>
                    <h3 class="text-2xl font-bold text-gray-900 mb-2">"Thank You!"</h3>
                    <p class="text-gray-600">
                        "We'll be in touch soon to schedule your personalized demo."
                    </p>
                </div>
            }
        >
            <h2 class="text-3xl font-bold mb-2 text-gray-900">"Request a Demo"</h2>
            <p class="text-gray-600 mb-6">"See how AIManufacture Pro can transform your operations"</p>

            <form on:submit=on_submit class="space-y-4">
                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-1">"Name"</label>
                    <input
                        type="text"
                        name=DemoField::Name.as_str()
                        required
                        class=INPUT_CLASS
                        on:input=on_input(DemoField::Name)
                        prop:value=value(DemoField::Name)
                    />
                </div>

                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-1">"Email"</label>
                    <input
                        type="email"
                        name=DemoField::Email.as_str()
                        required
                        class=INPUT_CLASS
                        on:input=on_input(DemoField::Email)
                        prop:value=value(DemoField::Email)
                    />
                </div>

                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-1">"Company"</label>
                    <input
                        type="text"
                        name=DemoField::Company.as_str()
                        required
                        class=INPUT_CLASS
                        on:input=on_input(DemoField::Company)
                        prop:value=value(DemoField::Company)
                    />
                </div>

                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-1">
                        "Number of Production Lines"
                    </label>
                    <select
                        name=DemoField::ProductionLines.as_str()
                        required
                        class=INPUT_CLASS
                        on:change=on_input(DemoField::ProductionLines)
                        prop:value=value(DemoField::ProductionLines)
                    >
                        <option value="">"Select range"</option>
                        {ProductionLines::ALL.into_iter().map(|range| view! {
                            <option value=range.as_str()>{range.as_str()}</option>
                        }).collect::<Vec<_>>()}
                    </select>
                </div>

                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-1">"Message"</label>
                    <textarea
                        name=DemoField::Message.as_str()
                        rows="4"
                        class=INPUT_CLASS
                        on:input=on_input(DemoField::Message)
                        prop:value=value(DemoField::Message)
                    ></textarea>
                </div>

                <button
                    type="submit"
                    class="w-full py-3 bg-blue-600 hover:bg-blue-700 disabled:opacity-75 text-white rounded-lg font-semibold flex items-center justify-center gap-2 transition"
                    disabled=move || form.with(|f| f.is_locked())
                >
                    <Show
                        when=move || status() == SubmissionStatus::Submitting
                        fallback=|| view! { <span>"➤"</span> "Request Demo" }
                    >
                        <span class="w-5 h-5 border-2 border-white border-t-transparent rounded-full animate-spin"></span>
                    </Show>
                </button>
            </form>
        </Show>
    }
}
