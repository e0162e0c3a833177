use leptos::*;

/// Read-only label/value row
#[component]
pub fn SettingRow(label: &'static str, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <div class="setting-item">
            <span class="setting-label">{label}</span>
            <span class="setting-value">{value}</span>
        </div>
    }
}

/// Action button that stays disabled while `disabled` is true
#[component]
pub fn ActionButton(
    label: &'static str,
    #[prop(into)] disabled: MaybeSignal<bool>,
    on_press: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            class="action-button"
            disabled=move || disabled.get()
            on:click=move |_| on_press.call(())
        >
            {label}
        </button>
    }
}
