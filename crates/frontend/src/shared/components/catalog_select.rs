use leptos::prelude::*;

/// Single-select bound to a fixed catalog.
///
/// Renders a leading placeholder option with an empty value, followed by one
/// option per catalog item in catalog order. An empty selection therefore
/// reads back as `""`.
///
/// # Example
/// ```rust,ignore
/// <CatalogSelect
///     id="store"
///     value=Signal::derive(move || form.get().store)
///     on_change=Callback::new(move |v| form.update(|f| f.store = v))
///     items=catalogs::STORES
///     placeholder="-- Choose Store --"
/// />
/// ```
#[component]
pub fn CatalogSelect(
    /// Element id, referenced by the field label.
    id: &'static str,
    /// Currently selected value; `""` shows the placeholder.
    value: Signal<String>,
    /// Callback invoked with the newly selected value.
    on_change: Callback<String>,
    /// Catalog entries, in render order.
    items: &'static [&'static str],
    /// Text of the leading empty option.
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <select
            id=id
            class="catalog-select"
            prop:value=value
            on:change=move |ev| on_change.run(event_target_value(&ev))
        >
            <option value="">{placeholder}</option>
            {items
                .iter()
                .map(|item| view! { <option value=*item>{*item}</option> })
                .collect_view()}
        </select>
    }
}
