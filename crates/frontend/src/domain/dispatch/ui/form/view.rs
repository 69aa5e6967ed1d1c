use super::view_model::{DispatchFormViewModel, NoticeKind};
use crate::shared::components::catalog_select::CatalogSelect;
use crate::shared::icons::icon;
use contracts::catalogs;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

#[component]
pub fn DispatchFormPage() -> impl IntoView {
    let vm = DispatchFormViewModel::new();
    let form = vm.form;
    let error = vm.error;
    let notification = vm.notification;

    let vm_count = vm.clone();
    let vm_cards = vm.clone();
    let vm_save = vm.clone();
    let vm_reset = vm.clone();

    view! {
        <div class="dispatch-form">
            <div class="page-header">
                <h2>"Solar Installation Dispatch"</h2>
            </div>

            <div class="details-form">
                <div class="form-group">
                    <label for="date-time">"Date & Time"</label>
                    <input
                        type="datetime-local"
                        id="date-time"
                        prop:value=move || form.get().date_time
                        on:input=move |ev| form.update(|f| f.date_time = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="store">"Store"</label>
                    <CatalogSelect
                        id="store"
                        value=Signal::derive(move || form.get().store)
                        on_change=Callback::new(move |v| form.update(|f| f.store = v))
                        items=catalogs::STORES
                        placeholder="-- Choose Store --"
                    />
                </div>

                <div class="form-group">
                    <label for="technician">"Technician"</label>
                    <CatalogSelect
                        id="technician"
                        value=Signal::derive(move || form.get().technician)
                        on_change=Callback::new(move |v| form.update(|f| f.technician = v))
                        items=catalogs::TECHNICIANS
                        placeholder="-- Choose Technician --"
                    />
                </div>

                <div class="form-group">
                    <label for="district">"District"</label>
                    <CatalogSelect
                        id="district"
                        value=Signal::derive(move || form.get().district)
                        on_change=Callback::new(move |v| form.update(|f| f.district = v))
                        items=catalogs::DISTRICTS
                        placeholder="-- Choose District --"
                    />
                </div>

                <div class="form-group">
                    <label for="system-count">"Number of Systems"</label>
                    <input
                        type="number"
                        id="system-count"
                        min="1"
                        max="20"
                        placeholder="How many systems?"
                        prop:value=move || form.get().system_count
                        on:input=move |ev| vm_count.set_system_count(event_target_value(&ev))
                    />
                </div>
            </div>

            <div id="count-display" class="count-display">
                {move || form.get().count_display()}
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <Show when=move || form.get().cards_visible()>
                {
                    let vm_cards = vm_cards.clone();
                    view! {
                        <div id="cards-container" class="cards-container">
                            <div id="cards" class="cards">
                                <For
                                    each=move || 0..form.get().cards.len()
                                    key=|index| *index
                                    let:index
                                >
                                    <SystemCard vm=vm_cards.clone() index=index />
                                </For>
                            </div>
                        </div>
                    }
                }
            </Show>

            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| vm_save.save_command()
                >
                    {icon("save")}
                    " Save Dispatch"
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| vm_reset.reset_command()
                >
                    {icon("cancel")}
                    " Reset"
                </Button>
            </div>

            {move || notification.get().map(|n| {
                let modifier = match n.kind {
                    NoticeKind::Success => "save-notification--success",
                    NoticeKind::Error => "save-notification--error",
                };
                view! {
                    <div id="notification" class=format!("save-notification {}", modifier)>
                        {n.message}
                    </div>
                }
            })}
        </div>
    }
}

/// One system configuration card. `index` is 0-based; the title and the
/// element ids carry the 1-based number so they read in document order.
#[component]
fn SystemCard(vm: DispatchFormViewModel, index: usize) -> impl IntoView {
    let form = vm.form;
    let number = index + 1;

    view! {
        <div class="card">
            <div class="card-header">
                <h3 class="card-title">{format!("System {}", number)}</h3>
            </div>

            <div class="form-group">
                <label for=format!("customer-{}", number)>"Customer Name"</label>
                <input
                    type="text"
                    id=format!("customer-{}", number)
                    class="customer-name"
                    placeholder="Enter customer name"
                    prop:value=move || {
                        form.get()
                            .cards
                            .get(index)
                            .map(|card| card.customer_name.clone())
                            .unwrap_or_default()
                    }
                    on:input=move |ev| {
                        form.update(|f| f.set_customer_name(index, event_target_value(&ev)));
                    }
                />
            </div>

            <div class="form-group">
                <label for=format!("plant-{}", number)>"Plant Type"</label>
                <select
                    id=format!("plant-{}", number)
                    class="plant-type"
                    prop:value=move || {
                        form.get()
                            .cards
                            .get(index)
                            .map(|card| card.plant_type.clone())
                            .unwrap_or_default()
                    }
                    on:change=move |ev| {
                        form.update(|f| f.set_plant_type(index, event_target_value(&ev)));
                    }
                >
                    <option value="">"Select Plant Type"</option>
                    {catalogs::PLANT_TYPES
                        .iter()
                        .map(|pt| view! { <option value=*pt>{*pt}</option> })
                        .collect_view()}
                </select>
            </div>

            <div class="components-grid">
                {catalogs::COMPONENT_NAMES
                    .iter()
                    .enumerate()
                    .map(|(slot, name)| {
                        let dom_id = component_dom_id(name, number);
                        let label_for = dom_id.clone();
                        view! {
                            <div class="component-item">
                                <input
                                    type="checkbox"
                                    id=dom_id
                                    class="component-checkbox"
                                    prop:checked=move || {
                                        form.get()
                                            .cards
                                            .get(index)
                                            .map(|card| card.components[slot])
                                            .unwrap_or(false)
                                    }
                                    on:change=move |ev| {
                                        form.update(|f| {
                                            f.set_component(index, slot, event_target_checked(&ev));
                                        });
                                    }
                                />
                                <label for=label_for>{*name}</label>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Checkbox element id: component name lowercased with whitespace runs
/// replaced by `-`, qualified by the 1-based card number ("earthing-kit-2").
fn component_dom_id(name: &str, number: usize) -> String {
    let slug = name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase();
    format!("{}-{}", slug, number)
}

#[cfg(test)]
mod tests {
    use super::component_dom_id;
    use contracts::catalogs;

    #[test]
    fn dom_ids_slugify_whitespace_and_case() {
        assert_eq!(component_dom_id("Module", 1), "module-1");
        assert_eq!(component_dom_id("Earthing Kit", 2), "earthing-kit-2");
        assert_eq!(component_dom_id("L.A", 3), "l.a-3");
        assert_eq!(component_dom_id("AC wire", 20), "ac-wire-20");
    }

    #[test]
    fn dom_ids_are_unique_within_and_across_cards() {
        let mut seen = std::collections::BTreeSet::new();
        for number in 1..=catalogs::MAX_SYSTEMS {
            for name in catalogs::COMPONENT_NAMES {
                assert!(seen.insert(component_dom_id(name, number)));
            }
        }
        assert_eq!(
            seen.len(),
            catalogs::MAX_SYSTEMS * catalogs::COMPONENT_NAMES.len()
        );
    }
}
