use crate::domain::dispatch::ui::form::DispatchFormPage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <DispatchFormPage />
    }
}
