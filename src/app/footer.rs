use leptos::prelude::*;

use crate::build_info::build_year;
use crate::content::portfolio;

#[component]
pub fn Footer() -> impl IntoView {
    let name = &portfolio().personal_info.name;
    let line = match build_year() {
        Some(year) => format!("© {year} {name}"),
        None => format!("© {name}"),
    };
    view! {
        <footer class="py-8 text-center text-sm text-secondary">
            <p>{line}</p>
        </footer>
    }
}
