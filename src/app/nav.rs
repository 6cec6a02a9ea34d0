use leptos::prelude::{document, window};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    About,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::About,
        Section::Projects,
        Section::Contact,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }
}

/// Smooth scrolling comes from `scroll-behavior` in the stylesheet.
pub fn scroll_into_view(element_id: &str) {
    match document().get_element_by_id(element_id) {
        Some(el) => el.scroll_into_view(),
        None => log::debug!("nothing to scroll to: #{element_id}"),
    }
}

pub fn scroll_to_top() {
    window().scroll_to_with_x_and_y(0.0, 0.0);
}

pub fn open_external(url: &str) {
    if let Err(e) = window().open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer")
    {
        log::debug!("couldn't open {url}: {e:?}");
    }
}
