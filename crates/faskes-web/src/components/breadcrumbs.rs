//! Breadcrumb trail component

use dioxus::prelude::*;

/// One step in the breadcrumb trail
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
    pub label: String,
    pub href: String,
}

impl Crumb {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// Breadcrumb trail rendered above the page title
#[component]
pub fn Breadcrumbs(crumbs: Vec<Crumb>) -> Element {
    rsx! {
        nav {
            class: "breadcrumbs",
            aria_label: "breadcrumb",

            ol {
                for crumb in crumbs {
                    li {
                        key: "{crumb.href}",
                        class: "breadcrumb-item",
                        a { href: "{crumb.href}", "{crumb.label}" }
                    }
                }
            }
        }
    }
}
