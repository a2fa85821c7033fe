use leptos::prelude::*;
use study_core::AppViewModel;

use super::constants::{PAGE_TITLE, STYLESHEET};
use super::sections::{Dashboard, FeatureGrid, Hero, Upload};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Hero,
    Upload,
    Dashboard,
    FeatureGrid,
}

/// Top to bottom.
pub const PAGE_ORDER: [Section; 4] = [
    Section::Hero,
    Section::Upload,
    Section::Dashboard,
    Section::FeatureGrid,
];

fn section_view(section: Section, model: &AppViewModel) -> AnyView {
    match section {
        Section::Hero => view! { <Hero /> }.into_any(),
        Section::Upload => view! { <Upload model={model.clone()} /> }.into_any(),
        Section::Dashboard => view! { <Dashboard /> }.into_any(),
        Section::FeatureGrid => view! { <FeatureGrid /> }.into_any(),
    }
}

pub fn render_section(section: Section, model: &AppViewModel) -> String {
    section_view(section, model).to_html()
}

/// Renders the full landing page; only the upload widget depends on `model`.
pub fn compose_page(model: &AppViewModel) -> String {
    let sections = PAGE_ORDER
        .iter()
        .map(|section| section_view(*section, model))
        .collect_view();
    let document = view! {
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{PAGE_TITLE}</title>
                <link rel="stylesheet" href={STYLESHEET} />
            </head>
            <body>
                <main class="min-h-screen">{sections}</main>
            </body>
        </html>
    };
    format!("<!DOCTYPE html>\n{}", document.to_html())
}
