use leptos::prelude::*;

use study_core::content::{Icon, DASHBOARD, FEATURE_GRID, HERO, UPLOAD};
use study_core::{accept_attribute, AppViewModel, FileRowView, SUPPORTED_FORMATS_LABEL};

use super::constants::*;

fn icon_class(name: &str, tint: &str) -> String {
    if tint.is_empty() {
        format!("icon icon-{name}")
    } else {
        format!("icon icon-{name} {tint}")
    }
}

/// Icon placeholder; the stylesheet maps `icon-<name>` to a glyph.
#[component]
pub fn IconMark(name: &'static str, #[prop(optional)] tint: &'static str) -> impl IntoView {
    view! { <i class={icon_class(name, tint)} aria-hidden="true"></i> }
}

#[component]
pub fn Hero() -> impl IntoView {
    let highlights = HERO
        .highlights
        .iter()
        .map(|highlight| {
            view! {
                <div class="card highlight">
                    <IconMark name={highlight.icon.name()} tint="text-primary" />
                    <div class="count">{highlight.count}</div>
                    <div class="caption">{highlight.label}</div>
                </div>
            }
        })
        .collect_view();

    let floating = HERO
        .floating_stats
        .iter()
        .enumerate()
        .map(|(index, stat)| {
            let marker = match stat.icon {
                Some(icon) => {
                    view! { <IconMark name={icon.name()} tint="text-accent" /> }.into_any()
                }
                None => view! { <span class="pulse"></span> }.into_any(),
            };
            view! {
                <div class={format!("card floating floating-{index}")}>
                    {marker}
                    <div>
                        <div class="headline">{stat.headline}</div>
                        <div class="caption">{stat.caption}</div>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id={SECTION_HERO} class="hero">
            <div class="hero-backdrop"></div>
            <div class="container hero-grid">
                <div class="hero-copy">
                    <h1>
                        {format!("{} ", HERO.title_lead)}
                        <span class="text-gradient">{HERO.title_accent}</span>
                    </h1>
                    <p class="lead">{HERO.subtitle}</p>
                    <div class="actions">
                        <button class="btn btn-hero">{HERO.primary_action}</button>
                        <button class="btn btn-outline">{HERO.secondary_action}</button>
                    </div>
                    <div class="highlights">{highlights}</div>
                </div>
                <div class="hero-visual">
                    <img src={HERO.image_src} alt={HERO.image_alt} />
                    {floating}
                </div>
            </div>
        </section>
    }
}

/// The drop area plus, once files were ingested, the "Processing Files" list.
#[component]
pub fn Upload(model: AppViewModel) -> impl IntoView {
    let zone_class = if model.drag_over {
        format!("card {DROP_ZONE} drag-over")
    } else {
        format!("card {DROP_ZONE}")
    };
    let formats = match &model.size_limit_label {
        Some(limit) => format!("Supports {SUPPORTED_FORMATS_LABEL} (Max {limit} each)"),
        None => format!("Supports {SUPPORTED_FORMATS_LABEL}"),
    };
    let file_list = model.shows_file_list().then(|| {
        let rows = model
            .files
            .into_iter()
            .map(|file| view! { <FileRow file={file} /> })
            .collect_view();
        view! {
            <div class="file-list">
                <h3>{UPLOAD.list_heading}</h3>
                {rows}
            </div>
        }
    });

    view! {
        <section id={SECTION_UPLOAD} class="upload">
            <div class="container">
                <div class="section-header">
                    <h2>{UPLOAD.heading}</h2>
                    <p>{UPLOAD.intro}</p>
                </div>
                <div class={zone_class}>
                    <IconMark name={Icon::Upload.name()} tint="text-white" />
                    <h3>{UPLOAD.drop_title}</h3>
                    <p>{UPLOAD.drop_hint}</p>
                    <p class="small">{formats}</p>
                    <label class="btn btn-outline" for={FILE_INPUT}>{UPLOAD.browse_action}</label>
                    <input
                        id={FILE_INPUT}
                        type="file"
                        multiple={true}
                        accept={accept_attribute()}
                        hidden={true}
                    />
                </div>
                {file_list}
            </div>
        </section>
    }
}

#[component]
fn FileRow(file: FileRowView) -> impl IntoView {
    let id = file.file_id.to_string();
    view! {
        <div class="card file-row" data-file-id={id.clone()}>
            <IconMark name={file.icon.label()} tint="text-primary" />
            <div class="file-body">
                <div class="file-head">
                    <p class="file-name">{file.name}</p>
                    <button class="btn btn-ghost remove" data-file-id={id.clone()} aria-label="Remove">
                        <IconMark name="x" />
                    </button>
                </div>
                <div class="file-meta">
                    <span>{file.size_label}</span>
                    <span>"•"</span>
                    <span>{file.progress_label}</span>
                </div>
                <progress max="100" value={format!("{:.0}", file.progress_percent.round())}></progress>
            </div>
        </div>
    }
}

#[component]
pub fn Dashboard() -> impl IntoView {
    let stats = DASHBOARD
        .stats
        .iter()
        .map(|stat| {
            view! {
                <div class="card stat">
                    <div>
                        <p class="label">{stat.label}</p>
                        <p class="value">{stat.value}</p>
                    </div>
                    <IconMark name={stat.icon.name()} tint={stat.tone.class()} />
                </div>
            }
        })
        .collect_view();

    let documents = DASHBOARD
        .recent_documents
        .iter()
        .map(|doc| {
            view! {
                <div class="document">
                    <div class="document-head">
                        <div>
                            <h4>{doc.name}</h4>
                            <p>{format!("{}/{} questions completed", doc.completed, doc.questions)}</p>
                        </div>
                        <span class={doc.badge().class()}>{format!("{}%", doc.progress)}</span>
                    </div>
                    <progress max="100" value={doc.progress.to_string()}></progress>
                </div>
            }
        })
        .collect_view();

    let recommendations = DASHBOARD
        .recommendations
        .iter()
        .map(|rec| {
            view! {
                <div class="recommendation">
                    <div class="recommendation-head">
                        <span class="badge badge-outline">{rec.category}</span>
                        <span class={rec.priority.badge().class()}>{rec.priority.label()}</span>
                    </div>
                    <h4>{rec.title}</h4>
                    <p>{rec.description}</p>
                </div>
            }
        })
        .collect_view();

    let teaser = DASHBOARD.teaser;
    view! {
        <section id={SECTION_DASHBOARD} class="dashboard">
            <div class="container">
                <div class="section-header">
                    <h2>{DASHBOARD.heading}</h2>
                    <p>{DASHBOARD.intro}</p>
                </div>
                <div class="stats-grid">{stats}</div>
                <div class="dashboard-grid">
                    <div class="card recent-documents">
                        <div class="card-head">
                            <h3>
                                <IconMark name={Icon::BookOpen.name()} tint="text-primary" />
                                {DASHBOARD.documents_heading}
                            </h3>
                            <button class="btn btn-ghost">
                                {DASHBOARD.documents_action}
                                <IconMark name={Icon::ArrowRight.name()} />
                            </button>
                        </div>
                        {documents}
                    </div>
                    <div class="card recommendations">
                        <div class="card-head">
                            <IconMark name={Icon::Brain.name()} tint="text-accent" />
                            <h3>{DASHBOARD.recommendations_heading}</h3>
                        </div>
                        {recommendations}
                        <button class="btn btn-gradient">
                            <IconMark name={Icon::BarChart.name()} />
                            {DASHBOARD.analysis_action}
                        </button>
                    </div>
                </div>
                <div class="card teaser">
                    <div class="teaser-icon">
                        <IconMark name={teaser.icon.name()} tint="text-white" />
                    </div>
                    <h3>{teaser.title}</h3>
                    <p>{teaser.body}</p>
                    <button class="btn btn-outline">
                        <IconMark name={teaser.action_icon.name()} />
                        {teaser.action}
                    </button>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn FeatureGrid() -> impl IntoView {
    let features = FEATURE_GRID
        .features
        .iter()
        .map(|feature| {
            view! {
                <div class="card feature">
                    <div class={format!("feature-icon {}", feature.gradient.class())}>
                        <IconMark name={feature.icon.name()} tint="text-white" />
                    </div>
                    <h3>{feature.title}</h3>
                    <p>{feature.description}</p>
                    <button class="btn btn-ghost">
                        {FEATURE_GRID.feature_action}
                        <IconMark name={Icon::ArrowRight.name()} />
                    </button>
                </div>
            }
        })
        .collect_view();

    let extras = FEATURE_GRID
        .extras
        .iter()
        .map(|extra| {
            view! {
                <div class="card extra">
                    <IconMark name={extra.icon.name()} tint="text-primary" />
                    <h4>{extra.title}</h4>
                    <p>{extra.description}</p>
                </div>
            }
        })
        .collect_view();

    let cta = FEATURE_GRID.call_to_action;
    view! {
        <section id={SECTION_FEATURES} class="features">
            <div class="container">
                <div class="section-header">
                    <h2>{FEATURE_GRID.heading}</h2>
                    <p>{FEATURE_GRID.intro}</p>
                </div>
                <div class="feature-grid">{features}</div>
                <div class="extras">{extras}</div>
                <div class="card call-to-action">
                    <h3>{cta.heading}</h3>
                    <p>{cta.body}</p>
                    <div class="actions">
                        <button class="btn btn-hero">{cta.primary_action}</button>
                        <button class="btn btn-outline">{cta.secondary_action}</button>
                    </div>
                </div>
            </div>
        </section>
    }
}
