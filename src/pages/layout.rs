//! Shared page chrome rendered with Leptos SSR.

use leptos::prelude::*;

use super::SubmitOutcome;

const STYLES: &str = "\
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; background: #f1f1f1; margin: 0; }\
.page { max-width: 720px; margin: 0 auto; padding: 24px 16px; }\
.page-title { font-size: 20px; margin: 0 0 16px; }\
.card { background: #fff; border-radius: 12px; padding: 16px; margin-bottom: 16px; box-shadow: 0 1px 2px rgba(0,0,0,0.15); }\
.card h2, .card h3, .card h4 { margin: 0 0 8px; }\
.customization-list { list-style: none; padding: 0; margin: 0; }\
.customization-item { padding: 12px 0; border-top: 1px solid #e3e3e3; }\
.customization-item:first-child { border-top: none; }\
.tone-success { color: #0c5132; }\
.tone-critical { color: #8e1f0b; }\
.tone-caution { color: #5e4200; }\
label { display: block; margin: 12px 0; }\
input[type=text], select { display: block; width: 100%; padding: 6px 8px; margin-top: 4px; box-sizing: border-box; }\
button { background: #303030; color: #fff; border: none; border-radius: 8px; padding: 8px 12px; cursor: pointer; }\
button[disabled] { opacity: 0.5; cursor: default; }\
";

/// Render `body` inside a full HTML document.
pub fn render_document<F, V>(title: &'static str, body: F) -> String
where
    F: FnOnce() -> V,
    V: IntoView,
{
    let owner = Owner::new();
    let html = owner.with(|| body().to_html());
    format!(
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\"/>\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\"/>\
         <title>{title}</title><style>{STYLES}</style></head><body>{html}</body></html>"
    )
}

/// Page shown when the Admin API could not be reached.
pub fn render_error_page(detail: String) -> String {
    render_document("Admin API unavailable", move || {
        view! {
            <PageShell heading="Something went wrong">
                <Card>
                    <p class="tone-critical">"The Shopify Admin API could not be reached. Reload the page to try again."</p>
                    <p>{detail}</p>
                </Card>
            </PageShell>
        }
    })
}

#[component]
pub fn PageShell(heading: &'static str, children: Children) -> impl IntoView {
    view! {
        <main class="page">
            <h1 class="page-title">{heading}</h1>
            {children()}
        </main>
    }
}

#[component]
pub fn Card(children: Children) -> impl IntoView {
    view! { <section class="card">{children()}</section> }
}

/// Status line under a form: the headline plus any further user errors.
#[component]
pub fn OutcomeBanner(outcome: Option<SubmitOutcome>) -> impl IntoView {
    outcome.map(|outcome| {
        let class = format!("outcome {}", outcome.tone().class_name());
        let headline = outcome.headline().to_owned();
        let rest = outcome.additional_errors();
        view! {
            <div class=class aria-live="polite">
                <h4>{headline}</h4>
                {(!rest.is_empty())
                    .then(|| {
                        view! {
                            <ul class="outcome-details">
                                {rest.into_iter().map(|message| view! { <li>{message}</li> }).collect_view()}
                            </ul>
                        }
                    })}
            </div>
        }
    })
}
