//! Main application component

use aim_core::SiteContent;
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::components::*;
use crate::pages::*;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let content = match SiteContent::embedded() {
        Ok(content) => content,
        Err(err) => {
            tracing::error!(error = %err, "Site content failed to load");
            return view! { <ContentUnavailable/> }.into_view();
        }
    };
    provide_context(content);

    view! {
        <Stylesheet id="leptos" href="/pkg/aim-marketing.css"/>
        <Title text="AIManufacture Pro | AI-Powered Manufacturing Intelligence"/>
        <Meta
            name="description"
            content="Control 1,000+ production lines with AI-driven monitoring, predictive maintenance and quality control."
        />
        <Router>
            <div class="min-h-screen bg-white">
                <Navbar/>
                <main>
                    <Routes>
                        <Route path="/" view=HomePage/>
                    </Routes>
                </main>
                <Footer/>
            </div>
        </Router>
    }
    .into_view()
}

#[component]
fn ContentUnavailable() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-slate-900 text-white">
            <p class="text-xl">"This page is temporarily unavailable."</p>
        </div>
    }
}
