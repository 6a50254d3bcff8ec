//! Mocked dashboard preview

use aim_core::content::{ChartBox, PreviewContent};
use aim_core::SiteContent;
use leptos::*;

const CHART: ChartBox = ChartBox {
    width: 720.0,
    height: 256.0,
    padding: 32.0,
};

#[component]
pub fn DashboardPreviewSection() -> impl IntoView {
    let preview = expect_context::<SiteContent>().preview;
    let statuses = preview.statuses.clone();
    let metrics = preview.metrics.clone();

    view! {
        <section id="preview" class="bg-slate-900 py-24">
            <div class="container mx-auto px-4">
                <div class="text-center mb-16">
                    <h2 class="text-4xl font-bold mb-4 text-white">"Powerful Dashboard Interface"</h2>
                    <p class="text-xl text-gray-300 max-w-2xl mx-auto">
                        "Monitor and control your entire manufacturing operation from a single, "
                        "intuitive interface designed for maximum efficiency."
                    </p>
                </div>

                <div class="bg-white/10 backdrop-blur-lg rounded-2xl p-6 shadow-2xl">
                    <div class="flex justify-between items-center mb-8">
                        <div>
                            <h3 class="text-2xl font-semibold text-white mb-1">"Production Overview"</h3>
                            <p class="text-gray-400">"Real-time metrics and analytics"</p>
                        </div>
                        <div class="flex gap-4">
                            <button class="px-4 py-2 bg-blue-600 text-white rounded-lg hover:scale-105 transition">"Export Data"</button>
                            <button class="px-4 py-2 bg-white/10 text-white rounded-lg hover:scale-105 transition">"Settings"</button>
                        </div>
                    </div>

                    <div class="grid grid-cols-1 md:grid-cols-3 gap-6 mb-8">
                        {metrics.into_iter().map(|metric| view! {
                            <div class="bg-white/5 rounded-xl p-4">
                                <h4 class="text-gray-400 mb-2">{metric.label}</h4>
                                <div class="text-3xl font-bold text-white">{metric.value}</div>
                            </div>
                        }).collect::<Vec<_>>()}
                    </div>

                    <div class="h-64 mb-8">
                        <ProductionChart preview=preview/>
                    </div>

                    <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                        {statuses.into_iter().map(|status| view! {
                            <div class="flex items-center gap-2">
                                <div class="w-2 h-2 rounded-full bg-green-400"></div>
                                <span class="text-gray-300">{status}</span>
                            </div>
                        }).collect::<Vec<_>>()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProductionChart(preview: PreviewContent) -> impl IntoView {
    let points = preview.chart_points(&CHART);
    let polyline = preview.polyline(&CHART);
    let (lo, hi) = preview.value_range().unwrap_or((0.0, 0.0));
    let bottom = CHART.height - CHART.padding;

    // Dashed grid: one line per sample, plus top and bottom rules
    let grid_x = points
        .iter()
        .map(|(x, _)| view! {
            <line x1={*x} y1={CHART.padding} x2={*x} y2={bottom} stroke="#374151" stroke-dasharray="3 3"/>
        })
        .collect::<Vec<_>>();
    let labels = preview
        .series
        .iter()
        .zip(points.iter())
        .map(|(point, (x, _))| view! {
            <text x={*x} y={CHART.height - 8.0} fill="#9CA3AF" font-size="12" text-anchor="middle">
                {point.label.clone()}
            </text>
        })
        .collect::<Vec<_>>();
    let dots = points
        .iter()
        .map(|(x, y)| view! { <circle cx={*x} cy={*y} r="4" fill="#3B82F6"/> })
        .collect::<Vec<_>>();

    view! {
        <svg
            class="w-full h-full"
            viewBox=format!("0 0 {} {}", CHART.width, CHART.height)
            preserveAspectRatio="none"
        >
            {grid_x}
            <line x1={CHART.padding} y1={CHART.padding} x2={CHART.width - CHART.padding} y2={CHART.padding} stroke="#374151" stroke-dasharray="3 3"/>
            <line x1={CHART.padding} y1={bottom} x2={CHART.width - CHART.padding} y2={bottom} stroke="#9CA3AF"/>
            <text x="4" y={CHART.padding + 4.0} fill="#9CA3AF" font-size="12">{format!("{:.0}", hi)}</text>
            <text x="4" y={bottom} fill="#9CA3AF" font-size="12">{format!("{:.0}", lo)}</text>
            <polyline points=polyline fill="none" stroke="#3B82F6" stroke-width="2"/>
            {dots}
            {labels}
        </svg>
    }
}
