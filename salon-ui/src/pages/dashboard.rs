//! Dashboard Page
//!
//! Revenue and appointment charts, staff performance and customer feedback,
//! with search, rating filter, manual refresh and a five-minute auto refresh.

use gloo_timers::callback::Interval;
use leptos::*;
use leptos_router::*;
use salon_booking::dashboard::{
    DashboardData, DashboardFilter, PanelResults, DEFAULT_REFRESH_INTERVAL_MS,
};
use salon_booking::notice::NoticeKind;

use crate::api::GlooClient;
use crate::components::{Chart, ChartKind, ChartSkeleton};
use crate::state::GlobalState;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let data = create_rw_signal(DashboardData::new());
    let filter = create_rw_signal(DashboardFilter::new());
    let client = store_value(GlooClient::from_storage());

    let refresh = move |manual: bool| {
        spawn_local(async move {
            state.loading.set(true);

            // Merge into the data as it is now; failed panels keep what they showed
            let fetched = PanelResults::fetch(&client.get_value()).await;
            let Some(report) = data.try_update(|d| d.apply(fetched)) else {
                return;
            };

            for panel in &report.failed {
                web_sys::console::error_1(&format!("Failed to fetch {}", panel.label()).into());
            }
            match report.notice(manual) {
                Some((NoticeKind::Success, message)) => state.show_success(message),
                Some((NoticeKind::Error, message)) => state.show_error(message),
                None => {}
            }

            state.loading.set(false);
        });
    };

    // Initial load, then auto refresh
    refresh(false);
    let interval = Interval::new(DEFAULT_REFRESH_INTERVAL_MS as u32, move || refresh(false));
    on_cleanup(move || drop(interval));

    let loaded = move || data.with(|d| d.revenue.is_some() || d.appointments.is_some());

    view! {
        <div class="space-y-8">
            // Page header
            <div class="flex flex-col md:flex-row md:items-center md:justify-between gap-4">
                <div>
                    <h1 class="text-3xl font-bold">"Dashboard"</h1>
                    <p class="text-gray-400 mt-1">"How the salon is doing"</p>
                </div>

                <div class="flex items-center gap-2">
                    <input
                        type="search"
                        placeholder="Search staff or feedback"
                        class="bg-gray-800 border border-gray-700 rounded-lg px-3 py-2"
                        on:input=move |ev| filter.update(|f| f.set_search(&event_target_value(&ev)))
                    />
                    <select
                        class="bg-gray-800 border border-gray-700 rounded-lg px-3 py-2"
                        on:change=move |ev| filter.update(|f| f.set_rating_filter(&event_target_value(&ev)))
                    >
                        <option value="all">"All ratings"</option>
                        <option value="5">"5 stars"</option>
                        <option value="4+">"4+ stars"</option>
                        <option value="3+">"3+ stars"</option>
                    </select>
                    <button
                        class="px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg font-medium transition-colors"
                        on:click=move |_| refresh(true)
                    >
                        "Refresh"
                    </button>
                    <A
                        href="/booking"
                        class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                    >
                        "New Appointment"
                    </A>
                </div>
            </div>

            <SummaryRow data=data />

            // Charts
            <div class="grid md:grid-cols-2 gap-8">
                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Revenue"</h2>
                    <Show when=loaded fallback=|| view! { <ChartSkeleton /> }>
                        <Chart
                            series=Signal::derive(move || data.with(|d| d.revenue.clone()))
                            kind=ChartKind::Line
                            color="#FF9800"
                        />
                    </Show>
                </section>
                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Appointments"</h2>
                    <Show when=loaded fallback=|| view! { <ChartSkeleton /> }>
                        <Chart
                            series=Signal::derive(move || data.with(|d| d.appointments.clone()))
                            kind=ChartKind::Bar
                            color="#2196F3"
                        />
                    </Show>
                </section>
            </div>

            <div class="grid md:grid-cols-2 gap-8">
                <StaffPanel data=data filter=filter />
                <FeedbackPanel data=data filter=filter />
            </div>
        </div>
    }
}

#[component]
fn SummaryRow(data: RwSignal<DashboardData>) -> impl IntoView {
    let revenue = move || {
        data.with(|d| d.revenue.as_ref().map(|s| format!("${:.0}", s.total())))
            .unwrap_or_else(|| "-".to_string())
    };
    let appointments = move || {
        data.with(|d| d.appointments.as_ref().map(|s| format!("{:.0}", s.total())))
            .unwrap_or_else(|| "-".to_string())
    };
    let rating = move || {
        data.with(|d| d.average_rating().map(|r| format!("{:.1} ★", r)))
            .unwrap_or_else(|| "-".to_string())
    };

    view! {
        <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
            <SummaryCard label="Revenue" value=Signal::derive(revenue) />
            <SummaryCard label="Appointments" value=Signal::derive(appointments) />
            <SummaryCard label="Average rating" value=Signal::derive(rating) />
        </div>
    }
}

#[component]
fn SummaryCard(label: &'static str, value: Signal<String>) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4">
            <p class="text-sm text-gray-400">{label}</p>
            <p class="text-2xl font-bold mt-1">{move || value.get()}</p>
        </div>
    }
}

#[component]
fn StaffPanel(data: RwSignal<DashboardData>, filter: RwSignal<DashboardFilter>) -> impl IntoView {
    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Staff Performance"</h2>
            <div class="space-y-4">
                {move || {
                    let staff = data.with(|d| {
                        filter.with(|f| f.staff(&d.staff_performance).into_iter().cloned().collect::<Vec<_>>())
                    });
                    if staff.is_empty() {
                        return view! { <p class="text-gray-400 text-sm">"No staff to show"</p> }.into_view();
                    }
                    staff
                        .into_iter()
                        .map(|member| view! {
                            <div class="flex items-center space-x-3">
                                <img src=member.avatar.clone() alt=member.name.clone() class="w-10 h-10 rounded-full bg-gray-600" />
                                <div class="flex-1">
                                    <div class="flex justify-between text-sm">
                                        <span class="font-medium">{member.name.clone()}</span>
                                        <span class="text-gray-400">{format!("{:.0}%", member.performance)}</span>
                                    </div>
                                    <p class="text-xs text-gray-400">{member.role.clone()}</p>
                                    <div class="h-2 bg-gray-700 rounded-full mt-1">
                                        <div
                                            class="h-full bg-primary-600 rounded-full"
                                            style=format!("width: {}%", member.bar_width())
                                        />
                                    </div>
                                </div>
                            </div>
                        })
                        .collect_view()
                }}
            </div>
        </section>
    }
}

#[component]
fn FeedbackPanel(data: RwSignal<DashboardData>, filter: RwSignal<DashboardFilter>) -> impl IntoView {
    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Customer Feedback"</h2>
            <div class="space-y-3">
                {move || {
                    let feedback = data.with(|d| {
                        filter.with(|f| f.feedback(&d.customer_feedback).into_iter().cloned().collect::<Vec<_>>())
                    });
                    if feedback.is_empty() {
                        return view! { <p class="text-gray-400 text-sm">"No feedback matches"</p> }.into_view();
                    }
                    feedback
                        .into_iter()
                        .map(|entry| view! {
                            <div class="py-2 border-b border-gray-700 last:border-0">
                                <div class="flex justify-between text-sm">
                                    <span class="text-yellow-400">{entry.stars()}</span>
                                    <span class="text-gray-400">{entry.date.clone()}</span>
                                </div>
                                <p class="mt-1">{entry.comment.clone()}</p>
                                <p class="text-xs text-gray-400 mt-1">{format!("- {}", entry.customer)}</p>
                            </div>
                        })
                        .collect_view()
                }}
            </div>
        </section>
    }
}
