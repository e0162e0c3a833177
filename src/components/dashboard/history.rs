use leptos::*;

use crate::state::use_dashboard;
use crate::view::{ChartState, HistoryChart, HistoryPanel, HistoryRow, NO_HISTORY};

const CHART_WIDTH: f64 = 600.0;
const CHART_HEIGHT: f64 = 240.0;
const MARGIN_LEFT: f64 = 48.0;
const MARGIN_BOTTOM: f64 = 32.0;

/// History modal: list plus fill-level chart
#[component]
pub fn HistoryModal() -> impl IntoView {
    let ctx = use_dashboard();
    let close = move |_| ctx.controller().close_history();

    view! {
        <Show when=move || ctx.with(|s| s.history_open)>
            <div class="modal-backdrop" on:click=close>
                <div class="modal modal-wide" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <h2>"Water Level History"</h2>
                        <button class="modal-close" aria-label="Close" on:click=close>"×"</button>
                    </div>
                    <div class="modal-body">
                        {move || match ctx.with(|s| s.history.clone()) {
                            None | Some(HistoryPanel::Empty) => {
                                view! { <div class="no-data">{NO_HISTORY}</div> }.into_view()
                            }
                            Some(HistoryPanel::Loaded { rows, chart }) => view! {
                                <ChartArea chart=chart />
                                <HistoryList rows=rows />
                            }
                            .into_view(),
                        }}
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[component]
fn ChartArea(chart: ChartState) -> impl IntoView {
    match chart {
        ChartState::Ready(chart) => view! { <LineChart chart=chart /> }.into_view(),
        other => view! {
            <div class="chart-placeholder">{other.placeholder()}</div>
        }
        .into_view(),
    }
}

/// Fill percentage over time as an SVG polyline
#[component]
fn LineChart(chart: HistoryChart) -> impl IntoView {
    let plot_width = CHART_WIDTH - MARGIN_LEFT;
    let plot_height = CHART_HEIGHT - MARGIN_BOTTOM;
    let model = chart.model;
    let points = model.polyline(plot_width, plot_height);

    let y_ticks = model
        .y_ticks
        .iter()
        .map(|tick| {
            let y = plot_height * (1.0 - tick.position);
            view! {
                <line class="grid-line" x1="0" x2=plot_width y1=y y2=y></line>
                <text class="axis-label" x="-8" y=y text-anchor="end">{tick.label.clone()}</text>
            }
        })
        .collect_view();

    let x_ticks = model
        .x_ticks
        .iter()
        .map(|tick| {
            let x = plot_width * tick.position;
            view! {
                <text class="axis-label" x=x y={plot_height + 20.0} text-anchor="middle">
                    {tick.label.clone()}
                </text>
            }
        })
        .collect_view();

    view! {
        <svg
            class="history-chart"
            data-chart-id=chart.id
            viewBox=format!("0 0 {} {}", CHART_WIDTH, CHART_HEIGHT)
            role="img"
            aria-label="Fill percentage history"
        >
            <g transform=format!("translate({}, 0)", MARGIN_LEFT)>
                {y_ticks}
                {x_ticks}
                <polyline class="fill-line" fill="none" points=points></polyline>
            </g>
        </svg>
    }
}

#[component]
fn HistoryList(rows: Vec<HistoryRow>) -> impl IntoView {
    view! {
        <table class="history-list">
            <thead>
                <tr>
                    <th>"Time"</th>
                    <th>"Volume"</th>
                    <th>"Fill"</th>
                </tr>
            </thead>
            <tbody>
                {rows
                    .into_iter()
                    .map(|row| {
                        view! {
                            <tr>
                                <td>{row.time}</td>
                                <td>{row.gallons}</td>
                                <td>{row.fill}</td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}
