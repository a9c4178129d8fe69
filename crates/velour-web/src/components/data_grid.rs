use leptos::prelude::*;
use leptos_router::components::A;
use velour_core::{Cell, Column, EvaluationSetting, GridPage, GridRow, GridState, COLUMNS};

/// Paginated, sortable table over evaluation settings. Rows are read from
/// `rows` on every render; sort, filter, hidden columns and page position
/// are local.
#[component]
pub fn DataGrid(#[prop(into)] rows: Signal<Vec<EvaluationSetting>>) -> impl IntoView {
    let grid = RwSignal::new(GridState::new());
    let page = Memo::new(move |_| rows.with(|r| grid.with(|g| g.view(r))));
    let columns = Memo::new(move |_| page.with(|p| p.columns.clone()));

    view! {
        <div class="data-grid">
            <div class="column-toggles">
                {COLUMNS
                    .iter()
                    .filter(|col| col.hideable)
                    .map(|col| column_toggle(*col, grid))
                    .collect::<Vec<_>>()}
            </div>
            <table class="results-table">
                <thead>
                    <tr>
                        {move || columns.get().into_iter().map(|col| header_cell(col, grid)).collect::<Vec<_>>()}
                    </tr>
                    <tr class="filter-row">
                        {move || columns.get().into_iter().map(|col| filter_cell(col, grid)).collect::<Vec<_>>()}
                    </tr>
                </thead>
                <tbody>
                    {move || page.with(|p| p.rows.iter().map(row_view).collect::<Vec<_>>())}
                </tbody>
            </table>

            {move || page.with(GridPage::is_empty).then(|| view! {
                <p class="placeholder grid-overlay">"No rows"</p>
            })}

            <div class="grid-footer">
                <span class="grid-range">{move || page.with(GridPage::range_label)}</span>
                {move || (page.with(|p| p.page_count) > 1).then(|| view! {
                    <button
                        class="page-btn prev"
                        disabled=move || !page.with(GridPage::has_prev)
                        on:click=move |_| {
                            let count = page.with_untracked(|p| p.page_count);
                            grid.update(|g| g.prev_page(count));
                        }
                    >
                        "Previous"
                    </button>
                    <button
                        class="page-btn next"
                        disabled=move || !page.with(GridPage::has_next)
                        on:click=move |_| {
                            let count = page.with_untracked(|p| p.page_count);
                            grid.update(|g| g.next_page(count));
                        }
                    >
                        "Next"
                    </button>
                })}
            </div>
        </div>
    }
}

fn width_style(col: &Column) -> Option<String> {
    col.width.map(|w| format!("width: {}px", w))
}

fn column_toggle(col: Column, grid: RwSignal<GridState>) -> impl IntoView {
    view! {
        <label class="column-toggle">
            <input
                type="checkbox"
                class="column-visible"
                prop:checked=move || !grid.with(|g| g.is_hidden(col.id))
                on:change=move |_| {
                    grid.update(|g| {
                        if let Err(e) = g.toggle_hidden(col.id) {
                            leptos::logging::warn!("{}", e);
                        }
                    })
                }
            />
            " "
            {col.header}
        </label>
    }
}

fn header_cell(col: Column, grid: RwSignal<GridState>) -> AnyView {
    if !col.sortable {
        return view! { <th style=width_style(&col)>{col.header}</th> }.into_any();
    }

    let arrow = move || {
        grid.with(|g| g.sort_direction(col.id))
            .map(|d| d.arrow())
            .unwrap_or("")
    };

    view! {
        <th
            class="sortable"
            style=width_style(&col)
            on:click=move |_| {
                grid.update(|g| {
                    if let Err(e) = g.toggle_sort(col.id) {
                        leptos::logging::warn!("{}", e);
                    }
                })
            }
        >
            {col.header}
            " "
            <span class="sort-arrow">{arrow}</span>
        </th>
    }
    .into_any()
}

fn filter_cell(col: Column, grid: RwSignal<GridState>) -> AnyView {
    if !col.filterable {
        return view! { <th></th> }.into_any();
    }

    let value = move || {
        grid.with(|g| {
            g.filter()
                .filter(|f| f.column == col.id)
                .map(|f| f.text.clone())
                .unwrap_or_default()
        })
    };

    view! {
        <th>
            <input
                type="text"
                class="grid-filter"
                placeholder="Filter"
                prop:value=value
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    grid.update(|g| {
                        if let Err(e) = g.set_filter(col.id, &text) {
                            leptos::logging::warn!("{}", e);
                        }
                    });
                }
            />
        </th>
    }
    .into_any()
}

fn row_view(row: &GridRow) -> impl IntoView {
    view! {
        <tr class="grid-row">
            {row.cells.iter().map(cell_view).collect::<Vec<_>>()}
        </tr>
    }
}

fn cell_view(cell: &Cell) -> AnyView {
    match cell {
        Cell::Text(text) => view! { <td>{text.clone()}</td> }.into_any(),
        Cell::Link { label, href } => {
            let label = *label;
            view! {
                <td>
                    <A href=href.clone()>{label}</A>
                </td>
            }
            .into_any()
        }
    }
}
