//! Employee listing page

use maud::{html, Markup};
use staffdir_core::{Employee, Page};

use super::layout;

/// Render one page of the directory with its navigation.
pub fn index(page: &Page<Employee>) -> Markup {
    let content = html! {
        h1 { "Employees" }
        @if page.items.is_empty() {
            p.empty { "No employees yet." }
        } @else {
            ol.employees start=(page.start_index()) {
                @for employee in &page.items {
                    li { (employee.title) }
                }
            }
        }
        (pagination(page))
    };

    layout::page("Employees", content)
}

/// "Page N of M" with first/previous/next/last links.
///
/// Links only appear when their target page exists.
pub fn pagination<T>(page: &Page<T>) -> Markup {
    html! {
        nav.pagination {
            @if let Some(previous) = page.previous_page_number() {
                a href="?page=1" { "« first" }
                a href={ "?page=" (previous) } { "previous" }
            }
            span.current {
                "Page " (page.number) " of " (page.total_pages) "."
            }
            @if let Some(next) = page.next_page_number() {
                a href={ "?page=" (next) } { "next" }
                a href={ "?page=" (page.total_pages) } { "last »" }
            }
        }
    }
}
