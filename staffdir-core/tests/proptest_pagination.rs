use proptest::prelude::*;
use staffdir_core::{resolve, PageRequest, PageSize, PageWindow, Resolution};

fn collection(n: u32) -> Vec<u32> {
    (1..=n).collect()
}

proptest! {
    /// Property: total pages is max(1, ceil(N / size))
    #[test]
    fn prop_total_pages(n in 0u64..10_000, size in 1u32..200) {
        let page_size = PageSize::new(size).unwrap();
        let expected = std::cmp::max(1, n.div_ceil(u64::from(size)));
        prop_assert_eq!(u64::from(PageWindow::total_pages(n, page_size)), expected);
    }

    /// Property: every valid page is served as requested with the right count
    #[test]
    fn prop_valid_pages_exact(n in 0u32..500, size in 1u32..50) {
        let all = collection(n);
        let page_size = PageSize::new(size).unwrap();
        let total = PageWindow::total_pages(u64::from(n), page_size);

        for p in 1..=total {
            let page = resolve(&all, page_size, &PageRequest::number(i64::from(p)));
            prop_assert_eq!(page.number, p);
            prop_assert_eq!(page.resolution, Resolution::Exact);

            let expected = if p < total {
                size
            } else {
                n - (total - 1) * size
            };
            prop_assert_eq!(page.items.len() as u32, expected);
            prop_assert_eq!(page.has_previous, p > 1);
            prop_assert_eq!(page.has_next, p < total);
        }
    }

    /// Property: any input at all lands on a valid page with at most `size` items
    #[test]
    fn prop_arbitrary_input_is_bounded(n in 0u32..300, size in 1u32..30, raw in ".*") {
        let all = collection(n);
        let page_size = PageSize::new(size).unwrap();
        let page = resolve(&all, page_size, &PageRequest::raw(raw));

        prop_assert!(page.number >= 1);
        prop_assert!(page.number <= page.total_pages);
        prop_assert!(page.items.len() as u32 <= size);
    }

    /// Property: resolution is deterministic
    #[test]
    fn prop_deterministic(n in 0u32..300, size in 1u32..30, raw in "[-+]?[0-9a-z]{0,6}") {
        let all = collection(n);
        let page_size = PageSize::new(size).unwrap();
        let request = PageRequest::raw(raw);

        prop_assert_eq!(resolve(&all, page_size, &request), resolve(&all, page_size, &request));
    }

    /// Property: garbage falls back to page 1, overshoot to the last page
    #[test]
    fn prop_fallback_laws(n in 0u32..300, size in 1u32..30, word in "[a-z]{1,8}") {
        let all = collection(n);
        let page_size = PageSize::new(size).unwrap();
        let total = PageWindow::total_pages(u64::from(n), page_size);

        let garbage = resolve(&all, page_size, &PageRequest::raw(word));
        prop_assert_eq!(garbage.number, 1);
        prop_assert_eq!(garbage.resolution, Resolution::NotAnInteger);

        let overshoot = resolve(&all, page_size, &PageRequest::number(i64::from(total) + 50));
        prop_assert_eq!(overshoot.number, total);
    }
}

#[test]
fn reference_deployment_boundaries() {
    let all = collection(102);
    let size = PageSize::default();

    let first = resolve(&all, size, &PageRequest::number(1));
    assert_eq!(first.total_pages, 17);
    assert_eq!(first.items, (1..=6).collect::<Vec<_>>());
    assert!(!first.has_previous);
    assert!(first.has_next);

    let last = resolve(&all, size, &PageRequest::number(17));
    assert_eq!(last.items, (97..=102).collect::<Vec<_>>());
    assert!(!last.has_next);

    assert_eq!(resolve(&all, size, &PageRequest::raw("abc")).items, first.items);
    assert_eq!(resolve(&all, size, &PageRequest::number(99)).items, last.items);
}
