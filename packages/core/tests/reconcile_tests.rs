#![allow(clippy::disallowed_methods)]

use iqps_core::{
    DerivedState, DisplayStatus, FilterField, SearchResult, SortBy, SortOrder, ViewState,
    available_years, display_results,
};

fn result(year: i32, course_name: &str) -> SearchResult {
    SearchResult::new(
        year,
        course_name,
        "endsem",
        format!("https://example.org/{year}/{course_name}.pdf"),
    )
}

fn years(results: &[SearchResult]) -> Vec<i32> {
    results.iter().map(|r| r.year).collect()
}

fn names(results: &[SearchResult]) -> Vec<&str> {
    results.iter().map(|r| r.course_name.as_str()).collect()
}

fn mixed() -> Vec<SearchResult> {
    vec![
        result(2021, "Mathematics I"),
        result(2019, "Physics of Waves"),
        result(2021, "algorithms"),
        result(2020, "Discrete Structures"),
        result(2019, "Electrical Technology"),
    ]
}

#[test]
fn year_filter_keeps_only_matching_subset() {
    let results = mixed();
    for year in [2019, 2020, 2021, 1999] {
        let view = ViewState {
            filter_by_year: Some(year),
            ..Default::default()
        };
        let displayed = display_results(&results, &view);
        assert!(displayed.iter().all(|r| r.year == year));
        assert!(displayed.iter().all(|r| results.contains(r)));
        assert_eq!(
            displayed.len(),
            results.iter().filter(|r| r.year == year).count()
        );
    }
}

#[test]
fn unfiltered_display_is_a_permutation() {
    let results = mixed();
    for sort_by in [SortBy::Year, SortBy::CourseName] {
        for sort_order in [SortOrder::Ascending, SortOrder::Descending] {
            let view = ViewState {
                filter_by_year: None,
                sort_by,
                sort_order,
            };
            let displayed = display_results(&results, &view);
            assert_eq!(displayed.len(), results.len());
            assert!(results.iter().all(|r| displayed.contains(r)));
        }
    }
}

#[test]
fn sorts_by_year_in_both_directions() {
    let results = vec![result(2021, "a"), result(2019, "b"), result(2020, "c")];

    let mut view = ViewState {
        sort_by: SortBy::Year,
        sort_order: SortOrder::Ascending,
        ..Default::default()
    };
    assert_eq!(years(&display_results(&results, &view)), [2019, 2020, 2021]);

    view.sort_order = SortOrder::Descending;
    assert_eq!(years(&display_results(&results, &view)), [2021, 2020, 2019]);
}

#[test]
fn sorts_course_names_with_fixed_collation() {
    let results = vec![result(2020, "Zoology"), result(2020, "algebra")];
    let mut view = ViewState {
        sort_by: SortBy::CourseName,
        sort_order: SortOrder::Ascending,
        ..Default::default()
    };
    assert_eq!(names(&display_results(&results, &view)), ["algebra", "Zoology"]);

    view.sort_order = SortOrder::Descending;
    assert_eq!(names(&display_results(&results, &view)), ["Zoology", "algebra"]);
}

#[test]
fn year_filter_overrides_year_sort_to_name_ascending() {
    let results = vec![result(2020, "B"), result(2020, "A")];
    let view = ViewState {
        filter_by_year: Some(2020),
        sort_by: SortBy::Year,
        sort_order: SortOrder::Descending,
    };
    assert_eq!(names(&display_results(&results, &view)), ["A", "B"]);
}

#[test]
fn available_years_are_unique_and_descending() {
    let results = vec![
        result(2019, "a"),
        result(2021, "b"),
        result(2019, "c"),
        result(2020, "d"),
    ];
    assert_eq!(available_years(&results), [2021, 2020, 2019]);
}

#[test]
fn available_years_ignore_active_filter() {
    let results = mixed();
    let view = ViewState {
        filter_by_year: Some(2020),
        ..Default::default()
    };
    let derived = DerivedState::derive(&results, &view);
    assert_eq!(derived.available_years, [2021, 2020, 2019]);
    assert_eq!(names(&derived.displayed_results), ["Discrete Structures"]);
}

#[test]
fn derivation_is_idempotent() {
    let results = mixed();
    let view = ViewState {
        sort_by: SortBy::CourseName,
        sort_order: SortOrder::Ascending,
        ..Default::default()
    };
    let first = DerivedState::derive(&results, &view);
    let second = DerivedState::derive(&results, &view);
    assert_eq!(first, second);
}

#[test]
fn malformed_values_pass_through_unchanged() {
    let results = vec![result(-4, ""), result(2020, "Mathematics I")];
    let displayed = display_results(&results, &ViewState::default());
    assert_eq!(years(&displayed), [2020, -4]);
    assert_eq!(displayed[1].course_name, "");
}

#[test]
fn control_updates_drive_rederivation() {
    let results = mixed();
    let mut view = ViewState::default();

    view.update(FilterField::FilterByYear, "2019").unwrap();
    assert_eq!(
        names(&display_results(&results, &view)),
        ["Electrical Technology", "Physics of Waves"]
    );

    view.update(FilterField::FilterByYear, "not a year").unwrap();
    assert_eq!(display_results(&results, &view).len(), results.len());
}

#[test]
fn new_results_drop_stale_year_filter() {
    let view = ViewState {
        filter_by_year: Some(2019),
        ..Default::default()
    };
    let fresh = vec![result(2022, "Operating Systems"), result(2023, "Compilers")];
    let reconciled = view.reconcile(&available_years(&fresh));
    assert_eq!(reconciled.filter_by_year, None);
    assert_eq!(years(&display_results(&fresh, &reconciled)), [2023, 2022]);
}

#[test]
fn awaiting_results_suppresses_table() {
    let results = mixed();
    let status = DisplayStatus::from_flags(true, true, "", results.len());
    assert_eq!(status, DisplayStatus::Loading);
    assert!(!status.is_ready());
}

#[test]
fn cleared_year_filter_stays_cleared_for_later_lists() {
    let mut view = ViewState::default();
    view.update(FilterField::FilterByYear, "2019").unwrap();
    assert_eq!(view.filter_by_year, Some(2019));

    let without_2019 = vec![result(2022, "Operating Systems"), result(2023, "Compilers")];
    view = view.for_results(&without_2019);
    assert_eq!(view.filter_by_year, None);

    let with_2019 = mixed();
    view = view.for_results(&with_2019);
    assert_eq!(view.filter_by_year, None);
    assert_eq!(display_results(&with_2019, &view).len(), with_2019.len());
}

#[test]
fn year_filter_survives_lists_that_still_contain_it() {
    let view = ViewState {
        filter_by_year: Some(2021),
        sort_by: SortBy::CourseName,
        sort_order: SortOrder::Ascending,
    };
    assert_eq!(view.for_results(&mixed()), view);
}
