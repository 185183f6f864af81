//! Filter and sort controls for the result list.

use dioxus::prelude::*;
use iqps_core::{ALL_YEARS, FilterField, SortBy, SortOrder, ViewState};

/// One `<option>` of a [`Select`].
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub title: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            title: title.into(),
        }
    }
}

/// Props for Select component.
#[derive(Props, Clone, PartialEq)]
pub struct SelectProps {
    /// Currently selected value.
    pub value: String,
    pub options: Vec<SelectOption>,
    /// Called with the newly selected value.
    pub on_input: EventHandler<String>,
}

#[component]
pub fn Select(props: SelectProps) -> Element {
    let on_input = props.on_input;

    rsx! {
        div { class: "select-wrapper",
            select {
                value: "{props.value}",
                oninput: move |e| on_input.call(e.value()),
                for opt in props.options.iter() {
                    option {
                        key: "{opt.value}",
                        value: "{opt.value}",
                        selected: opt.value == props.value,
                        "{opt.title}"
                    }
                }
            }
        }
    }
}

/// Props for ResultsFilter component.
#[derive(Props, Clone, PartialEq)]
pub struct ResultsFilterProps {
    /// Current selections.
    pub view: ViewState,
    /// Years offered by the year selector, newest first.
    pub available_years: Vec<i32>,
    /// Called with the control that changed and its raw value.
    pub on_update: EventHandler<(FilterField, String)>,
}

/// Row of year, sort key and sort order selectors.
#[component]
pub fn ResultsFilter(props: ResultsFilterProps) -> Element {
    let on_update = props.on_update;

    let view = props.view;
    let year_options: Vec<SelectOption> = std::iter::once(SelectOption::new(ALL_YEARS, "All Years"))
        .chain(
            props
                .available_years
                .iter()
                .map(|year| SelectOption::new(year.to_string(), year.to_string())),
        )
        .collect();

    rsx! {
        div { class: "row results-filter",
            Select {
                value: view.year_select_value(),
                options: year_options,
                on_input: move |value| on_update.call((FilterField::FilterByYear, value)),
            }
            Select {
                value: view.sort_by.as_str().to_string(),
                options: vec![
                    SelectOption::new(SortBy::Year.as_str(), "Sort by Year"),
                    SelectOption::new(SortBy::CourseName.as_str(), "Sort by Course Name"),
                ],
                on_input: move |value| on_update.call((FilterField::SortBy, value)),
            }
            Select {
                value: view.sort_order.as_str().to_string(),
                options: vec![
                    SelectOption::new(SortOrder::Ascending.as_str(), "Ascending"),
                    SelectOption::new(SortOrder::Descending.as_str(), "Descending"),
                ],
                on_input: move |value| on_update.call((FilterField::SortOrder, value)),
            }
        }
    }
}
