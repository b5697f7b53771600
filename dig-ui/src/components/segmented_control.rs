//! A row of toggle buttons where exactly one is selected

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use dioxus::prelude::*;

#[derive(Clone, PartialEq)]
pub struct Segment<T: Clone + PartialEq + 'static> {
    pub label: &'static str,
    pub value: T,
}

impl<T: Clone + PartialEq + 'static> Segment<T> {
    pub fn new(label: &'static str, value: T) -> Self {
        Self { label, value }
    }
}

#[component]
pub fn SegmentedControl<T: Clone + PartialEq + 'static>(
    segments: Vec<Segment<T>>,
    selected: T,
    on_select: EventHandler<T>,
) -> Element {
    rsx! {
        div { class: "flex gap-1 bg-gray-800/50 rounded-lg p-1",
            for segment in segments {
                Button {
                    variant: if segment.value == selected { ButtonVariant::Secondary } else { ButtonVariant::Ghost },
                    size: ButtonSize::Small,
                    onclick: {
                        let value = segment.value.clone();
                        move |_| on_select.call(value.clone())
                    },
                    "{segment.label}"
                }
            }
        }
    }
}
