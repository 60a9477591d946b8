use dioxus::prelude::*;

/// Right-hand side of a [`WikiDetail`] row.
#[derive(Clone, PartialEq)]
pub enum DetailValue {
    /// Plain text, set in the row's body typography
    Text(String),
    /// Pre-rendered markup, shown as-is
    Node(Element),
}

impl DetailValue {
    /// Empty text counts as no value
    fn is_empty(&self) -> bool {
        matches!(self, DetailValue::Text(text) if text.is_empty())
    }
}

impl From<String> for DetailValue {
    fn from(text: String) -> Self {
        DetailValue::Text(text)
    }
}

impl From<&str> for DetailValue {
    fn from(text: &str) -> Self {
        DetailValue::Text(text.to_string())
    }
}

/// Label/value row; two columns on wide layouts, stacked on narrow ones.
/// Renders nothing when the value is missing or empty.
#[component]
pub fn WikiDetail(label: String, value: Option<DetailValue>) -> Element {
    let Some(value) = value.filter(|value| !value.is_empty()) else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "wiki-detail grid grid-cols-1 gap-2 md:grid-cols-[90px_1fr] md:items-start md:gap-5",
            div {
                class: "wiki-detail-label break-all font-sans text-xs font-bold leading-[14px] text-black",
                "{label}"
            }
            {
                match value {
                    DetailValue::Text(text) => rsx! {
                        span {
                            class: "wiki-detail-value font-sans text-xs font-normal leading-[18px] text-black",
                            "{text}"
                        }
                    },
                    DetailValue::Node(node) => rsx! {
                        div { class: "wiki-detail-value break-all", {node} }
                    },
                }
            }
        }
    }
}
