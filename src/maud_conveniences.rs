use crate::theme;
use maud::{Markup, Render, html};

pub fn render_table<const N: usize>(
    titles: [&'static str; N],
    rows: impl IntoIterator<Item = (String, [Markup; N])>,
) -> Markup {
    html! {
        table class=(theme::TABLE) {
            thead {
                tr class=(theme::TR) {
                    @for title in titles {
                        th class=(theme::TH) {(title)}
                    }
                }
            }
            tbody {
                @for (key, row) in rows {
                    tr id=(key) class=(theme::TR) {
                        @for col in row {
                            td class=(theme::TD) {(col)}
                        }
                    }
                }
            }
        }
    }
}

pub fn title(s: impl Render) -> Markup {
    html! {
        h2 class=(theme::HEADING) {(s)}
    }
}

pub fn alert(message: impl Render) -> Markup {
    html! {
        div class=(theme::ALERT) role="alert" {
            strong class="font-bold" {"Alert! "}
            span {(message)}
        }
    }
}

pub fn text_input(name: &str, placeholder: &str, value: &str, error: Option<&str>) -> Markup {
    html! {
        div {
            input type="text" id=(name) name=(name) placeholder=(placeholder) value=(value) class=(theme::INPUT);
            @if let Some(error) = error {
                div class=(theme::FIELD_ERROR) {(error)}
            }
        }
    }
}
