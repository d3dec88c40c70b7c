//! FAQ section backed by its own single-open accordion.

use crate::disclosure::DisclosureList;
use crate::sections::{section, section_heading};
use crate::theme;
use shared::model::FaqEntry;
use zoon::*;

pub fn faq_section(faq: &DisclosureList) -> impl Element + use<> {
    let faq = faq.clone();
    section(
        "faq",
        theme::DARK_GRADIENT,
        Column::new()
            .s(Gap::new().y(36))
            .item(section_heading("FREQUENTLY ASKED QUESTIONS", theme::gold()))
            .item(
                Column::new()
                    .s(Width::fill())
                    .s(Padding::all(24))
                    .s(Gap::new().y(12))
                    .s(RoundedCorners::all(16))
                    .s(Background::new().color_signal(theme::white()))
                    .items(
                        shared::content::faq_entries()
                            .into_iter()
                            .enumerate()
                            .map(move |(index, entry)| faq_item(index, entry, faq.clone())),
                    ),
            ),
    )
}

fn faq_item(index: usize, entry: FaqEntry, faq: DisclosureList) -> impl Element {
    let answer = entry.answer;
    Column::new()
        .s(Width::fill())
        .s(RoundedCorners::all(10))
        .s(Borders::all_signal(
            theme::gold().map(|color| Border::new().width(1).color(color)),
        ))
        .item(question_row(index, entry.question, faq.clone()))
        .item_signal(faq.is_open_signal(index).map_true(move || {
            El::new()
                .s(Width::fill())
                .s(Padding::new().x(18).bottom(18))
                .s(Font::new().size(15).color_signal(theme::dark_black()))
                .update_raw_el(|raw_el| raw_el.style("line-height", "1.6"))
                .child(Text::new(answer.clone()))
        }))
}

fn question_row(index: usize, question: String, faq: DisclosureList) -> impl Element {
    let chevron_rotation = faq
        .is_open_signal(index)
        .map_bool(|| "rotate(90deg)", || "rotate(0deg)");
    Row::new()
        .s(Width::fill())
        .s(Padding::all(18))
        .s(Gap::new().x(12))
        .s(Cursor::new(CursorIcon::Pointer))
        .on_click(move || faq.select(index))
        .item(
            El::new()
                .s(Width::fill())
                .s(Font::new()
                    .size(16)
                    .weight(FontWeight::SemiBold)
                    .color_signal(theme::dark_black()))
                .child(Text::new(question)),
        )
        .item(
            El::new()
                .s(Align::new().center_y())
                .s(Font::new()
                    .size(16)
                    .weight(FontWeight::Bold)
                    .color_signal(theme::gold()))
                .update_raw_el(move |raw_el| {
                    raw_el
                        .style("transition", "transform 200ms")
                        .style_signal("transform", chevron_rotation)
                })
                .child(Text::new("›")),
        )
}
