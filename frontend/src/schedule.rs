//! Trip dates section: date cards and the day-by-day schedule accordion.

use crate::disclosure::DisclosureList;
use crate::sections::{bullet_row, section, section_heading};
use crate::theme;
use shared::model::{DayItinerary, TourDate, TourLocation};
use zoon::*;

pub fn trip_dates_section(schedule: &DisclosureList) -> impl Element + use<> {
    section(
        "trip-dates",
        theme::CREAM,
        Column::new()
            .s(Gap::new().y(36))
            .item(section_heading("NEXT TRIP DATES", theme::dark_black()))
            .item(
                Row::new()
                    .multiline()
                    .s(Align::new().center_x())
                    .s(Gap::new().x(24).y(24))
                    .items(shared::content::tour_dates().into_iter().map(tour_date_card)),
            )
            .item(accordion(schedule.clone(), shared::content::tour_schedule())),
    )
}

fn tour_date_card(date: TourDate) -> impl Element {
    Column::new()
        .s(Width::exact(420))
        .s(Padding::all(24))
        .s(Gap::new().y(10))
        .s(RoundedCorners::all(16))
        .s(Background::new().color_signal(theme::white()))
        .s(Borders::all_signal(
            theme::gold().map(|color| Border::new().width(4).color(color)),
        ))
        .item(
            El::new()
                .s(Font::new()
                    .size(22)
                    .weight(FontWeight::Bold)
                    .color_signal(theme::dark_black()))
                .child(Text::new(date.label)),
        )
        .items(date.details.into_iter().map(|detail| bullet_row(detail, 10)))
}

fn accordion(schedule: DisclosureList, days: Vec<DayItinerary>) -> impl Element {
    Column::new()
        .s(Width::fill())
        .s(Padding::all(24))
        .s(Gap::new().y(12))
        .s(RoundedCorners::all(16))
        .s(Background::new().color_signal(theme::white()))
        .s(Borders::all_signal(
            theme::gold().map(|color| Border::new().width(4).color(color)),
        ))
        .item(
            El::new()
                .s(Align::new().center_x())
                .s(theme::heading_font().size(26).center().color_signal(theme::dark_black()))
                .child(Text::new("TOUR SCHEDULE")),
        )
        .items(days.into_iter().enumerate().map({
            move |(index, day)| day_item(index, day, schedule.clone())
        }))
}

fn day_item(index: usize, day: DayItinerary, schedule: DisclosureList) -> impl Element {
    let header_label = format!("Day {} – {}", day.day, day.title);
    let summary = day.description.clone();
    Column::new()
        .s(Width::fill())
        .s(RoundedCorners::all(10))
        .s(Borders::all_signal(
            theme::gold().map(|color| Border::new().width(1).color(color)),
        ))
        .item(day_header(index, header_label, summary, schedule.clone()))
        .item_signal(
            schedule
                .is_open_signal(index)
                .map_true(move || day_body(day.clone())),
        )
}

fn day_header(
    index: usize,
    title: String,
    summary: String,
    schedule: DisclosureList,
) -> impl Element {
    let chevron_rotation = schedule
        .is_open_signal(index)
        .map_bool(|| "rotate(180deg)", || "rotate(0deg)");
    Row::new()
        .s(Width::fill())
        .s(Padding::all(16))
        .s(Gap::new().x(12))
        .s(Cursor::new(CursorIcon::Pointer))
        .on_click(move || schedule.select(index))
        .item(
            Column::new()
                .s(Width::fill())
                .s(Gap::new().y(4))
                .item(
                    El::new()
                        .s(Font::new()
                            .size(17)
                            .weight(FontWeight::Bold)
                            .color_signal(theme::dark_black()))
                        .child(Text::new(title)),
                )
                .item(
                    El::new()
                        .s(Font::new().size(13).color_signal(theme::dark_black()))
                        .update_raw_el(|raw_el| raw_el.style("opacity", "0.75"))
                        .child(Text::new(summary)),
                ),
        )
        .item(
            El::new()
                .s(Align::new().center_y())
                .s(Font::new().size(16).color_signal(theme::gold()))
                .update_raw_el(move |raw_el| {
                    raw_el
                        .style("transition", "transform 300ms")
                        .style_signal("transform", chevron_rotation)
                })
                .child(Text::new("▾")),
        )
}

fn day_body(day: DayItinerary) -> impl Element {
    let mut body = Column::new()
        .s(Width::fill())
        .s(Padding::new().x(20).bottom(20))
        .s(Gap::new().y(20));
    if !day.highlights.is_empty() {
        body = body.item(highlights_block(day.highlights));
    }
    body = body.item(locations_block(day.locations));
    if let Some(notes) = day.notes {
        body = body.item(notes_block(notes));
    }
    body
}

fn block_heading(text: &'static str) -> impl Element {
    El::new()
        .s(Font::new()
            .size(15)
            .weight(FontWeight::Bold)
            .color_signal(theme::dark_black()))
        .child(Text::new(text))
}

fn highlights_block(highlights: Vec<String>) -> impl Element {
    Column::new()
        .s(Gap::new().y(8))
        .item(block_heading("Highlights"))
        .items(
            highlights
                .into_iter()
                .map(|highlight| bullet_row(highlight, 8)),
        )
}

fn locations_block(locations: Vec<TourLocation>) -> impl Element {
    Column::new()
        .s(Gap::new().y(12))
        .item(block_heading("Locations & Activities"))
        .items(locations.into_iter().map(location_card))
}

fn location_card(location: TourLocation) -> impl Element {
    Column::new()
        .s(Width::fill())
        .s(Padding::all(14))
        .s(Gap::new().y(6))
        .s(RoundedCorners::all(8))
        .s(Background::new().color_signal(theme::cream()))
        .item(
            El::new()
                .s(Font::new()
                    .size(15)
                    .weight(FontWeight::SemiBold)
                    .color_signal(theme::dark_black()))
                .child(Text::new(location.name)),
        )
        .item(
            El::new()
                .s(Font::new().size(14).color_signal(theme::dark_black()))
                .update_raw_el(|raw_el| raw_el.style("opacity", "0.85"))
                .child(Text::new(location.description)),
        )
        .items(
            location
                .activities
                .into_iter()
                .map(|activity| bullet_row(activity, 6)),
        )
}

fn notes_block(notes: String) -> impl Element {
    Column::new()
        .s(Width::fill())
        .s(Padding::all(14))
        .s(Gap::new().y(6))
        .s(RoundedCorners::all(8))
        .s(Borders::all_signal(
            theme::gold().map(|color| Border::new().width(2).color(color)),
        ))
        .item(block_heading("Important Notes:"))
        .item(
            El::new()
                .s(Font::new().size(14).color_signal(theme::dark_black()))
                .child(Text::new(notes)),
        )
}
