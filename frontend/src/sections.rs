//! Static marketing sections and the shared section scaffolding.

use crate::nav_menu::NavMenu;
use crate::theme;
use zoon::*;

/// Scroll the page to an in-page anchor.
pub fn goto_anchor(anchor: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_hash(&format!("#{anchor}"));
    }
}

/// Full-width section wrapper: anchor id, background, reveal tag and a
/// centered content column.
pub fn section(anchor: &'static str, background: &'static str, content: impl Element) -> impl Element {
    El::new()
        .s(Width::fill())
        .s(Padding::new().x(16).y(64))
        .update_raw_el(move |raw_el| {
            raw_el
                .attr("id", anchor)
                .attr("data-reveal", "")
                .style("background", background)
        })
        .child(
            El::new()
                .s(Width::fill())
                .s(Align::new().center_x())
                .update_raw_el(|raw_el| raw_el.style("max-width", "1100px"))
                .child(content),
        )
}

pub fn section_heading(
    text: &str,
    color: impl Signal<Item = &'static str> + 'static,
) -> impl Element {
    El::new()
        .s(Align::new().center_x())
        .s(theme::heading_font().size(34).center().color_signal(color))
        .child(Text::new(text.to_owned()))
}

/// Gold-dot bullet row used by tour cards, highlights and activity lists.
pub fn bullet_row(text: String, dot_px: u32) -> impl Element {
    Row::new()
        .s(Width::fill())
        .s(Gap::new().x(10))
        .item(
            El::new()
                .s(Width::exact(dot_px))
                .s(Height::exact(dot_px))
                .s(Align::new().center_y())
                .s(RoundedCorners::all(999))
                .s(Background::new().color_signal(theme::gold())),
        )
        .item(
            El::new()
                .s(Width::fill())
                .s(Font::new().color_signal(theme::dark_black()))
                .child(Text::new(text)),
        )
}

/// Gold call-to-action button. When rendered inside the mobile menu it also
/// closes the menu on activation.
pub fn cta_link(label: &str, anchor: &'static str, menu: Option<NavMenu>) -> impl Element {
    let hovered = Mutable::new(false);
    El::new()
        .s(Padding::new().x(28).y(14))
        .s(RoundedCorners::all(12))
        .s(Cursor::new(CursorIcon::Pointer))
        .s(Background::new().color_signal(
            hovered
                .signal()
                .map_bool_signal(|| theme::cream(), || theme::gold()),
        ))
        .s(Font::new()
            .weight(FontWeight::Bold)
            .size(18)
            .color_signal(theme::dark_black()))
        .on_hovered_change({
            let hovered = hovered.clone();
            move |is_hovered| hovered.set_neq(is_hovered)
        })
        .on_click(move || {
            if let Some(menu) = &menu {
                menu.close();
            }
            goto_anchor(anchor);
        })
        .child(Text::new(label.to_owned()))
}

fn framed_photo(url: String, size: u32) -> impl Element {
    El::new()
        .s(Width::exact(size))
        .s(Height::exact(size))
        .s(Padding::all(8))
        .s(RoundedCorners::all(12))
        .update_raw_el(|raw_el| raw_el.style("background", theme::GOLD_FRAME_GRADIENT))
        .child(
            Image::new()
                .url(url)
                .description("Legends Road Rally experience")
                .s(Width::fill())
                .s(Height::fill())
                .s(RoundedCorners::all(8))
                .update_raw_el(|raw_el| raw_el.style("object-fit", "cover")),
        )
}

pub fn about_section() -> impl Element {
    let paragraphs = shared::content::about_paragraphs();
    section(
        "about",
        theme::DARK_GRADIENT,
        Column::new()
            .s(Gap::new().y(40))
            .item(section_heading("ABOUT THE EXPERIENCE", theme::gold()))
            .item(
                Row::new()
                    .multiline()
                    .s(Align::new().center_x())
                    .s(Gap::new().x(48).y(32))
                    .item(
                        Column::new()
                            .s(Width::exact(520))
                            .s(Gap::new().y(20))
                            .items(paragraphs.into_iter().map(|paragraph| {
                                El::new()
                                    .s(Font::new().size(17).color_signal(theme::cream()))
                                    .update_raw_el(|raw_el| {
                                        raw_el
                                            .style("opacity", "0.92")
                                            .style("line-height", "1.6")
                                    })
                                    .child(Text::new(paragraph))
                            })),
                    )
                    .item(
                        Row::new()
                            .multiline()
                            .s(Width::exact(460))
                            .s(Gap::new().x(16).y(16))
                            .items(
                                shared::content::gallery_images()
                                    .into_iter()
                                    .map(|url| framed_photo(url, 220)),
                            ),
                    ),
            ),
    )
}

fn included_card(item: shared::IncludedItem) -> impl Element {
    Column::new()
        .s(Width::exact(300))
        .s(Gap::new().y(14))
        .item(
            El::new()
                .s(Align::new().center_x())
                .s(Width::exact(72))
                .s(Height::exact(72))
                .s(RoundedCorners::all(999))
                .s(Background::new().color_signal(theme::gold()))
                .child(
                    El::new()
                        .s(Align::center())
                        .s(Font::new().size(30))
                        .child(Text::new(item.icon)),
                ),
        )
        .item(
            El::new()
                .s(Align::new().center_x())
                .s(Font::new()
                    .size(19)
                    .weight(FontWeight::Bold)
                    .center()
                    .color_signal(theme::dark_black()))
                .child(Text::new(item.title)),
        )
        .item(
            El::new()
                .s(Font::new().center().color_signal(theme::dark_black()))
                .child(Text::new(item.description)),
        )
}

pub fn included_section() -> impl Element {
    section(
        "included",
        theme::CREAM,
        Column::new()
            .s(Gap::new().y(40))
            .item(section_heading("WHAT'S INCLUDED", theme::dark_black()))
            .item(
                Row::new()
                    .multiline()
                    .s(Width::fill())
                    .s(Padding::all(40))
                    .s(Gap::new().x(32).y(32))
                    .s(RoundedCorners::all(16))
                    .s(Background::new().color_signal(theme::white()))
                    .s(Align::new().center_x())
                    .items(
                        shared::content::included_items()
                            .into_iter()
                            .map(included_card),
                    ),
            ),
    )
}

pub fn pricing_section() -> impl Element {
    section(
        "reserve",
        theme::DARK_GRADIENT,
        Column::new()
            .s(Gap::new().y(24))
            .s(Align::new().center_x())
            .item(section_heading("PRICE", theme::gold()))
            .item(
                El::new()
                    .s(Align::new().center_x())
                    .s(theme::heading_font().size(88).center().color_signal(theme::cream()))
                    .child(Text::new(shared::content::PRICE_LABEL)),
            )
            .item(
                El::new()
                    .s(Align::new().center_x())
                    .s(Font::new().size(19).center().color_signal(theme::cream()))
                    .update_raw_el(|raw_el| raw_el.style("opacity", "0.8"))
                    .child(Text::new(shared::content::PRICE_NOTE)),
            )
            .item(
                El::new()
                    .s(Align::new().center_x())
                    .s(Font::new()
                        .size(22)
                        .weight(FontWeight::Bold)
                        .center()
                        .color_signal(theme::gold()))
                    .child(Text::new(shared::content::MENTOR_PRICE_NOTE)),
            )
            .item(
                El::new()
                    .s(Align::new().center_x())
                    .s(Padding::new().top(24))
                    .s(Font::new().size(17).center().color_signal(theme::cream()))
                    .update_raw_el(|raw_el| raw_el.style("opacity", "0.9"))
                    .child(Text::new(shared::content::DEPOSIT_NOTE)),
            )
            .item(
                El::new()
                    .s(Align::new().center_x())
                    .child(cta_link("GET STARTED TODAY", "contact", None)),
            ),
    )
}

fn contact_row(icon: &'static str, value: &'static str) -> impl Element {
    Row::new()
        .s(Gap::new().x(14))
        .item(
            El::new()
                .s(Width::exact(32))
                .s(Height::exact(32))
                .s(RoundedCorners::all(999))
                .s(Background::new().color_signal(theme::gold()))
                .child(El::new().s(Align::center()).s(Font::new().size(14)).child(Text::new(icon))),
        )
        .item(
            El::new()
                .s(Align::new().center_y())
                .s(Font::new()
                    .weight(FontWeight::SemiBold)
                    .color_signal(theme::dark_black()))
                .child(Text::new(value)),
        )
}

pub fn contact_section() -> impl Element {
    section(
        "contact",
        theme::CREAM,
        Column::new()
            .s(Gap::new().y(40))
            .item(section_heading("CONTACT US", theme::dark_black()))
            .item(
                Row::new()
                    .multiline()
                    .s(Width::fill())
                    .s(Padding::all(40))
                    .s(Gap::new().x(48).y(32))
                    .s(RoundedCorners::all(16))
                    .s(Background::new().color_signal(theme::white()))
                    .item(
                        Column::new()
                            .s(Width::exact(480))
                            .s(Gap::new().y(18))
                            .item(
                                El::new()
                                    .s(Font::new()
                                        .size(24)
                                        .weight(FontWeight::Bold)
                                        .color_signal(theme::dark_black()))
                                    .child(Text::new("Get In Touch")),
                            )
                            .item(
                                El::new()
                                    .s(Font::new().size(17).color_signal(theme::dark_black()))
                                    .update_raw_el(|raw_el| raw_el.style("line-height", "1.6"))
                                    .child(Text::new(
                                        "Ready to embark on the adventure of a lifetime? Contact \
                                         us to reserve your spot or ask any questions about our \
                                         upcoming trips.",
                                    )),
                            )
                            .item(contact_row("📧", shared::content::CONTACT_EMAIL))
                            .item(contact_row("📞", shared::content::CONTACT_PHONE))
                            .item(contact_row("🏢", shared::content::COMPANY_NAME)),
                    )
                    .item(
                        Column::new()
                            .s(Width::exact(380))
                            .s(Padding::all(24))
                            .s(Gap::new().y(8))
                            .s(RoundedCorners::all(12))
                            .s(Background::new().color_signal(theme::gold()))
                            .item(
                                El::new()
                                    .s(Align::new().center_x())
                                    .s(Font::new()
                                        .size(18)
                                        .weight(FontWeight::Bold)
                                        .center()
                                        .color_signal(theme::dark_black()))
                                    .child(Text::new("Ready to Contact Us?")),
                            )
                            .item(
                                El::new()
                                    .s(Align::new().center_x())
                                    .s(Font::new().size(14).center().color_signal(theme::dark_black()))
                                    .update_raw_el(|raw_el| raw_el.style("opacity", "0.75"))
                                    .child(Text::new("Send us an email or give us a call today!")),
                            ),
                    ),
            ),
    )
}

pub fn footer() -> impl Element {
    El::new()
        .s(Width::fill())
        .s(Padding::new().x(16).y(32))
        .update_raw_el(|raw_el| {
            raw_el
                .style("background", theme::DARK_GRADIENT)
                .style("border-top", &format!("2px solid {}", theme::GOLD))
        })
        .child(
            Column::new()
                .s(Align::new().center_x())
                .s(Gap::new().y(12))
                .item(
                    El::new()
                        .s(Align::new().center_x())
                        .s(theme::heading_font().size(20).center().color_signal(theme::gold()))
                        .child(Text::new(shared::content::SITE_TITLE)),
                )
                .item(
                    El::new()
                        .s(Align::new().center_x())
                        .s(Font::new().center().color_signal(theme::cream()))
                        .update_raw_el(|raw_el| raw_el.style("opacity", "0.8"))
                        .child(Text::new("© 2025 Legends Road LLC. All rights reserved.")),
                )
                .item(
                    El::new()
                        .s(Align::new().center_x())
                        .s(Font::new().center().color_signal(theme::cream()))
                        .child(Text::new(format!(
                            "{} • {}",
                            shared::content::CONTACT_EMAIL,
                            shared::content::CONTACT_PHONE
                        ))),
                ),
        )
}
