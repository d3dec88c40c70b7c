//! Hero banner: title, pitch and the auto-advancing photo carousel.

use crate::carousel::Carousel;
use crate::sections::cta_link;
use crate::theme;
use zoon::*;

pub fn hero(carousel: &Carousel) -> impl Element + use<> {
    Column::new()
        .s(Width::fill())
        .s(Padding::new().x(16).top(48).bottom(96))
        .s(Gap::new().y(40))
        .update_raw_el(|raw_el| raw_el.style("background", theme::DARK_GRADIENT))
        .item(
            El::new()
                .s(Align::new().center_x())
                .s(theme::heading_font().size(64).center().color_signal(theme::white()))
                .child(Text::new(shared::content::SITE_TITLE)),
        )
        .item(
            Row::new()
                .multiline()
                .s(Align::new().center_x())
                .s(Gap::new().x(48).y(32))
                .item(pitch())
                .item(carousel_view(carousel)),
        )
}

fn pitch() -> impl Element {
    Column::new()
        .s(Width::exact(520))
        .s(Gap::new().y(28))
        .item(
            El::new()
                .s(theme::heading_font().size(34).color_signal(theme::gold()))
                .child(Text::new(shared::content::HERO_TAGLINE)),
        )
        .item(
            El::new()
                .s(Font::new().size(18).color_signal(theme::cream()))
                .update_raw_el(|raw_el| {
                    raw_el.style("opacity", "0.9").style("line-height", "1.7")
                })
                .child(Text::new(shared::content::HERO_PITCH)),
        )
        .item(cta_link("RESERVE YOUR SPOT NOW!", "reserve", None))
}

/// Cross-fading slide stack. Every slide stays mounted; only opacity changes,
/// so advancing never reflows the page.
fn carousel_view(carousel: &Carousel) -> impl Element + use<> {
    let images = carousel.images();
    Stack::new()
        .s(Width::exact(460))
        .s(Height::exact(460))
        .s(Padding::all(10))
        .s(RoundedCorners::all(16))
        .update_raw_el(|raw_el| raw_el.style("background", theme::GOLD_FRAME_GRADIENT))
        .layers(images.iter().cloned().enumerate().map({
            let carousel = carousel.clone();
            move |(index, url)| slide(index, url, &carousel)
        }))
        .layer(dots(carousel, images.len()))
}

fn slide(index: usize, url: String, carousel: &Carousel) -> impl Element + use<> {
    let opacity = carousel
        .current_index_signal()
        .map(move |current| if current == index { "1" } else { "0" })
        .dedupe();
    Image::new()
        .url(url)
        .description(format!("Tour highlight {}", index + 1))
        .s(Width::fill())
        .s(Height::fill())
        .s(RoundedCorners::all(12))
        .update_raw_el(move |raw_el| {
            raw_el
                .style("object-fit", "cover")
                .style("transition", "opacity 700ms ease-in-out")
                .style_signal("opacity", opacity)
        })
}

/// Display-only position indicator, hidden from assistive tech.
fn dots(carousel: &Carousel, count: usize) -> impl Element + use<> {
    Row::new()
        .s(Align::new().center_x().bottom())
        .s(Padding::new().bottom(24))
        .s(Gap::new().x(8))
        .update_raw_el(|raw_el| raw_el.attr("aria-hidden", "true"))
        .items((0..count).map({
            let carousel = carousel.clone();
            move |index| dot(index, &carousel)
        }))
}

fn dot(index: usize, carousel: &Carousel) -> impl Element + use<> {
    let is_current = carousel
        .current_index_signal()
        .map(move |current| current == index)
        .dedupe();
    El::new()
        .s(Width::exact(10))
        .s(Height::exact(10))
        .s(RoundedCorners::all(999))
        .s(Background::new().color_signal(
            is_current.map_bool_signal(|| theme::gold(), || always("oklch(95% 0.02 90 / 0.45)")),
        ))
        .update_raw_el(|raw_el| raw_el.style("transition", "background-color 300ms"))
}
