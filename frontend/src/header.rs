//! Fixed page header: brand, desktop navigation and the mobile dropdown menu.

use crate::nav_menu::NavMenu;
use crate::sections::{cta_link, goto_anchor};
use crate::theme;
use crate::viewport::ViewportWatcher;
use zoon::*;

pub const HEADER_HEIGHT: u32 = 64;

pub fn header(menu: NavMenu, viewport: &ViewportWatcher) -> impl Element + use<> {
    Column::new()
        .s(Width::fill())
        .s(Align::new().top())
        .update_raw_el(|raw_el| {
            raw_el
                .style("position", "fixed")
                .style("left", "0")
                .style("right", "0")
                .style("top", "0")
                .style("z-index", "50")
                .style("background", theme::DARK_GRADIENT)
                .style("border-bottom", &format!("2px solid {}", theme::GOLD))
                .style("box-shadow", "0 2px 10px oklch(0% 0 0 / 0.4)")
        })
        .item(top_bar(menu.clone(), viewport))
        .item_signal(
            map_ref! {
                let is_open = menu.is_open_signal(),
                let is_desktop = viewport.is_desktop_signal() =>
                *is_open && !*is_desktop
            }
            .dedupe()
            .map_true(move || mobile_panel(menu.clone())),
        )
}

fn top_bar(menu: NavMenu, viewport: &ViewportWatcher) -> impl Element + use<> {
    Row::new()
        .s(Width::fill())
        .s(Height::exact(HEADER_HEIGHT))
        .s(Padding::new().x(24))
        .s(Gap::new().x(12))
        .item(brand())
        .item(Spacer::fill())
        .item_signal(viewport.is_desktop_signal().map_bool(
            || desktop_nav().unify(),
            move || menu_button(menu.clone()).unify(),
        ))
}

fn brand() -> impl Element {
    El::new()
        .s(Align::new().center_y())
        .s(theme::heading_font().size(18).color_signal(theme::gold()))
        .s(Cursor::new(CursorIcon::Pointer))
        .on_click(|| goto_anchor("about"))
        .child(Text::new(shared::content::COMPANY_NAME))
}

fn desktop_nav() -> impl Element {
    let mut links = shared::content::nav_links().into_iter();
    let (cta_label, cta_anchor) = links.next().unwrap_or(("Reserve", "reserve"));
    Row::new()
        .s(Gap::new().x(18))
        .s(Align::new().center_y())
        .item(cta_link(cta_label, cta_anchor, None))
        .items(links.map(|(label, anchor)| nav_link(label, anchor, None)))
}

fn nav_link(label: &'static str, anchor: &'static str, menu: Option<NavMenu>) -> impl Element {
    let hovered = Mutable::new(false);
    El::new()
        .s(Align::new().center_y())
        .s(Cursor::new(CursorIcon::Pointer))
        .s(Font::new().weight(FontWeight::Medium).size(16).color_signal(
            hovered
                .signal()
                .map_bool_signal(|| theme::gold(), || theme::cream()),
        ))
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
        .child(Text::new(label))
}

fn menu_button(menu: NavMenu) -> impl Element {
    let chevron_rotation = menu
        .is_open_signal()
        .map_bool(|| "rotate(180deg)", || "rotate(0deg)");
    Row::new()
        .s(Gap::new().x(6))
        .s(Align::new().center_y())
        .s(Cursor::new(CursorIcon::Pointer))
        .s(Font::new()
            .weight(FontWeight::Medium)
            .size(16)
            .color_signal(theme::cream()))
        .on_click({
            let menu = menu.clone();
            move || menu.toggle()
        })
        .item(Text::new("Menu"))
        .item(
            El::new()
                .update_raw_el(move |raw_el| {
                    raw_el
                        .style("transition", "transform 200ms")
                        .style_signal("transform", chevron_rotation)
                })
                .child(Text::new("▾")),
        )
}

/// Dropdown below the bar; rendered only while the menu is open on a narrow
/// viewport. Growing past the breakpoint with the menu open hides it without
/// touching the menu state.
fn mobile_panel(menu: NavMenu) -> impl Element {
    let mut links = shared::content::nav_links().into_iter();
    let (cta_label, cta_anchor) = links.next().unwrap_or(("Reserve", "reserve"));
    Column::new()
        .s(Width::fill())
        .s(Padding::new().x(24).y(14))
        .s(Gap::new().y(10))
        .update_raw_el(|raw_el| raw_el.style("border-top", &format!("1px solid {}", theme::GOLD)))
        .item(cta_link(cta_label, cta_anchor, Some(menu.clone())))
        .items(links.map(move |(label, anchor)| nav_link(label, anchor, Some(menu.clone()))))
}
