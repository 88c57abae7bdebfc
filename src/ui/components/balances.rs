#![allow(non_snake_case)]
use dioxus::prelude::*;

use crate::config::ThemePalette;
use crate::ui::style::metric_style;
use crate::usecase::services::dashboard::BalanceCard;

const NEGATIVE_BALANCE_COLOR: &str = "#e74c3c";

#[component]
pub fn BalanceCards(cards: Vec<BalanceCard>, palette: ThemePalette) -> Element {
    let card_style = metric_style(&palette);

    rsx! {
        div {
            style: "display: flex; gap: 12px; flex-wrap: wrap;",
            {cards.iter().map(|card| {
                let label = card.label.clone();
                let formatted = card.formatted.clone();
                let amount_color = if card.amount < 0.0 {
                    NEGATIVE_BALANCE_COLOR
                } else {
                    palette.accent.as_str()
                };
                rsx!(
                    div {
                        style: "{card_style}",
                        div { style: "font-size: 13px; opacity: 0.8;", "{label}" }
                        div { style: "color: {amount_color};", "{formatted}" }
                    }
                )
            })}
        }
    }
}
