use crate::config::ThemePalette;

pub fn root_container_style(palette: &ThemePalette) -> String {
    format!(
        "display: flex; height: 100vh; overflow: hidden; background: {}; color: {}; font-family: sans-serif;",
        palette.background, palette.foreground
    )
}

pub fn sidebar_style(palette: &ThemePalette) -> String {
    format!(
        "width: 300px; flex-shrink: 0; overflow-y: auto; padding: 16px; display: flex; flex-direction: column; gap: 10px; border-right: 1px solid {};",
        palette.panel
    )
}

pub fn main_area_style() -> &'static str {
    "flex: 1; overflow-y: auto; padding: 16px 24px; display: flex; flex-direction: column; gap: 18px;"
}

pub fn heading_style(palette: &ThemePalette) -> String {
    format!("color: {}; margin: 4px 0;", palette.accent)
}

pub fn input_style(palette: &ThemePalette) -> String {
    format!(
        "background: {}; color: {}; border: 1px solid {}; border-radius: 4px; padding: 4px 8px;",
        palette.panel, palette.accent, palette.panel
    )
}

pub fn button_style(palette: &ThemePalette, enabled: bool) -> String {
    let opacity = if enabled { "1" } else { "0.5" };
    format!(
        "background: {}; color: #fff; border: none; border-radius: 6px; padding: 6px 12px; cursor: pointer; opacity: {opacity};",
        palette.accent
    )
}

pub fn metric_style(palette: &ThemePalette) -> String {
    format!(
        "min-width: 180px; padding: 10px 14px; border: 1px solid {}; border-radius: 8px; color: {}; font-size: 24px;",
        palette.accent, palette.accent
    )
}

pub fn table_container_style(palette: &ThemePalette) -> String {
    format!(
        "overflow-x: auto; border: 2px solid {}; border-radius: 6px;",
        palette.accent
    )
}

pub fn table_header_cell_style(palette: &ThemePalette) -> String {
    format!(
        "position: sticky; top: 0; background: {}; padding: 6px 10px; text-align: right; white-space: nowrap;",
        palette.panel
    )
}

pub fn table_cell_style(numeric: bool) -> &'static str {
    if numeric {
        "padding: 6px 10px; text-align: right; white-space: nowrap; font-variant-numeric: tabular-nums;"
    } else {
        "padding: 6px 10px; text-align: left; white-space: nowrap;"
    }
}
