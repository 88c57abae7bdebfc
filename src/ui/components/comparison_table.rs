#![allow(non_snake_case)]
use dioxus::prelude::*;

use crate::config::ThemePalette;
use crate::ui::style::{table_cell_style, table_container_style, table_header_cell_style};
use crate::usecase::services::comparison::ComparisonTable;

#[component]
pub fn ComparisonTableView(table: ComparisonTable, palette: ThemePalette) -> Element {
    let container_style = table_container_style(&palette);
    let header_style = table_header_cell_style(&palette);
    let headers = ComparisonTable::headers();
    let text_cell = table_cell_style(false);
    let numeric_cell = table_cell_style(true);

    rsx! {
        div {
            style: "{container_style}",
            table {
                style: "border-collapse: collapse; width: 100%;",
                thead {
                    tr {
                        {headers.iter().map(|header| rsx!(
                            th { style: "{header_style}", "{header}" }
                        ))}
                    }
                }
                tbody {
                    {table.rows().iter().map(|row| {
                        let tab = row.tab.clone();
                        let cells = row.formatted_cells();
                        rsx!(
                            tr {
                                td { style: "{text_cell}", "{tab}" }
                                {cells.into_iter().map(|cell| rsx!(
                                    td { style: "{numeric_cell}", "{cell}" }
                                ))}
                            }
                        )
                    })}
                }
            }
        }
    }
}
