use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use anyhow::Context;
use dioxus::prelude::*;
use rfd::FileDialog;

use crate::config::AppConfig;
use crate::domain::entities::balance::{
    clamp_account_count, parse_balance_input, MAX_BANK_ACCOUNTS, MIN_BANK_ACCOUNTS,
};
use crate::infra::export::csv::save_comparison_csv;
use crate::infra::import::xlsx::{XlsxWorkbookLoader, SUPPORTED_EXTENSIONS};
use crate::platform::desktop::blocking::run_blocking;
use crate::ui::components::balances::BalanceCards;
use crate::ui::components::charts::ChartView;
use crate::ui::components::comparison_table::ComparisonTableView;
use crate::ui::state::app_state::{resize_inputs, AppState};
use crate::ui::style::{
    button_style, heading_style, input_style, main_area_style, root_container_style,
    sidebar_style,
};
use crate::usecase::services::dashboard::{DashboardPipeline, MIN_TABS_FOR_COMPARISON};
use crate::usecase::services::indicators::IndicatorCalculator;
use crate::usecase::services::session::WorkbookSession;

pub const APP_TITLE: &str = "Dashboard Financeiro: Análise Comparativa de DRE e Saldos Bancários";

#[component]
pub fn App() -> Element {
    let config = use_context::<AppConfig>();
    let layout = config.statement_layout();
    let palette = config.theme.clone();

    let AppState {
        mut loaded,
        mut selection,
        mut balances,
        mut balance_inputs,
        mut busy,
        mut status,
    } = AppState::new(config.balances.initial_count());

    let session_layout = layout.clone();
    let session = use_hook(move || {
        Rc::new(RefCell::new(WorkbookSession::new(Arc::new(
            XlsxWorkbookLoader::new(session_layout),
        ))))
    });

    let pipeline = DashboardPipeline::new(IndicatorCalculator::new(layout.labels), palette.clone());
    let current = loaded();
    let current_selection = selection();
    let current_balances = balances();
    let view = pipeline.build_view_model(
        current.as_ref().map(|loaded| loaded.workbook.as_ref()),
        current_selection.names(),
        current_balances.entries(),
    );

    let tab_names = current
        .as_ref()
        .map(|loaded| loaded.workbook.tab_names())
        .unwrap_or_default();
    let skipped_note = current.as_ref().and_then(|loaded| {
        let skipped = &loaded.workbook.skipped;
        (!skipped.is_empty()).then(|| {
            let names: Vec<String> = skipped
                .iter()
                .map(|sheet| format!("{} (sem '{}')", sheet.name, sheet.missing_column))
                .collect();
            format!("Guias ignoradas: {}", names.join(", "))
        })
    });
    let loaded_caption = current.as_ref().map(|loaded| {
        (
            format!(
                "{} carregada às {}",
                loaded.workbook.source_name,
                loaded.loaded_at.format("%H:%M:%S")
            ),
            loaded.path.display().to_string(),
        )
    });
    let selection_order = current_selection.names().join(" → ");
    let account_count = current_balances.len();
    let inputs = balance_inputs();

    let heading = heading_style(&palette);
    let field_style = input_style(&palette);
    let upload_style = button_style(&palette, !busy());
    let export_style = button_style(&palette, true);
    let root_style = root_container_style(&palette);
    let aside_style = sidebar_style(&palette);
    let main_style = main_area_style();
    let export_file_name = config.export.file_name.clone();

    let session_for_upload = session.clone();
    let on_upload = move |_: MouseEvent| {
        if busy() {
            return;
        }
        let Some(path) = FileDialog::new()
            .add_filter("Planilha", &SUPPORTED_EXTENSIONS)
            .pick_file()
        else {
            return;
        };

        *busy.write() = true;
        *status.write() = format!("Carregando {}", path.display());
        let result = run_blocking("load_workbook", || {
            session_for_upload
                .borrow_mut()
                .load(&path)
                .cloned()
                .with_context(|| format!("falha ao carregar {}", path.display()))
        });
        match result {
            Ok(workbook) => {
                selection
                    .write()
                    .retain_available(&workbook.workbook.tab_names());
                *status.write() = format!(
                    "Planilha carregada: {} guia(s)",
                    workbook.workbook.tabs.len()
                );
                loaded.set(Some(workbook));
            }
            Err(err) => {
                tracing::error!(error = %format!("{err:#}"), "workbook load failed");
                let kept = session_for_upload
                    .borrow()
                    .current()
                    .map(|previous| format!(" (mantida: {})", previous.workbook.source_name))
                    .unwrap_or_default();
                *status.write() = format!("Erro: {err:#}{kept}");
            }
        }
        *busy.write() = false;
    };

    let (main_content, export_table) = match &view {
        Ok(view) => (
            None,
            view.comparison
                .as_ref()
                .map(|comparison| comparison.comparison.table.clone()),
        ),
        Err(err) => (Some(format!("Erro: {err}")), None),
    };

    let on_export = move |_: MouseEvent| {
        let Some(table) = export_table.clone() else {
            return;
        };
        let Some(path) = FileDialog::new()
            .set_file_name(&export_file_name)
            .add_filter("CSV", &["csv"])
            .save_file()
        else {
            return;
        };
        let result = run_blocking("export_csv", || {
            save_comparison_csv(&table, &path)
                .with_context(|| format!("falha ao salvar {}", path.display()))
        });
        match result {
            Ok(()) => *status.write() = format!("Comparativo salvo em {}", path.display()),
            Err(err) => {
                tracing::error!(error = %format!("{err:#}"), "csv export failed");
                *status.write() = format!("Erro: {err:#}");
            }
        }
    };
    let can_export = view.as_ref().is_ok_and(|view| view.can_export());
    let selected_count = view.as_ref().map(|view| view.tabs.len()).unwrap_or_default();

    rsx! {
        div {
            style: "{root_style}",
            aside {
                style: "{aside_style}",
                h3 { style: "{heading}", "Saldos Bancários" }
                label {
                    "Quantidade de contas bancárias"
                    input {
                        style: "{field_style}",
                        r#type: "number",
                        min: "{MIN_BANK_ACCOUNTS}",
                        max: "{MAX_BANK_ACCOUNTS}",
                        value: "{account_count}",
                        oninput: move |event| {
                            let Ok(count) = event.value().trim().parse::<usize>() else {
                                return;
                            };
                            let count = clamp_account_count(count);
                            balances.write().resize(count);
                            resize_inputs(&mut balance_inputs.write(), count);
                        }
                    }
                }
                {current_balances.entries().iter().enumerate().map(|(idx, entry)| {
                    let name = entry.bank_name.clone();
                    let text = inputs.get(idx).cloned().unwrap_or_default();
                    let position = idx + 1;
                    let field_style = field_style.clone();
                    rsx!(
                        div {
                            style: "display: flex; flex-direction: column; gap: 4px;",
                            input {
                                style: "{field_style}",
                                placeholder: "Nome do Banco {position}",
                                value: "{name}",
                                oninput: move |event| {
                                    balances.write().set_name(idx, event.value());
                                }
                            }
                            input {
                                style: "{field_style}",
                                placeholder: "Saldo do Banco {position} (R$)",
                                value: "{text}",
                                oninput: move |event| {
                                    let raw = event.value();
                                    balances.write().set_balance(idx, parse_balance_input(&raw));
                                    if let Some(slot) = balance_inputs.write().get_mut(idx) {
                                        *slot = raw;
                                    }
                                }
                            }
                        }
                    )
                })}

                h3 { style: "{heading}", "Faça upload da planilha DRE" }
                button {
                    style: "{upload_style}",
                    disabled: busy(),
                    onclick: on_upload,
                    "Selecionar planilha"
                }
                if let Some((caption, full_path)) = loaded_caption {
                    span { style: "font-size: 12px;", title: "{full_path}", "{caption}" }
                }
                if !tab_names.is_empty() {
                    span { "Selecione as guias para comparar" }
                    {tab_names.iter().map(|name| {
                        let checked = current_selection.contains(name);
                        let name = name.clone();
                        let label = name.clone();
                        rsx!(
                            label {
                                style: "display: flex; align-items: center; gap: 8px; cursor: pointer;",
                                input {
                                    r#type: "checkbox",
                                    checked: checked,
                                    onclick: move |_| selection.write().toggle(&name),
                                }
                                span { "{label}" }
                            }
                        )
                    })}
                    if !selection_order.is_empty() {
                        span { style: "font-size: 12px;", "Ordem: {selection_order}" }
                    }
                }
                if can_export {
                    button {
                        style: "{export_style}",
                        onclick: on_export,
                        "Baixar Comparativo em CSV"
                    }
                }
                span { style: "font-size: 12px; margin-top: auto;", "{status}" }
            }

            main {
                style: "{main_style}",
                h1 { style: "{heading}", "{APP_TITLE}" }
                if let Some(note) = skipped_note {
                    p { style: "font-size: 12px; opacity: 0.8;", "{note}" }
                }
                if let Some(message) = main_content {
                    p { "{message}" }
                }
                if let Ok(view) = &view {
                    h2 { style: "{heading}", "Saldos Bancários" }
                    BalanceCards { cards: view.balances.clone(), palette: palette.clone() }

                    if let Some(comparison) = &view.comparison {
                        h2 { style: "{heading}", "Comparativo de Indicadores Financeiros Entre Guias" }
                        ComparisonTableView {
                            table: comparison.comparison.table.clone(),
                            palette: palette.clone(),
                        }
                        ChartView { chart: comparison.amounts_chart.clone(), palette: palette.clone() }
                        ChartView { chart: comparison.margins_chart.clone(), palette: palette.clone() }
                        ChartView { chart: comparison.trend_chart.clone(), palette: palette.clone() }
                    } else if current.is_some() {
                        p {
                            "Selecione ao menos {MIN_TABS_FOR_COMPARISON} guias para ver o comparativo "
                            "({selected_count} selecionada(s))."
                        }
                    } else {
                        p { "Faça upload da planilha DRE para começar." }
                    }
                }
            }
        }
    }
}
