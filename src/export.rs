// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Report export
//!
//! Static renderings of a report table as CSV, XLSX, PDF, DOCX, and the
//! chart as an HTML page. XLSX output carries a native spreadsheet chart when
//! the query selected one.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::chart::{render_chart_html, ChartKind, ChartSpec};
use crate::error::{AssistantError, Result};
use crate::models::{parse_number, ReportTable};

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Csv,
    Xlsx,
    Pdf,
    Docx,
    Html,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 5] = [
        Self::Csv,
        Self::Xlsx,
        Self::Pdf,
        Self::Docx,
        Self::Html,
    ];

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Xlsx => "xlsx",
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::Html => "html",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Csv => "CSV",
            Self::Xlsx => "Excel",
            Self::Pdf => "PDF",
            Self::Docx => "Word",
            Self::Html => "HTML chart",
        }
    }

    pub fn default_file_name(&self) -> String {
        format!("analytics.{}", self.extension())
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "xlsx" | "excel" => Ok(Self::Xlsx),
            "pdf" => Ok(Self::Pdf),
            "docx" | "word" => Ok(Self::Docx),
            "html" | "chart" => Ok(Self::Html),
            other => Err(format!(
                "unknown export format '{}' (expected csv, xlsx, pdf, docx or html)",
                other
            )),
        }
    }
}

/// Render `table` (and `chart`, where the format supports it) as bytes
pub fn export(
    table: &ReportTable,
    chart: Option<&ChartSpec>,
    title: &str,
    format: ExportFormat,
) -> Result<Vec<u8>> {
    match format {
        ExportFormat::Csv => to_csv(table),
        ExportFormat::Xlsx => to_xlsx(table, chart).map_err(|e| AssistantError::Export(e.to_string())),
        ExportFormat::Pdf => to_pdf(table, chart, title),
        ExportFormat::Docx => to_docx(table, chart, title),
        ExportFormat::Html => {
            let spec = chart.ok_or_else(|| {
                AssistantError::Export("no chart was selected for this query".to_string())
            })?;
            render_chart_html(table, spec)
                .map(String::into_bytes)
                .ok_or_else(|| AssistantError::Export("chart columns are missing".to_string()))
        }
    }
}

/// Export into `dir` under the format's default file name
pub fn write_export(
    dir: &Path,
    table: &ReportTable,
    chart: Option<&ChartSpec>,
    title: &str,
    format: ExportFormat,
) -> Result<PathBuf> {
    let bytes = export(table, chart, title, format)?;
    std::fs::create_dir_all(dir)?;
    let path = dir.join(format.default_file_name());
    std::fs::write(&path, bytes)?;
    Ok(path)
}

pub fn to_csv(table: &ReportTable) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(&table.columns)?;
    for row in &table.rows {
        writer.write_record(row)?;
    }
    writer
        .into_inner()
        .map_err(|e| AssistantError::Export(e.to_string()))
}

const SHEET_NAME: &str = "Report";

fn to_xlsx(
    table: &ReportTable,
    chart: Option<&ChartSpec>,
) -> std::result::Result<Vec<u8>, rust_xlsxwriter::XlsxError> {
    use rust_xlsxwriter::{Chart, ChartType, Format, Workbook};

    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, name) in table.columns.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, name, &header_format)?;
    }
    for (r, row) in table.rows.iter().enumerate() {
        let row_num = (r + 1) as u32;
        for (col, cell) in row.iter().enumerate() {
            match parse_number(cell) {
                Some(n) => worksheet.write_number(row_num, col as u16, n)?,
                None => worksheet.write_string(row_num, col as u16, cell)?,
            };
        }
    }

    if let Some(spec) = chart.filter(|_| !table.is_empty()) {
        if let (Some(x), Some(y)) = (table.column_index(&spec.x), table.column_index(&spec.y)) {
            let chart_type = match spec.kind {
                ChartKind::Bar => ChartType::Column,
                ChartKind::Line => ChartType::Line,
                ChartKind::Pie => ChartType::Pie,
                ChartKind::Scatter => ChartType::Scatter,
            };
            let last_row = table.row_count() as u32;
            let mut xlsx_chart = Chart::new(chart_type);
            xlsx_chart
                .add_series()
                .set_categories((SHEET_NAME, 1, x as u16, last_row, x as u16))
                .set_values((SHEET_NAME, 1, y as u16, last_row, y as u16));
            xlsx_chart.title().set_name(spec.title.as_str());
            worksheet.insert_chart(1, (table.column_count() + 1) as u16, &xlsx_chart)?;
        }
    }

    workbook.save_to_buffer()
}

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 15.0;
const LINE_HEIGHT_MM: f32 = 6.0;
const BODY_FONT_PT: f32 = 10.0;
// Helvetica at 10pt averages about 2mm per character
const CHAR_WIDTH_MM: f32 = 2.0;

fn to_pdf(table: &ReportTable, chart: Option<&ChartSpec>, title: &str) -> Result<Vec<u8>> {
    use printpdf::{BuiltinFont, Mm, PdfDocument};

    let (doc, page, layer) =
        PdfDocument::new(title, Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
    let font = doc.add_builtin_font(BuiltinFont::Helvetica).map_err(pdf_err)?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(pdf_err)?;

    let mut current = doc.get_page(page).get_layer(layer);
    let mut y = PAGE_HEIGHT_MM - MARGIN_MM;

    current.use_text(title, 16.0, Mm(MARGIN_MM), Mm(y), &bold);
    y -= LINE_HEIGHT_MM * 2.0;

    if let Some(spec) = chart {
        current.use_text(chart_caption(spec), BODY_FONT_PT, Mm(MARGIN_MM), Mm(y), &font);
        y -= LINE_HEIGHT_MM * 1.5;
    }

    let columns = table.column_count().max(1);
    let col_width = (PAGE_WIDTH_MM - 2.0 * MARGIN_MM) / columns as f32;
    let max_chars = ((col_width / CHAR_WIDTH_MM) as usize).max(3);

    let mut lines: Vec<(&[String], bool)> = vec![(table.columns.as_slice(), true)];
    lines.extend(table.rows.iter().map(|r| (r.as_slice(), false)));

    for (cells, is_header) in lines {
        if y < MARGIN_MM {
            let (p, l) = doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
            current = doc.get_page(p).get_layer(l);
            y = PAGE_HEIGHT_MM - MARGIN_MM;
        }
        let face = if is_header { &bold } else { &font };
        for (i, cell) in cells.iter().enumerate() {
            let x = MARGIN_MM + col_width * i as f32;
            current.use_text(fit(cell, max_chars), BODY_FONT_PT, Mm(x), Mm(y), face);
        }
        y -= LINE_HEIGHT_MM;
    }

    if table.is_empty() {
        current.use_text("No data returned.", BODY_FONT_PT, Mm(MARGIN_MM), Mm(y), &font);
    }

    doc.save_to_bytes().map_err(pdf_err)
}

fn pdf_err(e: impl std::fmt::Display) -> AssistantError {
    AssistantError::Export(format!("PDF: {}", e))
}

fn fit(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_chars.saturating_sub(2)).collect();
        format!("{}..", cut)
    }
}

fn chart_caption(spec: &ChartSpec) -> String {
    match spec.kind {
        ChartKind::Pie => format!("Chart: pie of {} by {}", spec.y, spec.x),
        kind => format!("Chart: {} of {} against {}", kind, spec.y, spec.x),
    }
}

fn to_docx(table: &ReportTable, chart: Option<&ChartSpec>, title: &str) -> Result<Vec<u8>> {
    use docx_rs::{Docx, Paragraph, Run, Table, TableCell, TableRow};

    let cell = |text: &str, bold: bool| {
        let run = Run::new().add_text(text);
        let run = if bold { run.bold() } else { run };
        TableCell::new().add_paragraph(Paragraph::new().add_run(run))
    };

    let mut rows = vec![TableRow::new(
        table.columns.iter().map(|c| cell(c.as_str(), true)).collect(),
    )];
    rows.extend(
        table
            .rows
            .iter()
            .map(|r| TableRow::new(r.iter().map(|c| cell(c.as_str(), false)).collect())),
    );

    let mut doc = Docx::new().add_paragraph(
        Paragraph::new().add_run(Run::new().add_text(title).size(32).bold()),
    );
    if let Some(spec) = chart {
        doc = doc.add_paragraph(Paragraph::new().add_run(Run::new().add_text(chart_caption(spec))));
    }
    doc = doc.add_table(Table::new(rows));

    let mut buf = Cursor::new(Vec::new());
    doc.build()
        .pack(&mut buf)
        .map_err(|e| AssistantError::Export(format!("DOCX: {}", e)))?;
    Ok(buf.into_inner())
}
