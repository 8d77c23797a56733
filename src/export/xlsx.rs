use super::{HEADERS, PairRow, path_str};
use crate::errors::AppResult;
use rust_xlsxwriter::{Color, Format, FormatBorder, FormatPattern, Workbook};
use std::path::Path;

/// Write pair rows as a styled XLSX worksheet.
pub(crate) fn write_xlsx(path: &Path, rows: &[PairRow]) -> AppResult<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    if rows.is_empty() {
        worksheet.write(0, 0, "Sin registros")?;
        workbook.save(path_str(path)?)?;
        return Ok(());
    }

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet.write_with_format(0, col as u16, *header, &header_format)?;
    }
    worksheet.set_freeze_panes(1, 0).ok();

    let mut col_widths: Vec<usize> = HEADERS.iter().map(|h| h.chars().count()).collect();

    for (row_index, row) in rows.iter().enumerate() {
        for (col, value) in row.values().iter().enumerate() {
            worksheet.write((row_index + 1) as u32, col as u16, *value)?;
            col_widths[col] = col_widths[col].max(value.chars().count());
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet.set_column_width(c as u16, *w as f64 + 2.0)?;
    }

    workbook.save(path_str(path)?)?;
    Ok(())
}
