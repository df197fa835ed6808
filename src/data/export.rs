//! HTML table export with row-wise max/min highlighting.

use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone};
use tracing::info;

use crate::config::ExportStyle;
use crate::data::chart_data::SeriesTable;
use crate::error::Result;

/// Highlight of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellMark {
    None,
    Max,
    Min,
}

/// Mark the row maximum and minimum. NaN is never marked; ties mark every
/// equal cell; a cell that is both max and min is marked `Min`.
pub fn row_marks(row: &[f64]) -> Vec<CellMark> {
    let numbers = row.iter().copied().filter(|v| !v.is_nan());
    let max = numbers.clone().fold(f64::NEG_INFINITY, f64::max);
    let min = numbers.fold(f64::INFINITY, f64::min);
    row.iter()
        .map(|&v| {
            if v.is_nan() {
                CellMark::None
            } else if v == min {
                CellMark::Min
            } else if v == max {
                CellMark::Max
            } else {
                CellMark::None
            }
        })
        .collect()
}

/// Fixed-precision number with grouped thousands, e.g. `12.345,679`.
pub fn format_number(v: f64, style: &ExportStyle) -> String {
    if v.is_nan() {
        return "nan".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let fixed = format!("{:.*}", style.precision, v.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut out = String::new();
    if v < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0') {
        out.push('-');
    }
    let digits = int_part.len();
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            out.push(style.thousands_sep);
        }
        out.push(c);
    }
    if let Some(frac) = frac_part {
        out.push(style.decimal_sep);
        out.push_str(frac);
    }
    out
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Write `table` as a self-contained HTML document.
pub fn write_html_table<W: Write>(
    w: &mut W,
    table: &SeriesTable,
    style: &ExportStyle,
) -> std::io::Result<()> {
    writeln!(w, "<!DOCTYPE html>")?;
    writeln!(w, "<html>\n<head>\n<meta charset=\"UTF-8\">")?;
    writeln!(w, "<style>")?;
    writeln!(w, "table {{ border-collapse: collapse; font-family: sans-serif; }}")?;
    writeln!(w, "th, td {{ padding: 2px 8px; text-align: right; }}")?;
    writeln!(w, "td.max {{ background-color: {}; }}", style.max_color)?;
    writeln!(w, "td.min {{ background-color: {}; }}", style.min_color)?;
    writeln!(w, "</style>\n</head>\n<body>")?;
    writeln!(w, "<table>")?;

    write!(w, "<thead>\n<tr><th>{}</th>", escape_html(table.index_name()))?;
    for col in table.columns() {
        write!(w, "<th>{}</th>", escape_html(&col.name))?;
    }
    writeln!(w, "</tr>\n</thead>")?;

    writeln!(w, "<tbody>")?;
    for (i, x) in table.index().iter().enumerate() {
        let row = table.row(i);
        write!(w, "<tr><th>{x}</th>")?;
        for (v, mark) in row.iter().zip(row_marks(&row)) {
            let class = match mark {
                CellMark::Max => " class=\"max\"",
                CellMark::Min => " class=\"min\"",
                CellMark::None => "",
            };
            write!(w, "<td{class}>{}</td>", format_number(*v, style))?;
        }
        writeln!(w, "</tr>")?;
    }
    writeln!(w, "</tbody>\n</table>\n</body>\n</html>")?;
    Ok(())
}

/// Project `data` to `visible` (order kept) and write it as HTML to `dest`.
pub fn export_table(
    data: &SeriesTable,
    visible: &[String],
    dest: &Path,
    style: &ExportStyle,
) -> Result<()> {
    let projected = data.project(visible);
    let mut f = std::io::BufWriter::new(std::fs::File::create(dest)?);
    write_html_table(&mut f, &projected, style)?;
    f.flush()?;
    info!(path = %dest.display(), columns = projected.columns().len(), "exported table");
    Ok(())
}

/// `out{idx}.html` next to the input file.
pub fn output_path_for(data_path: &Path, idx: usize) -> PathBuf {
    let parent = data_path.parent().unwrap_or_else(|| Path::new(""));
    parent.join(format!("out{idx}.html"))
}

/// `out_YYYYmmdd_HHMMSS.html` inside `dir`.
pub fn timestamped_output_path<Tz: TimeZone>(dir: &Path, now: &DateTime<Tz>) -> PathBuf
where
    Tz::Offset: std::fmt::Display,
{
    dir.join(format!("out_{}.html", now.format("%Y%m%d_%H%M%S")))
}
