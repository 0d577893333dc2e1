use papersync_domain::AttendanceMatrix;

/// Render the matrix as a left-aligned text table for the console.
pub fn render_table(matrix: &AttendanceMatrix) -> String {
    let header = matrix.header();
    let rows: Vec<Vec<String>> = matrix
        .rows()
        .map(|(identity, cells)| {
            std::iter::once(identity.to_string())
                .chain(cells.iter().map(ToString::to_string))
                .collect()
        })
        .collect();

    let mut widths: Vec<usize> = header.iter().map(|cell| cell.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &header, &widths);
    let rule: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
    push_line(&mut out, &rule, &widths);
    for row in &rows {
        push_line(&mut out, row, &widths);
    }
    out
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}
