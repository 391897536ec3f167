//! Plain-text table rendering for list commands.

use homologa_core::pagination::PagedView;

/// Prints a fixed-width table. Column widths fit the widest cell.
pub fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }
    }

    print_row(&headers.iter().map(|h| h.to_string()).collect::<Vec<_>>(), &widths);
    let divider: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    print_row(&divider, &widths);
    for row in rows {
        print_row(row, &widths);
    }
}

fn print_row(cells: &[String], widths: &[usize]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = width))
        .collect();
    println!("{}", line.join("  "));
}

/// Prints the "página X de Y (Z en total)" footer under a paginated table.
pub fn print_page_footer<T>(view: &PagedView<T>) {
    println!(
        "página {} de {} ({} en total)",
        view.page, view.total_pages, view.total
    );
}
