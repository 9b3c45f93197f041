//! Text rendering of the shell's header, forms and tables.

use std::fmt::{Display, Write as _};

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use enroll_admin::form::{
    CourseField, StudentField, TeacherField, course_options, student_options, teacher_options,
};
use enroll_admin::{FormMode, Header, RowAction, SelectOption, Shell, TableView};
use enroll_client::ResourceApi;
use enroll_model::Resource;

/// Header, form summary and table for the active view.
pub fn render_view<A: ResourceApi>(shell: &Shell<A>) -> String {
    let mut out = render_header(&shell.header());
    out.push('\n');
    out.push_str(&render_form(shell));
    out.push('\n');
    out.push_str(&render_table(&shell.table()).to_string());
    out
}

pub fn render_header(header: &Header) -> String {
    format!(
        "{}\n{}\nTotal Entries: {}\n",
        header.title, header.subtitle, header.total_entries
    )
}

/// Summary of the form that belongs to the active view.
pub fn render_form<A: ResourceApi>(shell: &Shell<A>) -> String {
    let mut out = String::new();
    match shell.active_view() {
        Resource::Students => {
            let form = shell.student_form();
            let _ = writeln!(out, "{}", form_title(form.title(), form.mode()));
            for field in StudentField::ALL {
                let _ = writeln!(out, "  {}: {}", field.label(), form.fields().get(field));
            }
            let _ = writeln!(out, "  [{}]", form.submit_label());
        }
        Resource::Teachers => {
            let form = shell.teacher_form();
            let _ = writeln!(out, "{}", form_title(form.title(), form.mode()));
            for field in TeacherField::ALL {
                let _ = writeln!(out, "  {}: {}", field.label(), form.fields().get(field));
            }
            let _ = writeln!(out, "  [{}]", form.submit_label());
        }
        Resource::Courses => {
            let form = shell.course_form();
            let _ = writeln!(out, "{}", form_title(form.title(), form.mode()));
            for field in CourseField::ALL {
                let _ = writeln!(out, "  {}: {}", field.label(), form.fields().get(field));
            }
            let _ = writeln!(
                out,
                "  teachers: {}",
                option_list(&teacher_options(&shell.snapshot().teachers))
            );
            let _ = writeln!(out, "  [{}]", form.submit_label());
        }
        Resource::Enrollments => {
            let form = shell.enrollment_form();
            let snapshot = shell.snapshot();
            let _ = writeln!(out, "Enroll Student");
            let _ = writeln!(out, "  Student: {}", selection(form.student().map(|id| id.get())));
            let _ = writeln!(out, "  Course: {}", selection(form.course().map(|id| id.get())));
            let _ = writeln!(
                out,
                "  students: {}",
                option_list(&student_options(&snapshot.students))
            );
            let _ = writeln!(
                out,
                "  courses: {}",
                option_list(&course_options(&snapshot.courses))
            );
            let _ = writeln!(out, "  [Enroll]");
        }
    }
    out
}

/// Form title, naming the row when the form is editing one.
fn form_title<Id: Copy + Display>(title: &str, mode: FormMode<Id>) -> String {
    match mode.editing() {
        Some(id) => format!("{title} #{id}"),
        None => title.to_string(),
    }
}

fn selection(id: Option<i64>) -> String {
    id.map_or_else(|| "(none)".to_string(), |id| format!("#{id}"))
}

fn option_list(options: &[SelectOption]) -> String {
    if options.is_empty() {
        return "(none)".to_string();
    }
    options
        .iter()
        .map(|option| format!("{}={}", option.value, option.label))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Table with an id column first and the row triggers last.
pub fn render_table(view: &TableView) -> Table {
    let mut table = Table::new();
    let mut header = vec![header_cell("ID")];
    header.extend(view.headers.iter().map(|label| header_cell(label)));
    header.push(header_cell("Actions"));
    table.set_header(header);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);

    if view.is_empty() {
        let mut row = vec![dim_cell("-")];
        row.extend(view.headers.iter().map(|_| dim_cell("-")));
        row.push(dim_cell("-"));
        table.add_row(row);
        return table;
    }

    for row in &view.rows {
        let mut cells = vec![Cell::new(row.id)];
        cells.extend(row.cells.iter().map(Cell::new));
        let actions = row
            .actions
            .iter()
            .map(RowAction::label)
            .collect::<Vec<_>>()
            .join(" | ");
        cells.push(Cell::new(actions).fg(Color::DarkGrey));
        table.add_row(cells);
    }
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
