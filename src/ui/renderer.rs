//! Plain-text rendering of directory view models.
//!
//! Rendering is two steps:
//!
//! 1. **View Model Computation**: `DirectoryState` into [`DirectoryViewModel`]
//! 2. **Text Layout**: view model into a `String`, optionally colored
//!
//! Passing `None` for the theme produces output without escape sequences,
//! suitable for pipes and tests.
//!
//! # Example
//!
//! ```rust
//! use employee_directory::app::DirectoryState;
//! use employee_directory::ui::render;
//!
//! let text = render(&DirectoryState::new(), None, 80);
//! assert!(text.starts_with("Employee Directory"));
//! ```

use crate::app::DirectoryState;
use crate::domain::text::truncate_text;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DirectoryViewModel, EmployeeDetail, EmployeeRow, EmptyState, Notice};

const NAME_WIDTH: usize = 24;
const TITLE_WIDTH: usize = 26;
const DEPARTMENT_WIDTH: usize = 18;

/// Computes the view model for `state` and renders it.
#[must_use]
pub fn render(state: &DirectoryState, theme: Option<&Theme>, cols: usize) -> String {
    render_list(&DirectoryViewModel::from_state(state), theme, cols)
}

/// Renders the list screen.
///
/// `cols` bounds the email column; narrower terminals truncate it.
#[must_use]
pub fn render_list(vm: &DirectoryViewModel, theme: Option<&Theme>, cols: usize) -> String {
    let paint = Painter(theme);
    let mut out = String::new();

    let counts = format!(
        "{} of {} employees [{}]",
        vm.header.filtered, vm.header.total, vm.header.status
    );
    push_line(
        &mut out,
        &format!("{}  {}", paint.title(&vm.header.title), paint.dim(&counts)),
    );

    if let Some(search) = &vm.search_bar {
        push_line(&mut out, &format!("Search: \"{}\"", search.query));
    }

    match &vm.notice {
        Some(Notice::Refreshing) => push_line(&mut out, &paint.dim("Refreshing...")),
        Some(Notice::Stale { message }) => push_line(
            &mut out,
            &paint.error(&format!("Showing previously loaded employees. {message}")),
        ),
        None => {}
    }

    if let Some(empty) = &vm.empty_state {
        render_empty_state(&mut out, empty, &paint);
        return out;
    }

    let heading = format!(
        "{:<name$}{:<title$}{:<department$}EMAIL",
        "NAME",
        "TITLE",
        "DEPARTMENT",
        name = NAME_WIDTH,
        title = TITLE_WIDTH,
        department = DEPARTMENT_WIDTH,
    );
    push_line(&mut out, &paint.bold(&heading));

    let email_width = cols
        .saturating_sub(NAME_WIDTH + TITLE_WIDTH + DEPARTMENT_WIDTH)
        .max(8);
    for row in &vm.rows {
        push_line(&mut out, &render_row(row, email_width));
    }
    out
}

fn render_row(row: &EmployeeRow, email_width: usize) -> String {
    format!(
        "{}{}{}{}",
        fit(&row.name, NAME_WIDTH),
        fit(&row.title, TITLE_WIDTH),
        fit(&row.department, DEPARTMENT_WIDTH),
        fit(&row.email, email_width).trim_end(),
    )
}

fn render_empty_state(out: &mut String, empty: &EmptyState, paint: &Painter<'_>) {
    push_line(out, "");
    if empty.is_error {
        push_line(out, &paint.error(&empty.message));
    } else {
        push_line(out, &empty.message);
    }
    if !empty.subtitle.is_empty() {
        push_line(out, &paint.dim(&empty.subtitle));
    }
}

/// Renders the detail screen for one employee.
#[must_use]
pub fn render_detail(detail: &EmployeeDetail, theme: Option<&Theme>) -> String {
    let paint = Painter(theme);
    let mut out = String::new();

    push_line(
        &mut out,
        &format!("[{}] {}", detail.initials, paint.title(&detail.name)),
    );
    if let Some(subtitle) = &detail.subtitle {
        push_line(&mut out, &paint.dim(subtitle));
    }

    let label_width = detail
        .sections
        .iter()
        .flat_map(|s| s.rows.iter())
        .map(|r| r.label.len())
        .max()
        .unwrap_or(0)
        + 2;

    for section in &detail.sections {
        push_line(&mut out, "");
        push_line(&mut out, &paint.bold(section.title));
        for row in &section.rows {
            let label = format!("{}:", row.label);
            let label = paint.dim(&format!("{label:<label_width$}"));
            push_line(&mut out, &format!("  {label}{}", row.value));
        }
    }
    out
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

/// Pads or truncates `text` to `width` characters, keeping at least one
/// trailing space as a column separator.
fn fit(text: &str, width: usize) -> String {
    let cell = if text.chars().count() >= width {
        truncate_text(text, width.saturating_sub(4))
    } else {
        text.to_string()
    };
    format!("{cell:<width$}")
}

/// Applies theme colors when a theme is present.
struct Painter<'a>(Option<&'a Theme>);

impl Painter<'_> {
    fn wrap(&self, prefix: impl FnOnce(&Theme) -> String, text: &str) -> String {
        self.0.map_or_else(
            || text.to_string(),
            |theme| format!("{}{text}{}", prefix(theme), Theme::reset()),
        )
    }

    fn title(&self, text: &str) -> String {
        self.wrap(
            |t| format!("{}{}", Theme::bold(), Theme::fg(t.colors.primary)),
            text,
        )
    }

    fn bold(&self, text: &str) -> String {
        self.wrap(|_| Theme::bold().to_string(), text)
    }

    fn dim(&self, text: &str) -> String {
        self.wrap(|t| Theme::fg(t.colors.text_secondary), text)
    }

    fn error(&self, text: &str) -> String {
        self.wrap(|t| Theme::fg(t.colors.error), text)
    }
}
