use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use crate::models::Category;
use crate::week::month_label;
use super::app::{App, FormField, InputMode};

/// Marker drawn across an hour with no tasks.
const EMPTY_SLOT: &str = "- - - - - - - - - - - - - - - - - - - -";
const LABEL_WIDTH: usize = 7;

pub fn category_color(category: Category) -> Color {
    match category {
        Category::General => Color::Gray,
        Category::Bug => Color::Green,
        Category::Idea => Color::LightMagenta,
        Category::Modifiers => Color::Blue,
        Category::Challenge => Color::Rgb(128, 0, 128),
        Category::Coding => Color::Rgb(139, 69, 19),
    }
}

pub fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Header + week strip
            Constraint::Min(0),    // Timeline
            Constraint::Length(3)  // Help
        ].as_ref())
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_timeline(f, app, chunks[1]);

    let help_text = match app.input_mode {
        InputMode::Normal => "q: Quit | a: Add Task | ←/→: Day | 1-7: Pick Day | t: Today | ↑/↓: Scroll",
        InputMode::Adding => "Tab: Next Field | ←/→: Category | Enter: Create | Esc: Cancel",
    };
    let mut help_block = Block::default().borders(Borders::ALL);
    if let Some(status) = &app.status {
        help_block = help_block.title(status.as_str());
    }
    let help = Paragraph::new(help_text)
        .style(Style::default().fg(Color::Gray))
        .block(help_block);
    f.render_widget(help, chunks[2]);

    if app.input_mode == InputMode::Adding {
        render_add_form(f, app);
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("Task Planner");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(2)].as_ref())
        .split(inner);

    let greeting = vec![
        Line::from(vec![
            Span::styled("Today", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("    "),
            Span::styled("[a] + Add Task", Style::default().fg(Color::White).bg(Color::Blue)),
        ]),
        Line::from(Span::styled(
            format!("Welcome, {}", app.config.user_name),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            month_label(app.selected_day),
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];
    f.render_widget(Paragraph::new(greeting), rows[0]);

    let week = app.week();
    if week.is_empty() {
        return;
    }
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, week.len() as u32); week.len()])
        .split(rows[1]);

    for (day, column) in week.iter().zip(columns.iter()) {
        let selected = day.date == app.selected_day;
        let mut style = if selected {
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        if day.is_today {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        let cell = Paragraph::new(vec![
            Line::from(day.short_name().to_string()),
            Line::from(day.day_of_month()),
        ])
        .style(style)
        .alignment(Alignment::Center);
        f.render_widget(cell, *column);
    }
}

fn render_timeline(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();
    for bucket in app.buckets().iter().skip(app.scroll_hour as usize) {
        let label = format!("{:<width$}", bucket.label(), width = LABEL_WIDTH);
        if bucket.is_empty() {
            lines.push(Line::from(vec![
                Span::raw(label),
                Span::styled(EMPTY_SLOT, Style::default().fg(Color::DarkGray)),
            ]));
            continue;
        }
        for (i, task) in bucket.tasks.iter().enumerate() {
            let color = category_color(task.category);
            let prefix = if i == 0 { label.clone() } else { " ".repeat(LABEL_WIDTH) };
            lines.push(Line::from(vec![
                Span::raw(prefix),
                Span::styled("▌ ", Style::default().fg(color)),
                Span::styled(task.name.to_uppercase(), Style::default().fg(color).add_modifier(Modifier::BOLD)),
            ]));
            if !task.description.is_empty() {
                lines.push(Line::from(vec![
                    Span::raw(" ".repeat(LABEL_WIDTH)),
                    Span::styled("▌ ", Style::default().fg(color)),
                    Span::styled(task.description.clone(), Style::default().fg(color).add_modifier(Modifier::DIM)),
                ]));
            }
        }
    }

    let title = app.selected_day.format("%A %d, %B").to_string();
    let timeline = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(timeline, area);
}

fn render_add_form(f: &mut Frame, app: &App) {
    let area = centered_rect(60, 11, f.area());
    f.render_widget(Clear, area);

    let draft = &app.form.draft;
    let accent = category_color(draft.category);
    let field = |label: &str, value: String, which: FormField| {
        let style = if app.form.focus == which {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        Line::from(vec![
            Span::styled(format!("{:<13}", label), Style::default().fg(Color::Gray)),
            Span::styled(value, style),
        ])
    };

    let submit_style = if app.can_submit() {
        Style::default().fg(Color::White).bg(accent)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut lines = vec![
        field("NAME", draft.name.clone(), FormField::Name),
        field("DESCRIPTION", draft.description.clone(), FormField::Description),
        field("DATE", draft.date.clone(), FormField::Date),
        field("TIME", draft.time.clone(), FormField::Time),
        field("CATEGORY", format!("< {} >", draft.category.as_str().to_uppercase()), FormField::Category),
        Line::from(""),
        Line::from(Span::styled("[Enter] Create Task", submit_style)),
    ];
    if let Some(err) = &app.form.error {
        lines.push(Line::from(Span::styled(err.clone(), Style::default().fg(Color::Red))));
    }

    let form = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent))
            .title("Create New Task"),
    );
    f.render_widget(form, area);
}

fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let margin = r.height.saturating_sub(height) / 2;
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(margin),
            Constraint::Length(height),
            Constraint::Length(margin),
        ].as_ref())
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ].as_ref())
        .split(popup_layout[1])[1]
}
