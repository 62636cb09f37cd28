//! Frame rendering for the explorer.

use pipex_core::explorer::StageExplorer;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, explorer: &StageExplorer, focus: usize, notice: Option<&str>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_header(frame, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[1]);

    render_stage_list(frame, body[0], explorer, focus);
    render_detail(frame, body[1], explorer);
    render_footer(frame, chunks[2], notice);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(Span::styled(
        " pipex — CI/CD pipeline explorer",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(header, area);
}

fn render_stage_list(frame: &mut Frame, area: Rect, explorer: &StageExplorer, focus: usize) {
    let items: Vec<ListItem> = explorer
        .catalog()
        .iter()
        .enumerate()
        .map(|(row, stage)| {
            let expanded = explorer.is_expanded(stage.id);
            let marker = if expanded { "[-]" } else { "[+]" };
            let mut style = Style::default();
            if expanded {
                style = style.fg(Color::Cyan).add_modifier(Modifier::BOLD);
            }
            if row == focus {
                style = style.add_modifier(Modifier::REVERSED);
            }
            ListItem::new(format!("{marker} {}. {}", stage.id, stage.title)).style(style)
        })
        .collect();

    let block = Block::default().borders(Borders::ALL).title("Stages");
    frame.render_widget(List::new(items).block(block), area);
}

fn render_detail(frame: &mut Frame, area: Rect, explorer: &StageExplorer) {
    let block = Block::default().borders(Borders::ALL).title("Details");

    let lines: Vec<Line> = match explorer.current_selection() {
        Some(stage) => {
            let mut lines = vec![
                Line::from(Span::styled(
                    format!("{}. {}", stage.id, stage.title),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    stage.summary.clone(),
                    Style::default().add_modifier(Modifier::ITALIC),
                )),
                Line::from(""),
                Line::from(stage.details.clone()),
            ];
            if !stage.tools.is_empty() {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    "Tools",
                    Style::default().add_modifier(Modifier::UNDERLINED),
                )));
                for tool in &stage.tools {
                    lines.push(Line::from(format!("  • {tool}")));
                }
            }
            lines
        }
        None => vec![
            Line::from(""),
            Line::from(Span::styled(
                "  Select a stage to read its details.",
                Style::default().fg(Color::DarkGray),
            )),
        ],
    };

    let detail = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(detail, area);
}

fn render_footer(frame: &mut Frame, area: Rect, notice: Option<&str>) {
    let keys = " ↑/↓ move · enter toggle · 1-9 jump · q quit";
    let line = match notice {
        Some(msg) => Line::from(vec![
            Span::raw(keys),
            Span::raw("  "),
            Span::styled(msg.to_string(), Style::default().fg(Color::Red)),
        ]),
        None => Line::from(Span::styled(keys, Style::default().fg(Color::DarkGray))),
    };
    frame.render_widget(Paragraph::new(line), area);
}
