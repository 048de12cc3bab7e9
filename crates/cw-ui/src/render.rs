//! Render functions
//!
//! Pure functions from [`AppState`] to a ratatui frame.

use crate::app::{AppState, Focus};
use crate::theme::Theme;
use cw_core::comment::{UnitKind, UnitRef};
use cw_core::composer::Composer;
use cw_core::unit::{UnitActions, UnitMode};
use cw_core::vote::VoteDirection;
use cw_core::ComposerSlot;
use ratatui::{prelude::*, widgets::*};

/// Title of the delete modal
pub const DELETE_TITLE: &str = "Delete comment";

/// Body of the delete modal
pub const DELETE_PROMPT: &str =
    "Are you sure you want to delete this comment? This will remove the comment and can't be undone.";

/// Settings that shape rendering
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub theme: Theme,
    /// Columns replies are indented by
    pub reply_indent: u16,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            reply_indent: 4,
        }
    }
}

/// Draw the whole UI
pub fn draw(frame: &mut Frame, state: &AppState, config: &RenderConfig) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(area);

    render_title_bar(frame, chunks[0], state);
    render_thread(frame, chunks[1], state, config);
    render_new_comment(frame, chunks[2], state, config);
    render_status_bar(frame, chunks[3], state, &config.theme);

    match state.focus {
        Focus::ConfirmDelete(_) => render_delete_modal(frame, area, &config.theme),
        Focus::Help => render_help(frame, area),
        _ => {}
    }
}

fn render_title_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let store = state.widget.store();
    let replies = store.unit_count() - store.len();
    let title = format!(
        " Comments · {} comments, {} replies ",
        store.len(),
        replies
    );

    frame.render_widget(
        Paragraph::new(title).style(Style::default().add_modifier(Modifier::BOLD)),
        area,
    );
}

/// Lines of the thread plus where the selection and cursor landed
struct ThreadLines {
    lines: Vec<Line<'static>>,
    /// First and one-past-last line of the selected unit
    selected: (usize, usize),
    /// Line and column of the inline composer cursor
    cursor: Option<(usize, u16)>,
}

fn build_thread(state: &AppState, config: &RenderConfig) -> ThreadLines {
    let theme = &config.theme;
    let widget = &state.widget;
    let mut out = ThreadLines {
        lines: Vec::new(),
        selected: (0, 0),
        cursor: None,
    };

    if widget.store().is_empty() {
        out.lines.push(Line::from(Span::styled(
            "  No comments yet. Press c to write one.",
            Style::default().fg(theme.meta),
        )));
        return out;
    }

    let typing_inline = state.focus == Focus::Compose(ComposerSlot::Active);
    let author = widget.current_user().username.as_str();

    for (index, unit) in widget.store().units().iter().enumerate() {
        let start = out.lines.len();
        let is_selected = index == state.selected;
        let depth = match unit.kind() {
            UnitKind::Comment => 0,
            UnitKind::Reply => config.reply_indent,
        };
        let pad = " ".repeat(depth as usize);
        let marker = if is_selected {
            Span::styled("▌", Style::default().fg(theme.selection))
        } else {
            Span::raw(" ")
        };

        out.lines
            .push(unit_header(state, unit, marker.clone(), &pad, theme));

        let mode = widget.mode_of(unit.id());
        let composer = widget.composer(ComposerSlot::Active);

        match (mode, composer) {
            (UnitMode::Editing, Some(composer)) => {
                let (line, col) = composer_line(composer, author, marker.clone(), &pad, "  ", theme);
                if typing_inline {
                    out.cursor = Some((out.lines.len(), col));
                }
                out.lines.push(line);
            }
            _ => {
                for text in unit.content().split('\n') {
                    out.lines
                        .push(content_line(text, marker.clone(), &pad, theme));
                }
            }
        }

        if let (UnitMode::Replying, Some(composer)) = (mode, composer) {
            let (line, col) = composer_line(composer, author, marker.clone(), &pad, "  ↳ ", theme);
            if typing_inline {
                out.cursor = Some((out.lines.len(), col));
            }
            out.lines.push(line);
        }

        if is_selected {
            out.selected = (start, out.lines.len());
        }
        out.lines.push(Line::from(""));
    }

    out
}

fn unit_header(
    state: &AppState,
    unit: &UnitRef<'_>,
    marker: Span<'static>,
    pad: &str,
    theme: &Theme,
) -> Line<'static> {
    let widget = &state.widget;
    let id = unit.id();
    let score = widget.display_score(id).unwrap_or_else(|| unit.score());
    let score_style = match score.cmp(&unit.score()) {
        std::cmp::Ordering::Greater => Style::default().fg(theme.upvoted),
        std::cmp::Ordering::Less => Style::default().fg(theme.downvoted),
        std::cmp::Ordering::Equal => Style::default().fg(theme.accent),
    };
    let actions = UnitActions::for_author(unit.author(), widget.current_user());
    let last_vote = widget.last_vote(id);
    let button_style = |direction: VoteDirection, color: Color| {
        if last_vote == Some(direction) {
            Style::default().fg(color).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.meta)
        }
    };

    let mut spans = vec![
        marker,
        Span::raw(pad.to_string()),
        Span::styled("+ ", button_style(VoteDirection::Increase, theme.upvoted)),
        Span::styled(format!("{}", score), score_style.add_modifier(Modifier::BOLD)),
        Span::styled(" - ", button_style(VoteDirection::Decrease, theme.downvoted)),
        Span::raw(" "),
        Span::styled(
            unit.author().username.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ];

    if actions.is_own {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            " you ",
            Style::default().bg(theme.own_tag).fg(Color::White),
        ));
    }

    spans.push(Span::styled(
        format!(" · {}", unit.created_at()),
        Style::default().fg(theme.meta),
    ));

    if widget.is_confirming_delete(id) {
        spans.push(Span::styled(
            "  deleting…",
            Style::default().fg(theme.danger),
        ));
    } else if actions.can_reply {
        spans.push(Span::styled("   [r] Reply", Style::default().fg(theme.accent)));
    } else {
        spans.push(Span::styled("   [d] Delete", Style::default().fg(theme.danger)));
        spans.push(Span::styled("  [e] Edit", Style::default().fg(theme.accent)));
    }

    if let Some(direction) = last_vote {
        let (hint, color) = match direction {
            VoteDirection::Increase => ("  ▲", theme.upvoted),
            VoteDirection::Decrease => ("  ▼", theme.downvoted),
        };
        spans.push(Span::styled(hint, Style::default().fg(color)));
    }

    Line::from(spans)
}

fn content_line(text: &str, marker: Span<'static>, pad: &str, theme: &Theme) -> Line<'static> {
    let mut spans = vec![marker, Span::raw(format!("{}  ", pad))];

    // Leading "@name," mentions are highlighted
    match text.split_once(", ") {
        Some((mention, rest)) if mention.starts_with('@') && !mention.contains(' ') => {
            spans.push(Span::styled(
                format!("{},", mention),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(format!(" {}", rest)));
        }
        _ => spans.push(Span::raw(text.to_string())),
    }

    Line::from(spans)
}

/// One-line composer; returns the line and the cursor column
fn composer_line(
    composer: &Composer,
    author: &str,
    marker: Span<'static>,
    pad: &str,
    lead: &str,
    theme: &Theme,
) -> (Line<'static>, u16) {
    let prefix = format!("{}{}", pad, lead);
    let avatar = avatar_tag(composer, author);
    let prefix_width = 1 + display_width(&prefix) + display_width(&avatar);
    let text = composer.text().replace('\n', " ");
    let label = format!("  [{}]", composer.kind().button_label());

    let body = if text.is_empty() {
        Span::styled(
            composer.kind().placeholder().unwrap_or_default(),
            Style::default().fg(theme.meta).add_modifier(Modifier::ITALIC),
        )
    } else {
        Span::styled(text.clone(), Style::default().add_modifier(Modifier::UNDERLINED))
    };

    let before_cursor: String = text.chars().take(composer.cursor()).collect();
    let col = (prefix_width + display_width(&before_cursor)) as u16;

    let line = Line::from(vec![
        marker,
        Span::raw(prefix),
        Span::styled(avatar, Style::default().fg(theme.accent)),
        body,
        Span::styled(label, Style::default().fg(theme.accent)),
    ]);
    (line, col)
}

/// Stand-in for the current user's avatar, empty for edit composers
fn avatar_tag(composer: &Composer, author: &str) -> String {
    if composer.kind().shows_avatar() {
        format!("@{} ", author)
    } else {
        String::new()
    }
}

/// Terminal columns taken by `s`; non-ASCII counts as two
fn display_width(s: &str) -> usize {
    s.chars().map(|c| if c.is_ascii() { 1 } else { 2 }).sum()
}

fn render_thread(frame: &mut Frame, area: Rect, state: &AppState, config: &RenderConfig) {
    let thread = build_thread(state, config);
    let height = area.height as usize;

    let (start, end) = thread.selected;
    let scroll = if end <= height {
        0
    } else {
        (end - height).min(start)
    };

    if let Some((line, col)) = thread.cursor {
        if line >= scroll && line < scroll + height {
            let x = area
                .x
                .saturating_add(col)
                .min(area.x + area.width.saturating_sub(1));
            let y = area.y + (line - scroll) as u16;
            frame.set_cursor_position((x, y));
        }
    }

    frame.render_widget(
        Paragraph::new(thread.lines).scroll((paragraph_offset(scroll), 0)),
        area,
    );
}

/// Paragraph scroll offsets are u16; longer threads pin at the limit
fn paragraph_offset(scroll: usize) -> u16 {
    u16::try_from(scroll).unwrap_or(u16::MAX)
}

fn render_new_comment(frame: &mut Frame, area: Rect, state: &AppState, config: &RenderConfig) {
    let theme = &config.theme;
    let focused = state.focus == Focus::Compose(ComposerSlot::NewComment);
    let Some(composer) = state.widget.composer(ComposerSlot::NewComment) else {
        return;
    };

    let title = format!(
        " {}· {} (Enter) ",
        avatar_tag(composer, &state.widget.current_user().username),
        composer.kind().button_label()
    );
    let border = if focused {
        theme.focus_border
    } else {
        theme.unfocus_border
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let text = if composer.is_empty() {
        Span::styled(
            composer.kind().placeholder().unwrap_or_default(),
            Style::default().fg(theme.meta).add_modifier(Modifier::ITALIC),
        )
    } else {
        Span::raw(composer.text().replace('\n', " "))
    };
    frame.render_widget(Paragraph::new(Line::from(text)), inner);

    if focused {
        let before_cursor: String = composer.text().chars().take(composer.cursor()).collect();
        let cursor_x = inner
            .x
            .saturating_add(display_width(&before_cursor) as u16)
            .min(inner.x + inner.width.saturating_sub(1));
        frame.set_cursor_position((cursor_x, inner.y));
    }
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let mode = match state.focus {
        Focus::Browse => "BROWSE",
        Focus::Compose(ComposerSlot::NewComment) => "COMMENT",
        Focus::Compose(ComposerSlot::Active) => match state.widget.active_target() {
            Some(target) if target.mode == cw_core::TargetMode::Editing => "EDIT",
            _ => "REPLY",
        },
        Focus::ConfirmDelete(_) => "CONFIRM",
        Focus::Help => "HELP",
    };

    let count = state.widget.store().unit_count();
    let position = if count == 0 {
        "0/0".to_string()
    } else {
        format!("{}/{}", state.selected + 1, count)
    };

    let text = state.message.clone().unwrap_or_else(|| {
        format!(
            " {} | {} | @{} | ? help ",
            mode,
            position,
            state.widget.current_user().username
        )
    });

    frame.render_widget(
        Paragraph::new(text).style(Style::default().bg(theme.status_bg).fg(theme.status_fg)),
        area,
    );
}

fn render_delete_modal(frame: &mut Frame, area: Rect, theme: &Theme) {
    let text = vec![
        Line::from(""),
        Line::from(DELETE_PROMPT),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                " [n] No, cancel ",
                Style::default().bg(Color::DarkGray).fg(Color::White),
            ),
            Span::raw("   "),
            Span::styled(
                " [y] Yes, delete ",
                Style::default().bg(theme.danger).fg(Color::White),
            ),
        ]),
    ];

    let modal_area = centered_rect(50, 40, area);
    frame.render_widget(Clear, modal_area);
    frame.render_widget(
        Paragraph::new(text).wrap(Wrap { trim: true }).block(
            Block::default()
                .title(DELETE_TITLE)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.danger)),
        ),
        modal_area,
    );
}

fn render_help(frame: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(Span::styled("comment-widget", Style::default().add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from(Span::styled("Navigation", Style::default().fg(Color::Yellow))),
        Line::from("  j/k         Move between comments"),
        Line::from("  g/G         Go to first/last"),
        Line::from(""),
        Line::from(Span::styled("Comments", Style::default().fg(Color::Yellow))),
        Line::from("  +/-         Vote up/down"),
        Line::from("  r           Reply"),
        Line::from("  e           Edit your comment"),
        Line::from("  d           Delete your comment"),
        Line::from("  c           Write a new comment"),
        Line::from(""),
        Line::from(Span::styled("Composer", Style::default().fg(Color::Yellow))),
        Line::from("  Enter       Submit"),
        Line::from("  Tab         Leave open and go back"),
        Line::from("  Esc         Cancel"),
        Line::from(""),
        Line::from(Span::styled("Other", Style::default().fg(Color::Yellow))),
        Line::from("  q           Quit"),
        Line::from("  ?           Show this help"),
        Line::from(""),
        Line::from(Span::styled("Press any key to close", Style::default().fg(Color::DarkGray))),
    ];

    let help_area = centered_rect(50, 70, area);
    frame.render_widget(Clear, help_area);
    frame.render_widget(
        Paragraph::new(text).block(
            Block::default()
                .title("Help")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        ),
        help_area,
    );
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup[1])[1]
}
