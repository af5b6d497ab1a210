//! Sequence duel UI rendering.

use rand::Rng;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use sequence_duel::display::TextPanel;
use sequence_duel::sequence::{Player, TurnPhase, TurnSequenceEngine};
use sequence_duel::trigger::ZoneTrigger;

const INFO_PANEL_WIDTH: u16 = 24;

fn player_color(player: Player) -> Color {
    match player {
        Player::One => Color::Cyan,
        Player::Two => Color::Magenta,
    }
}

/// Render the hub or, once a game is running, the duel itself.
pub fn render_sequence_scene<R: Rng>(
    frame: &mut Frame,
    area: Rect,
    engine: &TurnSequenceEngine<TextPanel, R>,
    trigger: &ZoneTrigger,
) {
    frame.render_widget(Clear, area);

    // Auto-started games skip the hub
    if !trigger.is_activated() && engine.state().phase == TurnPhase::Idle {
        render_hub(frame, area);
        return;
    }

    let block = Block::default()
        .title(" Sequence Duel ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Horizontal: sequence (left) + info panel (right)
    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(INFO_PANEL_WIDTH)])
        .split(inner);

    // Left side: sequence (top) + status bar (bottom 2 lines)
    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(2)])
        .split(h_chunks[0]);

    render_sequence(frame, v_chunks[0], engine);
    render_status_bar(frame, v_chunks[1], engine);
    render_info_panel(frame, h_chunks[1], engine);
}

fn render_hub(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Sequence Duel ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let top_pad = inner.height.saturating_sub(3) / 2;
    let mut lines: Vec<Line> = (0..top_pad).map(|_| Line::from("")).collect();
    lines.push(Line::from(Span::styled(
        "A glowing pad hums in the floor.",
        Style::default().fg(Color::Yellow),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(Color::White)),
        Span::styled(" Step onto the pad  ", Style::default().fg(Color::DarkGray)),
        Span::styled("[Esc]", Style::default().fg(Color::White)),
        Span::styled(" Quit", Style::default().fg(Color::DarkGray)),
    ]));

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

/// Render the engine's display text, centered.
fn render_sequence<R: Rng>(
    frame: &mut Frame,
    area: Rect,
    engine: &TurnSequenceEngine<TextPanel, R>,
) {
    let state = engine.state();
    let style = match state.phase {
        TurnPhase::AwaitingInput => Style::default()
            .fg(player_color(state.current_player))
            .add_modifier(Modifier::BOLD),
        TurnPhase::Preparing => Style::default().fg(Color::Yellow),
        TurnPhase::Missed | TurnPhase::Disabled => Style::default()
            .fg(Color::Red)
            .add_modifier(Modifier::BOLD),
        TurnPhase::Completed => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
        TurnPhase::Idle => Style::default().fg(Color::DarkGray),
    };

    let top_pad = area.height.saturating_sub(1) / 2;
    let mut lines: Vec<Line> = (0..top_pad).map(|_| Line::from("")).collect();
    lines.push(Line::from(Span::styled(
        engine.display().text().to_string(),
        style,
    )));

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_status_bar<R: Rng>(
    frame: &mut Frame,
    area: Rect,
    engine: &TurnSequenceEngine<TextPanel, R>,
) {
    if area.height < 1 {
        return;
    }

    let state = engine.state();
    let (status, color) = match state.phase {
        TurnPhase::AwaitingInput => (
            format!(
                "{}: {} of {}",
                state.current_player.tag(),
                state.current_index + 1,
                engine.sequence().len()
            ),
            player_color(state.current_player),
        ),
        TurnPhase::Preparing => ("Get ready...".to_string(), Color::Yellow),
        TurnPhase::Missed => ("Wrong key! Restarting turn.".to_string(), Color::Red),
        TurnPhase::Completed => ("All rounds complete!".to_string(), Color::Green),
        TurnPhase::Disabled => ("Check the config file.".to_string(), Color::Red),
        TurnPhase::Idle => (String::new(), Color::DarkGray),
    };

    frame.render_widget(
        Paragraph::new(status)
            .style(Style::default().fg(color))
            .alignment(Alignment::Center),
        Rect { height: 1, ..area },
    );

    if area.height >= 2 {
        let restart = if engine.is_finished() {
            " Play again  "
        } else {
            " Restart  "
        };
        let controls = Line::from(vec![
            Span::styled("[Enter]", Style::default().fg(Color::White)),
            Span::styled(restart, Style::default().fg(Color::DarkGray)),
            Span::styled("[Esc]", Style::default().fg(Color::White)),
            Span::styled(" Quit", Style::default().fg(Color::DarkGray)),
        ]);
        frame.render_widget(
            Paragraph::new(controls).alignment(Alignment::Center),
            Rect {
                y: area.y + 1,
                height: 1,
                ..area
            },
        );
    }
}

/// Render round progress and both players' bindings.
fn render_info_panel<R: Rng>(
    frame: &mut Frame,
    area: Rect,
    engine: &TurnSequenceEngine<TextPanel, R>,
) {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let state = engine.state();
    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(Color::White);

    let rounds = match state.max_rounds {
        Some(max) => format!("{}/{}", state.current_round, max),
        None => format!("{}/\u{221E}", state.current_round),
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Rounds: ", label),
            Span::styled(rounds, value),
        ]),
        Line::from(vec![
            Span::styled("Turn:   ", label),
            Span::styled(
                state.current_player.tag(),
                Style::default().fg(player_color(state.current_player)),
            ),
        ]),
        Line::from(vec![
            Span::styled("Length: ", label),
            Span::styled(state.sequence_length.to_string(), value),
        ]),
        Line::from(vec![
            Span::styled("Phase:  ", label),
            Span::styled(state.phase.name(), value),
        ]),
    ];
    if let Some(delay) = engine.pending_delay() {
        lines.push(Line::from(vec![
            Span::styled("Next:   ", label),
            Span::styled(format!("{:.1}s", delay.as_secs_f64()), value),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("     ", label),
        Span::styled(
            format!("{:>6}", "P1"),
            Style::default().fg(player_color(Player::One)),
        ),
        Span::styled(
            format!("{:>6}", "P2"),
            Style::default().fg(player_color(Player::Two)),
        ),
    ]));
    for symbol in engine.catalog().symbols() {
        lines.push(Line::from(vec![
            Span::styled(format!("  {}  ", symbol.glyph), value),
            Span::styled(
                format!("{:>6}", symbol.binding_for(Player::One).label()),
                label,
            ),
            Span::styled(
                format!("{:>6}", symbol.binding_for(Player::Two).label()),
                label,
            ),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
