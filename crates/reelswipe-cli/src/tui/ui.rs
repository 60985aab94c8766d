//! TUI rendering logic for the swipe deck.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use super::gesture::SwipeDirection;
use super::state::{DeckView, EMPTY_MESSAGE, LOADING_MESSAGE, SwipeDeckState};

/// Screen regions that accept pointer input, as laid out by the last draw.
///
/// `card` is empty unless a movie is on screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeckLayout {
    /// Swipeable movie card.
    pub card: Rect,
    /// "Dislike" button.
    pub dislike: Rect,
    /// "Like" button.
    pub like: Rect,
}

/// Draws the swipe deck and returns the interactive regions.
#[allow(clippy::indexing_slicing)]
pub fn draw(
    frame: &mut Frame,
    state: &SwipeDeckState,
    pending: Option<SwipeDirection>,
) -> DeckLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Min(5),    // card
            Constraint::Length(3), // buttons
            Constraint::Length(3), // footer
        ])
        .split(frame.area());

    let showing_movie = matches!(state.view(), DeckView::Movie(_));

    draw_header(frame, chunks[0], state);
    draw_card(frame, chunks[1], state, pending.filter(|_| showing_movie));

    let buttons = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[2]);
    draw_button(frame, buttons[0], "Dislike", Color::Red);
    draw_button(frame, buttons[1], "Like", Color::Green);

    draw_footer(frame, chunks[3]);

    DeckLayout {
        card: if showing_movie {
            chunks[1]
        } else {
            Rect::default()
        },
        dislike: buttons[0],
        like: buttons[1],
    }
}

/// Draws the header with the deck position.
fn draw_header(frame: &mut Frame, area: Rect, state: &SwipeDeckState) {
    let position = match state.view() {
        DeckView::Movie(_) => format!(
            "{} / {}",
            state.cursor().saturating_add(1),
            state.movies().len()
        ),
        DeckView::Loading | DeckView::Error(_) | DeckView::Empty => String::new(),
    };
    let header = Paragraph::new(position)
        .alignment(Alignment::Right)
        .block(Block::default().borders(Borders::ALL).title(" Popular Movies "));
    frame.render_widget(header, area);
}

/// Draws the card: the current movie, or a status message in its place.
fn draw_card(
    frame: &mut Frame,
    area: Rect,
    state: &SwipeDeckState,
    pending: Option<SwipeDirection>,
) {
    let border_style = match pending {
        Some(SwipeDirection::Right) => Style::default().fg(Color::Green),
        Some(SwipeDirection::Left) => Style::default().fg(Color::Red),
        None => Style::default(),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    let lines = match state.view() {
        DeckView::Loading => vec![Line::from(LOADING_MESSAGE)],
        DeckView::Error(message) => vec![Line::from(Span::styled(
            message,
            Style::default().fg(Color::Red),
        ))],
        DeckView::Empty => vec![Line::from(EMPTY_MESSAGE)],
        DeckView::Movie(movie) => {
            let poster = movie
                .poster_url()
                .unwrap_or_else(|| String::from("(no poster)"));
            vec![
                Line::from(Span::styled(poster, Style::default().fg(Color::DarkGray))),
                Line::default(),
                Line::from(Span::styled(
                    movie.title.as_str(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
            ]
        }
    };

    let card = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(card, area);
}

fn draw_button(frame: &mut Frame, area: Rect, label: &str, color: Color) {
    let button = Paragraph::new(Span::styled(
        label,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color)),
    );
    frame.render_widget(button, area);
}

/// Draws the footer with key hints.
fn draw_footer(frame: &mut Frame, area: Rect) {
    let help_text = Line::from(vec![Span::raw(
        "\u{2190}/h: dislike  \u{2192}/l: like  drag card: swipe  o: open poster  q: quit",
    )]);
    let footer = Paragraph::new(help_text).block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}
