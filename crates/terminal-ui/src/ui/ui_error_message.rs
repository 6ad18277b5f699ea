use tui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::{
    app::App,
    styles::{ERROR_STYLE, SELECTED_STYLE},
};

/// Rect of `percent_x` width and `height` rows centered in `r`
fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let margin_y = r.height.saturating_sub(height) / 2;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(margin_y),
                Constraint::Length(height),
                Constraint::Length(margin_y),
            ]
            .as_ref(),
        )
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            [
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ]
            .as_ref(),
        )
        .split(rows[1])[1]
}

pub fn draw_error_popup<B>(f: &mut Frame<B>, app: &mut App)
where
    B: Backend,
{
    let area = centered_rect(40, 9, f.size());
    let block = Block::default()
        .title("Error")
        .borders(Borders::ALL)
        .border_style(ERROR_STYLE);
    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(3)].as_ref())
        .margin(1)
        .split(area);

    let message = Paragraph::new(app.popup.message.as_str())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(message, popup_layout[0]);

    let ok_button = Paragraph::new("OK")
        .style(SELECTED_STYLE)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(ok_button, popup_layout[1]);
}
