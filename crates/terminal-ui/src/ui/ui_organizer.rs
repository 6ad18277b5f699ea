use tui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Span, Spans},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::{
    app::{App, Module},
    data::terminal_surface::TerminalSurface,
    styles::{PRESSED_STYLE, SELECTED_STYLE},
};

fn draw_buttons<B>(f: &mut Frame<B>, app: &mut App, area: Rect)
where
    B: Backend,
{
    let items: Vec<ListItem> = app
        .buttons
        .items
        .iter()
        .map(|action| {
            let style = match app.pressed {
                Some(pressed) if pressed == *action => PRESSED_STYLE,
                _ => Style::default(),
            };
            ListItem::new(format!("[{}] {}", action.shortcut(), action.label())).style(style)
        })
        .collect();

    let buttons = List::new(items)
        .block(
            Block::default()
                .title("Actions")
                .borders(Borders::ALL)
                .border_style(match app.selected_module {
                    Module::Buttons => SELECTED_STYLE,
                    _ => Style::default(),
                }),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol(">> ");

    f.render_stateful_widget(buttons, area, &mut app.buttons.state);
}

/// Bar rows that fit in `area`, leaving room for the borders and the value row
fn bar_rows(maximum_item_value: i64, area: Rect) -> usize {
    let available = area.height.saturating_sub(3) as usize;
    (maximum_item_value.max(1) as usize).min(available)
}

fn draw_collection<B>(f: &mut Frame<B>, app: &mut App, area: Rect)
where
    B: Backend,
{
    let settings = app.organizer.get_settings();
    let mut surface = TerminalSurface::new(settings.origin.0);
    app.organizer.paint(&mut surface);

    let collection = Paragraph::new(surface.lines(bar_rows(settings.maximum_item_value, area)))
        .block(Block::default().title("Collection").borders(Borders::ALL));
    f.render_widget(collection, area);
}

fn draw_status<B>(f: &mut Frame<B>, app: &mut App, area: Rect)
where
    B: Backend,
{
    let selected = match app.selected_value() {
        Some(value) => format!("Selected: {}", value),
        None => "Nothing selected".to_string(),
    };
    let status = Paragraph::new(Spans::from(vec![
        Span::styled(selected, SELECTED_STYLE),
        Span::raw("  "),
        Span::raw(app.status.as_str()),
    ]))
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, area);
}

pub fn draw_organizer_view<B>(f: &mut Frame<B>, app: &mut App)
where
    B: Backend,
{
    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25), Constraint::Percentage(75)].as_ref())
        .split(f.size());

    let main_modules = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)].as_ref())
        .split(panels[1]);

    draw_buttons(f, app, panels[0]);
    draw_collection(f, app, main_modules[0]);
    draw_status(f, app, main_modules[1]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_rows_fit_the_panel() {
        assert_eq!(bar_rows(16, Rect::new(0, 0, 80, 40)), 16);
        assert_eq!(bar_rows(99, Rect::new(0, 0, 80, 20)), 17);
        assert_eq!(bar_rows(5_000_000, Rect::new(0, 0, 80, 20)), 17);
        assert_eq!(bar_rows(16, Rect::new(0, 0, 80, 2)), 0);
    }
}
