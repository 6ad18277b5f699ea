use data_organizer::models::{element::Element, surface::Surface};
use tui::{
    style::{Color, Style},
    text::{Span, Spans},
};

use crate::styles::SELECTED_STYLE;

const BAR: &str = "██";
const EMPTY: &str = "  ";

/// One painted element, located in terminal columns
#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    pub column: usize,
    pub value: i64,
    pub color: Color,
    pub highlighted: bool,
}

/// Collects painted elements and turns them into lines of vertical bars
pub struct TerminalSurface {
    pub bars: Vec<Bar>,
    origin_x: i32,
}

impl TerminalSurface {
    pub fn new(origin_x: i32) -> Self {
        Self {
            bars: Vec::new(),
            origin_x,
        }
    }

    /// `height` rows of bars, tallest values on top, followed by a row with
    /// the value of every bar
    pub fn lines(&self, height: usize) -> Vec<Spans<'static>> {
        let mut lines: Vec<Spans<'static>> = (1..=height as i64)
            .rev()
            .map(|row| {
                self.row(|bar| {
                    let cell = if bar.value >= row { BAR } else { EMPTY };
                    Span::styled(cell, Self::style(bar))
                })
            })
            .collect();

        lines.push(self.row(|bar| Span::styled(format!("{:>2}", bar.value), Self::style(bar))));
        lines
    }

    fn row<F>(&self, cell: F) -> Spans<'static>
    where
        F: Fn(&Bar) -> Span<'static>,
    {
        let mut spans = Vec::new();
        let mut column = 0;
        for bar in &self.bars {
            if bar.column > column {
                spans.push(Span::raw(" ".repeat(bar.column - column)));
                column = bar.column;
            }
            spans.push(cell(bar));
            column += EMPTY.len();
        }
        Spans::from(spans)
    }

    fn style(bar: &Bar) -> Style {
        match bar.highlighted {
            true => SELECTED_STYLE,
            false => Style::default().fg(bar.color),
        }
    }
}

impl Surface for TerminalSurface {
    fn draw_element(&mut self, element: &Element) {
        let (r, g, b) = element.color;
        self.bars.push(Bar {
            column: (element.position().x - self.origin_x).max(0) as usize,
            value: element.value(),
            color: Color::Rgb(r, g, b),
            highlighted: element.is_highlighted(),
        });
    }
}
