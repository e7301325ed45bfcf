//! Decorator drawing a box around the printed lines

use crate::core::{Decorate, LogEvent, Lines, Printer};

const TOP_LEFT: char = '┌';
const TOP_RIGHT: char = '┐';
const BOTTOM_LEFT: char = '└';
const BOTTOM_RIGHT: char = '┘';
const HORIZONTAL: char = '─';
const VERTICAL: char = '│';

/// Frames the wrapped printer's lines with box-drawing characters.
///
/// Every line is right-padded to the longest line, so `N` input lines become
/// `N + 2` lines of equal width (longest + 2, counted in characters). An
/// empty input stays empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoxPrinter<P> {
    inner: P,
}

impl<P: Printer> BoxPrinter<P> {
    pub const fn new(inner: P) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }
}

impl<P: Printer> Printer for BoxPrinter<P> {
    fn print(&self, event: &LogEvent) -> Lines {
        let printed = self.inner.print(event);
        let Some(width) = printed.iter().map(|line| line.chars().count()).max() else {
            return printed;
        };

        let horizontal: String = std::iter::repeat(HORIZONTAL).take(width).collect();

        let mut lines = Vec::with_capacity(printed.len() + 2);
        lines.push(format!("{TOP_LEFT}{horizontal}{TOP_RIGHT}"));
        lines.extend(printed.into_iter().map(|line| {
            let padding = width - line.chars().count();
            format!("{VERTICAL}{line}{:padding$}{VERTICAL}", "")
        }));
        lines.push(format!("{BOTTOM_LEFT}{horizontal}{BOTTOM_RIGHT}"));
        lines
    }
}

/// Layer building a [`BoxPrinter`]
#[derive(Debug, Clone, Copy, Default)]
pub struct Boxed;

impl<P: Printer> Decorate<P> for Boxed {
    type Printer = BoxPrinter<P>;

    fn decorate(self, printer: P) -> BoxPrinter<P> {
        BoxPrinter::new(printer)
    }
}

#[inline]
pub const fn boxed() -> Boxed {
    Boxed
}
