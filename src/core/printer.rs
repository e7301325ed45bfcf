//! Printer capability and chain composition
//!
//! A printer turns one [`LogEvent`] into an ordered list of lines. Chains are
//! built bottom-up: a base printer is wrapped by decorators, each of which
//! owns the printer it wraps and transforms that printer's lines.
//!
//! Two composition paths exist:
//!
//! - **Static**: every decorator is generic over the printer it wraps, so a
//!   chain such as `BoxPrinter<PrefixPrinter<MessagePrinter>>` is a single
//!   concrete type and `print` calls are resolved at compile time.
//! - **Dynamic**: `Box<dyn Printer>` is itself a [`Printer`], so the same
//!   decorators can wrap runtime-selected chains (see [`DynPrinter`]).
//!
//! # Example
//!
//! ```
//! use rust_logforge::printers::{boxed, message, prefixed};
//! use rust_logforge::{LogEvent, Printer, Severity};
//!
//! let printer = message() >> prefixed() >> boxed();
//! let lines = printer.print(&LogEvent::new(Severity::Error, "disk full"));
//! assert_eq!(lines.len(), 3);
//! ```

use super::log_event::{LogEvent, Lines};

/// Turns an event into rendered lines.
///
/// Implementations must not mutate shared state or sample the clock; they
/// only format the event's own fields and never fail outward.
pub trait Printer: Send + Sync {
    fn print(&self, event: &LogEvent) -> Lines;
}

/// A runtime-assembled printer chain
pub type DynPrinter = Box<dyn Printer>;

impl<P: Printer + ?Sized> Printer for Box<P> {
    #[inline]
    fn print(&self, event: &LogEvent) -> Lines {
        (**self).print(event)
    }
}

/// A decorator recipe that can wrap a printer of type `P`.
///
/// Layer values such as [`Boxed`](crate::printers::Boxed) carry the
/// decorator's configuration; `decorate` consumes them together with the
/// inner printer and yields the composed printer.
pub trait Decorate<P: Printer> {
    type Printer: Printer;

    fn decorate(self, printer: P) -> Self::Printer;
}

/// Composition helpers available on every printer
pub trait PrinterExt: Printer + Sized {
    /// Wrap this printer with a decorator layer
    fn with<D: Decorate<Self>>(self, layer: D) -> D::Printer {
        layer.decorate(self)
    }

    /// Erase the concrete chain type
    fn into_dyn(self) -> DynPrinter
    where
        Self: 'static,
    {
        Box::new(self)
    }
}

impl<P: Printer> PrinterExt for P {}

/// Implements `printer >> layer` for printer types defined in this crate.
macro_rules! impl_shr_composition {
    ($($printer:ident $(<$inner:ident>)?),+ $(,)?) => {
        $(
            impl<$($inner: $crate::core::Printer,)? D> ::std::ops::Shr<D> for $printer$(<$inner>)?
            where
                D: $crate::core::Decorate<Self>,
            {
                type Output = D::Printer;

                #[inline]
                fn shr(self, layer: D) -> Self::Output {
                    layer.decorate(self)
                }
            }
        )+
    };
}

pub(crate) use impl_shr_composition;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Severity;

    struct Fixed(&'static [&'static str]);

    impl Printer for Fixed {
        fn print(&self, _event: &LogEvent) -> Lines {
            self.0.iter().map(|line| line.to_string()).collect()
        }
    }

    struct Reversed<P>(P);

    struct Reverse;

    impl<P: Printer> Printer for Reversed<P> {
        fn print(&self, event: &LogEvent) -> Lines {
            let mut lines = self.0.print(event);
            lines.reverse();
            lines
        }
    }

    impl<P: Printer> Decorate<P> for Reverse {
        type Printer = Reversed<P>;

        fn decorate(self, printer: P) -> Reversed<P> {
            Reversed(printer)
        }
    }

    #[test]
    fn test_with_composes_outside_in() {
        let printer = Fixed(&["a", "b"]).with(Reverse);
        let lines = printer.print(&LogEvent::new(Severity::Info, ""));
        assert_eq!(lines, vec!["b", "a"]);
    }

    #[test]
    fn test_boxed_printer_is_printer() {
        let printer: DynPrinter = Fixed(&["x"]).into_dyn();
        let wrapped = printer.with(Reverse).with(Reverse);
        assert_eq!(wrapped.print(&LogEvent::new(Severity::Info, "")), vec!["x"]);
    }
}
