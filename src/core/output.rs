//! Output trait for rendered log destinations

use super::{error::Result, log_event::OutputEvent};

/// Destination for rendered lines.
///
/// Outputs take `&self`: an output shared between threads is responsible for
/// serializing access to whatever it writes to.
pub trait Output: Send + Sync {
    fn write(&self, event: &OutputEvent<'_>) -> Result<()>;

    fn flush(&self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str;
}

/// A runtime-selected output
pub type DynOutput = Box<dyn Output>;

impl<O: Output + ?Sized> Output for Box<O> {
    #[inline]
    fn write(&self, event: &OutputEvent<'_>) -> Result<()> {
        (**self).write(event)
    }

    fn flush(&self) -> Result<()> {
        (**self).flush()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
