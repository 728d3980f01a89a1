use std::fmt;

use log::info;

use super::Millis;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontState {
    #[default]
    NotObserved,
    Pending,
    Ready { at: Millis },
    Failed,
}

/// What the page's real assets were doing while the overlay was up. Purely
/// informational; none of it feeds back into the schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AssetReport {
    pub images_total: u32,
    pub images_complete: u32,
    pub fonts: FontState,
}

impl AssetReport {
    pub fn record_images(&mut self, total: u32, complete: u32) {
        self.images_total = total;
        self.images_complete = complete.min(total);
    }

    pub fn fonts_pending(&mut self) {
        self.fonts = FontState::Pending;
    }

    pub fn fonts_settled(&mut self, ok: bool, at: Millis) {
        self.fonts = if ok { FontState::Ready { at } } else { FontState::Failed };
    }

    pub fn images_pending(&self) -> u32 {
        self.images_total.saturating_sub(self.images_complete)
    }

    pub fn log(&self, label: &str) {
        info!("preloader assets {label}: {self}");
    }
}

impl fmt::Display for AssetReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} images decoded", self.images_complete, self.images_total)?;
        match self.fonts {
            FontState::NotObserved => Ok(()),
            FontState::Pending => write!(f, ", fonts pending"),
            FontState::Ready { at } => write!(f, ", fonts ready at {at}ms"),
            FontState::Failed => write!(f, ", fonts failed"),
        }
    }
}
