//! Read-only access to the active tier for rendering call sites.
//!
//! A [`QualityHandle`] shares the controller's tier cell. Call sites read it
//! at most once per frame and must not hold the snapshot across frames: the
//! controller may move the tier between any two of them.

use crate::tier::{QualitySettings, QualityTier};
use std::cell::Cell;
use std::rc::Rc;

/// The tier and settings in effect for the current frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QualitySnapshot {
    pub tier: QualityTier,
    pub settings: &'static QualitySettings,
}

#[derive(Clone, Debug)]
pub struct QualityHandle {
    active: Rc<Cell<QualityTier>>,
    pinned: Option<QualityTier>,
}

impl QualityHandle {
    pub(crate) fn new(active: Rc<Cell<QualityTier>>) -> Self {
        Self {
            active,
            pinned: None,
        }
    }

    /// A handle that ignores the adaptive tier and always reports `tier`.
    ///
    /// Used by call sites whose layout wants a fixed preset (compact
    /// viewports render the hero at full quality).
    pub fn pinned(&self, tier: QualityTier) -> Self {
        Self {
            active: self.active.clone(),
            pinned: Some(tier),
        }
    }

    /// Drop any pin and follow the controller again.
    pub fn unpinned(&self) -> Self {
        Self {
            active: self.active.clone(),
            pinned: None,
        }
    }

    #[inline]
    pub fn is_pinned(&self) -> bool {
        self.pinned.is_some()
    }

    #[inline]
    pub fn tier(&self) -> QualityTier {
        self.pinned.unwrap_or_else(|| self.active.get())
    }

    #[inline]
    pub fn settings(&self) -> &'static QualitySettings {
        self.tier().settings()
    }

    #[inline]
    pub fn snapshot(&self) -> QualitySnapshot {
        let tier = self.tier();
        QualitySnapshot {
            tier,
            settings: tier.settings(),
        }
    }
}
