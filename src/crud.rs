//! One admin tab: the record being edited and whether its save is still in flight.
//! The listed records themselves live in [`crate::store::EntityStore`].

use crate::models::{Booking, Entity};

#[derive(Debug, Clone, PartialEq)]
pub struct PendingSave<E> {
    pub record: E,
    pub is_new: bool,
}

#[derive(Debug, Clone)]
pub struct CrudTab<E: Entity> {
    draft: Option<E>,
    saving: bool,
}

impl<E: Entity> Default for CrudTab<E> {
    fn default() -> Self {
        CrudTab {
            draft: None,
            saving: false,
        }
    }
}

impl<E: Entity> CrudTab<E> {
    pub fn start_create(&mut self) {
        if !self.saving {
            self.draft = Some(E::draft());
        }
    }

    pub fn start_edit(&mut self, item: &E) {
        if !self.saving {
            self.draft = Some(item.clone());
        }
    }

    pub fn draft(&self) -> Option<&E> {
        self.draft.as_ref()
    }

    pub fn draft_mut(&mut self) -> Option<&mut E> {
        self.draft.as_mut()
    }

    pub fn cancel(&mut self) {
        self.draft = None;
    }

    /// Hands out the draft for saving. The draft stays on screen until the save finishes.
    /// Returns `None` when there is nothing to save or a previous save has not finished yet.
    pub fn commit(&mut self) -> Option<PendingSave<E>> {
        if self.saving {
            log::debug!("save of {} already in flight, ignoring", E::NAME);
            return None;
        }
        let draft = self.draft.as_mut()?;
        draft.normalize();
        let record = draft.clone();
        self.saving = true;
        Some(PendingSave {
            is_new: record.id().is_none(),
            record,
        })
    }

    /// A successful save closes the form; a failed one leaves the draft for another try.
    pub fn finish_save(&mut self, saved: bool) {
        self.saving = false;
        if saved {
            self.draft = None;
        }
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }
}

impl CrudTab<Booking> {
    /// Moves a booking one step forward (new → in_progress → completed), every other field untouched.
    pub fn advance_status(&mut self, booking: &Booking) -> Option<PendingSave<Booking>> {
        if self.saving {
            return None;
        }
        let record = advanced(booking)?;
        self.saving = true;
        Some(PendingSave {
            record,
            is_new: false,
        })
    }
}

pub fn advanced(booking: &Booking) -> Option<Booking> {
    let next = booking.status().next()?;
    Some(Booking {
        status: Some(next),
        ..booking.clone()
    })
}
