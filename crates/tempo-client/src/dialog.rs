//! Dialog coordination
//!
//! Tracks whether a creation/edit dialog is open and which entity, if
//! any, is being edited. Both fields live behind one lock so `close()`
//! resets them atomically — there is no observable moment where the
//! dialog is closed but an edit target lingers.

use parking_lot::Mutex;

/// Observable dialog state
#[derive(Debug, Clone)]
pub struct DialogState<E> {
    /// Whether the dialog is showing
    pub is_open: bool,
    /// `Some` in edit mode, `None` in create mode (or closed)
    pub entity_to_edit: Option<E>,
}

impl<E> Default for DialogState<E> {
    fn default() -> Self {
        Self {
            is_open: false,
            entity_to_edit: None,
        }
    }
}

/// Create/edit dialog coordinator for one entity kind
#[derive(Debug)]
pub struct DialogContext<E> {
    state: Mutex<DialogState<E>>,
}

impl<E: Clone> DialogContext<E> {
    /// Closed dialog
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Mutex::new(DialogState::default()),
        }
    }

    /// Open in create mode
    pub fn open_for_create(&self) {
        let mut state = self.state.lock();
        state.is_open = true;
        state.entity_to_edit = None;
    }

    /// Open in edit mode targeting `entity`
    pub fn open_for_edit(&self, entity: E) {
        let mut state = self.state.lock();
        state.is_open = true;
        state.entity_to_edit = Some(entity);
    }

    /// Close and clear the edit target atomically; idempotent.
    pub fn close(&self) {
        let mut state = self.state.lock();
        state.is_open = false;
        state.entity_to_edit = None;
    }

    /// Whether the dialog is showing
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state.lock().is_open
    }

    /// Current edit target, if any
    #[must_use]
    pub fn entity_to_edit(&self) -> Option<E> {
        self.state.lock().entity_to_edit.clone()
    }

    /// Consistent snapshot of both fields
    #[must_use]
    pub fn state(&self) -> DialogState<E> {
        self.state.lock().clone()
    }
}

impl<E: Clone> Default for DialogContext<E> {
    fn default() -> Self {
        Self::new()
    }
}
