//! Expand/collapse state of data views and dispatch to their handlers.
//!
//! A `ViewRegistry` is built once by the application and handed to whatever
//! activates views; there is no global registry.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ViewError {
    #[error("Unknown view: {0}")]
    UnknownView(String),

    #[error("View already registered: {0}")]
    DuplicateView(String),
}

pub type ViewResult<T> = Result<T, ViewError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewState {
    #[default]
    Collapsed,
    Expanded,
}

impl ViewState {
    pub fn toggled(self) -> Self {
        match self {
            ViewState::Collapsed => ViewState::Expanded,
            ViewState::Expanded => ViewState::Collapsed,
        }
    }
}

/// What a state change means for the view's content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Collapsed -> Expanded; `first` is set only the first time, when the
    /// content still has to be built.
    Expanded { first: bool },
    /// Expanded -> Collapsed
    Collapsed,
}

/// State machine for a single view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewInstance {
    state: ViewState,
    content_built: bool,
}

impl ViewInstance {
    pub fn new(initial: ViewState) -> Self {
        Self {
            state: initial,
            content_built: false,
        }
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn content_built(&self) -> bool {
        self.content_built
    }

    pub fn toggle(&mut self) -> Transition {
        self.state = self.state.toggled();
        match self.state {
            ViewState::Expanded => {
                let first = !self.content_built;
                self.content_built = true;
                Transition::Expanded { first }
            }
            ViewState::Collapsed => Transition::Collapsed,
        }
    }
}

/// User action forwarded to a view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewAction {
    Expand,
    Apply,
    Cancel,
}

/// Behaviour of one data view. Every hook is optional.
pub trait ViewHandler {
    /// Called when the view opens; `first` is true until content is built.
    fn on_expand(&mut self, _first: bool) {}

    fn on_collapse(&mut self) {}

    fn on_apply(&mut self) {}

    fn on_cancel(&mut self) {}
}

struct RegisteredView {
    instance: ViewInstance,
    handler: Box<dyn ViewHandler + Send>,
}

#[derive(Default)]
pub struct ViewRegistry {
    views: HashMap<String, RegisteredView>,
}

impl ViewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, view_id: impl Into<String>, handler: Box<dyn ViewHandler + Send>) -> ViewResult<()> {
        self.register_with_state(view_id, ViewState::Collapsed, handler)
    }

    pub fn register_with_state(
        &mut self,
        view_id: impl Into<String>,
        initial: ViewState,
        handler: Box<dyn ViewHandler + Send>,
    ) -> ViewResult<()> {
        let view_id = view_id.into();
        if self.views.contains_key(&view_id) {
            return Err(ViewError::DuplicateView(view_id));
        }
        log::debug!("Registered view '{}' ({:?})", view_id, initial);
        self.views.insert(
            view_id,
            RegisteredView {
                instance: ViewInstance::new(initial),
                handler,
            },
        );
        Ok(())
    }

    pub fn contains(&self, view_id: &str) -> bool {
        self.views.contains_key(view_id)
    }

    pub fn state(&self, view_id: &str) -> Option<ViewState> {
        self.views.get(view_id).map(|v| v.instance.state())
    }

    /// Flip a view between collapsed and expanded and notify its handler
    pub fn toggle(&mut self, view_id: &str) -> ViewResult<ViewState> {
        let view = self.view_mut(view_id)?;
        match view.instance.toggle() {
            Transition::Expanded { first } => view.handler.on_expand(first),
            Transition::Collapsed => view.handler.on_collapse(),
        }
        Ok(view.instance.state())
    }

    /// Forward an action to a view's handler. `Expand` on an already expanded
    /// view is a no-op.
    pub fn dispatch(&mut self, view_id: &str, action: ViewAction) -> ViewResult<()> {
        let view = self.view_mut(view_id)?;
        match action {
            ViewAction::Expand => {
                if view.instance.state() == ViewState::Collapsed {
                    if let Transition::Expanded { first } = view.instance.toggle() {
                        view.handler.on_expand(first);
                    }
                }
            }
            ViewAction::Apply => view.handler.on_apply(),
            ViewAction::Cancel => view.handler.on_cancel(),
        }
        Ok(())
    }

    fn view_mut(&mut self, view_id: &str) -> ViewResult<&mut RegisteredView> {
        self.views
            .get_mut(view_id)
            .ok_or_else(|| ViewError::UnknownView(view_id.to_string()))
    }
}
