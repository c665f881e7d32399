//! Global Application State
//!
//! The whole dashboard lives in one signal; components read slices of it
//! through memos and change it only by dispatching actions.

use leptos::*;

use saeb_dashboard::{Action, DashboardState};

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    pub dashboard: RwSignal<DashboardState>,
}

impl GlobalState {
    /// Apply an action to the dashboard state
    pub fn dispatch(&self, action: Action) {
        self.dashboard.update(|state| {
            state.apply(action);
        });
    }
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    provide_context(GlobalState {
        dashboard: create_rw_signal(DashboardState::new()),
    });
}

pub fn use_global_state() -> GlobalState {
    use_context::<GlobalState>().expect("GlobalState not found")
}
