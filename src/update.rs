// src/update.rs
//
use crate::messages::{Command, Message};
use crate::state::AppState;

/// Root reducer.  Offers the message to each page reducer in turn and
/// returns the side effects to run once the state borrow is released.
pub fn update(state: &mut AppState, msg: Message) -> Vec<Command> {
    let mut commands = Vec::new();

    let handled = crate::reducers::pages::update(state, &msg, &mut commands)
        || crate::reducers::sign_up::update(state, &msg, &mut commands)
        || crate::reducers::catalog::update(state, &msg, &mut commands);

    debug_assert!(handled, "message without reducer: {:?}", msg);

    commands
}
