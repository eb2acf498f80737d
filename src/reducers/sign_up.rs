//! Sign-up form reducer.

use crate::messages::{Command, Message};
use crate::routes::Route;
use crate::state::AppState;

/// Handles sign-up messages. Returns true if the message was handled.
pub fn update(state: &mut AppState, msg: &Message, commands: &mut Vec<Command>) -> bool {
    match msg {
        Message::SignUpEmailChanged(email) => {
            state.sign_up.email = email.clone();
            true
        }
        Message::SignUpPasswordChanged(password) => {
            state.sign_up.password = password.clone();
            true
        }
        Message::SignUpSubmitted => {
            // No account is created yet; the fields are recorded but not sent.
            commands.push(Command::Navigate(Route::WaitlistSuccess));
            true
        }
        _ => false,
    }
}
