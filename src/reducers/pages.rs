//! Page lifecycle reducer: mounting, teardown and navigation.

use crate::messages::{Command, Message, ViewRegion};
use crate::routes::Route;
use crate::state::{AppState, CatalogState, SignUpState};

/// Handles lifecycle messages. Returns true if the message was handled.
pub fn update(state: &mut AppState, msg: &Message, commands: &mut Vec<Command>) -> bool {
    match msg {
        Message::MountPage(route) => {
            let route = if route.is_served_here() {
                *route
            } else {
                Route::Landing
            };

            // Mounting over a live page tears the old one down first.
            if state.active_page.is_some() {
                teardown(state, commands);
            }

            match route {
                Route::SignUp => {
                    state.sign_up = SignUpState::default();
                }
                Route::Merchant => {
                    let generation = state.catalog.fetch_generation + 1;
                    state.catalog = CatalogState {
                        fetch_generation: generation,
                        fetch_in_flight: true,
                        ..CatalogState::default()
                    };
                    commands.push(Command::FetchProducts { generation });
                }
                _ => {}
            }

            state.active_page = Some(route);
            commands.push(Command::Render(ViewRegion::Page));
            true
        }
        Message::TeardownPage => {
            teardown(state, commands);
            true
        }
        Message::Navigate(route) => {
            commands.push(Command::Navigate(*route));
            true
        }
        _ => false,
    }
}

fn teardown(state: &mut AppState, commands: &mut Vec<Command>) {
    if state.active_page == Some(Route::Merchant) {
        let catalog = &mut state.catalog;
        if catalog.fetch_in_flight {
            commands.push(Command::CancelProductFetch);
        }

        let urls = std::mem::take(&mut catalog.object_urls);
        if !urls.is_empty() {
            commands.push(Command::RevokeObjectUrls(urls));
        }

        // Keep the generation counter so late responses stay recognisable.
        *catalog = CatalogState {
            fetch_generation: catalog.fetch_generation + 1,
            ..CatalogState::default()
        };
    }

    state.sign_up = SignUpState::default();
    state.active_page = None;
}
