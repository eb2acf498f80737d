use std::cell::RefCell;

use crate::messages::{Command, Message};
use crate::models::{NewProductDraft, Product};
use crate::routes::Route;
use crate::update::update;

/// Sign-up form fields.  Recorded on every edit but intentionally not read
/// by the submit handler; submission is a plain redirect for now.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignUpState {
    pub email: String,
    pub password: String,
}

/// Everything the merchant catalog page owns.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatalogState {
    pub products: Vec<Product>,
    pub modal_open: bool,
    pub draft: NewProductDraft,
    pub confirmation: Option<String>,
    // Bumped on every mount/teardown; fetch results tagged with an older
    // value are stale and get dropped.
    pub fetch_generation: u64,
    pub fetch_in_flight: bool,
    // blob: URLs minted this session, revoked on teardown.
    pub object_urls: Vec<String>,
}

impl CatalogState {
    pub fn next_product_id(&self) -> u32 {
        self.products.len() as u32 + 1
    }
}

// Store global application state
#[derive(Debug, Default)]
pub struct AppState {
    // `None` until the first page is mounted.
    pub active_page: Option<Route>,
    pub sign_up: SignUpState,
    pub catalog: CatalogState,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dispatch(&mut self, msg: Message) -> Vec<Command> {
        update(self, msg)
    }
}

// We use thread_local to store our app state
thread_local! {
    pub static APP_STATE: RefCell<AppState> = RefCell::new(AppState::new());
}

/// Run a message through the reducer and then execute the resulting
/// commands once the state borrow has been released.
pub fn dispatch_global_message(msg: Message) {
    // 1. Perform state updates and collect commands
    let commands = APP_STATE.with(|state| state.borrow_mut().dispatch(msg));

    // 2. Execute commands after state borrow is dropped
    for cmd in commands {
        crate::command_executors::execute(cmd);
    }
}
