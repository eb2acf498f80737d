use std::cell::RefCell;

use web_sys::{AbortController, Url};

use crate::constants::PRODUCT_IMAGE_INPUT_ID;
use crate::dom_utils::input_by_id;
use crate::messages::{Command, Message};
use crate::network::{ApiClient, ApiError};
use crate::state::dispatch_global_message;

thread_local! {
    // The catalog request currently on the wire, with the generation it
    // was started for.
    static IN_FLIGHT: RefCell<Option<(u64, AbortController)>> = RefCell::new(None);
}

pub fn execute(cmd: Command) {
    match cmd {
        Command::FetchProducts { generation } => execute_fetch_products(generation),
        Command::CancelProductFetch => cancel_product_fetch(),
        Command::Navigate(route) => {
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.location().assign(route.path()) {
                    web_sys::console::error_1(&format!("Navigation to {} failed: {:?}", route.path(), e).into());
                }
            }
        }
        Command::Alert(text) => {
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(&text);
            }
        }
        Command::CreateLocalImageUrl => execute_create_local_image_url(),
        Command::RevokeObjectUrls(urls) => {
            for url in urls {
                if Url::revoke_object_url(&url).is_err() {
                    web_sys::console::warn_1(&format!("Could not revoke {}", url).into());
                }
            }
        }
        Command::Render(region) => crate::views::render(region),
    }
}

fn execute_fetch_products(generation: u64) {
    // Only one catalog load is ever meaningful at a time.
    cancel_product_fetch();

    let controller = match AbortController::new() {
        Ok(c) => Some(c),
        Err(e) => {
            web_sys::console::warn_1(&format!("AbortController unavailable: {:?}", e).into());
            None
        }
    };
    let signal = controller.as_ref().map(|c| c.signal());
    if let Some(c) = controller {
        IN_FLIGHT.with(|slot| *slot.borrow_mut() = Some((generation, c)));
    }

    debug_log!("Executing FetchProducts command (generation={})", generation);
    wasm_bindgen_futures::spawn_local(async move {
        let result = ApiClient::get_products(signal.as_ref()).await;

        IN_FLIGHT.with(|slot| {
            let mut slot = slot.borrow_mut();
            if matches!(slot.as_ref(), Some((g, _)) if *g == generation) {
                *slot = None;
            }
        });

        match result {
            Ok(products) => {
                debug_log!("Fetched {} products from API", products.len());
                dispatch_global_message(Message::ProductsLoaded { generation, products });
            }
            Err(ApiError::Aborted) => {
                debug_log!("Product fetch (generation={}) aborted", generation);
                dispatch_global_message(Message::ProductsLoadFailed {
                    generation,
                    error: ApiError::Aborted.to_string(),
                });
            }
            Err(e) => {
                web_sys::console::error_1(&format!("Error fetching products: {}", e).into());
                dispatch_global_message(Message::ProductsLoadFailed {
                    generation,
                    error: e.to_string(),
                });
            }
        }
    });
}

fn cancel_product_fetch() {
    if let Some((generation, controller)) = IN_FLIGHT.with(|slot| slot.borrow_mut().take()) {
        debug_log!("Aborting product fetch (generation={})", generation);
        controller.abort();
    }
}

fn execute_create_local_image_url() {
    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(d) => d,
        None => return,
    };

    let file = input_by_id(&document, PRODUCT_IMAGE_INPUT_ID)
        .and_then(|input| input.files())
        .and_then(|files| files.get(0));

    let file = match file {
        Some(f) => f,
        None => {
            web_sys::console::warn_1(&"Image input has no file to preview".into());
            return;
        }
    };

    match Url::create_object_url_with_blob(&file) {
        Ok(url) => dispatch_global_message(Message::DraftImageReady(url)),
        Err(e) => web_sys::console::error_1(&format!("create_object_url failed: {:?}", e).into()),
    }
}
