//! Merchant catalog reducer: initial load, the add-product modal and local
//! product submission.

use crate::constants::{ACCEPTED_IMAGE_MIME, DEFAULT_LOCAL_RATING, ONLY_JPEG_ALERT, PRODUCT_ADDED_MESSAGE};
use crate::messages::{Command, Message, ViewRegion};
use crate::models::{NewProductDraft, Product, ProductImage};
use crate::routes::Route;
use crate::state::AppState;

/// Handles catalog messages. Returns true if the message was handled.
pub fn update(state: &mut AppState, msg: &Message, commands: &mut Vec<Command>) -> bool {
    let catalog = &mut state.catalog;
    match msg {
        Message::ProductsLoaded { generation, products } => {
            if *generation != catalog.fetch_generation {
                return true;
            }
            catalog.fetch_in_flight = false;
            catalog.products = products.clone();
            commands.push(Command::Render(ViewRegion::ProductGrid));
            true
        }
        Message::ProductsLoadFailed { generation, .. } => {
            // Already logged by the executor; the grid simply stays empty.
            if *generation == catalog.fetch_generation {
                catalog.fetch_in_flight = false;
            }
            true
        }
        Message::ToggleAddProductModal => {
            catalog.modal_open = !catalog.modal_open;
            if catalog.modal_open {
                catalog.draft = NewProductDraft::default();
            }
            catalog.confirmation = None;
            commands.push(Command::Render(ViewRegion::AddProductModal));
            commands.push(Command::Render(ViewRegion::Confirmation));
            true
        }
        Message::DraftNameChanged(name) => {
            catalog.draft.name = name.clone();
            true
        }
        Message::DraftPriceChanged(price) => {
            catalog.draft.price = price.clone();
            true
        }
        Message::DraftImageSelected { mime_type } => {
            match mime_type.as_deref() {
                Some(ACCEPTED_IMAGE_MIME) => commands.push(Command::CreateLocalImageUrl),
                Some(_) => commands.push(Command::Alert(ONLY_JPEG_ALERT.to_string())),
                None => {}
            }
            true
        }
        Message::DraftImageReady(url) => {
            if state.active_page != Some(Route::Merchant) {
                // The page went away while the URL was being minted.
                commands.push(Command::RevokeObjectUrls(vec![url.clone()]));
                return true;
            }
            let catalog = &mut state.catalog;
            catalog.object_urls.push(url.clone());
            catalog.draft.image = Some(ProductImage::Local(url.clone()));
            true
        }
        Message::SubmitNewProduct => {
            let product = Product {
                id: catalog.next_product_id(),
                title: catalog.draft.name.clone(),
                price: catalog.draft.price.clone(),
                image: catalog.draft.image.clone(),
                rating: DEFAULT_LOCAL_RATING,
            };
            catalog.products.push(product);
            catalog.confirmation = Some(PRODUCT_ADDED_MESSAGE.to_string());
            catalog.modal_open = false;
            commands.push(Command::Render(ViewRegion::ProductGrid));
            commands.push(Command::Render(ViewRegion::AddProductModal));
            commands.push(Command::Render(ViewRegion::Confirmation));
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn merchant_state() -> AppState {
        let mut state = AppState::new();
        state.active_page = Some(Route::Merchant);
        state.catalog.fetch_generation = 1;
        state.catalog.fetch_in_flight = true;
        state
    }

    fn product(id: u32, title: &str) -> Product {
        Product {
            id,
            title: title.to_string(),
            price: format!("{}", id * 100),
            image: Some(ProductImage::Remote(format!("https://cdn.test/{}.jpg", id))),
            rating: (id % 6) as u8,
        }
    }

    fn run(state: &mut AppState, msg: Message) -> Vec<Command> {
        let mut commands = Vec::new();
        assert!(update(state, &msg, &mut commands), "unhandled {:?}", msg);
        commands
    }

    #[test]
    fn stale_fetch_results_are_dropped() {
        let mut state = merchant_state();
        let cmds = run(
            &mut state,
            Message::ProductsLoaded { generation: 0, products: vec![product(1, "Old")] },
        );
        assert!(cmds.is_empty());
        assert!(state.catalog.products.is_empty());
        assert!(state.catalog.fetch_in_flight);
    }

    #[test]
    fn failed_fetch_leaves_catalog_empty() {
        let mut state = merchant_state();
        let cmds = run(
            &mut state,
            Message::ProductsLoadFailed { generation: 1, error: "HTTP 500".into() },
        );
        assert!(cmds.is_empty());
        assert!(state.catalog.products.is_empty());
        assert!(!state.catalog.fetch_in_flight);
    }

    #[test]
    fn widget_submission_appends_one_product() {
        let mut state = merchant_state();
        run(&mut state, Message::ProductsLoaded { generation: 1, products: vec![product(1, "Mug"), product(2, "Cap")] });
        run(&mut state, Message::ToggleAddProductModal);
        run(&mut state, Message::DraftNameChanged("Widget".into()));
        run(&mut state, Message::DraftPriceChanged("9.99".into()));

        let cmds = run(&mut state, Message::DraftImageSelected { mime_type: Some("image/jpeg".into()) });
        assert_eq!(cmds, vec![Command::CreateLocalImageUrl]);
        run(&mut state, Message::DraftImageReady("blob:widget".into()));

        let cmds = run(&mut state, Message::SubmitNewProduct);
        let catalog = &state.catalog;
        assert_eq!(catalog.products.len(), 3);
        let added = catalog.products.last().unwrap();
        assert_eq!(added.id, 3);
        assert_eq!(added.title, "Widget");
        assert_eq!(added.price, "9.99");
        assert_eq!(added.rating, 4);
        assert_eq!(added.image, Some(ProductImage::Local("blob:widget".into())));
        assert!(!catalog.modal_open);
        assert_eq!(catalog.confirmation.as_deref(), Some(PRODUCT_ADDED_MESSAGE));
        assert!(cmds.contains(&Command::Render(ViewRegion::ProductGrid)));
        assert_eq!(catalog.object_urls, vec!["blob:widget".to_string()]);
    }

    #[test]
    fn non_jpeg_selection_alerts_and_keeps_prior_image() {
        let mut state = merchant_state();
        run(&mut state, Message::ToggleAddProductModal);
        run(&mut state, Message::DraftImageReady("blob:first".into()));

        let cmds = run(&mut state, Message::DraftImageSelected { mime_type: Some("image/png".into()) });
        assert_eq!(cmds, vec![Command::Alert(ONLY_JPEG_ALERT.into())]);
        assert_eq!(state.catalog.draft.image, Some(ProductImage::Local("blob:first".into())));
        assert!(state.catalog.products.is_empty());
    }

    #[test]
    fn cancelled_picker_is_silent() {
        let mut state = merchant_state();
        let cmds = run(&mut state, Message::DraftImageSelected { mime_type: None });
        assert!(cmds.is_empty());
        assert_eq!(state.catalog.draft.image, None);
    }

    #[test]
    fn image_ready_after_teardown_is_revoked() {
        let mut state = AppState::new();
        let cmds = run(&mut state, Message::DraftImageReady("blob:late".into()));
        assert_eq!(cmds, vec![Command::RevokeObjectUrls(vec!["blob:late".into()])]);
        assert!(state.catalog.draft.image.is_none());
    }

    #[test]
    fn reopening_modal_resets_draft() {
        let mut state = merchant_state();
        run(&mut state, Message::ToggleAddProductModal);
        run(&mut state, Message::DraftNameChanged("Half typed".into()));
        run(&mut state, Message::ToggleAddProductModal);
        run(&mut state, Message::ToggleAddProductModal);
        assert_eq!(state.catalog.draft, NewProductDraft::default());
    }

    proptest! {
        #[test]
        fn loaded_products_keep_order(titles in prop::collection::vec("[A-Za-z ]{1,12}", 0..20)) {
            let mut state = merchant_state();
            let products: Vec<Product> = titles
                .iter()
                .enumerate()
                .map(|(i, t)| product(i as u32 + 1, t))
                .collect();
            run(&mut state, Message::ProductsLoaded { generation: 1, products: products.clone() });
            prop_assert_eq!(&state.catalog.products, &products);
        }

        #[test]
        fn double_toggle_restores_visibility_and_clears_confirmation(start_open in any::<bool>(), had_message in any::<bool>()) {
            let mut state = merchant_state();
            state.catalog.modal_open = start_open;
            if had_message {
                state.catalog.confirmation = Some(PRODUCT_ADDED_MESSAGE.into());
            }
            run(&mut state, Message::ToggleAddProductModal);
            run(&mut state, Message::ToggleAddProductModal);
            prop_assert_eq!(state.catalog.modal_open, start_open);
            prop_assert!(state.catalog.confirmation.is_none());
        }

        #[test]
        fn submitted_ids_follow_list_length(initial in 0usize..15, added in 1usize..6) {
            let mut state = merchant_state();
            let products = (1..=initial as u32).map(|i| product(i, "seed")).collect();
            run(&mut state, Message::ProductsLoaded { generation: 1, products });
            for n in 0..added {
                let before = state.catalog.products.len();
                run(&mut state, Message::ToggleAddProductModal);
                run(&mut state, Message::DraftNameChanged(format!("item {}", n)));
                run(&mut state, Message::SubmitNewProduct);
                prop_assert_eq!(state.catalog.products.len(), before + 1);
                prop_assert_eq!(state.catalog.products[before].id as usize, before + 1);
            }
        }
    }
}
