// src/messages.rs
//
// Every event the pages can produce, plus the side effects the reducer may
// ask for in response.
//
use crate::models::Product;
use crate::routes::Route;

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // Page lifecycle
    MountPage(Route),
    TeardownPage,
    Navigate(Route),

    // Sign-up form
    SignUpEmailChanged(String),
    SignUpPasswordChanged(String),
    SignUpSubmitted,

    // Catalog loading
    ProductsLoaded {
        generation: u64,
        products: Vec<Product>,
    },
    ProductsLoadFailed {
        generation: u64,
        error: String,
    },

    // Add-product modal
    ToggleAddProductModal,
    DraftNameChanged(String),
    DraftPriceChanged(String),
    DraftImageSelected {
        mime_type: Option<String>, // None when the picker was cancelled
    },
    DraftImageReady(String),       // object URL for the accepted file
    SubmitNewProduct,
}

/// Part of the current page that needs to be redrawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewRegion {
    Page,
    ProductGrid,
    AddProductModal,
    Confirmation,
}

/// Side effects produced by the reducer.  Executed by
/// `command_executors::execute` after the state borrow is released.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Load the catalog; results are tagged with `generation`
    FetchProducts { generation: u64 },

    /// Abort the in-flight catalog request, if any
    CancelProductFetch,

    /// Full document navigation
    Navigate(Route),

    /// Blocking `window.alert`
    Alert(String),

    /// Mint a blob: URL for the file currently held by the image input
    CreateLocalImageUrl,

    /// Release blob: URLs created earlier in the session
    RevokeObjectUrls(Vec<String>),

    /// Redraw part of the active page
    Render(ViewRegion),
}
