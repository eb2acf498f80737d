// Storefront copy and fixed values - single source of truth for the pages.

// Catalog rules
pub const DEFAULT_LOCAL_RATING: u8 = 4;
pub const MAX_RATING: u8 = 5;
pub const ACCEPTED_IMAGE_MIME: &str = "image/jpeg";
pub const CURRENCY_GLYPH: &str = "₦";
pub const MAX_CARD_TITLE_GRAPHEMES: usize = 60;

// User-facing messages
pub const PRODUCT_ADDED_MESSAGE: &str = "Product added successfully!";
pub const ONLY_JPEG_ALERT: &str = "Only JPG images are allowed.";

// Endpoint
pub const PRODUCTS_ENDPOINT: &str = "/api/products";

// Static assets served next to the wasm bundle
pub const LOGO_SRC: &str = "/p2.svg";
pub const LANDING_VISUAL_SRC: &str = "/p_image.jpeg";
pub const PROFILE_AVATAR_SRC: &str = "/profile.jpg";
pub const PRODUCT_PLACEHOLDER_SRC: &str = "/placeholder.svg";

// Landing copy
pub const LANDING_HEADLINE: &str = "The Simpler Way To Sell Online";
pub const LANDING_BLURB: &str = "Focus on your products, we’ll handle the rest. Our intuitive platform makes it easy to create a stunning online store and reach your customers.";
pub const LANDING_FOOTER: &str = "Be the first to experience our innovative features and start building your dream business.";

// Merchant profile sidebar (static until merchant accounts exist)
pub const MERCHANT_DISPLAY_NAME: &str = "John Doe";
pub const MERCHANT_BLURB: &str = "Lorem ipsum dolor sit amet...";

// DOM ids shared between pages, renderers and tests
pub const APP_CONTAINER_ID: &str = "app-container";
pub const PAGE_ROOT_ID: &str = "page-root";
pub const PRODUCT_GRID_ID: &str = "product-grid";
pub const CONFIRMATION_BANNER_ID: &str = "catalog-confirmation";
pub const ADD_PRODUCT_MODAL_ID: &str = "add-product-modal";
pub const ADD_PRODUCT_FORM_ID: &str = "add-product-form";
pub const PRODUCT_NAME_INPUT_ID: &str = "product-name-input";
pub const PRODUCT_PRICE_INPUT_ID: &str = "product-price-input";
pub const PRODUCT_IMAGE_INPUT_ID: &str = "product-image-input";
pub const ADD_PRODUCT_TOGGLE_ID: &str = "add-product-toggle";
pub const SIGNUP_FORM_ID: &str = "signup-form";
pub const SIGNUP_EMAIL_INPUT_ID: &str = "signup-email";
pub const SIGNUP_PASSWORD_INPUT_ID: &str = "signup-password";
