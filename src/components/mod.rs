pub mod add_product_modal;
pub mod modal;
pub mod product_card;
pub mod styles;
