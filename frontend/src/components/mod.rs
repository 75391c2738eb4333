pub mod confirm_modal;
pub mod palette_provider;
pub mod promo_form_modal;
pub mod theme_provider;
pub mod transact_confirm_modal;

pub use confirm_modal::ConfirmModal;
pub use palette_provider::PaletteProvider;
pub use promo_form_modal::PromoFormModal;
pub use theme_provider::ThemeProvider;
pub use transact_confirm_modal::TransactConfirmModal;
