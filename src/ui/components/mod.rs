//! Presentational building blocks shared by the screens.

mod button;
mod card;
mod error_modal;
mod wrapper;

pub use button::Button;
pub use card::Card;
pub use error_modal::ErrorModal;
pub use wrapper::Wrapper;
