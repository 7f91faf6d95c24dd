pub mod card;
pub mod nav;
pub mod toast;
