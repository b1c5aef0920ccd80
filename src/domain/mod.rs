pub mod movement;
pub mod profile;
pub mod purchase;

pub use movement::{Movement, MovementLog};
pub use profile::Profile;
pub use purchase::{Purchase, PurchaseBook};
