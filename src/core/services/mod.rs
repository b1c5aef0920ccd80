pub mod movement_service;
pub mod profile_service;
pub mod purchase_service;

pub use movement_service::MovementService;
pub use profile_service::ProfileService;
pub use purchase_service::PurchaseService;
