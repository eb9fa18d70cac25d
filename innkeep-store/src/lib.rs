pub mod app_config;
pub mod booking_repo;
pub mod database;
pub mod guest_repo;
pub mod report_repo;
pub mod room_repo;
pub mod seed;
pub mod service_repo;

pub use booking_repo::SqliteBookingRepository;
pub use database::DbClient;
pub use guest_repo::SqliteGuestRepository;
pub use report_repo::SqliteReportRepository;
pub use room_repo::SqliteRoomRepository;
pub use service_repo::SqliteServiceRepository;
