pub mod booking;
pub mod eligibility;
pub mod slip;

pub use booking::AppointmentBookingService;
pub use slip::SlipService;
