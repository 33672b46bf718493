//! Appointment slot allocation

pub mod ports;
pub mod service;

pub use ports::CalendarPort;
pub use service::SlotAllocator;
