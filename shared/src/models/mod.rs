//! Domain models

pub mod dining_table;
pub mod opening_hours;
pub mod order;
pub mod reservation;

pub use dining_table::{DiningTable, DiningTableCreate, DiningTableUpdate};
pub use opening_hours::{OpeningHours, OpeningWindow};
pub use order::{Order, OrderRef, OrderStatus};
pub use reservation::{Reservation, ReservationRequest};
