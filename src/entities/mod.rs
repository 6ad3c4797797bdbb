mod contact;
mod driver;
mod registration;
mod rider;
mod trip;

pub use contact::{PhoneNumber, PHONE_NUMBER_FORMAT};
pub use driver::Driver;
pub use registration::Registration;
pub use rider::Rider;
pub use trip::{Status as TripStatus, Trip};
