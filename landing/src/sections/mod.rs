// Landing page sections, top to bottom

mod amenities;
mod contact;
mod description;
mod footer;
mod gallery;
mod hero;
mod icon;
mod location;
mod nav;
mod stats;

pub use amenities::Amenities;
pub use contact::ContactSection;
pub use description::Description;
pub use footer::Footer;
pub use gallery::Gallery;
pub use hero::Hero;
pub use icon::Icon;
pub use location::Location;
pub use nav::Nav;
pub use stats::Stats;
