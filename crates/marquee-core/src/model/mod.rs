pub mod artist;
pub mod ids;
pub mod location;

pub use artist::Artist;
pub use ids::ArtistId;
pub use location::{Location, LocationSet};
