/*
[INPUT]:  Address queries and geocoding API credentials
[OUTPUT]: Typed geocoding lookups against the Maps API
[POS]:    Geocode service - client, query builder and response types
[UPDATE]: When the geocoding endpoint or query parameters change
*/

pub mod client;
pub mod query;
pub mod types;

pub use client::GeocodeClient;
pub use query::{Filter, GeocodeQuery, Lang};
pub use types::{Address, AddressElement, GeocodeResponse, GeocodeStatus, Meta};
