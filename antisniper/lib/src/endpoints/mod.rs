//! Endpoint methods of the Antisniper API.
//!
//! Top-level endpoints are inherent methods on
//! [`AntisniperClient`](crate::AntisniperClient). Player and account
//! endpoints are grouped behind [`AntisniperClient::player`] and
//! [`AntisniperClient::user`].
//!
//! [`AntisniperClient::player`]: crate::AntisniperClient::player
//! [`AntisniperClient::user`]: crate::AntisniperClient::user

mod general;
mod player;
mod user;

pub use general::MAX_BULK_PLAYERS;
pub use player::{PingOptions, PlayerEndpoints};
pub use user::UserEndpoints;
