//! Conversion, Mojang, online status, capes and blacklist endpoints.

use serde::Serialize;
use serde_json::Value;

use crate::client::AntisniperClient;
use crate::collection::Collection;
use crate::error::{AntisniperError, ValidationError};
use crate::params::QueryParams;

/// Maximum number of players accepted by the bulk endpoints.
pub const MAX_BULK_PLAYERS: usize = 100;

#[derive(Serialize)]
struct PlayersBody<'a> {
    players: Vec<&'a str>,
}

impl<'a> PlayersBody<'a> {
    /// Checks the bulk limit before anything is sent.
    fn checked<S: AsRef<str>>(players: &'a [S]) -> Result<Self, ValidationError> {
        if players.len() > MAX_BULK_PLAYERS {
            return Err(ValidationError::TooManyPlayers {
                count: players.len(),
                limit: MAX_BULK_PLAYERS,
            });
        }
        Ok(Self {
            players: players.iter().map(AsRef::as_ref).collect(),
        })
    }
}

impl AntisniperClient {
    /// Converts a UUID to an IGN or back, using the Mojang collection.
    ///
    /// ## Errors
    ///
    /// See [`get`](Self::get).
    pub async fn convert(&self, player: &str) -> Result<Value, AntisniperError> {
        self.convert_with(player, Collection::default()).await
    }

    /// Converts a UUID to an IGN or back, using the given collection.
    ///
    /// ## Errors
    ///
    /// See [`get`](Self::get).
    pub async fn convert_with(
        &self,
        player: &str,
        collection: Collection,
    ) -> Result<Value, AntisniperError> {
        let params = QueryParams::new().with("player", player);
        self.get(&collection.convert_path(), &params).await
    }

    /// Converts up to [`MAX_BULK_PLAYERS`] players, using the Mojang
    /// collection.
    ///
    /// ## Errors
    ///
    /// Returns [`ValidationError::TooManyPlayers`] without sending anything
    /// if `players` has more than 100 entries. Otherwise see
    /// [`post`](Self::post).
    pub async fn bulk_convert<S: AsRef<str>>(
        &self,
        players: &[S],
    ) -> Result<Value, AntisniperError> {
        self.bulk_convert_with(players, Collection::default()).await
    }

    /// Converts up to [`MAX_BULK_PLAYERS`] players, using the given
    /// collection.
    ///
    /// ## Errors
    ///
    /// Same as [`bulk_convert`](Self::bulk_convert).
    pub async fn bulk_convert_with<S: AsRef<str>>(
        &self,
        players: &[S],
        collection: Collection,
    ) -> Result<Value, AntisniperError> {
        let body = PlayersBody::checked(players)?;
        self.post(&collection.convert_path(), &body, &[]).await
    }

    /// Returns Mojang account data (name changes, skin history and more)
    /// for a UUID.
    ///
    /// ## Errors
    ///
    /// See [`get`](Self::get).
    pub async fn mojang_data(&self, uuid: &str) -> Result<Value, AntisniperError> {
        let params = QueryParams::new().with("uuid", uuid);
        self.get("/mojang", &params).await
    }

    /// Returns every previous owner of a name.
    ///
    /// ## Errors
    ///
    /// See [`get`](Self::get).
    pub async fn name_owners(&self, name: &str) -> Result<Value, AntisniperError> {
        let params = QueryParams::new().with("name", name);
        self.get("/mojang/name", &params).await
    }

    /// Checks the online status of up to [`MAX_BULK_PLAYERS`] accounts.
    ///
    /// The service requires a short description of the use case, sent as
    /// the `reason` header. Results are accurate to about ten minutes.
    ///
    /// ## Errors
    ///
    /// Returns [`ValidationError::TooManyPlayers`] without sending anything
    /// if `players` has more than 100 entries. Otherwise see
    /// [`post`](Self::post).
    pub async fn online_check<S: AsRef<str>>(
        &self,
        players: &[S],
        reason: &str,
    ) -> Result<Value, AntisniperError> {
        let body = PlayersBody::checked(players)?;
        self.post("/other/online", &body, &[("reason", reason)])
            .await
    }

    /// Returns texture URLs for each cape type.
    ///
    /// ## Errors
    ///
    /// See [`get`](Self::get).
    pub async fn get_capes(&self) -> Result<Value, AntisniperError> {
        self.get("/capes", &QueryParams::new()).await
    }

    /// Returns blacklist data for a player. `token` is only sent when given.
    ///
    /// ## Errors
    ///
    /// See [`get`](Self::get).
    pub async fn get_blacklist(
        &self,
        player: &str,
        token: Option<&str>,
    ) -> Result<Value, AntisniperError> {
        let params = QueryParams::new()
            .with("player", player)
            .with_opt("token", token);
        self.get("/blacklist", &params).await
    }
}
