//! Client for the FACEIT Data API.
//!
//! # Example
//!
//! ```no_run
//! use faceit_client_sdk::data::{Client, types::request::PlayerByNicknameRequest};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::new("your-server-side-api-key")?;
//!
//! let request = PlayerByNicknameRequest::builder().nickname("s1mple").build();
//!
//! match client.player_by_nickname(&request).await?.into_result() {
//!     Ok(player) => println!("{:?}: {:?}", player.player_id, player.country),
//!     Err(error) => println!("{} ({})", error.message, error.status_code),
//! }
//! # Ok(())
//! # }
//! ```

use reqwest::{
    Client as ReqwestClient, Method,
    header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue},
};
use secrecy::{ExposeSecret as _, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use super::types::request::{
    ByIdRequest, ChampionshipsRequest, ExpandedRequest, GameRequest, GameStatsRequest,
    HistoryRequest, LeaderboardGroupRequest, LeaderboardSeasonRequest, MatchesRequest,
    OrganizerByNameRequest, PageRequest, PagedByIdRequest, PlayerByGameIdRequest,
    PlayerByNicknameRequest, PlayerRankingRequest, RankingRequest, SearchChampionshipsRequest,
    SearchHubsRequest, SearchOrganizersRequest, SearchPlayersRequest, SearchTeamsRequest,
    SearchTournamentsRequest, TournamentsRequest,
};
use crate::collection::{Collection, LeaderboardCollection, RankedCollection, WindowedCollection};
use crate::envelope::ApiResponse;
use crate::error::Error;
use crate::types::response::{
    Brackets, Championship, ChampionshipResult, ChampionshipSearchResult, GameData, GameStats,
    Hub, Leaderboard, Match, MatchStats, Member, OrganizerData, OrganizerSearchResult, Player,
    PlayerGameStats, PlayerMatch, PlayerSearchResult, Rank, Ranking, Role, Rule, Subscription,
    Team, TeamGameStats, TeamSearchResult, Tournament, TournamentDetails,
    TournamentSearchResult, TournamentTeams,
};
use crate::{Result, ToQueryParams as _};

/// Base URL of the FACEIT Data API, version 4.
pub const DEFAULT_HOST: &str = "https://open.faceit.com/data/v4/";

/// HTTP client for the FACEIT Data API.
///
/// Every request carries the server-side API key as a bearer token. Each endpoint method
/// returns an [`ApiResponse`]: non-2xx answers from the API are values, only transport
/// failures and bodies that do not match the resource shape are `Err`.
#[derive(Clone, Debug)]
pub struct Client {
    host: Url,
    client: ReqwestClient,
}

impl Client {
    /// Creates a client for the public Data API.
    ///
    /// The key is not checked here; a bad key surfaces as a `401` [`ApiResponse::Error`]
    /// on the first call.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is not a valid header value or the HTTP client cannot
    /// be created.
    pub fn new<K: Into<SecretString>>(api_key: K) -> Result<Client> {
        Self::with_host(DEFAULT_HOST, api_key)
    }

    /// Creates a client against a custom base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid, the key is not a valid header value, or the
    /// HTTP client cannot be created.
    pub fn with_host<K: Into<SecretString>>(host: &str, api_key: K) -> Result<Client> {
        let api_key: SecretString = api_key.into();

        let mut authorization =
            HeaderValue::from_str(&format!("Bearer {}", api_key.expose_secret()))?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, authorization);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert("User-Agent", HeaderValue::from_static("faceit_client_sdk"));
        let client = ReqwestClient::builder().default_headers(headers).build()?;

        let mut host = Url::parse(host)?;
        if host.cannot_be_a_base() {
            return Err(Error::validation(format!("`{host}` cannot be used as a base URL")));
        }
        // Paths are joined onto the host, so it must end with a slash.
        if !host.path().ends_with('/') {
            let path = format!("{}/", host.path());
            host.set_path(&path);
        }

        Ok(Self { host, client })
    }

    /// Returns the base URL of the API.
    #[must_use]
    pub fn host(&self) -> &Url {
        &self.host
    }

    /// Joins `segments` onto the host, percent-encoding each one, so an id holding `/`, `?`
    /// or `#` stays a single path segment.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.host.clone();
        url.path_segments_mut()
            .map_err(|()| {
                Error::validation(format!("`{}` cannot be used as a base URL", self.host))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get<Req: Serialize, Res: DeserializeOwned>(
        &self,
        segments: &[&str],
        req: &Req,
    ) -> Result<ApiResponse<Res>> {
        let url = self.endpoint(segments)?;
        let query = req.query_params();
        let request = self
            .client
            .request(Method::GET, format!("{url}{query}"))
            .build()?;
        crate::request(&self.client, request).await
    }

    /// Lists the championships of a game.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not match the resource.
    pub async fn championships(
        &self,
        request: &ChampionshipsRequest,
    ) -> Result<ApiResponse<Collection<Championship>>> {
        self.get(&["championships"], request).await
    }

    /// Retrieves a championship, embedding its organizer or game when requested.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not match the resource.
    pub async fn championship(
        &self,
        request: &ExpandedRequest,
    ) -> Result<ApiResponse<Championship>> {
        self.get(&["championships", &request.id], request).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not match the resource.
    pub async fn championship_matches(
        &self,
        request: &MatchesRequest,
    ) -> Result<ApiResponse<Collection<Match>>> {
        self.get(&["championships", &request.id, "matches"], request).await
    }

    /// Final placements of a championship.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not match the resource.
    pub async fn championship_results(
        &self,
        request: &PagedByIdRequest,
    ) -> Result<ApiResponse<Collection<ChampionshipResult>>> {
        self.get(&["championships", &request.id, "results"], request).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not match the resource.
    pub async fn championship_subscriptions(
        &self,
        request: &PagedByIdRequest,
    ) -> Result<ApiResponse<Collection<Subscription>>> {
        self.get(&["championships", &request.id, "subscriptions"], request).await
    }

    /// Lists every game available on FACEIT.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not match the resource.
    pub async fn games(&self, request: &PageRequest) -> Result<ApiResponse<Collection<GameData>>> {
        self.get(&["games"], request).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not match the resource.
    pub async fn game(&self, request: &GameRequest) -> Result<ApiResponse<GameData>> {
        self.get(&["games", &request.game.to_string()], request).await
    }

    /// The parent of a platform-specific game (e.g. the PC game of a console variant).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not match the resource.
    pub async fn game_parent(&self, request: &GameRequest) -> Result<ApiResponse<GameData>> {
        self.get(&["games", &request.game.to_string(), "parent"], request).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not match the resource.
    pub async fn hub(&self, request: &ExpandedRequest) -> Result<ApiResponse<Hub>> {
        self.get(&["hubs", &request.id], request).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not match the resource.
    pub async fn hub_matches(
        &self,
        request: &MatchesRequest,
    ) -> Result<ApiResponse<Collection<Match>>> {
        self.get(&["hubs", &request.id, "matches"], request).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not match the resource.
    pub async fn hub_members(
        &self,
        request: &PagedByIdRequest,
    ) -> Result<ApiResponse<Collection<Member>>> {
        self.get(&["hubs", &request.id, "members"], request).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not match the resource.
    pub async fn hub_roles(
        &self,
        request: &PagedByIdRequest,
    ) -> Result<ApiResponse<Collection<Role>>> {
        self.get(&["hubs", &request.id, "roles"], request).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not match the resource.
    pub async fn hub_rules(&self, request: &ByIdRequest) -> Result<ApiResponse<Rule>> {
        self.get(&["hubs", &request.id, "rules"], request).await
    }

    /// Player statistics collected in a hub.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not match the resource.
    pub async fn hub_stats(&self, request: &PagedByIdRequest) -> Result<ApiResponse<GameStats>> {
        self.get(&["hubs", &request.id, "stats"], request).await
    }

    /// Leaderboards of a championship's groups.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not match the resource.
    pub async fn championship_leaderboards(
        &self,
        request: &PagedByIdRequest,
    ) -> Result<ApiResponse<Collection<Leaderboard>>> {
        self.get(&["leaderboards", "championships", &request.id], request).await
    }

    /// Rankings of one championship group, with the group's leaderboard.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not match the resource.
    pub async fn championship_group_ranking(
        &self,
        request: &LeaderboardGroupRequest,
    ) -> Result<ApiResponse<LeaderboardCollection<Ranking>>> {
        self.get(
            &[
                "leaderboards",
                "championships",
                &request.championship_id,
                "groups",
                &request.group.to_string(),
            ],
            request,
        )
        .await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not match the resource.
    pub async fn hub_leaderboards(
        &self,
        request: &PagedByIdRequest,
    ) -> Result<ApiResponse<Collection<Leaderboard>>> {
        self.get(&["leaderboards", "hubs", &request.id], request).await
    }

    /// All-time ranking of a hub.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not match the resource.
    pub async fn hub_general_ranking(
        &self,
        request: &PagedByIdRequest,
    ) -> Result<ApiResponse<LeaderboardCollection<Ranking>>> {
        self.get(&["leaderboards", "hubs", &request.id, "general"], request).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not match the resource.
    pub async fn hub_season_ranking(
        &self,
        request: &LeaderboardSeasonRequest,
    ) -> Result<ApiResponse<LeaderboardCollection<Ranking>>> {
        self.get(
            &[
                "leaderboards",
                "hubs",
                &request.hub_id,
                "seasons",
                &request.season.to_string(),
            ],
            request,
        )
        .await
    }

    /// Rankings of a leaderboard by its id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not match the resource.
    pub async fn leaderboard(
        &self,
        request: &PagedByIdRequest,
    ) -> Result<ApiResponse<LeaderboardCollection<Ranking>>> {
        self.get(&["leaderboards", &request.id], request).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not match the resource.
    pub async fn match_by_id(&self, request: &ByIdRequest) -> Result<ApiResponse<Match>> {
        self.get(&["matches", &request.id], request).await
    }

    /// Per-round statistics of a finished match.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not match the resource.
    pub async fn match_stats(&self, request: &ByIdRequest) -> Result<ApiResponse<MatchStats>> {
        self.get(&["matches", &request.id, "stats"], request).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not match the resource.
    pub async fn organizer_by_name(
        &self,
        request: &OrganizerByNameRequest,
    ) -> Result<ApiResponse<OrganizerData>> {
        self.get(&["organizers"], request).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not match the resource.
    pub async fn organizer(&self, request: &ByIdRequest) -> Result<ApiResponse<OrganizerData>> {
        self.get(&["organizers", &request.id], request).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not match the resource.
    pub async fn organizer_championships(
        &self,
        request: &PagedByIdRequest,
    ) -> Result<ApiResponse<Collection<Championship>>> {
        self.get(&["organizers", &request.id, "championships"], request).await
    }

    /// Games an organizer runs competitions for.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not match the resource.
    pub async fn organizer_games(
        &self,
        request: &ByIdRequest,
    ) -> Result<ApiResponse<Collection<GameData>>> {
        self.get(&["organizers", &request.id, "games"], request).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not match the resource.
    pub async fn organizer_hubs(
        &self,
        request: &PagedByIdRequest,
    ) -> Result<ApiResponse<Collection<Hub>>> {
        self.get(&["organizers", &request.id, "hubs"], request).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not match the resource.
    pub async fn organizer_tournaments(
        &self,
        request: &MatchesRequest,
    ) -> Result<ApiResponse<Collection<Tournament>>> {
        self.get(&["organizers", &request.id, "tournaments"], request).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not match the resource.
    pub async fn player_by_nickname(
        &self,
        request: &PlayerByNicknameRequest,
    ) -> Result<ApiResponse<Player>> {
        self.get(&["players"], request).await
    }

    /// Looks a player up by their account id in a game.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not match the resource.
    pub async fn player_by_game_id(
        &self,
        request: &PlayerByGameIdRequest,
    ) -> Result<ApiResponse<Player>> {
        self.get(&["players"], request).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not match the resource.
    pub async fn player(&self, request: &ByIdRequest) -> Result<ApiResponse<Player>> {
        self.get(&["players", &request.id], request).await
    }

    /// Matches a player played in a game, optionally limited to a time window.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not match the resource.
    pub async fn player_history(
        &self,
        request: &HistoryRequest,
    ) -> Result<ApiResponse<WindowedCollection<PlayerMatch>>> {
        self.get(&["players", &request.player_id, "history"], request).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not match the resource.
    pub async fn player_hubs(
        &self,
        request: &PagedByIdRequest,
    ) -> Result<ApiResponse<Collection<Hub>>> {
        self.get(&["players", &request.id, "hubs"], request).await
    }

    /// Lifetime and per-segment statistics of a player in one game.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not match the resource.
    pub async fn player_stats(
        &self,
        request: &GameStatsRequest,
    ) -> Result<ApiResponse<PlayerGameStats>> {
        self.get(&["players", &request.id, "stats", &request.game.to_string()], request).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not match the resource.
    pub async fn player_tournaments(
        &self,
        request: &PagedByIdRequest,
    ) -> Result<ApiResponse<Collection<Tournament>>> {
        self.get(&["players", &request.id, "tournaments"], request).await
    }

    /// Global ranking of a game in a region.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not match the resource.
    pub async fn ranking(&self, request: &RankingRequest) -> Result<ApiResponse<Collection<Rank>>> {
        self.get(
            &[
                "rankings",
                "games",
                &request.game.to_string(),
                "regions",
                &request.region.to_string(),
            ],
            request,
        )
        .await
    }

    /// The slice of a regional ranking around one player, with the player's position.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not match the resource.
    pub async fn player_ranking(
        &self,
        request: &PlayerRankingRequest,
    ) -> Result<ApiResponse<RankedCollection<Rank>>> {
        self.get(
            &[
                "rankings",
                "games",
                &request.game.to_string(),
                "regions",
                &request.region.to_string(),
                "players",
                &request.player_id,
            ],
            request,
        )
        .await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not match the resource.
    pub async fn search_championships(
        &self,
        request: &SearchChampionshipsRequest,
    ) -> Result<ApiResponse<Collection<ChampionshipSearchResult>>> {
        self.get(&["search", "championships"], request).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not match the resource.
    pub async fn search_hubs(
        &self,
        request: &SearchHubsRequest,
    ) -> Result<ApiResponse<Collection<Hub>>> {
        self.get(&["search", "hubs"], request).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not match the resource.
    pub async fn search_organizers(
        &self,
        request: &SearchOrganizersRequest,
    ) -> Result<ApiResponse<Collection<OrganizerSearchResult>>> {
        self.get(&["search", "organizers"], request).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not match the resource.
    pub async fn search_players(
        &self,
        request: &SearchPlayersRequest,
    ) -> Result<ApiResponse<Collection<PlayerSearchResult>>> {
        self.get(&["search", "players"], request).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not match the resource.
    pub async fn search_teams(
        &self,
        request: &SearchTeamsRequest,
    ) -> Result<ApiResponse<Collection<TeamSearchResult>>> {
        self.get(&["search", "teams"], request).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not match the resource.
    pub async fn search_tournaments(
        &self,
        request: &SearchTournamentsRequest,
    ) -> Result<ApiResponse<Collection<TournamentSearchResult>>> {
        self.get(&["search", "tournaments"], request).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not match the resource.
    pub async fn team(&self, request: &ByIdRequest) -> Result<ApiResponse<Team>> {
        self.get(&["teams", &request.id], request).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not match the resource.
    pub async fn team_stats(
        &self,
        request: &GameStatsRequest,
    ) -> Result<ApiResponse<TeamGameStats>> {
        self.get(&["teams", &request.id, "stats", &request.game.to_string()], request).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not match the resource.
    pub async fn team_tournaments(
        &self,
        request: &PagedByIdRequest,
    ) -> Result<ApiResponse<Collection<Tournament>>> {
        self.get(&["teams", &request.id, "tournaments"], request).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not match the resource.
    pub async fn tournaments(
        &self,
        request: &TournamentsRequest,
    ) -> Result<ApiResponse<Collection<Tournament>>> {
        self.get(&["tournaments"], request).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not match the resource.
    pub async fn tournament(
        &self,
        request: &ExpandedRequest,
    ) -> Result<ApiResponse<TournamentDetails>> {
        self.get(&["tournaments", &request.id], request).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not match the resource.
    pub async fn tournament_brackets(&self, request: &ByIdRequest) -> Result<ApiResponse<Brackets>> {
        self.get(&["tournaments", &request.id, "brackets"], request).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not match the resource.
    pub async fn tournament_matches(
        &self,
        request: &PagedByIdRequest,
    ) -> Result<ApiResponse<Collection<Match>>> {
        self.get(&["tournaments", &request.id, "matches"], request).await
    }

    /// Teams of a tournament, grouped by their check-in state.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not match the resource.
    pub async fn tournament_teams(
        &self,
        request: &PagedByIdRequest,
    ) -> Result<ApiResponse<TournamentTeams>> {
        self.get(&["tournaments", &request.id, "teams"], request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_host() {
        let client = Client::new("key").unwrap();
        assert_eq!(client.host().as_str(), DEFAULT_HOST);
    }

    #[test]
    fn host_gets_trailing_slash() {
        let client = Client::with_host("http://localhost:8080/data/v4", "key").unwrap();
        assert_eq!(client.host().as_str(), "http://localhost:8080/data/v4/");
    }

    #[test]
    fn invalid_host_is_rejected() {
        Client::with_host("not a url", "key").unwrap_err();
    }

    #[test]
    fn non_base_host_is_a_validation_error() {
        let err = Client::with_host("mailto:ops@example.com", "key").unwrap_err();
        assert_eq!(err.kind(), crate::error::Kind::Validation);
    }

    #[test]
    fn endpoint_escapes_path_segments() {
        let client = Client::new("key").unwrap();

        let url = client.endpoint(&["players", "a/b?c#d"]).unwrap();
        assert_eq!(
            url.as_str(),
            "https://open.faceit.com/data/v4/players/a%2Fb%3Fc%23d"
        );

        let url = client.endpoint(&["players", "p-1", "history"]).unwrap();
        assert_eq!(url.as_str(), "https://open.faceit.com/data/v4/players/p-1/history");
    }

    #[test]
    fn key_with_newline_is_rejected() {
        Client::new("bad\nkey").unwrap_err();
    }
}
