#![allow(
    clippy::module_name_repetitions,
    reason = "Request suffix is intentional for clarity"
)]

//! Query parameters for Data API endpoints.
//!
//! Path segments (resource ids, games, regions) are marked `#[serde(skip_serializing)]`
//! and spliced into the URL by the client; every other field becomes a query parameter.
//! `None` values are left out, so the API applies its own defaults.

use bon::Builder;
use serde::Serialize;
use serde_with::skip_serializing_none;

use crate::types::{Country, Expansion, Game, MatchType, Region};

/// Paging parameters only, for list endpoints without a path id.
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Default, Serialize)]
#[non_exhaustive]
pub struct PageRequest {
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}

/// A single resource by id, no query parameters.
#[derive(Debug, Clone, Builder, Serialize)]
#[non_exhaustive]
pub struct ByIdRequest {
    #[serde(skip_serializing)]
    #[builder(into)]
    pub id: String,
}

/// A championship, hub or tournament by id, optionally with embedded relations.
#[derive(Debug, Clone, Builder, Serialize)]
#[non_exhaustive]
pub struct ExpandedRequest {
    #[serde(skip_serializing)]
    #[builder(into)]
    pub id: String,
    #[serde(skip_serializing_if = "Expansion::is_none")]
    #[builder(default)]
    pub expanded: Expansion,
}

/// A page of a sub-collection of the resource `id`.
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Serialize)]
#[non_exhaustive]
pub struct PagedByIdRequest {
    #[serde(skip_serializing)]
    #[builder(into)]
    pub id: String,
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}

/// Matches (or tournaments) of the resource `id`, filtered by state.
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Serialize)]
#[non_exhaustive]
pub struct MatchesRequest {
    #[serde(skip_serializing)]
    #[builder(into)]
    pub id: String,
    #[serde(rename = "type")]
    pub match_type: Option<MatchType>,
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Serialize)]
#[non_exhaustive]
pub struct ChampionshipsRequest {
    pub game: Game,
    #[serde(rename = "type")]
    pub match_type: Option<MatchType>,
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}

/// A game by its FACEIT id.
#[derive(Debug, Clone, Builder, Serialize)]
#[non_exhaustive]
pub struct GameRequest {
    #[serde(skip_serializing)]
    pub game: Game,
}

/// Statistics of a player or team (`id`) in one game.
#[derive(Debug, Clone, Builder, Serialize)]
#[non_exhaustive]
pub struct GameStatsRequest {
    #[serde(skip_serializing)]
    #[builder(into)]
    pub id: String,
    #[serde(skip_serializing)]
    pub game: Game,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Serialize)]
#[non_exhaustive]
pub struct LeaderboardGroupRequest {
    #[serde(skip_serializing)]
    #[builder(into)]
    pub championship_id: String,
    #[serde(skip_serializing)]
    pub group: u32,
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Serialize)]
#[non_exhaustive]
pub struct LeaderboardSeasonRequest {
    #[serde(skip_serializing)]
    #[builder(into)]
    pub hub_id: String,
    #[serde(skip_serializing)]
    pub season: u32,
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Builder, Serialize)]
#[non_exhaustive]
pub struct OrganizerByNameRequest {
    #[builder(into)]
    pub name: String,
}

#[derive(Debug, Clone, Builder, Serialize)]
#[non_exhaustive]
pub struct PlayerByNicknameRequest {
    #[builder(into)]
    pub nickname: String,
}

/// A player by their account id in a game (e.g. a Steam id for CS2).
#[derive(Debug, Clone, Builder, Serialize)]
#[non_exhaustive]
pub struct PlayerByGameIdRequest {
    pub game: Game,
    #[builder(into)]
    pub game_player_id: String,
}

/// Match history of a player. `from` and `to` are unix timestamps in seconds.
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Serialize)]
#[non_exhaustive]
pub struct HistoryRequest {
    #[serde(skip_serializing)]
    #[builder(into)]
    pub player_id: String,
    pub game: Game,
    pub from: Option<i64>,
    pub to: Option<i64>,
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Serialize)]
#[non_exhaustive]
pub struct RankingRequest {
    #[serde(skip_serializing)]
    pub game: Game,
    #[serde(skip_serializing)]
    pub region: Region,
    pub country: Option<Country>,
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}

/// The ranking page centered on one player.
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Serialize)]
#[non_exhaustive]
pub struct PlayerRankingRequest {
    #[serde(skip_serializing)]
    pub game: Game,
    #[serde(skip_serializing)]
    pub region: Region,
    #[serde(skip_serializing)]
    #[builder(into)]
    pub player_id: String,
    pub country: Option<Country>,
    pub limit: Option<u32>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Default, Serialize)]
#[non_exhaustive]
pub struct TournamentsRequest {
    pub game: Option<Game>,
    pub region: Option<Region>,
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Serialize)]
#[non_exhaustive]
pub struct SearchChampionshipsRequest {
    #[builder(into)]
    pub name: String,
    #[serde(rename = "type")]
    pub match_type: Option<MatchType>,
    pub game: Option<Game>,
    pub region: Option<Region>,
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Serialize)]
#[non_exhaustive]
pub struct SearchHubsRequest {
    #[builder(into)]
    pub name: String,
    pub game: Option<Game>,
    pub region: Option<Region>,
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Serialize)]
#[non_exhaustive]
pub struct SearchOrganizersRequest {
    #[builder(into)]
    pub name: String,
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Serialize)]
#[non_exhaustive]
pub struct SearchPlayersRequest {
    #[builder(into)]
    pub nickname: String,
    pub game: Option<Game>,
    pub country: Option<Country>,
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Serialize)]
#[non_exhaustive]
pub struct SearchTeamsRequest {
    #[builder(into)]
    pub nickname: String,
    pub game: Option<Game>,
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Serialize)]
#[non_exhaustive]
pub struct SearchTournamentsRequest {
    #[builder(into)]
    pub name: String,
    #[serde(rename = "type")]
    pub match_type: Option<MatchType>,
    pub game: Option<Game>,
    pub region: Option<Region>,
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ToQueryParams as _;

    #[test]
    fn empty_page_has_no_query() {
        assert_eq!(PageRequest::default().query_params(), "");
    }

    #[test]
    fn path_segments_stay_out_of_query() {
        let request = PagedByIdRequest::builder()
            .id("hub-1")
            .offset(20)
            .limit(10)
            .build();

        assert_eq!(request.query_params(), "?offset=20&limit=10");
    }

    #[test]
    fn no_expansion_is_omitted() {
        let request = ExpandedRequest::builder().id("c-1").build();
        assert_eq!(request.query_params(), "");

        let request = ExpandedRequest::builder()
            .id("c-1")
            .expanded(Expansion::Organizer)
            .build();
        assert_eq!(request.query_params(), "?expanded=organizer");
    }

    #[test]
    fn match_type_is_sent_as_type() {
        let request = ChampionshipsRequest::builder()
            .game(Game::Cs2)
            .match_type(MatchType::Upcoming)
            .build();

        assert_eq!(request.query_params(), "?game=cs2&type=upcoming");
    }

    #[test]
    fn history_window() {
        let request = HistoryRequest::builder()
            .player_id("p-1")
            .game(Game::Cs2)
            .from(1_700_000_000)
            .to(1_700_086_400)
            .build();

        assert_eq!(
            request.query_params(),
            "?game=cs2&from=1700000000&to=1700086400"
        );
    }

    #[test]
    fn search_players_with_country() {
        let request = SearchPlayersRequest::builder()
            .nickname("s1mple")
            .country(Country::Ukraine)
            .build();

        assert_eq!(request.query_params(), "?nickname=s1mple&country=UA");
    }
}
