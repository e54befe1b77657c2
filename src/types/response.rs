//! Resource shapes returned by the FACEIT Data API.
//!
//! Every resource embeds an [`Envelope`] holding keys it does not declare, so fields the
//! API adds later are kept. Unless noted otherwise a field is optional: absent scalars,
//! enums and nested objects are `None`, absent (or `null`) lists and free-form maps are
//! empty.

use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as};

use super::{Country, Game, MatchType, Region};
use crate::envelope::{Envelope, Extras};

/// Image URLs of a game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct Assets {
    pub cover: Option<String>,
    pub featured_img_l: Option<String>,
    pub featured_img_m: Option<String>,
    pub featured_img_s: Option<String>,
    pub flag_img_icon: Option<String>,
    pub flag_img_l: Option<String>,
    pub flag_img_m: Option<String>,
    pub flag_img_s: Option<String>,
    pub landing_page: Option<String>,
    #[serde(flatten)]
    #[builder(default)]
    pub envelope: Envelope,
}

/// A game supported by FACEIT (`/games`).
///
/// `assets` is required.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct GameData {
    pub assets: Assets,
    pub game_id: Option<Game>,
    pub long_label: Option<String>,
    pub order: Option<i64>,
    pub parent_game_id: Option<String>,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[builder(default)]
    pub platforms: Vec<String>,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[builder(default)]
    pub regions: Vec<String>,
    pub short_label: Option<String>,
    #[serde(flatten)]
    #[builder(default)]
    pub envelope: Envelope,
}

/// Restrictions on who may join a championship.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct JoinChecks {
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[builder(default)]
    pub allowed_team_types: Vec<String>,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[builder(default)]
    pub blacklist_geo_countries: Vec<String>,
    pub join_policy: Option<String>,
    pub max_skill_level: Option<i64>,
    pub membership_type: Option<String>,
    pub min_skill_level: Option<i64>,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[builder(default)]
    pub whitelist_geo_countries: Vec<String>,
    pub whitelist_geo_countries_min_players: Option<i64>,
    #[serde(flatten)]
    #[builder(default)]
    pub envelope: Envelope,
}

/// An organizer profile (`/organizers/{id}`), also embedded as `organizer_data` when a
/// championship, hub or tournament is requested with [`Expansion::Organizer`].
///
/// [`Expansion::Organizer`]: super::Expansion::Organizer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct OrganizerData {
    pub avatar: Option<String>,
    pub cover: Option<String>,
    pub description: Option<String>,
    pub facebook: Option<String>,
    pub faceit_url: Option<String>,
    pub followers_count: Option<i64>,
    pub name: Option<String>,
    pub organizer_id: Option<String>,
    pub twitch: Option<String>,
    pub twitter: Option<String>,
    /// Organizer category, from the JSON key `type`.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub vk: Option<String>,
    pub website: Option<String>,
    pub youtube: Option<String>,
    #[serde(flatten)]
    #[builder(default)]
    pub envelope: Envelope,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct Prize {
    pub faceit_points: Option<i64>,
    pub rank: Option<i64>,
    #[serde(flatten)]
    #[builder(default)]
    pub envelope: Envelope,
}

/// Broadcast stream attached to a championship.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct Stream {
    pub active: Option<bool>,
    pub platform: Option<String>,
    pub source: Option<String>,
    pub title: Option<String>,
    #[serde(flatten)]
    #[builder(default)]
    pub envelope: Envelope,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct SubstitutionConfiguration {
    pub max_substitutes: Option<i64>,
    pub max_substitutions: Option<i64>,
    #[serde(flatten)]
    #[builder(default)]
    pub envelope: Envelope,
}

/// A championship (`/championships/{id}`).
///
/// `game_data` and `organizer_data` are only present when the request asked for the
/// matching [`Expansion`](super::Expansion).
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct Championship {
    pub anticheat_required: Option<bool>,
    pub avatar: Option<String>,
    pub background_image: Option<String>,
    pub championship_id: Option<String>,
    /// Unix timestamp in milliseconds.
    pub championship_start: Option<i64>,
    pub checkin_clear: Option<i64>,
    pub checkin_enabled: Option<bool>,
    pub checkin_start: Option<i64>,
    pub cover_image: Option<String>,
    pub current_subscriptions: Option<i64>,
    pub description: Option<String>,
    pub faceit_url: Option<String>,
    pub featured: Option<bool>,
    pub full: Option<bool>,
    pub game_id: Option<Game>,
    pub id: Option<String>,
    pub join_checks: Option<JoinChecks>,
    pub name: Option<String>,
    pub organizer_id: Option<String>,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[builder(default)]
    pub prizes: Vec<Prize>,
    pub region: Option<Region>,
    pub rules_id: Option<String>,
    /// Per-round schedule keyed by round number.
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[builder(default)]
    pub schedule: Extras,
    pub seeding_strategy: Option<String>,
    pub slots: Option<i64>,
    pub status: Option<String>,
    pub stream: Option<Stream>,
    pub subscription_end: Option<i64>,
    pub subscription_start: Option<i64>,
    pub subscriptions_locked: Option<bool>,
    pub substitution_configuration: Option<SubstitutionConfiguration>,
    pub total_groups: Option<i64>,
    pub total_prizes: Option<i64>,
    pub total_rounds: Option<i64>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub game_data: Option<GameData>,
    pub organizer_data: Option<OrganizerData>,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[builder(default)]
    pub screening: Extras,
    #[serde(flatten)]
    #[builder(default)]
    pub envelope: Envelope,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct Bounds {
    pub left: Option<i64>,
    pub right: Option<i64>,
    #[serde(flatten)]
    #[builder(default)]
    pub envelope: Envelope,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct Placement {
    pub id: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    #[serde(flatten)]
    #[builder(default)]
    pub envelope: Envelope,
}

/// One placement bracket of a finished championship (`/championships/{id}/results`).
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct ChampionshipResult {
    pub bounds: Option<Bounds>,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[builder(default)]
    pub placements: Vec<Placement>,
    #[serde(flatten)]
    #[builder(default)]
    pub envelope: Envelope,
}

/// Final score of a match.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct MatchResults {
    /// Score keyed by faction, e.g. `{"faction1": 2, "faction2": 1}`.
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[builder(default)]
    pub score: Extras,
    pub winner: Option<String>,
    #[serde(flatten)]
    #[builder(default)]
    pub envelope: Envelope,
}

/// A match (`/matches/{id}`).
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct Match {
    pub best_of: Option<i64>,
    pub calculate_elo: Option<bool>,
    pub chat_room_id: Option<String>,
    pub competition_id: Option<String>,
    pub competition_name: Option<String>,
    pub competition_type: Option<String>,
    pub faceit_url: Option<String>,
    pub game: Option<Game>,
    pub match_id: Option<String>,
    pub organizer_id: Option<String>,
    pub region: Option<Region>,
    pub status: Option<String>,
    /// Rosters keyed by faction.
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[builder(default)]
    pub teams: Extras,
    pub version: Option<i64>,
    pub broadcast_start_time: Option<i64>,
    pub broadcast_start_time_label: Option<String>,
    pub configured_at: Option<i64>,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[builder(default)]
    pub demo_url: Vec<String>,
    pub finished_at: Option<i64>,
    pub group: Option<i64>,
    pub results: Option<MatchResults>,
    pub round: Option<i64>,
    pub scheduled_at: Option<i64>,
    pub started_at: Option<i64>,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[builder(default)]
    pub voting: Extras,
    #[serde(flatten)]
    #[builder(default)]
    pub envelope: Envelope,
}

/// A hub member (`/hubs/{id}/members`).
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct Member {
    pub avatar: Option<String>,
    pub faceit_url: Option<String>,
    pub nickname: Option<String>,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[builder(default)]
    pub roles: Vec<String>,
    pub user_id: Option<String>,
    #[serde(flatten)]
    #[builder(default)]
    pub envelope: Envelope,
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct TeamMember {
    pub avatar: Option<String>,
    pub country: Option<Country>,
    pub faceit_url: Option<String>,
    pub nickname: Option<String>,
    pub user_id: Option<String>,
    pub membership_type: Option<String>,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[builder(default)]
    pub memberships: Vec<String>,
    pub skill_level: Option<i64>,
    #[serde(flatten)]
    #[builder(default)]
    pub envelope: Envelope,
}

/// A team (`/teams/{id}`).
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct Team {
    pub avatar: Option<String>,
    pub chat_room_id: Option<String>,
    pub cover_image: Option<String>,
    pub description: Option<String>,
    pub facebook: Option<String>,
    pub faceit_url: Option<String>,
    pub game: Option<Game>,
    pub leader: Option<String>,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[builder(default)]
    pub members: Vec<TeamMember>,
    pub name: Option<String>,
    pub nickname: Option<String>,
    pub team_id: Option<String>,
    pub team_type: Option<String>,
    pub twitter: Option<String>,
    pub website: Option<String>,
    pub youtube: Option<String>,
    #[serde(flatten)]
    #[builder(default)]
    pub envelope: Envelope,
}

/// A team's registration in a championship (`/championships/{id}/subscriptions`).
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct Subscription {
    pub coach: Option<String>,
    pub coleader: Option<String>,
    pub group: Option<i64>,
    pub leader: Option<String>,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[builder(default)]
    pub roster: Vec<String>,
    pub status: Option<String>,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[builder(default)]
    pub substitutes: Vec<String>,
    pub team: Option<Team>,
    #[serde(flatten)]
    #[builder(default)]
    pub envelope: Envelope,
}

/// A hub (`/hubs/{id}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct Hub {
    pub avatar: Option<String>,
    pub faceit_url: Option<String>,
    pub game_id: Option<Game>,
    pub hub_id: Option<String>,
    pub name: Option<String>,
    pub organizer_id: Option<String>,
    pub background_image: Option<String>,
    pub chat_room_id: Option<String>,
    pub cover_image: Option<String>,
    pub description: Option<String>,
    pub game_data: Option<GameData>,
    pub join_permission: Option<String>,
    pub max_skill_level: Option<i64>,
    pub min_skill_level: Option<i64>,
    pub organizer_data: Option<OrganizerData>,
    pub players_joined: Option<i64>,
    pub region: Option<Region>,
    pub rule_id: Option<String>,
    #[serde(flatten)]
    #[builder(default)]
    pub envelope: Envelope,
}

/// A hub role (`/hubs/{id}/roles`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct Role {
    pub color: Option<String>,
    pub name: Option<String>,
    pub ranking: Option<i64>,
    pub role_id: Option<String>,
    pub visible_on_chat: Option<bool>,
    #[serde(flatten)]
    #[builder(default)]
    pub envelope: Envelope,
}

/// A hub's rule set (`/hubs/{id}/rules`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct Rule {
    pub body: Option<String>,
    pub game: Option<Game>,
    pub name: Option<String>,
    pub organizer: Option<String>,
    pub rule_id: Option<String>,
    #[serde(flatten)]
    #[builder(default)]
    pub envelope: Envelope,
}

/// Per-player statistics of a hub (`/hubs/{id}/stats`).
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct GameStats {
    pub game_id: Option<Game>,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[builder(default)]
    pub players: Vec<GamePlayerStats>,
    #[serde(flatten)]
    #[builder(default)]
    pub envelope: Envelope,
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct GamePlayerStats {
    pub nickname: Option<String>,
    pub player_id: Option<String>,
    /// Statistic name to value; FACEIT sends most values as strings.
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[builder(default)]
    pub stats: Extras,
    #[serde(flatten)]
    #[builder(default)]
    pub envelope: Envelope,
}

/// One player's line in a [`TeamStats`] block.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct PlayerStats {
    pub nickname: Option<String>,
    pub player_id: Option<String>,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[builder(default)]
    pub player_stats: Extras,
    #[serde(flatten)]
    #[builder(default)]
    pub envelope: Envelope,
}

/// Configuration of a championship or hub leaderboard (`/leaderboards/{id}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct Leaderboard {
    pub competition_id: Option<String>,
    pub competition_type: Option<String>,
    pub end_date: Option<i64>,
    pub game_id: Option<Game>,
    pub leaderboard_id: Option<String>,
    pub leaderboard_mode: Option<String>,
    pub leaderboard_name: Option<String>,
    pub leaderboard_type: Option<String>,
    pub min_matches: Option<i64>,
    pub points_per_draw: Option<i64>,
    pub points_per_loss: Option<i64>,
    pub points_per_win: Option<i64>,
    pub points_type: Option<String>,
    pub ranking_boost: Option<i64>,
    pub ranking_type: Option<String>,
    pub region: Option<Region>,
    pub start_date: Option<i64>,
    pub starting_points: Option<i64>,
    pub status: Option<String>,
    pub group: Option<i64>,
    pub round: Option<i64>,
    pub season: Option<i64>,
    #[serde(flatten)]
    #[builder(default)]
    pub envelope: Envelope,
}

/// A player's entry in a leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct Ranking {
    pub current_streak: Option<i64>,
    pub draw: Option<i64>,
    pub lost: Option<i64>,
    pub played: Option<i64>,
    pub player: Option<TeamMember>,
    pub points: Option<i64>,
    pub position: Option<i64>,
    /// Fraction of matches won. The API sends this as a number that is not always integral.
    pub win_rate: Option<f64>,
    pub won: Option<i64>,
    #[serde(flatten)]
    #[builder(default)]
    pub envelope: Envelope,
}

/// One team's statistics within a [`RoundStats`]. Every field is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct TeamStats {
    pub players: Vec<PlayerStats>,
    pub premade: bool,
    pub team_id: String,
    pub team_stats: Extras,
    #[serde(flatten)]
    #[builder(default)]
    pub envelope: Envelope,
}

/// Statistics of one map of a match. Every field except `competition_id`, which is `null`
/// for matchmaking games, is required.
///
/// FACEIT reports the scalar fields (`best_of`, `match_round`, `played`, ...) as strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct RoundStats {
    pub best_of: String,
    pub competition_id: Option<String>,
    pub game_id: Game,
    pub game_mode: String,
    pub match_id: String,
    pub match_round: String,
    pub played: String,
    pub round_stats: Extras,
    pub teams: Vec<TeamStats>,
    #[serde(flatten)]
    #[builder(default)]
    pub envelope: Envelope,
}

/// Statistics of a match (`/matches/{id}/stats`). `rounds` is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct MatchStats {
    pub rounds: Vec<RoundStats>,
    #[serde(flatten)]
    #[builder(default)]
    pub envelope: Envelope,
}

/// A tournament as listed by `/tournaments` and `/organizers/{id}/tournaments`.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct Tournament {
    pub anticheat_required: Option<bool>,
    pub custom: Option<bool>,
    pub faceit_url: Option<String>,
    pub featured_image: Option<String>,
    pub game_id: Option<Game>,
    pub invite_type: Option<String>,
    pub match_type: Option<MatchType>,
    pub max_skill: Option<i64>,
    pub membership_type: Option<String>,
    pub min_skill: Option<i64>,
    pub name: Option<String>,
    pub number_of_players: Option<i64>,
    pub number_of_players_checkedin: Option<i64>,
    pub number_of_players_joined: Option<i64>,
    pub number_of_players_participants: Option<i64>,
    pub organizer_id: Option<String>,
    pub prize_type: Option<String>,
    pub region: Option<Region>,
    pub started_at: Option<i64>,
    pub status: Option<String>,
    pub subscriptions_count: Option<i64>,
    pub team_size: Option<i64>,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[builder(default)]
    pub total_prize: Extras,
    pub tournament_id: Option<String>,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[builder(default)]
    pub whitelist_countries: Vec<String>,
    #[serde(flatten)]
    #[builder(default)]
    pub envelope: Envelope,
}

/// Full details of a single tournament (`/tournaments/{id}`).
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct TournamentDetails {
    pub anticheat_required: Option<bool>,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[builder(default)]
    pub best_of: Extras,
    pub calculate_elo: Option<bool>,
    pub competition_id: Option<String>,
    pub cover_image: Option<String>,
    pub custom: Option<bool>,
    pub description: Option<String>,
    pub faceit_url: Option<String>,
    pub featured_image: Option<String>,
    pub game_data: Option<GameData>,
    pub game_id: Option<Game>,
    pub invite_type: Option<String>,
    pub match_type: Option<MatchType>,
    pub max_skill: Option<i64>,
    pub membership_type: Option<String>,
    pub min_skill: Option<i64>,
    pub name: Option<String>,
    pub number_of_players: Option<i64>,
    pub number_of_players_checkedin: Option<i64>,
    pub number_of_players_joined: Option<i64>,
    pub number_of_players_participants: Option<i64>,
    pub organizer_data: Option<OrganizerData>,
    pub organizer_id: Option<String>,
    pub prize_type: Option<String>,
    pub region: Option<Region>,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[builder(default)]
    pub rounds: Vec<Extras>,
    pub rule: Option<String>,
    pub started_at: Option<i64>,
    pub status: Option<String>,
    pub substitutes_allowed: Option<i64>,
    pub substitutions_allowed: Option<i64>,
    pub team_size: Option<i64>,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[builder(default)]
    pub total_prize: Extras,
    pub tournament_id: Option<String>,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[builder(default)]
    pub voting: Extras,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[builder(default)]
    pub whitelist_countries: Vec<String>,
    #[serde(flatten)]
    #[builder(default)]
    pub envelope: Envelope,
}

/// A player profile (`/players/{id}`, `/players?nickname=`).
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct Player {
    pub avatar: Option<String>,
    pub country: Option<Country>,
    pub cover_featured_image: Option<String>,
    pub cover_image: Option<String>,
    pub faceit_url: Option<String>,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[builder(default)]
    pub friends_ids: Vec<String>,
    /// Per-game profile keyed by game id.
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[builder(default)]
    pub games: Extras,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[builder(default)]
    pub infractions: Extras,
    pub membership_type: Option<String>,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[builder(default)]
    pub memberships: Vec<String>,
    pub new_steam_id: Option<String>,
    pub nickname: Option<String>,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[builder(default)]
    pub platforms: Extras,
    pub player_id: Option<String>,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[builder(default)]
    pub settings: Extras,
    pub steam_id_64: Option<String>,
    pub steam_nickname: Option<String>,
    #[serde(flatten)]
    #[builder(default)]
    pub envelope: Envelope,
}

/// A match in a player's history (`/players/{id}/history`).
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct PlayerMatch {
    pub competition_id: Option<String>,
    pub competition_name: Option<String>,
    pub competition_type: Option<String>,
    pub faceit_url: Option<String>,
    pub finished_at: Option<i64>,
    pub game_id: Option<Game>,
    pub game_mode: Option<String>,
    pub match_id: Option<String>,
    pub match_type: Option<MatchType>,
    pub max_players: Option<i64>,
    pub organizer_id: Option<String>,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[builder(default)]
    pub playing_players: Vec<String>,
    pub region: Option<Region>,
    pub results: Option<MatchResults>,
    pub started_at: Option<i64>,
    pub status: Option<String>,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[builder(default)]
    pub teams: Extras,
    pub teams_size: Option<i64>,
    #[serde(flatten)]
    #[builder(default)]
    pub envelope: Envelope,
}

/// Lifetime and per-segment statistics of a player in one game.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct PlayerGameStats {
    pub game_id: Option<Game>,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[builder(default)]
    pub lifetime: Extras,
    pub player_id: Option<String>,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[builder(default)]
    pub segments: Vec<Extras>,
    #[serde(flatten)]
    #[builder(default)]
    pub envelope: Envelope,
}

/// Lifetime and per-segment statistics of a team in one game.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct TeamGameStats {
    pub game_id: Option<Game>,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[builder(default)]
    pub lifetime: Extras,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[builder(default)]
    pub segments: Vec<Extras>,
    pub team_id: Option<String>,
    #[serde(flatten)]
    #[builder(default)]
    pub envelope: Envelope,
}

/// A player's entry in a global ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct Rank {
    pub country: Option<Country>,
    pub faceit_elo: Option<i64>,
    pub game_skill_level: Option<i64>,
    pub nickname: Option<String>,
    pub player_id: Option<String>,
    pub position: Option<i64>,
    #[serde(flatten)]
    #[builder(default)]
    pub envelope: Envelope,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct ChampionshipSearchResult {
    pub competition_id: Option<String>,
    pub competition_type: Option<String>,
    pub game: Option<Game>,
    pub name: Option<String>,
    pub number_of_members: Option<i64>,
    pub organizer_id: Option<String>,
    pub organizer_name: Option<String>,
    pub organizer_type: Option<String>,
    pub players_checkedin: Option<i64>,
    pub players_joined: Option<i64>,
    pub prize_type: Option<String>,
    pub region: Option<Region>,
    pub slots: Option<i64>,
    pub started_at: Option<i64>,
    pub status: Option<String>,
    pub total_prize: Option<String>,
    #[serde(flatten)]
    #[builder(default)]
    pub envelope: Envelope,
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct OrganizerSearchResult {
    pub active: Option<bool>,
    pub avatar: Option<String>,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[builder(default)]
    pub countries: Vec<String>,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[builder(default)]
    pub games: Vec<String>,
    pub name: Option<String>,
    pub organizer_id: Option<String>,
    pub partner: Option<bool>,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[builder(default)]
    pub regions: Vec<String>,
    #[serde(flatten)]
    #[builder(default)]
    pub envelope: Envelope,
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct PlayerSearchResult {
    pub avatar: Option<String>,
    pub country: Option<Country>,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[builder(default)]
    pub games: Vec<GameSearchResult>,
    pub nickname: Option<String>,
    pub player_id: Option<String>,
    pub status: Option<String>,
    pub verified: Option<bool>,
    #[serde(flatten)]
    #[builder(default)]
    pub envelope: Envelope,
}

/// A game entry of a [`PlayerSearchResult`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct GameSearchResult {
    pub name: Option<String>,
    pub skill_level: Option<String>,
    #[serde(flatten)]
    #[builder(default)]
    pub envelope: Envelope,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct TeamSearchResult {
    pub avatar: Option<String>,
    pub chat_room_id: Option<String>,
    pub faceit_url: Option<String>,
    pub game: Option<Game>,
    pub name: Option<String>,
    pub team_id: Option<String>,
    pub verified: Option<bool>,
    #[serde(flatten)]
    #[builder(default)]
    pub envelope: Envelope,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct TournamentSearchResult {
    pub competition_id: Option<String>,
    pub competition_type: Option<String>,
    pub game: Option<Game>,
    pub name: Option<String>,
    pub number_of_members: Option<i64>,
    pub organizer_id: Option<String>,
    pub organizer_name: Option<String>,
    pub organizer_type: Option<String>,
    pub players_checkedin: Option<i64>,
    pub players_joined: Option<i64>,
    pub prize_type: Option<String>,
    pub region: Option<Region>,
    pub slots: Option<i64>,
    pub started_at: Option<i64>,
    pub status: Option<String>,
    pub total_prize: Option<String>,
    #[serde(flatten)]
    #[builder(default)]
    pub envelope: Envelope,
}

/// Bracket tree of a tournament (`/tournaments/{id}/brackets`).
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct Brackets {
    pub game: Option<Game>,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[builder(default)]
    pub matches: Vec<BracketMatch>,
    pub name: Option<String>,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[builder(default)]
    pub rounds: Vec<BracketRound>,
    pub status: Option<String>,
    #[serde(flatten)]
    #[builder(default)]
    pub envelope: Envelope,
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct BracketMatch {
    pub faceit_url: Option<String>,
    pub match_id: Option<String>,
    pub position: Option<i64>,
    pub results: Option<MatchResults>,
    pub round: Option<i64>,
    pub state: Option<String>,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[builder(default)]
    pub teams: Extras,
    #[serde(flatten)]
    #[builder(default)]
    pub envelope: Envelope,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct BracketRound {
    pub best_of: Option<i64>,
    pub label: Option<String>,
    /// Number of matches in the round.
    pub matches: Option<i64>,
    pub round: Option<i64>,
    pub start_time: Option<i64>,
    pub starts_asap: Option<bool>,
    pub substitution_time: Option<i64>,
    pub substitutions_allowed: Option<bool>,
    #[serde(flatten)]
    #[builder(default)]
    pub envelope: Envelope,
}

/// Teams of a tournament grouped by state (`/tournaments/{id}/teams`). Every group is
/// required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct TournamentTeams {
    pub checked_in: Vec<TournamentTeam>,
    pub finished: Vec<TournamentTeam>,
    pub joined: Vec<TournamentTeam>,
    pub started: Vec<TournamentTeam>,
    #[serde(flatten)]
    #[builder(default)]
    pub envelope: Envelope,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct TournamentTeam {
    pub nickname: Option<String>,
    pub skill_level: Option<i64>,
    pub subs_done: Option<i64>,
    pub team_id: Option<String>,
    pub team_leader: Option<String>,
    pub team_type: Option<String>,
    #[serde(flatten)]
    #[builder(default)]
    pub envelope: Envelope,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::envelope::{materialize, materialize_value};
    use crate::error::{Kind, Schema, SchemaErrorKind};

    fn schema_of(error: &crate::error::Error) -> &Schema {
        assert_eq!(error.kind(), Kind::Schema);
        error.downcast_ref::<Schema>().unwrap()
    }

    #[test]
    fn championship_should_succeed() {
        let championship: Championship = materialize_value(json!({
            "championship_id": "c1",
            "name": "Weekly Cup",
            "game_id": "csgo",
            "region": "EU",
            "type": "bracket",
            "stream": { "active": true, "platform": "twitch" },
            "prizes": [{ "rank": 1, "faceit_points": 500 }],
            "join_checks": { "min_skill_level": 3, "whitelist_geo_countries": null },
            "schedule": { "1": { "date": 1_600_000_000_000_i64 } },
            "organizer_data": { "organizer_id": "o1", "type": "partner" },
            "anti_smurf": true
        }))
        .unwrap();

        assert_eq!(championship.championship_id.as_deref(), Some("c1"));
        assert_eq!(championship.game_id, Some(Game::CsGo));
        assert_eq!(championship.region, Some(Region::Eu));
        assert_eq!(championship.kind.as_deref(), Some("bracket"));
        assert_eq!(championship.stream.as_ref().unwrap().active, Some(true));
        assert_eq!(championship.prizes[0].faceit_points, Some(500));

        let join_checks = championship.join_checks.as_ref().unwrap();
        assert_eq!(join_checks.min_skill_level, Some(3));
        assert!(join_checks.whitelist_geo_countries.is_empty());

        assert_eq!(
            championship.organizer_data.as_ref().unwrap().kind.as_deref(),
            Some("partner")
        );
        assert!(championship.game_data.is_none());
        assert!(championship.screening.is_empty());
        assert_eq!(championship.envelope.get("anti_smurf"), Some(&json!(true)));
    }

    #[test]
    fn championship_stream_mismatch_reports_path() {
        let error = materialize_value::<Championship>(json!({
            "championship_id": "c1",
            "stream": { "platform": 3 }
        }))
        .unwrap_err();

        let schema = schema_of(&error);
        assert_eq!(schema.kind, SchemaErrorKind::TypeMismatch);
        assert_eq!(schema.path, "stream.platform");
        assert_eq!(schema.resource, "Championship");
    }

    #[test]
    fn absent_fields_take_defaults() {
        let player: Player = materialize_value(json!({})).unwrap();

        assert!(player.player_id.is_none());
        assert!(player.country.is_none());
        assert!(player.friends_ids.is_empty());
        assert!(player.games.is_empty());
        assert!(player.envelope.is_success());
        assert!(player.envelope.extra().is_empty());
    }

    #[test]
    fn unknown_country_should_fail() {
        let error = materialize_value::<Player>(json!({ "player_id": "p1", "country": "zz" }))
            .unwrap_err();

        let schema = schema_of(&error);
        assert_eq!(schema.kind, SchemaErrorKind::InvalidEnumValue);
        assert_eq!(schema.path, "country");
    }

    #[test]
    fn game_data_requires_assets() {
        let error = materialize_value::<Hub>(json!({
            "hub_id": "h1",
            "game_data": { "game_id": "csgo" }
        }))
        .unwrap_err();

        let schema = schema_of(&error);
        assert_eq!(schema.kind, SchemaErrorKind::MissingField);
        assert_eq!(schema.path, "game_data.assets");
    }

    #[test]
    fn match_stats_should_succeed() {
        let stats: MatchStats = materialize_value(json!({
            "rounds": [{
                "best_of": "2",
                "competition_id": null,
                "game_id": "csgo",
                "game_mode": "5v5",
                "match_id": "m1",
                "match_round": "1",
                "played": "1",
                "round_stats": { "Map": "de_inferno", "Score": "16 / 12" },
                "teams": [{
                    "team_id": "t1",
                    "premade": false,
                    "team_stats": { "Final Score": "16" },
                    "players": [{ "player_id": "p1", "nickname": "n", "player_stats": { "Kills": "20" } }]
                }]
            }]
        }))
        .unwrap();

        let round = &stats.rounds[0];
        assert_eq!(round.game_id, Game::CsGo);
        assert_eq!(round.round_stats.get("Map"), Some(&json!("de_inferno")));
        let team = &round.teams[0];
        assert!(!team.premade);
        assert_eq!(team.players[0].player_stats.get("Kills"), Some(&json!("20")));
    }

    #[test]
    fn round_stats_missing_field_reports_index() {
        let error = materialize_value::<MatchStats>(json!({
            "rounds": [{
                "best_of": "1",
                "competition_id": "c",
                "game_id": "csgo",
                "game_mode": "5v5",
                "match_id": "m1",
                "played": "1",
                "round_stats": {},
                "teams": []
            }]
        }))
        .unwrap_err();

        let schema = schema_of(&error);
        assert_eq!(schema.kind, SchemaErrorKind::MissingField);
        assert_eq!(schema.path, "rounds[0].match_round");
    }

    #[test]
    fn match_stats_requires_rounds() {
        let error = materialize_value::<MatchStats>(json!({})).unwrap_err();
        assert_eq!(schema_of(&error).path, "rounds");
    }

    #[test]
    fn ranking_accepts_fractional_win_rate() {
        let ranking: Ranking =
            materialize_value(json!({ "position": 4, "win_rate": 0.65, "won": 13 })).unwrap();
        assert_eq!(ranking.win_rate, Some(0.65));
    }

    #[test]
    fn brackets_should_succeed() {
        let brackets: Brackets = materialize_value(json!({
            "game": "csgo",
            "name": "Playoffs",
            "rounds": [{ "round": 1, "label": "Quarterfinals", "matches": 4, "best_of": 1 }],
            "matches": [{
                "match_id": "m1",
                "round": 1,
                "position": 1,
                "results": { "winner": "faction1", "score": { "faction1": 1, "faction2": 0 } }
            }]
        }))
        .unwrap();

        assert_eq!(brackets.rounds[0].matches, Some(4));
        let results = brackets.matches[0].results.as_ref().unwrap();
        assert_eq!(results.winner.as_deref(), Some("faction1"));
        assert_eq!(results.score.get("faction1"), Some(&json!(1)));
    }

    #[test]
    fn tournament_teams_require_every_group() {
        let error = materialize::<TournamentTeams>(
            200,
            json!({ "checked_in": [], "finished": [], "joined": [] }),
        )
        .unwrap_err();

        assert_eq!(schema_of(&error).path, "started");
    }

    #[test]
    fn builder_defaults_envelope() {
        let rank = Rank::builder()
            .player_id("p1".to_owned())
            .faceit_elo(2000)
            .build();

        assert!(rank.envelope.is_success());
        assert_eq!(
            serde_json::to_value(&rank).unwrap(),
            json!({
                "country": null,
                "faceit_elo": 2000,
                "game_skill_level": null,
                "nickname": null,
                "player_id": "p1",
                "position": null
            })
        );
    }
}
