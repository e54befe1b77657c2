//! FACEIT Data API client.
//!
//! **Feature flag:** `data` (required to use this module)
//!
//! The Data API is a read-only HTTP API authenticated with a server-side API key. Every
//! endpoint answers with one resource or a page of resources; both are materialized into
//! the types in [`crate::types::response`] and [`crate::collection`].
//!
//! ## Available Endpoints
//!
//! | Endpoint | Description |
//! |----------|-------------|
//! | `/championships` | Championships of a game, by id, their matches, results and subscriptions |
//! | `/games` | Games, by id, and their parent game |
//! | `/hubs/{id}` | Hubs, their matches, members, roles, rules and statistics |
//! | `/leaderboards` | Championship and hub leaderboards and rankings |
//! | `/matches/{id}` | Match details and statistics |
//! | `/organizers` | Organizers by name or id, their championships, games, hubs and tournaments |
//! | `/players` | Players by nickname, game account or id, their history, hubs, stats and tournaments |
//! | `/rankings` | Regional rankings of a game |
//! | `/search` | Search championships, hubs, organizers, players, teams and tournaments |
//! | `/teams/{id}` | Teams, their statistics and tournaments |
//! | `/tournaments` | Tournaments, by id, their brackets, matches and teams |
//!
//! # Example
//!
//! ```no_run
//! use faceit_client_sdk::Page as _;
//! use faceit_client_sdk::data::{Client, types::request::HistoryRequest};
//! use faceit_client_sdk::types::Game;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::new("your-server-side-api-key")?;
//!
//! let request = HistoryRequest::builder()
//!     .player_id("ad8034c2-e1f3-4e4a-9d0c-5a6ab3b8e6ad")
//!     .game(Game::Cs2)
//!     .limit(20)
//!     .build();
//!
//! if let Some(history) = client.player_history(&request).await?.ok() {
//!     for played in history.iter() {
//!         println!("{:?} ({:?})", played.match_id, played.game_mode);
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # API Base URL
//!
//! The default API endpoint is `https://open.faceit.com/data/v4/`.

pub mod client;
pub mod types;

pub use client::Client;
