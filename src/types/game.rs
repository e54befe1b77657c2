use serde::{Deserialize, Serialize};

/// A game title (or title/platform/region variant) known to FACEIT.
///
/// The string form is the FACEIT `game_id`, used both in API paths and in response bodies.
/// Values not listed here fail materialization rather than degrading to `None`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum_macros::Display,
)]
#[non_exhaustive]
pub enum Game {
    #[serde(rename = "rl_XBOX_PC")]
    #[strum(serialize = "rl_XBOX_PC")]
    RlXboxPc,
    #[serde(rename = "wot_xbox")]
    #[strum(serialize = "wot_xbox")]
    WotXbox,
    #[serde(rename = "wot_NA")]
    #[strum(serialize = "wot_NA")]
    WotNa,
    #[serde(rename = "wot_RU")]
    #[strum(serialize = "wot_RU")]
    WotRu,
    #[serde(rename = "wot_EU")]
    #[strum(serialize = "wot_EU")]
    WotEu,
    #[serde(rename = "smite_xbox")]
    #[strum(serialize = "smite_xbox")]
    SmiteXbox,
    #[serde(rename = "smite")]
    #[strum(serialize = "smite")]
    Smite,
    #[serde(rename = "dirtybomb")]
    #[strum(serialize = "dirtybomb")]
    DirtyBomb,
    #[serde(rename = "nhl_20_xbox")]
    #[strum(serialize = "nhl_20_xbox")]
    Nhl20Xbox,
    #[serde(rename = "nhl_19_XBOX")]
    #[strum(serialize = "nhl_19_XBOX")]
    Nhl19Xbox,
    #[serde(rename = "nhl_18_XBOX")]
    #[strum(serialize = "nhl_18_XBOX")]
    Nhl18Xbox,
    #[serde(rename = "nhl_20_ps4")]
    #[strum(serialize = "nhl_20_ps4")]
    Nhl20Ps4,
    #[serde(rename = "nhl_19_PS4")]
    #[strum(serialize = "nhl_19_PS4")]
    Nhl19Ps4,
    #[serde(rename = "nhl_18_PS4")]
    #[strum(serialize = "nhl_18_PS4")]
    Nhl18Ps4,
    #[serde(rename = "nhl_19")]
    #[strum(serialize = "nhl_19")]
    Nhl19,
    #[serde(rename = "nhl_20_parent")]
    #[strum(serialize = "nhl_20_parent")]
    Nhl20,
    #[serde(rename = "apex")]
    #[strum(serialize = "apex")]
    Apex,
    #[serde(rename = "minion_masters")]
    #[strum(serialize = "minion_masters")]
    MinionMasters,
    #[serde(rename = "halo_3")]
    #[strum(serialize = "halo_3")]
    Halo3,
    #[serde(rename = "halo_5")]
    #[strum(serialize = "halo_5")]
    Halo5Xbox,
    #[serde(rename = "halo_infinite")]
    #[strum(serialize = "halo_infinite")]
    HaloInfinite,
    #[serde(rename = "halo_mcc")]
    #[strum(serialize = "halo_mcc")]
    HaloMcc,
    #[serde(rename = "gs_rainbow_6_ps4")]
    #[strum(serialize = "gs_rainbow_6_ps4")]
    Rainbow6sPs4,
    #[serde(rename = "gs_rainbow_6_xbox")]
    #[strum(serialize = "gs_rainbow_6_xbox")]
    Rainbow6sXbox,
    #[serde(rename = "gs_rainbow_6")]
    #[strum(serialize = "gs_rainbow_6")]
    Rainbow6sPc,
    #[serde(rename = "rainbow_6")]
    #[strum(serialize = "rainbow_6")]
    Rainbow6s,
    #[serde(rename = "warface_eu")]
    #[strum(serialize = "warface_eu")]
    WarfaceEu,
    #[serde(rename = "warface_na")]
    #[strum(serialize = "warface_na")]
    WarfaceNa,
    #[serde(rename = "warface_alpha")]
    #[strum(serialize = "warface_alpha")]
    WarfaceAlpha,
    #[serde(rename = "warface_parent")]
    #[strum(serialize = "warface_parent")]
    WarfaceParent,
    #[serde(rename = "warface")]
    #[strum(serialize = "warface")]
    Warface,
    #[serde(rename = "brawl_stars_auto")]
    #[strum(serialize = "brawl_stars_auto")]
    BrawlStarsAuto,
    #[serde(rename = "brawl_stars")]
    #[strum(serialize = "brawl_stars")]
    BrawlStars,
    #[serde(rename = "overwatch_EU")]
    #[strum(serialize = "overwatch_EU")]
    OverwatchEu,
    #[serde(rename = "overwatch_US")]
    #[strum(serialize = "overwatch_US")]
    OverwatchUs,
    #[serde(rename = "overwatch_KR")]
    #[strum(serialize = "overwatch_KR")]
    OverwatchKr,
    #[serde(rename = "overwatch")]
    #[strum(serialize = "overwatch")]
    Overwatch,
    #[serde(rename = "clash_royale_auto")]
    #[strum(serialize = "clash_royale_auto")]
    ClashRoyaleAuto,
    #[serde(rename = "clash_royale")]
    #[strum(serialize = "clash_royale")]
    ClashRoyale,
    #[serde(rename = "destiny2_xbox")]
    #[strum(serialize = "destiny2_xbox")]
    Destiny2Xbox,
    #[serde(rename = "destiny2_ps4")]
    #[strum(serialize = "destiny2_ps4")]
    Destiny2Ps4,
    #[serde(rename = "destiny2")]
    #[strum(serialize = "destiny2")]
    Destiny2Pc,
    #[serde(rename = "destiny2_parent")]
    #[strum(serialize = "destiny2_parent")]
    Destiny2,
    #[serde(rename = "lol_TR")]
    #[strum(serialize = "lol_TR")]
    LolTr,
    #[serde(rename = "lol_EUN")]
    #[strum(serialize = "lol_EUN")]
    LolEun,
    #[serde(rename = "lol_EUW")]
    #[strum(serialize = "lol_EUW")]
    LolEuw,
    #[serde(rename = "lol_OCE")]
    #[strum(serialize = "lol_OCE")]
    LolOce,
    #[serde(rename = "lol_BR")]
    #[strum(serialize = "lol_BR")]
    LolBr,
    #[serde(rename = "lol_LAN")]
    #[strum(serialize = "lol_LAN")]
    LolLan,
    #[serde(rename = "lol_LAS")]
    #[strum(serialize = "lol_LAS")]
    LolLas,
    #[serde(rename = "lol_NA")]
    #[strum(serialize = "lol_NA")]
    LolNa,
    #[serde(rename = "Wild")]
    #[strum(serialize = "Wild")]
    Lol,
    #[serde(rename = "lol_parent")]
    #[strum(serialize = "lol_parent")]
    LolParent,
    #[serde(rename = "krunker")]
    #[strum(serialize = "krunker")]
    Krunker,
    #[serde(rename = "ring_of_elysium")]
    #[strum(serialize = "ring_of_elysium")]
    RingOfElysium,
    #[serde(rename = "tf2")]
    #[strum(serialize = "tf2")]
    Tf2,
    #[serde(rename = "csdz")]
    #[strum(serialize = "csdz")]
    CsDz,
    #[serde(rename = "valorant")]
    #[strum(serialize = "valorant")]
    Valorant,
    #[serde(rename = "dota2")]
    #[strum(serialize = "dota2")]
    Dota2,
    #[serde(rename = "temperia")]
    #[strum(serialize = "temperia")]
    Temperia,
    #[serde(rename = "hearthstone-battlegrounds")]
    #[strum(serialize = "hearthstone-battlegrounds")]
    HsBattlegrounds,
    #[serde(rename = "fifa22")]
    #[strum(serialize = "fifa22")]
    Fifa22,
    #[serde(rename = "fifa20")]
    #[strum(serialize = "fifa20")]
    Fifa20,
    #[serde(rename = "wow")]
    #[strum(serialize = "wow")]
    Wow,
    #[serde(rename = "quake_champions")]
    #[strum(serialize = "quake_champions")]
    QuakeChampions,
    #[serde(rename = "trackmania")]
    #[strum(serialize = "trackmania")]
    Trackmania,
    #[serde(rename = "pubg")]
    #[strum(serialize = "pubg")]
    Pubg,
    #[serde(rename = "newstate")]
    #[strum(serialize = "newstate")]
    NewStateMobile,
    #[serde(rename = "wildrift")]
    #[strum(serialize = "wildrift")]
    Rift,
    #[serde(rename = "hearthstone")]
    #[strum(serialize = "hearthstone")]
    Hearthstone,
    #[serde(rename = "fallguys")]
    #[strum(serialize = "fallguys")]
    Fallguys,
    #[serde(rename = "teamfight_tactics")]
    #[strum(serialize = "teamfight_tactics")]
    TeamfightTactics,
    #[serde(rename = "pubgmobile")]
    #[strum(serialize = "pubgmobile")]
    PubgMobile,
    #[serde(rename = "rocket_league")]
    #[strum(serialize = "rocket_league")]
    RocketLeague,
    #[serde(rename = "csgo")]
    #[strum(serialize = "csgo")]
    CsGo,
    #[serde(rename = "cs2")]
    #[strum(serialize = "cs2")]
    Cs2,
}
