use serde::{Deserialize, Serialize};

/// ISO 3166-1 alpha-2 country code.
///
/// Serializes upper-case. Lower-case codes, which the live API returns for player
/// profiles, are accepted on input.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum_macros::Display,
)]
#[non_exhaustive]
pub enum Country {
    #[serde(rename = "AF", alias = "af")]
    #[strum(serialize = "AF")]
    Afghanistan,
    #[serde(rename = "AX", alias = "ax")]
    #[strum(serialize = "AX")]
    AlandIslands,
    #[serde(rename = "AL", alias = "al")]
    #[strum(serialize = "AL")]
    Albania,
    #[serde(rename = "DZ", alias = "dz")]
    #[strum(serialize = "DZ")]
    Algeria,
    #[serde(rename = "AS", alias = "as")]
    #[strum(serialize = "AS")]
    AmericanSamoa,
    #[serde(rename = "AD", alias = "ad")]
    #[strum(serialize = "AD")]
    Andorra,
    #[serde(rename = "AO", alias = "ao")]
    #[strum(serialize = "AO")]
    Angola,
    #[serde(rename = "AI", alias = "ai")]
    #[strum(serialize = "AI")]
    Anguilla,
    #[serde(rename = "AQ", alias = "aq")]
    #[strum(serialize = "AQ")]
    Antarctica,
    #[serde(rename = "AG", alias = "ag")]
    #[strum(serialize = "AG")]
    AntiguaAndBarbuda,
    #[serde(rename = "AR", alias = "ar")]
    #[strum(serialize = "AR")]
    Argentina,
    #[serde(rename = "AM", alias = "am")]
    #[strum(serialize = "AM")]
    Armenia,
    #[serde(rename = "AW", alias = "aw")]
    #[strum(serialize = "AW")]
    Aruba,
    #[serde(rename = "AU", alias = "au")]
    #[strum(serialize = "AU")]
    Australia,
    #[serde(rename = "AT", alias = "at")]
    #[strum(serialize = "AT")]
    Austria,
    #[serde(rename = "AZ", alias = "az")]
    #[strum(serialize = "AZ")]
    Azerbaijan,
    #[serde(rename = "BS", alias = "bs")]
    #[strum(serialize = "BS")]
    Bahamas,
    #[serde(rename = "BH", alias = "bh")]
    #[strum(serialize = "BH")]
    Bahrain,
    #[serde(rename = "BD", alias = "bd")]
    #[strum(serialize = "BD")]
    Bangladesh,
    #[serde(rename = "BB", alias = "bb")]
    #[strum(serialize = "BB")]
    Barbados,
    #[serde(rename = "BY", alias = "by")]
    #[strum(serialize = "BY")]
    Belarus,
    #[serde(rename = "BE", alias = "be")]
    #[strum(serialize = "BE")]
    Belgium,
    #[serde(rename = "BZ", alias = "bz")]
    #[strum(serialize = "BZ")]
    Belize,
    #[serde(rename = "BJ", alias = "bj")]
    #[strum(serialize = "BJ")]
    Benin,
    #[serde(rename = "BM", alias = "bm")]
    #[strum(serialize = "BM")]
    Bermuda,
    #[serde(rename = "BT", alias = "bt")]
    #[strum(serialize = "BT")]
    Bhutan,
    #[serde(rename = "BO", alias = "bo")]
    #[strum(serialize = "BO")]
    Bolivia,
    #[serde(rename = "BQ", alias = "bq")]
    #[strum(serialize = "BQ")]
    Bonaire,
    #[serde(rename = "BA", alias = "ba")]
    #[strum(serialize = "BA")]
    BosniaAndHerzegovina,
    #[serde(rename = "BW", alias = "bw")]
    #[strum(serialize = "BW")]
    Botswana,
    #[serde(rename = "BV", alias = "bv")]
    #[strum(serialize = "BV")]
    BouvetIsland,
    #[serde(rename = "BR", alias = "br")]
    #[strum(serialize = "BR")]
    Brazil,
    #[serde(rename = "IO", alias = "io")]
    #[strum(serialize = "IO")]
    BritishIndianOceanTerritory,
    #[serde(rename = "BN", alias = "bn")]
    #[strum(serialize = "BN")]
    BruneiDarussalam,
    #[serde(rename = "BG", alias = "bg")]
    #[strum(serialize = "BG")]
    Bulgaria,
    #[serde(rename = "BF", alias = "bf")]
    #[strum(serialize = "BF")]
    BurkinaFaso,
    #[serde(rename = "BI", alias = "bi")]
    #[strum(serialize = "BI")]
    Burundi,
    #[serde(rename = "KH", alias = "kh")]
    #[strum(serialize = "KH")]
    Cambodia,
    #[serde(rename = "CM", alias = "cm")]
    #[strum(serialize = "CM")]
    Cameroon,
    #[serde(rename = "CA", alias = "ca")]
    #[strum(serialize = "CA")]
    Canada,
    #[serde(rename = "CV", alias = "cv")]
    #[strum(serialize = "CV")]
    CaboVerde,
    #[serde(rename = "KY", alias = "ky")]
    #[strum(serialize = "KY")]
    CaymanIslands,
    #[serde(rename = "CF", alias = "cf")]
    #[strum(serialize = "CF")]
    CentralAfricanRepublic,
    #[serde(rename = "TD", alias = "td")]
    #[strum(serialize = "TD")]
    Chad,
    #[serde(rename = "CL", alias = "cl")]
    #[strum(serialize = "CL")]
    Chile,
    #[serde(rename = "CN", alias = "cn")]
    #[strum(serialize = "CN")]
    China,
    #[serde(rename = "CX", alias = "cx")]
    #[strum(serialize = "CX")]
    ChristmasIsland,
    #[serde(rename = "CC", alias = "cc")]
    #[strum(serialize = "CC")]
    CocosIslands,
    #[serde(rename = "CO", alias = "co")]
    #[strum(serialize = "CO")]
    Colombia,
    #[serde(rename = "KM", alias = "km")]
    #[strum(serialize = "KM")]
    Comoros,
    #[serde(rename = "CG", alias = "cg")]
    #[strum(serialize = "CG")]
    Congo,
    #[serde(rename = "CD", alias = "cd")]
    #[strum(serialize = "CD")]
    DemocraticRepublicOfTheCongo,
    #[serde(rename = "CK", alias = "ck")]
    #[strum(serialize = "CK")]
    CookIslands,
    #[serde(rename = "CR", alias = "cr")]
    #[strum(serialize = "CR")]
    CostaRica,
    #[serde(rename = "CI", alias = "ci")]
    #[strum(serialize = "CI")]
    CoteDIvoire,
    #[serde(rename = "HR", alias = "hr")]
    #[strum(serialize = "HR")]
    Croatia,
    #[serde(rename = "CU", alias = "cu")]
    #[strum(serialize = "CU")]
    Cuba,
    #[serde(rename = "CW", alias = "cw")]
    #[strum(serialize = "CW")]
    Curacao,
    #[serde(rename = "CY", alias = "cy")]
    #[strum(serialize = "CY")]
    Cyprus,
    #[serde(rename = "CZ", alias = "cz")]
    #[strum(serialize = "CZ")]
    CzechRepublic,
    #[serde(rename = "DK", alias = "dk")]
    #[strum(serialize = "DK")]
    Denmark,
    #[serde(rename = "DJ", alias = "dj")]
    #[strum(serialize = "DJ")]
    Djibouti,
    #[serde(rename = "DM", alias = "dm")]
    #[strum(serialize = "DM")]
    Dominica,
    #[serde(rename = "DO", alias = "do")]
    #[strum(serialize = "DO")]
    DominicanRepublic,
    #[serde(rename = "EC", alias = "ec")]
    #[strum(serialize = "EC")]
    Ecuador,
    #[serde(rename = "EG", alias = "eg")]
    #[strum(serialize = "EG")]
    Egypt,
    #[serde(rename = "SV", alias = "sv")]
    #[strum(serialize = "SV")]
    ElSalvador,
    #[serde(rename = "GQ", alias = "gq")]
    #[strum(serialize = "GQ")]
    EquatorialGuinea,
    #[serde(rename = "ER", alias = "er")]
    #[strum(serialize = "ER")]
    Eritrea,
    #[serde(rename = "EE", alias = "ee")]
    #[strum(serialize = "EE")]
    Estonia,
    #[serde(rename = "ET", alias = "et")]
    #[strum(serialize = "ET")]
    Ethiopia,
    #[serde(rename = "FK", alias = "fk")]
    #[strum(serialize = "FK")]
    FalklandIslands,
    #[serde(rename = "FO", alias = "fo")]
    #[strum(serialize = "FO")]
    FaroeIslands,
    #[serde(rename = "FJ", alias = "fj")]
    #[strum(serialize = "FJ")]
    Fiji,
    #[serde(rename = "FI", alias = "fi")]
    #[strum(serialize = "FI")]
    Finland,
    #[serde(rename = "FR", alias = "fr")]
    #[strum(serialize = "FR")]
    France,
    #[serde(rename = "GF", alias = "gf")]
    #[strum(serialize = "GF")]
    FrenchGuiana,
    #[serde(rename = "PF", alias = "pf")]
    #[strum(serialize = "PF")]
    FrenchPolynesia,
    #[serde(rename = "TF", alias = "tf")]
    #[strum(serialize = "TF")]
    FrenchSouthernTerritories,
    #[serde(rename = "GA", alias = "ga")]
    #[strum(serialize = "GA")]
    Gabon,
    #[serde(rename = "GM", alias = "gm")]
    #[strum(serialize = "GM")]
    Gambia,
    #[serde(rename = "GE", alias = "ge")]
    #[strum(serialize = "GE")]
    Georgia,
    #[serde(rename = "DE", alias = "de")]
    #[strum(serialize = "DE")]
    Germany,
    #[serde(rename = "GH", alias = "gh")]
    #[strum(serialize = "GH")]
    Ghana,
    #[serde(rename = "GI", alias = "gi")]
    #[strum(serialize = "GI")]
    Gibraltar,
    #[serde(rename = "GR", alias = "gr")]
    #[strum(serialize = "GR")]
    Greece,
    #[serde(rename = "GL", alias = "gl")]
    #[strum(serialize = "GL")]
    Greenland,
    #[serde(rename = "GD", alias = "gd")]
    #[strum(serialize = "GD")]
    Grenada,
    #[serde(rename = "GP", alias = "gp")]
    #[strum(serialize = "GP")]
    Guadeloupe,
    #[serde(rename = "GU", alias = "gu")]
    #[strum(serialize = "GU")]
    Guam,
    #[serde(rename = "GT", alias = "gt")]
    #[strum(serialize = "GT")]
    Guatemala,
    #[serde(rename = "GG", alias = "gg")]
    #[strum(serialize = "GG")]
    Guernsey,
    #[serde(rename = "GN", alias = "gn")]
    #[strum(serialize = "GN")]
    Guinea,
    #[serde(rename = "GW", alias = "gw")]
    #[strum(serialize = "GW")]
    GuineaBissau,
    #[serde(rename = "GY", alias = "gy")]
    #[strum(serialize = "GY")]
    Guyana,
    #[serde(rename = "HT", alias = "ht")]
    #[strum(serialize = "HT")]
    Haiti,
    #[serde(rename = "HM", alias = "hm")]
    #[strum(serialize = "HM")]
    HeardIslandAndMcdonaldIslands,
    #[serde(rename = "VA", alias = "va")]
    #[strum(serialize = "VA")]
    HolySee,
    #[serde(rename = "HN", alias = "hn")]
    #[strum(serialize = "HN")]
    Honduras,
    #[serde(rename = "HK", alias = "hk")]
    #[strum(serialize = "HK")]
    HongKong,
    #[serde(rename = "HU", alias = "hu")]
    #[strum(serialize = "HU")]
    Hungary,
    #[serde(rename = "IS", alias = "is")]
    #[strum(serialize = "IS")]
    Iceland,
    #[serde(rename = "IN", alias = "in")]
    #[strum(serialize = "IN")]
    India,
    #[serde(rename = "ID", alias = "id")]
    #[strum(serialize = "ID")]
    Indonesia,
    #[serde(rename = "IR", alias = "ir")]
    #[strum(serialize = "IR")]
    Iran,
    #[serde(rename = "IQ", alias = "iq")]
    #[strum(serialize = "IQ")]
    Iraq,
    #[serde(rename = "IE", alias = "ie")]
    #[strum(serialize = "IE")]
    Ireland,
    #[serde(rename = "IM", alias = "im")]
    #[strum(serialize = "IM")]
    IsleOfMan,
    #[serde(rename = "IL", alias = "il")]
    #[strum(serialize = "IL")]
    Israel,
    #[serde(rename = "IT", alias = "it")]
    #[strum(serialize = "IT")]
    Italy,
    #[serde(rename = "JM", alias = "jm")]
    #[strum(serialize = "JM")]
    Jamaica,
    #[serde(rename = "JP", alias = "jp")]
    #[strum(serialize = "JP")]
    Japan,
    #[serde(rename = "JE", alias = "je")]
    #[strum(serialize = "JE")]
    Jersey,
    #[serde(rename = "JO", alias = "jo")]
    #[strum(serialize = "JO")]
    Jordan,
    #[serde(rename = "KZ", alias = "kz")]
    #[strum(serialize = "KZ")]
    Kazakhstan,
    #[serde(rename = "KE", alias = "ke")]
    #[strum(serialize = "KE")]
    Kenya,
    #[serde(rename = "KI", alias = "ki")]
    #[strum(serialize = "KI")]
    Kiribati,
    #[serde(rename = "KP", alias = "kp")]
    #[strum(serialize = "KP")]
    DemocraticPeoplesRepublicOfKorea,
    #[serde(rename = "KR", alias = "kr")]
    #[strum(serialize = "KR")]
    RepublicOfKorea,
    #[serde(rename = "KW", alias = "kw")]
    #[strum(serialize = "KW")]
    Kuwait,
    #[serde(rename = "KG", alias = "kg")]
    #[strum(serialize = "KG")]
    Kyrgyzstan,
    #[serde(rename = "LA", alias = "la")]
    #[strum(serialize = "LA")]
    LaoPeoplesDemocraticRepublic,
    #[serde(rename = "LV", alias = "lv")]
    #[strum(serialize = "LV")]
    Latvia,
    #[serde(rename = "LB", alias = "lb")]
    #[strum(serialize = "LB")]
    Lebanon,
    #[serde(rename = "LS", alias = "ls")]
    #[strum(serialize = "LS")]
    Lesotho,
    #[serde(rename = "LR", alias = "lr")]
    #[strum(serialize = "LR")]
    Liberia,
    #[serde(rename = "LY", alias = "ly")]
    #[strum(serialize = "LY")]
    Libya,
    #[serde(rename = "LI", alias = "li")]
    #[strum(serialize = "LI")]
    Liechtenstein,
    #[serde(rename = "LT", alias = "lt")]
    #[strum(serialize = "LT")]
    Lithuania,
    #[serde(rename = "LU", alias = "lu")]
    #[strum(serialize = "LU")]
    Luxembourg,
    #[serde(rename = "MO", alias = "mo")]
    #[strum(serialize = "MO")]
    Macao,
    #[serde(rename = "MK", alias = "mk")]
    #[strum(serialize = "MK")]
    Macedonia,
    #[serde(rename = "MG", alias = "mg")]
    #[strum(serialize = "MG")]
    Madagascar,
    #[serde(rename = "MW", alias = "mw")]
    #[strum(serialize = "MW")]
    Malawi,
    #[serde(rename = "MY", alias = "my")]
    #[strum(serialize = "MY")]
    Malaysia,
    #[serde(rename = "MV", alias = "mv")]
    #[strum(serialize = "MV")]
    Maldives,
    #[serde(rename = "ML", alias = "ml")]
    #[strum(serialize = "ML")]
    Mali,
    #[serde(rename = "MT", alias = "mt")]
    #[strum(serialize = "MT")]
    Malta,
    #[serde(rename = "MH", alias = "mh")]
    #[strum(serialize = "MH")]
    MarshallIslands,
    #[serde(rename = "MQ", alias = "mq")]
    #[strum(serialize = "MQ")]
    Martinique,
    #[serde(rename = "MR", alias = "mr")]
    #[strum(serialize = "MR")]
    Mauritania,
    #[serde(rename = "MU", alias = "mu")]
    #[strum(serialize = "MU")]
    Mauritius,
    #[serde(rename = "YT", alias = "yt")]
    #[strum(serialize = "YT")]
    Mayotte,
    #[serde(rename = "MX", alias = "mx")]
    #[strum(serialize = "MX")]
    Mexico,
    #[serde(rename = "FM", alias = "fm")]
    #[strum(serialize = "FM")]
    Micronesia,
    #[serde(rename = "MD", alias = "md")]
    #[strum(serialize = "MD")]
    Moldova,
    #[serde(rename = "MC", alias = "mc")]
    #[strum(serialize = "MC")]
    Monaco,
    #[serde(rename = "MN", alias = "mn")]
    #[strum(serialize = "MN")]
    Mongolia,
    #[serde(rename = "ME", alias = "me")]
    #[strum(serialize = "ME")]
    Montenegro,
    #[serde(rename = "MS", alias = "ms")]
    #[strum(serialize = "MS")]
    Montserrat,
    #[serde(rename = "MA", alias = "ma")]
    #[strum(serialize = "MA")]
    Morocco,
    #[serde(rename = "MZ", alias = "mz")]
    #[strum(serialize = "MZ")]
    Mozambique,
    #[serde(rename = "MM", alias = "mm")]
    #[strum(serialize = "MM")]
    Myanmar,
    #[serde(rename = "NA", alias = "na")]
    #[strum(serialize = "NA")]
    Namibia,
    #[serde(rename = "NR", alias = "nr")]
    #[strum(serialize = "NR")]
    Nauru,
    #[serde(rename = "NP", alias = "np")]
    #[strum(serialize = "NP")]
    Nepal,
    #[serde(rename = "NL", alias = "nl")]
    #[strum(serialize = "NL")]
    Netherlands,
    #[serde(rename = "NC", alias = "nc")]
    #[strum(serialize = "NC")]
    NewCaledonia,
    #[serde(rename = "NZ", alias = "nz")]
    #[strum(serialize = "NZ")]
    NewZealand,
    #[serde(rename = "NI", alias = "ni")]
    #[strum(serialize = "NI")]
    Nicaragua,
    #[serde(rename = "NE", alias = "ne")]
    #[strum(serialize = "NE")]
    Niger,
    #[serde(rename = "NG", alias = "ng")]
    #[strum(serialize = "NG")]
    Nigeria,
    #[serde(rename = "NU", alias = "nu")]
    #[strum(serialize = "NU")]
    Niue,
    #[serde(rename = "NF", alias = "nf")]
    #[strum(serialize = "NF")]
    NorfolkIsland,
    #[serde(rename = "MP", alias = "mp")]
    #[strum(serialize = "MP")]
    NorthernMarianaIslands,
    #[serde(rename = "NO", alias = "no")]
    #[strum(serialize = "NO")]
    Norway,
    #[serde(rename = "OM", alias = "om")]
    #[strum(serialize = "OM")]
    Oman,
    #[serde(rename = "PK", alias = "pk")]
    #[strum(serialize = "PK")]
    Pakistan,
    #[serde(rename = "PW", alias = "pw")]
    #[strum(serialize = "PW")]
    Palau,
    #[serde(rename = "PS", alias = "ps")]
    #[strum(serialize = "PS")]
    StateOfPalestine,
    #[serde(rename = "PA", alias = "pa")]
    #[strum(serialize = "PA")]
    Panama,
    #[serde(rename = "PG", alias = "pg")]
    #[strum(serialize = "PG")]
    PapuaNewGuinea,
    #[serde(rename = "PY", alias = "py")]
    #[strum(serialize = "PY")]
    Paraguay,
    #[serde(rename = "PE", alias = "pe")]
    #[strum(serialize = "PE")]
    Peru,
    #[serde(rename = "PH", alias = "ph")]
    #[strum(serialize = "PH")]
    Philippines,
    #[serde(rename = "PN", alias = "pn")]
    #[strum(serialize = "PN")]
    Pitcairn,
    #[serde(rename = "PL", alias = "pl")]
    #[strum(serialize = "PL")]
    Poland,
    #[serde(rename = "PT", alias = "pt")]
    #[strum(serialize = "PT")]
    Portugal,
    #[serde(rename = "PR", alias = "pr")]
    #[strum(serialize = "PR")]
    PuertoRico,
    #[serde(rename = "QA", alias = "qa")]
    #[strum(serialize = "QA")]
    Qatar,
    #[serde(rename = "RE", alias = "re")]
    #[strum(serialize = "RE")]
    Reunion,
    #[serde(rename = "RO", alias = "ro")]
    #[strum(serialize = "RO")]
    Romania,
    #[serde(rename = "RU", alias = "ru")]
    #[strum(serialize = "RU")]
    RussianFederation,
    #[serde(rename = "RW", alias = "rw")]
    #[strum(serialize = "RW")]
    Rwanda,
    #[serde(rename = "BL", alias = "bl")]
    #[strum(serialize = "BL")]
    SaintBarthelemy,
    #[serde(rename = "SH", alias = "sh")]
    #[strum(serialize = "SH")]
    SaintHelenaAscensionAndTristanDaCunha,
    #[serde(rename = "KN", alias = "kn")]
    #[strum(serialize = "KN")]
    SaintKittsAndNevis,
    #[serde(rename = "LC", alias = "lc")]
    #[strum(serialize = "LC")]
    SaintLucia,
    #[serde(rename = "MF", alias = "mf")]
    #[strum(serialize = "MF")]
    SaintMartinFench,
    #[serde(rename = "PM", alias = "pm")]
    #[strum(serialize = "PM")]
    SaintPierreAndMiquelon,
    #[serde(rename = "VC", alias = "vc")]
    #[strum(serialize = "VC")]
    SaintVincentAndTheGrenadines,
    #[serde(rename = "WS", alias = "ws")]
    #[strum(serialize = "WS")]
    Samoa,
    #[serde(rename = "SM", alias = "sm")]
    #[strum(serialize = "SM")]
    SanMarino,
    #[serde(rename = "ST", alias = "st")]
    #[strum(serialize = "ST")]
    SaoTomeAndPrincipe,
    #[serde(rename = "SA", alias = "sa")]
    #[strum(serialize = "SA")]
    SaudiArabia,
    #[serde(rename = "SN", alias = "sn")]
    #[strum(serialize = "SN")]
    Senegal,
    #[serde(rename = "RS", alias = "rs")]
    #[strum(serialize = "RS")]
    Serbia,
    #[serde(rename = "SC", alias = "sc")]
    #[strum(serialize = "SC")]
    Seychelles,
    #[serde(rename = "SL", alias = "sl")]
    #[strum(serialize = "SL")]
    SierraLeone,
    #[serde(rename = "SG", alias = "sg")]
    #[strum(serialize = "SG")]
    Singapore,
    #[serde(rename = "SX", alias = "sx")]
    #[strum(serialize = "SX")]
    SintMaartenDutch,
    #[serde(rename = "SK", alias = "sk")]
    #[strum(serialize = "SK")]
    Slovakia,
    #[serde(rename = "SI", alias = "si")]
    #[strum(serialize = "SI")]
    Slovenia,
    #[serde(rename = "SB", alias = "sb")]
    #[strum(serialize = "SB")]
    SolomonIslands,
    #[serde(rename = "SO", alias = "so")]
    #[strum(serialize = "SO")]
    Somalia,
    #[serde(rename = "ZA", alias = "za")]
    #[strum(serialize = "ZA")]
    SouthAfrica,
    #[serde(rename = "GS", alias = "gs")]
    #[strum(serialize = "GS")]
    SouthGeorgiaAndTheSouthSandwichIslands,
    #[serde(rename = "SS", alias = "ss")]
    #[strum(serialize = "SS")]
    SouthSudan,
    #[serde(rename = "ES", alias = "es")]
    #[strum(serialize = "ES")]
    Spain,
    #[serde(rename = "LK", alias = "lk")]
    #[strum(serialize = "LK")]
    SriLanka,
    #[serde(rename = "SD", alias = "sd")]
    #[strum(serialize = "SD")]
    Sudan,
    #[serde(rename = "SR", alias = "sr")]
    #[strum(serialize = "SR")]
    Suriname,
    #[serde(rename = "SJ", alias = "sj")]
    #[strum(serialize = "SJ")]
    SvalbardAndJanMayen,
    #[serde(rename = "SZ", alias = "sz")]
    #[strum(serialize = "SZ")]
    Swaziland,
    #[serde(rename = "SE", alias = "se")]
    #[strum(serialize = "SE")]
    Sweden,
    #[serde(rename = "CH", alias = "ch")]
    #[strum(serialize = "CH")]
    Switzerland,
    #[serde(rename = "SY", alias = "sy")]
    #[strum(serialize = "SY")]
    SyrianArabRepublic,
    #[serde(rename = "TW", alias = "tw")]
    #[strum(serialize = "TW")]
    Taiwan,
    #[serde(rename = "TJ", alias = "tj")]
    #[strum(serialize = "TJ")]
    Tajikistan,
    #[serde(rename = "TZ", alias = "tz")]
    #[strum(serialize = "TZ")]
    Tanzania,
    #[serde(rename = "TH", alias = "th")]
    #[strum(serialize = "TH")]
    Thailand,
    #[serde(rename = "TL", alias = "tl")]
    #[strum(serialize = "TL")]
    TimorLeste,
    #[serde(rename = "TG", alias = "tg")]
    #[strum(serialize = "TG")]
    Togo,
    #[serde(rename = "TK", alias = "tk")]
    #[strum(serialize = "TK")]
    Tokelau,
    #[serde(rename = "TO", alias = "to")]
    #[strum(serialize = "TO")]
    Tonga,
    #[serde(rename = "TT", alias = "tt")]
    #[strum(serialize = "TT")]
    TrinidadAndTobago,
    #[serde(rename = "TN", alias = "tn")]
    #[strum(serialize = "TN")]
    Tunisia,
    #[serde(rename = "TR", alias = "tr")]
    #[strum(serialize = "TR")]
    Turkey,
    #[serde(rename = "TM", alias = "tm")]
    #[strum(serialize = "TM")]
    Turkmenistan,
    #[serde(rename = "TC", alias = "tc")]
    #[strum(serialize = "TC")]
    TurksAndCaicosIslands,
    #[serde(rename = "TV", alias = "tv")]
    #[strum(serialize = "TV")]
    Tuvalu,
    #[serde(rename = "UG", alias = "ug")]
    #[strum(serialize = "UG")]
    Uganda,
    #[serde(rename = "UA", alias = "ua")]
    #[strum(serialize = "UA")]
    Ukraine,
    #[serde(rename = "AE", alias = "ae")]
    #[strum(serialize = "AE")]
    UnitedArabEmirates,
    #[serde(rename = "GB", alias = "gb")]
    #[strum(serialize = "GB")]
    UnitedKingdomOfGreatBritainAndNorthernIreland,
    #[serde(rename = "US", alias = "us")]
    #[strum(serialize = "US")]
    UnitedStatesOfAmerica,
    #[serde(rename = "UM", alias = "um")]
    #[strum(serialize = "UM")]
    UnitedStatesMinorOutlyingIslands,
    #[serde(rename = "UY", alias = "uy")]
    #[strum(serialize = "UY")]
    Uruguay,
    #[serde(rename = "UZ", alias = "uz")]
    #[strum(serialize = "UZ")]
    Uzbekistan,
    #[serde(rename = "VU", alias = "vu")]
    #[strum(serialize = "VU")]
    Vanuatu,
    #[serde(rename = "VE", alias = "ve")]
    #[strum(serialize = "VE")]
    Venezuela,
    #[serde(rename = "VN", alias = "vn")]
    #[strum(serialize = "VN")]
    VietNam,
    #[serde(rename = "VG", alias = "vg")]
    #[strum(serialize = "VG")]
    VirginIslandsBritish,
    #[serde(rename = "VI", alias = "vi")]
    #[strum(serialize = "VI")]
    VirginIslandsUs,
    #[serde(rename = "WF", alias = "wf")]
    #[strum(serialize = "WF")]
    WallisAndFutuna,
    #[serde(rename = "EH", alias = "eh")]
    #[strum(serialize = "EH")]
    WesternSahara,
    #[serde(rename = "YE", alias = "ye")]
    #[strum(serialize = "YE")]
    Yemen,
    #[serde(rename = "ZM", alias = "zm")]
    #[strum(serialize = "ZM")]
    Zambia,
    #[serde(rename = "ZW", alias = "zw")]
    #[strum(serialize = "ZW")]
    Zimbabwe,
}
