// File: crates/marquee-core/src/showcase.rs
// Summary: Built-in demo catalog, portfolio rows, and detail pages with OHLCV feeds.

use crate::bars::BarSeries;
use crate::candles::OhlcvPoint;
use crate::catalog::{CatalogEntry, CatalogTag};

/// Platform picker values, the match-all selector first.
pub const PLATFORMS: [&str; 7] = [
    "All Platforms",
    "Netflix",
    "Prime Video",
    "Hulu",
    "Paramount+",
    "HBO Max",
    "A24",
];

/// Poster asset names cycled by the home carousel.
pub const CAROUSEL_POSTERS: [&str; 6] = [
    "CosmicFront",
    "Crimson",
    "Echosofthepast",
    "NeoncityLights",
    "StarlightSerenade",
    "WhispersoftheDead",
];

/// The full seeded catalog. Eight entries, so the default page size
/// splits it across two pages.
pub fn catalog() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::new("The Cosmic Front", "Prime Video", "Dec 2024", "cosmic", Some(CatalogTag::HotPick)),
        CatalogEntry::new("Echoes of the Past", "A24", "Jan 2025", "echoes", Some(CatalogTag::Trending)),
        CatalogEntry::new("Neon City Nights", "Netflix", "Nov 2024", "neoncity", Some(CatalogTag::LowRisk)),
        CatalogEntry::new("Whispers of the Dead", "HBO Max", "Feb 2025", "whispers", None),
        CatalogEntry::new("Starlight Serenade", "Hulu", "Mar 2025", "starlight", None),
        CatalogEntry::new("Crimson", "Paramount+", "Apr 2025", "crimson", None),
        CatalogEntry::new("The Glass Orchard", "A24", "Jun 2025", "orchard", None),
        CatalogEntry::new("Paper Satellites", "Hulu", "Jul 2025", "satellites", Some(CatalogTag::Trending)),
    ]
}

/// Catalog entries carrying a promotional tag, for the trending strip.
pub fn trending() -> Vec<CatalogEntry> {
    catalog().into_iter().filter(|e| e.tag.is_some()).collect()
}

/// One holding on the portfolio screen, with its weekly gain/loss bars.
#[derive(Clone, Debug)]
pub struct PortfolioRow {
    pub title: String,
    pub platform: String,
    pub poster: String,
    pub invested: String,
    pub gain: String,
    pub summary: String,
    pub series: BarSeries,
}

/// The two seeded holdings.
pub fn portfolio() -> Vec<PortfolioRow> {
    vec![
        PortfolioRow {
            title: "The Cosmic Front".to_string(),
            platform: "Prime Video".to_string(),
            poster: "CosmicFront".to_string(),
            invested: "₹10,000".to_string(),
            gain: "+₹2,000".to_string(),
            summary: "A visually stunning sci-fi epic about humanity's journey to the edge \
                      of the universe, blending breathtaking visuals with a gripping story \
                      of hope and discovery."
                .to_string(),
            series: BarSeries::new(vec![2000.0, 1000.0, -500.0, 1500.0, 2000.0, -1000.0, 500.0], 0.0, 2000.0),
        },
        PortfolioRow {
            title: "Neon City Lights".to_string(),
            platform: "Netflix".to_string(),
            poster: "NeoncityLights".to_string(),
            invested: "₹15,000".to_string(),
            gain: "+₹4,000".to_string(),
            summary: "A neon-drenched thriller set in a futuristic metropolis, where \
                      ambition and danger collide in a race for survival and fortune."
                .to_string(),
            series: BarSeries::new(vec![1000.0, -500.0, 2000.0, 500.0, -1500.0, 2000.0, 1000.0], -1500.0, 2000.0),
        },
    ]
}

/// Credited person on a detail page.
#[derive(Clone, Debug)]
pub struct CastMember {
    pub name: String,
    pub credit: String,
    pub portrait: String,
}

impl CastMember {
    fn new(name: &str, credit: &str, portrait: &str) -> Self {
        Self { name: name.to_string(), credit: credit.to_string(), portrait: portrait.to_string() }
    }
}

/// Everything one investment detail page shows: copy, cast, and the
/// trading feed behind the candle chart.
#[derive(Clone, Debug)]
pub struct DetailPage {
    pub title: String,
    pub platform: String,
    pub poster: String,
    pub synopsis: String,
    pub pitch: String,
    pub token_line: String,
    pub cast: Vec<CastMember>,
    pub series: Vec<OhlcvPoint>,
}

/// The seeded detail pages, in presentation order.
pub fn detail_pages() -> Vec<DetailPage> {
    vec![cosmic_front(), neon_city_lights()]
}

pub fn cosmic_front() -> DetailPage {
    DetailPage {
        title: "Cosmic Front".to_string(),
        platform: "Prime Video".to_string(),
        poster: "CosmicFront".to_string(),
        synopsis: "A visually stunning sci-fi epic about humanity's journey to the edge of \
                   the universe, blending breathtaking visuals with a gripping story of hope \
                   and discovery. Cosmic Front takes you on an unforgettable adventure \
                   through space, time, and the human spirit."
            .to_string(),
        pitch: "Cosmic Front is trending due to its visionary direction, star-studded cast, \
                and groundbreaking visual effects. With a massive fan following and critical \
                acclaim, it presents a unique opportunity for investors to be part of a \
                cinematic revolution. Early investors are already seeing significant returns \
                as the film garners global attention and box office momentum."
            .to_string(),
        token_line: "Invest now with only 1 token Rs 2000 + G.S.T and get returns upto 3% per month"
            .to_string(),
        cast: vec![
            CastMember::new("Christopher Nolan", "Director", "Christopher"),
            CastMember::new("Chris Hemsworth", "Cast", "Chris"),
            CastMember::new("Scarlett Johansson", "Cast", "Scarlet"),
        ],
        series: series(&[
            (100.0, 120.0, 125.0, 95.0, 2000.0),
            (120.0, 110.0, 130.0, 105.0, 1800.0),
            (110.0, 140.0, 145.0, 108.0, 2500.0),
            (140.0, 135.0, 150.0, 130.0, 2200.0),
            (135.0, 160.0, 165.0, 130.0, 3000.0),
            (160.0, 155.0, 170.0, 150.0, 2100.0),
            (155.0, 180.0, 185.0, 150.0, 3200.0),
            (180.0, 175.0, 190.0, 170.0, 2000.0),
            (175.0, 200.0, 205.0, 170.0, 3500.0),
            (200.0, 195.0, 210.0, 190.0, 2300.0),
        ]),
    }
}

pub fn neon_city_lights() -> DetailPage {
    DetailPage {
        title: "NeonCityLights".to_string(),
        platform: "Netflix".to_string(),
        poster: "NeonCityLight".to_string(),
        synopsis: "In the pulsing heart of a neon-drenched metropolis, NeonCityLights weaves \
                   a mesmerizing tale of ambition and redemption, where every street corner \
                   tells a story and every light holds a secret."
            .to_string(),
        pitch: "NeonCityLights is capturing the market's imagination with its unique blend \
                of visual storytelling and star power. The film's buzz is driving investor \
                interest, with early backers seeing strong momentum as anticipation builds \
                for its global release. The urban sci-fi genre is trending, and \
                NeonCityLights is poised to be a breakout hit for both audiences and \
                investors."
            .to_string(),
        token_line: "Investment Starts with only 1 token Rs 1756 + G.S.T".to_string(),
        cast: vec![
            CastMember::new("Martin Scorsese", "Director", "Martin"),
            CastMember::new("Chris Evans", "Cast", "Chris1"),
            CastMember::new("Emma Watson", "Cast", "Emma"),
        ],
        series: series(&[
            (80.0, 100.0, 110.0, 75.0, 1800.0),
            (100.0, 90.0, 115.0, 85.0, 1600.0),
            (90.0, 120.0, 125.0, 88.0, 2200.0),
            (120.0, 115.0, 130.0, 110.0, 2100.0),
            (115.0, 140.0, 145.0, 110.0, 2700.0),
            (140.0, 135.0, 150.0, 130.0, 1900.0),
            (135.0, 160.0, 165.0, 130.0, 3000.0),
            (160.0, 155.0, 170.0, 150.0, 1700.0),
            (155.0, 180.0, 185.0, 150.0, 3200.0),
            (180.0, 175.0, 190.0, 170.0, 2100.0),
        ]),
    }
}

fn series(rows: &[(f64, f64, f64, f64, f64)]) -> Vec<OhlcvPoint> {
    rows.iter().map(|&(o, c, h, l, v)| OhlcvPoint::new(o, c, h, l, v)).collect()
}
