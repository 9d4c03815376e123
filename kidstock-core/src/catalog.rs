//! Default instrument roster, news pool and index baskets.

use crate::domain::{Direction, Listing, NewsEvent};
use std::collections::BTreeMap;

/// Symbols that make up the default "US" index basket.
pub const US_SYMBOLS: &[&str] = &[
    "KO", "PEP", "MCD", "SBUX", "DIS", "MARV", "DC", "NIN", "NFLX", "SONY", "AAPL", "GOOG",
];

/// Symbols that make up the default "KR" index basket.
pub const KR_SYMBOLS: &[&str] = &["005930.KQ", "005380.KQ", "KAKAO", "NAVER"];

/// The default roster of kid-friendly companies.
pub fn default_listings() -> Vec<Listing> {
    vec![
        Listing::new("KO", "Coca-Cola", "A drink company loved all over the world"),
        Listing::new("PEP", "Pepsi", "The other hero of the cola wars"),
        Listing::new("MCD", "McDonald's", "The burger chain famous for the Big Mac"),
        Listing::new("BKG", "Burger King", "Global fast food, home of the Whopper"),
        Listing::new("KFC", "KFC", "The fast food you think of for fried chicken"),
        Listing::new("SBUX", "Starbucks", "The biggest coffee chain in the world"),
        Listing::new("DUNK", "Dunkin' Donuts", "A doughnut and coffee brand"),
        Listing::new("CRIS", "Krispy Kreme", "Famous for sweet glazed doughnuts"),
        Listing::new("DIS", "Disney", "Mickey Mouse and Disneyland"),
        Listing::new("MARV", "Marvel", "Iron Man, Spider-Man and other superheroes"),
        Listing::new("DC", "DC Comics", "The world of Batman and Superman"),
        Listing::new("SONY", "Sony", "The maker of PlayStation"),
        Listing::new("NIN", "Nintendo", "Mario and Zelda"),
        Listing::new("LEGO", "LEGO", "Building blocks kids love"),
        Listing::new("MAT", "Mattel", "The home of Barbie"),
        Listing::new("HAS", "Hasbro", "Transformers and board games"),
        Listing::new("POKE", "Pokemon", "Pikachu and friends"),
        Listing::new("PIKA", "Pikachu", "The icon of Pokemon"),
        Listing::new("DORA", "Doraemon", "A beloved Japanese character"),
        Listing::new("CRAY", "Crayon Shin-chan", "The unstoppable Shin-chan"),
        Listing::new("TOY", "Toy Story", "Pixar's best-known film"),
        Listing::new("SPON", "SpongeBob", "The yellow character under the sea"),
        Listing::new("AAPL", "Apple", "The company behind the iPhone"),
        Listing::new("GOOG", "Google", "Organises the world's information"),
        Listing::new("005930.KQ", "Samsung Electronics", "Korea's pride in semiconductors"),
        Listing::new("005380.KQ", "Hyundai Motor", "A car maker"),
        Listing::new("KAKAO", "Kakao", "The company behind KakaoTalk"),
        Listing::new("NAVER", "Naver", "Search and webtoon platform"),
        Listing::new("NFLX", "Netflix", "Streaming dramas and movies"),
    ]
}

/// The default news pool.
pub fn default_news() -> Vec<NewsEvent> {
    vec![
        NewsEvent::per_instrument("Coca-Cola's new drink is a hit!", &[("KO", 0.05)]),
        NewsEvent::per_instrument("Rising costs squeeze Pepsi's profits", &[("PEP", -0.04)]),
        NewsEvent::per_instrument("McDonald's sales strong worldwide", &[("MCD", 0.03)]),
        NewsEvent::per_instrument("Nintendo's new Mario game is a smash", &[("NIN", 0.06)]),
        NewsEvent::per_instrument("Excitement builds for Apple's new device", &[("AAPL", 0.05)]),
        NewsEvent::per_instrument("Google AI service makes headlines", &[("GOOG", 0.04)]),
        NewsEvent::per_instrument("Samsung rides a chip boom", &[("005930.KQ", 0.06)]),
        NewsEvent::per_instrument("Hyundai's new model is popular", &[("005380.KQ", 0.04)]),
        NewsEvent::per_instrument("Kakao platform outage", &[("KAKAO", -0.03)]),
        NewsEvent::per_instrument("Naver webtoon is a hit", &[("NAVER", 0.03)]),
        NewsEvent::per_instrument("Netflix original is a hit", &[("NFLX", 0.05)]),
        NewsEvent::market_wide("Recession worries pull the whole market down", Direction::Down),
        NewsEvent::market_wide("Tech rally lifts the whole market", Direction::Up),
    ]
}

/// Named index baskets shown on the market board.
pub fn default_indices() -> BTreeMap<String, Vec<String>> {
    let mut indices = BTreeMap::new();
    indices.insert(
        "US".into(),
        US_SYMBOLS.iter().map(|s| s.to_string()).collect(),
    );
    indices.insert(
        "KR".into(),
        KR_SYMBOLS.iter().map(|s| s.to_string()).collect(),
    );
    indices
}

/// News events that name `symbol` directly.
pub fn news_mentioning<'a>(pool: &'a [NewsEvent], symbol: &str) -> Vec<&'a NewsEvent> {
    pool.iter().filter(|n| n.mentions(symbol)).collect()
}
