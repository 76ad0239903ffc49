use std::sync::LazyLock;

use routemap::{Cost, RouteMap};

pub type StationMap = RouteMap<&'static str>;

/// Train network around Tokyo, link costs are travel times in minutes.
pub static STATION_MAP: LazyLock<StationMap> = LazyLock::new(|| {
    station_map(&[
        ("Yokohama", "Kawasaki", 14.0),
        ("Kawasaki", "Tokyo", 24.0),
        ("Tokyo", "Akihabara", 6.0),
        ("Akihabara", "Tabata", 11.0),
        ("Tabata", "Akabane", 14.0),
        ("Akabane", "MinamiUrawa", 16.0),
        ("MinamiUrawa", "Omiya", 12.0),
        ("Yokohama", "MusashiKosugi", 23.0),
        ("Kawasaki", "MusashiKosugi", 19.0),
        ("MusashiKosugi", "NishiKokubunji", 50.0),
        ("NishiKokubunji", "MinamiUrawa", 36.0),
        ("MusashiKosugi", "Shibuya", 21.0),
        ("Shibuya", "Shinjuku", 10.0),
        ("Shibuya", "Tokyo", 25.0),
        ("Shinjuku", "NishiKokubunji", 32.0),
        ("Shinjuku", "Ikebukuro", 11.0),
        ("Shinjuku", "Ochanomizu", 16.0),
        ("Tokyo", "Ochanomizu", 10.0),
        ("Ochanomizu", "Akihabara", 8.0),
        ("Ikebukuro", "Tabata", 12.0),
        ("Ikebukuro", "Akabane", 15.0),
        ("Yokohama", "AAA", 999.0),
        ("NishiKokubunji", "BBB", 888.0),
    ])
});

/// Southern part of the train network.
pub static REDUCED_STATION_MAP: LazyLock<StationMap> = LazyLock::new(|| {
    station_map(&[
        ("Yokohama", "Kawasaki", 14.0),
        ("Kawasaki", "Tokyo", 24.0),
        ("Yokohama", "MusashiKosugi", 23.0),
        ("Kawasaki", "MusashiKosugi", 19.0),
        ("MusashiKosugi", "Shibuya", 21.0),
        ("Shibuya", "Tokyo", 25.0),
    ])
});

fn station_map(links: &[(&'static str, &'static str, f64)]) -> StationMap {
    links
        .iter()
        .map(|&(a, b, minutes)| (a, b, Cost::from_minutes(minutes)))
        .collect()
}
