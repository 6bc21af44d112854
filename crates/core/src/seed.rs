//! Baseline trips inserted by the seed operation.
//!
//! Seeding is keyed on `title`: entries whose title already exists in the store
//! are skipped, so renaming an entry here inserts it again.

use crate::trip::{Trip, TripLocation};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn trip(
    title: &str,
    date_text: &str,
    people: &[&str],
    description: &str,
    locations: Vec<TripLocation>,
    photo_placeholders: &[&str],
    video_urls: &[&str],
) -> Trip {
    Trip {
        title: title.to_string(),
        date_text: date_text.to_string(),
        people: strings(people),
        description: Some(description.to_string()),
        locations,
        photo_placeholders: strings(photo_placeholders),
        video_urls: strings(video_urls),
    }
}

fn loc(code: &str, name: &str, city: &str, lat: f64, lon: f64) -> TripLocation {
    TripLocation::new(code, name).city(city).coords(lat, lon)
}

/// The fixed seed dataset, in insertion order.
pub fn seed_trips() -> Vec<Trip> {
    vec![
        trip(
            "Den Haag, Niederlande",
            "Mai 2019 (genauer Zeitraum nicht mehr erinnerlich)",
            &["gesamte Schulklasse"],
            "Klassenausflug ans Meer, Strandbesuch und kleine Stadttour.",
            vec![loc("NLD", "Niederlande", "Den Haag", 52.0705, 4.3007)],
            &["Strandbild", "Gruppenfoto Klasse", "Häuser in Den Haag"],
            &[],
        ),
        trip(
            "Dublin, Irland",
            "Juli 2019",
            &["ich", "meine Mutter", "meine Schwester Shelly"],
            "Besuch bei meiner Schwester, die dort als Au-Pair gearbeitet hat; Natur und Stadt.",
            vec![loc("IRL", "Irland", "Dublin", 53.3498, -6.2603)],
            &["Familienfoto", "Natur Dublin"],
            &[],
        ),
        trip(
            "Hurghada, Ägypten",
            "Oktober 2019 (genaues Datum nicht mehr verfügbar)",
            &["ich", "meine Mutter"],
            "Abenteuerurlaub mit Quad-Tour, Kameltour und Wüstenausflug.",
            vec![loc("EGY", "Ägypten", "Hurghada", 27.2579, 33.8116)],
            &["Quad", "Wüste", "Kamele"],
            &[],
        ),
        trip(
            "Warschau, Polen",
            "17.–21. April 2023",
            &["Chris Lammel", "Kiran Odell", "Leon Morgenschweiß", "Anton Pfaff", "ich"],
            "Städtetrip, Nachtleben, Shooting-Range (Pistole), Fotos auf Hochhäusern.",
            vec![loc("POL", "Polen", "Warschau", 52.2297, 21.0122)],
            &["Hochhaus"],
            &["https://www.youtube.com/watch?v=dQw4w9WgXcQ"],
        ),
        trip(
            "Budapest, Ungarn",
            "23.–29. Juni 2024",
            &["Peter Rentler", "Jeremy Penzien", "Luca Malik", "ich"],
            "Urlaub mit Online-Freundesgruppe, Stadt, Bootstour, Luxusrestaurant, Club.",
            vec![loc("HUN", "Ungarn", "Budapest", 47.4979, 19.0402)],
            &["Gruppenfoto", "Bootstour", "Restaurant", "Club"],
            &[],
        ),
        trip(
            "Frankreich – Monaco – Italien (Mehrländer-Reise)",
            "10.–22. August 2024",
            &["Anton Pfaff", "Chris Lammel", "Kiran Odell", "ich"],
            "Zug/Interrail-Reise, Strand, Meer, Sightseeing, Städte und Natur.",
            vec![
                loc("FRA", "Frankreich", "Aix-en-Provence", 43.5297, 5.4474),
                loc("FRA", "Frankreich", "Nizza", 43.7102, 7.2620),
                loc("MCO", "Monaco", "Monaco", 43.7384, 7.4246),
                loc("ITA", "Italien", "Bonassola", 44.1799, 9.5835),
                loc("ITA", "Italien", "Mailand", 45.4642, 9.1900),
            ],
            &["Aix-en-Provence", "Nizza", "Monaco", "Bonassola", "Mailand", "Gruppenfoto"],
            &[],
        ),
        trip(
            "Gáldar, Gran Canaria (Spanien)",
            "14.–17. November 2024",
            &["Kiran O’Dell", "ich"],
            "Inseltrip mit Rollerfahrten, Natur, mein erstes eigenes Urlaubsvideo.",
            vec![loc("ESP", "Spanien", "Gáldar (Gran Canaria)", 28.1445, -15.6504)],
            &["Natur Gran Canaria", "Stadt Gáldar"],
            &["https://youtu.be/SGeLnxvfIsI"],
        ),
        trip(
            "Ukkel, Belgien",
            "Dezember 2024 (genauer Zeitraum nicht mehr verfügbar)",
            &["Luca Malic", "Peter Rändler", "Jeremy Penzien", "ich"],
            "Airbnb-Aufenthalt, Stadt, Ausflüge, Video.",
            vec![loc("BEL", "Belgien", "Ukkel", 50.8020, 4.3572)],
            &["Airbnb", "Stadt Ukkel"],
            &["https://youtu.be/kO34SsLgHoY"],
        ),
        trip(
            "Cúbelles & Barcelona, Spanien",
            "1.–6. September 2025",
            &[
                "Leon Morgenschweiß",
                "Chris Lammel",
                "Kiran Odell",
                "Anton Pfaff",
                "ich",
                "Louis Schäfer",
                "Fabian Stork",
                "Patrick Mauler",
            ],
            "Unterkunft in Cúbelles, tägliche Mietwagenfahrten nach Barcelona, Strand, Stadt, Nachtleben.",
            vec![
                loc("ESP", "Spanien", "Cúbelles", 41.1950, 1.6364),
                loc("ESP", "Spanien", "Barcelona", 41.3874, 2.1686),
            ],
            &["Gruppenfoto", "Strand Cúbelles", "Barcelona Stadt", "Nachtleben"],
            &["https://youtu.be/1ZJsD6BcUNo"],
        ),
        trip(
            "Montenegro (Bucht von Kotor & Rundreise)",
            "Datum nicht exakt erinnerlich",
            &["Kiran O’Dell", "ich"],
            "Mietwagen-Rundreise durch ganz Montenegro, Landschaften, Straßen, Küstenorte, Airbnb in Dobrota.",
            vec![
                loc("MNE", "Montenegro", "Kotor (Bucht)", 42.4247, 18.7712),
                loc("MNE", "Montenegro", "Dobrota", 42.4576, 18.7684),
            ],
            &["Bucht von Kotor", "Landschaft Montenegro", "Airbnb Dobrota"],
            &["https://youtu.be/i6UApGouaDE"],
        ),
        trip(
            "Brüssel, Belgien",
            "Datum nicht dokumentiert",
            &[],
            "Städtetrip nach Brüssel.",
            vec![loc("BEL", "Belgien", "Brüssel", 50.8503, 4.3517)],
            &["Brüssel Stadt"],
            &["https://youtu.be/kO34SsLgHoY"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::validate::check_trip;

    #[test]
    fn has_eleven_entries() {
        assert_eq!(seed_trips().len(), 11);
    }

    #[test]
    fn titles_are_unique() {
        let trips = seed_trips();
        let titles: HashSet<&str> = trips.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles.len(), trips.len());
    }

    #[test]
    fn every_entry_passes_validation() {
        for trip in seed_trips() {
            if let Err(errors) = check_trip(&trip) {
                panic!("seed trip '{}' is invalid: {}", trip.title, errors);
            }
        }
    }

    #[test]
    fn country_codes_are_alpha3() {
        for trip in seed_trips() {
            for loc in &trip.locations {
                assert_eq!(loc.country_code.len(), 3, "{}", trip.title);
                assert!(loc.country_code.chars().all(|c| c.is_ascii_uppercase()));
            }
        }
    }

    #[test]
    fn multi_country_trip_keeps_location_order() {
        let trips = seed_trips();
        let interrail = trips
            .iter()
            .find(|t| t.title.starts_with("Frankreich"))
            .unwrap();
        let cities: Vec<&str> = interrail
            .locations
            .iter()
            .filter_map(|l| l.city.as_deref())
            .collect();
        assert_eq!(cities, vec!["Aix-en-Provence", "Nizza", "Monaco", "Bonassola", "Mailand"]);
    }
}
