// SPDX-License-Identifier: GPL-3.0-only

use crate::core::palette::Rgb;

const SPRITE_BASE_URL: &str = "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon";

/// Transforms a kebab-case string into a space-separated string where each word starts with an uppercase letter.
pub fn capitalize_string(input: &str) -> String {
    let words: Vec<&str> = input.split('-').collect();

    let capitalized_words: Vec<String> = words
        .iter()
        .map(|word| {
            let mut chars = word.chars();
            if let Some(first_char) = chars.next() {
                first_char.to_uppercase().collect::<String>() + chars.as_str()
            } else {
                String::new()
            }
        })
        .collect();

    capitalized_words.join(" ")
}

/// Helper to scale some data from PokeApi such as weight...
/// scales a number down by dividing it by 10, converting it to a floating-point
pub fn scale_numbers(num: i64) -> f64 {
    (num as f64) / 10.0
}

/// Extracts the trailing numeric id of a resource url such as `.../pokemon/25/`
pub fn parse_id_from_url(url: &str) -> Option<i64> {
    let url = url.strip_suffix('/').unwrap_or(url);
    let digits_start = url
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_ascii_digit())
        .last()
        .map(|(index, _)| index)?;

    url[digits_start..].parse().ok()
}

/// Front sprite url for a Pokémon id
pub fn sprite_url(id: i64) -> String {
    format!("{SPRITE_BASE_URL}/{id}.png")
}

/// Short label shown next to a stat bar
pub fn stat_abbreviation(stat_name: &str) -> String {
    match stat_name {
        "hp" => String::from("HP"),
        "attack" => String::from("Atk"),
        "defense" => String::from("Def"),
        "special-attack" => String::from("SpAtk"),
        "special-defense" => String::from("SpDef"),
        "speed" => String::from("Spd"),
        other => capitalize_string(other),
    }
}

pub fn stat_color(stat_name: &str) -> Rgb {
    match stat_name {
        "hp" => Rgb::new(160, 200, 120),
        "attack" => Rgb::new(229, 80, 80),
        "defense" => Rgb::new(145, 200, 228),
        "special-attack" => Rgb::new(255, 144, 187),
        "special-defense" => Rgb::new(165, 148, 249),
        "speed" => Rgb::new(255, 235, 85),
        _ => Rgb::new(190, 190, 190),
    }
}

pub fn type_color(type_name: &str) -> Rgb {
    match type_name {
        "normal" => Rgb::new(0xA8, 0xA7, 0x7A),
        "fire" => Rgb::new(0xEE, 0x81, 0x30),
        "water" => Rgb::new(0x63, 0x90, 0xF0),
        "electric" => Rgb::new(0xF7, 0xD0, 0x2C),
        "grass" => Rgb::new(0x7A, 0xC7, 0x4C),
        "ice" => Rgb::new(0x96, 0xD9, 0xD6),
        "fighting" => Rgb::new(0xC2, 0x2E, 0x28),
        "poison" => Rgb::new(0xA3, 0x3E, 0xA1),
        "ground" => Rgb::new(0xE2, 0xBF, 0x65),
        "flying" => Rgb::new(0xA9, 0x8F, 0xF3),
        "psychic" => Rgb::new(0xF9, 0x55, 0x87),
        "bug" => Rgb::new(0xA6, 0xB9, 0x1A),
        "rock" => Rgb::new(0xB6, 0xA1, 0x36),
        "ghost" => Rgb::new(0x73, 0x57, 0x97),
        "dragon" => Rgb::new(0x6F, 0x35, 0xFC),
        "dark" => Rgb::new(0x70, 0x57, 0x46),
        "steel" => Rgb::new(0xB7, 0xB7, 0xCE),
        "fairy" => Rgb::new(0xD6, 0x85, 0xAD),
        _ => Rgb::new(0x68, 0xA0, 0x90),
    }
}

/// Splits a bar into (filled, empty) fill portions relative to `max`
pub fn stat_bar_portions(value: i64, max: i64) -> (u16, u16) {
    let max = max.clamp(1, u16::MAX as i64);
    let value = value.clamp(0, max);

    (value as u16, (max - value) as u16)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("https://pokeapi.co/api/v2/pokemon/25/", Some(25))]
    #[case("https://pokeapi.co/api/v2/pokemon/1025", Some(1025))]
    #[case("https://pokeapi.co/api/v2/pokemon/10001/", Some(10001))]
    #[case("https://pokeapi.co/api/v2/pokemon/", None)]
    #[case("", None)]
    fn parses_trailing_id(#[case] url: &str, #[case] expected: Option<i64>) {
        assert_eq!(parse_id_from_url(url), expected);
    }

    #[test]
    fn only_one_trailing_slash_is_trimmed() {
        assert_eq!(parse_id_from_url("https://pokeapi.co/api/v2/pokemon/7//"), None);
    }

    #[rstest]
    #[case("bulbasaur", "Bulbasaur")]
    #[case("mr-mime", "Mr Mime")]
    #[case("special-attack", "Special Attack")]
    #[case("", "")]
    fn capitalizes_kebab_case(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(capitalize_string(input), expected);
    }

    #[test]
    fn abbreviates_known_stats() {
        assert_eq!(stat_abbreviation("special-defense"), "SpDef");
        assert_eq!(stat_abbreviation("accuracy"), "Accuracy");
    }

    #[test]
    fn scales_hectograms_and_decimetres() {
        assert_eq!(scale_numbers(69), 6.9);
        assert_eq!(scale_numbers(0), 0.0);
    }

    #[rstest]
    #[case(90, 90, (90, 0))]
    #[case(45, 90, (45, 45))]
    #[case(0, 0, (0, 1))]
    #[case(120, 90, (90, 0))]
    fn normalizes_stat_bars(#[case] value: i64, #[case] max: i64, #[case] expected: (u16, u16)) {
        assert_eq!(stat_bar_portions(value, max), expected);
    }
}
