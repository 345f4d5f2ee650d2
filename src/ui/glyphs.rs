//! Text-art for the planet, stars and the large countdown digits.

pub const PLANET: [&str; 7] = [
    "        .-~~~~~-.        ",
    "      .'  .   o  '.      ",
    "  ___/  o    .     \\___  ",
    " (___      O     .  ___) ",
    "     \\  .     o    /     ",
    "      '.    .    .'      ",
    "        '-.....-'        ",
];

pub const STAR_SMALL: [&str; 3] = ["   ", " ✦ ", "   "];
pub const STAR_LARGE: [&str; 3] = ["\\│/", "─✦─", "/│\\"];

pub const DIGIT_HEIGHT: usize = 5;

const DIGITS: [[&str; DIGIT_HEIGHT]; 10] = [
    ["███", "█ █", "█ █", "█ █", "███"],
    ["  █", "  █", "  █", "  █", "  █"],
    ["███", "  █", "███", "█  ", "███"],
    ["███", "  █", "███", "  █", "███"],
    ["█ █", "█ █", "███", "  █", "  █"],
    ["███", "█  ", "███", "  █", "███"],
    ["███", "█  ", "███", "█ █", "███"],
    ["███", "  █", "  █", "  █", "  █"],
    ["███", "█ █", "███", "█ █", "███"],
    ["███", "█ █", "███", "  █", "███"],
];

/// Render `n` as rows of block digits separated by a blank column.
pub fn big_number(n: u32) -> [String; DIGIT_HEIGHT] {
    let digits: Vec<usize> = n
        .to_string()
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(|d| d as usize)
        .collect();
    std::array::from_fn(|row| {
        digits
            .iter()
            .map(|d| DIGITS[*d][row])
            .collect::<Vec<_>>()
            .join(" ")
    })
}
