use super::*;

fn hexes(input: &str) -> Vec<String> {
    parse_color_tokens(input).iter().map(Color::to_hex).collect()
}

#[test]
fn mixed_hex_and_rgb_literals() {
    assert_eq!(
        hexes("#FFF, rgb(0,0,0) #123456"),
        vec!["#FFFFFF", "#000000", "#123456"]
    );
}

#[test]
fn garbage_yields_nothing() {
    assert!(parse_color_tokens("not-a-color").is_empty());
    assert!(parse_color_tokens("").is_empty());
    assert!(parse_color_tokens("  ,;; ").is_empty());
}

#[test]
fn duplicates_collapse_in_first_seen_order() {
    assert_eq!(
        hexes("#abc #AABBCC rgb(170,187,204) #000 #aabbcc"),
        vec!["#AABBCC", "#000000"]
    );
}

#[test]
fn rgb_channels_clamp_instead_of_failing() {
    assert_eq!(hexes("rgb(999, 256, 12)"), vec!["#FFFF0C"]);
}

#[test]
fn rgb_literal_may_contain_spaces_and_any_case() {
    assert_eq!(hexes("RGB( 255 , 87 , 51 )"), vec!["#FF5733"]);
}

#[test]
fn semicolons_and_newlines_separate_tokens() {
    assert_eq!(hexes("#111;#222\n#333\t#444"), vec!["#111111", "#222222", "#333333", "#444444"]);
}

#[test]
fn hex_tokens_require_the_hash() {
    assert!(parse_color_tokens("FFFFFF 123").is_empty());
}

#[test]
fn malformed_tokens_are_skipped_silently() {
    assert_eq!(
        hexes("#12345 rgb(1,2) rgb(1,2,3,4) #GGG #0f0 rgb(1234,0,0)"),
        vec!["#00FF00"]
    );
}
