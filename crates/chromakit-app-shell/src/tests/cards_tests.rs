use super::*;

#[test]
fn contrast_card_reports_ratio_and_level() {
    let card = ContrastCard::new("Az", Color::BLACK, Color::WHITE);
    assert_eq!(card.ratio_label(), "21.00:1");
    assert_eq!(card.level(), ContrastLevel::Aaa);
}

#[test]
fn contrast_card_from_catalog_pair() {
    let pair = ContrastPair {
        label: "Az".to_string(),
        foreground: Color::WHITE,
        background: Color::WHITE,
    };
    let card = ContrastCard::from(&pair);
    assert_eq!(card.label, "Az");
    assert_eq!(card.ratio_label(), "1.00:1");
    assert_eq!(card.level(), ContrastLevel::Fail);
}

#[test]
fn gradient_card_exposes_css_and_stops() {
    let gradient =
        LinearGradient::parse(90.0, &["#f44336 0%", "#FFC107 100%"]).expect("valid gradient");
    let card = GradientCard::new(gradient);

    assert_eq!(card.css(), "linear-gradient(90deg, #F44336 0%, #FFC107 100%)");
    assert_eq!(
        card.css_declaration(),
        "background-image: linear-gradient(90deg, #F44336 0%, #FFC107 100%);"
    );
    assert_eq!(card.swatch_hexes(), vec!["#F44336", "#FFC107"]);
    assert_eq!(card.position_labels(), vec!["0%", "100%"]);
}
