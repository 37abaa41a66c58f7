mod args;

use anyhow::{bail, Context, Result};
use args::{CliArgs, Command};
use chromakit_app_shell::{
    copy_with_toast, family_rows, Catalog, ContrastCard, GradientCard, ShellConfig,
    SystemClipboard,
};
use chromakit_ui_graphics::{best_text_color, parse_color_tokens, Color};
use clap::Parser;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let args = CliArgs::parse();
    run(args.command)
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Search { query } => {
            let colors = parse_color_tokens(&query.join(" "));
            if colors.is_empty() {
                log::info!("No colors recognised; use #RGB, #RRGGBB or rgb(r, g, b)");
            }
            for color in colors {
                println!("{}  {}", color, color.rgb_string());
            }
        }
        Command::Convert { color } => {
            let color = parse_color(&color)?;
            let hsv = color.to_hsv();
            let hsl = color.to_hsl();
            println!("hex  {}", color);
            println!("rgb  {}", color.rgb_string());
            println!("hsv  {:.0}°, {:.0}%, {:.0}%", hsv.h(), hsv.s(), hsv.v());
            println!("hsl  {:.0}°, {:.0}%, {:.0}%", hsl.h(), hsl.s(), hsl.l());
            println!("text {}", best_text_color(color));
        }
        Command::Family { seed, steps } => {
            let config = ShellConfig::default().with_family_steps(steps);
            let seed = parse_color(&seed)?;
            println!("Family of {} · {}", seed, seed.rgb_string());
            for row in family_rows(seed, config.family_steps) {
                println!(
                    "{}  {:<18} text {} ({}){}",
                    row.member.hex,
                    row.member.rgb_string,
                    row.text_color,
                    row.ratio,
                    if row.needs_backplate { " backplate" } else { "" }
                );
            }
        }
        Command::Contrast {
            foreground,
            background,
        } => {
            let cards = match (foreground, background) {
                (Some(fg), Some(bg)) => {
                    vec![ContrastCard::new("Az", parse_color(&fg)?, parse_color(&bg)?)]
                }
                (None, None) => Catalog::builtin()
                    .contrast_pairs()
                    .iter()
                    .map(ContrastCard::from)
                    .collect(),
                _ => bail!("give both a foreground and a background, or neither"),
            };
            for card in cards {
                println!(
                    "{} on {}  {:>8}  {}",
                    card.foreground,
                    card.background,
                    card.ratio_label(),
                    card.level().label()
                );
            }
        }
        Command::Gradients => {
            for card in Catalog::builtin().gradients().iter().cloned().map(GradientCard::new) {
                println!("{}", card.css_declaration());
                let stops: Vec<String> = card
                    .swatch_hexes()
                    .into_iter()
                    .zip(card.position_labels())
                    .map(|(hex, position)| format!("{hex} @ {position}"))
                    .collect();
                println!("    {}", stops.join(", "));
            }
        }
        Command::Palette { columns } => {
            let config = ShellConfig::default().with_palette_columns(columns);
            let catalog = Catalog::builtin();
            for row in catalog.palette_rows(config.palette_columns) {
                let line: Vec<String> = row.iter().map(Color::to_hex).collect();
                println!("{}", line.join(" "));
            }
        }
        Command::Copy { text } => {
            let config = ShellConfig::default();
            let mut clipboard = SystemClipboard::new();
            match copy_with_toast(&mut clipboard, &text, config.toast_duration) {
                Some(toast) => println!("Copied {}", toast.text),
                None => log::warn!("Clipboard unavailable; nothing copied"),
            }
        }
    }
    Ok(())
}

fn parse_color(text: &str) -> Result<Color> {
    Color::from_hex(text).with_context(|| format!("not a HEX color: {text:?}"))
}

#[cfg(test)]
#[path = "tests/cli_tests.rs"]
mod tests;
