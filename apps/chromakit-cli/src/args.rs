use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "chromakit", version, about, long_about = None)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Clone, Subcommand)]
pub enum Command {
    /// Find every HEX or rgb() color in free text
    Search {
        /// e.g. "#FF5733, rgb(255, 87, 51) #0f0"
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },
    /// Show one color as HEX, RGB, HSV and HSL
    Convert { color: String },
    /// Tonal family of a seed color
    Family {
        seed: String,
        #[arg(long, default_value_t = 5)]
        steps: usize,
    },
    /// WCAG contrast between two colors, or the built-in samples
    Contrast {
        foreground: Option<String>,
        background: Option<String>,
    },
    /// Built-in gradients as CSS
    Gradients,
    /// Built-in palette seeds as a grid
    Palette {
        #[arg(long, default_value_t = 10)]
        columns: usize,
    },
    /// Copy text to the system clipboard
    Copy { text: String },
}
