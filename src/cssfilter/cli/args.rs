use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "cssfilter", version)]
#[command(about = "Parse, tweak and reorder CSS filter values", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the filters in a value
    #[command(alias = "ls")]
    Show {
        /// Filter value (e.g. "blur(2px) sepia(50%)"), or - to read stdin
        css: String,
    },

    /// Append a filter
    Add {
        /// Filter value to edit, or - to read stdin
        css: String,

        /// Filter name (e.g. blur, hue-rotate)
        name: String,

        /// Value (e.g. 2px, 50%, 0.5); defaults to the kind's starting value
        #[arg(allow_hyphen_values = true)]
        value: Option<String>,
    },

    /// Remove one or more filters
    #[command(alias = "rm")]
    Remove {
        /// Filter value to edit, or - to read stdin
        css: String,

        /// Indexes of the filters (e.g. 1 3 or 2-4)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// Set the value of a filter
    Set {
        /// Filter value to edit, or - to read stdin
        css: String,

        /// Index of the filter
        index: String,

        /// New value (e.g. 4px, 30%, "1px 1px red")
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Move a filter to another position
    #[command(alias = "mv")]
    Move {
        /// Filter value to edit, or - to read stdin
        css: String,

        /// Index of the filter to move
        index: String,

        /// Destination index
        position: String,
    },

    /// Reorder a filter by a vertical drag distance in pixels
    Drag {
        /// Filter value to edit, or - to read stdin
        css: String,

        /// Index of the filter to drag
        index: String,

        /// Pixels dragged (negative is up)
        #[arg(allow_negative_numbers = true)]
        pixels: f64,
    },

    /// Adjust a numeric filter by a horizontal drag distance in pixels
    Nudge {
        /// Filter value to edit, or - to read stdin
        css: String,

        /// Index of the filter to adjust
        index: String,

        /// Pixels dragged (negative decreases)
        #[arg(allow_negative_numbers = true)]
        pixels: f64,

        /// Use the slow multiplier
        #[arg(long, conflicts_with = "fast")]
        slow: bool,

        /// Use the fast multiplier
        #[arg(long)]
        fast: bool,
    },

    /// List the known filter kinds
    Kinds,

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., row-height)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
