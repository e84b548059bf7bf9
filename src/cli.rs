use crate::password::GenerationConfig;

use std::path::PathBuf;

use clap::{ Args, Parser, Subcommand };

#[derive(Debug, Parser)]
#[command(name = "oktogen", version, about = "Random password generator")]
pub struct Cli {
    /// Settings file holding the default options
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub generate: GenerateArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a password (default)
    Generate(GenerateArgs),
    /// Restore the stored defaults
    Reset,
    /// Print the stored defaults
    Defaults,
}

#[derive(Debug, Default, Clone, Args)]
pub struct GenerateArgs {
    /// Password length (4-16)
    #[arg(short = 'L', long)]
    pub length: Option<usize>,

    #[arg(short = 'l', long, overrides_with = "no_lowercase")]
    pub lowercase: bool,
    #[arg(long, overrides_with = "lowercase")]
    pub no_lowercase: bool,

    #[arg(short = 'u', long, overrides_with = "no_uppercase")]
    pub uppercase: bool,
    #[arg(long, overrides_with = "uppercase")]
    pub no_uppercase: bool,

    #[arg(short = 'n', long, overrides_with = "no_numbers")]
    pub numbers: bool,
    #[arg(long, overrides_with = "numbers")]
    pub no_numbers: bool,

    #[arg(short = 's', long, overrides_with = "no_symbols")]
    pub symbols: bool,
    #[arg(long, overrides_with = "symbols")]
    pub no_symbols: bool,

    /// Copy the password to the clipboard
    #[arg(short = 'c', long)]
    pub copy: bool,

    /// Store these options as the new defaults
    #[arg(long)]
    pub save_defaults: bool,
}

fn toggle(on: bool, off: bool, default: bool) -> bool {
    match (on, off) {
        (true, _) => true,
        (_, true) => false,
        _ => default,
    }
}

impl Cli {
    /// Generate options for the invocation, or `None` for `reset`/`defaults`.
    ///
    /// Flags given before `generate` are kept; the subcommand's own flags win.
    pub fn generate_args(&self) -> Option<GenerateArgs> {
        match &self.command {
            Some(Command::Generate(args)) => Some(args.layered_over(&self.generate)),
            Some(_) => None,
            None => Some(self.generate.clone()),
        }
    }
}

fn pick_toggle(on: bool, off: bool, base_on: bool, base_off: bool) -> (bool, bool) {
    if on || off { (on, off) } else { (base_on, base_off) }
}

impl GenerateArgs {
    fn layered_over(&self, base: &GenerateArgs) -> GenerateArgs {
        let (lowercase, no_lowercase) =
            pick_toggle(self.lowercase, self.no_lowercase, base.lowercase, base.no_lowercase);
        let (uppercase, no_uppercase) =
            pick_toggle(self.uppercase, self.no_uppercase, base.uppercase, base.no_uppercase);
        let (numbers, no_numbers) =
            pick_toggle(self.numbers, self.no_numbers, base.numbers, base.no_numbers);
        let (symbols, no_symbols) =
            pick_toggle(self.symbols, self.no_symbols, base.symbols, base.no_symbols);

        GenerateArgs {
            length: self.length.or(base.length),
            lowercase,
            no_lowercase,
            uppercase,
            no_uppercase,
            numbers,
            no_numbers,
            symbols,
            no_symbols,
            copy: self.copy || base.copy,
            save_defaults: self.save_defaults || base.save_defaults,
        }
    }

    /// Layers the command-line flags over `defaults`.
    pub fn resolve(&self, defaults: &GenerationConfig) -> GenerationConfig {
        GenerationConfig {
            length: self.length.unwrap_or(defaults.length),
            include_lowercase: toggle(self.lowercase, self.no_lowercase, defaults.include_lowercase),
            include_uppercase: toggle(self.uppercase, self.no_uppercase, defaults.include_uppercase),
            include_numbers: toggle(self.numbers, self.no_numbers, defaults.include_numbers),
            include_symbols: toggle(self.symbols, self.no_symbols, defaults.include_symbols),
        }
    }
}
