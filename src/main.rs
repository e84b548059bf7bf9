use std::path::{ Path, PathBuf };

use clap::Parser;
use env_logger::Env;
use log::{ info, warn };

use oktogen::cli::{ Cli, Command, GenerateArgs };
use oktogen::password::PasswordGenerator;
use oktogen::settings::Settings;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let settings_path = match settings_path(&cli) {
        Ok(path) => path,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let result = match (&cli.command, cli.generate_args()) {
        (Some(Command::Reset), _) => reset(&settings_path),
        (Some(Command::Defaults), _) => show_defaults(&settings_path),
        (_, Some(args)) => generate(&args, &settings_path),
        (_, None) => Ok(()),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    env_logger::Builder::from_env(Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn settings_path(cli: &Cli) -> Result<PathBuf, oktogen::errors::SettingsError> {
    match &cli.config {
        Some(path) => Ok(path.clone()),
        None => Settings::default_path(),
    }
}

fn generate(args: &GenerateArgs, settings_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let mut settings = Settings::load(settings_path)?;
    let config = args.resolve(&settings.defaults);

    let password = PasswordGenerator::generate(&config)?;

    if args.save_defaults {
        settings.defaults = config;
        settings.save(settings_path)?;
    }

    if args.copy {
        copy_to_clipboard(&password);
    }

    println!("{}", password);

    Ok(())
}

fn copy_to_clipboard(password: &str) {
    let Some(mut ctx) = copypasta_ext::try_context() else {
        warn!("No clipboard available, password not copied");
        return;
    };

    match ctx.set_contents(password.to_string()) {
        Ok(()) => info!("Password copied to clipboard"),
        Err(e) => warn!("Could not copy password to clipboard: {}", e),
    }
}

fn reset(settings_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    Settings::reset(settings_path)?;
    println!("Defaults restored in {}", settings_path.display());

    Ok(())
}

fn show_defaults(settings_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::load(settings_path)?;
    println!("{}", settings.defaults_json()?);

    Ok(())
}
