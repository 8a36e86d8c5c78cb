use std::env;
use std::io;

use tunetree::config::Settings;
use tunetree::logging;
use tunetree::shell::Session;

fn load_settings() -> Settings {
    match Settings::load() {
        Ok(s) => {
            if let Err(msg) = s.validate() {
                eprintln!("tunetree: invalid config, using defaults: {msg}");
                Settings::default()
            } else {
                s
            }
        }
        Err(e) => {
            // Config is optional; failures should not prevent the shell from starting.
            eprintln!("tunetree: failed to load config, using defaults: {e}");
            Settings::default()
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if env::args().nth(1).as_deref() == Some("--default-config") {
        print!("{}", Settings::default().to_toml()?);
        return Ok(());
    }

    let settings = load_settings();
    logging::init(&settings.logging);

    let mut session = Session::new(settings);
    session.run(io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}
