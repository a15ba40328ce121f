use crate::config::Config;
use crate::error::Error;
use crate::prompt::Prompter;

pub struct Setup;

impl Setup {
    pub fn handle(prompter: &mut dyn Prompter) -> Result<(), Error> {
        let config = Config::reconfigure(prompter)?;
        println!("Configuration saved for {}", config.github.username);

        Ok(())
    }
}
